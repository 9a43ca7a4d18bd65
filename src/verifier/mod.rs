//! Captcha verification layers.
//!
//! [`CaptchaVerifier`] gives direct access to the endpoint's
//! [`VerifyResponse`]; [`SimpleCaptchaVerifier`] wraps it with expected values
//! and reduces the answer to a boolean.

mod policy;
mod raw;
mod types;

pub use policy::{SimpleCaptchaVerifier, SimpleCaptchaVerifierBuilder, VerifyExpectations};
pub use raw::{CaptchaVerifier, VerifyError, VerifyResult};
pub use types::{VerifyRequest, VerifyResponse};
