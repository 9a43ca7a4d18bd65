//! # siteverify-rs
//!
//! Server-side verification of captcha challenge responses for Cloudflare
//! Turnstile, Google reCAPTCHA v2 (checkbox and invisible), reCAPTCHA v3, or
//! any custom endpoint speaking the same siteverify protocol.
//!
//! ## Features
//!
//! - One client for Turnstile, reCAPTCHA v2/v3, and custom endpoints
//! - Checks `hostname`/`apk_package_name`, `action`, and the v3 `score`
//! - Exposes the Turnstile `cdata` field
//! - Pluggable HTTP transport for custom timeouts, TLS, and proxying
//! - Errors wrap their cause and name the phase that failed; the crate never
//!   writes logs of its own
//!
//! ## Example
//!
//! For direct access to the endpoint's answer, use [`CaptchaVerifier`] and
//! check the returned [`VerifyResponse`] yourself. For the common case,
//! [`SimpleCaptchaVerifier`] carries expected values and reduces verification
//! to a boolean:
//!
//! ```no_run
//! use siteverify_rs::{Endpoint, SimpleCaptchaVerifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let verifier = SimpleCaptchaVerifier::builder(Endpoint::cloudflare_turnstile(), "secret")
//!         .with_expected_hostname("example.com")
//!         .with_expected_action("login")
//!         .build();
//!
//!     // Empty remote IP skips IP validation.
//!     let human = verifier.verify("token-from-client", "").await?;
//!     println!("verified: {human}");
//!     Ok(())
//! }
//! ```

mod endpoint;

pub mod error_codes;
pub mod transport;
pub mod verifier;

pub use crate::endpoint::{
    CLOUDFLARE_TURNSTILE_URL,
    Endpoint,
    GOOGLE_RECAPTCHA_URL,
};

pub use crate::transport::{
    ReqwestVerifyHttpClient,
    VerifyHttpClient,
    VerifyHttpClientError,
    VerifyHttpResponse,
};

pub use crate::verifier::{
    CaptchaVerifier,
    SimpleCaptchaVerifier,
    SimpleCaptchaVerifierBuilder,
    VerifyError,
    VerifyExpectations,
    VerifyRequest,
    VerifyResponse,
    VerifyResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
