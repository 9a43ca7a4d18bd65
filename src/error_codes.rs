//! Error codes returned by verification endpoints.
//!
//! These are the server-reported strings carried in
//! [`VerifyResponse::error_codes`](crate::VerifyResponse::error_codes), not
//! local failures. Both Google and Cloudflare document them:
//! <https://developers.google.com/recaptcha/docs/verify#error_code_reference>
//! and
//! <https://developers.cloudflare.com/turnstile/get-started/server-side-validation/#error-codes>.

/// The secret parameter was not passed.
pub const MISSING_INPUT_SECRET: &str = "missing-input-secret";

/// The secret parameter was invalid or did not exist.
pub const INVALID_INPUT_SECRET: &str = "invalid-input-secret";

/// The response parameter was not passed.
pub const MISSING_INPUT_RESPONSE: &str = "missing-input-response";

/// The response parameter was invalid or malformed.
pub const INVALID_INPUT_RESPONSE: &str = "invalid-input-response";

/// The request itself was malformed.
pub const BAD_REQUEST: &str = "bad-request";

/// The response is too old or has already been redeemed.
pub const TIMEOUT_OR_DUPLICATE: &str = "timeout-or-duplicate";

/// An internal error happened while validating the response. The request can
/// be retried.
pub const INTERNAL_ERROR: &str = "internal-error";
