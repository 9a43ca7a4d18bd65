//! Verification endpoint addresses.
//!
//! An [`Endpoint`] is a validated URL for a siteverify-compatible service.
//! Well-known constructors cover Google reCAPTCHA and Cloudflare Turnstile;
//! anything else goes through [`Endpoint::parse`].

use std::fmt;
use std::str::FromStr;

use url::Url;

/// Google reCAPTCHA siteverify URL, shared by v2 (checkbox and invisible) and
/// v3. See <https://developers.google.com/recaptcha/docs/verify>.
pub const GOOGLE_RECAPTCHA_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Cloudflare Turnstile siteverify URL. See
/// <https://developers.cloudflare.com/turnstile/get-started/server-side-validation/>.
pub const CLOUDFLARE_TURNSTILE_URL: &str =
    "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// Address of a captcha verification service.
///
/// The URL is validated at construction, so a verifier built from an
/// `Endpoint` never fails on URL parsing at request time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Google reCAPTCHA endpoint for v2 (checkbox and invisible) and v3.
    pub fn google_recaptcha() -> Self {
        Self(Url::parse(GOOGLE_RECAPTCHA_URL).expect("well-known endpoint url"))
    }

    /// Cloudflare Turnstile endpoint.
    pub fn cloudflare_turnstile() -> Self {
        Self(Url::parse(CLOUDFLARE_TURNSTILE_URL).expect("well-known endpoint url"))
    }

    /// Use a custom verification service speaking the siteverify protocol.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(Self)
    }

    /// The endpoint URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// The endpoint URL as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Url> for Endpoint {
    fn from(url: Url) -> Self {
        Self(url)
    }
}

impl FromStr for Endpoint {
    type Err = url::ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl TryFrom<&str> for Endpoint {
    type Error = url::ParseError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::parse(input)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
