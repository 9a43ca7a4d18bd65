//! Request and response payloads of the siteverify wire protocol.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Data sent to the verification endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// Secret key for the verify API.
    pub secret: String,

    /// Challenge response token collected from the client.
    pub response: String,

    /// The client's IP address. An empty value is left out of the payload
    /// entirely, so the endpoint performs no IP validation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub remoteip: String,
}

/// Data returned by the verification endpoint.
///
/// Each provider fills a different subset of these fields; anything the
/// endpoint leaves out deserializes to its default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VerifyResponse {
    /// True iff the token validated. Returned by every provider.
    pub success: bool,

    /// reCAPTCHA v3 bot-likelihood score between 0 (bot) and 1 (human).
    /// Google suggests 0.5 as a sensible threshold. Not populated by
    /// reCAPTCHA v2 or Turnstile.
    pub score: f32,

    /// Time the challenge was solved, ISO 8601. See [`Self::challenge_time`].
    pub challenge_ts: String,

    /// Action name the client declared for this challenge. Provided by
    /// Turnstile and reCAPTCHA v3, not by v2. Worth checking so a token
    /// solved for one operation cannot be replayed against another.
    pub action: String,

    /// Hostname of the site the captcha was solved on, for web challenges.
    pub hostname: String,

    /// Package name of the app the captcha was solved in, for Android
    /// challenges.
    pub apk_package_name: String,

    /// Error codes reported by the endpoint. The documented vocabulary is
    /// exported in [`crate::error_codes`].
    #[serde(rename = "error-codes")]
    pub error_codes: Vec<String>,

    /// Customer data passed on the client side. Turnstile only.
    pub cdata: String,
}

impl VerifyResponse {
    /// `challenge_ts` parsed as RFC 3339.
    pub fn challenge_time(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.challenge_ts)
    }

    /// True when the endpoint reported the given error code.
    pub fn has_error_code(&self, code: &str) -> bool {
        self.error_codes.iter().any(|reported| reported == code)
    }
}
