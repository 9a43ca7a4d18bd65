//! HTTP transport abstraction used to reach verification endpoints.
//!
//! The verifier needs exactly one capability from its HTTP stack: POST a JSON
//! body and report back the status code and body bytes. Hiding that behind a
//! trait keeps test doubles and alternate transport configurations (timeouts,
//! proxying, mutual TLS) out of the verification logic.

mod reqwest_client;

pub use reqwest_client::ReqwestVerifyHttpClient;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Contract that abstracts the HTTP transport behind verification calls.
///
/// Implementations must be safe to share across concurrent verification
/// calls; the verifier itself holds no locks.
#[async_trait]
pub trait VerifyHttpClient: Send + Sync {
    /// Perform a single POST with an `application/json` body, returning the
    /// response status and raw body.
    async fn post_json(
        &self,
        url: &Url,
        body: Vec<u8>,
    ) -> Result<VerifyHttpResponse, VerifyHttpClientError>;
}

/// Minimal response representation returned by the transport abstraction.
#[derive(Debug, Clone)]
pub struct VerifyHttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Errors surfaced by transport implementations.
///
/// The underlying cause is kept as the error source so callers can inspect
/// it through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum VerifyHttpClientError {
    #[error("http transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}
