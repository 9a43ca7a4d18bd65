//! Reqwest-based implementation of the `VerifyHttpClient` trait.
//!
//! Provides a thin adapter around `reqwest::Client` so the default experience
//! works out of the box while callers remain free to bring a client with their
//! own timeouts, TLS settings, or proxies.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use super::{VerifyHttpClient, VerifyHttpClientError, VerifyHttpResponse};

/// Reqwest-backed HTTP client used for verification calls.
pub struct ReqwestVerifyHttpClient {
    client: Client,
}

impl ReqwestVerifyHttpClient {
    /// Creates a new client with reqwest defaults. No timeout is set; callers
    /// that need one should configure their own client and use
    /// [`from_client`](Self::from_client).
    pub fn new() -> Result<Self, VerifyHttpClientError> {
        let client = Client::builder()
            .build()
            .map_err(|err| VerifyHttpClientError::Transport(Box::new(err)))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client. Connection pooling, timeouts, TLS, and
    /// proxying are whatever the wrapped client was built with.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestVerifyHttpClient {
    fn default() -> Self {
        Self::new().expect("failed to create reqwest verify client")
    }
}

#[async_trait]
impl VerifyHttpClient for ReqwestVerifyHttpClient {
    async fn post_json(
        &self,
        url: &Url,
        body: Vec<u8>,
    ) -> Result<VerifyHttpResponse, VerifyHttpClientError> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| VerifyHttpClientError::Transport(Box::new(err)))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| VerifyHttpClientError::Transport(Box::new(err)))?
            .to_vec();

        Ok(VerifyHttpResponse { status, body })
    }
}
