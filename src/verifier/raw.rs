//! Direct access to the verification endpoint.

use std::sync::Arc;

use log::{debug, trace};
use thiserror::Error;

use crate::endpoint::Endpoint;
use crate::transport::{ReqwestVerifyHttpClient, VerifyHttpClient, VerifyHttpClientError};

use super::types::{VerifyRequest, VerifyResponse};

/// Result alias used across the verification layer.
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Failure states that can occur while verifying a challenge response.
///
/// A captcha the endpoint rejected is not an error; it arrives as a parsed
/// [`VerifyResponse`] with `success == false`. These variants all mean the
/// verification itself could not be carried out.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The request payload could not be encoded as JSON. Should not happen
    /// for well-formed string inputs.
    #[error("failed to encode verify request: {0}")]
    EncodeRequest(#[source] serde_json::Error),

    /// The endpoint could not be reached or the connection failed mid-flight.
    #[error("failed to reach verify endpoint: {0}")]
    Transport(#[from] VerifyHttpClientError),

    /// The endpoint answered with a status other than 200. The endpoint
    /// malfunctioned or rejected the request shape; it says nothing about the
    /// captcha itself.
    #[error("verify endpoint returned non-200 status: {status}")]
    UnexpectedStatus { status: u16 },

    /// The endpoint answered 200 but the body did not parse as a verify
    /// response.
    #[error("failed to parse verify response: {0}")]
    ParseResponse(#[source] serde_json::Error),
}

/// Client for verifying captcha challenge responses against any
/// siteverify-compatible endpoint, including Cloudflare Turnstile and Google
/// reCAPTCHA v2/v3.
///
/// [`verify`](Self::verify) returns the endpoint's [`VerifyResponse`] as-is,
/// leaving validation to the caller. Use
/// [`SimpleCaptchaVerifier`](super::SimpleCaptchaVerifier) to have the
/// response checked against expected values instead.
pub struct CaptchaVerifier {
    client: Arc<dyn VerifyHttpClient>,
    endpoint: Endpoint,
    secret: String,
}

impl CaptchaVerifier {
    /// Creates a verifier with the default reqwest transport.
    pub fn new(endpoint: Endpoint, secret: impl Into<String>) -> Self {
        Self {
            client: Arc::new(ReqwestVerifyHttpClient::default()),
            endpoint,
            secret: secret.into(),
        }
    }

    /// Replaces the transport, e.g. with a reqwest client configured for
    /// timeouts or proxying, or a test double.
    pub fn with_http_client(mut self, client: Arc<dyn VerifyHttpClient>) -> Self {
        self.client = client;
        self
    }

    /// Endpoint this verifier posts to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Verify a challenge response, optionally validating the client IP.
    ///
    /// Leave `remote_ip` empty to skip IP validation; the field is then
    /// omitted from the request payload.
    pub async fn verify(
        &self,
        client_response: &str,
        remote_ip: &str,
    ) -> VerifyResult<VerifyResponse> {
        VerifyRequest {
            secret: self.secret.clone(),
            response: client_response.to_owned(),
            remoteip: remote_ip.to_owned(),
        }
        .dispatch(self.client.as_ref(), &self.endpoint)
        .await
    }
}

impl VerifyRequest {
    /// Send this request to `endpoint` through `client` and parse the reply.
    ///
    /// Most callers want [`CaptchaVerifier::verify`] or
    /// [`SimpleCaptchaVerifier::verify`](super::SimpleCaptchaVerifier::verify)
    /// instead.
    pub async fn dispatch(
        &self,
        client: &dyn VerifyHttpClient,
        endpoint: &Endpoint,
    ) -> VerifyResult<VerifyResponse> {
        let body = serde_json::to_vec(self).map_err(VerifyError::EncodeRequest)?;

        debug!("posting verify request to {endpoint}");
        let response = client.post_json(endpoint.as_url(), body).await?;
        trace!("verify endpoint answered with status {}", response.status);

        if response.status != 200 {
            return Err(VerifyError::UnexpectedStatus {
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(VerifyError::ParseResponse)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use url::Url;

    use crate::transport::VerifyHttpResponse;

    use super::*;

    struct StubClient {
        responses: Mutex<Vec<VerifyHttpResponse>>,
    }

    impl StubClient {
        fn new(responses: Vec<VerifyHttpResponse>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().rev().collect()),
            }
        }

        fn with_body(status: u16, body: &str) -> Self {
            Self::new(vec![VerifyHttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }])
        }

        fn pop_response(&self) -> VerifyHttpResponse {
            self.responses
                .lock()
                .unwrap()
                .pop()
                .expect("no more stub responses")
        }
    }

    #[async_trait]
    impl VerifyHttpClient for StubClient {
        async fn post_json(
            &self,
            _url: &Url,
            _body: Vec<u8>,
        ) -> Result<VerifyHttpResponse, VerifyHttpClientError> {
            Ok(self.pop_response())
        }
    }

    struct RecordingClient {
        bodies: Mutex<Vec<Vec<u8>>>,
    }

    #[async_trait]
    impl VerifyHttpClient for RecordingClient {
        async fn post_json(
            &self,
            _url: &Url,
            body: Vec<u8>,
        ) -> Result<VerifyHttpResponse, VerifyHttpClientError> {
            self.bodies.lock().unwrap().push(body);
            Ok(VerifyHttpResponse {
                status: 200,
                body: br#"{"success": true}"#.to_vec(),
            })
        }
    }

    struct FailingClient;

    #[async_trait]
    impl VerifyHttpClient for FailingClient {
        async fn post_json(
            &self,
            _url: &Url,
            _body: Vec<u8>,
        ) -> Result<VerifyHttpResponse, VerifyHttpClientError> {
            Err(VerifyHttpClientError::Transport(
                "connection refused".into(),
            ))
        }
    }

    fn verifier_with(client: impl VerifyHttpClient + 'static) -> CaptchaVerifier {
        CaptchaVerifier::new(Endpoint::cloudflare_turnstile(), "secret")
            .with_http_client(Arc::new(client))
    }

    #[tokio::test]
    async fn parses_successful_response() {
        let verifier = verifier_with(StubClient::with_body(
            200,
            r#"{"success": true, "hostname": "example.com", "score": 0.9}"#,
        ));

        let response = verifier.verify("token", "").await.unwrap();
        assert!(response.success);
        assert_eq!(response.hostname, "example.com");
        assert_eq!(response.score, 0.9);
    }

    #[tokio::test]
    async fn sends_secret_token_and_remote_ip() {
        let client = Arc::new(RecordingClient {
            bodies: Mutex::new(Vec::new()),
        });
        let verifier = CaptchaVerifier::new(Endpoint::google_recaptcha(), "secret")
            .with_http_client(client.clone());

        verifier.verify("token", "203.0.113.7").await.unwrap();

        let bodies = client.bodies.lock().unwrap();
        let sent: VerifyRequest = serde_json::from_slice(&bodies[0]).unwrap();
        assert_eq!(sent.secret, "secret");
        assert_eq!(sent.response, "token");
        assert_eq!(sent.remoteip, "203.0.113.7");
    }

    #[tokio::test]
    async fn non_200_status_is_a_distinct_error() {
        let verifier = verifier_with(StubClient::with_body(503, "service unavailable"));

        let err = verifier.verify("token", "").await.unwrap_err();
        match err {
            VerifyError::UnexpectedStatus { status } => assert_eq!(status, 503),
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let verifier = verifier_with(StubClient::with_body(200, "<html>not json</html>"));

        let err = verifier.verify("token", "").await.unwrap_err();
        assert!(matches!(err, VerifyError::ParseResponse(_)));
        assert!(err.source().is_some());
    }

    #[tokio::test]
    async fn transport_failure_keeps_its_cause() {
        let verifier = verifier_with(FailingClient);

        let err = verifier.verify("token", "").await.unwrap_err();
        match &err {
            VerifyError::Transport(cause) => {
                assert!(cause.to_string().contains("connection refused"));
            }
            other => panic!("expected Transport, got {other:?}"),
        }
        assert!(err.source().is_some());
    }

    #[tokio::test]
    async fn identical_responses_verify_identically() {
        let body = r#"{"success": true, "hostname": "example.com"}"#;
        let verifier = verifier_with(StubClient::new(vec![
            VerifyHttpResponse {
                status: 200,
                body: body.as_bytes().to_vec(),
            },
            VerifyHttpResponse {
                status: 200,
                body: body.as_bytes().to_vec(),
            },
        ]));

        let first = verifier.verify("token", "").await.unwrap();
        let second = verifier.verify("token", "").await.unwrap();
        assert_eq!(first, second);
    }
}
