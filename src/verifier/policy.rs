//! Policy layer reducing verify responses to a boolean.

use std::sync::Arc;

use crate::endpoint::Endpoint;
use crate::transport::VerifyHttpClient;

use super::raw::{CaptchaVerifier, VerifyResult};
use super::types::VerifyResponse;

/// Expected response values enforced by [`SimpleCaptchaVerifier`].
///
/// Constructed once and treated as read-only configuration; every check is a
/// pure read of the response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerifyExpectations {
    /// Minimum allowed `score`. Leave at 0.0 unless reCAPTCHA v3 is in use;
    /// Google suggests 0.5 as a sensible threshold.
    pub min_score: f32,

    /// Expected `action` value. reCAPTCHA v2 does not report an action; leave
    /// empty there. Can be overridden per call with
    /// [`SimpleCaptchaVerifier::verify_action`].
    pub action: String,

    /// Expected `hostname` value. Leave empty for Android app challenges and
    /// set `apk_package_name` instead.
    pub hostname: String,

    /// Expected `apk_package_name` value. Leave empty for web challenges and
    /// set `hostname` instead.
    pub apk_package_name: String,
}

impl VerifyExpectations {
    /// True when `response` declares success, carries no error codes, meets
    /// the score threshold, and matches every expected identity field.
    pub fn matches(&self, response: &VerifyResponse) -> bool {
        self.matches_action(response, &self.action)
    }

    /// [`matches`](Self::matches) with `expected_action` substituted for the
    /// configured action.
    pub fn matches_action(&self, response: &VerifyResponse, expected_action: &str) -> bool {
        response.success
            && response.error_codes.is_empty()
            && response.score >= self.min_score
            && response.action == expected_action
            && response.hostname == self.hostname
            && response.apk_package_name == self.apk_package_name
    }
}

/// Wraps a [`CaptchaVerifier`] with expected response values so verification
/// reduces to a boolean.
///
/// An `Ok(false)` means the endpoint answered properly but the captcha did
/// not meet policy; an `Err` means verification could not be carried out at
/// all. Callers that need the raw response alongside the boolean can use the
/// `*_with_response` variants.
pub struct SimpleCaptchaVerifier {
    /// Underlying verifier performing the endpoint call.
    pub verifier: CaptchaVerifier,

    /// Values the response is checked against.
    pub expectations: VerifyExpectations,
}

impl SimpleCaptchaVerifier {
    /// Combines a verifier with the expectations to enforce.
    pub fn new(verifier: CaptchaVerifier, expectations: VerifyExpectations) -> Self {
        Self {
            verifier,
            expectations,
        }
    }

    /// Obtain a builder to configure a verifier fluently.
    pub fn builder(
        endpoint: Endpoint,
        secret: impl Into<String>,
    ) -> SimpleCaptchaVerifierBuilder {
        SimpleCaptchaVerifierBuilder::new(endpoint, secret)
    }

    /// Verify a challenge response against the configured expectations,
    /// optionally validating the client IP.
    ///
    /// Leave `remote_ip` empty to skip IP validation.
    pub async fn verify(&self, client_response: &str, remote_ip: &str) -> VerifyResult<bool> {
        self.verify_action(client_response, remote_ip, &self.expectations.action)
            .await
    }

    /// Like [`verify`](Self::verify), but also returns the underlying
    /// [`VerifyResponse`] for inspection.
    pub async fn verify_with_response(
        &self,
        client_response: &str,
        remote_ip: &str,
    ) -> VerifyResult<(VerifyResponse, bool)> {
        self.verify_action_with_response(client_response, remote_ip, &self.expectations.action)
            .await
    }

    /// Verify a challenge response with `expected_action` substituted for the
    /// configured action. All other expectations stay in force.
    pub async fn verify_action(
        &self,
        client_response: &str,
        remote_ip: &str,
        expected_action: &str,
    ) -> VerifyResult<bool> {
        let (_, ok) = self
            .verify_action_with_response(client_response, remote_ip, expected_action)
            .await?;
        Ok(ok)
    }

    /// Like [`verify_action`](Self::verify_action), but also returns the
    /// underlying [`VerifyResponse`] for inspection.
    pub async fn verify_action_with_response(
        &self,
        client_response: &str,
        remote_ip: &str,
        expected_action: &str,
    ) -> VerifyResult<(VerifyResponse, bool)> {
        let response = self.verifier.verify(client_response, remote_ip).await?;
        let ok = self.expectations.matches_action(&response, expected_action);
        Ok((response, ok))
    }
}

/// Fluent builder for [`SimpleCaptchaVerifier`].
pub struct SimpleCaptchaVerifierBuilder {
    endpoint: Endpoint,
    secret: String,
    http_client: Option<Arc<dyn VerifyHttpClient>>,
    expectations: VerifyExpectations,
}

impl SimpleCaptchaVerifierBuilder {
    pub fn new(endpoint: Endpoint, secret: impl Into<String>) -> Self {
        Self {
            endpoint,
            secret: secret.into(),
            http_client: None,
            expectations: VerifyExpectations::default(),
        }
    }

    pub fn with_http_client(mut self, client: Arc<dyn VerifyHttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.expectations.min_score = min_score;
        self
    }

    pub fn with_expected_action(mut self, action: impl Into<String>) -> Self {
        self.expectations.action = action.into();
        self
    }

    pub fn with_expected_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.expectations.hostname = hostname.into();
        self
    }

    pub fn with_expected_apk_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.expectations.apk_package_name = package_name.into();
        self
    }

    pub fn build(self) -> SimpleCaptchaVerifier {
        let mut verifier = CaptchaVerifier::new(self.endpoint, self.secret);
        if let Some(client) = self.http_client {
            verifier = verifier.with_http_client(client);
        }
        SimpleCaptchaVerifier::new(verifier, self.expectations)
    }
}
