use std::time::Duration;

use async_trait::async_trait;

use crate::config::SubmissionMode;

use super::payload::SubmissionPayload;

/// What the transport could observe about the collection endpoint's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportResponse {
    /// The request went out and a reply arrived, but its status is not inspectable.
    Opaque,
    /// Final status after any redirects.
    Status(u16),
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `payload` as JSON to `url`. `Err` means a transport-level failure.
    async fn post_json(
        &self,
        url: &str,
        payload: &SubmissionPayload,
    ) -> Result<TransportResponse, String>;
}

/// reqwest-backed transport. Redirects are followed in both modes.
pub struct HttpTransport {
    client: reqwest::Client,
    mode: SubmissionMode,
}

impl HttpTransport {
    pub fn new(mode: SubmissionMode, timeout: Option<Duration>) -> Result<Self, String> {
        Ok(Self {
            client: build_client(timeout)?,
            mode,
        })
    }
}

pub(crate) fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, String> {
    let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::limited(10));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {e}"))
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        payload: &SubmissionPayload,
    ) -> Result<TransportResponse, String> {
        let resp = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| format!("Collection request failed: {e}"))?;

        match self.mode {
            // The status is deliberately not read. A receiver that fails server-side
            // after accepting the request is indistinguishable from success.
            SubmissionMode::Opaque => Ok(TransportResponse::Opaque),
            SubmissionMode::FollowRedirects => Ok(TransportResponse::Status(resp.status().as_u16())),
        }
    }
}
