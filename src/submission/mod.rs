pub mod fields;
pub mod payload;
pub mod transport;

use std::sync::Arc;

use crate::config::Config;
use crate::error::SubmissionError;

use payload::SubmissionPayload;
use transport::{HttpTransport, Transport, TransportResponse};

/// Relays form payloads to the spreadsheet collection endpoint.
///
/// Stateless: every call makes at most one attempt, with no retry and no
/// deduplication. Two identical submits produce two rows.
#[derive(Clone)]
pub struct SubmissionGateway {
    endpoint: Option<String>,
    transport: Arc<dyn Transport>,
}

impl SubmissionGateway {
    pub fn new(endpoint: Option<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: endpoint.filter(|url| !url.trim().is_empty()),
            transport,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, String> {
        let transport = HttpTransport::new(config.submission_mode, config.http_timeout)?;
        Ok(Self::new(config.collection_url.clone(), Arc::new(transport)))
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    pub async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        let Some(url) = self.endpoint.as_deref() else {
            tracing::warn!("Collection endpoint is not configured; submission not sent");
            return Err(SubmissionError::Configuration(
                "GENESIS_COLLECTION_URL is not set".to_string(),
            ));
        };

        tracing::debug!(
            form_type = payload.get("formType").unwrap_or("unknown"),
            fields = payload.len(),
            "Dispatching submission"
        );

        let response = self.transport.post_json(url, payload).await.map_err(|e| {
            tracing::error!("Submission transport failure: {e}");
            SubmissionError::Network(e)
        })?;

        match response {
            TransportResponse::Opaque => Ok(()),
            TransportResponse::Status(status) if (200..300).contains(&status) => Ok(()),
            TransportResponse::Status(status) => {
                tracing::error!("Collection endpoint rejected submission with status {status}");
                Err(SubmissionError::Rejected { status })
            }
        }
    }
}
