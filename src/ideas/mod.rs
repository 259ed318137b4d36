pub mod prompt;
pub mod response;

use std::time::Duration;

use serde_json::Value;

use crate::config::{Config, GenerationConfig};
use crate::error::GenerationError;
use crate::submission::transport::build_client;

pub use response::GeneratedIdea;

/// Drafts a talk title and abstract from a topic via the generation service.
#[derive(Clone)]
pub struct IdeaGenerationClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl IdeaGenerationClient {
    pub fn new(config: &GenerationConfig, timeout: Option<Duration>) -> Result<Self, String> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, String> {
        Self::new(&config.generation, config.http_timeout)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    pub async fn generate(&self, topic: &str) -> Result<GeneratedIdea, GenerationError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("Generation API key is not configured; idea generation unavailable");
            return Err(GenerationError::Configuration(
                "GENESIS_GENERATION_API_KEY is not set".to_string(),
            ));
        };

        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GenerationError::EmptyTopic);
        }

        tracing::debug!(model = %self.model, "Requesting talk idea");

        let resp = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key)
            .json(&prompt::build_request_body(topic))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Generation request failed: {e}");
                GenerationError::Network(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string())
                .chars()
                .take(1024)
                .collect::<String>();
            tracing::error!("Generation service returned {status}: {message}");
            return Err(GenerationError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = resp.json().await.map_err(|e| {
            GenerationError::MalformedResponse(format!("unreadable service response: {e}"))
        })?;

        let idea = response::extract_text(&body).and_then(|text| response::parse_idea(&text));
        if let Err(e) = &idea {
            tracing::error!("Error generating idea: {e}");
        }
        idea
    }
}
