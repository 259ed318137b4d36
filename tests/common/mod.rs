#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use wiremock::MockServer;

use genesis::config::{Config, GenerationConfig, SubmissionMode};
use genesis::submission::payload::{FormKind, Ratings, SubmissionPayload};
use genesis::submission::transport::{Transport, TransportResponse};
use genesis::submission::SubmissionGateway;

pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
pub const TEST_API_KEY: &str = "test-api-key";

/// Config with nothing configured and the default opaque strategy.
pub fn blank_config() -> Config {
    Config {
        collection_url: None,
        generation: GenerationConfig {
            api_key: None,
            base_url: "http://127.0.0.1:1".to_string(),
            model: "gemini-2.5-flash".to_string(),
        },
        submission_mode: SubmissionMode::Opaque,
        http_timeout: None,
        log_level: "warn".to_string(),
    }
}

pub fn collector_config(server: &MockServer, mode: SubmissionMode) -> Config {
    Config {
        collection_url: Some(format!("{}/exec", server.uri())),
        submission_mode: mode,
        ..blank_config()
    }
}

pub fn generator_config(server: &MockServer) -> Config {
    let mut config = blank_config();
    config.generation.api_key = Some(TEST_API_KEY.to_string());
    config.generation.base_url = server.uri();
    config
}

/// A generateContent reply carrying `text` as the single candidate part.
pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}

pub fn contact_payload() -> SubmissionPayload {
    SubmissionPayload::for_form(
        FormKind::Contact,
        [
            ("name", "Asha Rao"),
            ("email", "asha@example.com"),
            ("message", "Is there parking on campus?"),
        ],
        &Ratings::new(),
    )
}

/// Transport double that records every call and replies with a scripted outcome.
pub struct RecordingTransport {
    reply: Result<TransportResponse, String>,
    calls: Mutex<Vec<(String, SubmissionPayload)>>,
}

impl RecordingTransport {
    pub fn replying(reply: Result<TransportResponse, String>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, SubmissionPayload)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post_json(
        &self,
        url: &str,
        payload: &SubmissionPayload,
    ) -> Result<TransportResponse, String> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), payload.clone()));
        self.reply.clone()
    }
}

pub fn gateway_with(
    endpoint: Option<&str>,
    transport: &Arc<RecordingTransport>,
) -> SubmissionGateway {
    SubmissionGateway::new(endpoint.map(str::to_string), transport.clone())
}
