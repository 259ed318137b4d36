pub mod config;
pub mod error;
pub mod form;
pub mod ideas;
pub mod state;
pub mod submission;
pub mod telemetry;

use std::sync::Arc;

use crate::config::Config;
use crate::ideas::IdeaGenerationClient;
use crate::state::{AppState, SharedState};
use crate::submission::SubmissionGateway;

/// Build the shared services from resolved configuration.
///
/// Missing settings are not an error here. The affected feature reports a
/// configuration error when used.
pub fn build_state(config: Config) -> Result<SharedState, String> {
    let gateway = SubmissionGateway::from_config(&config)?;
    if gateway.is_configured() {
        tracing::info!(mode = ?config.submission_mode, "Form submission configured");
    } else {
        tracing::warn!("GENESIS_COLLECTION_URL not set; form submissions will be refused");
    }

    let ideas = IdeaGenerationClient::from_config(&config)?;
    if ideas.is_configured() {
        tracing::info!(model = %ideas.model(), "Idea generation configured");
    } else {
        tracing::warn!("GENESIS_GENERATION_API_KEY not set; idea generation calls will fail");
    }

    Ok(Arc::new(AppState {
        config,
        gateway,
        ideas,
    }))
}
