use std::sync::Arc;

use crate::config::Config;
use crate::ideas::IdeaGenerationClient;
use crate::submission::SubmissionGateway;

pub type SharedState = Arc<AppState>;

/// Process-wide services, built once at startup. Nothing in here is mutated afterwards.
pub struct AppState {
    pub config: Config,
    pub gateway: SubmissionGateway,
    pub ideas: IdeaGenerationClient,
}
