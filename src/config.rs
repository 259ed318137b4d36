use std::time::Duration;

pub const DEFAULT_GENERATION_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone)]
pub struct Config {
    /// Spreadsheet collection endpoint. `None` leaves form submission unconfigured.
    pub collection_url: Option<String>,
    pub generation: GenerationConfig,
    pub submission_mode: SubmissionMode,
    pub http_timeout: Option<Duration>,
    pub log_level: String,
}

#[derive(Clone)]
pub struct GenerationConfig {
    /// `None` leaves idea generation unconfigured.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

/// How the collection endpoint's reply is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionMode {
    /// Dispatch and treat the reply as non-inspectable. Any reply that arrives counts as success.
    #[default]
    Opaque,
    /// Follow redirects and require a 2xx final status.
    FollowRedirects,
}

impl SubmissionMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "opaque" => Some(SubmissionMode::Opaque),
            "follow" => Some(SubmissionMode::FollowRedirects),
            _ => None,
        }
    }
}

impl Config {
    /// Load `.env` if present, then resolve from the process environment.
    pub fn load() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let collection_url = var("GENESIS_COLLECTION_URL");

        let generation = GenerationConfig {
            api_key: var("GENESIS_GENERATION_API_KEY"),
            base_url: var("GENESIS_GENERATION_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GENERATION_BASE_URL.to_string()),
            model: var("GENESIS_GENERATION_MODEL")
                .unwrap_or_else(|| DEFAULT_GENERATION_MODEL.to_string()),
        };

        let submission_mode = match var("GENESIS_SUBMISSION_MODE") {
            Some(mode) => SubmissionMode::parse(&mode)
                .ok_or_else(|| format!("Invalid GENESIS_SUBMISSION_MODE: {mode}"))?,
            None => SubmissionMode::default(),
        };

        let http_timeout = var("GENESIS_HTTP_TIMEOUT_SECS")
            .map(|s| {
                s.parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|e| format!("Invalid GENESIS_HTTP_TIMEOUT_SECS: {e}"))
            })
            .transpose()?;

        let log_level = var("GENESIS_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Config {
            collection_url,
            generation,
            submission_mode,
            http_timeout,
            log_level,
        })
    }
}

impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("collection_url", &self.collection_url)
            .field("generation", &self.generation)
            .field("submission_mode", &self.submission_mode)
            .field("http_timeout", &self.http_timeout)
            .field("log_level", &self.log_level)
            .finish()
    }
}
