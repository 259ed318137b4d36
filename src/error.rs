/// Where a failure originated, for callers deciding how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required deployment setting is missing. Detected before any I/O.
    Configuration,
    /// Transport-level failure: DNS, timeout, reset.
    Network,
    /// The remote service was reached but reported failure or returned garbage.
    Remote,
    /// Rejected locally before any I/O.
    InvalidInput,
}

const UNAVAILABLE: &str = "This service is currently unavailable. Please try again later.";
const UNREACHABLE: &str =
    "We couldn't reach the service. Please check your connection and try again.";

#[derive(Debug)]
pub enum SubmissionError {
    Configuration(String),
    Network(String),
    Rejected { status: u16 },
}

impl SubmissionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmissionError::Configuration(_) => ErrorKind::Configuration,
            SubmissionError::Network(_) => ErrorKind::Network,
            SubmissionError::Rejected { .. } => ErrorKind::Remote,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionError::Rejected { status } => Some(*status),
            _ => None,
        }
    }

    /// Text safe to show an end user. Details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::Configuration(_) => UNAVAILABLE,
            SubmissionError::Network(_) => UNREACHABLE,
            SubmissionError::Rejected { .. } => {
                "Sorry, there was an issue with your submission. Please try again later."
            }
        }
    }
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::Configuration(msg) => write!(f, "Configuration Error: {msg}"),
            SubmissionError::Network(msg) => write!(f, "Network Error: {msg}"),
            SubmissionError::Rejected { status } => {
                write!(f, "Submission failed with status: {status}")
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

#[derive(Debug)]
pub enum GenerationError {
    Configuration(String),
    EmptyTopic,
    Network(String),
    Service { status: u16, message: String },
    MalformedResponse(String),
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Configuration(_) => ErrorKind::Configuration,
            GenerationError::Network(_) => ErrorKind::Network,
            GenerationError::EmptyTopic => ErrorKind::InvalidInput,
            GenerationError::Service { .. } | GenerationError::MalformedResponse(_) => {
                ErrorKind::Remote
            }
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::EmptyTopic => "Please enter a topic.",
            GenerationError::Configuration(_) => UNAVAILABLE,
            GenerationError::Network(_) => UNREACHABLE,
            GenerationError::Service { .. } | GenerationError::MalformedResponse(_) => {
                "Failed to generate an idea. Please try again."
            }
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Configuration(msg) => write!(f, "Configuration Error: {msg}"),
            GenerationError::EmptyTopic => write!(f, "Topic is empty"),
            GenerationError::Network(msg) => write!(f, "Network Error: {msg}"),
            GenerationError::Service { status, message } => {
                write!(f, "Generation service returned error {status}: {message}")
            }
            GenerationError::MalformedResponse(detail) => {
                write!(f, "malformed response: {detail}")
            }
        }
    }
}

impl std::error::Error for GenerationError {}
