use serde::{Deserialize, Serialize};
use std::fmt;

/// What came back from a single GET.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    /// A response was received, whatever its status.
    Code(u16),
    /// The request never produced a response (DNS, connect, TLS, timeout, bad URL).
    Failed(String),
}

impl ProbeStatus {
    pub fn code(&self) -> Option<u16> {
        match self {
            ProbeStatus::Code(code) => Some(*code),
            ProbeStatus::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProbeStatus::Failed(_))
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Code(code) => write!(f, "{}", code),
            ProbeStatus::Failed(message) => write!(f, "Error: {}", message),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeOutcome {
    pub url: String,
    pub status: ProbeStatus,
    pub swagger_ui: bool,
}

impl ProbeOutcome {
    pub fn new(url: String, status_code: u16) -> Self {
        Self {
            url,
            status: ProbeStatus::Code(status_code),
            swagger_ui: false,
        }
    }

    pub fn with_error(url: String, error: String) -> Self {
        Self {
            url,
            status: ProbeStatus::Failed(error),
            swagger_ui: false,
        }
    }
}
