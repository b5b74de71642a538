use serde::{Deserialize, Serialize};
use swagprobe_scanner::{ProbeOutcome, ProbeStatus};

/// Output table columns, in order.
pub const RESULT_COLUMNS: [&str; 7] = [
    "URL",
    "Domain",
    "Swagger Path",
    "Full URL",
    "Status Code",
    "Swagger Enabled",
    "DOM Confirmation",
];

/// One row of the result table: an input URL probed at one candidate path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeRecord {
    pub url: String,
    pub domain: String,
    pub swagger_path: String,
    pub full_url: String,
    pub status: ProbeStatus,
    pub swagger_enabled: bool,
    pub dom_confirmation: bool,
}

impl ProbeRecord {
    pub fn from_outcome(url: &str, domain: &str, swagger_path: &str, outcome: ProbeOutcome) -> Self {
        Self {
            url: url.to_string(),
            domain: domain.to_string(),
            swagger_path: swagger_path.to_string(),
            full_url: outcome.url,
            status: outcome.status,
            // Both flags come from the same DOM check
            swagger_enabled: outcome.swagger_ui,
            dom_confirmation: outcome.swagger_ui,
        }
    }

    /// Render the record as a table row, matching `RESULT_COLUMNS`.
    pub fn to_row(&self) -> [String; 7] {
        [
            self.url.clone(),
            self.domain.clone(),
            self.swagger_path.clone(),
            self.full_url.clone(),
            self.status.to_string(),
            yes_no(self.swagger_enabled).to_string(),
            yes_no(self.dom_confirmation).to_string(),
        ]
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
