use std::path::PathBuf;
use swagprobe_scanner::ScanError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    /// The input table has no column with the required name. Raised before
    /// any request goes out.
    #[error("The input file must have a column named '{0}'")]
    MissingColumn(String),

    #[error("Failed to open input file {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Scanner(#[from] ScanError),
}

impl CheckError {
    /// Configuration problems stop the run before anything is probed.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CheckError::MissingColumn(_))
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
