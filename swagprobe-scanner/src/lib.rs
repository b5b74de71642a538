pub mod detect;
pub mod error;
pub mod prober;
pub mod result;

pub use detect::is_swagger_ui;
pub use error::ScanError;
pub use prober::Prober;
pub use result::{ProbeOutcome, ProbeStatus};
