pub mod banner;
pub mod error;
pub mod input;
pub mod model;
pub mod origin;
pub mod report;
pub mod runner;

pub use banner::print_banner;
pub use error::CheckError;
pub use model::ProbeRecord;
pub use origin::CandidatePaths;
pub use report::OutputFormat;
pub use runner::{CheckOptions, check_urls, run, run_check};
