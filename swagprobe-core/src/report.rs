// Result table serialization and console summary

use crate::error::{CheckError, Result};
use crate::model::{ProbeRecord, RESULT_COLUMNS};
use chrono::Utc;
use csv::Writer;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{}' (expected csv or json)", other)),
        }
    }
}

/// JSON document written by `OutputFormat::Json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    pub generated_at: String,
    pub total_probes: usize,
    pub exposed: usize,
    pub results: Vec<ProbeRecord>,
}

impl ProbeReport {
    pub fn new(records: &[ProbeRecord]) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            total_probes: records.len(),
            exposed: records.iter().filter(|r| r.swagger_enabled).count(),
            results: records.to_vec(),
        }
    }
}

/// Write the result table as CSV: a header row then one row per record.
pub fn write_csv<W: Write>(writer: W, records: &[ProbeRecord]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(RESULT_COLUMNS)?;
    for record in records {
        wtr.write_record(record.to_row())?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut writer: W, records: &[ProbeRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &ProbeReport::new(records))?;
    writeln!(writer)?;
    Ok(())
}

/// Write all records to `path` in one go, replacing whatever was there.
pub fn save_results(records: &[ProbeRecord], path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path).map_err(|source| CheckError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        OutputFormat::Csv => write_csv(file, records),
        OutputFormat::Json => write_json(file, records),
    }
}

/// Generate a plain-text summary of a run
pub fn generate_summary(records: &[ProbeRecord]) -> String {
    let exposed: Vec<&ProbeRecord> = records.iter().filter(|r| r.swagger_enabled).collect();
    let failed = records.iter().filter(|r| r.status.is_failed()).count();

    let mut urls: Vec<&str> = records.iter().map(|r| r.url.as_str()).collect();
    urls.dedup();

    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  URLs checked: {}\n", urls.len()));
    report.push_str(&format!("  Probes sent: {}\n", records.len()));
    report.push_str(&format!("  Failed requests: {}\n", failed));
    report.push_str(&format!("  Swagger UI exposed: {}\n", exposed.len()));

    if !exposed.is_empty() {
        report.push_str("\n## Exposed Swagger UI\n");
        for record in exposed {
            report.push_str(&format!("  [{}] {}\n", record.status, record.full_url));
        }
    }

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report
}
