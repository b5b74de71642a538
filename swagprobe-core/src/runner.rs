use crate::error::Result;
use crate::input::{load_urls, read_urls};
use crate::model::ProbeRecord;
use crate::origin::{CandidatePaths, candidate_urls, derive_origin};
use crate::report::{OutputFormat, save_results, write_csv};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use swagprobe_scanner::Prober;
use tracing::info;

/// Options for configuring a check run
pub struct CheckOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub paths: CandidatePaths,
    pub timeout: Option<Duration>,
    pub show_progress_bars: bool,
}

/// Callback for reporting probe progress: (probes done, total probes, url in flight)
pub type ProbeProgressCallback = Arc<dyn Fn(usize, usize, &str) + Send + Sync>;

/// Probe every URL at every candidate path, one request at a time.
///
/// Results come back input-order-major, path-order-minor. Request failures
/// are recorded on their row and never stop the loop.
pub async fn check_urls(
    urls: &[String],
    prober: &Prober,
    paths: &CandidatePaths,
    progress_callback: Option<&ProbeProgressCallback>,
) -> Vec<ProbeRecord> {
    let total = urls.len() * paths.len();
    let mut records = Vec::with_capacity(total);

    for url in urls {
        let domain = derive_origin(url);

        for (path, full_url) in paths.iter().zip(candidate_urls(&domain, paths)) {

            if let Some(callback) = progress_callback {
                callback(records.len(), total, &full_url);
            }

            let outcome = prober.probe(&full_url).await;
            records.push(ProbeRecord::from_outcome(url, &domain, path, outcome));
        }
    }

    records
}

/// Read URLs from `input`, probe them, and write the CSV result table to
/// `output`.
///
/// A missing `URL` column fails before any request is sent. Nothing is
/// written until every probe has finished.
pub async fn run<R: Read, W: Write>(
    input: R,
    output: W,
    prober: &Prober,
    paths: &CandidatePaths,
) -> Result<Vec<ProbeRecord>> {
    let urls = read_urls(input)?;
    let records = check_urls(&urls, prober, paths, None).await;
    write_csv(output, &records)?;
    Ok(records)
}

/// Execute a full check with the given options
/// Returns the probe results after they have been saved
pub async fn run_check(options: CheckOptions) -> Result<Vec<ProbeRecord>> {
    let CheckOptions {
        input,
        output,
        format,
        paths,
        timeout,
        show_progress_bars,
    } = options;

    let urls = load_urls(&input)?;
    let prober = Prober::with_timeout(timeout)?;

    info!(
        "Checking {} URLs across {} candidate paths",
        urls.len(),
        paths.len()
    );

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new((urls.len() * paths.len()) as u64);
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Starting probes...");
        Some(Arc::new(pb))
    } else {
        None
    };

    let callback: Option<ProbeProgressCallback> = progress_bar.clone().map(|pb| {
        Arc::new(move |done: usize, _total: usize, url: &str| {
            pb.set_position(done as u64);
            pb.set_message(url.to_string());
        }) as ProbeProgressCallback
    });

    let records = check_urls(&urls, &prober, &paths, callback.as_ref()).await;

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    save_results(&records, &output, format)?;

    let exposed = records.iter().filter(|r| r.swagger_enabled).count();
    info!(
        "Check complete: {} probes, {} Swagger UI pages found",
        records.len(),
        exposed
    );

    Ok(records)
}
