use crate::detect::is_swagger_ui;
use crate::error::{Result, ScanError, describe_error};
use crate::result::ProbeOutcome;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::debug;

/// Issues one GET per candidate URL and fingerprints the response.
///
/// The client carries no custom headers and keeps reqwest's default redirect
/// policy. There is no timeout unless one is asked for.
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ScanError::ClientBuild(describe_error(&e)))?;

        Ok(Self { client })
    }

    /// Probe a single URL. Never fails: transport errors are folded into
    /// the outcome so the caller can move on to the next candidate. Failures
    /// log at debug only, since the row already carries them.
    pub async fn probe(&self, url: &str) -> ProbeOutcome {
        debug!("Probing {}", url);
        let start = Instant::now();

        match self.fetch(url).await {
            Ok((status_code, body)) => {
                let mut outcome = ProbeOutcome::new(url.to_string(), status_code);
                // Only a 200 body is ever inspected
                if let Some(ref html) = body {
                    outcome.swagger_ui = is_swagger_ui(html);
                }
                debug!(
                    "{} -> {} in {:?} (swagger ui: {})",
                    url,
                    status_code,
                    start.elapsed(),
                    outcome.swagger_ui
                );
                outcome
            }
            Err(ScanError::HttpError(e)) => {
                let message = describe_error(&e);
                debug!("Request failed for {}: {}", url, message);
                ProbeOutcome::with_error(url.to_string(), message)
            }
            Err(e) => {
                debug!("Request failed for {}: {}", url, e);
                ProbeOutcome::with_error(url.to_string(), e.to_string())
            }
        }
    }

    /// Returns the status code, plus the body when the status is 200.
    async fn fetch(&self, url: &str) -> Result<(u16, Option<String>)> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Ok((status.as_u16(), None));
        }

        let body = response.text().await?;
        Ok((status.as_u16(), Some(body)))
    }
}
