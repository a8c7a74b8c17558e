//! Batch orchestration
//!
//! [`BatchRunner`] drives a full run: authenticate once, create the per-run
//! output directory, fan out one download job per record, then wait on a
//! single join-all barrier and aggregate the outcomes. A run moves through
//! `Idle -> Authenticating -> Downloading -> Completed`; only authentication
//! failure terminates early, individual job failures never do.

use crate::config::Config;
use crate::download::download_report;
use crate::error::Result;
use crate::naming;
use crate::session::Session;
use crate::types::{BatchSummary, ReportRecord};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

/// Orchestrates one authenticated bulk download run
///
/// # Example
///
/// ```no_run
/// use report_dl::{BatchRunner, Config, Credentials, ReportRecord};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::new(Credentials::new("user@example.com", "secret"));
///     let records = vec![
///         ReportRecord::new("1", "A St"),
///         ReportRecord::new("2", "B St"),
///     ];
///
///     let summary = BatchRunner::new(config)?.run(records).await?;
///     println!("{summary}");
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct BatchRunner {
    config: Config,
}

impl BatchRunner {
    /// Create a runner, validating the configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the batch: login, fan out all downloads, aggregate outcomes
    ///
    /// Authentication failure aborts before any download is attempted and
    /// before the output directory is created. After that the run always
    /// completes: every job finishes (success or failure) and is reported in
    /// the returned [`BatchSummary`]. There is no global timeout and no
    /// early cancellation.
    pub async fn run(&self, records: Vec<ReportRecord>) -> Result<BatchSummary> {
        let session = Session::authenticate(&self.config).await?;

        // Created only after login succeeds, so a failed auth leaves no trace
        let output_dir = self.config.output_parent.join(naming::output_dir_name());
        tokio::fs::create_dir_all(&output_dir).await?;

        let total = records.len();
        tracing::info!(total = total, output_dir = %output_dir.display(), "starting report downloads");

        // Unbounded fan-out by default; an optional semaphore caps
        // simultaneous requests for very large record lists
        let concurrent_limit = self
            .config
            .max_concurrent_downloads
            .map(|n| Arc::new(Semaphore::new(n)));

        let jobs = records.into_iter().enumerate().map(|(i, record)| {
            let filename = naming::report_filename(&record.label, i + 1);
            let session = &session;
            let output_dir = &output_dir;
            let concurrent_limit = concurrent_limit.clone();
            async move {
                let _permit = match &concurrent_limit {
                    Some(semaphore) => semaphore.acquire().await.ok(),
                    None => None,
                };
                download_report(
                    session,
                    &self.config.reports_url,
                    record,
                    filename,
                    output_dir,
                )
                .await
            }
        });

        let started = Instant::now();
        let results = futures::future::join_all(jobs).await;
        let elapsed = started.elapsed();

        let succeeded = results.iter().filter(|r| r.is_success()).count();
        let summary = BatchSummary {
            total,
            succeeded,
            failed: total - succeeded,
            elapsed,
            output_dir,
            results,
        };
        tracing::info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            elapsed_secs = summary.elapsed.as_secs(),
            "batch complete"
        );
        Ok(summary)
    }
}
