//! Core types for report-dl

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// One report to fetch, taken from one input row
///
/// The `record_id` parameterizes the report-generation endpoint; the `label`
/// is the human-readable name the output filename is derived from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Identifier of the record the report is generated for
    pub record_id: String,
    /// Human-readable label (becomes the filename stem after sanitization)
    pub label: String,
}

impl ReportRecord {
    /// Create a new record
    pub fn new(record_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            label: label.into(),
        }
    }
}

/// Outcome of a single download job
///
/// Failures here are local to the job: they are aggregated into the
/// [`BatchSummary`] but never abort the run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadOutcome {
    /// Report fetched and written to disk
    Success,
    /// Server answered with a non-200 status; no file was written
    HttpFailure(u16),
    /// Transport or filesystem fault; no file was written
    IoFailure(String),
}

/// Result of one download job, consumed by the batch summary
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DownloadResult {
    /// The record this job fetched
    pub record: ReportRecord,
    /// Filename assigned to this record (unique within the run)
    pub filename: String,
    /// How the job ended
    pub outcome: DownloadOutcome,
}

impl DownloadResult {
    /// Whether the job wrote its file
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, DownloadOutcome::Success)
    }
}

/// Aggregate result of one batch run
///
/// A run reaches `Completed` regardless of individual job outcomes; inspect
/// `succeeded`/`failed` (or the per-record `results`) to learn how it went.
#[derive(Clone, Debug)]
pub struct BatchSummary {
    /// Number of records attempted
    pub total: usize,
    /// Number of jobs that wrote a file
    pub succeeded: usize,
    /// Number of jobs that did not
    pub failed: usize,
    /// Wall-clock time from first dispatch to last completion
    pub elapsed: Duration,
    /// Directory all files of this run were written into
    pub output_dir: PathBuf,
    /// Per-record outcomes, in input order
    pub results: Vec<DownloadResult>,
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} reports downloaded in {} seconds",
            self.succeeded,
            self.total,
            self.elapsed.as_secs()
        )
    }
}
