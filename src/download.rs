//! Single-report download job
//!
//! Each job fetches one generated report through the shared session and
//! persists it under the run's output directory. Failures stay local to the
//! job: they are folded into the [`DownloadResult`] and never propagate.

use crate::session::Session;
use crate::types::{DownloadOutcome, DownloadResult, ReportRecord};
use std::path::Path;

/// Fetch one report and write it to `output_dir/filename`
///
/// On HTTP 200 the whole body is buffered in memory first, then written in a
/// single create-or-truncate operation, so a transport fault mid-body leaves
/// no partial file behind. Any non-200 status or transport/filesystem fault
/// is recorded in the outcome; nothing is written in those cases.
pub(crate) async fn download_report(
    session: &Session,
    reports_url: &str,
    record: ReportRecord,
    filename: String,
    output_dir: &Path,
) -> DownloadResult {
    let outcome = fetch_and_persist(session, reports_url, &record, &filename, output_dir).await;

    match &outcome {
        DownloadOutcome::Success => {
            tracing::info!(filename = %filename, "report downloaded");
        }
        DownloadOutcome::HttpFailure(status) => {
            tracing::warn!(
                filename = %filename,
                record_id = %record.record_id,
                status = status,
                "report download failed"
            );
        }
        DownloadOutcome::IoFailure(error) => {
            tracing::warn!(
                filename = %filename,
                record_id = %record.record_id,
                error = %error,
                "report download failed"
            );
        }
    }

    DownloadResult {
        record,
        filename,
        outcome,
    }
}

async fn fetch_and_persist(
    session: &Session,
    reports_url: &str,
    record: &ReportRecord,
    filename: &str,
    output_dir: &Path,
) -> DownloadOutcome {
    let response = match session
        .client()
        .get(reports_url)
        .query(&[("report[record_id]", record.record_id.as_str())])
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return DownloadOutcome::IoFailure(e.to_string()),
    };

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return DownloadOutcome::HttpFailure(status.as_u16());
    }

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return DownloadOutcome::IoFailure(e.to_string()),
    };

    match tokio::fs::write(output_dir.join(filename), &body).await {
        Ok(()) => DownloadOutcome::Success,
        Err(e) => DownloadOutcome::IoFailure(e.to_string()),
    }
}
