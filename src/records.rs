//! Record list input
//!
//! Thin collaborator that reads the exported record list into
//! [`ReportRecord`]s. The export carries many columns; only `_record_id`
//! and `address` matter here.

use crate::error::Result;
use crate::types::ReportRecord;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RecordRow {
    #[serde(rename = "_record_id")]
    record_id: String,
    address: String,
}

/// Read the record list from a CSV export
///
/// Expects a header row with `_record_id` and `address` columns; extra
/// columns are ignored. Rows come back in file order, which fixes each
/// record's sequence index for filename generation.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<ReportRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: RecordRow = row?;
        records.push(ReportRecord::new(row.record_id, row.address));
    }
    Ok(records)
}
