// LogTally - core/export.rs
//
// JSON export of the analyzer report.
// Core layer: writes to any Write trait object.

use crate::core::model::Summary;
use crate::core::stats::Tally;
use serde::Serialize;
use std::io::Write;

/// One report block in machine-readable form.
#[derive(Debug, Serialize)]
pub struct ReportRecord<'a> {
    pub player: &'a str,
    pub datatype: &'a str,
    pub count: u64,
    /// `null` when the key had no numeric samples.
    pub summary: Option<Summary>,
}

/// Records in the same order as the text report.
pub fn report_records(tally: &Tally) -> Vec<ReportRecord<'_>> {
    tally
        .sorted_keys()
        .into_iter()
        .map(|key| {
            let record = &tally.records[key];
            ReportRecord {
                player: &key.player,
                datatype: &key.datatype,
                count: record.count,
                summary: Summary::from_samples(&record.samples),
            }
        })
        .collect()
}

/// Export the report as a pretty-printed JSON array. Returns the record count.
pub fn export_json<W: Write>(tally: &Tally, writer: W) -> serde_json::Result<usize> {
    let records = report_records(tally);
    serde_json::to_writer_pretty(writer, &records)?;
    Ok(records.len())
}
