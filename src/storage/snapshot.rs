use std::{
    fs::OpenOptions,
    io::Write,
    path::Path,
};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::Result, ledger::BudgetRecord, report::FinanceReport};

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Encoding of each appended snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotFormat {
    /// The summary lines, each terminated by a newline.
    #[default]
    Text,
    /// One JSON object per line.
    JsonLines,
}

#[derive(Serialize)]
struct JsonSnapshot<'a> {
    version: u32,
    recorded_at: String,
    #[serde(flatten)]
    record: &'a BudgetRecord,
    total_expenses: f64,
    remaining_budget: f64,
}

/// Renders the exact text a save appends for `record`.
pub fn render_snapshot(
    record: &BudgetRecord,
    format: SnapshotFormat,
    recorded_at: DateTime<Utc>,
) -> Result<String> {
    match format {
        SnapshotFormat::Text => {
            let mut out = String::new();
            for line in FinanceReport::new(record).lines() {
                out.push_str(&line);
                out.push('\n');
            }
            Ok(out)
        }
        SnapshotFormat::JsonLines => {
            let snapshot = JsonSnapshot {
                version: SNAPSHOT_SCHEMA_VERSION,
                recorded_at: recorded_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                record,
                total_expenses: record.total_expenses(),
                remaining_budget: record.remaining_budget(),
            };
            let mut out = serde_json::to_string(&snapshot)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Appends one snapshot to `destination`, creating the file when missing.
///
/// The parent directory must already exist. The file is never read or
/// truncated.
pub fn try_append_snapshot(
    record: &BudgetRecord,
    destination: &Path,
    format: SnapshotFormat,
) -> Result<()> {
    let payload = render_snapshot(record, format, Utc::now())?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(destination)?;
    file.write_all(payload.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Best-effort text snapshot; see [`append_snapshot_with`].
pub fn append_snapshot(record: &BudgetRecord, destination: &Path) -> bool {
    append_snapshot_with(record, destination, SnapshotFormat::Text)
}

/// Appends a snapshot and reports failures to the operator instead of
/// propagating them. Returns whether the snapshot was written.
pub fn append_snapshot_with(
    record: &BudgetRecord,
    destination: &Path,
    format: SnapshotFormat,
) -> bool {
    match try_append_snapshot(record, destination, format) {
        Ok(()) => {
            tracing::info!(path = %destination.display(), ?format, "snapshot appended");
            true
        }
        Err(err) => {
            tracing::error!(path = %destination.display(), error = %err, "snapshot append failed");
            eprintln!("Error: Unable to write data to file.");
            false
        }
    }
}
