use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{Affiliation, AttendeeRecord};

/// Column width for the name field in the console summary
const NAME_COLUMN_WIDTH: usize = 30;

/// Machine-readable run summary
#[derive(Debug, Clone, Serialize)]
pub struct RosterReport {
    /// Final attendee list, in output order
    pub records: Vec<AttendeeRecord>,
    /// Total number of attendees
    pub total: usize,
    /// Attendees classified as Cisco
    pub cisco_count: usize,
    /// Attendees classified as Guest
    pub guest_count: usize,
}

impl RosterReport {
    pub fn from_records(records: &[AttendeeRecord]) -> Self {
        let cisco_count = records
            .iter()
            .filter(|r| r.affiliation == Affiliation::Cisco)
            .count();
        let guest_count = records
            .iter()
            .filter(|r| r.affiliation == Affiliation::Guest)
            .count();
        Self {
            records: records.to_vec(),
            total: records.len(),
            cisco_count,
            guest_count,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Format the console summary: one line per attendee with the name
/// left-justified to a fixed column, then the running total
pub fn format_summary(records: &[AttendeeRecord]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&format!(
            "{:<width$}{}\n",
            record.name,
            record.affiliation,
            width = NAME_COLUMN_WIDTH
        ));
    }
    output.push_str(&format!("Total: {}\n", records.len()));
    output
}
