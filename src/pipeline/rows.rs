use crate::models::{Affiliation, AttendeeRecord};

use super::words::normalize_name;
use super::PipelineConfig;

/// Parse one candidate line into an attendee record
///
/// The line splits at the first `(` into a name segment and a tag segment;
/// OCR routinely loses the closing `)`, so none is required, and a line
/// with no `(` at all is treated as all name with an unknown affiliation.
/// Rows whose normalized name is too short are discarded silently, they
/// are single-word or initials-only OCR noise.
pub fn parse_row(line: &str, config: &PipelineConfig) -> Option<AttendeeRecord> {
    let (name_part, tag_part) = match line.find('(') {
        Some(idx) => (&line[..idx], &line[idx + 1..]),
        None => (line, ""),
    };

    let name = normalize_name(name_part.trim(), config);

    // Guest wins when both substrings somehow appear in the tag
    let mut affiliation = if tag_part.contains("Guest") {
        Affiliation::Guest
    } else if tag_part.contains("Cisco") {
        Affiliation::Cisco
    } else {
        Affiliation::Unknown
    };

    // Internal device accounts OCR with a Guest tag but belong to Cisco
    if name.to_lowercase().contains(&config.internal_marker) {
        affiliation = Affiliation::Cisco;
    }

    if name.chars().count() > config.min_name_chars {
        Some(AttendeeRecord { name, affiliation })
    } else {
        None
    }
}
