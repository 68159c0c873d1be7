pub mod line_filter;
pub mod records;
pub mod rows;
pub mod words;

pub use line_filter::*;
pub use records::*;
pub use rows::*;
pub use words::*;

use crate::models::AttendeeRecord;

/// Configuration for the extraction pipeline
///
/// The denylists are empirically derived from real participant-list
/// screenshots and are data, not logic: tests and future tuning vary them
/// per case.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Lines whose trimmed content exactly equals one of these are UI
    /// chrome, never attendees
    pub chrome_lines: Vec<String>,
    /// A cleaned token containing any of these substrings is a device or
    /// UI label, not part of a name
    pub noise_words: Vec<String>,
    /// Case-insensitive name substring that marks an internal device
    /// account; such rows count as Cisco even when tagged Guest
    pub internal_marker: String,
    /// Minimum normalized name length (chars, exclusive) for a row to be
    /// accepted
    pub min_name_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chrome_lines: vec![
                "".to_string(),
                "Cohost".to_string(),
                "Host".to_string(),
                "Me".to_string(),
                "x".to_string(),
                "Q Search".to_string(),
            ],
            noise_words: vec![
                "Guest".to_string(),
                "Desk".to_string(),
                "Pro".to_string(),
                "DX80".to_string(),
                "Participants".to_string(),
            ],
            internal_marker: "techx".to_string(),
            min_name_chars: 3,
        }
    }
}

/// Extract the final attendee list from a concatenated OCR text blob
///
/// Composes the three pure stages:
/// 1. Drop UI chrome lines
/// 2. Parse each remaining line into a normalized (name, affiliation) row
/// 3. Deduplicate and sort into the authoritative ordering
///
/// Never fails: unparseable fragments are discarded at the word or row
/// level and the best-effort remainder is returned.
pub fn extract_records(ocr_text: &str, config: &PipelineConfig) -> Vec<AttendeeRecord> {
    let rows: Vec<AttendeeRecord> = filter_lines(ocr_text, config)
        .into_iter()
        .filter_map(|line| parse_row(line, config))
        .collect();

    build_record_set(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Affiliation;

    #[test]
    fn test_extract_records_end_to_end() {
        let text = "Participants (4)\nJohn Doe (Cisco)\nHost\nJane Roe (Guest)\n\nMe\n";
        let records = extract_records(text, &PipelineConfig::default());

        assert_eq!(
            records,
            vec![
                AttendeeRecord::new("Jane Roe", Affiliation::Guest),
                AttendeeRecord::new("John Doe", Affiliation::Cisco),
            ]
        );
    }

    #[test]
    fn test_extract_records_is_deterministic() {
        let text = "Alice Smith (Cisco)\nBob Jones (Guest)\nCarol White\nAlice Smith (Cisco)\n";
        let config = PipelineConfig::default();
        let first = extract_records(text, &config);
        let second = extract_records(text, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicates_collapse_across_images() {
        // The same attendee appearing in two screenshots yields one row
        let text = "John Doe (Cisco)\nSomething Else\nJohn Doe (Cisco)\n";
        let records = extract_records(text, &PipelineConfig::default());
        let johns = records.iter().filter(|r| r.name == "John Doe").count();
        assert_eq!(johns, 1);
    }
}
