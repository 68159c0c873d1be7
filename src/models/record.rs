use serde::{Deserialize, Serialize};

/// Where an attendee belongs, as recognized from the roster tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affiliation {
    /// Internal employee, tagged "(Cisco)" in the participant list
    Cisco,
    /// External participant, tagged "(Guest)"
    Guest,
    /// No recognizable tag on the line
    #[serde(rename = "")]
    Unknown,
}

impl Affiliation {
    /// String form used for the spreadsheet column, the console summary,
    /// and the affiliation sort key
    pub fn as_str(&self) -> &'static str {
        match self {
            Affiliation::Cisco => "Cisco",
            Affiliation::Guest => "Guest",
            Affiliation::Unknown => "",
        }
    }
}

impl std::fmt::Display for Affiliation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attendee extracted from the OCR text
///
/// Equality covers the full (name, affiliation) pair: the same name seen
/// with two different tags stays as two records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendeeRecord {
    /// Normalized display name, space-separated cleaned tokens
    pub name: String,
    /// Classification from the tag segment (possibly overridden)
    pub affiliation: Affiliation,
}

impl AttendeeRecord {
    pub fn new(name: impl Into<String>, affiliation: Affiliation) -> Self {
        Self {
            name: name.into(),
            affiliation,
        }
    }
}
