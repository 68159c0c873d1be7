use std::collections::HashSet;

use crate::models::AttendeeRecord;

/// Deduplicate and order the accepted rows into the final attendee list
///
/// Duplicates are removed by full (name, affiliation) equality. The
/// ordering is two-keyed: names ascending, then a stable re-sort descending
/// on the affiliation string. Lexicographically "Guest" > "Cisco" > "", so
/// Guests group first, then Cisco, then unknown, with names still ascending
/// inside each group because the second sort is stable.
pub fn build_record_set(rows: Vec<AttendeeRecord>) -> Vec<AttendeeRecord> {
    let unique: HashSet<AttendeeRecord> = rows.into_iter().collect();
    let mut records: Vec<AttendeeRecord> = unique.into_iter().collect();

    records.sort_by(|a, b| a.name.cmp(&b.name));
    records.sort_by(|a, b| b.affiliation.as_str().cmp(a.affiliation.as_str()));

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Affiliation;

    fn record(name: &str, affiliation: Affiliation) -> AttendeeRecord {
        AttendeeRecord::new(name, affiliation)
    }

    #[test]
    fn test_exact_duplicates_removed() {
        let rows = vec![
            record("John Doe", Affiliation::Cisco),
            record("John Doe", Affiliation::Cisco),
        ];
        let records = build_record_set(rows);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_same_name_different_affiliation_both_kept() {
        let rows = vec![
            record("John Doe", Affiliation::Cisco),
            record("John Doe", Affiliation::Guest),
        ];
        let records = build_record_set(rows);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_guest_before_cisco_before_unknown() {
        let rows = vec![
            record("Alice Adams", Affiliation::Unknown),
            record("Bob Brown", Affiliation::Cisco),
            record("Carol Clark", Affiliation::Guest),
        ];
        let records = build_record_set(rows);
        assert_eq!(
            records,
            vec![
                record("Carol Clark", Affiliation::Guest),
                record("Bob Brown", Affiliation::Cisco),
                record("Alice Adams", Affiliation::Unknown),
            ]
        );
    }

    #[test]
    fn test_names_ascending_within_group() {
        let rows = vec![
            record("Zoe Young", Affiliation::Cisco),
            record("Amy Young", Affiliation::Cisco),
            record("Mia Young", Affiliation::Cisco),
        ];
        let records = build_record_set(rows);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Amy Young", "Mia Young", "Zoe Young"]);
    }

    #[test]
    fn test_idempotent() {
        let rows = vec![
            record("Zoe Young", Affiliation::Unknown),
            record("Amy Young", Affiliation::Guest),
            record("Bob Brown", Affiliation::Cisco),
            record("Amy Young", Affiliation::Guest),
        ];
        let once = build_record_set(rows);
        let twice = build_record_set(once.clone());
        assert_eq!(once, twice);
    }
}
