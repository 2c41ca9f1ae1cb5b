//! The list-page filter engine: pure predicates over one fetched snapshot.

use chrono::NaiveDate;
use domain_delivery::model::{entity::Software, vo::FilterState};

/// Applies the filter to one fetched collection. Stable and non-mutating:
/// surviving records keep their original relative order, and the empty
/// filter is the identity.
pub fn matching_records(records: &[Software], state: &FilterState) -> Vec<Software> {
    records.iter().filter(|record| matches(record, state)).cloned().collect()
}

/// Whether one record passes every active predicate.
pub fn matches(record: &Software, state: &FilterState) -> bool {
    matches_search(record, &state.search_term)
        && matches_owner(record, &state.owner)
        && matches_day(record, &state.date_range)
}

/// Case-insensitive substring match against name or id. The empty term
/// matches everything.
fn matches_search(record: &Software, term: &str) -> bool {
    let term = term.to_lowercase();
    record.name.to_lowercase().contains(&term)
        || record.software_id.to_lowercase().contains(&term)
}

fn matches_owner(record: &Software, owner: &str) -> bool {
    owner.is_empty() || record.owner.contains(owner)
}

/// Calendar-day equality against the record's UTC publish day. An
/// unparseable day matches nothing rather than erroring out.
fn matches_day(record: &Software, day: &str) -> bool {
    if day.is_empty() {
        return true;
    }
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(day) => record.published_at.date_naive() == day,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn software(id: &str, name: &str, owner: &str, published_at: &str) -> Software {
        Software {
            software_id: id.into(),
            version: "1.0.0".into(),
            name: name.into(),
            owner: owner.into(),
            published_at: published_at.parse().unwrap(),
        }
    }

    fn catalog() -> Vec<Software> {
        vec![
            software("sw-001", "AwesomeApp", "user_12345", "2025-06-01T10:00:00Z"),
            software("sw-002", "GreatTool", "user_67890", "2025-06-02T14:30:00Z"),
            software("sw-003", "DataProcessor", "user_12345", "2025-06-03T09:15:00Z"),
            software("sw-004", "ReportGenerator", "user_99999", "2025-06-04T16:45:00Z"),
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let records = catalog();
        assert_eq!(matching_records(&records, &FilterState::default()), records);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let matched = matching_records(
            &catalog(),
            &FilterState {
                search_term: "awesome".into(),
                ..Default::default()
            },
        );
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].software_id, "sw-001");
    }

    #[test]
    fn search_matches_id_too() {
        let matched = matching_records(
            &catalog(),
            &FilterState {
                search_term: "SW-004".into(),
                ..Default::default()
            },
        );
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "ReportGenerator");
    }

    #[test]
    fn owner_filter_keeps_original_order() {
        let matched = matching_records(
            &catalog(),
            &FilterState {
                owner: "user_12345".into(),
                ..Default::default()
            },
        );
        let ids: Vec<&str> = matched.iter().map(|s| s.software_id.as_str()).collect();
        assert_eq!(ids, ["sw-001", "sw-003"]);
    }

    #[test]
    fn owner_filter_is_substring_match() {
        let matched = matching_records(
            &catalog(),
            &FilterState {
                owner: "user_".into(),
                ..Default::default()
            },
        );
        assert_eq!(matched.len(), 4);
    }

    #[test]
    fn day_filter_compares_utc_calendar_day() {
        let matched = matching_records(
            &catalog(),
            &FilterState {
                date_range: "2025-06-02".into(),
                ..Default::default()
            },
        );
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].software_id, "sw-002");
    }

    #[test]
    fn unparseable_day_matches_nothing() {
        let matched = matching_records(
            &catalog(),
            &FilterState {
                date_range: "last tuesday".into(),
                ..Default::default()
            },
        );
        assert!(matched.is_empty());
    }

    #[test]
    fn predicates_combine_with_and() {
        let matched = matching_records(
            &catalog(),
            &FilterState {
                search_term: "data".into(),
                owner: "user_12345".into(),
                date_range: "2025-06-03".into(),
            },
        );
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].software_id, "sw-003");

        let none = matching_records(
            &catalog(),
            &FilterState {
                search_term: "data".into(),
                owner: "user_99999".into(),
                ..Default::default()
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn excluded_records_do_not_contain_the_term() {
        let records = catalog();
        let state = FilterState {
            search_term: "tool".into(),
            ..Default::default()
        };
        let matched = matching_records(&records, &state);
        for record in &records {
            let contains = record.name.to_lowercase().contains("tool")
                || record.software_id.to_lowercase().contains("tool");
            assert_eq!(contains, matched.contains(record));
        }
    }
}
