//! Dashboard aggregates over the fetched form list: totals, the id index,
//! and the top-5 rankings. Everything here is pure and tolerant of
//! malformed records.

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::shared::types::FormRecord;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total_forms: usize,
    pub total_responses: u64,
    pub linked_forms: usize,
    /// Most recent parseable `updatedAt` across all forms; `None` when no
    /// form carries a valid timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

/// Lenient timestamp parse: RFC 3339 first, then a naive datetime, then a
/// bare date taken as midnight UTC.
pub fn parse_when(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(DateTime::from_naive_utc_and_offset(dt, Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let dt = d.and_hms_opt(0, 0, 0)?;
        return Some(DateTime::from_naive_utc_and_offset(dt, Utc));
    }
    None
}

pub fn compute_stats(records: &[FormRecord]) -> DashboardStats {
    DashboardStats {
        total_forms: records.len(),
        total_responses: records.iter().map(|r| r.response_total()).sum(),
        linked_forms: records.iter().filter(|r| r.links_elsewhere()).count(),
        last_updated: records.iter().filter_map(|r| r.updated_instant()).max(),
    }
}

/// Id-indexed lookup. Records without an id are skipped; on duplicate ids
/// the last one in the sequence wins.
pub fn build_index(records: &[FormRecord]) -> HashMap<String, FormRecord> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        if !record.id.is_empty() {
            index.insert(record.id.clone(), record.clone());
        }
    }
    index
}

/// Up to `n` forms by descending update time. Unparseable or missing
/// timestamps sort last; ties keep their input order.
pub fn top_by_recency(records: &[FormRecord], n: usize) -> Vec<FormRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by_key(|r| {
        Reverse(
            r.updated_instant()
                .map(|dt| dt.timestamp_millis())
                .unwrap_or(i64::MIN),
        )
    });
    ranked.truncate(n);
    ranked
}

/// Up to `n` forms by descending response count; ties keep their input
/// order.
pub fn top_by_responses(records: &[FormRecord], n: usize) -> Vec<FormRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by_key(|r| Reverse(r.response_total()));
    ranked.truncate(n);
    ranked
}

/// Single-hop lookup of the form a record links to. Absent, empty, or
/// dangling references resolve to `None`.
pub fn resolve_linked_form<'a>(
    record: &FormRecord,
    index: &'a HashMap<String, FormRecord>,
) -> Option<&'a FormRecord> {
    let target = record.linked_form_id.as_deref()?;
    if target.is_empty() {
        return None;
    }
    index.get(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: serde_json::Value) -> FormRecord {
        serde_json::from_value(fields).unwrap()
    }

    fn ids(records: &[FormRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn stats_for_the_two_record_example() {
        let records = vec![
            record(json!({ "id": "a", "responseCount": 3, "updatedAt": "2024-01-01" })),
            record(json!({ "id": "b", "responseCount": 10, "updatedAt": "2024-02-01" })),
        ];
        let stats = compute_stats(&records);
        assert_eq!(stats.total_forms, 2);
        assert_eq!(stats.total_responses, 13);
        assert_eq!(stats.linked_forms, 0);
        assert_eq!(stats.last_updated, parse_when("2024-02-01"));
        assert_eq!(ids(&top_by_responses(&records, 5)), ["b", "a"]);
        assert_eq!(ids(&top_by_recency(&records, 5)), ["b", "a"]);
    }

    #[test]
    fn stats_for_empty_input() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, DashboardStats::default());
        assert!(top_by_recency(&[], 5).is_empty());
        assert!(top_by_responses(&[], 5).is_empty());
    }

    #[test]
    fn malformed_fields_degrade_to_zero() {
        let records = vec![
            record(json!({ "id": "a", "responseCount": "abc", "updatedAt": "not a date" })),
            record(json!({ "id": "b", "responseCount": "7" })),
            record(json!({ "id": "c" })),
        ];
        let stats = compute_stats(&records);
        assert_eq!(stats.total_forms, 3);
        assert_eq!(stats.total_responses, 7);
        assert_eq!(stats.last_updated, None);
        // "abc" sorts as 0, behind the numeric string
        assert_eq!(ids(&top_by_responses(&records, 5)), ["b", "a", "c"]);
    }

    #[test]
    fn linked_count_requires_a_non_empty_target() {
        let records = vec![
            record(json!({ "id": "a", "linkedFormId": "b" })),
            record(json!({ "id": "b", "linkedFormId": "" })),
            record(json!({ "id": "c" })),
        ];
        assert_eq!(compute_stats(&records).linked_forms, 1);
    }

    #[test]
    fn recency_puts_missing_timestamps_last() {
        let records = vec![
            record(json!({ "id": "a" })),
            record(json!({ "id": "b", "updatedAt": "2024-03-01T10:00:00Z" })),
            record(json!({ "id": "c", "updatedAt": "2024-01-15" })),
            record(json!({ "id": "d", "updatedAt": "bogus" })),
        ];
        assert_eq!(ids(&top_by_recency(&records, 10)), ["b", "c", "a", "d"]);
    }

    #[test]
    fn rankings_truncate_and_keep_input_order_on_ties() {
        let records: Vec<FormRecord> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|id| record(json!({ "id": id, "responseCount": 5 })))
            .collect();
        let top = top_by_responses(&records, 5);
        assert_eq!(ids(&top), ["a", "b", "c", "d", "e"]);

        let recent = top_by_recency(&records, 3);
        assert_eq!(ids(&recent), ["a", "b", "c"]);
    }

    #[test]
    fn rankings_do_not_mutate_the_input() {
        let records = vec![
            record(json!({ "id": "a", "responseCount": 1 })),
            record(json!({ "id": "b", "responseCount": 9 })),
        ];
        let before = records.clone();
        let _ = top_by_responses(&records, 1);
        let _ = top_by_recency(&records, 1);
        assert_eq!(records, before);
    }

    #[test]
    fn index_skips_missing_ids_and_keeps_the_last_duplicate() {
        let records = vec![
            record(json!({ "title": "no id" })),
            record(json!({ "id": "a", "title": "first" })),
            record(json!({ "id": "a", "title": "second" })),
        ];
        let index = build_index(&records);
        assert_eq!(index.len(), 1);
        assert_eq!(index["a"].title, "second");
    }

    #[test]
    fn link_resolution_is_single_hop_and_never_fails() {
        let records = vec![
            record(json!({ "id": "a", "linkedFormId": "b" })),
            record(json!({ "id": "b", "linkedFormId": "a" })),
            record(json!({ "id": "c", "linkedFormId": "missing" })),
            record(json!({ "id": "d" })),
        ];
        let index = build_index(&records);
        assert_eq!(resolve_linked_form(&records[0], &index).map(|r| r.id.as_str()), Some("b"));
        // a <-> b cycle is not followed past one hop
        assert_eq!(resolve_linked_form(&records[1], &index).map(|r| r.id.as_str()), Some("a"));
        assert_eq!(resolve_linked_form(&records[2], &index), None);
        assert_eq!(resolve_linked_form(&records[3], &index), None);
    }

    #[test]
    fn parse_when_accepts_the_common_forms() {
        assert!(parse_when("2024-02-01T12:30:00+01:00").is_some());
        assert!(parse_when("2024-02-01T12:30:00").is_some());
        assert!(parse_when("2024-02-01").is_some());
        assert_eq!(parse_when(""), None);
        assert_eq!(parse_when("02/01/2024"), None);
    }
}
