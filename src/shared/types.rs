use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One form as delivered by the data source. Field values come from
/// user-created data and are not trusted: anything malformed decodes to a
/// neutral default instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "responseCount")]
    pub response_count: Value,
    #[serde(default, rename = "linkedFormId")]
    pub linked_form_id: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl FormRecord {
    /// Response count coerced to a non-negative integer. Numeric strings
    /// count; everything else (null, objects, negatives, garbage) is 0.
    pub fn response_total(&self) -> u64 {
        match &self.response_count {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
                .unwrap_or(0),
            Value::String(s) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Whether this form designates another form as its successor.
    pub fn links_elsewhere(&self) -> bool {
        self.linked_form_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    pub fn updated_instant(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_deref().and_then(crate::stats::parse_when)
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled form"
        } else {
            &self.title
        }
    }
}

/// Load state of the form list, modeled as an explicit variant instead of
/// a pair of nullable fields. An in-flight refresh is tracked separately
/// by the view so it stays orthogonal to these three states.
#[derive(Debug, Clone, PartialEq)]
pub enum FormsFetch {
    Loading,
    Failed,
    Ready(Vec<FormRecord>),
}

impl FormsFetch {
    /// Maps the raw poll of a resource (`None` while pending) into the
    /// three observable states.
    pub fn from_poll<E>(poll: Option<&Result<Vec<FormRecord>, E>>) -> Self {
        match poll {
            None => FormsFetch::Loading,
            Some(Err(_)) => FormsFetch::Failed,
            Some(Ok(records)) => FormsFetch::Ready(records.clone()),
        }
    }

    /// The fetched records, empty unless `Ready`.
    pub fn records(&self) -> &[FormRecord] {
        match self {
            FormsFetch::Ready(records) => records,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_camel_case_wire_names() {
        let record: FormRecord = serde_json::from_value(json!({
            "id": "a",
            "title": "Customer feedback",
            "responseCount": 3,
            "linkedFormId": "b",
            "updatedAt": "2024-01-01",
        }))
        .unwrap();
        assert_eq!(record.id, "a");
        assert_eq!(record.response_total(), 3);
        assert!(record.links_elsewhere());
        assert!(record.updated_instant().is_some());
    }

    #[test]
    fn missing_fields_decode_to_defaults() {
        let record: FormRecord = serde_json::from_value(json!({ "id": "a" })).unwrap();
        assert_eq!(record.response_total(), 0);
        assert!(!record.links_elsewhere());
        assert_eq!(record.updated_instant(), None);
        assert_eq!(record.display_title(), "Untitled form");
    }

    #[test]
    fn response_count_coercion() {
        let cases = [
            (json!(10), 10),
            (json!("5"), 5),
            (json!("abc"), 0),
            (json!(-4), 0),
            (json!(null), 0),
            (json!({ "nested": true }), 0),
        ];
        for (value, expected) in cases {
            let record: FormRecord =
                serde_json::from_value(json!({ "id": "a", "responseCount": value })).unwrap();
            assert_eq!(record.response_total(), expected);
        }
    }

    #[test]
    fn empty_linked_form_id_is_not_a_link() {
        let record: FormRecord =
            serde_json::from_value(json!({ "id": "a", "linkedFormId": "" })).unwrap();
        assert!(!record.links_elsewhere());
    }

    #[test]
    fn fetch_state_from_poll() {
        let poll: Option<&Result<Vec<FormRecord>, String>> = None;
        assert_eq!(FormsFetch::from_poll(poll), FormsFetch::Loading);

        let err: Result<Vec<FormRecord>, String> = Err("boom".into());
        assert_eq!(FormsFetch::from_poll(Some(&err)), FormsFetch::Failed);

        let ok: Result<Vec<FormRecord>, String> = Ok(vec![]);
        assert_eq!(FormsFetch::from_poll(Some(&ok)), FormsFetch::Ready(vec![]));
    }

    #[test]
    fn records_are_empty_unless_ready() {
        assert!(FormsFetch::Loading.records().is_empty());
        assert!(FormsFetch::Failed.records().is_empty());
    }
}
