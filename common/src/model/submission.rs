use crate::model::proficiency::{ProficiencyLevel, SKILL_FIELDS};
use chrono::NaiveDate;
use serde_json::{Map, Value};

pub const COMPLETION_DATE: &str = "completion_date";
pub const TIME_TAKEN: &str = "time_taken";

/// One respondent's answers as decoded from the form payload.
///
/// Fields keep the order in which they appeared in the JSON document. That
/// order becomes the column order of the stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    fields: Map<String, Value>,
}

impl Submission {
    /// Wraps a decoded payload. Anything other than a non-empty object
    /// carries no data and yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) if !fields.is_empty() => Some(Self { fields }),
            _ => None,
        }
    }

    /// Decodes a raw request body, whatever its declared content type.
    ///
    /// Empty and malformed bodies are treated the same as an empty object.
    pub fn from_slice(body: &[u8]) -> Option<Self> {
        serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(Self::from_value)
    }

    /// Applies the server-side field rules:
    /// `completion_date` is stamped with `today`, `time_taken` defaults to 0,
    /// and each self-rating is replaced by its level label when it maps to one.
    ///
    /// Keys that already exist keep their position; new keys go at the end.
    pub fn normalize(&mut self, today: NaiveDate) {
        self.fields.insert(
            COMPLETION_DATE.to_string(),
            Value::String(today.format("%Y-%m-%d").to_string()),
        );
        self.fields
            .entry(TIME_TAKEN)
            .or_insert_with(|| Value::from(0));

        for skill in SKILL_FIELDS {
            if let Some(value) = self.fields.get_mut(skill) {
                if let Some(level) = ProficiencyLevel::from_value(value) {
                    *value = Value::String(level.label().to_string());
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in document order.
    pub fn columns(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    /// Field values rendered as CSV cells, parallel to [`Submission::columns`].
    pub fn cells(&self) -> Vec<String> {
        self.fields.values().map(cell_text).collect()
    }

    /// Splits the submission into parallel `(columns, cells)` sequences.
    pub fn into_row(self) -> (Vec<String>, Vec<String>) {
        self.fields
            .into_iter()
            .map(|(key, value)| {
                let cell = cell_text(&value);
                (key, cell)
            })
            .unzip()
    }
}

/// Text written to the CSV cell for a field value.
///
/// Strings go in verbatim and `null` leaves the cell empty. Arrays and
/// objects are kept as compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    fn normalized(value: Value) -> Submission {
        let mut submission = Submission::from_value(value).unwrap();
        submission.normalize(today());
        submission
    }

    #[test]
    fn empty_and_non_object_payloads_carry_no_data() {
        assert!(Submission::from_value(json!({})).is_none());
        assert!(Submission::from_value(json!(null)).is_none());
        assert!(Submission::from_value(json!([1, 2])).is_none());
        assert!(Submission::from_value(json!("name")).is_none());
    }

    #[test]
    fn malformed_bodies_carry_no_data() {
        assert!(Submission::from_slice(b"").is_none());
        assert!(Submission::from_slice(b"   ").is_none());
        assert!(Submission::from_slice(b"{\"name\": ").is_none());
        assert!(Submission::from_slice(b"null").is_none());
        assert!(Submission::from_slice(b"{\"name\":\"Ana\"}").is_some());
    }

    #[test]
    fn all_skills_map_to_labels() {
        let submission = normalized(json!({
            "self_reading": 1,
            "self_listening": 2,
            "self_writing": "3",
            "self_speaking": 4,
        }));
        assert_eq!(submission.get("self_reading"), Some(&json!("Beginner")));
        assert_eq!(submission.get("self_listening"), Some(&json!("Intermediate")));
        assert_eq!(submission.get("self_writing"), Some(&json!("Advanced")));
        assert_eq!(submission.get("self_speaking"), Some(&json!("Superior")));
    }

    #[test]
    fn unmappable_skills_pass_through() {
        let submission = normalized(json!({
            "self_reading": "fluent",
            "self_listening": 7,
            "self_writing": null,
            "self_speaking": 0,
        }));
        assert_eq!(submission.get("self_reading"), Some(&json!("fluent")));
        assert_eq!(submission.get("self_listening"), Some(&json!(7)));
        assert_eq!(submission.get("self_writing"), Some(&json!(null)));
        assert_eq!(submission.get("self_speaking"), Some(&json!(0)));
    }

    #[test]
    fn other_fields_are_untouched() {
        let submission = normalized(json!({"name": "Alice", "age": 31, "consent": true}));
        assert_eq!(submission.get("name"), Some(&json!("Alice")));
        assert_eq!(submission.get("age"), Some(&json!(31)));
        assert_eq!(submission.get("consent"), Some(&json!(true)));
    }

    #[test]
    fn stamps_date_and_defaults_time_taken_at_the_end() {
        let submission = normalized(json!({"self_reading": "2", "name": "Alice"}));
        assert_eq!(
            submission.columns(),
            vec!["self_reading", "name", "completion_date", "time_taken"]
        );
        assert_eq!(
            submission.cells(),
            vec!["Intermediate", "Alice", "2025-03-09", "0"]
        );
    }

    #[test]
    fn client_completion_date_is_overwritten_in_place() {
        let submission = normalized(json!({
            "completion_date": "1999-01-01",
            "name": "Alice",
            "time_taken": 412,
        }));
        assert_eq!(
            submission.columns(),
            vec!["completion_date", "name", "time_taken"]
        );
        assert_eq!(submission.get(COMPLETION_DATE), Some(&json!("2025-03-09")));
        assert_eq!(submission.get(TIME_TAKEN), Some(&json!(412)));
    }

    #[test]
    fn null_time_taken_is_kept() {
        let submission = normalized(json!({"time_taken": null}));
        assert_eq!(submission.get(TIME_TAKEN), Some(&json!(null)));
    }

    #[test]
    fn cells_render_json_values() {
        assert_eq!(cell_text(&json!("a,b")), "a,b");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(false)), "false");
        assert_eq!(cell_text(&json!(2.5)), "2.5");
        assert_eq!(cell_text(&json!(["fr", "en"])), "[\"fr\",\"en\"]");
    }

    #[test]
    fn into_row_keeps_columns_and_cells_parallel() {
        let submission = normalized(json!({"b": 1, "a": "x"}));
        let expected_columns = submission.columns();
        let expected_cells = submission.cells();
        let (columns, cells) = submission.into_row();
        assert_eq!(columns, expected_columns);
        assert_eq!(cells, expected_cells);
        assert_eq!(columns.len(), 4);
    }
}
