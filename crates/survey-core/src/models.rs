use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Net-Promoter bucket of a recommendation answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpsClass {
    #[serde(rename = "Promotor")]
    Promoter,
    #[serde(rename = "Pasivo")]
    Passive,
    #[serde(rename = "Detractor")]
    Detractor,
}

impl NpsClass {
    /// Label shown to survey readers.
    pub fn label(self) -> &'static str {
        match self {
            NpsClass::Promoter => "Promotor",
            NpsClass::Passive => "Pasivo",
            NpsClass::Detractor => "Detractor",
        }
    }
}

impl fmt::Display for NpsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One atomic answer: a single (respondent, question, value) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRow {
    /// Numeric response id; `None` when the cell was not numeric.
    pub id: Option<i64>,
    /// When the respondent opened the form.
    pub start_time: Option<NaiveDateTime>,
    /// When the respondent submitted the form.
    pub end_time: Option<NaiveDateTime>,
    /// Respondent e-mail, the identity used for distinct counts.
    pub email: String,
    /// Respondent display name, the identity used for filtering.
    pub name: String,
    /// Question text.
    pub attribute: String,
    /// Answer text. Never empty once the table has been exploded.
    pub value: String,
    /// Agreement score in `-2..=2` for Likert questions with a known answer.
    #[serde(default)]
    pub likert_score: Option<i8>,
    /// Recommendation bucket, only for the NPS question.
    #[serde(default)]
    pub nps_class: Option<NpsClass>,
}

impl ResponseRow {
    /// Clone this row with a different answer value.
    pub fn with_value(&self, value: String) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }
}

/// An ordered, immutable collection of response rows.
///
/// Every pipeline stage takes a `&SurveyTable` and hands back a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyTable {
    rows: Vec<ResponseRow>,
}

impl SurveyTable {
    pub fn new(rows: Vec<ResponseRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ResponseRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResponseRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct non-empty e-mails in the table.
    pub fn distinct_emails(&self) -> usize {
        count_distinct_emails(self.rows.iter())
    }

    /// Rows whose attribute equals `attribute` exactly.
    pub fn with_attribute<'a>(
        &'a self,
        attribute: &'a str,
    ) -> impl Iterator<Item = &'a ResponseRow> + 'a {
        self.rows.iter().filter(move |r| r.attribute == attribute)
    }
}

impl<'a> IntoIterator for &'a SurveyTable {
    type Item = &'a ResponseRow;
    type IntoIter = std::slice::Iter<'a, ResponseRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<ResponseRow> for SurveyTable {
    fn from_iter<I: IntoIterator<Item = ResponseRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Count distinct non-empty e-mails. Missing e-mails are not respondents.
pub fn count_distinct_emails<'a>(rows: impl Iterator<Item = &'a ResponseRow>) -> usize {
    rows.filter(|r| !r.email.is_empty())
        .map(|r| r.email.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(email: &str, attribute: &str, value: &str) -> ResponseRow {
        ResponseRow {
            id: Some(1),
            start_time: None,
            end_time: None,
            email: email.to_string(),
            name: "Ana".to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
            likert_score: None,
            nps_class: None,
        }
    }

    #[test]
    fn test_nps_class_labels() {
        assert_eq!(NpsClass::Promoter.to_string(), "Promotor");
        assert_eq!(NpsClass::Passive.to_string(), "Pasivo");
        assert_eq!(NpsClass::Detractor.to_string(), "Detractor");
    }

    #[test]
    fn test_nps_class_serializes_as_label() {
        let json = serde_json::to_string(&NpsClass::Passive).unwrap();
        assert_eq!(json, "\"Pasivo\"");
    }

    #[test]
    fn test_with_value_keeps_other_fields() {
        let original = row("a@x", "Q", "Chat;IDE");
        let clone = original.with_value("Chat".to_string());
        assert_eq!(clone.value, "Chat");
        assert_eq!(clone.email, original.email);
        assert_eq!(clone.attribute, original.attribute);
        assert_eq!(clone.id, original.id);
    }

    #[test]
    fn test_distinct_emails_ignores_empty() {
        let table = SurveyTable::new(vec![
            row("a@x", "Q", "1"),
            row("a@x", "Q", "2"),
            row("b@x", "Q", "1"),
            row("", "Q", "1"),
        ]);
        assert_eq!(table.distinct_emails(), 2);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_with_attribute_is_exact() {
        let table = SurveyTable::new(vec![row("a@x", "Q1", "1"), row("a@x", "Q10", "1")]);
        assert_eq!(table.with_attribute("Q1").count(), 1);
    }

    #[test]
    fn test_table_serializes_as_row_list() {
        let table = SurveyTable::new(vec![row("a@x", "Q", "v")]);
        let value = serde_json::to_value(&table).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["email"], "a@x");
        assert_eq!(value[0]["nps_class"], serde_json::Value::Null);
    }
}
