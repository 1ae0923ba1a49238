//! Likert scoring and NPS bucketing of single answers.
//!
//! Both lookups are fixed tables; nothing is configurable at runtime.

use crate::models::{NpsClass, ResponseRow};
use crate::questions::{is_likert_attribute, Q_NPS};

/// Agreement phrases and their scores, including the trailing-period and
/// short-form variants seen in exports.
pub const LIKERT_MAPPING: [(&str, i8); 14] = [
    ("Estoy muy de acuerdo", 2),
    ("Estoy muy de acuerdo.", 2),
    ("Muy de acuerdo", 2),
    ("Estoy de acuerdo", 1),
    ("Estoy de acuerdo.", 1),
    ("De acuerdo", 1),
    ("Neutro", 0),
    ("Neutral", 0),
    ("No estoy de acuerdo", -1),
    ("No estoy de acuerdo.", -1),
    ("En desacuerdo", -1),
    ("Estoy muy en desacuerdo", -2),
    ("Estoy muy en desacuerdo.", -2),
    ("Muy en desacuerdo", -2),
];

/// Recommendation answers and their buckets.
pub const NPS_MAPPING: [(&str, NpsClass); 5] = [
    ("Muy recomendable", NpsClass::Promoter),
    ("Recomendable", NpsClass::Promoter),
    ("Poco recomendable", NpsClass::Passive),
    ("No recomendable", NpsClass::Detractor),
    ("Nada recomendable", NpsClass::Detractor),
];

/// Display labels for each score, strongest disagreement first.
pub const AGREEMENT_LEVELS: [(i8, &str); 5] = [
    (-2, "Muy en desacuerdo"),
    (-1, "En desacuerdo"),
    (0, "Neutro"),
    (1, "De acuerdo"),
    (2, "Muy de acuerdo"),
];

/// Score of a Likert phrase, `None` when the phrase is unknown.
pub fn likert_value(value: &str) -> Option<i8> {
    LIKERT_MAPPING
        .iter()
        .find(|(phrase, _)| *phrase == value)
        .map(|(_, score)| *score)
}

/// Likert score of an answer, only for questions under a Likert prefix.
pub fn likert_score(attribute: &str, value: &str) -> Option<i8> {
    if is_likert_attribute(attribute) {
        likert_value(value)
    } else {
        None
    }
}

/// NPS bucket of an answer to the recommendation question.
///
/// Unknown, empty or whitespace-only answers count as detractors. Rows of
/// any other question get `None`.
pub fn nps_class(attribute: &str, value: &str) -> Option<NpsClass> {
    if attribute != Q_NPS {
        return None;
    }
    let trimmed = value.trim();
    let class = NPS_MAPPING
        .iter()
        .find(|(answer, _)| *answer == trimmed)
        .map(|(_, class)| *class)
        .unwrap_or(NpsClass::Detractor);
    Some(class)
}

/// Return a copy of `row` with both derived fields filled in.
pub fn classify_row(row: &ResponseRow) -> ResponseRow {
    ResponseRow {
        likert_score: likert_score(&row.attribute, &row.value),
        nps_class: nps_class(&row.attribute, &row.value),
        ..row.clone()
    }
}
