//! Consistency checks over a processed table.

use std::collections::HashSet;

use serde::Serialize;
use survey_core::formatting::percentage;
use survey_core::models::SurveyTable;
use survey_core::questions::{is_likert_attribute, MULTI_VALUE_DELIMITER, Q_NPS};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub total_rows: usize,
    pub unique_emails: usize,
    pub unique_names: usize,
    /// `true` when every respondent has exactly one name.
    pub emails_match_names: bool,
    /// Values still holding a delimiter; 0 after a correct explosion.
    pub residual_delimiters: usize,
    pub likert_rows: usize,
    pub likert_mapped: usize,
    /// 1 decimal, 0 when there are no Likert rows.
    pub likert_mapping_pct: f64,
    pub nps_rows: usize,
    pub nps_classified: usize,
    pub nps_classified_pct: f64,
}

impl QualityReport {
    /// `true` when nothing looks off.
    pub fn is_clean(&self) -> bool {
        self.emails_match_names
            && self.residual_delimiters == 0
            && self.likert_mapped == self.likert_rows
            && self.nps_classified == self.nps_rows
    }
}

pub fn check_quality(table: &SurveyTable) -> QualityReport {
    let unique_emails = table.distinct_emails();
    let unique_names = table
        .iter()
        .map(|r| r.name.as_str())
        .filter(|n| !n.is_empty())
        .collect::<HashSet<_>>()
        .len();

    let residual_delimiters = table
        .iter()
        .filter(|r| r.value.contains(MULTI_VALUE_DELIMITER))
        .count();

    let likert_rows = table
        .iter()
        .filter(|r| is_likert_attribute(&r.attribute))
        .count();
    let likert_mapped = table.iter().filter(|r| r.likert_score.is_some()).count();

    let nps_rows = table.with_attribute(Q_NPS).count();
    let nps_classified = table
        .with_attribute(Q_NPS)
        .filter(|r| r.nps_class.is_some())
        .count();

    QualityReport {
        total_rows: table.len(),
        unique_emails,
        unique_names,
        emails_match_names: unique_emails == unique_names,
        residual_delimiters,
        likert_rows,
        likert_mapped,
        likert_mapping_pct: percentage(likert_mapped as f64, likert_rows as f64, 1),
        nps_rows,
        nps_classified,
        nps_classified_pct: percentage(nps_classified as f64, nps_rows as f64, 1),
    }
}
