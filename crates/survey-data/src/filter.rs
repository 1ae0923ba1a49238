//! Respondent selection.

use std::collections::{BTreeSet, HashSet};

use survey_core::models::SurveyTable;

/// Rows of the selected respondents.
///
/// An empty selection means "everyone" and returns an unchanged copy.
/// Otherwise a row is kept when its trimmed name equals one of the trimmed
/// selected names exactly (case-sensitive, no partial matches).
pub fn filter_by_people<S: AsRef<str>>(table: &SurveyTable, people: &[S]) -> SurveyTable {
    if people.is_empty() {
        return table.clone();
    }

    let selected: HashSet<&str> = people.iter().map(|p| p.as_ref().trim()).collect();
    table
        .iter()
        .filter(|row| selected.contains(row.name.trim()))
        .cloned()
        .collect()
}

/// Sorted, distinct, trimmed, non-empty respondent names; the options a
/// caller can offer for [`filter_by_people`].
pub fn respondent_names(table: &SurveyTable) -> Vec<String> {
    table
        .iter()
        .map(|row| row.name.trim())
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
