//! Expansion of multi-select cells into one row per answer.

use survey_core::models::{ResponseRow, SurveyTable};
use survey_core::questions::MULTI_VALUE_DELIMITER;
use survey_core::text::clean_text;
use tracing::debug;

/// Split every row's value on `;` and emit one cleaned row per non-empty
/// piece. Row order and piece order are preserved; duplicates are kept.
pub fn explode_multivalue(table: &SurveyTable) -> SurveyTable {
    let exploded: SurveyTable = table.iter().flat_map(explode_row).collect();
    debug!(
        "Exploded {} rows into {} atomic rows",
        table.len(),
        exploded.len()
    );
    exploded
}

/// Atomic rows for a single source row.
pub fn explode_row(row: &ResponseRow) -> Vec<ResponseRow> {
    row.value
        .split(MULTI_VALUE_DELIMITER)
        .map(clean_text)
        .filter(|piece| !piece.is_empty())
        .map(|piece| row.with_value(piece))
        .collect()
}
