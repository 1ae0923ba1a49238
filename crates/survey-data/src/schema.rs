//! Required-column checks and sheet selection.

use survey_core::questions::REQUIRED_COLUMNS;
use tracing::{debug, warn};

use crate::reader::RawSheet;

/// Required columns absent from `headers`, in [`REQUIRED_COLUMNS`] order.
pub fn missing_columns(headers: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect()
}

/// `true` when every required column is present (exact name match).
pub fn has_required_columns(headers: &[String]) -> bool {
    missing_columns(headers).is_empty()
}

/// Pick the first sheet that satisfies the schema, falling back to the first
/// sheet. `None` only when there are no sheets at all.
pub fn select_sheet(sheets: &[RawSheet]) -> Option<&RawSheet> {
    if let Some(sheet) = sheets.iter().find(|s| has_required_columns(&s.headers)) {
        debug!("Selected sheet '{}'", sheet.name);
        return Some(sheet);
    }

    let first = sheets.first()?;
    warn!(
        "No sheet has all required columns; falling back to '{}'",
        first.name
    );
    Some(first)
}
