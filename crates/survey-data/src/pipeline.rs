//! Raw sheet → processed table.
//!
//! Steps, each returning a fresh table:
//! 1. Check the required columns.
//! 2. Clean text cells and coerce the id and timestamp columns.
//! 3. Explode multi-select answers.
//! 4. Derive Likert scores and NPS classes.

use chrono::NaiveDateTime;
use survey_core::classifier::classify_row;
use survey_core::models::{ResponseRow, SurveyTable};
use survey_core::questions::{
    COL_ATTRIBUTE, COL_EMAIL, COL_END_TIME, COL_ID, COL_NAME, COL_START_TIME, COL_VALUE,
};
use survey_core::text::clean_text;
use survey_core::time_utils::TimestampParser;
use survey_core::{Result, SurveyError};
use tracing::debug;

use crate::exploder::explode_multivalue;
use crate::reader::{Cell, RawSheet};
use crate::schema::missing_columns;

/// Column positions of the required fields within a sheet.
struct ColumnMap {
    id: usize,
    start_time: usize,
    end_time: usize,
    email: usize,
    name: usize,
    attribute: usize,
    value: usize,
}

impl ColumnMap {
    fn resolve(sheet: &RawSheet) -> Result<Self> {
        let missing = missing_columns(&sheet.headers);
        if !missing.is_empty() {
            return Err(SurveyError::MissingColumns {
                sheet: sheet.name.clone(),
                missing,
            });
        }
        let idx = |name: &str| {
            sheet.column_index(name).ok_or_else(|| SurveyError::MissingColumns {
                sheet: sheet.name.clone(),
                missing: vec![name.to_string()],
            })
        };
        Ok(Self {
            id: idx(COL_ID)?,
            start_time: idx(COL_START_TIME)?,
            end_time: idx(COL_END_TIME)?,
            email: idx(COL_EMAIL)?,
            name: idx(COL_NAME)?,
            attribute: idx(COL_ATTRIBUTE)?,
            value: idx(COL_VALUE)?,
        })
    }
}

/// Run the full pipeline over one sheet.
pub fn process_sheet(sheet: &RawSheet) -> Result<SurveyTable> {
    let normalized = normalize_sheet(sheet)?;
    let exploded = explode_multivalue(&normalized);
    let classified = classify_table(&exploded);
    debug!(
        "Processed sheet '{}': {} source rows, {} atomic rows",
        sheet.name,
        sheet.rows.len(),
        classified.len()
    );
    Ok(classified)
}

/// Typed, cleaned rows, one per sheet row. Values are not yet split.
pub fn normalize_sheet(sheet: &RawSheet) -> Result<SurveyTable> {
    let cols = ColumnMap::resolve(sheet)?;

    let text = |row: usize, col: usize| -> String {
        sheet
            .cell(row, col)
            .as_text()
            .map(|s| clean_text(&s))
            .unwrap_or_default()
    };

    let rows: SurveyTable = (0..sheet.rows.len())
        .map(|i| ResponseRow {
            id: sheet.cell(i, cols.id).as_i64(),
            start_time: parse_timestamp(sheet.cell(i, cols.start_time)),
            end_time: parse_timestamp(sheet.cell(i, cols.end_time)),
            email: text(i, cols.email),
            name: text(i, cols.name),
            attribute: text(i, cols.attribute),
            // Cleaned again per piece during explosion.
            value: sheet.cell(i, cols.value).as_text().unwrap_or_default(),
            likert_score: None,
            nps_class: None,
        })
        .collect();

    Ok(rows)
}

/// Fill in the Likert score and NPS class of every row in one pass.
pub fn classify_table(table: &SurveyTable) -> SurveyTable {
    table.iter().map(classify_row).collect()
}

fn parse_timestamp(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Number(serial) => TimestampParser::from_serial(*serial),
        Cell::Text(s) => TimestampParser::parse_str(s),
        Cell::Empty | Cell::Bool(_) => None,
    }
}
