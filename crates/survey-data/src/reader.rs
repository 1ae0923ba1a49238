//! Survey export loading.
//!
//! Reads every sheet of a spreadsheet (via `calamine`) or a single CSV file
//! into [`RawSheet`]s, picks the first sheet carrying the required columns
//! and runs the processing pipeline over it.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, DataType, Reader};
use chrono::NaiveDateTime;
use survey_core::models::SurveyTable;
use survey_core::{Result, SurveyError};
use tracing::{debug, info, warn};

use crate::pipeline::process_sheet;
use crate::schema::select_sheet;

// ── Raw cells and sheets ──────────────────────────────────────────────────────

/// A single untyped cell as it came out of the file.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl Cell {
    /// Text view of the cell; `None` for empty cells.
    ///
    /// Integral numbers print without a fractional part so that numeric
    /// answers such as `5` survive as `"5"`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Some(format!("{}", *n as i64)),
            Cell::Number(n) => Some(n.to_string()),
            Cell::Bool(b) => Some(b.to_string()),
            Cell::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }

    /// Integer view of the cell; non-numeric or fractional values are `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
            Cell::Text(s) => {
                let s = s.trim();
                s.parse::<i64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && f.fract() == 0.0)
                        .map(|f| f as i64)
                })
            }
            _ => None,
        }
    }
}

/// One sheet: a header row plus the data rows below it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawSheet {
    /// Position of the column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at (`row`, `col`); ragged rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&Cell::Empty)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a survey export and return the processed table.
///
/// Sheets are scanned in file order; the first one carrying every required
/// column is processed. When none does, the first sheet is processed anyway
/// and fails with [`SurveyError::MissingColumns`].
pub fn load_survey(path: &Path) -> Result<SurveyTable> {
    let sheets = read_workbook(path)?;
    let sheet = select_sheet(&sheets).ok_or_else(|| SurveyError::NoSheets(path.to_path_buf()))?;

    let table = process_sheet(sheet)?;
    info!(
        "Loaded {} rows from sheet '{}' of {}",
        table.len(),
        sheet.name,
        path.display()
    );
    Ok(table)
}

/// Read every sheet of the file at `path`.
///
/// `.csv` files produce a single sheet named after the file stem; every other
/// extension goes through `calamine`.
pub fn read_workbook(path: &Path) -> Result<Vec<RawSheet>> {
    std::fs::metadata(path).map_err(|source| SurveyError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let sheets = if is_csv {
        vec![read_csv_sheet(path)?]
    } else {
        read_spreadsheet(path)?
    };

    debug!(
        "Read {} sheet(s) from {}",
        sheets.len(),
        path.display()
    );
    Ok(sheets)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn read_spreadsheet(path: &Path) -> Result<Vec<RawSheet>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| SurveyError::Workbook(format!("{}: {}", path.display(), e)))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        match workbook.worksheet_range(&name) {
            Ok(range) => {
                let mut rows = range.rows();
                let headers: Vec<String> = rows
                    .next()
                    .map(|header| header.iter().map(header_text).collect())
                    .unwrap_or_default();
                let data: Vec<Vec<Cell>> = rows.map(|r| r.iter().map(convert_cell).collect()).collect();
                debug!("Sheet '{}': {} columns, {} rows", name, headers.len(), data.len());
                sheets.push(RawSheet {
                    name,
                    headers,
                    rows: data,
                });
            }
            // An unreadable sheet is skipped; the remaining ones may still
            // satisfy the schema.
            Err(e) => warn!("Skipping unreadable sheet '{}' in {}: {}", name, path.display(), e),
        }
    }

    Ok(sheets)
}

fn read_csv_sheet(path: &Path) -> Result<RawSheet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(RawSheet {
        name: sheet_name_for(path),
        headers,
        rows,
    })
}

fn sheet_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| PathBuf::from(path).display().to_string())
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn convert_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => {
            cell.as_datetime().map(Cell::DateTime).unwrap_or(Cell::Empty)
        }
        Data::Error(e) => {
            debug!("Treating error cell {:?} as empty", e);
            Cell::Empty
        }
        other => Cell::Text(other.to_string()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
