use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while loading and processing a survey export.
#[derive(Error, Debug)]
pub enum SurveyError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The spreadsheet container could not be opened or one of its sheets
    /// could not be decoded.
    #[error("Failed to read workbook: {0}")]
    Workbook(String),

    /// A delimited-text export could not be parsed.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The workbook opened fine but holds no sheets at all.
    #[error("No sheets found in {0}")]
    NoSheets(PathBuf),

    /// The selected sheet lacks one or more of the required columns.
    #[error("Sheet '{sheet}' is missing required columns: {}", missing.join(", "))]
    MissingColumns { sheet: String, missing: Vec<String> },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SurveyError {
    /// `true` for failures to get any table out of the input file.
    ///
    /// Callers show an empty state for these.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            SurveyError::FileRead { .. }
                | SurveyError::Workbook(_)
                | SurveyError::Csv(_)
                | SurveyError::NoSheets(_)
                | SurveyError::Io(_)
        )
    }

    /// `true` when the file loaded but no sheet carries the required columns.
    pub fn is_schema_failure(&self) -> bool {
        matches!(self, SurveyError::MissingColumns { .. })
    }
}

/// Convenience alias used throughout the survey crates.
pub type Result<T> = std::result::Result<T, SurveyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SurveyError::FileRead {
            path: PathBuf::from("/some/encuesta.xlsx"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/encuesta.xlsx"));
        assert!(msg.contains("no such file"));
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_error_display_missing_columns() {
        let err = SurveyError::MissingColumns {
            sheet: "Hoja1".to_string(),
            missing: vec!["Atributo".to_string(), "Valor".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Sheet 'Hoja1' is missing required columns: Atributo, Valor"
        );
        assert!(err.is_schema_failure());
        assert!(!err.is_load_failure());
    }

    #[test]
    fn test_error_display_no_sheets() {
        let err = SurveyError::NoSheets(PathBuf::from("/empty.xlsx"));
        assert_eq!(err.to_string(), "No sheets found in /empty.xlsx");
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_error_display_workbook() {
        let err = SurveyError::Workbook("invalid zip header".to_string());
        assert_eq!(err.to_string(), "Failed to read workbook: invalid zip header");
    }

    #[test]
    fn test_error_display_config() {
        let err = SurveyError::Config("unknown section".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown section");
        assert!(!err.is_load_failure());
        assert!(!err.is_schema_failure());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SurveyError = io_err.into();
        assert!(err.to_string().contains("denied"));
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_error_from_csv() {
        let data = "a,b\n1,2,3\n";
        let mut reader = csv::ReaderBuilder::new().from_reader(data.as_bytes());
        let csv_err = reader
            .records()
            .find_map(|r| r.err())
            .expect("ragged row is an error");
        let err: SurveyError = csv_err.into();
        assert!(err.to_string().contains("Failed to parse CSV"));
        assert!(err.is_load_failure());
    }
}
