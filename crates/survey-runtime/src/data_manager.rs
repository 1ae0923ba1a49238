//! Cached data manager for the survey runtime.
//!
//! Wraps [`load_survey`] with a cache keyed by the file's identity (path,
//! length and modification time). Callers use [`DataManager::get_table`] to
//! obtain a fresh-or-cached [`SurveyTable`]; the cache is reused for as long
//! as the file on disk is unchanged, and dropped on [`DataManager::invalidate_cache`].
//! Failures are returned as-is: there are no retries and no stale fallback.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use survey_core::models::SurveyTable;
use survey_core::settings::Section;
use survey_core::{Result, SurveyError};
use survey_data::analysis::{build_report, SurveyReport};
use survey_data::reader::load_survey;

// ── FileIdentity ──────────────────────────────────────────────────────────────

/// What makes two reads of the same path interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIdentity {
    pub path: PathBuf,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl FileIdentity {
    /// Stat `path`. A missing file is a load failure.
    pub fn of(path: &Path) -> Result<Self> {
        let meta = fs::metadata(path).map_err(|source| SurveyError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

// ── DataManager ───────────────────────────────────────────────────────────────

/// Cached wrapper around the load pipeline.
///
/// # Example
/// ```no_run
/// use survey_runtime::data_manager::DataManager;
///
/// let mut mgr = DataManager::new("encuesta.xlsx");
/// let table = mgr.get_table(false)?;
/// println!("rows: {}", table.len());
/// # Ok::<(), survey_core::SurveyError>(())
/// ```
pub struct DataManager {
    path: PathBuf,
    identity: Option<FileIdentity>,
    cache: Option<SurveyTable>,
    cache_timestamp: Option<Instant>,
    last_error: Option<String>,
}

impl DataManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            identity: None,
            cache: None,
            cache_timestamp: None,
            last_error: None,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point the manager at another file; drops the cache when the path
    /// actually changes.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if path != self.path {
            self.path = path;
            self.invalidate_cache();
        }
    }

    /// Return the processed table, reloading when the file changed since the
    /// last load or when `force_refresh` is set.
    pub fn get_table(&mut self, force_refresh: bool) -> Result<&SurveyTable> {
        let identity = match FileIdentity::of(&self.path) {
            Ok(identity) => identity,
            Err(e) => return Err(self.record_failure(e)),
        };

        if !force_refresh && self.is_cache_valid(&identity) {
            tracing::debug!("returning cached survey table");
            return self.cached();
        }

        match load_survey(&self.path) {
            Ok(table) => {
                tracing::debug!(rows = table.len(), "survey cache updated");
                self.cache = Some(table);
                self.identity = Some(identity);
                self.cache_timestamp = Some(Instant::now());
                self.last_error = None;
                self.cached()
            }
            Err(e) => Err(self.record_failure(e)),
        }
    }

    /// Load (or reuse) the table and build a report over it.
    pub fn report<S: AsRef<str>>(&mut self, people: &[S], section: Section) -> Result<SurveyReport> {
        let table = self.get_table(false)?;
        Ok(build_report(table, people, section))
    }

    /// Discard the current cache, forcing the next [`get_table`](Self::get_table) call to load.
    pub fn invalidate_cache(&mut self) {
        self.cache = None;
        self.identity = None;
        self.cache_timestamp = None;
        tracing::debug!("cache invalidated");
    }

    /// Age of the current cache entry, or `None` if nothing has been loaded.
    pub fn cache_age(&self) -> Option<Duration> {
        self.cache_timestamp.map(|ts| ts.elapsed())
    }

    /// Human-readable description of the last load error, or `None`.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn is_cache_valid(&self, current: &FileIdentity) -> bool {
        self.cache.is_some() && self.identity.as_ref() == Some(current)
    }

    fn cached(&self) -> Result<&SurveyTable> {
        self.cache
            .as_ref()
            .ok_or_else(|| SurveyError::Config("survey cache is empty".to_string()))
    }

    /// Drop the cache and remember `err` for [`last_error`](Self::last_error).
    fn record_failure(&mut self, err: SurveyError) -> SurveyError {
        tracing::warn!(error = %err, path = %self.path.display(), "survey load failed");
        self.invalidate_cache();
        self.last_error = Some(err.to_string());
        err
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
