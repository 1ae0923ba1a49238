use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::SurveyError;
use crate::questions::DEFAULT_SURVEY_FILE;

/// Pseudo-name that means "every respondent" in a person selection.
pub const ALL_PEOPLE: &str = "Todos";

// ── Section ────────────────────────────────────────────────────────────────────

/// Which block of the survey report to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// KPIs plus sentiment and recommendation distributions.
    Portada,
    /// Usage activities and preferred modes.
    Uso,
    /// Likert block about the respondent.
    PercepcionIndividual,
    /// Likert block about the respondent's team.
    PercepcionEquipo,
    /// Impediments, training requests and comments.
    TextoLibre,
    /// Everything above.
    Todo,
}

impl Section {
    pub const NAMES: [&'static str; 6] = [
        "portada",
        "uso",
        "percepcion-individual",
        "percepcion-equipo",
        "texto-libre",
        "todo",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Portada => "portada",
            Section::Uso => "uso",
            Section::PercepcionIndividual => "percepcion-individual",
            Section::PercepcionEquipo => "percepcion-equipo",
            Section::TextoLibre => "texto-libre",
            Section::Todo => "todo",
        }
    }

    /// `true` when this selection includes `other`.
    pub fn includes(self, other: Section) -> bool {
        self == Section::Todo || self == other
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portada" => Ok(Section::Portada),
            "uso" => Ok(Section::Uso),
            "percepcion-individual" => Ok(Section::PercepcionIndividual),
            "percepcion-equipo" => Ok(Section::PercepcionEquipo),
            "texto-libre" => Ok(Section::TextoLibre),
            "todo" => Ok(Section::Todo),
            other => Err(SurveyError::Config(format!("unknown section: {other}"))),
        }
    }
}

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summaries and KPIs from a Copilot adoption survey export
#[derive(Parser, Debug, Clone)]
#[command(
    name = "survey-insights",
    about = "Summaries and KPIs from a Copilot adoption survey export",
    version
)]
pub struct Settings {
    /// Survey export (.xlsx, .xls, .ods or .csv)
    #[arg(long, short = 'f', default_value = DEFAULT_SURVEY_FILE)]
    pub file: PathBuf,

    /// Only include this respondent (repeatable; "Todos" means everyone)
    #[arg(long = "person", short = 'p')]
    pub people: Vec<String>,

    /// Report section
    #[arg(long, default_value = "todo", value_parser = Section::NAMES)]
    pub section: String,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// List respondent names available for --person and exit
    #[arg(long)]
    pub list_people: bool,

    /// Print data-quality checks for the loaded export
    #[arg(long)]
    pub quality: bool,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and resolve derived values.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] with an explicit argument list.
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    /// Typed view of `--section`.
    pub fn section(&self) -> Result<Section, SurveyError> {
        self.section.parse()
    }

    /// `true` when `--format json` was requested.
    pub fn json_output(&self) -> bool {
        self.format == "json"
    }

    /// Trim person names, drop blanks and collapse a selection containing
    /// [`ALL_PEOPLE`] to "no filter"; `--debug` forces the debug log level.
    fn resolve(mut settings: Settings) -> Settings {
        let people: Vec<String> = settings
            .people
            .iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        settings.people = if people.iter().any(|p| p == ALL_PEOPLE) {
            Vec::new()
        } else {
            people
        };

        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
