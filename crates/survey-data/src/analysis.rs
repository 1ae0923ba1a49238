//! Report assembly.
//!
//! Filters a processed table down to the selected respondents and computes
//! the blocks of the requested [`Section`], returning a [`SurveyReport`] ready
//! for the presentation layer.

use std::path::Path;

use chrono::Local;
use serde::Serialize;
use survey_core::models::SurveyTable;
use survey_core::questions::{Q_INDIVIDUAL_PREFIX, Q_NPS, Q_SENTIMENT, Q_TEAM_PREFIX};
use survey_core::settings::Section;
use survey_core::Result;
use tracing::debug;

use crate::aggregator::{
    FreeTextKind, FreeTextResponse, Kpis, LikertDistribution, LikertStat, SurveyAggregator,
    TextResponse, UsageStat, ValueCount,
};
use crate::filter::filter_by_people;
use crate::reader::load_survey;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    /// RFC 3339 local timestamp of generation.
    pub generated_at: String,
    pub section: Section,
    /// Selected respondents; empty means everyone.
    pub people: Vec<String>,
    /// Atomic rows before filtering.
    pub source_rows: usize,
    /// Atomic rows after filtering.
    pub filtered_rows: usize,
}

/// Front page: KPIs plus the sentiment and recommendation breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverSection {
    pub kpis: Kpis,
    pub sentiment: Vec<ValueCount>,
    pub recommendation: Vec<ValueCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageSection {
    pub activities: Vec<UsageStat>,
    pub modes: Vec<UsageStat>,
}

/// One Likert block, as stats and as a level breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerceptionSection {
    pub stats: Vec<LikertStat>,
    pub distribution: Vec<LikertDistribution>,
}

/// Impediments, training requests and comments, tagged by kind and kept in
/// that block order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeTextSection {
    pub responses: Vec<FreeTextResponse>,
}

impl FreeTextSection {
    /// Answers of one kind, newest first.
    pub fn of_kind(&self, kind: FreeTextKind) -> Vec<&TextResponse> {
        self.responses
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| &r.response)
            .collect()
    }
}

/// Everything the presentation layer renders. Sections not requested stay
/// `None` and are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyReport {
    pub metadata: ReportMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<CoverSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual: Option<PerceptionSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<PerceptionSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_text: Option<FreeTextSection>,
}

impl SurveyReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Build the report for `section` over the rows of `people`.
///
/// An empty `people` slice selects everyone. A selection matching nobody is
/// not an error: every block comes back empty and the KPIs are zero.
pub fn build_report<S: AsRef<str>>(
    table: &SurveyTable,
    people: &[S],
    section: Section,
) -> SurveyReport {
    let filtered = filter_by_people(table, people);
    debug!(
        "Building '{}' report over {} of {} rows",
        section,
        filtered.len(),
        table.len()
    );

    let metadata = ReportMetadata {
        generated_at: Local::now().to_rfc3339(),
        section,
        people: people.iter().map(|p| p.as_ref().trim().to_string()).collect(),
        source_rows: table.len(),
        filtered_rows: filtered.len(),
    };

    let cover = section.includes(Section::Portada).then(|| CoverSection {
        kpis: SurveyAggregator::compute_kpis(&filtered),
        sentiment: SurveyAggregator::value_counts(&filtered, Q_SENTIMENT),
        recommendation: SurveyAggregator::value_counts(&filtered, Q_NPS),
    });

    let usage = section.includes(Section::Uso).then(|| UsageSection {
        activities: SurveyAggregator::activity_stats(&filtered),
        modes: SurveyAggregator::mode_stats(&filtered),
    });

    let individual = section
        .includes(Section::PercepcionIndividual)
        .then(|| perception(&filtered, Q_INDIVIDUAL_PREFIX));
    let team = section
        .includes(Section::PercepcionEquipo)
        .then(|| perception(&filtered, Q_TEAM_PREFIX));

    let free_text = section.includes(Section::TextoLibre).then(|| FreeTextSection {
        responses: SurveyAggregator::free_text_responses(&filtered),
    });

    SurveyReport {
        metadata,
        cover,
        usage,
        individual,
        team,
        free_text,
    }
}

/// Load `path` and build the report in one call.
pub fn analyze_survey<S: AsRef<str>>(
    path: &Path,
    people: &[S],
    section: Section,
) -> Result<SurveyReport> {
    let table = load_survey(path)?;
    Ok(build_report(&table, people, section))
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn perception(table: &SurveyTable, prefix: &str) -> PerceptionSection {
    PerceptionSection {
        stats: SurveyAggregator::likert_stats(table, prefix),
        distribution: SurveyAggregator::likert_distribution(table, prefix),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
