//! Summary tables and KPIs over a processed survey table.
//!
//! Every entry point returns an empty collection (never an error) when no row
//! matches, so callers decide how to show "no data".

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDateTime;
use serde::Serialize;
use survey_core::classifier::AGREEMENT_LEVELS;
use survey_core::formatting::{percentage, round_to};
use survey_core::models::{NpsClass, ResponseRow, SurveyTable};
use survey_core::questions::{
    Q_COMMENTS, Q_IMPEDIMENTS, Q_MODE, Q_TRAINING, Q_USAGE, Q_USAGE_IMPACT, TIME_SAVING_PATTERNS,
};

// ── Output rows ───────────────────────────────────────────────────────────────

/// Share of respondents who picked one answer of a multi-select question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageStat {
    pub value: String,
    /// Distinct e-mails that picked this answer.
    pub users: usize,
    /// `users` over the distinct e-mails of the whole table, 1 decimal.
    pub percentage: f64,
}

/// Agreement summary of one Likert question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikertStat {
    pub attribute: String,
    /// Mean score, 2 decimals.
    pub mean: f64,
    pub responses: usize,
    /// Responses scoring 1 or 2.
    pub agree_responses: usize,
    /// `agree_responses` over `responses`, 1 decimal.
    pub agree_pct: f64,
}

/// A free-text answer with who gave it and when.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextResponse {
    pub email: String,
    pub name: String,
    pub start_time: Option<NaiveDateTime>,
    pub value: String,
}

/// The three free-text questions of the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FreeTextKind {
    Impedimentos,
    Capacitaciones,
    Comentarios,
}

impl FreeTextKind {
    pub const ALL: [FreeTextKind; 3] = [
        FreeTextKind::Impedimentos,
        FreeTextKind::Capacitaciones,
        FreeTextKind::Comentarios,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FreeTextKind::Impedimentos => "Impedimentos",
            FreeTextKind::Capacitaciones => "Capacitaciones",
            FreeTextKind::Comentarios => "Comentarios",
        }
    }

    /// Question text answered by this kind.
    pub fn question(self) -> &'static str {
        match self {
            FreeTextKind::Impedimentos => Q_IMPEDIMENTS,
            FreeTextKind::Capacitaciones => Q_TRAINING,
            FreeTextKind::Comentarios => Q_COMMENTS,
        }
    }
}

/// A free-text answer tagged with the question it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeTextResponse {
    pub kind: FreeTextKind,
    #[serde(flatten)]
    pub response: TextResponse,
}

/// Headline numbers for the cover page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Kpis {
    /// Distinct e-mails in the table.
    pub respondents: usize,
    /// % promoters minus % detractors over classified rows.
    pub nps: f64,
    /// % of impact-question respondents reporting time savings.
    pub time_savings_pct: f64,
}

/// Number of rows carrying one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Share of scored responses at one agreement level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelShare {
    pub score: i8,
    pub label: String,
    pub count: usize,
    /// 1 decimal.
    pub percentage: f64,
}

/// Agreement breakdown of one Likert question, strongest disagreement first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikertDistribution {
    /// Question text with the block prefix removed.
    pub question: String,
    pub responses: usize,
    pub levels: Vec<LevelShare>,
}

// ── SurveyAggregator ──────────────────────────────────────────────────────────

/// Stateless helper that turns response rows into summary tables.
pub struct SurveyAggregator;

impl SurveyAggregator {
    /// Usage activities picked in the last two weeks.
    pub fn activity_stats(table: &SurveyTable) -> Vec<UsageStat> {
        Self::usage_stats(table, Q_USAGE)
    }

    /// Preferred interaction modes.
    pub fn mode_stats(table: &SurveyTable) -> Vec<UsageStat> {
        Self::usage_stats(table, Q_MODE)
    }

    /// Distinct-respondent share of each answer to `attribute`.
    ///
    /// The denominator is the distinct e-mail count of the whole `table`, so
    /// on a multi-select question the percentages need not sum to 100.
    /// Sorted by descending percentage; ties keep answer order.
    pub fn usage_stats(table: &SurveyTable, attribute: &str) -> Vec<UsageStat> {
        let mut groups: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
        for row in table.with_attribute(attribute) {
            let emails = groups.entry(row.value.as_str()).or_default();
            if !row.email.is_empty() {
                emails.insert(row.email.as_str());
            }
        }
        if groups.is_empty() {
            return Vec::new();
        }

        let total = table.distinct_emails() as f64;
        let mut stats: Vec<UsageStat> = groups
            .into_iter()
            .map(|(value, emails)| UsageStat {
                value: value.to_string(),
                users: emails.len(),
                percentage: percentage(emails.len() as f64, total, 1),
            })
            .collect();

        stats.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        stats
    }

    /// Per-question agreement summary for every question under `prefix`,
    /// ordered by question text. Rows without a score are ignored.
    pub fn likert_stats(table: &SurveyTable, prefix: &str) -> Vec<LikertStat> {
        let mut groups: BTreeMap<&str, Vec<i8>> = BTreeMap::new();
        for row in table.iter().filter(|r| r.attribute.starts_with(prefix)) {
            if let Some(score) = row.likert_score {
                groups.entry(row.attribute.as_str()).or_default().push(score);
            }
        }

        groups
            .into_iter()
            .map(|(attribute, scores)| {
                let responses = scores.len();
                let sum: i64 = scores.iter().map(|s| i64::from(*s)).sum();
                let agree_responses = scores.iter().filter(|s| matches!(**s, 1 | 2)).count();
                LikertStat {
                    attribute: attribute.to_string(),
                    mean: round_to(sum as f64 / responses as f64, 2),
                    responses,
                    agree_responses,
                    agree_pct: percentage(agree_responses as f64, responses as f64, 1),
                }
            })
            .collect()
    }

    /// Non-blank answers to `attribute`, newest first; rows without a start
    /// time go last.
    pub fn text_responses(table: &SurveyTable, attribute: &str) -> Vec<TextResponse> {
        let mut responses: Vec<TextResponse> = table
            .with_attribute(attribute)
            .filter(|r| !r.value.trim().is_empty())
            .map(|r| TextResponse {
                email: r.email.clone(),
                name: r.name.clone(),
                start_time: r.start_time,
                value: r.value.clone(),
            })
            .collect();

        responses.sort_by(|a, b| match (a.start_time, b.start_time) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        responses
    }

    /// Impediments, training requests and comments in one list, each block
    /// ordered as [`SurveyAggregator::text_responses`].
    pub fn free_text_responses(table: &SurveyTable) -> Vec<FreeTextResponse> {
        FreeTextKind::ALL
            .iter()
            .flat_map(|kind| {
                Self::text_responses(table, kind.question())
                    .into_iter()
                    .map(move |response| FreeTextResponse {
                        kind: *kind,
                        response,
                    })
            })
            .collect()
    }

    /// Respondent count, NPS and time-savings share.
    ///
    /// The time-savings denominator is the respondents who answered the
    /// impact question, not the whole population.
    pub fn compute_kpis(table: &SurveyTable) -> Kpis {
        Kpis {
            respondents: table.distinct_emails(),
            nps: Self::nps_score(table.iter()),
            time_savings_pct: Self::time_savings_pct(table),
        }
    }

    /// Row count per answer to `attribute`, most frequent first; ties keep
    /// first-appearance order.
    pub fn value_counts(table: &SurveyTable, attribute: &str) -> Vec<ValueCount> {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for row in table.with_attribute(attribute) {
            let count = counts.entry(row.value.as_str()).or_insert_with(|| {
                order.push(row.value.as_str());
                0
            });
            *count += 1;
        }

        let mut result: Vec<ValueCount> = order
            .into_iter()
            .map(|value| ValueCount {
                value: value.to_string(),
                count: counts.get(value).copied().unwrap_or(0),
            })
            .collect();
        result.sort_by(|a, b| b.count.cmp(&a.count));
        result
    }

    /// Per-question share of each agreement level for questions under
    /// `prefix`, ordered by the shortened question text.
    pub fn likert_distribution(table: &SurveyTable, prefix: &str) -> Vec<LikertDistribution> {
        let mut groups: BTreeMap<String, Vec<i8>> = BTreeMap::new();
        for row in table.iter().filter(|r| r.attribute.starts_with(prefix)) {
            if let Some(score) = row.likert_score {
                let question = row.attribute.replace(prefix, "").trim().to_string();
                groups.entry(question).or_default().push(score);
            }
        }

        groups
            .into_iter()
            .map(|(question, scores)| {
                let responses = scores.len();
                let levels = AGREEMENT_LEVELS
                    .iter()
                    .map(|(score, label)| {
                        let count = scores.iter().filter(|s| *s == score).count();
                        LevelShare {
                            score: *score,
                            label: label.to_string(),
                            count,
                            percentage: percentage(count as f64, responses as f64, 1),
                        }
                    })
                    .collect();
                LikertDistribution {
                    question,
                    responses,
                    levels,
                }
            })
            .collect()
    }

    // ── Private ────────────────────────────────────────────────────────────

    fn nps_score<'a>(rows: impl Iterator<Item = &'a ResponseRow>) -> f64 {
        let mut total = 0usize;
        let mut promoters = 0usize;
        let mut detractors = 0usize;
        for class in rows.filter_map(|r| r.nps_class) {
            total += 1;
            match class {
                NpsClass::Promoter => promoters += 1,
                NpsClass::Detractor => detractors += 1,
                NpsClass::Passive => {}
            }
        }
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        promoters as f64 / total * 100.0 - detractors as f64 / total * 100.0
    }

    fn time_savings_pct(table: &SurveyTable) -> f64 {
        let mut saves_time: HashMap<&str, bool> = HashMap::new();
        for row in table.with_attribute(Q_USAGE_IMPACT) {
            if row.email.is_empty() {
                continue;
            }
            let entry = saves_time.entry(row.email.as_str()).or_insert(false);
            *entry |= mentions_time_saving(&row.value);
        }

        let answered = saves_time.len();
        if answered == 0 {
            return 0.0;
        }
        let saving = saves_time.values().filter(|s| **s).count();
        saving as f64 / answered as f64 * 100.0
    }
}

/// `true` when `answer`, lowercased, contains a time-saving phrase.
pub fn mentions_time_saving(answer: &str) -> bool {
    let lower = answer.to_lowercase();
    TIME_SAVING_PATTERNS.iter().any(|p| lower.contains(p))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use survey_core::classifier::classify_row;
    use survey_core::questions::{Q_INDIVIDUAL_PREFIX, Q_NPS, Q_SENTIMENT, Q_TEAM_PREFIX};

    const YO_PRODUCTIVO: &str = "Al usar Copilot, yo soy más productivo";
    const YO_APRENDO: &str = "Al usar Copilot, yo aprendo más rápido";
    const EQUIPO: &str = "Al usar Copilot, mi equipo entrega antes";

    fn row(email: &str, name: &str, attribute: &str, value: &str) -> ResponseRow {
        classify_row(&ResponseRow {
            id: Some(1),
            start_time: None,
            end_time: None,
            email: email.to_string(),
            name: name.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
            likert_score: None,
            nps_class: None,
        })
    }

    fn at(day: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 1, day).and_then(|d| d.and_hms_opt(10, 0, 0))
    }

    // ── usage stats ───────────────────────────────────────────────────────────

    #[test]
    fn test_activity_stats_counts_distinct_emails() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", Q_USAGE, "Chat"),
            row("a@x", "Ana", Q_USAGE, "Autocompletado"),
            row("a@x", "Ana", Q_USAGE, "Chat"),
        ]);
        let stats = SurveyAggregator::activity_stats(&table);
        let chat = stats.iter().find(|s| s.value == "Chat").unwrap();
        assert_eq!(chat.users, 1);
        assert_eq!(chat.percentage, 100.0);
        assert_eq!(stats.len(), 2);
        // Multi-select: shares need not add up to 100.
        let sum: f64 = stats.iter().map(|s| s.percentage).sum();
        assert_eq!(sum, 200.0);
    }

    #[test]
    fn test_usage_percentage_uses_whole_table() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", Q_USAGE, "Chat"),
            row("b@x", "Bea", Q_USAGE, "Chat"),
            row("b@x", "Bea", Q_USAGE, "Tests"),
            row("c@x", "Caro", Q_NPS, "Recomendable"),
        ]);
        let stats = SurveyAggregator::activity_stats(&table);
        assert_eq!(stats[0].value, "Chat");
        assert_eq!(stats[0].users, 2);
        assert_eq!(stats[0].percentage, 66.7);
        assert_eq!(stats[1].value, "Tests");
        assert_eq!(stats[1].percentage, 33.3);
    }

    #[test]
    fn test_usage_ties_keep_value_order() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", Q_MODE, "Chat"),
            row("b@x", "Bea", Q_MODE, "Agente"),
            row("c@x", "Caro", Q_MODE, "Edición"),
            row("d@x", "Dani", Q_MODE, "Edición"),
        ]);
        let values: Vec<String> = SurveyAggregator::mode_stats(&table)
            .into_iter()
            .map(|s| s.value)
            .collect();
        assert_eq!(values, vec!["Edición", "Agente", "Chat"]);
    }

    #[test]
    fn test_usage_stats_empty_slice() {
        let table = SurveyTable::new(vec![row("a@x", "Ana", Q_NPS, "Recomendable")]);
        assert!(SurveyAggregator::activity_stats(&table).is_empty());
        assert!(SurveyAggregator::mode_stats(&SurveyTable::default()).is_empty());
    }

    // ── likert stats ──────────────────────────────────────────────────────────

    #[test]
    fn test_likert_stats_scenario() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", YO_PRODUCTIVO, "Estoy muy de acuerdo"),
            row("b@x", "Bea", YO_PRODUCTIVO, "Neutro"),
        ]);
        let stats = SurveyAggregator::likert_stats(&table, Q_INDIVIDUAL_PREFIX);
        assert_eq!(stats.len(), 1);
        let stat = &stats[0];
        assert_eq!(stat.attribute, YO_PRODUCTIVO);
        assert_eq!(stat.mean, 1.0);
        assert_eq!(stat.responses, 2);
        assert_eq!(stat.agree_responses, 1);
        assert_eq!(stat.agree_pct, 50.0);
    }

    #[test]
    fn test_likert_stats_zero_agree_reports_zero() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", YO_APRENDO, "En desacuerdo"),
            row("b@x", "Bea", YO_APRENDO, "Muy en desacuerdo"),
            row("c@x", "Caro", YO_APRENDO, "Neutral"),
        ]);
        let stat = &SurveyAggregator::likert_stats(&table, Q_INDIVIDUAL_PREFIX)[0];
        assert_eq!(stat.agree_responses, 0);
        assert_eq!(stat.agree_pct, 0.0);
        assert_eq!(stat.mean, -1.0);
    }

    #[test]
    fn test_likert_stats_ignores_unscored_and_other_prefix() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", YO_PRODUCTIVO, "Estoy de acuerdo"),
            row("b@x", "Bea", YO_PRODUCTIVO, "Depende del día"),
            row("c@x", "Caro", EQUIPO, "Estoy muy de acuerdo"),
            row("a@x", "Ana", YO_APRENDO, "De acuerdo"),
            row("b@x", "Bea", YO_APRENDO, "Estoy muy en desacuerdo."),
            row("c@x", "Caro", YO_APRENDO, "De acuerdo"),
        ]);
        let stats = SurveyAggregator::likert_stats(&table, Q_INDIVIDUAL_PREFIX);
        let attributes: Vec<&str> = stats.iter().map(|s| s.attribute.as_str()).collect();
        // Ordered by question text.
        assert_eq!(attributes, vec![YO_APRENDO, YO_PRODUCTIVO]);
        assert_eq!(stats[1].responses, 1);
        assert_eq!(stats[0].mean, 0.0);
        assert_eq!(stats[0].agree_pct, 66.7);

        let team = SurveyAggregator::likert_stats(&table, Q_TEAM_PREFIX);
        assert_eq!(team.len(), 1);
        assert_eq!(team[0].mean, 2.0);
    }

    #[test]
    fn test_likert_stats_mean_rounds_to_two_decimals() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", YO_PRODUCTIVO, "Muy de acuerdo"),
            row("b@x", "Bea", YO_PRODUCTIVO, "De acuerdo"),
            row("c@x", "Caro", YO_PRODUCTIVO, "De acuerdo"),
        ]);
        let stat = &SurveyAggregator::likert_stats(&table, Q_INDIVIDUAL_PREFIX)[0];
        assert_eq!(stat.mean, 1.33);
        assert_eq!(stat.agree_pct, 100.0);
    }

    #[test]
    fn test_likert_stats_midpoints_round_half_to_even() {
        let answers = |neutral: usize| -> SurveyTable {
            let mut rows = vec![row("a@x", "Ana", YO_PRODUCTIVO, "De acuerdo")];
            rows.extend(
                (0..neutral).map(|i| row(&format!("n{i}@x"), "Neutra", YO_PRODUCTIVO, "Neutro")),
            );
            SurveyTable::new(rows)
        };

        // 1 / 8 = 0.125
        let eight = &SurveyAggregator::likert_stats(&answers(7), Q_INDIVIDUAL_PREFIX)[0];
        assert_eq!(eight.responses, 8);
        assert_eq!(eight.mean, 0.12);
        assert_eq!(eight.agree_pct, 12.5);

        // 1 / 16 = 6.25%
        let sixteen = &SurveyAggregator::likert_stats(&answers(15), Q_INDIVIDUAL_PREFIX)[0];
        assert_eq!(sixteen.responses, 16);
        assert_eq!(sixteen.agree_pct, 6.2);
        assert_eq!(sixteen.mean, 0.06);
    }

    #[test]
    fn test_likert_stats_empty() {
        assert!(SurveyAggregator::likert_stats(&SurveyTable::default(), Q_TEAM_PREFIX).is_empty());
    }

    // ── text responses ────────────────────────────────────────────────────────

    #[test]
    fn test_text_responses_newest_first_blank_dropped() {
        let mut old = row("a@x", "Ana", Q_IMPEDIMENTS, "Licencias");
        old.start_time = at(3);
        let mut new = row("b@x", "Bea", Q_IMPEDIMENTS, "Proxy corporativo");
        new.start_time = at(20);
        let mut undated = row("c@x", "Caro", Q_IMPEDIMENTS, "Tiempo");
        undated.start_time = None;
        let blank = row("d@x", "Dani", Q_IMPEDIMENTS, "   ");
        let other = row("e@x", "Eli", Q_COMMENTS, "Gracias");

        let table = SurveyTable::new(vec![undated, old, blank, new, other]);
        let responses = SurveyAggregator::text_responses(&table, Q_IMPEDIMENTS);
        let values: Vec<&str> = responses.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["Proxy corporativo", "Licencias", "Tiempo"]);
        assert_eq!(responses[0].name, "Bea");
        assert_eq!(responses[0].email, "b@x");
        assert_eq!(responses[0].start_time, at(20));
    }

    #[test]
    fn test_free_text_responses_tagged_by_kind() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", Q_COMMENTS, "Gracias"),
            row("b@x", "Bea", Q_TRAINING, "Prompting"),
            row("c@x", "Caro", Q_IMPEDIMENTS, "Licencias"),
        ]);
        let all = SurveyAggregator::free_text_responses(&table);
        let kinds: Vec<FreeTextKind> = all.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FreeTextKind::Impedimentos,
                FreeTextKind::Capacitaciones,
                FreeTextKind::Comentarios
            ]
        );
        let json = serde_json::to_value(&all[0]).unwrap();
        assert_eq!(json["kind"], "Impedimentos");
        assert_eq!(json["value"], "Licencias");
    }

    // ── kpis ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_kpis_empty_table() {
        let kpis = SurveyAggregator::compute_kpis(&SurveyTable::default());
        assert_eq!(kpis, Kpis::default());
    }

    #[test]
    fn test_kpis_nps() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", Q_NPS, "Muy recomendable"),
            row("b@x", "Bea", Q_NPS, "Recomendable"),
            row("c@x", "Caro", Q_NPS, "Poco recomendable"),
            row("d@x", "Dani", Q_NPS, "???"),
            row("e@x", "Eli", Q_USAGE, "Chat"),
        ]);
        let kpis = SurveyAggregator::compute_kpis(&table);
        assert_eq!(kpis.respondents, 5);
        // 2 promoters, 1 passive, 1 defaulted detractor out of 4.
        assert!((kpis.nps - 25.0).abs() < 1e-9);
        assert_eq!(kpis.time_savings_pct, 0.0);
    }

    #[test]
    fn test_kpis_no_nps_rows() {
        let table = SurveyTable::new(vec![row("a@x", "Ana", Q_USAGE, "Chat")]);
        assert_eq!(SurveyAggregator::compute_kpis(&table).nps, 0.0);
    }

    #[test]
    fn test_kpis_time_savings_per_respondent() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", Q_USAGE_IMPACT, "Ahorré tiempo en tareas repetitivas"),
            row("a@x", "Ana", Q_USAGE_IMPACT, "Aprendí algo nuevo"),
            row("b@x", "Bea", Q_USAGE_IMPACT, "Mejoré la calidad"),
            row("c@x", "Caro", Q_USAGE_IMPACT, "It helps me SAVE TIME"),
            row("d@x", "Dani", Q_USAGE_IMPACT, "Nada"),
            // Did not answer the impact question: outside the denominator.
            row("e@x", "Eli", Q_USAGE, "Chat"),
        ]);
        let kpis = SurveyAggregator::compute_kpis(&table);
        assert_eq!(kpis.respondents, 5);
        assert!((kpis.time_savings_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_mentions_time_saving_patterns() {
        assert!(mentions_time_saving("Ahorro tiempo al escribir tests"));
        assert!(mentions_time_saving("quiero ahorrar tiempo"));
        assert!(mentions_time_saving("Tiempo ahorrado: mucho"));
        assert!(mentions_time_saving("ahorre tiempo"));
        assert!(!mentions_time_saving("ahorré dinero"));
    }

    // ── value counts / distribution ───────────────────────────────────────────

    #[test]
    fn test_value_counts() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", Q_SENTIMENT, "Algo decepcionado"),
            row("b@x", "Bea", Q_SENTIMENT, "Muy decepcionado"),
            row("c@x", "Caro", Q_SENTIMENT, "Muy decepcionado"),
            row("d@x", "Dani", Q_SENTIMENT, "No me importaría"),
        ]);
        let counts = SurveyAggregator::value_counts(&table, Q_SENTIMENT);
        assert_eq!(
            counts,
            vec![
                ValueCount { value: "Muy decepcionado".into(), count: 2 },
                ValueCount { value: "Algo decepcionado".into(), count: 1 },
                ValueCount { value: "No me importaría".into(), count: 1 },
            ]
        );
        assert!(SurveyAggregator::value_counts(&table, Q_NPS).is_empty());
    }

    #[test]
    fn test_likert_distribution() {
        let table = SurveyTable::new(vec![
            row("a@x", "Ana", YO_PRODUCTIVO, "Estoy muy de acuerdo"),
            row("b@x", "Bea", YO_PRODUCTIVO, "Neutro"),
            row("c@x", "Caro", YO_PRODUCTIVO, "Muy de acuerdo"),
            row("d@x", "Dani", YO_PRODUCTIVO, "sin opinión"),
        ]);
        let dist = SurveyAggregator::likert_distribution(&table, Q_INDIVIDUAL_PREFIX);
        assert_eq!(dist.len(), 1);
        assert_eq!(dist[0].question, "soy más productivo");
        assert_eq!(dist[0].responses, 3);
        assert_eq!(dist[0].levels.len(), 5);
        let strong = dist[0].levels.iter().find(|l| l.score == 2).unwrap();
        assert_eq!(strong.count, 2);
        assert_eq!(strong.label, "Muy de acuerdo");
        assert_eq!(strong.percentage, 66.7);
        let against = dist[0].levels.iter().find(|l| l.score == -1).unwrap();
        assert_eq!(against.count, 0);
        assert_eq!(against.percentage, 0.0);
    }
}
