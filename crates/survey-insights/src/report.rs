//! Plain-text rendering of survey reports.
//!
//! Tables are aligned by display width so accented Spanish text lines up.

use std::fmt::Write as _;

use survey_core::formatting::{format_number, format_percent, format_timestamp};
use survey_core::questions::REQUIRED_COLUMNS;
use survey_core::settings::ALL_PEOPLE;
use survey_core::SurveyError;
use survey_data::aggregator::{
    FreeTextKind, LikertDistribution, LikertStat, TextResponse, UsageStat, ValueCount,
};
use survey_data::analysis::{PerceptionSection, SurveyReport};
use survey_data::quality::QualityReport;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a free-text cell may get before it is truncated.
const MAX_CELL_WIDTH: usize = 60;

const NO_DATA: &str = "Sin datos para la selección.";

// ── TextTable ─────────────────────────────────────────────────────────────────

/// Minimal column-aligned table.
#[derive(Debug, Clone)]
pub struct TextTable {
    headers: Vec<String>,
    right_aligned: Vec<bool>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            right_aligned: vec![false; headers.len()],
            rows: Vec::new(),
        }
    }

    /// Right-align the given columns (numbers).
    pub fn align_right(mut self, columns: &[usize]) -> Self {
        for &col in columns {
            if let Some(flag) = self.right_aligned.get_mut(col) {
                *flag = true;
            }
        }
        self
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        let mut cells: Vec<String> = cells
            .into_iter()
            .map(|c| truncate_to_width(&c, MAX_CELL_WIDTH))
            .collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|r| r[col].width())
                    .chain(std::iter::once(self.headers[col].width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        self.render_line(&mut out, &self.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let _ = writeln!(out, "{}", rule.join("  "));
        for row in &self.rows {
            self.render_line(&mut out, row, &widths);
        }
        out
    }

    fn render_line(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .zip(&self.right_aligned)
            .map(|((cell, width), right)| pad(cell, *width, *right))
            .collect();
        let _ = writeln!(out, "{}", padded.join("  ").trim_end());
    }
}

fn pad(cell: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right {
        format!("{fill}{cell}")
    } else {
        format!("{cell}{fill}")
    }
}

/// Cut `text` to at most `max_width` columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

// ── Report ────────────────────────────────────────────────────────────────────

/// Full text rendering of `report`.
pub fn render_report(report: &SurveyReport) -> String {
    let mut out = String::new();
    let meta = &report.metadata;

    let people = if meta.people.is_empty() {
        ALL_PEOPLE.to_string()
    } else {
        meta.people.join(", ")
    };
    let _ = writeln!(out, "Encuesta de adopción de GitHub Copilot");
    let _ = writeln!(out, "Personas: {people}");
    let _ = writeln!(
        out,
        "Filas: {} de {}",
        format_number(meta.filtered_rows as f64, 0),
        format_number(meta.source_rows as f64, 0)
    );

    if let Some(cover) = &report.cover {
        heading(&mut out, "Portada");
        let _ = writeln!(
            out,
            "Respondentes: {}",
            format_number(cover.kpis.respondents as f64, 0)
        );
        let _ = writeln!(out, "NPS: {}", format_number(cover.kpis.nps, 1));
        let _ = writeln!(
            out,
            "Ahorro de tiempo: {}",
            format_percent(cover.kpis.time_savings_pct, 1)
        );
        subheading(&mut out, "Sentimiento si ya no pudieras usar Copilot");
        out.push_str(&value_count_table(&cover.sentiment));
        subheading(&mut out, "Recomendación");
        out.push_str(&value_count_table(&cover.recommendation));
    }

    if let Some(usage) = &report.usage {
        heading(&mut out, "Uso");
        subheading(&mut out, "Actividades en las últimas 2 semanas");
        out.push_str(&usage_table("Actividad", &usage.activities));
        subheading(&mut out, "Modo preferido");
        out.push_str(&usage_table("Modo", &usage.modes));
    }

    if let Some(section) = &report.individual {
        heading(&mut out, "Percepción individual");
        out.push_str(&perception(section));
    }

    if let Some(section) = &report.team {
        heading(&mut out, "Percepción del equipo");
        out.push_str(&perception(section));
    }

    if let Some(free) = &report.free_text {
        heading(&mut out, "Texto libre");
        for kind in FreeTextKind::ALL {
            subheading(&mut out, kind.label());
            out.push_str(&text_table(&free.of_kind(kind)));
        }
    }

    out
}

/// One name per line, for `--list-people`.
pub fn render_people(names: &[String]) -> String {
    if names.is_empty() {
        return format!("{NO_DATA}\n");
    }
    let mut out = String::new();
    for name in names {
        let _ = writeln!(out, "{name}");
    }
    out
}

pub fn render_quality(quality: &QualityReport) -> String {
    let yes_no = |b: bool| if b { "sí" } else { "no" };
    let mut table = TextTable::new(&["Control", "Resultado"]).align_right(&[1]);
    table.push_row(vec!["Filas".into(), quality.total_rows.to_string()]);
    table.push_row(vec!["Correos únicos".into(), quality.unique_emails.to_string()]);
    table.push_row(vec!["Nombres únicos".into(), quality.unique_names.to_string()]);
    table.push_row(vec![
        "Correos y nombres coinciden".into(),
        yes_no(quality.emails_match_names).into(),
    ]);
    table.push_row(vec![
        "Valores con ';'".into(),
        quality.residual_delimiters.to_string(),
    ]);
    table.push_row(vec![
        "Likert mapeadas".into(),
        format!(
            "{}/{} ({})",
            quality.likert_mapped,
            quality.likert_rows,
            format_percent(quality.likert_mapping_pct, 1)
        ),
    ]);
    table.push_row(vec![
        "NPS clasificadas".into(),
        format!(
            "{}/{} ({})",
            quality.nps_classified,
            quality.nps_rows,
            format_percent(quality.nps_classified_pct, 1)
        ),
    ]);
    table.render()
}

// ── Failure messages ──────────────────────────────────────────────────────────

/// User-facing text for a failed load.
///
/// Load failures get an empty-state notice, schema failures a hint listing
/// the expected columns.
pub fn failure_message(err: &SurveyError) -> String {
    if err.is_schema_failure() {
        let mut out = format!("{err}\n\nEl archivo debe tener estas columnas:\n");
        for col in REQUIRED_COLUMNS {
            let _ = writeln!(out, "  - {col}");
        }
        out
    } else if err.is_load_failure() {
        format!("No hay datos para mostrar.\n{err}\n")
    } else {
        format!("{err}\n")
    }
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n== {title} ==");
}

fn subheading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}");
}

fn or_no_data(table: TextTable) -> String {
    if table.is_empty() {
        format!("{NO_DATA}\n")
    } else {
        table.render()
    }
}

fn value_count_table(counts: &[ValueCount]) -> String {
    let mut table = TextTable::new(&["Respuesta", "Cantidad"]).align_right(&[1]);
    for c in counts {
        table.push_row(vec![c.value.clone(), c.count.to_string()]);
    }
    or_no_data(table)
}

fn usage_table(label: &str, stats: &[UsageStat]) -> String {
    let mut table = TextTable::new(&[label, "Usuarios", "%"]).align_right(&[1, 2]);
    for s in stats {
        table.push_row(vec![
            s.value.clone(),
            s.users.to_string(),
            format_percent(s.percentage, 1),
        ]);
    }
    or_no_data(table)
}

fn perception(section: &PerceptionSection) -> String {
    let mut out = likert_table(&section.stats);
    subheading(&mut out, "Distribución");
    out.push_str(&distribution_table(&section.distribution));
    out
}

fn likert_table(stats: &[LikertStat]) -> String {
    let mut table = TextTable::new(&["Pregunta", "Promedio", "Respuestas", "De acuerdo", "%"])
        .align_right(&[1, 2, 3, 4]);
    for s in stats {
        table.push_row(vec![
            s.attribute.clone(),
            format_number(s.mean, 2),
            s.responses.to_string(),
            s.agree_responses.to_string(),
            format_percent(s.agree_pct, 1),
        ]);
    }
    or_no_data(table)
}

fn distribution_table(distribution: &[LikertDistribution]) -> String {
    let Some(first) = distribution.first() else {
        return format!("{NO_DATA}\n");
    };
    let mut headers: Vec<&str> = vec!["Pregunta"];
    headers.extend(first.levels.iter().map(|l| l.label.as_str()));
    let numeric: Vec<usize> = (1..headers.len()).collect();

    let mut table = TextTable::new(&headers).align_right(&numeric);
    for d in distribution {
        let mut row = vec![d.question.clone()];
        row.extend(d.levels.iter().map(|l| format_percent(l.percentage, 1)));
        table.push_row(row);
    }
    table.render()
}

fn text_table(responses: &[&TextResponse]) -> String {
    let mut table = TextTable::new(&["Fecha", "Nombre", "Correo", "Respuesta"]);
    for r in responses {
        table.push_row(vec![
            format_timestamp(r.start_time.as_ref()),
            r.name.clone(),
            r.email.clone(),
            r.value.clone(),
        ]);
    }
    or_no_data(table)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
