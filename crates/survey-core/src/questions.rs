//! Fixed survey vocabulary: column names, question texts and keyword lists.
//!
//! Every literal here is matched exactly (accent- and case-sensitive) against
//! the export, so the strings must not be reformatted.

// ── Columns ───────────────────────────────────────────────────────────────────

pub const COL_ID: &str = "Id";
pub const COL_START_TIME: &str = "Hora de inicio";
pub const COL_END_TIME: &str = "Hora de finalización";
pub const COL_EMAIL: &str = "Correo electrónico";
pub const COL_NAME: &str = "Nombre";
pub const COL_ATTRIBUTE: &str = "Atributo";
pub const COL_VALUE: &str = "Valor";

/// Columns a sheet must carry to be accepted, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_ID,
    COL_START_TIME,
    COL_END_TIME,
    COL_EMAIL,
    COL_NAME,
    COL_ATTRIBUTE,
    COL_VALUE,
];

/// Separator between answers of a multi-select cell.
pub const MULTI_VALUE_DELIMITER: char = ';';

// ── Questions ─────────────────────────────────────────────────────────────────

pub const Q_SENTIMENT: &str = "¿Cómo te sentirías si ya no pudieras usar GitHub Copilot?";
pub const Q_USAGE: &str = "En las últimas 2 semanas, use Copilot para...";
pub const Q_USAGE_IMPACT: &str = "En las 2 últimas semanas usando Copilot...";
pub const Q_INDIVIDUAL_PREFIX: &str = "Al usar Copilot, yo";
pub const Q_TEAM_PREFIX: &str = "Al usar Copilot, mi equipo";
pub const Q_MODE: &str = "¿Qué tipo de modo preferís al usar Copilot?";
pub const Q_NPS: &str = "¿Qué tan probable es que recomiendes Copilot a un/a colega?";
pub const Q_IMPEDIMENTS: &str = "¿Existe algún impedimento para utilizar más Copilot?";
pub const Q_TRAINING: &str = "¿Que capacitaciones te ayudarían a sacarle más provecho?";
pub const Q_COMMENTS: &str = "Comentarios y recomendaciones que quieras hacer:";

/// Lower-case fragments that mark an impact answer as "saves time".
pub const TIME_SAVING_PATTERNS: [&str; 6] = [
    "ahorre tiempo",
    "ahorro tiempo",
    "ahorré tiempo",
    "ahorrar tiempo",
    "save time",
    "tiempo ahorrado",
];

/// Default export file name looked up when no path is given.
pub const DEFAULT_SURVEY_FILE: &str = "Encuesta de adopción de GitHub Copilot tabla.xlsx";

/// `true` when `attribute` belongs to one of the two Likert blocks.
pub fn is_likert_attribute(attribute: &str) -> bool {
    attribute.starts_with(Q_INDIVIDUAL_PREFIX) || attribute.starts_with(Q_TEAM_PREFIX)
}
