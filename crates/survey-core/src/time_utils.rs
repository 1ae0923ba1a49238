use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use tracing::warn;

// ── TimestampParser ───────────────────────────────────────────────────────────

/// Parses the start/end timestamps found in survey exports.
///
/// Exports written with a Spanish locale put the day first, so ambiguous
/// slash dates (`03/04/2024`) are read as day/month.
pub struct TimestampParser;

impl TimestampParser {
    /// Day-first patterns tried after the ISO forms. Two-digit years go
    /// before four-digit ones because `%Y` also accepts `24`.
    const FORMATS: &'static [&'static str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%d/%m/%y %H:%M:%S",
        "%d/%m/%y %H:%M",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
        "%d-%m-%Y %H:%M:%S",
        "%d-%m-%Y %H:%M",
        "%d.%m.%Y %H:%M:%S",
    ];

    const DATE_FORMATS: &'static [&'static str] = &["%Y-%m-%d", "%d/%m/%y", "%d/%m/%Y", "%d-%m-%Y"];

    /// Parse a text cell. Returns `None` for blank or unrecognised input;
    /// the caller keeps the row with a missing timestamp.
    pub fn parse_str(s: &str) -> Option<NaiveDateTime> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        // Offset-carrying ISO 8601 keeps its wall-clock time.
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_local());
        }

        for fmt in Self::FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(naive);
            }
        }

        for fmt in Self::DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                return date.and_hms_opt(0, 0, 0);
            }
        }

        warn!("TimestampParser: could not parse timestamp \"{}\"", s);
        None
    }

    /// Convert a spreadsheet serial day number (days since 1899-12-30, with
    /// the fraction as time of day) into a timestamp.
    pub fn from_serial(serial: f64) -> Option<NaiveDateTime> {
        if !serial.is_finite() || serial < 0.0 {
            return None;
        }
        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
        let millis = (serial * 86_400_000.0).round() as i64;
        epoch.checked_add_signed(Duration::milliseconds(millis))
    }
}
