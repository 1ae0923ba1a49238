use chrono::NaiveDateTime;

/// Round `value` to `decimal_places` digits after the point, ties to even.
///
/// # Examples
///
/// ```
/// use survey_core::formatting::round_to;
///
/// assert_eq!(round_to(0.666_666, 2), 0.67);
/// assert_eq!(round_to(0.125, 2), 0.12);
/// assert_eq!(round_to(6.25, 1), 6.2);
/// ```
pub fn round_to(value: f64, decimal_places: u32) -> f64 {
    let factor = 10_f64.powi(decimal_places as i32);
    (value * factor).round_ties_even() / factor
}

/// Calculate `(part / whole) * 100`, rounded to `decimal_places`.
///
/// Returns `0.0` if `whole` is zero to avoid division by zero.
///
/// # Examples
///
/// ```
/// use survey_core::formatting::percentage;
///
/// assert!((percentage(50.0, 200.0, 1) - 25.0).abs() < 1e-9);
/// assert_eq!(percentage(0.0, 0.0, 2), 0.0);
/// ```
pub fn percentage(part: f64, whole: f64, decimal_places: u32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    round_to((part / whole) * 100.0, decimal_places)
}

/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use survey_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-0.75, 2), "-0.75");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    let fixed = format!("{:.*}", decimals as usize, value.abs());
    let (digits, fraction) = match fixed.split_once('.') {
        Some((digits, fraction)) => (digits, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + 4);
    // No sign on values that print as zero.
    if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    out.push_str(&group_thousands(digits));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Format a percentage value (already in `0..=100`) with a `%` suffix.
///
/// ```
/// use survey_core::formatting::format_percent;
///
/// assert_eq!(format_percent(66.666, 1), "66.7%");
/// assert_eq!(format_percent(-25.0, 0), "-25%");
/// ```
pub fn format_percent(value: f64, decimals: u32) -> String {
    format!("{}%", format_number(value, decimals))
}

/// Day-first rendering used for response timestamps; `-` when missing.
pub fn format_timestamp(ts: Option<&NaiveDateTime>) -> String {
    match ts {
        Some(ts) => ts.format("%d/%m/%Y %H:%M").to_string(),
        None => "-".to_string(),
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// `1234567` → `1,234,567`.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ── Tests ──────────────────────────────────────────────────────────────────────
