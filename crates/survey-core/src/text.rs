//! Free-text cleaning applied to every text cell of the export.

use std::sync::OnceLock;

use regex::Regex;

const NBSP: char = '\u{a0}';

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("regex is valid"))
}

/// Trim `s`, turn non-breaking spaces into plain spaces and collapse every
/// whitespace run into a single space.
///
/// ```
/// use survey_core::text::clean_text;
///
/// assert_eq!(clean_text("  Chat\u{a0}\u{a0}en   el IDE \n"), "Chat en el IDE");
/// assert_eq!(clean_text(""), "");
/// ```
pub fn clean_text(s: &str) -> String {
    let replaced = s.trim().replace(NBSP, " ");
    whitespace_run().replace_all(&replaced, " ").into_owned()
}

/// Null-preserving variant of [`clean_text`] for optional cells.
pub fn clean_optional(s: Option<&str>) -> Option<String> {
    s.map(clean_text)
}
