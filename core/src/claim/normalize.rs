use once_cell::sync::Lazy;
use regex::Regex;

const QUOTE_CHARS: &[char] = &['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonical comparable form of a claim: lowercase, single-spaced, without
/// surrounding quotes. Never fails; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lowered = text.trim().to_lowercase();
    // Whitespace and quotes are stripped in one pass so a quoted, padded claim
    // cannot expose a new quote layer on a second call.
    let stripped = lowered.trim_matches(|c: char| c.is_whitespace() || QUOTE_CHARS.contains(&c));
    WHITESPACE_RUN.replace_all(stripped, " ").into_owned()
}
