//! Word splitting and cue-text cleanup.
//!
//! Cue text goes through three filters before it becomes tokens:
//!
//! 1. Lines containing a link marker (`http://`, `www`, ...) are dropped whole.
//! 2. Markup spans are removed (`<i>`, `</font>`, and for braced subtitles
//!    also `{y:i}` style control codes).
//! 3. What remains is split into maximal runs of word characters.

use lazy_static::lazy_static;
use regex::Regex;

/// Default markers that mark a cue line as an advertisement or link.
pub const DEFAULT_LINK_MARKERS: &[&str] = &["http://", "https://", "www"];

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
    static ref ANGLE_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref CURLY_TAG: Regex = Regex::new(r"\{[^}]*\}").unwrap();
}

/// Which markup spans to strip from a cue line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// `<...>` tags only
    Angle,
    /// `<...>` and `{...}` spans
    AngleAndCurly,
}

/// Split text into maximal runs of word characters (alphanumerics and `_`).
///
/// Everything else is a separator and is discarded; empty input yields an
/// empty vector.
///
/// # Example
/// ```
/// use subtext::subtitle::word_tokens;
///
/// assert_eq!(word_tokens("it's 9 o'clock!"), vec!["it", "s", "9", "o", "clock"]);
/// assert!(word_tokens("...").is_empty());
/// ```
pub fn word_tokens(text: &str) -> Vec<String> {
    WORD.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Remove markup spans from a line.
pub fn strip_markup(line: &str, markup: Markup) -> String {
    let stripped = ANGLE_TAG.replace_all(line, "");
    match markup {
        Markup::Angle => stripped.into_owned(),
        Markup::AngleAndCurly => CURLY_TAG.replace_all(&stripped, "").into_owned(),
    }
}

/// Check whether a line contains any of the link markers (case-insensitive).
pub fn contains_link(line: &str, markers: &[String]) -> bool {
    let lower = line.to_lowercase();
    markers
        .iter()
        .any(|m| !m.is_empty() && lower.contains(&m.to_lowercase()))
}

/// Tokenize one cue line: link filter, lowercase, strip markup, split words.
pub fn line_tokens(line: &str, markup: Markup, markers: &[String]) -> Vec<String> {
    if contains_link(line, markers) {
        return Vec::new();
    }
    word_tokens(&strip_markup(&line.to_lowercase(), markup))
}
