//! Subtitle format detection.

use serde::{Deserialize, Serialize};

/// Byte order mark some editors prepend to UTF-8 subtitle files.
pub(crate) const BOM: char = '\u{feff}';

/// Known timed-text formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    /// Index line, timestamp range line, text lines, blank line (SubRip style)
    Numbered,
    /// One cue per line: `{start}{end}text` (MicroDVD style, frame indexed)
    Braced,
    /// Anything else
    Unknown,
}

impl SubtitleFormat {
    /// Classify a document from its first meaningful line.
    pub fn from_first_line(line: &str) -> Self {
        match line.trim_start_matches(BOM).chars().next() {
            Some(c) if c.is_ascii_digit() => SubtitleFormat::Numbered,
            Some('{') => SubtitleFormat::Braced,
            _ => SubtitleFormat::Unknown,
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            SubtitleFormat::Numbered => "NUMBERED",
            SubtitleFormat::Braced => "BRACED",
            SubtitleFormat::Unknown => "UNKNOWN",
        }
    }

    /// Whether the tokenizer can process this format
    pub fn is_known(&self) -> bool {
        !matches!(self, SubtitleFormat::Unknown)
    }
}

impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the format of a document from its first non-empty line.
///
/// A document without any non-empty line is `Unknown`.
pub fn detect_format<S: AsRef<str>>(lines: &[S]) -> SubtitleFormat {
    lines
        .iter()
        .map(|l| l.as_ref().trim_start_matches(BOM))
        .find(|l| !l.trim().is_empty())
        .map_or(SubtitleFormat::Unknown, SubtitleFormat::from_first_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_character_classification() {
        assert_eq!(SubtitleFormat::from_first_line("{0}{25}Hi"), SubtitleFormat::Braced);
        assert_eq!(SubtitleFormat::from_first_line("3"), SubtitleFormat::Numbered);
        assert_eq!(SubtitleFormat::from_first_line("# comment"), SubtitleFormat::Unknown);
        assert_eq!(SubtitleFormat::from_first_line(""), SubtitleFormat::Unknown);
    }

    #[test]
    fn test_detect_skips_leading_blank_lines() {
        let lines = ["", "   ", "1", "00:00:01,000 --> 00:00:02,000"];
        assert_eq!(detect_format(&lines), SubtitleFormat::Numbered);
    }

    #[test]
    fn test_detect_ignores_bom() {
        let lines = ["\u{feff}1", "00:00:01,000 --> 00:00:02,000"];
        assert_eq!(detect_format(&lines), SubtitleFormat::Numbered);
    }

    #[test]
    fn test_detect_empty_document() {
        let lines: [&str; 0] = [];
        assert_eq!(detect_format(&lines), SubtitleFormat::Unknown);
        assert!(!detect_format(&["", ""]).is_known());
    }

    #[test]
    fn test_webvtt_is_unknown() {
        assert_eq!(detect_format(&["WEBVTT", ""]), SubtitleFormat::Unknown);
    }
}
