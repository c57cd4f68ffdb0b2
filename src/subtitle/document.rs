//! Subtitle documents and their byte contract.

use std::path::Path;

use super::format::{detect_format, SubtitleFormat, BOM};
use super::stream::{StreamTokenizer, TokenizerOptions};
use crate::error::Result;

/// An immutable, ordered sequence of subtitle lines without terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleDocument {
    lines: Vec<String>,
}

impl SubtitleDocument {
    /// Create a document from already-split lines
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Decode raw bytes.
    ///
    /// Invalid UTF-8 is replaced, a leading byte order mark is dropped, and
    /// lines are split on `\n`, `\r\n` and bare `\r`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        Self::parse(text.trim_start_matches(BOM))
    }

    /// Split text into lines.
    pub fn parse(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            match rest.find(['\n', '\r']) {
                Some(pos) => {
                    lines.push(rest[..pos].to_string());
                    let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                    rest = &rest[pos + skip..];
                },
                None => {
                    lines.push(rest.to_string());
                    rest = "";
                },
            }
        }

        Self { lines }
    }

    /// Encode as `\n`-terminated UTF-8.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.into_bytes()
    }

    /// Read a document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Write a document to disk
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_bytes())?;
        Ok(())
    }

    /// Get the lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Detect the document format
    pub fn format(&self) -> SubtitleFormat {
        detect_format(&self.lines)
    }

    /// Detect the format and tokenize
    pub fn tokenize(&self, options: &TokenizerOptions) -> Result<Vec<String>> {
        StreamTokenizer::new(options.clone()).tokenize(&self.lines, self.format())
    }
}

impl From<Vec<String>> for SubtitleDocument {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

impl From<&str> for SubtitleDocument {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_terminators() {
        let doc = SubtitleDocument::parse("1\r\n00:00:01,000 --> 00:00:02,000\rHi\n\nend");
        assert_eq!(
            doc.lines(),
            ["1", "00:00:01,000 --> 00:00:02,000", "Hi", "", "end"]
        );
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(SubtitleDocument::parse("a\nb\n").len(), 2);
        assert_eq!(SubtitleDocument::parse("a\n\n").len(), 2);
        assert!(SubtitleDocument::parse("").is_empty());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let doc = SubtitleDocument::new(vec![
            "1".to_string(),
            "00:00:01,000 --> 00:00:02,000".to_string(),
            "Héllo".to_string(),
            String::new(),
        ]);
        assert_eq!(SubtitleDocument::from_bytes(&doc.to_bytes()), doc);
    }

    #[test]
    fn test_bom_and_invalid_utf8() {
        let mut bytes = "\u{feff}1\n".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xff, b'x', b'\n']);
        let doc = SubtitleDocument::from_bytes(&bytes);
        assert_eq!(doc.lines()[0], "1");
        assert_eq!(doc.lines()[1], "\u{fffd}x");
        assert_eq!(doc.format(), SubtitleFormat::Numbered);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("episode.srt");
        let doc = SubtitleDocument::parse("{0}{10}Hello|World\n{11}{20}Again\n");
        doc.save(&path).unwrap();

        let loaded = SubtitleDocument::load(&path).unwrap();
        assert_eq!(loaded, doc);
        assert_eq!(
            loaded.tokenize(&TokenizerOptions::default()).unwrap(),
            vec!["hello", "world", "again"]
        );
    }
}
