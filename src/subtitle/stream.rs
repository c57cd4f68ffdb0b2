//! Streaming cue tokenizer.
//!
//! Walks the lines of a subtitle document once and emits a flat sequence of
//! lowercase word tokens in cue order.
//!
//! # Numbered state machine
//!
//! ```text
//!            skip index + timestamp
//!   [Header] ───────────────────────> [Text] ──(blank)──> [Blanks]
//!      ^                                │                    │
//!      │                                │ end of lines       │ next two lines are
//!      │                                v                    │ "<digits>" + "-->"
//!      └──────────────────────── [Done] <── otherwise ───────┤
//!                                                            │
//!      └─────────────────────────────────────────────────────┘
//! ```
//!
//! Running out of lines, or meeting trailing content that does not look
//! like a cue header, ends the stream normally.

use tracing::debug;

use super::format::{detect_format, SubtitleFormat, BOM};
use super::timing::{elapsed_minutes, parse_range, RANGE_SEPARATOR};
use super::words::{line_tokens, Markup, DEFAULT_LINK_MARKERS};
use crate::error::{Result, SubtextError};

/// Tokenizer options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Stop before the first cue starting after this many whole minutes
    /// (numbered format only)
    pub max_minutes: Option<u32>,
    /// Lines containing any of these (case-insensitive) are skipped
    pub link_markers: Vec<String>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            max_minutes: None,
            link_markers: DEFAULT_LINK_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TokenizerOptions {
    /// Set the time bound
    pub fn with_max_minutes(mut self, minutes: u32) -> Self {
        self.max_minutes = Some(minutes);
        self
    }

    /// Replace the link markers
    pub fn with_link_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.link_markers = markers.into_iter().map(Into::into).collect();
        self
    }
}

/// Streaming subtitle tokenizer
#[derive(Debug, Clone, Default)]
pub struct StreamTokenizer {
    options: TokenizerOptions,
}

impl StreamTokenizer {
    /// Create a tokenizer with the given options
    pub fn new(options: TokenizerOptions) -> Self {
        Self { options }
    }

    /// Get the options in use
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Tokenize lines of a known format.
    ///
    /// `Unknown` is refused with [`SubtextError::UnknownFormat`].
    pub fn tokenize<S: AsRef<str>>(
        &self,
        lines: &[S],
        format: SubtitleFormat,
    ) -> Result<Vec<String>> {
        match format {
            SubtitleFormat::Numbered => self.tokenize_numbered(lines),
            SubtitleFormat::Braced => Ok(self.tokenize_braced(lines)),
            SubtitleFormat::Unknown => Err(SubtextError::UnknownFormat(
                "document does not start with a cue index or a brace".to_string(),
            )),
        }
    }

    /// Tokenize a numbered (index / timestamp / text / blank) document.
    ///
    /// The first cue starts at the first non-blank line, as in
    /// [`detect_format`]. Fails only when a time bound is active and a cue timestamp cannot be
    /// read; every other irregularity ends the stream with the tokens
    /// collected so far.
    pub fn tokenize_numbered<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<String>> {
        let n = lines.len();
        let line_at = move |i: usize| lines[i].as_ref().trim_start_matches(BOM);
        let mut tokens = Vec::new();
        let mut cues = 0usize;

        let Some(mut cursor) = (0..n).find(|&i| !is_blank(line_at(i))) else {
            debug!("Numbered stream has no cues");
            return Ok(tokens);
        };

        loop {
            // Index and timestamp lines
            cursor += 2;
            if cursor >= n {
                debug!("Numbered stream ended in a cue header at line {cursor} of {n}");
                break;
            }

            if let Some(bound) = self.options.max_minutes {
                let stamp_line = cursor - 1;
                let (start, _) = parse_range(line_at(stamp_line)).ok_or_else(|| {
                    SubtextError::MalformedTimestamp {
                        line: stamp_line,
                        text: line_at(stamp_line).to_string(),
                    }
                })?;
                if elapsed_minutes(start) > u64::from(bound) {
                    debug!("Time bound of {bound} min reached at line {stamp_line}");
                    break;
                }
            }

            while cursor < n && !is_blank(line_at(cursor)) {
                tokens.extend(line_tokens(
                    line_at(cursor),
                    Markup::Angle,
                    &self.options.link_markers,
                ));
                cursor += 1;
            }
            cues += 1;

            // `cursor` is on the first blank line (or past the end)
            while cursor + 2 < n && is_blank(line_at(cursor + 1)) {
                cursor += 1;
            }

            if cursor + 2 >= n {
                break;
            }

            if is_cue_index(line_at(cursor + 1)) && line_at(cursor + 2).contains(RANGE_SEPARATOR) {
                // Step onto the blank line preceding the next index
                cursor += 1;
            } else {
                debug!("End of readable cues at line {} of {n}", cursor + 1);
                break;
            }
        }

        debug!("Tokenized {cues} cues into {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Tokenize a braced (`{start}{end}text`) document.
    ///
    /// Each line starting with `{` is a cue of its own; other lines are
    /// ignored. The time bound does not apply to this format.
    pub fn tokenize_braced<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        if self.options.max_minutes.is_some() {
            debug!("Time bound ignored for braced subtitles");
        }

        lines
            .iter()
            .map(|line| line.as_ref().trim_start_matches(BOM))
            .filter(|line| line.starts_with('{'))
            .flat_map(|line| line_tokens(line, Markup::AngleAndCurly, &self.options.link_markers))
            .collect()
    }
}

/// Detect the format of `lines` and tokenize them.
///
/// # Example
/// ```
/// use subtext::subtitle::{tokenize_document, TokenizerOptions};
///
/// let lines = [
///     "1",
///     "00:00:01,000 --> 00:00:02,000",
///     "Hello world",
///     "",
///     "2",
///     "00:00:03,000 --> 00:00:04,000",
///     "Hello again",
///     "",
/// ];
/// let tokens = tokenize_document(&lines, &TokenizerOptions::default()).unwrap();
/// assert_eq!(tokens, vec!["hello", "world", "hello", "again"]);
/// ```
pub fn tokenize_document<S: AsRef<str>>(
    lines: &[S],
    options: &TokenizerOptions,
) -> Result<Vec<String>> {
    let format = detect_format(lines);
    if !format.is_known() {
        tracing::warn!("Refusing to tokenize document of unknown format");
    }
    StreamTokenizer::new(options.clone()).tokenize(lines, format)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_cue_index(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}
