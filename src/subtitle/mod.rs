//! Subtitle text extraction.
//!
//! Turns a subtitle document into a flat sequence of lowercase word tokens.
//!
//! # Formats
//!
//! | Format     | First character | Layout                                   |
//! |------------|-----------------|------------------------------------------|
//! | `Numbered` | ASCII digit     | index / `start --> end` / text / blank   |
//! | `Braced`   | `{`             | `{start}{end}text`, one cue per line     |
//! | `Unknown`  | anything else   | refused                                  |
//!
//! # Usage
//!
//! ```
//! use subtext::subtitle::{SubtitleDocument, TokenizerOptions};
//!
//! let doc = SubtitleDocument::parse("{0}{25}<i>Hello</i> there|General Kenobi\n");
//! let tokens = doc.tokenize(&TokenizerOptions::default()).unwrap();
//! assert_eq!(tokens, vec!["hello", "there", "general", "kenobi"]);
//! ```

mod document;
mod format;
mod stream;
pub mod timing;
mod words;

pub use document::SubtitleDocument;
pub use format::{detect_format, SubtitleFormat};
pub use stream::{tokenize_document, StreamTokenizer, TokenizerOptions};
pub use words::{contains_link, line_tokens, strip_markup, word_tokens, Markup, DEFAULT_LINK_MARKERS};
