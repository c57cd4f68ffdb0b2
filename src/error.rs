//! Subtext error types.
//!
//! # Error Classification
//!
//! - **Malformed input**: a cue timestamp could not be read while a time bound
//!   was requested. Running out of readable cues is *not* an error; the
//!   tokenizer simply returns what it collected.
//! - **Invalid argument**: unknown method or algorithm names, and token
//!   sequences too short for the requested measure.
//! - **Unknown format**: format detection failed and the tokenizer refused to
//!   guess.
//!
//! Nothing in this crate retries; callers own any retry policy.

use thiserror::Error;

/// Subtext errors.
#[derive(Error, Debug)]
pub enum SubtextError {
    /// Cue timestamp could not be parsed while a time bound was active.
    #[error("Malformed timestamp on line {line}: {text:?}")]
    MalformedTimestamp {
        /// Zero-based line index in the document.
        line: usize,
        /// Offending line text.
        text: String,
    },

    /// Unsupported option value or degenerate input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Document format could not be classified.
    #[error("Unknown subtitle format: {0}")]
    UnknownFormat(String),

    /// Compressor failed.
    #[error("Compression error: {0}")]
    Compression(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for subtext operations
pub type Result<T> = std::result::Result<T, SubtextError>;

impl From<toml::de::Error> for SubtextError {
    fn from(err: toml::de::Error) -> Self {
        SubtextError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_timestamp_display() {
        let err = SubtextError::MalformedTimestamp {
            line: 5,
            text: "00:xx:01,000 --> 00:00:02,000".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 5"));
        assert!(msg.contains("00:xx:01"));
    }

    #[test]
    fn test_toml_error_maps_to_config() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("[broken");
        let err: SubtextError = parsed.unwrap_err().into();
        assert!(matches!(err, SubtextError::Config(_)));
    }
}
