//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables
//! - CLI arguments (see the `subtext` binary)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::codec::Algorithm;
use crate::error::{Result, SubtextError};
use crate::similarity::{CompressionOracle, Method, Serialization, SimilarityEstimator};
use crate::subtitle::{TokenizerOptions, DEFAULT_LINK_MARKERS};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tokenizer configuration
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    /// Compression configuration
    #[serde(default)]
    pub compression: CompressionConfig,

    /// Similarity configuration
    #[serde(default)]
    pub similarity: SimilarityConfig,
}

impl Config {
    /// Default config file location (`<config dir>/subtext/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("subtext").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| SubtextError::Config(format!("Failed to read config file: {e}")))?;

        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("SUBTEXT_MAX_MINUTES") {
            if let Ok(val) = val.parse() {
                config.tokenizer.max_minutes = Some(val);
            }
        }
        if let Ok(val) = std::env::var("SUBTEXT_ALGORITHM") {
            if let Ok(algo) = val.parse() {
                config.compression.algorithm = algo;
            }
        }
        if let Ok(val) = std::env::var("SUBTEXT_METHOD") {
            if let Ok(method) = val.parse() {
                config.similarity.method = method;
            }
        }

        config
    }

    /// Merge with another config (other takes precedence where it differs
    /// from the defaults)
    pub fn merge(self, other: Self) -> Self {
        let tokenizer_defaults = TokenizerConfig::default();
        let compression_defaults = CompressionConfig::default();

        Self {
            tokenizer: TokenizerConfig {
                max_minutes: other.tokenizer.max_minutes.or(self.tokenizer.max_minutes),
                link_markers: if other.tokenizer.link_markers != tokenizer_defaults.link_markers {
                    other.tokenizer.link_markers
                } else {
                    self.tokenizer.link_markers
                },
            },
            compression: CompressionConfig {
                algorithm: if other.compression.algorithm != compression_defaults.algorithm {
                    other.compression.algorithm
                } else {
                    self.compression.algorithm
                },
                quality: other.compression.quality.or(self.compression.quality),
                serialization: if other.compression.serialization
                    != compression_defaults.serialization
                {
                    other.compression.serialization
                } else {
                    self.compression.serialization
                },
            },
            similarity: SimilarityConfig {
                method: if other.similarity.method != Method::default() {
                    other.similarity.method
                } else {
                    self.similarity.method
                },
            },
        }
    }

    /// Tokenizer options for this configuration
    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            max_minutes: self.tokenizer.max_minutes,
            link_markers: self.tokenizer.link_markers.clone(),
        }
    }

    /// Compression oracle for this configuration
    pub fn oracle(&self) -> CompressionOracle {
        let compression = &self.compression;
        let compressor = match compression.quality {
            Some(quality) => compression.algorithm.compressor_with_quality(quality),
            None => compression.algorithm.compressor(),
        };
        CompressionOracle::new(compressor).with_serialization(compression.serialization)
    }

    /// Similarity estimator for this configuration
    pub fn estimator(&self) -> SimilarityEstimator {
        SimilarityEstimator::new(self.oracle())
    }
}

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Stop numbered documents after this many minutes
    pub max_minutes: Option<u32>,

    /// Lines containing any of these are skipped
    pub link_markers: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_minutes: None,
            link_markers: DEFAULT_LINK_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Compression configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Compressor used as complexity oracle
    pub algorithm: Algorithm,

    /// Brotli quality (0-11) or flate2 level (0-9); compressor default if unset
    pub quality: Option<u32>,

    /// Byte rendering of coded sequences
    pub serialization: Serialization,
}

/// Similarity configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Complexity measure for distances
    pub method: Method,
}
