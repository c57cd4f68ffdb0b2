//! Compressor selection and compression results.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::brotli::BrotliCodec;
use super::deflate::{GzipCodec, ZlibCodec};
use super::{Compressor, IdentityCodec};
use crate::error::SubtextError;

/// Available compressors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// No compression (passthrough, complexity = raw size)
    None,
    /// Zlib/deflate (flate2)
    Zlib,
    /// Gzip container around deflate (flate2)
    Gzip,
    /// Brotli (high ratio)
    #[default]
    Brotli,
}

impl Algorithm {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::None => "NONE",
            Algorithm::Zlib => "ZLIB",
            Algorithm::Gzip => "GZIP",
            Algorithm::Brotli => "BROTLI",
        }
    }

    /// Get all available algorithms
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::Brotli,
            Algorithm::Zlib,
            Algorithm::Gzip,
            Algorithm::None,
        ]
    }

    /// Build a compressor with default settings
    pub fn compressor(&self) -> Arc<dyn Compressor> {
        match self {
            Algorithm::None => Arc::new(IdentityCodec),
            Algorithm::Zlib => Arc::new(ZlibCodec::default()),
            Algorithm::Gzip => Arc::new(GzipCodec::default()),
            Algorithm::Brotli => Arc::new(BrotliCodec::default()),
        }
    }

    /// Build a compressor with an explicit quality (brotli 0-11, flate2 0-9)
    pub fn compressor_with_quality(&self, quality: u32) -> Arc<dyn Compressor> {
        match self {
            Algorithm::None => Arc::new(IdentityCodec),
            Algorithm::Zlib => Arc::new(ZlibCodec::with_level(quality)),
            Algorithm::Gzip => Arc::new(GzipCodec::with_level(quality)),
            Algorithm::Brotli => Arc::new(BrotliCodec::with_quality(quality)),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SubtextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "n" => Ok(Algorithm::None),
            "zlib" | "deflate" | "z" => Ok(Algorithm::Zlib),
            "gzip" | "gz" => Ok(Algorithm::Gzip),
            "brotli" | "br" => Ok(Algorithm::Brotli),
            _ => Err(SubtextError::InvalidArgument(format!(
                "unknown algorithm {s:?} (use brotli, zlib, gzip, none)"
            ))),
        }
    }
}

/// Result of compression operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompressionResult {
    /// Algorithm used
    pub algorithm: Algorithm,
    /// Original size in bytes
    pub original_bytes: usize,
    /// Compressed size in bytes
    pub compressed_bytes: usize,
}

impl CompressionResult {
    /// Create new compression result
    pub fn new(algorithm: Algorithm, original_bytes: usize, compressed_bytes: usize) -> Self {
        Self {
            algorithm,
            original_bytes,
            compressed_bytes,
        }
    }

    /// Compressed size over original size (lower is more compressible)
    pub fn ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            self.compressed_bytes as f64 / self.original_bytes as f64
        }
    }

    /// Check if compression was beneficial
    pub fn is_beneficial(&self) -> bool {
        self.compressed_bytes < self.original_bytes
    }
}
