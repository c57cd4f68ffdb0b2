//! Brotli compressor (Algorithm::Brotli).
//!
//! The default complexity oracle: high ratio, and a small fixed overhead on
//! short inputs compared to the deflate containers.

use brotli::CompressorWriter;
use std::io::Write;

use super::{Algorithm, Compressor};
use crate::error::{Result, SubtextError};

/// Brotli compression quality (0-11, higher = better compression, slower)
const DEFAULT_QUALITY: u32 = 11;

/// Window size for Brotli (larger = better compression for large files)
const DEFAULT_WINDOW_SIZE: u32 = 22;

/// Brotli codec
#[derive(Debug, Clone)]
pub struct BrotliCodec {
    /// Compression quality (0-11)
    pub quality: u32,
    /// Window size (10-24)
    pub window_size: u32,
}

impl Default for BrotliCodec {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl BrotliCodec {
    /// Create new Brotli codec with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create codec with custom quality
    pub fn with_quality(quality: u32) -> Self {
        Self {
            quality: quality.min(11),
            ..Default::default()
        }
    }
}

impl Compressor for BrotliCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Brotli
    }

    fn compress_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut compressed = Vec::new();
        {
            let mut writer =
                CompressorWriter::new(&mut compressed, 4096, self.quality, self.window_size);
            writer
                .write_all(data)
                .map_err(|e| SubtextError::Compression(e.to_string()))?;
        }
        Ok(compressed)
    }
}
