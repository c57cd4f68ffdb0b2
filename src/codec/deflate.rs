//! Deflate-family compressors (Algorithm::Zlib, Algorithm::Gzip) via flate2.

use std::io::Write;

use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;

use super::{Algorithm, Compressor};
use crate::error::{Result, SubtextError};

/// Default flate2 level (best compression)
const DEFAULT_LEVEL: u32 = 9;

/// Zlib codec
#[derive(Debug, Clone)]
pub struct ZlibCodec {
    /// Compression level (0-9)
    pub level: u32,
}

impl Default for ZlibCodec {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }
}

impl ZlibCodec {
    /// Create codec with custom level
    pub fn with_level(level: u32) -> Self {
        Self {
            level: level.min(9),
        }
    }
}

impl Compressor for ZlibCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Zlib
    }

    fn compress_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(self.level));
        encoder
            .write_all(data)
            .map_err(|e| SubtextError::Compression(e.to_string()))?;
        encoder
            .finish()
            .map_err(|e| SubtextError::Compression(e.to_string()))
    }
}

/// Gzip codec
#[derive(Debug, Clone)]
pub struct GzipCodec {
    /// Compression level (0-9)
    pub level: u32,
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }
}

impl GzipCodec {
    /// Create codec with custom level
    pub fn with_level(level: u32) -> Self {
        Self {
            level: level.min(9),
        }
    }
}

impl Compressor for GzipCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Gzip
    }

    fn compress_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        // Default header: no file name, mtime 0, so output is deterministic
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(self.level));
        encoder
            .write_all(data)
            .map_err(|e| SubtextError::Compression(e.to_string()))?;
        encoder
            .finish()
            .map_err(|e| SubtextError::Compression(e.to_string()))
    }
}
