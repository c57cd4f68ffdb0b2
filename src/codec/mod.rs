//! Generic lossless compressors used as complexity oracles.
//!
//! Nothing here defines a codec of its own: the compressors are thin
//! wrappers over standard implementations, and only the *size* of their
//! output matters to the similarity measures.
//!
//! # Algorithms
//!
//! | Algorithm     | Crate    | Notes                                 |
//! |---------------|----------|---------------------------------------|
//! | [`Brotli`]    | brotli   | Default, best ratio on token codes    |
//! | [`Zlib`]      | flate2   | Classic deflate, 6 bytes of framing   |
//! | [`Gzip`]      | flate2   | Deflate with an 18 byte container     |
//! | [`None`]      | -        | Passthrough, complexity = raw size    |
//!
//! # Usage
//!
//! ```
//! use subtext::codec::{Algorithm, Compressor};
//!
//! let compressor = Algorithm::Zlib.compressor();
//! let data = "[1, 2, 1, 2, 1, 2]".repeat(50);
//! let size = compressor.compressed_len(data.as_bytes()).unwrap();
//! assert!(size < data.len());
//! ```
//!
//! [`Brotli`]: Algorithm::Brotli
//! [`Zlib`]: Algorithm::Zlib
//! [`Gzip`]: Algorithm::Gzip
//! [`None`]: Algorithm::None

mod algorithm;
mod brotli;
mod deflate;
pub mod varint;

pub use algorithm::{Algorithm, CompressionResult};
pub use self::brotli::BrotliCodec;
pub use deflate::{GzipCodec, ZlibCodec};

use crate::error::Result;

/// A deterministic, lossless, general-purpose byte compressor.
///
/// Implementations keep no state between calls, so one instance can be
/// shared across threads and used on independent inputs concurrently.
pub trait Compressor: Send + Sync {
    /// Algorithm implemented by this compressor
    fn algorithm(&self) -> Algorithm;

    /// Compress a byte slice
    fn compress_bytes(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Compressed size of a byte slice
    fn compressed_len(&self, data: &[u8]) -> Result<usize> {
        Ok(self.compress_bytes(data)?.len())
    }

    /// Compress and report sizes
    fn measure(&self, data: &[u8]) -> Result<CompressionResult> {
        Ok(CompressionResult::new(
            self.algorithm(),
            data.len(),
            self.compressed_len(data)?,
        ))
    }
}

/// Passthrough compressor
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCodec;

impl Compressor for IdentityCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::None
    }

    fn compress_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn compressed_len(&self, data: &[u8]) -> Result<usize> {
        Ok(data.len())
    }
}
