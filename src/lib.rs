//! # Subtext - subtitle token streams and compression similarity
//!
//! Extracts the spoken words of subtitle files as token sequences and
//! compares them with compression-based and entropy-based complexity
//! measures.
//!
//! ## Pipeline
//!
//! ```text
//!  raw bytes ──> SubtitleDocument ──> detect_format ──> StreamTokenizer
//!                                                            │
//!                                                       Vec<String>
//!                                                            │
//!                       ┌────────────────────────────────────┤
//!                       v                                    v
//!              CompressionOracle                      LzMatchEntropy
//!           (vocabulary coding + compressor)     (match-length entropy rate)
//!                       │                                    │
//!                       └──────────> SimilarityEstimator <───┘
//!                                           │
//!                              C(a ++ b) / (C(a) + C(b))
//! ```
//!
//! ## Formats
//!
//! | Format     | Example first line               | Cue layout                        |
//! |------------|----------------------------------|-----------------------------------|
//! | Numbered   | `1`                              | index, `start --> end`, text, blank |
//! | Braced     | `{0}{25}Hello`                   | one cue per line                  |
//!
//! ## Quick Start
//!
//! ```
//! use subtext::similarity::{Method, SimilarityEstimator};
//! use subtext::subtitle::{SubtitleDocument, TokenizerOptions};
//!
//! let doc = SubtitleDocument::parse(
//!     "1\n00:00:01,000 --> 00:00:02,000\nHello world\n\n2\n00:00:03,000 --> 00:00:04,000\nHello again\n",
//! );
//! let tokens = doc.tokenize(&TokenizerOptions::default()).unwrap();
//! assert_eq!(tokens, vec!["hello", "world", "hello", "again"]);
//!
//! let estimator = SimilarityEstimator::default();
//! let score = estimator
//!     .normalized_compression_distance(&tokens, &tokens, Method::CompressionBased)
//!     .unwrap();
//! assert!(score > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`subtitle`]: format detection, documents, streaming tokenizer
//! - [`codec`]: generic compressors (brotli, zlib, gzip)
//! - [`entropy`]: vocabulary coding and LZ match entropy
//! - [`similarity`]: complexity oracle, distances, corpus matrices
//! - [`config`]: configuration management
//! - [`error`]: error types and result aliases
//!
//! ## Threading
//!
//! Every operation is a synchronous, pure function of its inputs. Codings
//! and occurrence indexes are built per call, and compressors are
//! `Send + Sync`, so independent documents can be processed in parallel.

pub mod codec;
pub mod config;
pub mod entropy;
pub mod error;
pub mod similarity;
pub mod subtitle;

// Re-exports for convenience
pub use codec::{Algorithm, Compressor};
pub use config::Config;
pub use entropy::{EntropyEstimate, LzMatchEntropy};
pub use error::{Result, SubtextError};
pub use similarity::{CompressionOracle, Corpus, DistanceReport, Method, SimilarityEstimator};
pub use subtitle::{
    detect_format, tokenize_document, StreamTokenizer, SubtitleDocument, SubtitleFormat,
    TokenizerOptions,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
