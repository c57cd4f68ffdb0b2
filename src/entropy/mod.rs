//! Token coding and non-parametric entropy-rate estimation.
//!
//! - [`VocabularyCoding`]: first-seen integer codes for a token sequence
//! - [`LzMatchEntropy`]: entropy rate from sequential longest-match lengths
//!
//! # Example
//!
//! ```
//! use subtext::entropy::LzMatchEntropy;
//!
//! let tokens: Vec<String> = (0..16).map(|i| format!("word{i}")).collect();
//! let estimate = LzMatchEntropy::new().estimate(&tokens).unwrap();
//! // Sixteen distinct tokens: log2(16) bits each
//! assert!((estimate.bits_per_token - 4.0).abs() < 1e-9);
//! ```

mod lz_match;
mod vocabulary;

pub use lz_match::{EntropyEstimate, LzMatchEntropy};
pub use vocabulary::{dense_symbols, VocabularyCoding};
