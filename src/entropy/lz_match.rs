//! Entropy-rate estimation from sequential match lengths.
//!
//! For every position `i` of a sequence, `Lambda[i]` is one more than the
//! length of the longest prefix of `data[i..]` that already started at some
//! earlier position `t < i`. Universal (LZ-style) estimators turn the mean
//! match length into an entropy rate:
//!
//! ```text
//! H ≈ N · log2(N) / Σ Lambda[i]
//! ```
//!
//! Long matches mean the sequence keeps repeating itself (low entropy);
//! all-`1` lambdas mean every symbol is new (`H = log2 N`).
//!
//! # Cost
//!
//! Candidate sets are filtered one symbol at a time, so a sequence with
//! long repeats costs O(N²) candidates per position in the worst case
//! (O(N³) overall for a constant sequence). The statistic is computed
//! exactly; there is no suffix-tree shortcut.

use std::collections::HashMap;

use serde::Serialize;

use super::vocabulary::dense_symbols;
use crate::error::{Result, SubtextError};

/// Entropy-rate estimate of one token sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntropyEstimate {
    /// Estimated entropy rate in bits per token
    pub bits_per_token: f64,
    /// Sum of all match lengths
    pub sum_lambda: usize,
    /// Sequence length
    pub len: usize,
    /// Number of distinct tokens
    pub alphabet: usize,
}

/// Sequential longest-match entropy estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct LzMatchEntropy;

impl LzMatchEntropy {
    /// Create the estimator
    pub fn new() -> Self {
        Self
    }

    /// Match lengths over integer symbols.
    ///
    /// `Lambda[0]` is always 1. Returns an empty vector for empty input.
    /// Symbols are expected dense (`0..alphabet`); ids at or above the
    /// sequence length are recoded first, which leaves the lengths unchanged.
    pub fn match_lengths(symbols: &[u32]) -> Vec<usize> {
        let n = symbols.len();
        if n == 0 {
            return Vec::new();
        }

        let alphabet = symbols.iter().max().map_or(0, |&m| (m as usize).saturating_add(1));
        if alphabet > n {
            return Self::match_lengths(&recode_dense(symbols));
        }

        // Positions seen so far, per symbol id
        let mut occurrences: Vec<Vec<usize>> = vec![Vec::new(); alphabet];

        let mut lambdas = Vec::with_capacity(n);
        lambdas.push(1);

        for i in 1..n {
            occurrences[symbols[i - 1] as usize].push(i - 1);

            let mut candidates = occurrences[symbols[i] as usize].clone();
            let mut len = 1;
            while !candidates.is_empty() && i + len < n {
                let probe = symbols[i + len];
                candidates.retain(|&t| symbols[t + len] == probe);
                len += 1;
            }
            lambdas.push(len);
        }

        lambdas
    }

    /// Estimate the entropy rate of a token sequence.
    ///
    /// Sequences shorter than 2 tokens have no defined rate and fail with
    /// [`SubtextError::InvalidArgument`].
    pub fn estimate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<EntropyEstimate> {
        let n = tokens.len();
        if n < 2 {
            return Err(SubtextError::InvalidArgument(format!(
                "entropy rate needs at least 2 tokens, got {n}"
            )));
        }

        let (symbols, alphabet) = dense_symbols(tokens);
        let sum_lambda: usize = Self::match_lengths(&symbols).iter().sum();
        let bits_per_token = n as f64 * (n as f64).log2() / sum_lambda as f64;

        tracing::debug!(
            "LZ match entropy: n={n} alphabet={alphabet} sum_lambda={sum_lambda} H={bits_per_token:.4}"
        );

        Ok(EntropyEstimate {
            bits_per_token,
            sum_lambda,
            len: n,
            alphabet,
        })
    }
}

/// Relabel symbols to `0..k` in first-seen order
fn recode_dense(symbols: &[u32]) -> Vec<u32> {
    let mut ids: HashMap<u32, u32> = HashMap::new();
    symbols
        .iter()
        .map(|&s| {
            let next = ids.len() as u32;
            *ids.entry(s).or_insert(next)
        })
        .collect()
}
