//! Normalized distance between two token sequences.
//!
//! ```text
//! d(a, b) = C(a ++ b) / (C(a) + C(b))
//! ```
//!
//! `C` is either the compressed size from a [`CompressionOracle`] or the
//! entropy rate from [`LzMatchEntropy`].
//!
//! # Scale
//!
//! The usual normalized compression distance in the literature doubles the
//! numerator, `2·C(a ++ b) / (C(a) + C(b))`. This estimator does **not**,
//! so a sequence compared with itself lands near 0.5 rather than near 1.0.
//! Multiply by 2 when comparing against published figures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::oracle::CompressionOracle;
use crate::entropy::LzMatchEntropy;
use crate::error::{Result, SubtextError};

/// Complexity measure used for the distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Compressed size of the coded sequence
    #[default]
    #[serde(rename = "compression")]
    CompressionBased,
    /// LZ match entropy rate
    #[serde(rename = "entropy")]
    EntropyBased,
}

impl Method {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Method::CompressionBased => "compression",
            Method::EntropyBased => "entropy",
        }
    }

    /// Shortest sequence this method can measure
    pub fn min_tokens(&self) -> usize {
        match self {
            Method::CompressionBased => 1,
            Method::EntropyBased => 2,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Method {
    type Err = SubtextError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "compression" | "compressionbased" | "ncd" | "c" => Ok(Method::CompressionBased),
            "entropy" | "entropybased" | "lz" | "e" => Ok(Method::EntropyBased),
            _ => Err(SubtextError::InvalidArgument(format!(
                "unknown method {s:?} (use compression, entropy)"
            ))),
        }
    }
}

/// Distance with the complexities it was computed from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceReport {
    /// Method used
    pub method: Method,
    /// `C(a ++ b) / (C(a) + C(b))`
    pub score: f64,
    /// `C(a)`
    pub complexity_a: f64,
    /// `C(b)`
    pub complexity_b: f64,
    /// `C(a ++ b)`
    pub complexity_joint: f64,
}

/// Similarity estimator over token sequences
#[derive(Debug, Clone, Default)]
pub struct SimilarityEstimator {
    oracle: CompressionOracle,
    entropy: LzMatchEntropy,
}

impl SimilarityEstimator {
    /// Create an estimator with the given complexity oracle
    pub fn new(oracle: CompressionOracle) -> Self {
        Self {
            oracle,
            entropy: LzMatchEntropy::new(),
        }
    }

    /// Get the compression oracle
    pub fn oracle(&self) -> &CompressionOracle {
        &self.oracle
    }

    /// Complexity of one sequence under `method`.
    ///
    /// Empty sequences are rejected for both methods; the entropy method
    /// also needs at least 2 tokens.
    pub fn complexity<S: AsRef<str>>(&self, tokens: &[S], method: Method) -> Result<f64> {
        if tokens.is_empty() {
            return Err(SubtextError::InvalidArgument(
                "complexity of an empty sequence".to_string(),
            ));
        }
        match method {
            Method::CompressionBased => Ok(self.oracle.complexity_size(tokens)? as f64),
            Method::EntropyBased => Ok(self.entropy.estimate(tokens)?.bits_per_token),
        }
    }

    /// Normalized distance `C(a ++ b) / (C(a) + C(b))`
    ///
    /// # Example
    /// ```
    /// use subtext::similarity::{Method, SimilarityEstimator};
    ///
    /// let estimator = SimilarityEstimator::default();
    /// let a: Vec<String> = "winter is coming ".repeat(20).split_whitespace().map(String::from).collect();
    /// let b: Vec<String> = (0..60).map(|i| format!("w{i}")).collect();
    ///
    /// let same = estimator.normalized_compression_distance(&a, &a, Method::CompressionBased).unwrap();
    /// let other = estimator.normalized_compression_distance(&a, &b, Method::CompressionBased).unwrap();
    /// assert!(same < other);
    /// ```
    pub fn normalized_compression_distance<S: AsRef<str>, T: AsRef<str>>(
        &self,
        a: &[S],
        b: &[T],
        method: Method,
    ) -> Result<f64> {
        Ok(self.compare(a, b, method)?.score)
    }

    /// Distance plus the three complexities behind it
    pub fn compare<S: AsRef<str>, T: AsRef<str>>(
        &self,
        a: &[S],
        b: &[T],
        method: Method,
    ) -> Result<DistanceReport> {
        let complexity_a = self.complexity(a, method)?;
        let complexity_b = self.complexity(b, method)?;
        self.compare_with(a, b, complexity_a, complexity_b, method)
    }

    /// Distance when `C(a)` and `C(b)` are already known
    pub(crate) fn compare_with<S: AsRef<str>, T: AsRef<str>>(
        &self,
        a: &[S],
        b: &[T],
        complexity_a: f64,
        complexity_b: f64,
        method: Method,
    ) -> Result<DistanceReport> {
        let joint: Vec<&str> = a
            .iter()
            .map(|t| t.as_ref())
            .chain(b.iter().map(|t| t.as_ref()))
            .collect();
        let complexity_joint = self.complexity(&joint, method)?;

        let denominator = complexity_a + complexity_b;
        if denominator <= 0.0 {
            return Err(SubtextError::InvalidArgument(format!(
                "{method} complexities sum to zero"
            )));
        }

        Ok(DistanceReport {
            method,
            score: complexity_joint / denominator,
            complexity_a,
            complexity_b,
            complexity_joint,
        })
    }
}
