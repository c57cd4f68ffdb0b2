//! Pairwise distances across a collection of subtitle documents.
//!
//! Typical use: one entry per episode of a series, keyed by its catalog id,
//! then a full distance matrix to find which episodes read alike.

use serde::Serialize;
use tracing::{debug, warn};

use super::estimator::{Method, SimilarityEstimator};
use crate::error::{Result, SubtextError};
use crate::subtitle::{SubtitleDocument, TokenizerOptions};

/// Named token sequences in insertion order
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<(String, Vec<String>)>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize documents into a corpus.
    ///
    /// Documents of unknown format are skipped with a warning; other
    /// tokenizer failures are returned.
    pub fn from_documents<'a, I>(documents: I, options: &TokenizerOptions) -> Result<Self>
    where
        I: IntoIterator<Item = (String, &'a SubtitleDocument)>,
    {
        let mut corpus = Self::new();
        for (name, doc) in documents {
            match doc.tokenize(options) {
                Ok(tokens) => {
                    corpus.insert(name, tokens)?;
                },
                Err(SubtextError::UnknownFormat(reason)) => {
                    warn!("Skipping {name}: {reason}");
                },
                Err(e) => return Err(e),
            }
        }
        Ok(corpus)
    }

    /// Add a named sequence.
    ///
    /// Empty sequences are skipped (returns `false`); a duplicate name is an
    /// error.
    pub fn insert(&mut self, name: impl Into<String>, tokens: Vec<String>) -> Result<bool> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(SubtextError::InvalidArgument(format!(
                "duplicate corpus entry {name:?}"
            )));
        }
        if tokens.is_empty() {
            warn!("Skipping {name}: no tokens");
            return Ok(false);
        }
        self.entries.push((name, tokens));
        Ok(true)
    }

    /// Tokens of a named entry
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_slice())
    }

    /// Entry names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All pairwise distances, row `i` column `j` = `d(entry_i, entry_j)`.
    ///
    /// Entries shorter than [`Method::min_tokens`] are left out with a
    /// warning. Each entry's own complexity is computed once; the joint
    /// complexity is computed for every ordered pair, including the diagonal.
    pub fn distance_matrix(
        &self,
        estimator: &SimilarityEstimator,
        method: Method,
    ) -> Result<DistanceMatrix> {
        let entries: Vec<&(String, Vec<String>)> = self
            .entries
            .iter()
            .filter(|(name, tokens)| {
                let usable = tokens.len() >= method.min_tokens();
                if !usable {
                    warn!("Skipping {name}: {} tokens is too short for {method}", tokens.len());
                }
                usable
            })
            .collect();

        if entries.is_empty() {
            return Err(SubtextError::InvalidArgument(format!(
                "no corpus entries measurable by {method}"
            )));
        }

        let complexities = entries
            .iter()
            .map(|(_, tokens)| estimator.complexity(tokens, method))
            .collect::<Result<Vec<_>>>()?;

        let mut scores = Vec::with_capacity(entries.len());
        for (i, (name, a)) in entries.iter().enumerate() {
            let mut row = Vec::with_capacity(entries.len());
            for (j, (_, b)) in entries.iter().enumerate() {
                let report =
                    estimator.compare_with(a, b, complexities[i], complexities[j], method)?;
                row.push(report.score);
            }
            debug!("Distance row for {name} done");
            scores.push(row);
        }

        Ok(DistanceMatrix {
            method,
            names: entries.iter().map(|(name, _)| name.clone()).collect(),
            scores,
        })
    }
}

/// Square matrix of pairwise distances
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    /// Method used
    pub method: Method,
    /// Row/column labels
    pub names: Vec<String>,
    /// `scores[i][j] = d(names[i], names[j])`
    pub scores: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    fn index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Distance between two named entries
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        Some(self.scores[self.index(a)?][self.index(b)?])
    }

    /// Closest other entry to `name`
    pub fn nearest(&self, name: &str) -> Option<(&str, f64)> {
        let i = self.index(name)?;
        self.scores[i]
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .min_by(|(_, x), (_, y)| x.total_cmp(y))
            .map(|(j, &score)| (self.names[j].as_str(), score))
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
