//! Per-call vocabulary coding.

use std::collections::HashMap;

/// Bijective map from distinct tokens to positive integer codes.
///
/// Codes are handed out in first-seen order starting at 1, so the same
/// sequence always produces the same coding. A coding belongs to a single
/// call and is never cached.
#[derive(Debug, Default)]
pub struct VocabularyCoding<'a> {
    codes: HashMap<&'a str, u32>,
}

impl<'a> VocabularyCoding<'a> {
    /// Build a coding over the distinct tokens of `tokens`
    pub fn build<S: AsRef<str>>(tokens: &'a [S]) -> Self {
        let mut coding = Self::default();
        for token in tokens {
            coding.code_or_insert(token.as_ref());
        }
        coding
    }

    fn code_or_insert(&mut self, token: &'a str) -> u32 {
        let next = self.codes.len() as u32 + 1;
        *self.codes.entry(token).or_insert(next)
    }

    /// Code assigned to `token`
    pub fn code(&self, token: &str) -> Option<u32> {
        self.codes.get(token).copied()
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the coding is empty
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Encode a sequence of tokens already seen by this coding.
    ///
    /// Tokens outside the coding are skipped; callers encode the same
    /// sequence the coding was built from.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<u32> {
        tokens.iter().filter_map(|t| self.code(t.as_ref())).collect()
    }
}

/// Recode tokens to dense symbols, returning `(symbols, alphabet_size)`.
///
/// Symbols are `code - 1`, i.e. dense ids in `0..alphabet_size`.
pub fn dense_symbols<S: AsRef<str>>(tokens: &[S]) -> (Vec<u32>, usize) {
    let coding = VocabularyCoding::build(tokens);
    let symbols = coding.encode(tokens).into_iter().map(|c| c - 1).collect();
    (symbols, coding.len())
}
