//! Complexity and similarity of token sequences.
//!
//! - [`CompressionOracle`]: compressed size `C(x)` of a coded sequence
//! - [`SimilarityEstimator`]: `C(a ++ b) / (C(a) + C(b))` with either
//!   compression size or LZ match entropy as `C`
//! - [`Corpus`]: pairwise distance matrices over many documents

mod corpus;
mod estimator;
mod oracle;

pub use corpus::{Corpus, DistanceMatrix};
pub use estimator::{DistanceReport, Method, SimilarityEstimator};
pub use oracle::{CompressionOracle, Serialization};
