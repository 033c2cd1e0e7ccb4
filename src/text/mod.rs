//! Free-text similarity for research-area descriptions

pub mod stopwords;
pub mod tfidf;

pub use stopwords::SPANISH_STOP_WORDS;
pub use tfidf::{SimilarityError, SimilarityResult, TextSimilarityScorer};
