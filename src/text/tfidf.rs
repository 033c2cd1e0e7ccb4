//! Pairwise TF-IDF cosine similarity
//!
//! The corpus is exactly the two texts being compared. Terms are lowercase
//! words of two or more word characters, stop words removed, plus every
//! adjacent pair of the remaining words. Term frequency is the raw count and
//! inverse document frequency is smoothed:
//!
//! `idf(t) = ln((1 + 2) / (1 + df(t))) + 1`
//!
//! so a term shared by both texts has idf 1 and a term unique to one text
//! has idf `1 + ln 1.5`.

use super::stopwords::SPANISH_STOP_WORDS;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Documents in the corpus: the two compared texts
const CORPUS_SIZE: f64 = 2.0;

const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Reasons a similarity score cannot be computed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// Neither text contains a single term after tokenization
    #[error("empty vocabulary: both texts contain only stop words or short tokens")]
    EmptyVocabulary,
}

pub type SimilarityResult<T> = Result<T, SimilarityError>;

type TermCounts = BTreeMap<String, f64>;

/// TF-IDF cosine scorer over a fixed stop-word list
#[derive(Debug, Clone)]
pub struct TextSimilarityScorer {
    token_pattern: Regex,
    stop_words: HashSet<String>,
}

impl Default for TextSimilarityScorer {
    fn default() -> Self {
        Self::with_stop_words(SPANISH_STOP_WORDS.iter().copied())
    }
}

impl TextSimilarityScorer {
    /// Scorer using the Spanish stop-word list
    pub fn spanish() -> Self {
        Self::default()
    }

    /// Scorer with a custom stop-word list (compared lowercase)
    pub fn with_stop_words<'a, I>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        TextSimilarityScorer {
            token_pattern: Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"),
            stop_words: stop_words.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// Unigram and bigram terms of a text, in order of appearance
    pub fn terms(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(*token))
            .collect();

        let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        terms.extend(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
        terms
    }

    fn term_counts(&self, text: &str) -> TermCounts {
        let mut counts = TermCounts::new();
        for term in self.terms(text) {
            *counts.entry(term).or_insert(0.0) += 1.0;
        }
        counts
    }

    /// Cosine similarity of the TF-IDF vectors of `a` and `b`, in `[0, 1]`
    ///
    /// Fails only when neither text yields a term. A text with no terms
    /// compared against one with terms scores 0.
    pub fn similarity(&self, a: &str, b: &str) -> SimilarityResult<f64> {
        let counts_a = self.term_counts(a);
        let counts_b = self.term_counts(b);

        if counts_a.is_empty() && counts_b.is_empty() {
            return Err(SimilarityError::EmptyVocabulary);
        }

        let idf = |term: &str| {
            let df = counts_a.contains_key(term) as u8 + counts_b.contains_key(term) as u8;
            ((1.0 + CORPUS_SIZE) / (1.0 + df as f64)).ln() + 1.0
        };

        let norm = |counts: &TermCounts| {
            counts
                .iter()
                .map(|(term, tf)| (tf * idf(term)).powi(2))
                .sum::<f64>()
                .sqrt()
        };

        let norm_a = norm(&counts_a);
        let norm_b = norm(&counts_b);
        if norm_a == 0.0 || norm_b == 0.0 {
            return Ok(0.0);
        }

        let dot: f64 = counts_a
            .iter()
            .filter_map(|(term, tf_a)| {
                counts_b.get(term).map(|tf_b| {
                    let w = idf(term);
                    (tf_a * w) * (tf_b * w)
                })
            })
            .sum();

        Ok((dot / (norm_a * norm_b)).clamp(0.0, 1.0))
    }
}
