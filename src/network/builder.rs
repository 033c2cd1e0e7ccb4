//! Pairwise edge construction
//!
//! Every unordered pair of faculty members is scored against four
//! independent signals. Contributions add up; a pair becomes an edge only
//! when its total exceeds the inclusion threshold. The all-pairs loop is
//! quadratic, which is fine for roster-sized inputs.

use super::edge::{Edge, EdgeSignal};
use crate::config::EdgeConfig;
use crate::error::{NetworkError, NetworkResult};
use crate::faculty::FacultyNode;
use crate::text::TextSimilarityScorer;
use rayon::prelude::*;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::{debug, info, trace};

/// Accumulated weight and contributing signals for one pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairScore {
    pub weight: f64,
    pub signals: Vec<EdgeSignal>,
}

impl PairScore {
    fn add(&mut self, signal: EdgeSignal, weight: f64) {
        self.weight += weight;
        self.signals.push(signal);
    }
}

/// Builds the collaboration edge set from normalized faculty nodes
#[derive(Debug, Clone)]
pub struct PairwiseEdgeBuilder {
    config: EdgeConfig,
    group_pattern: Regex,
    scorer: TextSimilarityScorer,
}

impl PairwiseEdgeBuilder {
    pub fn new(config: EdgeConfig) -> NetworkResult<Self> {
        let group_pattern = Regex::new(&config.group_pattern).map_err(|e| {
            NetworkError::InvalidConfig(format!("edges.group_pattern is not a valid regex: {}", e))
        })?;

        Ok(Self {
            config,
            group_pattern,
            scorer: TextSimilarityScorer::spanish(),
        })
    }

    /// Replace the research-area similarity scorer
    pub fn with_scorer(mut self, scorer: TextSimilarityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Distinct research-group names mentioned in an affiliations text
    pub fn research_groups(&self, text: &str) -> BTreeSet<String> {
        self.group_pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Score one pair. `groups_a` / `groups_b` are the pre-extracted
    /// research groups of `a` and `b`.
    pub fn score_pair(
        &self,
        a: &FacultyNode,
        b: &FacultyNode,
        groups_a: &BTreeSet<String>,
        groups_b: &BTreeSet<String>,
    ) -> PairScore {
        let mut score = PairScore::default();

        if a.department == b.department {
            score.add(EdgeSignal::Department, self.config.department_weight);
        }

        let shared_groups = groups_a.intersection(groups_b).count();
        if shared_groups > 0 {
            score.add(
                EdgeSignal::ResearchGroup,
                self.config.group_weight * shared_groups as f64,
            );
        }

        if !a.research_areas.is_empty() && !b.research_areas.is_empty() {
            match self.scorer.similarity(&a.research_areas, &b.research_areas) {
                Ok(similarity) if similarity > self.config.similarity_threshold => {
                    score.add(
                        EdgeSignal::ResearchSimilarity,
                        similarity * self.config.similarity_factor,
                    );
                }
                Ok(_) => {}
                Err(e) => trace!("No research similarity for {}-{}: {}", a.id, b.id, e),
            }
        }

        if a.h_index > 0 && b.h_index > 0 {
            let (h_a, h_b) = (a.h_index as f64, b.h_index as f64);
            let impact_similarity = 1.0 - (h_a - h_b).abs() / h_a.max(h_b);
            if impact_similarity > self.config.citation_threshold {
                score.add(EdgeSignal::CitationSimilarity, self.config.citation_weight);
            }
        }

        score
    }

    /// Edges between node `i` and every later node
    fn edges_from(&self, nodes: &[FacultyNode], groups: &[BTreeSet<String>], i: usize) -> Vec<Edge> {
        ((i + 1)..nodes.len())
            .filter_map(|j| {
                let score = self.score_pair(&nodes[i], &nodes[j], &groups[i], &groups[j]);
                (score.weight > self.config.inclusion_threshold)
                    .then(|| Edge::new(nodes[i].id, nodes[j].id, score.weight, &score.signals))
            })
            .collect()
    }

    /// Build the edge set for all unordered pairs, ordered by `(i, j)`
    pub fn build(&self, nodes: &[FacultyNode]) -> Vec<Edge> {
        let groups: Vec<BTreeSet<String>> = nodes
            .iter()
            .map(|node| self.research_groups(&node.research_groups))
            .collect();

        let edges: Vec<Edge> = if self.config.parallel {
            debug!("Scoring {} faculty pairs in parallel", pair_count(nodes.len()));
            (0..nodes.len())
                .into_par_iter()
                .flat_map_iter(|i| self.edges_from(nodes, &groups, i))
                .collect()
        } else {
            debug!("Scoring {} faculty pairs", pair_count(nodes.len()));
            (0..nodes.len())
                .flat_map(|i| self.edges_from(nodes, &groups, i))
                .collect()
        };

        info!("Built {} edges among {} faculty members", edges.len(), nodes.len());
        edges
    }
}

fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
