//! PageRank algorithm implementation
//!
//! Weighted variant for undirected graphs: every node hands its score to its
//! neighbours in proportion to the incident edge weight.

use super::common::{GraphView, NodeId};
use std::collections::HashMap;

/// PageRank configuration
#[derive(Debug, Clone, Copy)]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Maximum number of iterations
    pub iterations: usize,
    /// Per-node tolerance; iteration stops once the L1 change drops below `N * tolerance`
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Calculate weighted PageRank for the graph view
///
/// Scores sum to 1. Nodes without incident weight (isolated nodes) are
/// dangling: their mass is spread uniformly over all nodes each iteration.
pub fn page_rank(view: &GraphView, config: PageRankConfig) -> HashMap<NodeId, f64> {
    let n = view.node_count;

    if n == 0 {
        return HashMap::new();
    }

    // Initial score is uniform
    let uniform = 1.0 / n as f64;
    let mut scores = vec![uniform; n];
    let mut next_scores = vec![0.0; n];
    let strength: Vec<f64> = (0..n).map(|i| view.strength(i)).collect();

    let d = config.damping_factor;
    let teleport = (1.0 - d) * uniform;

    for _ in 0..config.iterations {
        let dangling_mass: f64 = (0..n)
            .filter(|&i| strength[i] <= 0.0)
            .map(|i| scores[i])
            .sum();
        let base_score = teleport + d * dangling_mass * uniform;

        let mut total_diff = 0.0;

        for i in 0..n {
            let mut sum_incoming = 0.0;

            for (&source_idx, &weight) in view.neighbors(i).iter().zip(view.weights(i)) {
                if strength[source_idx] > 0.0 {
                    sum_incoming += scores[source_idx] * weight / strength[source_idx];
                }
            }

            next_scores[i] = base_score + d * sum_incoming;
            total_diff += (next_scores[i] - scores[i]).abs();
        }

        // Swap buffers
        std::mem::swap(&mut scores, &mut next_scores);

        if total_diff < n as f64 * config.tolerance {
            break;
        }
    }

    view.to_node_map(scores)
}
