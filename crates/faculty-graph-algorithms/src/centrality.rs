//! Centrality measures
//!
//! Degree, betweenness (Brandes) and closeness centrality over a weighted,
//! undirected [`GraphView`]. Shortest paths follow the supplied
//! [`DistanceMode`], so betweenness and closeness always agree on what
//! "near" means.

use super::common::{GraphView, NodeId};
use super::pathfinding::{shortest_path_dag, DistanceMode};
use std::collections::HashMap;

/// Degree centrality: `degree / (N - 1)`, or 0 for graphs with fewer than 2 nodes
pub fn degree_centrality(view: &GraphView) -> HashMap<NodeId, f64> {
    let n = view.node_count;
    let scores = (0..n)
        .map(|idx| {
            if n > 1 {
                view.degree(idx) as f64 / (n - 1) as f64
            } else {
                0.0
            }
        })
        .collect();

    view.to_node_map(scores)
}

/// Betweenness centrality (Brandes, weighted shortest paths)
///
/// Normalized by `1 / ((N - 1)(N - 2))`. Each unordered pair is visited
/// from both endpoints, which supplies the factor of two the undirected
/// normalization needs.
pub fn betweenness_centrality(view: &GraphView, mode: DistanceMode) -> HashMap<NodeId, f64> {
    let n = view.node_count;
    let mut scores = vec![0.0; n];

    for source in 0..n {
        let dag = shortest_path_dag(view, source, mode);
        let mut delta = vec![0.0; n];

        // Accumulate dependencies in reverse settle order
        for &w in dag.order.iter().rev() {
            for &v in &dag.predecessors[w] {
                delta[v] += dag.sigma[v] / dag.sigma[w] * (1.0 + delta[w]);
            }
            if w != dag.source {
                scores[w] += delta[w];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        for score in &mut scores {
            *score *= scale;
        }
    }

    view.to_node_map(scores)
}

/// Closeness centrality over weighted shortest paths
///
/// For a node reaching `r` nodes (itself included) at total distance `D`:
/// `(r - 1) / D`, scaled by `(r - 1) / (N - 1)` so nodes in small components
/// are not over-rated (Wasserman-Faust). Isolated nodes score 0.
pub fn closeness_centrality(view: &GraphView, mode: DistanceMode) -> HashMap<NodeId, f64> {
    let n = view.node_count;

    let scores = (0..n)
        .map(|source| {
            let dag = shortest_path_dag(view, source, mode);
            let reached = dag.reachable() as f64 - 1.0;
            let total = dag.total_distance();

            if total > 0.0 && n > 1 {
                (reached / total) * (reached / (n - 1) as f64)
            } else {
                0.0
            }
        })
        .collect();

    view.to_node_map(scores)
}
