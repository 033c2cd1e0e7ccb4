//! Graph topology analysis algorithms
//!
//! Weighted local clustering coefficient.

use super::common::{GraphView, NodeId};
use std::collections::HashMap;

/// Weighted local clustering coefficient
///
/// Weights are normalized by the largest weight in the graph. Each triangle
/// `(u, v, w)` contributes the geometric mean of its three normalized
/// weights, and the sum is divided by the number of possible triangles
/// `deg(u)(deg(u) - 1) / 2`. Nodes with fewer than two neighbours score 0.
pub fn clustering(view: &GraphView) -> HashMap<NodeId, f64> {
    let max_weight = match view.max_weight() {
        Some(w) if w > 0.0 => w,
        _ => 1.0,
    };

    let scores = (0..view.node_count)
        .map(|u| {
            let degree = view.degree(u);
            if degree < 2 {
                return 0.0;
            }

            let neighbors = view.neighbors(u);
            let weights = view.weights(u);
            let mut weighted_triangles = 0.0;

            for (i, &v) in neighbors.iter().enumerate() {
                for (j, &w) in neighbors.iter().enumerate().skip(i + 1) {
                    if let Some(w_vw) = view.edge_weight(v, w) {
                        let product = (weights[i] / max_weight)
                            * (weights[j] / max_weight)
                            * (w_vw / max_weight);
                        weighted_triangles += product.cbrt();
                    }
                }
            }

            2.0 * weighted_triangles / (degree * (degree - 1)) as f64
        })
        .collect();

    view.to_node_map(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_graph(n: u64, weight: f64) -> GraphView {
        let nodes: Vec<NodeId> = (0..n).collect();
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((i, j, weight));
            }
        }
        GraphView::from_edges(&nodes, edges)
    }

    #[test]
    fn test_clustering_complete_graph() {
        // Uniform weights normalize to 1.0, so every node scores 1.0
        let scores = clustering(&complete_graph(4, 0.5));
        for score in scores.values() {
            assert!((score - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_clustering_weighted_triangle() {
        // Triangle 0-1-2 plus pendant 3 on node 0
        let view = GraphView::from_edges(
            &[0, 1, 2, 3],
            vec![(0, 1, 0.8), (0, 2, 0.8), (1, 2, 0.1), (0, 3, 0.5)],
        );
        let scores = clustering(&view);

        // Node 1: one possible triangle, geometric mean of (1.0, 1.0, 0.125)
        let expected = (1.0f64 * 1.0 * 0.125).cbrt();
        assert!((scores[&1] - expected).abs() < 1e-12);

        // Node 0: degree 3, same triangle out of 3 possible
        assert!((scores[&0] - expected / 3.0).abs() < 1e-12);

        // Pendant and isolated cases
        assert_eq!(scores[&3], 0.0);
    }

    #[test]
    fn test_clustering_no_edges() {
        let view = GraphView::from_edges(&[0, 1], Vec::new());
        let scores = clustering(&view);
        assert_eq!(scores[&0], 0.0);
        assert_eq!(scores[&1], 0.0);
    }
}
