//! Per-node structural metrics over the collaboration graph

use super::{
    betweenness_centrality, build_view, closeness_centrality, clustering, degree_centrality,
    page_rank,
};
use crate::config::MetricsConfig;
use crate::faculty::FacultyNode;
use crate::network::Edge;
use crate::round3;
use faculty_graph_algorithms::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Structural metrics of one node, each rounded to 3 decimals
///
/// The all-zero default is what an isolated node gets for everything except
/// pagerank, which is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeMetrics {
    /// Number of incident edges
    pub degree: usize,
    pub degree_centrality: f64,
    pub betweenness_centrality: f64,
    pub closeness_centrality: f64,
    pub pagerank: f64,
    pub clustering: f64,
}

/// Computes [`NodeMetrics`] for every node of a weighted undirected graph
#[derive(Debug, Clone, Default)]
pub struct GraphMetricsEngine {
    config: MetricsConfig,
}

impl GraphMetricsEngine {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    /// Metrics for every node, keyed by node id. Nodes without edges are
    /// included.
    pub fn compute(&self, nodes: &[FacultyNode], edges: &[Edge]) -> HashMap<NodeId, NodeMetrics> {
        let view = build_view(nodes, edges);
        let mode = self.config.distance_mode;

        info!(
            "Computing metrics for {} nodes and {} edges (distance mode: {:?})",
            view.node_count, view.edge_count, mode
        );

        let degree = degree_centrality(&view);
        debug!("Degree centrality done");
        let betweenness = betweenness_centrality(&view, mode);
        debug!("Betweenness centrality done");
        let closeness = closeness_centrality(&view, mode);
        debug!("Closeness centrality done");
        let pagerank = page_rank(&view, self.config.page_rank_config());
        debug!("PageRank done");
        let local_clustering = clustering(&view);
        debug!("Clustering done");

        let score = |scores: &HashMap<NodeId, f64>, id: NodeId| {
            round3(scores.get(&id).copied().unwrap_or(0.0))
        };

        view.index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| {
                let metrics = NodeMetrics {
                    degree: view.degree(idx),
                    degree_centrality: score(&degree, id),
                    betweenness_centrality: score(&betweenness, id),
                    closeness_centrality: score(&closeness, id),
                    pagerank: score(&pagerank, id),
                    clustering: score(&local_clustering, id),
                };
                (id, metrics)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faculty::{normalize_records, RawFacultyRecord};
    use crate::network::EdgeSignal;
    use faculty_graph_algorithms::DistanceMode;

    fn nodes(n: usize) -> Vec<FacultyNode> {
        normalize_records(vec![RawFacultyRecord::default(); n])
    }

    #[test]
    fn test_path_with_isolated_node() {
        // 0 - 1 - 2, node 3 isolated
        let edges = vec![
            Edge::new(0, 1, 0.5, &[EdgeSignal::Department]),
            Edge::new(1, 2, 0.5, &[EdgeSignal::Department]),
        ];

        let metrics = GraphMetricsEngine::default().compute(&nodes(4), &edges);

        assert_eq!(metrics.len(), 4);

        let middle = metrics[&1];
        assert_eq!(middle.degree, 2);
        assert_eq!(middle.degree_centrality, 0.667);
        // 2 ordered pairs through node 1 / ((4-1)(4-2))
        assert_eq!(middle.betweenness_centrality, 0.333);
        // (2 / 1.0) * (2 / 3)
        assert_eq!(middle.closeness_centrality, 1.333);
        assert_eq!(middle.clustering, 0.0);

        let isolated = metrics[&3];
        assert_eq!(isolated.degree, 0);
        assert_eq!(isolated.degree_centrality, 0.0);
        assert_eq!(isolated.betweenness_centrality, 0.0);
        assert_eq!(isolated.closeness_centrality, 0.0);
        assert_eq!(isolated.clustering, 0.0);
        assert!(isolated.pagerank > 0.0);
        assert!(isolated.pagerank < middle.pagerank);
    }

    #[test]
    fn test_triangle_clustering() {
        let edges = vec![
            Edge::new(0, 1, 0.5, &[EdgeSignal::Department]),
            Edge::new(1, 2, 0.5, &[EdgeSignal::Department]),
            Edge::new(0, 2, 0.5, &[EdgeSignal::Department]),
        ];

        let metrics = GraphMetricsEngine::default().compute(&nodes(3), &edges);

        for id in 0..3 {
            assert_eq!(metrics[&id].clustering, 1.0);
            assert_eq!(metrics[&id].degree_centrality, 1.0);
            assert_eq!(metrics[&id].pagerank, 0.333);
        }
    }

    #[test]
    fn test_no_edges() {
        let metrics = GraphMetricsEngine::default().compute(&nodes(2), &[]);

        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[&0].degree, 0);
        assert_eq!(metrics[&0].pagerank, 0.5);
    }

    #[test]
    fn test_distance_mode_changes_betweenness() {
        // Light direct edge 0-2, heavy detour through 1
        let edges = vec![
            Edge::new(0, 2, 0.25, &[EdgeSignal::Department]),
            Edge::new(0, 1, 1.0, &[EdgeSignal::ResearchGroup]),
            Edge::new(1, 2, 1.0, &[EdgeSignal::ResearchGroup]),
        ];

        let raw = GraphMetricsEngine::default().compute(&nodes(3), &edges);
        assert_eq!(raw[&1].betweenness_centrality, 0.0);

        let inverse = GraphMetricsEngine::new(MetricsConfig {
            distance_mode: DistanceMode::Inverse,
            ..MetricsConfig::default()
        })
        .compute(&nodes(3), &edges);
        assert_eq!(inverse[&1].betweenness_centrality, 1.0);
    }

    #[test]
    fn test_deterministic() {
        let edges = vec![
            Edge::new(0, 1, 0.5, &[EdgeSignal::Department]),
            Edge::new(1, 2, 0.8, &[EdgeSignal::Department]),
            Edge::new(2, 3, 0.3, &[EdgeSignal::Department]),
            Edge::new(0, 3, 0.7, &[EdgeSignal::Department]),
        ];

        let engine = GraphMetricsEngine::default();
        assert_eq!(engine.compute(&nodes(5), &edges), engine.compute(&nodes(5), &edges));
    }
}
