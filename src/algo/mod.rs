//! Graph algorithms module
//!
//! Algorithms are implemented in the `faculty-graph-algorithms` crate.
//! This module provides the integration/adapter layer: it projects faculty
//! nodes and collaboration edges onto a [`GraphView`] and runs the metrics.

pub mod metrics;

use crate::faculty::FacultyNode;
use crate::network::Edge;
use faculty_graph_algorithms::{GraphView, NodeId};

// Re-export algorithms
pub use faculty_graph_algorithms::{
    betweenness_centrality, closeness_centrality, clustering, degree_centrality, page_rank,
    DistanceMode, PageRankConfig,
};
pub use metrics::{GraphMetricsEngine, NodeMetrics};

/// Build a GraphView over faculty ids with edge weights attached
pub fn build_view(nodes: &[FacultyNode], edges: &[Edge]) -> GraphView {
    let ids: Vec<NodeId> = nodes.iter().map(|n| n.id).collect();
    GraphView::from_edges(
        &ids,
        edges.iter().map(|e| (e.source, e.target, e.weight)),
    )
}
