//! Network insights report
//!
//! Rankings and department breakdowns derived from an exported document:
//! the most connected members, the strongest bridges, the most influential
//! members and how faculty are spread over departments.

use crate::export::{ExportedNode, NetworkDocument};
use crate::network::EdgeSignal;
use faculty_graph_algorithms::NodeId;
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;

/// One ranked faculty member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMember {
    pub id: NodeId,
    pub name: String,
    pub department: String,
    pub h_index: u64,
    /// The value the ranking is based on
    pub score: f64,
}

/// Department headcount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    pub department: String,
    pub members: usize,
}

/// Number of edges each signal contributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalCount {
    pub signal: String,
    pub edges: usize,
}

/// Full insights report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkInsights {
    pub top_collaborators: Vec<RankedMember>,
    pub top_bridges: Vec<RankedMember>,
    pub top_influencers: Vec<RankedMember>,
    pub department_distribution: Vec<DepartmentCount>,
    pub signal_breakdown: Vec<SignalCount>,
}

impl NetworkInsights {
    /// Build the report, keeping the `top` best members per ranking
    pub fn from_document(doc: &NetworkDocument, top: usize) -> Self {
        NetworkInsights {
            top_collaborators: rank_by(&doc.nodes, top, |n| n.metrics.degree as f64),
            top_bridges: rank_by(&doc.nodes, top, |n| n.metrics.betweenness_centrality),
            top_influencers: rank_by(&doc.nodes, top, |n| n.metrics.pagerank),
            department_distribution: department_distribution(&doc.nodes),
            signal_breakdown: signal_breakdown(doc),
        }
    }
}

/// Top `top` nodes by `key`, descending; ties go to the lower id
pub fn rank_by<F>(nodes: &[ExportedNode], top: usize, key: F) -> Vec<RankedMember>
where
    F: Fn(&ExportedNode) -> f64,
{
    let mut ranked: Vec<(f64, &ExportedNode)> = nodes.iter().map(|n| (key(n), n)).collect();
    ranked.sort_by(|(a, na), (b, nb)| {
        b.partial_cmp(a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| na.faculty.id.cmp(&nb.faculty.id))
    });

    ranked
        .into_iter()
        .take(top)
        .map(|(score, node)| RankedMember {
            id: node.faculty.id,
            name: node.faculty.name.clone(),
            department: node.faculty.department.clone(),
            h_index: node.faculty.h_index,
            score,
        })
        .collect()
}

/// Members per department, largest first; ties keep first-seen order
pub fn department_distribution(nodes: &[ExportedNode]) -> Vec<DepartmentCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for node in nodes {
        *counts.entry(node.faculty.department.as_str()).or_insert(0) += 1;
    }

    let mut distribution: Vec<DepartmentCount> = counts
        .into_iter()
        .map(|(department, members)| DepartmentCount {
            department: department.to_string(),
            members,
        })
        .collect();
    // Stable sort keeps first-seen order among equal counts
    distribution.sort_by(|a, b| b.members.cmp(&a.members));
    distribution
}

/// How many edges each signal took part in, in signal order
pub fn signal_breakdown(doc: &NetworkDocument) -> Vec<SignalCount> {
    EdgeSignal::ALL
        .iter()
        .map(|&signal| SignalCount {
            signal: signal.to_string(),
            edges: doc.edges.iter().filter(|e| e.has_signal(signal)).count(),
        })
        .collect()
}
