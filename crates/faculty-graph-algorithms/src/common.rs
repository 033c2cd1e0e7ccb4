//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

use std::collections::{BTreeMap, HashMap};

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of an undirected weighted graph in
/// Compressed Sparse Row (CSR) format.
///
/// Every undirected edge is stored twice, once in each endpoint's row.
/// Rows are sorted by neighbour index so lookups can binary search.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Number of undirected edges
    pub edge_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbour indices
    pub targets: Vec<usize>,
    /// Edge weights: aligned with `targets`
    pub weights: Vec<f64>,
}

impl GraphView {
    /// Build a view from a node list and undirected weighted edges.
    ///
    /// Self-loops and edges touching unknown nodes are skipped. If the same
    /// unordered pair appears more than once the last weight wins.
    pub fn from_edges<I>(nodes: &[NodeId], edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId, f64)>,
    {
        let mut index_to_node = Vec::with_capacity(nodes.len());
        let mut node_to_index = HashMap::with_capacity(nodes.len());

        for &node_id in nodes {
            if node_to_index.contains_key(&node_id) {
                continue;
            }
            node_to_index.insert(node_id, index_to_node.len());
            index_to_node.push(node_id);
        }

        let mut pairs: BTreeMap<(usize, usize), f64> = BTreeMap::new();
        for (source, target, weight) in edges {
            let (Some(&u), Some(&v)) = (node_to_index.get(&source), node_to_index.get(&target)) else {
                continue;
            };
            if u == v {
                continue;
            }
            pairs.insert((u.min(v), u.max(v)), weight);
        }

        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); index_to_node.len()];
        for (&(u, v), &weight) in &pairs {
            adjacency[u].push((v, weight));
            adjacency[v].push((u, weight));
        }

        Self::from_adjacency_list(index_to_node, node_to_index, adjacency)
    }

    /// Helper to create GraphView from symmetric adjacency lists
    pub fn from_adjacency_list(
        index_to_node: Vec<NodeId>,
        node_to_index: HashMap<NodeId, usize>,
        adjacency: Vec<Vec<(usize, f64)>>,
    ) -> Self {
        let node_count = index_to_node.len();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();
        let mut weights = Vec::new();

        offsets.push(0);
        for mut row in adjacency {
            row.sort_by_key(|&(idx, _)| idx);
            for (idx, weight) in row {
                targets.push(idx);
                weights.push(weight);
            }
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            edge_count: targets.len() / 2,
            index_to_node,
            node_to_index,
            offsets,
            targets,
            weights,
        }
    }

    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Sum of incident edge weights
    pub fn strength(&self, idx: usize) -> f64 {
        self.weights(idx).iter().sum()
    }

    /// Get neighbours of a node
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Get weights for incident edges of a node, aligned with `neighbors`
    pub fn weights(&self, idx: usize) -> &[f64] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.weights[start..end]
    }

    /// Weight of the edge between two nodes, if connected
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<f64> {
        self.neighbors(u)
            .binary_search(&v)
            .ok()
            .map(|pos| self.weights(u)[pos])
    }

    /// Largest edge weight in the graph
    pub fn max_weight(&self) -> Option<f64> {
        self.weights.iter().copied().reduce(f64::max)
    }

    /// Re-key dense per-index scores by NodeId
    pub fn to_node_map(&self, scores: Vec<f64>) -> HashMap<NodeId, f64> {
        scores
            .into_iter()
            .enumerate()
            .map(|(idx, score)| (self.index_to_node[idx], score))
            .collect()
    }
}
