//! Weighted shortest paths
//!
//! Single-source Dijkstra that also records the shortest-path DAG
//! (predecessors and path counts), which is what betweenness needs.

use super::common::GraphView;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Path lengths closer than this (relative) are treated as ties
const TIE_EPSILON: f64 = 1e-12;

/// How an edge weight is turned into a traversal cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceMode {
    /// Weight is the cost: heavier edges are farther apart
    #[default]
    Raw,
    /// Cost is `1 / weight`: heavier edges are closer
    Inverse,
}

impl DistanceMode {
    /// Traversal cost of an edge with the given weight
    pub fn cost(self, weight: f64) -> f64 {
        match self {
            DistanceMode::Raw => weight,
            DistanceMode::Inverse if weight > 0.0 => 1.0 / weight,
            DistanceMode::Inverse => f64::INFINITY,
        }
    }
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node_idx: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap, lower index first on ties
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path DAG rooted at one source (dense indices)
#[derive(Debug, Clone)]
pub struct ShortestPathDag {
    pub source: usize,
    /// Nodes in the order they were settled (non-decreasing distance)
    pub order: Vec<usize>,
    /// Distance from the source; `f64::INFINITY` when unreachable
    pub distance: Vec<f64>,
    /// Number of distinct shortest paths from the source
    pub sigma: Vec<f64>,
    /// Predecessors on shortest paths
    pub predecessors: Vec<Vec<usize>>,
}

impl ShortestPathDag {
    /// Number of nodes reachable from the source, the source included
    pub fn reachable(&self) -> usize {
        self.order.len()
    }

    /// Sum of distances to every reachable node
    pub fn total_distance(&self) -> f64 {
        self.order.iter().map(|&idx| self.distance[idx]).sum()
    }
}

fn is_tie(a: f64, b: f64) -> bool {
    (a - b).abs() <= TIE_EPSILON * a.abs().max(1.0)
}

/// Dijkstra from `source_idx` over the whole view, keeping every shortest path
pub fn shortest_path_dag(view: &GraphView, source_idx: usize, mode: DistanceMode) -> ShortestPathDag {
    let n = view.node_count;
    let mut tentative = vec![f64::INFINITY; n];
    let mut distance = vec![f64::INFINITY; n];
    let mut settled = vec![false; n];
    let mut sigma = vec![0.0; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut order = Vec::new();
    let mut heap = BinaryHeap::new();

    tentative[source_idx] = 0.0;
    sigma[source_idx] = 1.0;
    heap.push(State { cost: 0.0, node_idx: source_idx });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if settled[node_idx] || cost > tentative[node_idx] {
            continue;
        }
        settled[node_idx] = true;
        distance[node_idx] = cost;
        order.push(node_idx);

        for (&next_idx, &weight) in view.neighbors(node_idx).iter().zip(view.weights(node_idx)) {
            if settled[next_idx] {
                continue;
            }

            let step = mode.cost(weight);
            if !step.is_finite() || step < 0.0 {
                continue;
            }

            let next_cost = cost + step;

            if is_tie(next_cost, tentative[next_idx]) {
                sigma[next_idx] += sigma[node_idx];
                predecessors[next_idx].push(node_idx);
            } else if next_cost < tentative[next_idx] {
                tentative[next_idx] = next_cost;
                sigma[next_idx] = sigma[node_idx];
                predecessors[next_idx].clear();
                predecessors[next_idx].push(node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    ShortestPathDag {
        source: source_idx,
        order,
        distance,
        sigma,
        predecessors,
    }
}
