//! Graph algorithms for the faculty collaboration network
//!
//! Every algorithm runs over a read-only [`GraphView`] of an undirected,
//! weighted graph and returns scores keyed by [`NodeId`].

pub mod common;
pub mod pagerank;
pub mod pathfinding;
pub mod centrality;
pub mod topology;

pub use common::{GraphView, NodeId};
pub use pagerank::{page_rank, PageRankConfig};
pub use pathfinding::{shortest_path_dag, DistanceMode, ShortestPathDag};
pub use centrality::{betweenness_centrality, closeness_centrality, degree_centrality};
pub use topology::clustering;
