//! Collaboration edge model and pairwise edge construction

pub mod builder;
pub mod edge;

pub use builder::{PairScore, PairwiseEdgeBuilder};
pub use edge::{Edge, EdgeSignal, SIGNAL_SEPARATOR};
