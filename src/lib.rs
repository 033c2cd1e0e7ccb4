//! Faculty Collaboration Network
//!
//! Builds a weighted collaboration graph among faculty members from a
//! scraped roster and computes structural metrics for visualization.
//!
//! # Pipeline
//!
//! - [`faculty`]: roster ingestion and normalization into [`FacultyNode`]s
//! - [`text`]: TF-IDF similarity between research-area descriptions
//! - [`network`]: pairwise edge construction from four independent signals
//!   (department, shared research group, research similarity, citation impact)
//! - [`algo`]: degree, betweenness, closeness, pagerank and clustering
//! - [`export`]: colors, sizes and the JSON [`NetworkDocument`]
//! - [`insights`]: rankings and department breakdowns over a document
//!
//! ## Example Usage
//!
//! ```rust
//! use faculty_network::{normalize_records, Pipeline, PipelineConfig, RawFacultyRecord};
//!
//! let member = |dept: &str, h: &str| RawFacultyRecord {
//!     department: Some(dept.to_string()),
//!     h_index: Some(h.to_string()),
//!     ..Default::default()
//! };
//!
//! let nodes = normalize_records(vec![member("CS", "10"), member("CS", "12"), member("Math", "0")]);
//! let document = Pipeline::new(PipelineConfig::default()).unwrap().run(nodes);
//!
//! assert_eq!(document.stats.total_nodes, 3);
//! assert_eq!(document.edges[0].edge_type, "department;citation_similarity");
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod error;
pub mod export;
pub mod faculty;
pub mod insights;
pub mod network;
pub mod pipeline;
pub mod text;

// Re-export main types for convenience
pub use algo::{GraphMetricsEngine, NodeMetrics};
pub use config::{EdgeConfig, ExportConfig, MetricsConfig, PipelineConfig};
pub use error::{NetworkError, NetworkResult};
pub use export::{ExportedNode, GraphExporter, NetworkDocument, NetworkStats};
pub use faculty::{load_roster, normalize_records, read_roster, FacultyNode, RawFacultyRecord};
pub use insights::NetworkInsights;
pub use network::{Edge, EdgeSignal, PairwiseEdgeBuilder};
pub use pipeline::Pipeline;
pub use text::{SimilarityError, TextSimilarityScorer};

pub use faculty_graph_algorithms::{DistanceMode, NodeId};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

/// Round to 3 decimal places, the precision of every exported number
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
