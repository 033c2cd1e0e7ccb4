//! Pipeline configuration
//!
//! Every constant the pipeline uses lives here with its default value.
//! A YAML file may override any subset of fields:
//!
//! ```yaml
//! edges:
//!   parallel: true
//! metrics:
//!   distance_mode: inverse
//! export:
//!   max_size: 30
//! ```

use crate::error::{NetworkError, NetworkResult};
use faculty_graph_algorithms::{DistanceMode, PageRankConfig};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The fixed 10-color categorical palette
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// Full pipeline configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub edges: EdgeConfig,
    pub metrics: MetricsConfig,
    pub export: ExportConfig,
}

/// Signal weights and thresholds for pairwise edge construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Added when both members share a department
    pub department_weight: f64,
    /// Added per shared research group
    pub group_weight: f64,
    /// Pattern recognizing one research group inside the affiliations text
    pub group_pattern: String,
    /// Minimum text similarity (exclusive) for the research signal to fire
    pub similarity_threshold: f64,
    /// Text similarity is multiplied by this before being added
    pub similarity_factor: f64,
    /// Added when h-indices are similar enough
    pub citation_weight: f64,
    /// Minimum h-index similarity (exclusive) for the citation signal to fire
    pub citation_threshold: f64,
    /// Edges are emitted only when their weight exceeds this
    pub inclusion_threshold: f64,
    /// Run the outer pair loop on the rayon pool
    pub parallel: bool,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            department_weight: 0.3,
            group_weight: 0.5,
            group_pattern: "Grupo[^;]*".to_string(),
            similarity_threshold: 0.2,
            similarity_factor: 0.4,
            citation_weight: 0.2,
            citation_threshold: 0.7,
            inclusion_threshold: 0.2,
            parallel: false,
        }
    }
}

/// Parameters of the metrics engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// How edge weights become shortest-path costs (betweenness and closeness)
    pub distance_mode: DistanceMode,
    pub damping_factor: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        let pagerank = PageRankConfig::default();
        Self {
            distance_mode: DistanceMode::Raw,
            damping_factor: pagerank.damping_factor,
            max_iterations: pagerank.iterations,
            tolerance: pagerank.tolerance,
        }
    }
}

impl MetricsConfig {
    pub fn page_rank_config(&self) -> PageRankConfig {
        PageRankConfig {
            damping_factor: self.damping_factor,
            iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }
}

/// Presentation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub palette: Vec<String>,
    /// Visual size = degree * degree_scale + h_index, clamped
    pub degree_scale: u64,
    pub min_size: u64,
    pub max_size: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            degree_scale: 3,
            min_size: 5,
            max_size: 25,
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> NetworkResult<Self> {
        let config: PipelineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> NetworkResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| NetworkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> NetworkResult<()> {
        if let Err(e) = Regex::new(&self.edges.group_pattern) {
            return Err(NetworkError::InvalidConfig(format!(
                "edges.group_pattern is not a valid regex: {}",
                e
            )));
        }
        if !(0.0..=1.0).contains(&self.metrics.damping_factor) {
            return Err(NetworkError::InvalidConfig(format!(
                "metrics.damping_factor must be within [0, 1], got {}",
                self.metrics.damping_factor
            )));
        }
        if self.metrics.tolerance <= 0.0 {
            return Err(NetworkError::InvalidConfig(
                "metrics.tolerance must be positive".to_string(),
            ));
        }
        if self.export.palette.is_empty() {
            return Err(NetworkError::InvalidConfig(
                "export.palette must contain at least one color".to_string(),
            ));
        }
        if self.export.min_size > self.export.max_size {
            return Err(NetworkError::InvalidConfig(format!(
                "export.min_size ({}) exceeds export.max_size ({})",
                self.export.min_size, self.export.max_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.edges.department_weight, 0.3);
        assert_eq!(config.edges.inclusion_threshold, 0.2);
        assert_eq!(config.metrics.distance_mode, DistanceMode::Raw);
        assert_eq!(config.metrics.damping_factor, 0.85);
        assert_eq!(config.export.palette.len(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = PipelineConfig::from_yaml_str(
            "edges:\n  parallel: true\nmetrics:\n  distance_mode: inverse\n",
        )
        .unwrap();

        assert!(config.edges.parallel);
        assert_eq!(config.edges.group_weight, 0.5);
        assert_eq!(config.metrics.distance_mode, DistanceMode::Inverse);
        assert_eq!(config.export.max_size, 25);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = PipelineConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = PipelineConfig::from_yaml_str("export:\n  min_size: 30\n").unwrap_err();
        assert!(matches!(err, NetworkError::InvalidConfig(_)));

        let err = PipelineConfig::from_yaml_str("export:\n  palette: []\n").unwrap_err();
        assert!(matches!(err, NetworkError::InvalidConfig(_)));

        let err = PipelineConfig::from_yaml_str("edges:\n  group_pattern: \"Grupo[\"\n").unwrap_err();
        assert!(matches!(err, NetworkError::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_distance_mode_is_parse_error() {
        let err = PipelineConfig::from_yaml_str("metrics:\n  distance_mode: sideways\n").unwrap_err();
        assert!(matches!(err, NetworkError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PipelineConfig::from_yaml_file("/nonexistent/pipeline.yaml").unwrap_err();
        assert!(matches!(err, NetworkError::Open { .. }));
    }
}
