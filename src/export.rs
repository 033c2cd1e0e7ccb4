//! Network document export
//!
//! Joins faculty nodes with their metrics, derives the presentation
//! attributes (department color, visual size) and assembles the JSON
//! document read by the visualization front end.

use crate::algo::NodeMetrics;
use crate::config::ExportConfig;
use crate::error::{NetworkError, NetworkResult};
use crate::faculty::FacultyNode;
use crate::network::Edge;
use faculty_graph_algorithms::NodeId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// A faculty node with metrics and presentation attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedNode {
    #[serde(flatten)]
    pub faculty: FacultyNode,
    #[serde(flatten)]
    pub metrics: NodeMetrics,
    pub color: String,
    pub size: u64,
}

/// Summary counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub departments_count: usize,
}

/// The complete exported graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub nodes: Vec<ExportedNode>,
    pub edges: Vec<Edge>,
    pub departments: Vec<String>,
    pub department_colors: IndexMap<String, String>,
    pub stats: NetworkStats,
}

impl NetworkDocument {
    /// Pretty-printed JSON, non-ASCII kept verbatim
    pub fn to_json_pretty(&self) -> NetworkResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json: &str) -> NetworkResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the document to `path`, replacing any existing file
    pub fn write_to(&self, path: impl AsRef<Path>) -> NetworkResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| NetworkError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;

        info!("Network document written to {:?}", path);
        Ok(())
    }

    /// Read a previously exported document
    pub fn read_from(path: impl AsRef<Path>) -> NetworkResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| NetworkError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Derives presentation attributes and assembles [`NetworkDocument`]s
#[derive(Debug, Clone, Default)]
pub struct GraphExporter {
    config: ExportConfig,
}

impl GraphExporter {
    /// Fails when the palette is empty
    pub fn new(config: ExportConfig) -> NetworkResult<Self> {
        if config.palette.is_empty() {
            return Err(NetworkError::InvalidConfig(
                "export.palette must contain at least one color".to_string(),
            ));
        }
        Ok(Self { config })
    }

    /// Distinct departments in first-seen order, each mapped round-robin
    /// onto the palette
    pub fn department_colors(&self, nodes: &[FacultyNode]) -> IndexMap<String, String> {
        let mut colors = IndexMap::new();
        for node in nodes {
            if !colors.contains_key(&node.department) {
                let color = self.config.palette[colors.len() % self.config.palette.len()].clone();
                colors.insert(node.department.clone(), color);
            }
        }
        colors
    }

    /// `degree * degree_scale + h_index`, clamped to the configured bounds
    pub fn node_size(&self, degree: usize, h_index: u64) -> u64 {
        (degree as u64)
            .saturating_mul(self.config.degree_scale)
            .saturating_add(h_index)
            .clamp(self.config.min_size, self.config.max_size)
    }

    /// Assemble the document. Every node and edge passed in is kept.
    pub fn export(
        &self,
        nodes: Vec<FacultyNode>,
        metrics: &HashMap<NodeId, NodeMetrics>,
        edges: Vec<Edge>,
    ) -> NetworkDocument {
        let department_colors = self.department_colors(&nodes);

        let nodes: Vec<ExportedNode> = nodes
            .into_iter()
            .map(|faculty| {
                let metrics = metrics.get(&faculty.id).copied().unwrap_or_else(|| {
                    warn!("No metrics computed for node {}; exporting zeros", faculty.id);
                    NodeMetrics::default()
                });
                let color = department_colors[&faculty.department].clone();
                let size = self.node_size(metrics.degree, faculty.h_index);
                ExportedNode {
                    faculty,
                    metrics,
                    color,
                    size,
                }
            })
            .collect();

        let departments: Vec<String> = department_colors.keys().cloned().collect();

        let stats = NetworkStats {
            total_nodes: nodes.len(),
            total_edges: edges.len(),
            departments_count: departments.len(),
        };

        info!(
            "Exported {} nodes, {} edges across {} departments",
            stats.total_nodes, stats.total_edges, stats.departments_count
        );

        NetworkDocument {
            nodes,
            edges,
            departments,
            department_colors,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PALETTE;
    use crate::faculty::{normalize_records, RawFacultyRecord};
    use crate::network::EdgeSignal;

    fn roster(departments: &[&str]) -> Vec<FacultyNode> {
        normalize_records(departments.iter().map(|d| RawFacultyRecord {
            name: Some(format!("Prof. {}", d)),
            department: Some(d.to_string()),
            ..Default::default()
        }))
    }

    #[test]
    fn test_department_colors_first_seen() {
        let exporter = GraphExporter::default();
        let colors = exporter.department_colors(&roster(&["Math", "CS", "Math", "Physics"]));

        let keys: Vec<&str> = colors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Math", "CS", "Physics"]);
        assert_eq!(colors["Math"], DEFAULT_PALETTE[0]);
        assert_eq!(colors["CS"], DEFAULT_PALETTE[1]);
        assert_eq!(colors["Physics"], DEFAULT_PALETTE[2]);
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        let config = ExportConfig {
            palette: Vec::new(),
            ..ExportConfig::default()
        };
        let err = GraphExporter::new(config).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidConfig(_)));

        let single = ExportConfig {
            palette: vec!["#000000".to_string()],
            ..ExportConfig::default()
        };
        let colors = GraphExporter::new(single).unwrap().department_colors(&roster(&["CS", "Math"]));
        assert_eq!(colors["Math"], "#000000");
    }

    #[test]
    fn test_palette_wraps_around() {
        let departments: Vec<String> = (0..12).map(|i| format!("Dept {}", i)).collect();
        let names: Vec<&str> = departments.iter().map(String::as_str).collect();

        let colors = GraphExporter::default().department_colors(&roster(&names));

        assert_eq!(colors["Dept 10"], DEFAULT_PALETTE[0]);
        assert_eq!(colors["Dept 11"], DEFAULT_PALETTE[1]);
    }

    #[test]
    fn test_department_colors_deterministic() {
        let nodes = roster(&["B", "A", "C", "A", "D"]);
        let exporter = GraphExporter::default();
        assert_eq!(exporter.department_colors(&nodes), exporter.department_colors(&nodes));
    }

    #[test]
    fn test_node_size_bounds() {
        let exporter = GraphExporter::default();
        assert_eq!(exporter.node_size(0, 0), 5);
        assert_eq!(exporter.node_size(50, 50), 25);
        assert_eq!(exporter.node_size(2, 4), 10);
        assert_eq!(exporter.node_size(usize::MAX, u64::MAX), 25);
        for degree in 0..20 {
            for h_index in 0..40 {
                let size = exporter.node_size(degree, h_index);
                assert!((5..=25).contains(&size));
            }
        }
    }

    #[test]
    fn test_export_keeps_everything() {
        let nodes = roster(&["CS", "CS", "Math"]);
        let edges = vec![Edge::new(0, 1, 0.3, &[EdgeSignal::Department])];
        let mut metrics = HashMap::new();
        metrics.insert(0, NodeMetrics { degree: 1, ..Default::default() });
        metrics.insert(1, NodeMetrics { degree: 1, ..Default::default() });
        metrics.insert(2, NodeMetrics::default());

        let doc = GraphExporter::default().export(nodes, &metrics, edges);

        assert_eq!(doc.nodes.len(), 3);
        assert_eq!(doc.edges.len(), 1);
        assert_eq!(doc.departments, vec!["CS", "Math"]);
        assert_eq!(
            doc.stats,
            NetworkStats {
                total_nodes: 3,
                total_edges: 1,
                departments_count: 2
            }
        );
        assert_eq!(doc.nodes[0].color, DEFAULT_PALETTE[0]);
        assert_eq!(doc.nodes[2].color, DEFAULT_PALETTE[1]);
        assert_eq!(doc.nodes[0].size, 5);
    }

    #[test]
    fn test_node_json_is_flat() {
        let nodes = roster(&["Matemáticas"]);
        let mut metrics = HashMap::new();
        metrics.insert(0, NodeMetrics { pagerank: 1.0, ..Default::default() });

        let doc = GraphExporter::default().export(nodes, &metrics, Vec::new());
        let json: serde_json::Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();

        let node = &json["nodes"][0];
        assert_eq!(node["department"], "Matemáticas");
        assert_eq!(node["pagerank"], 1.0);
        assert_eq!(node["degree"], 0);
        assert_eq!(node["size"], 5);
        assert_eq!(node["color"], DEFAULT_PALETTE[0]);
        assert_eq!(json["department_colors"]["Matemáticas"], DEFAULT_PALETTE[0]);
        assert_eq!(json["stats"]["total_nodes"], 1);

        // Non-ASCII is written verbatim
        assert!(doc.to_json_pretty().unwrap().contains("Matemáticas"));
    }

    #[test]
    fn test_json_roundtrip() {
        let nodes = roster(&["CS", "CS"]);
        let edges = vec![Edge::new(0, 1, 0.3, &[EdgeSignal::Department])];
        let mut metrics = HashMap::new();
        metrics.insert(0, NodeMetrics { degree: 1, degree_centrality: 1.0, pagerank: 0.5, ..Default::default() });
        metrics.insert(1, NodeMetrics { degree: 1, degree_centrality: 1.0, pagerank: 0.5, ..Default::default() });

        let doc = GraphExporter::default().export(nodes, &metrics, edges);
        let parsed = NetworkDocument::from_json_str(&doc.to_json_pretty().unwrap()).unwrap();

        assert_eq!(parsed, doc);
        assert_eq!(parsed.nodes.len(), parsed.stats.total_nodes);
        assert_eq!(parsed.edges.len(), parsed.stats.total_edges);
    }
}
