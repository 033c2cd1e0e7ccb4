//! End-to-end pipeline: roster → edges → metrics → document
//!
//! One sequential pass over a static roster. The only I/O is reading the
//! roster at the start and writing the document at the end.

use crate::algo::GraphMetricsEngine;
use crate::config::PipelineConfig;
use crate::error::NetworkResult;
use crate::export::{GraphExporter, NetworkDocument};
use crate::faculty::{load_roster, FacultyNode};
use crate::network::PairwiseEdgeBuilder;
use std::path::Path;
use tracing::info;

/// Runs every stage with one configuration
#[derive(Debug, Clone)]
pub struct Pipeline {
    edge_builder: PairwiseEdgeBuilder,
    metrics: GraphMetricsEngine,
    exporter: GraphExporter,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> NetworkResult<Self> {
        config.validate()?;
        Ok(Self {
            edge_builder: PairwiseEdgeBuilder::new(config.edges)?,
            metrics: GraphMetricsEngine::new(config.metrics),
            exporter: GraphExporter::new(config.export)?,
        })
    }

    /// Build the network document from already normalized nodes
    pub fn run(&self, nodes: Vec<FacultyNode>) -> NetworkDocument {
        info!("Processing {} faculty members", nodes.len());

        let edges = self.edge_builder.build(&nodes);
        let metrics = self.metrics.compute(&nodes, &edges);
        self.exporter.export(nodes, &metrics, edges)
    }

    /// Read the roster CSV at `input`, build the document and write it to `output`
    pub fn run_files(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> NetworkResult<NetworkDocument> {
        let nodes = load_roster(input)?;
        let document = self.run(nodes);
        document.write_to(output)?;
        Ok(document)
    }
}
