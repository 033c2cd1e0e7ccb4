//! Collaboration edges and the signals that produce them

use faculty_graph_algorithms::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between signal names in an edge's type label
pub const SIGNAL_SEPARATOR: char = ';';

/// One independent rule contributing weight to an edge
///
/// Declaration order is the order signals appear in a type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeSignal {
    Department,
    ResearchGroup,
    ResearchSimilarity,
    CitationSimilarity,
}

impl EdgeSignal {
    pub const ALL: [EdgeSignal; 4] = [
        EdgeSignal::Department,
        EdgeSignal::ResearchGroup,
        EdgeSignal::ResearchSimilarity,
        EdgeSignal::CitationSimilarity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeSignal::Department => "department",
            EdgeSignal::ResearchGroup => "research_group",
            EdgeSignal::ResearchSimilarity => "research_similarity",
            EdgeSignal::CitationSimilarity => "citation_similarity",
        }
    }
}

impl fmt::Display for EdgeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EdgeSignal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeSignal::ALL
            .into_iter()
            .find(|signal| signal.as_str() == s)
            .ok_or_else(|| format!("unknown edge signal: {}", s))
    }
}

/// An undirected, weighted collaboration edge (`source < target`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    /// Sum of contributing signal weights, rounded to 3 decimals
    pub weight: f64,
    /// Contributing signal names joined with `;`
    #[serde(rename = "type")]
    pub edge_type: String,
}

impl Edge {
    /// Create an edge from its endpoints and contributing signals
    pub fn new(a: NodeId, b: NodeId, weight: f64, signals: &[EdgeSignal]) -> Self {
        let edge_type = signals
            .iter()
            .map(EdgeSignal::as_str)
            .collect::<Vec<_>>()
            .join(&SIGNAL_SEPARATOR.to_string());

        Edge {
            source: a.min(b),
            target: a.max(b),
            weight: crate::round3(weight),
            edge_type,
        }
    }

    /// Signals named in the type label; unknown names are skipped
    pub fn signals(&self) -> Vec<EdgeSignal> {
        self.edge_type
            .split(SIGNAL_SEPARATOR)
            .filter_map(|name| name.parse().ok())
            .collect()
    }

    pub fn has_signal(&self, signal: EdgeSignal) -> bool {
        self.signals().contains(&signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_new_orders_endpoints() {
        let edge = Edge::new(
            9,
            4,
            0.50004,
            &[EdgeSignal::Department, EdgeSignal::CitationSimilarity],
        );

        assert_eq!(edge.source, 4);
        assert_eq!(edge.target, 9);
        assert_eq!(edge.weight, 0.5);
        assert_eq!(edge.edge_type, "department;citation_similarity");
    }

    #[test]
    fn test_signals_roundtrip() {
        let edge = Edge::new(0, 1, 1.1, &[EdgeSignal::ResearchGroup, EdgeSignal::ResearchSimilarity]);

        assert_eq!(
            edge.signals(),
            vec![EdgeSignal::ResearchGroup, EdgeSignal::ResearchSimilarity]
        );
        assert!(edge.has_signal(EdgeSignal::ResearchGroup));
        assert!(!edge.has_signal(EdgeSignal::Department));
    }

    #[test]
    fn test_signal_parse() {
        assert_eq!("department".parse::<EdgeSignal>(), Ok(EdgeSignal::Department));
        assert!("friendship".parse::<EdgeSignal>().is_err());
    }

    #[test]
    fn test_serializes_type_field() {
        let edge = Edge::new(0, 1, 0.3, &[EdgeSignal::Department]);
        let json = serde_json::to_value(&edge).unwrap();

        assert_eq!(json["type"], "department");
        assert_eq!(json["source"], 0);
        assert_eq!(json["target"], 1);
        assert_eq!(json["weight"], 0.3);
    }
}
