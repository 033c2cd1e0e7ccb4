//! Faculty records and their normalized node form
//!
//! A [`RawFacultyRecord`] mirrors one roster row exactly as scraped: every
//! column may be absent or malformed. [`FacultyNode::from_record`] turns it
//! into the canonical node and never fails; bad values fall back to
//! defaults.

use faculty_graph_algorithms::NodeId;
use serde::{Deserialize, Serialize};

/// Department assigned when the roster row has none
pub const UNKNOWN_DEPARTMENT: &str = "Unknown Department";

/// One roster row as scraped; `None` marks a missing or empty cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFacultyRecord {
    pub name: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub research_areas: Option<String>,
    pub h_index: Option<String>,
    /// Citation count
    pub citations: Option<String>,
    pub image_url: Option<String>,
    /// Research group and center affiliations, `;`-separated
    pub research: Option<String>,
}

/// A faculty member as a graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyNode {
    /// 0-based roster row; the join key for edges and metrics
    pub id: NodeId,
    pub name: String,
    pub department: String,
    pub email: Option<String>,
    pub research_areas: String,
    pub h_index: u64,
    #[serde(rename = "citations")]
    pub citation_count: u64,
    pub image_url: Option<String>,
    pub research_groups: String,
}

impl FacultyNode {
    /// Normalize one roster row into a node with the given id
    pub fn from_record(id: NodeId, record: RawFacultyRecord) -> Self {
        FacultyNode {
            id,
            name: record.name.map(|n| n.trim().to_string()).unwrap_or_default(),
            department: non_blank(record.department)
                .unwrap_or_else(|| UNKNOWN_DEPARTMENT.to_string()),
            email: non_blank(record.email),
            research_areas: record.research_areas.unwrap_or_default(),
            h_index: coerce_count(record.h_index.as_deref()),
            citation_count: coerce_count(record.citations.as_deref()),
            image_url: non_blank(record.image_url),
            research_groups: record.research.unwrap_or_default(),
        }
    }
}

/// Normalize a whole roster; ids follow row order
pub fn normalize_records<I>(records: I) -> Vec<FacultyNode>
where
    I: IntoIterator<Item = RawFacultyRecord>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(row, record)| FacultyNode::from_record(row as NodeId, record))
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a non-negative count. Decimals truncate; anything unparseable,
/// negative or non-finite is 0.
pub fn coerce_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.trunc() as u64)
        .unwrap_or(0)
}
