//! Roster CSV ingestion
//!
//! Reads the scraped faculty table (`Name, Department, Email, ResearchAreas,
//! H-index, Citas, Image URL, Research`). Extra columns are ignored and short
//! rows are accepted; only input that is not CSV at all is an error.

use super::node::{normalize_records, FacultyNode, RawFacultyRecord};
use crate::error::{NetworkError, NetworkResult};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Column positions resolved from the header row
#[derive(Debug, Default)]
struct RosterColumns {
    name: Option<usize>,
    department: Option<usize>,
    email: Option<usize>,
    research_areas: Option<usize>,
    h_index: Option<usize>,
    citations: Option<usize>,
    image_url: Option<usize>,
    research: Option<usize>,
}

impl RosterColumns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };
        RosterColumns {
            name: find("Name"),
            department: find("Department"),
            email: find("Email"),
            research_areas: find("ResearchAreas"),
            h_index: find("H-index"),
            citations: find("Citas"),
            image_url: find("Image URL"),
            research: find("Research"),
        }
    }

    fn extract(&self, row: &StringRecord) -> RawFacultyRecord {
        let cell = |column: Option<usize>| {
            column
                .and_then(|idx| row.get(idx))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        RawFacultyRecord {
            name: cell(self.name),
            department: cell(self.department),
            email: cell(self.email),
            research_areas: cell(self.research_areas),
            h_index: cell(self.h_index),
            citations: cell(self.citations),
            image_url: cell(self.image_url),
            research: cell(self.research),
        }
    }
}

/// Read every row of a roster into raw records
pub fn read_records<R: Read>(reader: R) -> NetworkResult<Vec<RawFacultyRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = RosterColumns::from_headers(csv_reader.headers()?);
    if columns.name.is_none() {
        warn!("Roster has no Name column; every name will be empty");
    }

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        records.push(columns.extract(&row));
    }

    debug!("Read {} roster rows", records.len());
    Ok(records)
}

/// Read and normalize a roster from any reader
pub fn read_roster<R: Read>(reader: R) -> NetworkResult<Vec<FacultyNode>> {
    Ok(normalize_records(read_records(reader)?))
}

/// Read and normalize a roster CSV file
pub fn load_roster(path: impl AsRef<Path>) -> NetworkResult<Vec<FacultyNode>> {
    let path = path.as_ref();
    info!("Loading faculty roster from {:?}", path);

    let file = File::open(path).map_err(|source| NetworkError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let nodes = read_roster(file)?;
    info!("Loaded {} faculty members", nodes.len());
    Ok(nodes)
}
