//! Faculty roster ingestion and normalization
//!
//! Raw scraped rows become [`FacultyNode`]s with stable, row-ordered ids.
//! Normalization never fails for a single bad field.

pub mod node;
pub mod roster;

pub use node::{coerce_count, normalize_records, FacultyNode, RawFacultyRecord, UNKNOWN_DEPARTMENT};
pub use roster::{load_roster, read_records, read_roster};
