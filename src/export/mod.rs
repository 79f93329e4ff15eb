//! Export module for Allotment
//!
//! Writes a budget analysis in machine-readable formats:
//! - JSON: schema-versioned envelope for other tools
//! - YAML: the same envelope, human-readable
//!
//! CSV output lives on the allocation report.

pub mod json;
pub mod yaml;

pub use json::{export_json, AnalysisExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
