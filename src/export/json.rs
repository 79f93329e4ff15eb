//! JSON Export functionality
//!
//! Exports a budget analysis to JSON with schema versioning, for consumption
//! by the presentation layer or other tools.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::engine::BudgetAnalysis;
use crate::error::{AllotError, AllotResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Analysis export envelope
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// The derived view
    pub analysis: &'a BudgetAnalysis,
}

impl<'a> AnalysisExport<'a> {
    /// Wrap an analysis for export
    pub fn new(analysis: &'a BudgetAnalysis) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            analysis,
        }
    }
}

/// Export an analysis to JSON
pub fn export_json<W: Write + ?Sized>(
    analysis: &BudgetAnalysis,
    writer: &mut W,
    pretty: bool,
) -> AllotResult<()> {
    let export = AnalysisExport::new(analysis);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| AllotError::Export(e.to_string()))?;

    Ok(())
}
