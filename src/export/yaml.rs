//! YAML Export functionality
//!
//! Exports a budget analysis to YAML for human-readable review.

use std::io::Write;

use crate::engine::BudgetAnalysis;
use crate::error::{AllotError, AllotResult};
use crate::export::json::AnalysisExport;

/// Export an analysis to YAML
pub fn export_yaml<W: Write + ?Sized>(
    analysis: &BudgetAnalysis,
    writer: &mut W,
) -> AllotResult<()> {
    let export = AnalysisExport::new(analysis);

    let header = format!(
        "# Allotment budget analysis\n# Generated: {}\n# App Version: {}\n\n",
        export.generated_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| AllotError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AllotError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::analyze;
    use crate::models::{Budget, BudgetItem, CategoryType, FrameworkCatalog, FrameworkId, Money};

    #[test]
    fn test_yaml_export() {
        let mut budget = Budget::new("March", Money::zero()).with_framework(FrameworkId::Custom);
        budget.push(BudgetItem::new("Rent", CategoryType::Needs).with_id("rent"));
        let analysis = analyze(&budget, &FrameworkId::default(), &FrameworkCatalog::builtin());

        let mut out = Vec::new();
        export_yaml(&analysis, &mut out).unwrap();
        let yaml = String::from_utf8(out).unwrap();

        assert!(yaml.starts_with("# Allotment budget analysis"));
        assert!(yaml.contains("schema_version:"));
        assert!(yaml.contains("framework: custom"));
        assert!(yaml.contains("status: undetermined"));
    }
}
