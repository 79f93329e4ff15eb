//! Analyze CLI command
//!
//! Runs the full pipeline over a snapshot and prints or exports the result.

use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use super::snapshot::load_validated;
use crate::config::{OutputFormat, Settings};
use crate::error::{AllotError, AllotResult};
use crate::export::{export_json, export_yaml};
use crate::models::{FrameworkCatalog, FrameworkId};
use crate::reports::AllocationReport;
use crate::storage::{write_atomic, ItemStore};

/// Arguments for `allot analyze`
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Snapshot file, or a name in the snapshots directory
    pub snapshot: String,

    /// Framework to evaluate against (overrides the snapshot)
    #[arg(short = 'F', long)]
    pub framework: Option<FrameworkId>,

    /// Output format: terminal, json, yaml or csv
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `allot analyze`
pub fn handle_analyze_command(
    store: &dyn ItemStore,
    settings: &Settings,
    catalog: &FrameworkCatalog,
    args: AnalyzeArgs,
) -> AllotResult<()> {
    let budget = load_validated(store, &args.snapshot)?;
    let report = AllocationReport::generate(&budget, args.framework.as_ref(), settings, catalog);
    let format = args.format.unwrap_or(settings.default_format);

    match args.output {
        Some(path) => {
            write_atomic(&path, |w| render(&report, format, w))?;
            info!(path = %path.display(), %format, "analysis exported");
            println!("Analysis exported to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            render(&report, format, &mut handle)?;
        }
    }

    Ok(())
}

/// Write the report in the requested format
pub fn render(
    report: &AllocationReport,
    format: OutputFormat,
    writer: &mut dyn Write,
) -> AllotResult<()> {
    match format {
        OutputFormat::Terminal => writer
            .write_all(report.format_terminal().as_bytes())
            .map_err(|e| AllotError::Export(e.to_string())),
        OutputFormat::Json => {
            export_json(&report.analysis, writer, true)?;
            writeln!(writer).map_err(|e| AllotError::Export(e.to_string()))
        }
        OutputFormat::Yaml => export_yaml(&report.analysis, writer),
        OutputFormat::Csv => report.export_csv(writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, BudgetItem, CategoryType, Money};

    fn report() -> AllocationReport {
        let mut budget = Budget::new("March", Money::from_major(2000));
        budget.push(
            BudgetItem::new("Rent", CategoryType::Needs)
                .with_id("rent")
                .with_amounts(Money::from_major(1000), Money::from_major(1000)),
        );
        AllocationReport::generate(
            &budget,
            None,
            &Settings::default(),
            &FrameworkCatalog::builtin(),
        )
    }

    #[test]
    fn test_render_formats() {
        let report = report();

        let mut terminal = Vec::new();
        render(&report, OutputFormat::Terminal, &mut terminal).unwrap();
        assert!(String::from_utf8(terminal).unwrap().contains("Budget Allocation - March"));

        let mut json = Vec::new();
        render(&report, OutputFormat::Json, &mut json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["analysis"]["progress"][0]["category"], "Rent");

        let mut csv = Vec::new();
        render(&report, OutputFormat::Csv, &mut csv).unwrap();
        assert!(String::from_utf8(csv).unwrap().contains("needs,Rent,,1000.00,1000.00,0.00,50.00"));
    }
}
