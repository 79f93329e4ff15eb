//! Allocation Report
//!
//! Runs the analysis pipeline over a budget snapshot and renders the result:
//! the item tree by category type, each bucket's share of income against the
//! framework target, and feedback for the user.

use std::io::Write;

use super::feedback::{bucket_feedback, summary_feedback};
use crate::config::Settings;
use crate::display::report::{
    double_separator, format_bar, format_percentage, format_points, separator, truncate,
};
use crate::display::tree::format_item_tree;
use crate::engine::{analyze, BudgetAnalysis};
use crate::error::{AllotError, AllotResult};
use crate::models::{Budget, BudgetItem, CategoryType, FrameworkCatalog, FrameworkId};

const REPORT_WIDTH: usize = 72;
const BAR_WIDTH: usize = 20;

/// Allocation report for one budget snapshot
#[derive(Debug, Clone)]
pub struct AllocationReport {
    /// The derived view
    pub analysis: BudgetAnalysis,
    /// Currency symbol used for amounts
    pub currency_symbol: String,
    /// Whether child line items are listed
    pub show_children: bool,
}

impl AllocationReport {
    /// Analyze a budget and build the report
    ///
    /// `framework` overrides both the snapshot's framework and the configured
    /// default.
    pub fn generate(
        budget: &Budget,
        framework: Option<&FrameworkId>,
        settings: &Settings,
        catalog: &FrameworkCatalog,
    ) -> Self {
        let analysis = match framework {
            Some(framework) => {
                let forced = Budget {
                    framework: Some(framework.clone()),
                    ..budget.clone()
                };
                analyze(&forced, &settings.default_framework, catalog)
            }
            None => analyze(budget, &settings.default_framework, catalog),
        };

        Self {
            analysis,
            currency_symbol: settings.currency_symbol.clone(),
            show_children: settings.show_children,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let a = &self.analysis;
        let symbol = self.currency_symbol.as_str();
        let mut output = String::new();

        let title = if a.name.is_empty() {
            a.budget_id.to_string()
        } else {
            a.name.clone()
        };
        output.push_str(&format!("Budget Allocation - {}\n", title));
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Income: {}   Framework: {}   Currency: {}\n\n",
            a.total_income.format_with_symbol(symbol),
            a.evaluation.framework.label(),
            a.currency
        ));

        output.push_str(&format_item_tree(&a.groups, symbol, self.show_children));
        output.push('\n');

        // Allocation table
        output.push_str(&format!(
            "{:<10} {:>12} {:>8} {:>8} {:>11}  {:<20}\n",
            "Bucket", "Budgeted", "Share", "Target", "Deviation", "Status"
        ));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');

        for bucket in &a.evaluation.buckets {
            let target = bucket
                .target
                .map(format_percentage)
                .unwrap_or_else(|| "-".into());
            let deviation = bucket
                .deviation
                .map(format_points)
                .unwrap_or_else(|| "-".into());
            let status = bucket
                .status
                .map(|s| s.label().to_string())
                .unwrap_or_else(|| "-".into());

            output.push_str(&format!(
                "{:<10} {:>12} {:>8} {:>8} {:>11}  {:<20}\n",
                bucket.category_type.label(),
                bucket.total.format_with_symbol(symbol),
                format_percentage(bucket.percentage),
                target,
                deviation,
                status
            ));
            output.push_str(&format!(
                "{:<10} {}\n",
                "",
                format_bar(bucket.percentage, rust_decimal::Decimal::ONE_HUNDRED, BAR_WIDTH)
            ));
        }

        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>12}\n",
            "Allocated",
            a.allocated().format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<10} {:>12}\n",
            "Remaining",
            a.unallocated.format_with_symbol(symbol)
        ));

        let income = a.group_totals(CategoryType::Income);
        if income.item_count > 0 {
            output.push_str(&format!(
                "{:<10} {:>12}  (received {})\n",
                "Income",
                income.budgeted.format_with_symbol(symbol),
                income.spent.format_with_symbol(symbol)
            ));
        }

        // Feedback
        output.push('\n');
        output.push_str(&summary_feedback(a, symbol));
        output.push('\n');
        for bucket in &a.evaluation.buckets {
            output.push_str(&format!("  - {}\n", bucket_feedback(bucket)));
        }

        let overspent: Vec<String> = a
            .overspent()
            .map(|p| {
                format!(
                    "{} ({} over)",
                    truncate(&p.category, 30),
                    p.remaining.abs().format_with_symbol(symbol)
                )
            })
            .collect();
        if !overspent.is_empty() {
            output.push_str(&format!("\n* Overspent: {}\n", overspent.join(", ")));
        }

        if !a.dropped.is_empty() {
            output.push_str(&format!(
                "\n{} item(s) skipped: parent not found at the top level.\n",
                a.dropped.len()
            ));
        }

        output
    }

    /// Export the report to CSV format
    ///
    /// One row per top-level item followed by its children.
    pub fn export_csv<W: Write>(&self, writer: W) -> AllotResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record([
            "Type", "Category", "Parent", "Budgeted", "Spent", "Remaining", "Share of Income",
        ])
        .map_err(|e| AllotError::Export(e.to_string()))?;

        for (_, items) in self.analysis.groups.iter() {
            for item in items {
                self.write_item_row(&mut csv, item, None)?;
                for child in &item.children {
                    self.write_item_row(&mut csv, child, Some(item))?;
                }
            }
        }

        csv.flush().map_err(|e| AllotError::Export(e.to_string()))?;
        Ok(())
    }

    fn write_item_row<W: Write>(
        &self,
        csv: &mut csv::Writer<W>,
        item: &BudgetItem,
        parent: Option<&BudgetItem>,
    ) -> AllotResult<()> {
        // Children are reported under their parent's bucket
        let category_type = parent.map_or(item.category_type, |p| p.category_type);
        let share = item
            .budgeted_amount
            .percent_of(self.analysis.total_income)
            .round_dp(2);

        csv.write_record([
            category_type.as_str().to_string(),
            item.category.clone(),
            parent.map(|p| p.category.clone()).unwrap_or_default(),
            format!("{:.2}", item.budgeted_amount.amount().round_dp(2)),
            format!("{:.2}", item.spent_amount.amount().round_dp(2)),
            format!("{:.2}", item.remaining().amount().round_dp(2)),
            format!("{:.2}", share),
        ])
        .map_err(|e| AllotError::Export(e.to_string()))
    }
}
