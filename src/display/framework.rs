//! Framework catalog display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::display::report::format_percentage;
use crate::models::{FrameworkCatalog, FrameworkId};

#[derive(Tabled)]
struct FrameworkRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Needs")]
    needs: String,
    #[tabled(rename = "Wants")]
    wants: String,
    #[tabled(rename = "Savings")]
    savings: String,
}

/// Format every known framework with its targets as a table
pub fn format_framework_table(catalog: &FrameworkCatalog) -> String {
    let rows: Vec<FrameworkRow> = FrameworkId::known()
        .into_iter()
        .map(|id| {
            let (needs, wants, savings) = match catalog.target(&id) {
                Some(t) => (
                    format_percentage(t.needs),
                    format_percentage(t.wants),
                    format_percentage(t.savings),
                ),
                None => ("-".into(), "-".into(), "-".into()),
            };
            FrameworkRow {
                id: id.as_str().to_string(),
                name: id.label(),
                needs,
                wants,
                savings,
            }
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
