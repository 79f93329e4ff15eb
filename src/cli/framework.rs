//! Framework CLI commands

use clap::Subcommand;

use crate::display::framework::format_framework_table;
use crate::display::report::format_percentage;
use crate::engine::TOLERANCE_BAND;
use crate::error::AllotResult;
use crate::models::{FrameworkCatalog, FrameworkId};

/// Framework subcommands
#[derive(Subcommand, Debug)]
pub enum FrameworkCommands {
    /// List every framework and its targets
    List,

    /// Show one framework's targets
    Show {
        /// Framework identifier (e.g. 50_30_20)
        framework: FrameworkId,
    },
}

/// Handle framework commands
pub fn handle_framework_command(
    catalog: &FrameworkCatalog,
    cmd: FrameworkCommands,
) -> AllotResult<()> {
    match cmd {
        FrameworkCommands::List => {
            println!("{}", format_framework_table(catalog));
            println!(
                "Buckets within {} points of their target are on target.",
                TOLERANCE_BAND
            );
        }
        FrameworkCommands::Show { framework } => {
            println!("{} ({})", framework.label(), framework);
            match catalog.target(&framework) {
                Some(target) => {
                    println!("  Needs:   {}", format_percentage(target.needs));
                    println!("  Wants:   {}", format_percentage(target.wants));
                    println!("  Savings: {}", format_percentage(target.savings));
                }
                None => println!("  No target allocation; only shares of income are reported."),
            }
        }
    }

    Ok(())
}
