use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use allotment::cli::{
    handle_analyze_command, handle_framework_command, handle_tree_command,
    handle_validate_command, AnalyzeArgs, FrameworkCommands,
};
use allotment::config::{AllotPaths, Settings};
use allotment::models::FrameworkCatalog;
use allotment::storage::FileItemStore;

#[derive(Parser)]
#[command(
    name = "allot",
    version,
    about = "Budget allocation analysis against spending frameworks",
    long_about = "Allotment groups a budget's line items into needs, wants and savings, \
                  rolls child items up into their parents and compares each bucket's \
                  share of income against a framework such as the 50/30/20 rule."
)]
struct Cli {
    /// Log filter (e.g. warn, info, allotment=debug)
    #[arg(long, global = true, default_value = "warn", env = "ALLOTMENT_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a budget snapshot against its framework
    Analyze(AnalyzeArgs),

    /// Show the item hierarchy with rolled-up amounts
    Tree {
        /// Snapshot file, or a name in the snapshots directory
        snapshot: String,
    },

    /// Check a snapshot for invalid items
    Validate {
        /// Snapshot file, or a name in the snapshots directory
        snapshot: String,
    },

    /// List or show budgeting frameworks
    #[command(alias = "framework")]
    Frameworks {
        #[command(subcommand)]
        command: Option<FrameworkCommands>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let paths = AllotPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let catalog = FrameworkCatalog::builtin();
    let store = FileItemStore::new(paths.snapshots_dir());
    debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    match cli.command {
        Some(Commands::Analyze(args)) => {
            handle_analyze_command(&store, &settings, &catalog, args)?;
        }
        Some(Commands::Tree { snapshot }) => {
            handle_tree_command(&store, &settings, &snapshot)?;
        }
        Some(Commands::Validate { snapshot }) => {
            handle_validate_command(&store, &snapshot)?;
        }
        Some(Commands::Frameworks { command }) => {
            handle_framework_command(&catalog, command.unwrap_or(FrameworkCommands::List))?;
        }
        Some(Commands::Config) => {
            println!("Allotment Configuration");
            println!("=======================");
            println!("Base directory:      {}", paths.base_dir().display());
            println!("Settings file:       {}", paths.settings_file().display());
            println!("Snapshots directory: {}", paths.snapshots_dir().display());
            println!("Exports directory:   {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Default framework: {}", settings.default_framework.label());
            println!("  Default format:    {}", settings.default_format);
            println!("  Show children:     {}", settings.show_children);
        }
        None => {
            println!("Allotment - budget allocation analysis");
            println!();
            println!("Run 'allot --help' for usage information.");
            println!("Run 'allot analyze <snapshot>' to analyze a budget.");
        }
    }

    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
