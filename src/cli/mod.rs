//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the engine and reports.

pub mod analyze;
pub mod framework;
pub mod snapshot;

pub use analyze::{handle_analyze_command, AnalyzeArgs};
pub use framework::{handle_framework_command, FrameworkCommands};
pub use snapshot::{
    format_tree_view, handle_tree_command, handle_validate_command, load_validated,
};
