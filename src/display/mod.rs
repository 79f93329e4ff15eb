//! Display formatting for terminal output

pub mod framework;
pub mod report;
pub mod tree;

pub use framework::format_framework_table;
pub use report::{format_bar, format_percentage, format_points};
pub use tree::format_item_tree;
