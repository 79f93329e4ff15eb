//! Configuration module for Allotment
//!
//! - Base directory resolution (environment override or platform default)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AllotPaths;
pub use settings::{OutputFormat, Settings};
