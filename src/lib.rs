//! Allotment - budget allocation analysis
//!
//! This library analyzes a snapshot of budget line items. Items are grouped
//! into needs, wants, savings and income; child items are rolled up into
//! their parents; and each spending bucket's share of income is compared
//! against a budgeting framework such as the 50/30/20 rule.
//!
//! # Architecture
//!
//! - `models`: Budget items, money, ids and the framework catalog
//! - `engine`: Hierarchy reconstruction, aggregation, grouping and evaluation
//! - `reports`: Terminal report and user-facing feedback
//! - `display`: Formatting helpers for terminal output
//! - `export`: JSON and YAML export of the derived view
//! - `storage`: Snapshot loading and atomic file writes
//! - `config`: Path resolution and user settings
//! - `cli`: Command handlers for the `allot` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use allotment::engine::analyze;
//! use allotment::models::{Budget, FrameworkCatalog, FrameworkId};
//!
//! let analysis = analyze(&budget, &FrameworkId::default(), &FrameworkCatalog::builtin());
//! println!("{:?}", analysis.evaluation.is_compliant());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{AllotError, AllotResult};
