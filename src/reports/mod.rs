//! Reports module for Allotment
//!
//! Renders the analysis of a budget snapshot for people: the allocation report
//! and the feedback sentences attached to each deviation classification.

pub mod allocation;
pub mod feedback;

pub use allocation::AllocationReport;
pub use feedback::{bucket_feedback, summary_feedback};
