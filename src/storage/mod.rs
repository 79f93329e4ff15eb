//! Storage layer for Allotment
//!
//! Snapshot loading from the item store and atomic file output. Items are
//! never written back; the item store owns them.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_data_file, write_atomic, FileFormat};
pub use snapshot::{FileItemStore, ItemStore};
