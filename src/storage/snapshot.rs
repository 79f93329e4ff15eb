//! Budget snapshot sources
//!
//! The item store owns budget items; the engine only ever reads a snapshot of
//! them. [`ItemStore`] is the seam to that store. [`FileItemStore`] reads
//! snapshots exported to JSON or YAML files.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::file_io::{read_data_file, FileFormat};
use crate::error::{AllotError, AllotResult};
use crate::models::Budget;

/// A read-only source of budget snapshots
pub trait ItemStore {
    /// Load the full snapshot for a budget
    fn load_budget(&self, identifier: &str) -> AllotResult<Budget>;
}

/// Reads snapshot files from disk
///
/// An identifier that names an existing file (or has a `.json`/`.yaml`/`.yml`
/// extension) is used as a path. A bare name is looked up in the snapshots
/// directory, trying `.json`, `.yaml` and `.yml` in turn.
#[derive(Debug, Clone)]
pub struct FileItemStore {
    snapshots_dir: PathBuf,
}

impl FileItemStore {
    /// Create a store resolving bare names in `snapshots_dir`
    pub fn new(snapshots_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots_dir: snapshots_dir.into(),
        }
    }

    /// Resolve an identifier to a snapshot file
    pub fn resolve(&self, identifier: &str) -> AllotResult<PathBuf> {
        let direct = Path::new(identifier);
        if direct.is_file() || FileFormat::from_path(direct).is_some() {
            return Ok(direct.to_path_buf());
        }

        ["json", "yaml", "yml"]
            .iter()
            .map(|ext| self.snapshots_dir.join(format!("{}.{}", identifier, ext)))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| AllotError::snapshot_not_found(identifier))
    }
}

impl ItemStore for FileItemStore {
    fn load_budget(&self, identifier: &str) -> AllotResult<Budget> {
        let path = self.resolve(identifier)?;
        debug!(path = %path.display(), "loading budget snapshot");
        read_data_file(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FrameworkId, Money};
    use std::fs;
    use tempfile::TempDir;

    const SNAPSHOT_YAML: &str = r#"
id: march
name: March 2025
total_income: 1000
framework: "60_20_20"
items:
  - id: rent
    category: Rent
    category_type: needs
    budgeted_amount: 600
"#;

    #[test]
    fn test_load_by_bare_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("march.yaml"), SNAPSHOT_YAML).unwrap();

        let store = FileItemStore::new(temp_dir.path());
        let budget = store.load_budget("march").unwrap();

        assert_eq!(budget.name, "March 2025");
        assert_eq!(budget.total_income, Money::from_major(1000));
        assert_eq!(budget.framework, Some(FrameworkId::SixtyTwentyTwenty));
        assert_eq!(budget.items.len(), 1);
    }

    #[test]
    fn test_load_by_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("elsewhere.yml");
        fs::write(&path, SNAPSHOT_YAML).unwrap();

        let store = FileItemStore::new(temp_dir.path().join("unused"));
        let budget = store.load_budget(path.to_str().unwrap()).unwrap();

        assert_eq!(budget.items[0].category, "Rent");
    }

    #[test]
    fn test_unknown_name_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileItemStore::new(temp_dir.path());

        let err = store.load_budget("april").unwrap_err();
        assert!(err.is_not_found());
    }
}
