//! File I/O utilities
//!
//! Reads snapshot files in JSON or YAML (chosen by extension) and writes
//! output files atomically so a crash never leaves a half-written export.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::AllotError;

/// Serialization format of a data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Read and deserialize a JSON or YAML file
pub fn read_data_file<T, P>(path: P) -> Result<T, AllotError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let format = FileFormat::from_path(path).ok_or_else(|| {
        AllotError::Snapshot(format!(
            "Unsupported file type: {} (expected .json, .yaml or .yml)",
            path.display()
        ))
    })?;

    if !path.exists() {
        return Err(AllotError::snapshot_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| AllotError::Snapshot(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    match format {
        FileFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            AllotError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
        }),
        FileFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            AllotError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}

/// Write a file atomically (write to temp, then rename)
///
/// The contents are produced by `write`, which receives a buffered writer over
/// the temp file.
pub fn write_atomic<P, F>(path: P, write: F) -> Result<(), AllotError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn Write) -> Result<(), AllotError>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AllotError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| AllotError::Io(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    if let Err(e) = write(&mut writer) {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    writer
        .flush()
        .map_err(|e| AllotError::Io(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| AllotError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        AllotError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Deserialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_path(Path::new("a.json")), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_path(Path::new("a.YML")), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_path(Path::new("a.yaml")), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_path(Path::new("a.toml")), None);
        assert_eq!(FileFormat::from_path(Path::new("march")), None);
    }

    #[test]
    fn test_read_json_and_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("data.json");
        let yaml_path = temp_dir.path().join("data.yaml");
        fs::write(&json_path, r#"{"name": "test", "value": 42}"#).unwrap();
        fs::write(&yaml_path, "name: test\nvalue: 42\n").unwrap();

        let expected = TestData {
            name: "test".into(),
            value: 42,
        };
        assert_eq!(read_data_file::<TestData, _>(&json_path).unwrap(), expected);
        assert_eq!(read_data_file::<TestData, _>(&yaml_path).unwrap(), expected);
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_data_file::<TestData, _>(temp_dir.path().join("missing.json")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_unsupported_extension() {
        let err = read_data_file::<TestData, _>("budget.txt").unwrap_err();
        assert!(matches!(err, AllotError::Snapshot(_)));
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.csv");

        write_atomic(&path, |w| {
            w.write_all(b"a,b\n").map_err(AllotError::from)
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");
        assert!(!temp_dir.path().join("nested").join("out.csv.tmp").exists());
    }

    #[test]
    fn test_failed_write_keeps_original() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        fs::write(&path, "original").unwrap();

        let result = write_atomic(&path, |_| Err(AllotError::Export("boom".into())));

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(!temp_dir.path().join("out.json.tmp").exists());
    }
}
