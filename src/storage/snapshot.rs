use crate::error::{FarmError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tempfile::NamedTempFile;

/// On-disk image of a [`MemoryStore`](super::MemoryStore).
///
/// Records are kept as JSON documents, one table per entity kind keyed by
/// kind name, each table in insertion order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(super) struct Snapshot {
    #[serde(default)]
    pub tables: BTreeMap<String, IndexMap<String, serde_json::Value>>,

    /// Last issued sequential id per kind.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub counters: BTreeMap<String, u64>,
}

impl Snapshot {
    /// Read a snapshot file; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        atomic_write(path, &content)
    }
}

/// Write through a temp file in the target directory, then rename over the target.
fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    let target_dir = match target_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(target_dir)?;

    let mut temp_file = NamedTempFile::new_in(target_dir)
        .map_err(|e| FarmError::Storage(format!("Failed to create temp file: {}", e)))?;

    use std::io::Write;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| FarmError::Storage(format!("Failed to write to temp file: {}", e)))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| FarmError::Storage(format!("Failed to sync temp file: {}", e)))?;

    temp_file
        .persist(target_path)
        .map_err(|e| FarmError::Storage(format!("Failed to persist snapshot: {}", e)))?;

    Ok(())
}
