use crate::error::{FarmError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".farmgraph.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// How record identifiers are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// Random alphanumeric suffix (e.g. `farm-k3x9q2ab`)
    #[default]
    Random,
    /// Per-kind counter, zero padded (e.g. `farm-00000001`)
    Sequential,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Snapshot file, relative to the project root. Unset keeps data in memory only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<String>,

    #[serde(default = "default_id_length")]
    pub id_length: usize,

    #[serde(default)]
    pub id_mode: IdMode,
}

fn default_id_length() -> usize {
    8
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            snapshot: None,
            id_length: default_id_length(),
            id_mode: IdMode::default(),
        }
    }
}

impl FarmConfig {
    /// Find the config file at or above `start_path` and load it.
    ///
    /// Returns the config together with the project root (the directory
    /// holding the config file).
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        if !config_path.exists() {
            return Err(FarmError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        let content = std::fs::read_to_string(config_path)?;
        let config: FarmConfig = if content.trim().is_empty() {
            FarmConfig::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        config.validate()?;

        let project_root = match config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            Some(_) => PathBuf::from("."),
            None => {
                return Err(FarmError::Config(
                    "Config file has no parent directory".to_string(),
                ));
            }
        };
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(FarmError::NotInitialized);
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage.id_length == 0 || self.storage.id_length > 32 {
            return Err(FarmError::Config(format!(
                "storage.id_length must be between 1 and 32, got {}",
                self.storage.id_length
            )));
        }
        Ok(())
    }

    pub fn snapshot_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.storage
            .snapshot
            .as_ref()
            .map(|snapshot| project_root.join(snapshot))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = FarmConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.storage.id_length, 8);
        assert_eq!(config.storage.id_mode, IdMode::Random);
        assert!(config.storage.snapshot.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: FarmConfig =
            serde_yaml::from_str("storage:\n  id_mode: sequential\n  snapshot: data.json\n")
                .unwrap();
        assert_eq!(config.storage.id_mode, IdMode::Sequential);
        assert_eq!(config.storage.id_length, 8);
        assert_eq!(config.server.port, 4000);
        assert_eq!(
            config.snapshot_path(Path::new("/srv/farm")),
            Some(PathBuf::from("/srv/farm/data.json"))
        );
    }

    #[test]
    fn test_find_config_walks_upward() {
        let temp_dir = TempDir::new().unwrap();
        FarmConfig::default()
            .save(&temp_dir.path().join(CONFIG_FILE_NAME))
            .unwrap();
        let nested = temp_dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let (_, root) = FarmConfig::load(&nested).unwrap();
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_missing_config_not_initialized() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            FarmConfig::load(temp_dir.path()),
            Err(FarmError::NotInitialized)
        ));
    }

    #[test]
    fn test_rejects_zero_id_length() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "storage:\n  id_length: 0\n").unwrap();
        assert!(matches!(
            FarmConfig::load_from(&path),
            Err(FarmError::Config(_))
        ));
    }
}
