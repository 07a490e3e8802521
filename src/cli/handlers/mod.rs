mod init;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::FarmConfig;
use crate::graphql::FarmApi;
use crate::storage::MemoryStore;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Common context passed to command handlers that need a store
pub struct CommandContext {
    pub config: FarmConfig,
    pub root: PathBuf,
    pub api: FarmApi,
}

impl CommandContext {
    pub fn new(config: FarmConfig, root: PathBuf) -> Result<Self> {
        let store = MemoryStore::from_config(&config, &root).context("Failed to open store")?;
        let api = FarmApi::new(Arc::new(store));
        Ok(Self { config, root, api })
    }

    /// Load the config given on the command line, or search upward from the
    /// working directory.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => FarmConfig::load_from(path),
            None => FarmConfig::load(&std::env::current_dir()?),
        }
        .context("Failed to load farmgraph configuration")?;
        Self::new(config, root)
    }
}
