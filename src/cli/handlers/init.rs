use crate::config::{CONFIG_FILE_NAME, FarmConfig, IdMode, StorageSettings};
use crate::error::FarmError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(
    id_length: usize,
    id_mode: IdMode,
    snapshot: String,
    memory_only: bool,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(FarmError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = FarmConfig {
        server: Default::default(),
        storage: StorageSettings {
            snapshot: (!memory_only).then_some(snapshot),
            id_length,
            id_mode,
        },
    };
    config.validate()?;
    config.save(&config_path)?;

    println!(
        "{} farmgraph project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config:   {}", config_path.display());
    match config.snapshot_path(&cwd) {
        Some(path) => println!("  Snapshot: {}", path.display()),
        None => println!("  Snapshot: {}", "none (memory only)".dimmed()),
    }

    Ok(())
}
