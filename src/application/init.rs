//! Initialize wiki use case

use crate::error::Result;
use crate::infrastructure::{Config, WikiRepository};
use std::fs;
use std::path::Path;

/// Initialize a new wiki at the specified path.
pub fn init(path: &Path, config: &Config) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = WikiRepository::new(path.to_path_buf());
    repo.initialize(config)?;

    println!("Initialized flatwiki at {}", path.display());
    println!("Entries: {}", config.entries_path(path).display());

    Ok(())
}
