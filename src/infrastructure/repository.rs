//! Wiki root discovery and layout

use crate::error::{Result, WikiError};
use crate::infrastructure::config::WIKI_DIR;
use crate::infrastructure::{Config, FileSystemStore};
use std::fs;
use std::path::{Path, PathBuf};

/// A wiki on disk: a root directory holding `.flatwiki/` and the entries directory.
#[derive(Debug, Clone)]
pub struct WikiRepository {
    pub root: PathBuf,
}

impl WikiRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        WikiRepository { root }
    }

    /// Discover the wiki root.
    /// First checks FLATWIKI_ROOT environment variable, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("FLATWIKI_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_wiki_dir(&path) {
                return Ok(WikiRepository::new(path));
            } else {
                return Err(WikiError::Config(format!(
                    "FLATWIKI_ROOT is set to '{}' but no {} directory found. \
                    Run 'flatwiki init' in that directory or unset FLATWIKI_ROOT.",
                    path.display(),
                    WIKI_DIR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the wiki root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_wiki_dir(&current) {
                return Ok(WikiRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(WikiError::NotWikiDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_wiki_dir(path: &Path) -> bool {
        path.join(WIKI_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_wiki_dir(&self.root)
    }

    /// Create `.flatwiki/` with the given config and an empty entries directory.
    pub fn initialize(&self, config: &Config) -> Result<()> {
        if self.is_initialized() {
            return Err(WikiError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.root.join(WIKI_DIR))?;
        config.save_to_dir(&self.root)?;
        fs::create_dir_all(config.entries_path(&self.root))?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Filesystem store for this wiki's entries directory.
    pub fn store(&self, config: &Config) -> FileSystemStore {
        FileSystemStore::new(config.entries_path(&self.root))
    }
}
