//! Configuration management

use crate::domain::forms::DEFAULT_MAX_TITLE_LEN;
use crate::error::{Result, WikiError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the marker directory at the wiki root.
pub const WIKI_DIR: &str = ".flatwiki";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind: String,
    /// Entries directory, relative to the wiki root unless absolute.
    pub entries_dir: PathBuf,
    pub max_title_len: usize,
    pub site_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: "127.0.0.1:8000".to_string(),
            entries_dir: PathBuf::from("entries"),
            max_title_len: DEFAULT_MAX_TITLE_LEN,
            site_name: "Encyclopedia".to_string(),
        }
    }
}

impl Config {
    /// Load config from .flatwiki/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WIKI_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WikiError::NotWikiDirectory(path.to_path_buf())
            } else {
                WikiError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;

        if config.max_title_len == 0 {
            return Err(WikiError::Config(
                "max_title_len must be at least 1".to_string(),
            ));
        }

        tracing::debug!("Loaded config from {}: {:?}", config_path.display(), config);
        Ok(config)
    }

    /// Save config to .flatwiki/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let wiki_dir = path.join(WIKI_DIR);
        let config_path = wiki_dir.join("config.toml");

        if !wiki_dir.exists() {
            fs::create_dir(&wiki_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Entries directory resolved against the wiki root.
    pub fn entries_path(&self, root: &Path) -> PathBuf {
        if self.entries_dir.is_absolute() {
            self.entries_dir.clone()
        } else {
            root.join(&self.entries_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind, "127.0.0.1:8000");
        assert_eq!(config.entries_dir, PathBuf::from("entries"));
        assert_eq!(config.max_title_len, 50);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            bind: "0.0.0.0:9000".to_string(),
            ..Config::default()
        };

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".flatwiki/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(WIKI_DIR)).unwrap();
        fs::write(
            temp.path().join(".flatwiki/config.toml"),
            "site_name = \"Atlas\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.site_name, "Atlas");
        assert_eq!(loaded.bind, "127.0.0.1:8000");
    }

    #[test]
    fn test_zero_title_len_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(WIKI_DIR)).unwrap();
        fs::write(temp.path().join(".flatwiki/config.toml"), "max_title_len = 0\n").unwrap();

        let result = Config::load_from_dir(temp.path());
        assert!(matches!(result, Err(WikiError::Config(_))));
    }

    #[test]
    fn test_malformed_config_is_toml_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(WIKI_DIR)).unwrap();
        fs::write(temp.path().join(".flatwiki/config.toml"), "bind = \n").unwrap();

        let err = Config::load_from_dir(temp.path()).unwrap_err();
        assert!(matches!(err, WikiError::TomlDeserialize(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("TOML deserialization error"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            WikiError::NotWikiDirectory(_) => {}
            _ => panic!("Expected NotWikiDirectory error"),
        }
    }

    #[test]
    fn test_entries_path_resolution() {
        let config = Config::default();
        assert_eq!(
            config.entries_path(Path::new("/srv/wiki")),
            PathBuf::from("/srv/wiki/entries")
        );
    }
}
