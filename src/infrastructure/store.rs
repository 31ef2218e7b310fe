//! Entry storage

use crate::domain::title::storage_key_problem;
use crate::error::{Result, WikiError};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const ENTRY_EXTENSION: &str = "md";

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Content and file metadata were written.
    Written,
    /// Content was written, but a follow-up metadata update was refused by the OS.
    WrittenWithWarning(String),
}

/// Storage for entry markup, keyed by title.
pub trait EntryStore: Send + Sync {
    /// All stored titles, sorted.
    fn list_entries(&self) -> Result<Vec<String>>;

    /// Raw markup for an exact (case-sensitive) title match.
    fn get_entry(&self, title: &str) -> Result<Option<String>>;

    /// Create or overwrite the entry stored under exactly `title`.
    fn save_entry(&self, title: &str, content: &str) -> Result<SaveOutcome>;
}

/// One `<title>.md` file per entry inside a single directory.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(dir: PathBuf) -> Self {
        FileSystemStore { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, title: &str) -> Result<PathBuf> {
        if storage_key_problem(title).is_some() {
            return Err(WikiError::InvalidTitle(title.to_string()));
        }
        Ok(self.dir.join(format!("{}.{}", title, ENTRY_EXTENSION)))
    }

    fn title_from_path(path: &Path) -> Option<String> {
        if path.extension()?.to_str()? != ENTRY_EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        if stem.starts_with('.') {
            return None;
        }
        Some(stem.to_string())
    }

    /// Give the owner write access so later edits can overwrite the file.
    fn ensure_writable(path: &Path) -> std::io::Result<()> {
        let mut perms = fs::metadata(path)?.permissions();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            perms.set_mode(perms.mode() | 0o200);
        }
        #[cfg(not(unix))]
        perms.set_readonly(false);
        fs::set_permissions(path, perms)
    }
}

impl EntryStore for FileSystemStore {
    fn list_entries(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut titles = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(title) = Self::title_from_path(entry.path()) {
                titles.push(title);
            }
        }

        titles.sort();
        Ok(titles)
    }

    fn get_entry(&self, title: &str) -> Result<Option<String>> {
        if storage_key_problem(title).is_some() {
            return Ok(None);
        }

        // Case-insensitive filesystems would otherwise open "paris.md" for "Paris".
        if !self.list_entries()?.iter().any(|t| t == title) {
            return Ok(None);
        }

        let path = self.entry_path(title)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WikiError::Io(e)),
        }
    }

    fn save_entry(&self, title: &str, content: &str) -> Result<SaveOutcome> {
        let path = self.entry_path(title)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let mut file = fs::File::create(&path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        drop(file);

        permissions_outcome(title, &path, Self::ensure_writable(&path))
    }
}

/// Map the post-write permission update onto a save result. Only a refused
/// permission change is downgraded to a warning.
fn permissions_outcome(title: &str, path: &Path, result: std::io::Result<()>) -> Result<SaveOutcome> {
    match result {
        Ok(()) => {
            tracing::debug!("Wrote entry {} to {}", title, path.display());
            Ok(SaveOutcome::Written)
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            tracing::warn!(
                "Entry {} written, but updating permissions on {} failed: {}",
                title,
                path.display(),
                e
            );
            Ok(SaveOutcome::WrittenWithWarning(e.to_string()))
        }
        Err(e) => Err(WikiError::Io(e)),
    }
}
