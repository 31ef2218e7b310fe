//! In-memory entry store

use super::store::{EntryStore, SaveOutcome};
use crate::error::{Result, WikiError};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Entry store backed by a sorted map. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
    metadata_warning: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `(title, content)` pairs.
    pub fn with_entries<I, T, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, C)>,
        T: Into<String>,
        C: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(t, c)| (t.into(), c.into()))
            .collect();
        MemoryStore {
            entries: RwLock::new(map),
            metadata_warning: None,
        }
    }

    /// Make every save report `SaveOutcome::WrittenWithWarning` with `reason`.
    pub fn warn_on_save(mut self, reason: impl Into<String>) -> Self {
        self.metadata_warning = Some(reason.into());
        self
    }

    fn poisoned() -> WikiError {
        WikiError::Io(std::io::Error::other("entry map lock poisoned"))
    }
}

impl EntryStore for MemoryStore {
    fn list_entries(&self) -> Result<Vec<String>> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.keys().cloned().collect())
    }

    fn get_entry(&self, title: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.get(title).cloned())
    }

    fn save_entry(&self, title: &str, content: &str) -> Result<SaveOutcome> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.insert(title.to_string(), content.to_string());
        Ok(match &self.metadata_warning {
            Some(reason) => SaveOutcome::WrittenWithWarning(reason.clone()),
            None => SaveOutcome::Written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_is_sorted() {
        let store = MemoryStore::with_entries([("Git", "g"), ("CSS", "c")]);
        assert_eq!(store.list_entries().unwrap(), vec!["CSS", "Git"]);
    }

    #[test]
    fn test_get_exact_match_only() {
        let store = MemoryStore::with_entries([("Paris", "# Paris")]);
        assert_eq!(store.get_entry("Paris").unwrap().as_deref(), Some("# Paris"));
        assert!(store.get_entry("paris").unwrap().is_none());
    }

    #[test]
    fn test_warning_still_writes() {
        let store = MemoryStore::new().warn_on_save("chmod refused");
        let outcome = store.save_entry("Git", "body").unwrap();
        assert_eq!(
            outcome,
            SaveOutcome::WrittenWithWarning("chmod refused".to_string())
        );
        assert_eq!(store.get_entry("Git").unwrap().as_deref(), Some("body"));
    }
}
