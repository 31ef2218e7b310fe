//! Create entry use case

use crate::domain::forms::AddEntryForm;
use crate::domain::title::{normalize, same_title};
use crate::domain::FormErrors;
use crate::error::Result;
use crate::infrastructure::{EntryStore, SaveOutcome};

/// Result of a "create entry" submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Entry stored under the normalized `title`.
    Created {
        title: String,
        warning: Option<String>,
    },
    Invalid(FormErrors),
    /// An entry with the same title (ignoring case) already exists. Nothing was written.
    Collision { title: String },
    /// The store could not write the entry.
    StorageFailed { title: String },
}

/// Service for creating entries
pub struct AddEntryService<'a> {
    store: &'a dyn EntryStore,
    max_title_len: usize,
}

impl<'a> AddEntryService<'a> {
    pub fn new(store: &'a dyn EntryStore, max_title_len: usize) -> Self {
        AddEntryService {
            store,
            max_title_len,
        }
    }

    /// Validate, check for a case-insensitive collision, then store under the
    /// normalized title.
    pub fn execute(&self, form: &AddEntryForm) -> Result<AddOutcome> {
        let valid = match form.validate(self.max_title_len) {
            Ok(valid) => valid,
            Err(errors) => return Ok(AddOutcome::Invalid(errors)),
        };

        let existing = self.store.list_entries()?;
        if existing.iter().any(|t| same_title(t, &valid.title)) {
            tracing::info!("Entry already exists for title {}", valid.title);
            return Ok(AddOutcome::Collision { title: valid.title });
        }

        let title = normalize(&valid.title);
        match self.store.save_entry(&title, &valid.content) {
            Ok(SaveOutcome::Written) => {
                tracing::info!("Created entry {}", title);
                Ok(AddOutcome::Created {
                    title,
                    warning: None,
                })
            }
            Ok(SaveOutcome::WrittenWithWarning(reason)) => {
                tracing::warn!("Created entry {} with warning: {}", title, reason);
                Ok(AddOutcome::Created {
                    title,
                    warning: Some(reason),
                })
            }
            Err(e) => {
                tracing::error!("Failed to save entry {}: {}", title, e);
                Ok(AddOutcome::StorageFailed { title: valid.title })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forms::DEFAULT_MAX_TITLE_LEN;
    use crate::infrastructure::MemoryStore;

    fn form(title: &str, content: &str) -> AddEntryForm {
        AddEntryForm {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_create_normalizes_title() {
        let store = MemoryStore::new();
        let service = AddEntryService::new(&store, DEFAULT_MAX_TITLE_LEN);

        let outcome = service.execute(&form("paris", "# Paris\nCapital of France")).unwrap();

        assert_eq!(
            outcome,
            AddOutcome::Created {
                title: "Paris".to_string(),
                warning: None
            }
        );
        assert_eq!(store.list_entries().unwrap(), vec!["Paris"]);
        assert_eq!(
            store.get_entry("Paris").unwrap().as_deref(),
            Some("# Paris\nCapital of France")
        );
    }

    #[test]
    fn test_collision_does_not_overwrite() {
        let store = MemoryStore::new();
        let service = AddEntryService::new(&store, DEFAULT_MAX_TITLE_LEN);

        service.execute(&form("Paris", "original")).unwrap();
        for variant in ["PARIS", "paris", "pArIs"] {
            let outcome = service.execute(&form(variant, "replacement")).unwrap();
            assert_eq!(
                outcome,
                AddOutcome::Collision {
                    title: variant.to_string()
                }
            );
        }

        assert_eq!(store.get_entry("Paris").unwrap().as_deref(), Some("original"));
        assert_eq!(store.list_entries().unwrap().len(), 1);
    }

    #[test]
    fn test_collision_with_unnormalized_stored_title() {
        let store = MemoryStore::with_entries([("HTML", "markup")]);
        let service = AddEntryService::new(&store, DEFAULT_MAX_TITLE_LEN);

        let outcome = service.execute(&form("html", "other")).unwrap();
        assert!(matches!(outcome, AddOutcome::Collision { .. }));
        assert_eq!(store.get_entry("HTML").unwrap().as_deref(), Some("markup"));
    }

    #[test]
    fn test_invalid_form_writes_nothing() {
        let store = MemoryStore::new();
        let service = AddEntryService::new(&store, DEFAULT_MAX_TITLE_LEN);

        let outcome = service.execute(&form("", "")).unwrap();
        assert!(matches!(outcome, AddOutcome::Invalid(_)));
        assert!(store.list_entries().unwrap().is_empty());
    }

    #[test]
    fn test_permission_warning_counts_as_created() {
        let store = MemoryStore::new().warn_on_save("chmod refused");
        let service = AddEntryService::new(&store, DEFAULT_MAX_TITLE_LEN);

        let outcome = service.execute(&form("git", "# Git")).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Created {
                title: "Git".to_string(),
                warning: Some("chmod refused".to_string())
            }
        );
    }
}
