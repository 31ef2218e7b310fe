//! Edit entry use case

use crate::domain::forms::EditEntryForm;
use crate::domain::FormErrors;
use crate::error::Result;
use crate::infrastructure::{EntryStore, SaveOutcome};

/// Result of an "edit entry" submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Saved { warning: Option<String> },
    Invalid(FormErrors),
    StorageFailed,
}

/// Service for editing entries
pub struct EditEntryService<'a> {
    store: &'a dyn EntryStore,
}

impl<'a> EditEntryService<'a> {
    pub fn new(store: &'a dyn EntryStore) -> Self {
        EditEntryService { store }
    }

    /// Form pre-filled with the current content. A missing entry gives an empty form.
    pub fn load(&self, title: &str) -> Result<EditEntryForm> {
        Ok(EditEntryForm {
            content: self.store.get_entry(title)?.unwrap_or_default(),
        })
    }

    /// Replace the content stored under exactly `title`.
    pub fn execute(&self, title: &str, form: &EditEntryForm) -> EditOutcome {
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(errors) => return EditOutcome::Invalid(errors),
        };

        match self.store.save_entry(title, &valid.content) {
            Ok(SaveOutcome::Written) => {
                tracing::info!("Updated entry {}", title);
                EditOutcome::Saved { warning: None }
            }
            Ok(SaveOutcome::WrittenWithWarning(reason)) => {
                tracing::warn!("Updated entry {} with warning: {}", title, reason);
                EditOutcome::Saved {
                    warning: Some(reason),
                }
            }
            Err(e) => {
                tracing::error!("Failed to save entry {}: {}", title, e);
                EditOutcome::StorageFailed
            }
        }
    }
}
