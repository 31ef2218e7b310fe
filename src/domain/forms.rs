//! Add and edit form validation
//!
//! Forms are deserialized from urlencoded request bodies and validated into
//! either a cleaned value or a list of field errors. Validation knows nothing
//! about how errors are displayed.

use super::title::storage_key_problem;
use serde::Deserialize;

/// Default upper bound on title length, in characters.
pub const DEFAULT_MAX_TITLE_LEN: usize = 50;

/// A validation message attached to a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All errors produced by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages for a single field, in the order they were raised.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

/// Submitted "create entry" form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddEntryForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Cleaned "create entry" submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAdd {
    pub title: String,
    pub content: String,
}

impl AddEntryForm {
    /// Validate the submission; surrounding whitespace is stripped from both fields.
    pub fn validate(&self, max_title_len: usize) -> Result<ValidAdd, FormErrors> {
        let mut errors = FormErrors::new();
        let title = self.title.trim();

        if title.is_empty() {
            errors.push("title", "This field is required.");
        } else {
            let len = title.chars().count();
            if len > max_title_len {
                errors.push(
                    "title",
                    format!(
                        "Ensure this value has at most {} characters (it has {}).",
                        max_title_len, len
                    ),
                );
            }
            if let Some(problem) = storage_key_problem(title) {
                errors.push("title", problem);
            }
        }

        if let Err(message) = validate_content(&self.content) {
            errors.push("content", message);
        }

        if errors.is_empty() {
            Ok(ValidAdd {
                title: title.to_string(),
                content: self.content.trim().to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Submitted "edit entry" form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditEntryForm {
    #[serde(default)]
    pub content: String,
}

/// Cleaned "edit entry" submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEdit {
    pub content: String,
}

impl EditEntryForm {
    pub fn validate(&self) -> Result<ValidEdit, FormErrors> {
        match validate_content(&self.content) {
            Ok(()) => Ok(ValidEdit {
                content: self.content.trim().to_string(),
            }),
            Err(message) => {
                let mut errors = FormErrors::new();
                errors.push("content", message);
                Err(errors)
            }
        }
    }
}

fn validate_content(content: &str) -> Result<(), &'static str> {
    if content.trim().is_empty() {
        Err("This field is required.")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(title: &str, content: &str) -> AddEntryForm {
        AddEntryForm {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_add_valid_trims_title() {
        let valid = add("  Paris ", "# Paris").validate(DEFAULT_MAX_TITLE_LEN).unwrap();
        assert_eq!(valid.title, "Paris");
        assert_eq!(valid.content, "# Paris");
    }

    #[test]
    fn test_content_is_stripped() {
        let valid = add("Git", "\n  # Git\nVersion control  \n\n")
            .validate(DEFAULT_MAX_TITLE_LEN)
            .unwrap();
        assert_eq!(valid.content, "# Git\nVersion control");

        let edit = EditEntryForm {
            content: "  Updated\n".to_string(),
        };
        assert_eq!(edit.validate().unwrap().content, "Updated");
    }

    #[test]
    fn test_add_missing_fields() {
        let errors = add("", "   ").validate(DEFAULT_MAX_TITLE_LEN).unwrap_err();
        assert_eq!(errors.for_field("title").count(), 1);
        assert_eq!(errors.for_field("content").count(), 1);
    }

    #[test]
    fn test_add_title_too_long() {
        let title = "x".repeat(DEFAULT_MAX_TITLE_LEN + 1);
        let errors = add(&title, "body").validate(DEFAULT_MAX_TITLE_LEN).unwrap_err();
        let messages: Vec<&str> = errors.for_field("title").collect();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("at most 50 characters"));
        assert_eq!(errors.for_field("content").count(), 0);
    }

    #[test]
    fn test_add_title_at_limit_is_valid() {
        let title = "x".repeat(DEFAULT_MAX_TITLE_LEN);
        assert!(add(&title, "body").validate(DEFAULT_MAX_TITLE_LEN).is_ok());
    }

    #[test]
    fn test_add_title_with_separator() {
        let errors = add("a/b", "body").validate(DEFAULT_MAX_TITLE_LEN).unwrap_err();
        assert!(errors.for_field("title").any(|m| m.contains('/')));
    }

    #[test]
    fn test_edit_validation() {
        let ok = EditEntryForm {
            content: "Updated".to_string(),
        };
        assert_eq!(ok.validate().unwrap().content, "Updated");

        let blank = EditEntryForm {
            content: "\n".to_string(),
        };
        let errors = blank.validate().unwrap_err();
        assert_eq!(errors.for_field("content").count(), 1);
    }
}
