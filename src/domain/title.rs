//! Entry titles: normalization and storage-key rules

/// Normalize a title for storage: lowercase everything, then uppercase the
/// first character ("PARIS" and "paris" both become "Paris").
pub fn normalize(title: &str) -> String {
    let lower = title.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Case-insensitive title comparison used for collision checks.
pub fn same_title(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Reason a title cannot be used as a file name in the entries directory.
///
/// Returns `None` when the title is usable as a storage key.
pub fn storage_key_problem(title: &str) -> Option<&'static str> {
    if title.is_empty() {
        Some("Title must not be empty.")
    } else if title.starts_with('.') {
        Some("Title must not start with '.'.")
    } else if title.contains(['/', '\\', '\0']) {
        Some("Title must not contain '/' or '\\'.")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_case_variants() {
        assert_eq!(normalize("paris"), "Paris");
        assert_eq!(normalize("PARIS"), "Paris");
        assert_eq!(normalize("Paris"), "Paris");
        assert_eq!(normalize("pYTHON language"), "Python language");
    }

    #[test]
    fn test_normalize_empty_and_non_alpha() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("42 Things"), "42 things");
    }

    #[test]
    fn test_same_title() {
        assert!(same_title("CSS", "css"));
        assert!(!same_title("CSS", "HTML"));
    }

    #[test]
    fn test_storage_key_problem() {
        assert!(storage_key_problem("Paris").is_none());
        assert!(storage_key_problem("New York").is_none());
        assert!(storage_key_problem("").is_some());
        assert!(storage_key_problem(".hidden").is_some());
        assert!(storage_key_problem("../etc/passwd").is_some());
        assert!(storage_key_problem("a\\b").is_some());
    }
}
