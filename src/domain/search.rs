//! Title search

/// Titles containing `query` as a case-insensitive substring, in input order.
pub fn matching_titles(titles: &[String], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    titles
        .iter()
        .filter(|title| title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> Vec<String> {
        ["CSS", "Django", "Git", "HTML", "Python"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        assert_eq!(matching_titles(&titles(), "t"), vec!["Git", "HTML", "Python"]);
        assert_eq!(matching_titles(&titles(), "PY"), vec!["Python"]);
    }

    #[test]
    fn test_no_matches() {
        assert!(matching_titles(&titles(), "rust").is_empty());
    }

    #[test]
    fn test_empty_title_list() {
        assert!(matching_titles(&[], "css").is_empty());
    }
}
