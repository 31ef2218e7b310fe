//! Output formatting utilities

/// Format a list of entry titles for display
pub fn format_title_list(titles: &[String]) -> String {
    if titles.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for title in titles {
        output.push_str(title);
        output.push('\n');
    }
    output
}
