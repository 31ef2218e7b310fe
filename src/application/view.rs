//! View entry use case

use crate::domain::render;
use crate::error::Result;
use crate::infrastructure::EntryStore;

/// Rendered entry page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryView {
    Found { title: String, html: String },
    Missing { title: String },
}

impl EntryView {
    pub fn title(&self) -> &str {
        match self {
            EntryView::Found { title, .. } | EntryView::Missing { title } => title,
        }
    }
}

/// Look up `title` exactly and render its markup.
pub fn view_entry(store: &dyn EntryStore, title: &str) -> Result<EntryView> {
    Ok(match store.get_entry(title)? {
        Some(markup) => EntryView::Found {
            title: title.to_string(),
            html: render(&markup),
        },
        None => EntryView::Missing {
            title: title.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;

    #[test]
    fn test_found_entry_is_rendered() {
        let store = MemoryStore::with_entries([("Paris", "# Paris\nCapital of France")]);
        match view_entry(&store, "Paris").unwrap() {
            EntryView::Found { title, html } => {
                assert_eq!(title, "Paris");
                assert!(html.contains("<h1>Paris</h1>"));
            }
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_entry() {
        let store = MemoryStore::new();
        let view = view_entry(&store, "Atlantis").unwrap();
        assert_eq!(
            view,
            EntryView::Missing {
                title: "Atlantis".to_string()
            }
        );
        assert_eq!(view.title(), "Atlantis");
    }
}
