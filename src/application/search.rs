//! List and search entries use case

use crate::domain::matching_titles;
use crate::error::Result;
use crate::infrastructure::EntryStore;

/// Which listing the index page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListHeading {
    AllPages,
    FoundPages,
}

impl ListHeading {
    pub fn label(self) -> &'static str {
        match self {
            ListHeading::AllPages => "All Pages",
            ListHeading::FoundPages => "Found Pages",
        }
    }
}

/// What the index route should respond with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    List {
        heading: ListHeading,
        titles: Vec<String>,
    },
    /// Send the user to the entry page for this title (which may not exist).
    ShowEntry(String),
}

/// List every entry, or resolve a search query.
///
/// An exact title match goes straight to the entry. Otherwise the titles
/// containing the query (case-insensitively) are listed; when nothing matches
/// the user is still sent to the entry page, which shows the missing-entry
/// placeholder.
pub fn index(store: &dyn EntryStore, query: Option<&str>) -> Result<IndexOutcome> {
    let query = query.filter(|q| !q.trim().is_empty());

    let Some(query) = query else {
        return Ok(IndexOutcome::List {
            heading: ListHeading::AllPages,
            titles: store.list_entries()?,
        });
    };

    if store.get_entry(query)?.is_some() {
        return Ok(IndexOutcome::ShowEntry(query.to_string()));
    }

    let found = matching_titles(&store.list_entries()?, query);
    if found.is_empty() {
        Ok(IndexOutcome::ShowEntry(query.to_string()))
    } else {
        Ok(IndexOutcome::List {
            heading: ListHeading::FoundPages,
            titles: found,
        })
    }
}
