//! Random entry use case

use crate::error::Result;
use crate::infrastructure::EntryStore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick a stored title uniformly at random. `None` when the wiki is empty.
pub fn random_title<R: Rng + ?Sized>(store: &dyn EntryStore, rng: &mut R) -> Result<Option<String>> {
    let titles = store.list_entries()?;
    Ok(titles.choose(rng).cloned())
}
