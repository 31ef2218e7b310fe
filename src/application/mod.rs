//! Application layer - Use cases and orchestration

pub mod add;
pub mod edit;
pub mod init;
pub mod random;
pub mod search;
pub mod view;

pub use add::{AddEntryService, AddOutcome};
pub use edit::{EditEntryService, EditOutcome};
pub use random::random_title;
pub use search::{index, IndexOutcome, ListHeading};
pub use view::{view_entry, EntryView};
