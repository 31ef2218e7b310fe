//! Domain layer - Pure wiki logic

pub mod forms;
pub mod markup;
pub mod search;
pub mod title;

pub use forms::{AddEntryForm, EditEntryForm, FormErrors};
pub use markup::render;
pub use search::matching_titles;
pub use title::normalize;
