//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod memory;
pub mod repository;
pub mod store;

pub use config::Config;
pub use memory::MemoryStore;
pub use repository::WikiRepository;
pub use store::{EntryStore, FileSystemStore, SaveOutcome};
