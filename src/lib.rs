//! flatwiki - Flat-file markdown wiki
//!
//! Entries are markdown files in a single directory, one file per title.
//! The wiki is served over HTTP with list/search, view, create, edit and
//! random-entry pages, and can be inspected from the command line.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod web;

pub use error::WikiError;
