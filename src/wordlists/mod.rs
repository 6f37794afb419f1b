//! Word lists for the daily rotation
//!
//! The default list is compiled into the binary; a custom list can be
//! loaded from a file.

mod embedded;
pub mod loader;

use crate::core::WordEntry;
use anyhow::Result;
use std::path::Path;

pub use embedded::{CLIMATE_WORDS, CLIMATE_WORDS_COUNT};

/// Entries from `path`, or the embedded list when no path is given
///
/// # Errors
/// Returns an error if a custom list cannot be loaded.
pub fn resolve_words(path: Option<&Path>) -> Result<Vec<WordEntry>> {
    match path {
        Some(path) => loader::load_from_file(path),
        None => Ok(loader::entries_from_slice(CLIMATE_WORDS)),
    }
}
