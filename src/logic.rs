//! Core non-UI logic split into modular submodules.

pub mod catalog;
pub mod filter;
pub mod selection;
pub mod sort;

// Re-export public APIs so callers can use crate::logic::... directly
pub use catalog::{distinct_genres, featured_game};
pub use filter::{apply, apply_filters_and_sort_preserve_selection};
pub use selection::move_selection;
pub use sort::sort_games;
