//! Modal dialog state for the UI.

use crate::state::types::GameRecord;

/// Active modal overlay, if any.
///
/// The detail overlay is the TUI counterpart of the catalog site's dialog: it
/// shows one record expanded, and closing it returns to the list unchanged.
#[derive(Clone, Debug, Default)]
pub enum Modal {
    /// No modal is shown; input goes to the filter bar and list.
    #[default]
    None,
    /// Expanded view of a single game.
    Details {
        /// The record being displayed; a clone so the overlay stays valid
        /// even if the visible result set is recomputed underneath it.
        game: GameRecord,
    },
}

impl Modal {
    /// Whether any modal is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
