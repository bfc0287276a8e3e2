//! Central `AppState` container shared by the event, loader, and UI layers.

use ratatui::widgets::ListState;

use crate::state::modal::Modal;
use crate::state::types::{Criteria, Focus, GameRecord, SortKey};

/// Application state owned by the main loop.
///
/// The loaded catalog lives here as a plain owned value; the query engine
/// receives it by reference and never mutates it. Everything the UI shows is
/// derived from this struct on each frame.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current search input text.
    pub input: String,
    /// Raw text of the player-range lower bound field.
    pub players_from_input: String,
    /// Raw text of the player-range upper bound field.
    pub players_to_input: String,
    /// Raw text of the playtime lower bound field.
    pub playtime_from_input: String,
    /// Raw text of the playtime upper bound field.
    pub playtime_to_input: String,
    /// Selected genre; `None` means "all genres".
    pub genre_filter: Option<String>,
    /// Active sort key.
    pub sort_key: SortKey,
    /// Which input field owns keystrokes.
    pub focus: Focus,

    /// Full catalog as loaded from the feed, in feed order. Immutable after
    /// the load message is applied.
    pub catalog: Vec<GameRecord>,
    /// Visible result set, derived from `catalog` by the query engine.
    pub results: Vec<GameRecord>,
    /// Index into `results` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,

    /// Distinct genre values found in the catalog, sorted, for the genre menu.
    pub genre_options: Vec<String>,
    /// The featured ("game of the week") record, if resolvable.
    pub featured: Option<GameRecord>,
    /// Badge text rendered on the featured banner.
    pub featured_badge: String,
    /// True until the one-shot load has resolved; distinguishes "not yet
    /// loaded" from a genuine zero-match result.
    pub loading: bool,
    /// Active modal dialog, if any.
    pub modal: Modal,
}

/// What: Parse a lower-bound field the way the catalog site does.
///
/// Inputs:
/// - `text`: Raw field text.
///
/// Output:
/// - Parsed value, or 0 when empty or unparseable (0 also means "unset").
fn parse_from(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

/// What: Parse an upper-bound field the way the catalog site does.
///
/// Inputs:
/// - `text`: Raw field text.
///
/// Output:
/// - `Some(bound)` for a positive number; `None` (unbounded) when empty,
///   unparseable, or zero.
fn parse_to(text: &str) -> Option<u32> {
    text.trim().parse().ok().filter(|v| *v > 0)
}

impl AppState {
    /// Build the current [`Criteria`] value from the raw input fields.
    ///
    /// Inputs: none (reads the input fields of `self`)
    ///
    /// Output: A fresh `Criteria`, discarded by the caller after one engine run.
    #[must_use]
    pub fn criteria(&self) -> Criteria {
        Criteria {
            search: self.input.clone(),
            genre: self.genre_filter.clone(),
            players_from: parse_from(&self.players_from_input),
            players_to: parse_to(&self.players_to_input),
            playtime_from: parse_from(&self.playtime_from_input),
            playtime_to: parse_to(&self.playtime_to_input),
            sort: self.sort_key,
        }
    }

    /// Advance the genre filter through "all" and every known genre, wrapping.
    ///
    /// Inputs: none
    ///
    /// Output: Mutates `genre_filter` in place; `None` (all) follows the last
    /// known genre.
    pub fn cycle_genre(&mut self) {
        let next = match &self.genre_filter {
            None => self.genre_options.first().cloned(),
            Some(cur) => {
                let pos = self.genre_options.iter().position(|g| g == cur);
                pos.and_then(|p| self.genre_options.get(p + 1).cloned())
            }
        };
        self.genre_filter = next;
    }

    /// Clear every filter and the sort key back to defaults.
    ///
    /// Inputs: none
    ///
    /// Output: Mutates `self`; afterwards `criteria()` is the empty criteria
    /// set, so the next engine run yields the unfiltered catalog.
    pub fn reset_criteria(&mut self) {
        self.input.clear();
        self.players_from_input.clear();
        self.players_to_input.clear();
        self.playtime_from_input.clear();
        self.playtime_to_input.clear();
        self.genre_filter = None;
        self.sort_key = SortKey::Unsorted;
        self.focus = Focus::Search;
    }
}
