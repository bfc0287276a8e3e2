//! The query engine: a pure conjunction of filters followed by a stable sort.

use crate::logic::sort::sort_games;
use crate::state::{AppState, Criteria, GameRecord};

/// What: Derive the visible result set from the catalog and the active criteria.
///
/// Inputs:
/// - `collection`: The loaded catalog, in feed order; never mutated.
/// - `criteria`: The active filter and sort parameters.
///
/// Output:
/// - A new vector containing exactly the records that satisfy every active
///   predicate, ordered by the requested sort key (or in original catalog
///   order when unsorted).
///
/// Details:
/// - All predicates are independent and combined by logical AND, so the
///   evaluation order cannot change the outcome.
/// - Nonsensical ranges (`from > to`) simply yield an empty result.
/// - Pure and reentrant: safe to call from any event handler, repeatedly.
#[must_use]
pub fn apply(collection: &[GameRecord], criteria: &Criteria) -> Vec<GameRecord> {
    let mut filtered: Vec<GameRecord> = collection
        .iter()
        .filter(|g| matches_all(g, criteria))
        .cloned()
        .collect();
    sort_games(&mut filtered, criteria.sort);
    filtered
}

/// Conjunction of every active predicate for a single record.
fn matches_all(game: &GameRecord, c: &Criteria) -> bool {
    matches_search(game, &c.search)
        && matches_genre(game, c.genre.as_deref())
        && matches_players(game, c)
        && matches_playtime(game, c)
}

/// Case-insensitive substring match over title and description.
///
/// An empty search keeps everything; absent description behaves as empty text.
fn matches_search(game: &GameRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    game.title.to_lowercase().contains(&needle)
        || game.description.to_lowercase().contains(&needle)
}

/// Exact genre match; `None` is the "all genres" sentinel and keeps everything.
fn matches_genre(game: &GameRecord, wanted: Option<&str>) -> bool {
    wanted.is_none_or(|w| game.genre.as_deref() == Some(w))
}

/// Player-count overlap test.
///
/// A game is kept when its `[min, max]` interval intersects the requested
/// range, i.e. `max >= from && min <= to`. This is overlap, not containment:
/// a game supporting any player count inside the requested range matches.
/// Missing bounds were normalized to 0 at load time.
fn matches_players(game: &GameRecord, c: &Criteria) -> bool {
    if !c.players_active() {
        return true;
    }
    let to = c.players_to.unwrap_or(u32::MAX);
    game.players.max >= c.players_from && game.players.min <= to
}

/// Inclusive playtime bounds check.
///
/// While this filter is active a record without a numeric playtime is
/// excluded, even if every other predicate passes.
fn matches_playtime(game: &GameRecord, c: &Criteria) -> bool {
    if !c.playtime_active() {
        return true;
    }
    let Some(t) = game.playtime else {
        return false;
    };
    let to = c.playtime_to.map_or(f64::INFINITY, f64::from);
    t >= f64::from(c.playtime_from) && t <= to
}

/// What: Re-run the query engine for the current state, keeping the selection.
///
/// Inputs:
/// - `app`: Mutable application state; reads `catalog` and the input fields,
///   writes `results`, `selected`, and `list_state`.
///
/// Output:
/// - Updates `app.results` from the pure engine and restores the previously
///   selected game by id when it survived the filter; otherwise clamps the
///   index or clears the selection when the result set is empty.
///
/// Details:
/// - This is the whole "criteria changed → recompute → render" pipeline; the
///   caller only has to draw afterwards.
pub fn apply_filters_and_sort_preserve_selection(app: &mut AppState) {
    let prev_id = app.results.get(app.selected).map(|g| g.id);
    app.results = apply(&app.catalog, &app.criteria());
    if let Some(id) = prev_id
        && let Some(pos) = app.results.iter().position(|g| g.id == id)
    {
        app.selected = pos;
        app.list_state.select(Some(pos));
    } else if app.results.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
    } else {
        app.selected = app.selected.min(app.results.len() - 1);
        app.list_state.select(Some(app.selected));
    }
}
