//! Clamped selection movement over the visible result list.

use crate::state::AppState;

/// What: Move the highlighted row by a signed delta, clamped to the list.
///
/// Inputs:
/// - `app`: Mutable application state (results, selected, list_state).
/// - `delta`: Rows to move; negative moves up.
///
/// Output:
/// - Updates `selected` and the ratatui list selection. An empty result set
///   clears the selection entirely.
pub fn move_selection(app: &mut AppState, delta: isize) {
    if app.results.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
        return;
    }
    let last = app.results.len() - 1;
    app.selected = if delta.is_negative() {
        app.selected.saturating_sub(delta.unsigned_abs())
    } else {
        app.selected.saturating_add(delta.unsigned_abs()).min(last)
    };
    app.list_state.select(Some(app.selected));
}
