//! Keyboard event handling.
//!
//! Every edit to a filter field immediately re-runs the query engine through
//! [`logic::apply_filters_and_sort_preserve_selection`], so the visible list
//! is always the engine's latest output and the UI never filters on its own.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::logic;
use crate::state::{AppState, Focus, Modal};

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event from crossterm.
/// - `app`: Mutable application state.
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // An open modal swallows everything except its close keys.
    if app.modal.is_open() {
        if matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.modal = Modal::None;
        }
        return false;
    }

    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        match ke.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('g') => {
                app.cycle_genre();
                recompute(app);
            }
            KeyCode::Char('s') => {
                app.sort_key = app.sort_key.next();
                recompute(app);
            }
            KeyCode::Char('r') => {
                app.reset_criteria();
                recompute(app);
            }
            KeyCode::Char('w') => {
                if let Some(game) = app.featured.clone() {
                    app.modal = Modal::Details { game };
                }
            }
            _ => {}
        }
        return false;
    }

    match ke.code {
        KeyCode::Esc => return true,
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Up => logic::move_selection(app, -1),
        KeyCode::Down => logic::move_selection(app, 1),
        KeyCode::PageUp => logic::move_selection(app, -10),
        KeyCode::PageDown => logic::move_selection(app, 10),
        KeyCode::Enter => {
            if let Some(game) = app.results.get(app.selected).cloned() {
                app.modal = Modal::Details { game };
            }
        }
        KeyCode::Backspace => {
            focused_field_mut(app).pop();
            recompute(app);
        }
        KeyCode::Char(c) => {
            if push_to_focused(app, c) {
                recompute(app);
            }
        }
        _ => {}
    }
    false
}

/// Re-run the engine after any criteria edit.
fn recompute(app: &mut AppState) {
    logic::apply_filters_and_sort_preserve_selection(app);
}

/// The input buffer owned by the focused field.
fn focused_field_mut(app: &mut AppState) -> &mut String {
    match app.focus {
        Focus::Search => &mut app.input,
        Focus::PlayersFrom => &mut app.players_from_input,
        Focus::PlayersTo => &mut app.players_to_input,
        Focus::PlaytimeFrom => &mut app.playtime_from_input,
        Focus::PlaytimeTo => &mut app.playtime_to_input,
    }
}

/// Append a typed character to the focused field.
///
/// The numeric range fields accept ASCII digits only; anything else is
/// ignored without touching the state.
fn push_to_focused(app: &mut AppState, c: char) -> bool {
    let numeric = app.focus != Focus::Search;
    if numeric && !c.is_ascii_digit() {
        return false;
    }
    focused_field_mut(app).push(c);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GameRecord, PlayerRange, SortKey};
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> CEvent {
        CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn loaded_app() -> AppState {
        let catalog = vec![
            GameRecord {
                id: 1,
                title: "Catan".into(),
                genre: Some("Strategy".into()),
                players: PlayerRange { min: 3, max: 4 },
                playtime: Some(90.0),
                rating: Some(4.0),
                ..Default::default()
            },
            GameRecord {
                id: 2,
                title: "Codenames".into(),
                genre: Some("Party".into()),
                players: PlayerRange { min: 2, max: 8 },
                playtime: Some(20.0),
                rating: Some(5.0),
                ..Default::default()
            },
        ];
        let mut app = AppState {
            genre_options: logic::distinct_genres(&catalog),
            catalog,
            ..Default::default()
        };
        logic::apply_filters_and_sort_preserve_selection(&mut app);
        app
    }

    #[test]
    /// What: Typing into the search field narrows the visible list immediately
    ///
    /// - Input: Characters "cat" typed with Search focused
    /// - Output: Input updated and results reduced to Catan
    fn events_typing_filters_results() {
        let mut app = loaded_app();
        for c in ['c', 'a', 't'] {
            assert!(!handle_event(key(KeyCode::Char(c)), &mut app));
        }
        assert_eq!(app.input, "cat");
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].title, "Catan");
    }

    #[test]
    /// What: Backspace edits flow back through the engine
    ///
    /// - Input: Search "catx" then one Backspace
    /// - Output: Results match "cat" again
    fn events_backspace_recomputes() {
        let mut app = loaded_app();
        for c in ['c', 'a', 't', 'x'] {
            handle_event(key(KeyCode::Char(c)), &mut app);
        }
        assert!(app.results.is_empty());
        handle_event(key(KeyCode::Backspace), &mut app);
        assert_eq!(app.results.len(), 1);
    }

    #[test]
    /// What: Numeric fields accept digits only
    ///
    /// - Input: Focus on players-from; typed "a" then "5"
    /// - Output: Field holds "5"; the letter was ignored
    fn events_numeric_fields_digits_only() {
        let mut app = loaded_app();
        handle_event(key(KeyCode::Tab), &mut app);
        assert_eq!(app.focus, Focus::PlayersFrom);
        handle_event(key(KeyCode::Char('a')), &mut app);
        handle_event(key(KeyCode::Char('5')), &mut app);
        assert_eq!(app.players_from_input, "5");
        // 5 players excludes Catan (max 4), keeps Codenames (max 8)
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].title, "Codenames");
    }

    #[test]
    /// What: Genre cycling recomputes and wraps back to all
    ///
    /// - Input: Ctrl+G three times over two known genres
    /// - Output: Party only, Strategy only, then everything again
    fn events_genre_cycle_recomputes() {
        let mut app = loaded_app();
        handle_event(ctrl('g'), &mut app);
        assert_eq!(app.genre_filter.as_deref(), Some("Party"));
        assert_eq!(app.results.len(), 1);
        handle_event(ctrl('g'), &mut app);
        assert_eq!(app.genre_filter.as_deref(), Some("Strategy"));
        assert_eq!(app.results.len(), 1);
        handle_event(ctrl('g'), &mut app);
        assert_eq!(app.genre_filter, None);
        assert_eq!(app.results.len(), 2);
    }

    #[test]
    /// What: Sort cycling applies the next key to the visible list
    ///
    /// - Input: Ctrl+S three times (title, playtime, rating)
    /// - Output: Orders follow each key in turn
    fn events_sort_cycle_applies() {
        let mut app = loaded_app();
        handle_event(ctrl('s'), &mut app);
        assert_eq!(app.sort_key, SortKey::Title);
        assert_eq!(app.results[0].title, "Catan");
        handle_event(ctrl('s'), &mut app);
        assert_eq!(app.sort_key, SortKey::Playtime);
        assert_eq!(app.results[0].title, "Catan");
        handle_event(ctrl('s'), &mut app);
        assert_eq!(app.sort_key, SortKey::Rating);
        assert_eq!(app.results[0].title, "Codenames");
    }

    #[test]
    /// What: Reset clears every criterion and restores the full catalog
    ///
    /// - Input: Active search, range, genre, and sort; then Ctrl+R
    /// - Output: Unfiltered catalog in feed order
    fn events_reset_restores_catalog_order() {
        let mut app = loaded_app();
        for c in ['c', 'a', 't'] {
            handle_event(key(KeyCode::Char(c)), &mut app);
        }
        handle_event(ctrl('g'), &mut app);
        handle_event(ctrl('s'), &mut app);
        handle_event(ctrl('r'), &mut app);
        let ids: Vec<i64> = app.results.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(app.input.is_empty());
        assert_eq!(app.sort_key, SortKey::Unsorted);
    }

    #[test]
    /// What: Enter opens the detail modal for the highlighted game and Esc closes it
    ///
    /// - Input: Down, Enter, then Esc
    /// - Output: Modal holds Codenames, then closes without exiting
    fn events_detail_modal_open_close() {
        let mut app = loaded_app();
        handle_event(key(KeyCode::Down), &mut app);
        handle_event(key(KeyCode::Enter), &mut app);
        match &app.modal {
            Modal::Details { game } => assert_eq!(game.title, "Codenames"),
            Modal::None => panic!("expected details modal"),
        }
        assert!(!handle_event(key(KeyCode::Esc), &mut app));
        assert!(!app.modal.is_open());
    }

    #[test]
    /// What: An open modal swallows list navigation
    ///
    /// - Input: Modal open, then Down
    /// - Output: Selection unchanged
    fn events_modal_swallows_navigation() {
        let mut app = loaded_app();
        handle_event(key(KeyCode::Enter), &mut app);
        let before = app.selected;
        handle_event(key(KeyCode::Down), &mut app);
        assert_eq!(app.selected, before);
    }

    #[test]
    /// What: Ctrl+W opens the featured game, falling back to no-op when unset
    ///
    /// - Input: Ctrl+W without and with a featured game
    /// - Output: Modal stays closed, then shows the featured record
    fn events_featured_modal() {
        let mut app = loaded_app();
        handle_event(ctrl('w'), &mut app);
        assert!(!app.modal.is_open());
        app.featured = app.catalog.first().cloned();
        handle_event(ctrl('w'), &mut app);
        match &app.modal {
            Modal::Details { game } => assert_eq!(game.id, 1),
            Modal::None => panic!("expected featured modal"),
        }
    }

    #[test]
    /// What: Exit keys end the loop
    ///
    /// - Input: Esc with no modal; Ctrl+C
    /// - Output: Both return the exit signal
    fn events_exit_keys() {
        let mut app = loaded_app();
        assert!(handle_event(key(KeyCode::Esc), &mut app));
        assert!(handle_event(ctrl('c'), &mut app));
    }
}
