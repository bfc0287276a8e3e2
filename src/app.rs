//! Meeplebox application runtime (terminal lifecycle, async workers, and
//! event loop).
//!
//! The runtime owns a single [`AppState`]. One spawned task performs the
//! one-shot catalog load and delivers the result over a channel; the main
//! loop installs it atomically and from then on the collection is never
//! written again. The query engine itself is synchronous and runs inline in
//! the event handler.

use std::time::Duration;

use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::args::Args;
use crate::logic;
use crate::sources;
use crate::state::{AppState, GameRecord};
use crate::ui::ui;

/// Shared result type for runtime errors.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Enter raw mode and the alternate screen.
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Leave the alternate screen and restore the terminal.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// What: Install a freshly loaded catalog into the application state.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `games`: Loaded records in feed order (possibly empty on load failure).
/// - `featured_id`: Configured featured-game id.
///
/// Output:
/// - Replaces the catalog exactly once, rebuilds the genre menu, resolves the
///   featured game, and derives the initial visible result set.
fn install_catalog(app: &mut AppState, games: Vec<GameRecord>, featured_id: i64) {
    tracing::info!(count = games.len(), "installing catalog");
    app.catalog = games;
    app.loading = false;
    app.genre_options = logic::distinct_genres(&app.catalog);
    app.featured = logic::featured_game(&app.catalog, featured_id).cloned();
    logic::apply_filters_and_sort_preserve_selection(app);
}

/// Start the Meeplebox TUI runtime and run the main event loop.
///
/// - Initializes the terminal (raw mode, alternate screen)
/// - Loads settings, spawns the one-shot catalog loader, the input poll
///   thread, and a periodic tick
/// - Drives rendering via `ratatui` and delegates input handling to `events`
///
/// Returns `Ok(())` on normal shutdown or an error if initialization fails.
///
/// # Errors
/// - Terminal initialization or restoration failures
pub async fn run(args: Args) -> Result<()> {
    let prefs = crate::theme::settings();
    let feed_url = args.feed_url.unwrap_or(prefs.feed_url);
    let featured_id = args.featured_id.unwrap_or(prefs.featured_game_id);

    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut app = AppState {
        featured_badge: prefs.featured_badge,
        sort_key: prefs.sort_key,
        loading: !args.offline,
        ..Default::default()
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (catalog_tx, mut catalog_rx) = mpsc::unbounded_channel::<Vec<GameRecord>>();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();

    if !args.offline {
        tokio::spawn(async move {
            let games = sources::load_catalog(&feed_url).await;
            let _ = catalog_tx.send(games);
        });
    }

    std::thread::spawn(move || {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50))
                && let Ok(ev) = event::read()
            {
                let _ = event_tx.send(ev);
            }
        }
    });

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(200));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });

    loop {
        let _ = terminal.draw(|f| ui(f, &mut app));

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app) { break; }
            }
            Some(games) = catalog_rx.recv() => {
                install_catalog(&mut app, games, featured_id);
            }
            Some(()) = tick_rx.recv() => {}
            else => { break; }
        }
    }

    restore_terminal()?;
    Ok(())
}
