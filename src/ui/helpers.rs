//! UI helper utilities for formatting and layout.
//!
//! Small, focused helpers used by the TUI layer: display-width-aware text
//! fitting, key/value detail lines, and human-readable labels for the
//! numeric card fields.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::state::GameRecord;
use crate::theme::Theme;

/// What: Compute a centered sub-rectangle by percentage of the parent.
///
/// Inputs:
/// - `percent_x`: Width of the popup as a percentage of `r`.
/// - `percent_y`: Height of the popup as a percentage of `r`.
/// - `r`: Parent area.
///
/// Output:
/// - The centered [`Rect`] used for modal overlays.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}

/// What: Fit text into a display-cell budget, ending with `…` when cut.
///
/// Inputs:
/// - `text`: Source text.
/// - `max_width`: Available terminal cells.
///
/// Output:
/// - A string whose display width does not exceed `max_width`.
///
/// Details:
/// - Counts real display cells via `unicode_width`, so wide (CJK) characters
///   are budgeted correctly where a char count would overflow the cell.
#[must_use]
pub fn fit_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut width = 0usize;
    for (i, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            let mut out: String = text[..i].to_string();
            while !out.is_empty() && width + 1 > max_width {
                let popped = out.pop().map(|c| c.width().unwrap_or(0)).unwrap_or(0);
                width -= popped;
            }
            out.push('…');
            return out;
        }
        width += w;
    }
    text.to_string()
}

/// Build a key/value display line with themed styling.
///
/// The key is shown in bold with an accent color, followed by the value in
/// the primary text color.
#[must_use]
pub fn kv(key: &str, val: String, th: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{key}: "),
            Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(val, Style::default().fg(th.text)),
    ])
}

/// Player-count label for cards and the detail view, `-` when unknown.
#[must_use]
pub fn players_label(game: &GameRecord) -> String {
    if game.players.min == 0 && game.players.max == 0 {
        "-".to_string()
    } else {
        format!("{}-{}", game.players.min, game.players.max)
    }
}

/// Playtime label in minutes, `-` when the feed carried none.
#[must_use]
pub fn playtime_label(game: &GameRecord) -> String {
    game.playtime
        .map_or_else(|| "-".to_string(), |t| format!("{t:.0} min"))
}

/// Rating label, `-` when the feed carried none.
#[must_use]
pub fn rating_label(game: &GameRecord) -> String {
    game.rating
        .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"))
}

/// Display text for an optional free-text field, `-` when empty (the detail
/// dialog always shows every row).
#[must_use]
pub fn or_dash(text: &str) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}
