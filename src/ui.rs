//! Rendering layer: featured banner, filter bar, result cards, and the
//! detail overlay. Carries no decision logic; everything shown here is
//! derived from [`AppState`] by the query engine beforehand.

pub mod helpers;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::state::{AppState, Focus, Modal, SortKey};
use crate::theme::{Theme, theme};
use crate::ui::helpers::{
    centered_rect, fit_to_width, kv, or_dash, players_label, playtime_label, rating_label,
};
use crate::util::truncate;

/// Description length shown in the detail overlay, matching the card dialog.
const DETAIL_DESCRIPTION_CHARS: usize = 140;

/// Draw one full frame.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);

    render_featured(f, app, &th, chunks[0]);
    render_filter_bar(f, app, &th, chunks[1]);
    render_results(f, app, &th, chunks[2]);
    render_footer(f, app, &th, chunks[3]);

    if let Modal::Details { game } = &app.modal {
        render_details(f, game, &th, area);
    }
}

/// Featured banner: the configured "game of the week" or a load status line.
fn render_featured(f: &mut Frame, app: &AppState, th: &Theme, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.lavender))
        .title(Span::styled(
            " Meeplebox ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(th.mantle));

    let line = if app.loading {
        Line::from(Span::styled(
            "Fetching the shelf…",
            Style::default().fg(th.subtext0),
        ))
    } else if let Some(g) = &app.featured {
        Line::from(vec![
            Span::styled(
                format!(" {} ", app.featured_badge),
                Style::default()
                    .fg(th.base)
                    .bg(th.yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                g.title.clone(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ★ {}", rating_label(g)),
                Style::default().fg(th.yellow),
            ),
            Span::styled(
                if g.shelf.is_empty() {
                    String::new()
                } else {
                    format!("  ({})", g.shelf)
                },
                Style::default().fg(th.subtext0),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "The shelf is empty.",
            Style::default().fg(th.subtext0),
        ))
    };

    let sub = app.featured.as_ref().map_or_else(Line::default, |g| {
        Line::from(Span::styled(
            fit_to_width(&g.description, area.width.saturating_sub(4) as usize),
            Style::default().fg(th.subtext0),
        ))
    });

    f.render_widget(Paragraph::new(vec![line, sub]).block(block), area);
}

/// Style for one filter-bar field, highlighted when it owns keystrokes.
fn field_style(active: bool, th: &Theme) -> Style {
    if active {
        Style::default()
            .fg(th.sapphire)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(th.text)
    }
}

/// Filter bar: search text, numeric ranges, genre, and sort key.
fn render_filter_bar(f: &mut Frame, app: &AppState, th: &Theme, area: ratatui::layout::Rect) {
    let label = Style::default().fg(th.overlay1);
    let show = |text: &str| {
        if text.is_empty() {
            "·".to_string()
        } else {
            text.to_string()
        }
    };
    let genre_text = app.genre_filter.clone().unwrap_or_else(|| "All".into());
    let sort_text = match app.sort_key {
        SortKey::Unsorted => "none",
        SortKey::Title => "title",
        SortKey::Playtime => "playtime",
        SortKey::Rating => "rating",
    };

    let line = Line::from(vec![
        Span::styled("Search ", label),
        Span::styled(
            show(&app.input),
            field_style(app.focus == Focus::Search, th),
        ),
        Span::styled("  Players ", label),
        Span::styled(
            show(&app.players_from_input),
            field_style(app.focus == Focus::PlayersFrom, th),
        ),
        Span::styled("-", label),
        Span::styled(
            show(&app.players_to_input),
            field_style(app.focus == Focus::PlayersTo, th),
        ),
        Span::styled("  Minutes ", label),
        Span::styled(
            show(&app.playtime_from_input),
            field_style(app.focus == Focus::PlaytimeFrom, th),
        ),
        Span::styled("-", label),
        Span::styled(
            show(&app.playtime_to_input),
            field_style(app.focus == Focus::PlaytimeTo, th),
        ),
        Span::styled("  Genre ", label),
        Span::styled(genre_text, Style::default().fg(th.mauve)),
        Span::styled("  Sort ", label),
        Span::styled(sort_text, Style::default().fg(th.green)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .title(Span::styled(" Filters ", Style::default().fg(th.sapphire)));
    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Results list: one card row per visible game.
fn render_results(f: &mut Frame, app: &mut AppState, th: &Theme, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .title(Span::styled(" Games ", Style::default().fg(th.sapphire)));

    if app.loading {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Loading catalog…",
            Style::default().fg(th.subtext0),
        )))
        .block(block);
        f.render_widget(msg, area);
        return;
    }
    if app.results.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No games match the current filters. Ctrl+R resets them.",
            Style::default().fg(th.red),
        )))
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let desc_width = (area.width as usize).saturating_sub(45);
    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|g| {
            let mut segs = vec![
                Span::styled(
                    g.title.clone(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    if g.shelf.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", g.shelf)
                    },
                    Style::default().fg(th.green),
                ),
                Span::styled(
                    format!("  {}p", players_label(g)),
                    Style::default().fg(th.sapphire),
                ),
                Span::styled(
                    format!("  {}", playtime_label(g)),
                    Style::default().fg(th.subtext0),
                ),
                Span::styled(
                    format!("  ★ {}", rating_label(g)),
                    Style::default().fg(th.yellow),
                ),
            ];
            if let Some(genre) = &g.genre
                && !genre.is_empty()
            {
                segs.push(Span::styled(
                    format!("  {genre}"),
                    Style::default().fg(th.mauve),
                ));
            }
            if !g.description.is_empty() && desc_width > 4 {
                segs.push(Span::raw("  - "));
                segs.push(Span::styled(
                    fit_to_width(&g.description, desc_width),
                    Style::default().fg(th.overlay1),
                ));
            }
            ListItem::new(Line::from(segs))
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(
            Style::default()
                .bg(th.surface1)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// Footer: match count and key hints.
fn render_footer(f: &mut Frame, app: &AppState, th: &Theme, area: ratatui::layout::Rect) {
    let count = if app.loading {
        Line::from(Span::styled(
            "Waiting for the catalog feed…",
            Style::default().fg(th.subtext0),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!("{} of {} games", app.results.len(), app.catalog.len()),
                Style::default().fg(th.green),
            ),
        ])
    };
    let hints = Line::from(Span::styled(
        "Tab fields · Ctrl+G genre · Ctrl+S sort · Ctrl+R reset · Ctrl+W featured · Enter details · Esc quit",
        Style::default().fg(th.overlay1),
    ));
    f.render_widget(Paragraph::new(vec![count, hints]), area);
}

/// Centered detail overlay for one game.
fn render_details(
    f: &mut Frame,
    game: &crate::state::GameRecord,
    th: &Theme,
    area: ratatui::layout::Rect,
) {
    let rect = centered_rect(70, 80, area);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.lavender))
        .title(Span::styled(
            format!(" {} ", game.title),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(th.mantle));

    let rules = if game.rules.is_empty() {
        game.description.clone()
    } else {
        game.rules.clone()
    };
    let mut lines = vec![
        kv("Players", players_label(game), th),
        kv("Playtime", playtime_label(game), th),
        kv("Rating", rating_label(game), th),
        kv("Shelf", or_dash(&game.shelf), th),
        kv("Difficulty", or_dash(&game.difficulty), th),
        kv("Genre", or_dash(game.genre.as_deref().unwrap_or_default()), th),
        Line::default(),
        Line::from(Span::styled(
            truncate(&game.description, DETAIL_DESCRIPTION_CHARS),
            Style::default().fg(th.subtext0),
        )),
    ];
    if !rules.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            rules,
            Style::default().fg(th.text),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc closes",
        Style::default().fg(th.overlay1),
    )));

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, rect);
}
