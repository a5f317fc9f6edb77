//! Movies and Live TV screens

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, MovieSection};
use crate::ui::browser::{render_list, ListPanel};
use crate::ui::tabs::render_tabs;
use crate::ui::Theme;

fn section_bar(active: MovieSection) -> Line<'static> {
    let mut spans = Vec::new();
    for section in MovieSection::ALL {
        let style = if section == active {
            Theme::highlighted()
        } else {
            Theme::dimmed()
        };
        spans.push(Span::styled(format!(" {} ", section.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("←→ section  Tab genre", Theme::keybind_desc()));
    Line::from(spans)
}

pub fn render_movies(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let featured = app
        .catalog
        .movies
        .featured()
        .map(|m| format!("★ {}  ({})", m.display_title(app.prefer_english), m.year))
        .unwrap_or_default();
    let header = Paragraph::new(vec![
        Line::from(Span::styled(featured, Theme::title())),
        section_bar(app.movies.section),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Plain)
            .border_style(Theme::border()),
    );
    frame.render_widget(header, chunks[0]);

    render_tabs(
        frame,
        chunks[1],
        app.movies.category,
        app.movies.section == MovieSection::All,
    );

    let panel = ListPanel {
        title: app.movies.section.label(),
        focused: true,
        prefer_english: app.prefer_english,
        empty_text: "No movies in this category",
    };
    render_list(frame, chunks[2], &panel, &app.movies.items, &app.movies.list);
}

pub fn render_live_tv(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_tabs(frame, chunks[0], app.live_tv.category, true);

    let panel = ListPanel {
        title: "LIVE TV",
        focused: true,
        prefer_english: app.prefer_english,
        empty_text: "No channels in this category",
    };
    render_list(frame, chunks[1], &panel, &app.live_tv.channels, &app.live_tv.list);
}
