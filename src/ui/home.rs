//! Home screen: menu, search box and the featured movie

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, HomeEntry, InputMode};
use crate::ui::search::render_search_box;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let editing = app.input_mode == InputMode::Editing;
    render_search_box(frame, rows[0], &app.home.search_box, editing, "SEARCH");

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(1)])
        .split(rows[1]);

    render_menu(frame, cols[0], app);
    render_featured(frame, cols[1], app);
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = HomeEntry::ALL
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = i == app.home.menu.selected;
            let marker = if selected { "▸ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Theme::accent()),
                Span::styled(
                    entry.label(),
                    if selected { Theme::highlighted() } else { Theme::text() },
                ),
            ]))
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if app.input_mode == InputMode::Normal {
                Theme::border_focused()
            } else {
                Theme::border()
            })
            .title(Span::styled(" MENU ", Theme::title())),
    );
    frame.render_widget(menu, area);
}

fn render_featured(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" ★ FEATURED ", Theme::title()));

    let Some(movie) = app.catalog.movies.featured() else {
        frame.render_widget(block, area);
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            movie.display_title(app.prefer_english).to_string(),
            Theme::title(),
        )),
        Line::from(vec![
            Span::styled(movie.year_string(), Theme::year()),
            Span::raw("  "),
            Span::styled(movie.genre.clone(), Theme::genre()),
            Span::raw("  "),
            Span::styled(format!("★ {}", movie.formatted_rating()), Theme::rating(movie.rating)),
            Span::raw("  "),
            Span::styled(movie.duration.clone(), Theme::dimmed()),
        ]),
        Line::from(""),
        Line::from(Span::styled(movie.description.clone(), Theme::text())),
        Line::from(""),
        Line::from(vec![
            Span::styled(" m ", Theme::keybind()),
            Span::styled("movies  ", Theme::keybind_desc()),
            Span::styled(" l ", Theme::keybind()),
            Span::styled("live tv  ", Theme::keybind_desc()),
            Span::styled(" / ", Theme::keybind()),
            Span::styled("search", Theme::keybind_desc()),
        ]),
    ];

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(widget, area);
}
