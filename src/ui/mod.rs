//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout; [`draw`] renders
//! the whole frame from an immutable [`App`].

pub mod browser;
pub mod home;
pub mod movies;
pub mod player;
pub mod search;
pub mod tabs;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppState, InputMode};

/// Render the current screen with header and status bar
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    match app.state {
        AppState::Home => home::render(frame, chunks[1], app),
        AppState::Movies => movies::render_movies(frame, chunks[1], app),
        AppState::LiveTv => movies::render_live_tv(frame, chunks[1], app),
        AppState::Search => search::render(frame, chunks[1], app),
        AppState::Player => player::render(frame, chunks[1], app),
    }
    render_status_bar(frame, chunks[2], app);

    if let Some(notice) = &app.notice {
        render_notice(frame, area, notice);
    }
}

pub fn screen_label(state: AppState) -> &'static str {
    match state {
        AppState::Home => "HOME",
        AppState::Movies => "MOVIES",
        AppState::LiveTv => "LIVE TV",
        AppState::Search => "SEARCH",
        AppState::Player => "PLAYER",
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut crumbs: Vec<Span> = vec![
        Span::styled("CINEMA", Theme::title()),
        Span::styled("BOX", Theme::secondary().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
    ];
    for state in app.nav_stack.iter().chain(std::iter::once(&app.state)) {
        let style = if *state == app.state {
            Theme::accent()
        } else {
            Theme::dimmed()
        };
        if *state != AppState::Home || app.nav_stack.is_empty() {
            crumbs.push(Span::styled(format!("› {} ", screen_label(*state)), style));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(crumbs)), area);
}

fn key_hints(app: &App) -> &'static str {
    if app.input_mode == InputMode::Editing {
        return " type to search  ↵:done  ESC:cancel ";
    }
    match app.state {
        AppState::Home => " ↑↓:move  ↵:open  /:search  q:quit ",
        AppState::Movies => " ↑↓:move  ←→:section  Tab:genre  ↵:play  ESC:back ",
        AppState::LiveTv => " ↑↓:move  Tab:category  ↵:watch  /:search  ESC:back ",
        AppState::Search => " ↑↓:move  /:edit  Tab:type  ↵:play  ESC:back ",
        AppState::Player => " ↵:show/hide  1-2:server  r:retry  ESC:back ",
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::SECONDARY),
        ),
    };

    let line = Line::from(vec![
        mode,
        Span::styled(format!(" {} ", screen_label(app.state)), Theme::dimmed()),
        Span::raw("│"),
        Span::styled(key_hints(app), Theme::keybind_desc()),
    ]);
    frame.render_widget(Paragraph::new(line).style(Theme::status_bar()), area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: &str) {
    let popup = centered_rect(area, 50, 3);
    frame.render_widget(Clear, popup);
    let widget = Paragraph::new(Span::styled(notice.to_string(), Theme::accent()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border_focused())
                .style(Style::default().bg(Theme::BACKGROUND_LIGHT)),
        );
    frame.render_widget(widget, popup);
}

/// Centered rectangle clamped to `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
