//! Player screen
//!
//! The video plays in the mpv window; the terminal shows what is playing,
//! the loading or error surface, the controls bar while it is visible and
//! the server panel.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::{App, LoadingState};
use crate::models::Playable;
use crate::player::PlayerSession;
use crate::ui::{centered_rect, Theme};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.player.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(area);

    render_surface(frame, chunks[0], app, session);
    if session.controls_visible() {
        render_controls(frame, chunks[1], session);
    }
    if session.server_menu_open() {
        render_server_menu(frame, area, session);
    }
}

fn render_surface(frame: &mut Frame, area: Rect, app: &App, session: &PlayerSession) {
    let playable = session.playable();
    let title = if playable.is_live() {
        " ● LIVE "
    } else {
        " ▶ NOW PLAYING "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(
            title,
            if playable.is_live() {
                Theme::live_badge()
            } else {
                Theme::success()
            },
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(app.title_of(playable).to_string(), Theme::title())),
    ];
    if let Some(server) = session.current_server() {
        lines.push(Line::from(Span::styled(server.to_string(), Theme::secondary())));
    }
    lines.push(Line::from(""));

    match LoadingState::from(session) {
        LoadingState::Error(msg) => {
            lines.push(Line::from(Span::styled(msg, Theme::error())));
            lines.push(Line::from(vec![
                Span::styled(" r ", Theme::keybind()),
                Span::styled("retry  ", Theme::keybind_desc()),
                Span::styled(" s ", Theme::keybind()),
                Span::styled("change server", Theme::keybind_desc()),
            ]));
        }
        LoadingState::Loading(msg) => {
            let msg = msg.unwrap_or_else(|| "Loading...".to_string());
            lines.push(Line::from(Span::styled(format!("⟳ {}", msg), Theme::loading())));
        }
        LoadingState::Idle => {
            let state = if session.has_finished() {
                "Finished"
            } else if session.is_playing() {
                "Playing"
            } else {
                "Paused"
            };
            lines.push(Line::from(Span::styled(state, Theme::text())));
        }
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &PlayerSession) {
    let favorite = match session.playable() {
        Playable::Movie(m) => Some(m.is_favorite),
        Playable::Channel(_) => None,
    };

    let mut flags = vec![
        Span::styled(
            if session.is_playing() { "▶ playing " } else { "⏸ paused " },
            Theme::toggle(session.is_playing()),
        ),
        Span::styled("⛶ fullscreen ", Theme::toggle(session.is_fullscreen())),
        Span::styled("CC subtitles ", Theme::toggle(session.subtitles_visible())),
    ];
    if let Some(fav) = favorite {
        flags.push(Span::styled("♥ favorite", Theme::toggle(fav)));
    }

    let keys = Line::from(vec![
        Span::styled(" SPACE ", Theme::keybind()),
        Span::styled("play/pause ", Theme::keybind_desc()),
        Span::styled(" ←→ ", Theme::keybind()),
        Span::styled("±10s ", Theme::keybind_desc()),
        Span::styled(" f ", Theme::keybind()),
        Span::styled("fullscreen ", Theme::keybind_desc()),
        Span::styled(" u ", Theme::keybind()),
        Span::styled("subs ", Theme::keybind_desc()),
        Span::styled(" s ", Theme::keybind()),
        Span::styled("servers ", Theme::keybind_desc()),
        Span::styled(" h ", Theme::keybind()),
        Span::styled("favorite", Theme::keybind_desc()),
    ]);

    let widget = Paragraph::new(vec![Line::from(flags), keys])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border())
                .title(Span::styled(" CONTROLS ", Theme::title())),
        );
    frame.render_widget(widget, area);
}

fn render_server_menu(frame: &mut Frame, area: Rect, session: &PlayerSession) {
    let servers = session.servers();
    let height = (servers.len() as u16).max(1) + 2;
    let popup = centered_rect(area, 40, height);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = if servers.is_empty() {
        vec![ListItem::new(Span::styled("No servers", Theme::dimmed()))]
    } else {
        servers
            .iter()
            .enumerate()
            .map(|(i, server)| {
                let current = i == session.current_server_index();
                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{}] ", i + 1), Theme::keybind()),
                    Span::styled(
                        server.to_string(),
                        if current { Theme::highlighted() } else { Theme::text() },
                    ),
                ]))
            })
            .collect()
    };

    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Theme::border_focused())
            .title(Span::styled(" SERVERS ", Theme::title()))
            .style(Style::default().bg(Theme::BACKGROUND_LIGHT)),
    );
    frame.render_widget(menu, popup);
}
