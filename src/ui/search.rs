//! Search screen: query box, search type and results

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, InputMode, TextInput};
use crate::catalog::SearchType;
use crate::ui::browser::{render_list, ListPanel};
use crate::ui::Theme;

/// Text with a bar cursor when editing, or a placeholder when empty
pub fn input_text(input: &TextInput, editing: bool, placeholder: &str) -> String {
    if editing {
        let split = input
            .value
            .char_indices()
            .nth(input.cursor)
            .map(|(i, _)| i)
            .unwrap_or(input.value.len());
        let (before, after) = input.value.split_at(split);
        format!("⌕ {}│{}", before, after)
    } else if input.value.is_empty() {
        format!("⌕ {}", placeholder)
    } else {
        format!("⌕ {}", input.value)
    }
}

/// One-line bordered search box
pub fn render_search_box(frame: &mut Frame, area: Rect, input: &TextInput, editing: bool, title: &str) {
    let text = input_text(input, editing, "Press / to search...");
    let (border, style) = if editing {
        (Theme::border_focused(), Theme::input().fg(Theme::PRIMARY))
    } else {
        (Theme::border(), Theme::input())
    };
    let widget = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(format!(" {} ", title), Theme::title())),
    );
    frame.render_widget(widget, area);
}

fn type_selector(active: SearchType) -> Line<'static> {
    let mut spans = vec![Span::styled(" Type: ", Theme::dimmed())];
    for kind in [SearchType::All, SearchType::Movies, SearchType::Channels] {
        let style = if kind == active {
            Theme::highlighted()
        } else {
            Theme::dimmed()
        };
        spans.push(Span::styled(format!(" {} ", kind.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("(Tab to change)", Theme::keybind_desc()));
    Line::from(spans)
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    render_search_box(frame, chunks[0], &app.search.input, editing, "SEARCH");
    frame.render_widget(Paragraph::new(type_selector(app.search.search_type)), chunks[1]);

    let empty_text = if app.search.query().trim().is_empty() {
        "Type to search movies and channels..."
    } else {
        "No results found"
    };
    let panel = ListPanel {
        title: "RESULTS",
        focused: !editing,
        prefer_english: app.prefer_english,
        empty_text,
    };
    render_list(frame, chunks[2], &panel, &app.search.results, &app.search.list);
}
