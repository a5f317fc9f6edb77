//! List presentation for movies, channels and search results
//!
//! Records are shown one per row with the selected row highlighted. Rendering
//! works from a borrowed [`ListState`], so the viewport offset is computed per
//! frame instead of being stored.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::ListState;
use crate::models::{Movie, Playable, TvChannel};
use crate::ui::Theme;

/// A record that can be listed in the browser
pub trait BrowserItem {
    fn title(&self, prefer_english: bool) -> &str;
    /// Short metadata after the title (year, category)
    fn meta(&self) -> Option<String>;
    fn rating(&self) -> Option<f32>;
    fn is_live(&self) -> bool {
        false
    }
}

impl BrowserItem for Movie {
    fn title(&self, prefer_english: bool) -> &str {
        self.display_title(prefer_english)
    }

    fn meta(&self) -> Option<String> {
        Some(format!("({}) {}", self.year, self.genre))
    }

    fn rating(&self) -> Option<f32> {
        Some(self.rating)
    }
}

impl BrowserItem for TvChannel {
    fn title(&self, prefer_english: bool) -> &str {
        self.display_title(prefer_english)
    }

    fn meta(&self) -> Option<String> {
        Some(self.category.clone())
    }

    fn rating(&self) -> Option<f32> {
        None
    }

    fn is_live(&self) -> bool {
        true
    }
}

impl BrowserItem for Playable {
    fn title(&self, prefer_english: bool) -> &str {
        self.display_title(prefer_english)
    }

    fn meta(&self) -> Option<String> {
        match self {
            Playable::Movie(m) => m.meta(),
            Playable::Channel(c) => c.meta(),
        }
    }

    fn rating(&self) -> Option<f32> {
        match self {
            Playable::Movie(m) => Some(m.rating),
            Playable::Channel(_) => None,
        }
    }

    fn is_live(&self) -> bool {
        Playable::is_live(self)
    }
}

/// First visible row that keeps `selected` on screen
pub fn visible_offset(list: &ListState, visible_height: usize) -> usize {
    if visible_height == 0 {
        return list.selected;
    }
    if list.selected < list.offset {
        list.selected
    } else if list.selected >= list.offset + visible_height {
        list.selected + 1 - visible_height
    } else {
        list.offset
    }
}

/// Options for one list panel
pub struct ListPanel<'a> {
    pub title: &'a str,
    pub focused: bool,
    pub prefer_english: bool,
    pub empty_text: &'a str,
}

pub fn render_list<T: BrowserItem>(
    frame: &mut Frame,
    area: Rect,
    panel: &ListPanel<'_>,
    items: &[T],
    list: &ListState,
) {
    let border_style = if panel.focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    if items.is_empty() {
        let empty = Paragraph::new(panel.empty_text)
            .style(Theme::dimmed())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .title(Span::styled(format!(" {} ", panel.title), Theme::title())),
            );
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2) as usize;
    let offset = visible_offset(list, visible_height);

    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_height)
        .map(|(i, item)| render_item(item, i == list.selected, panel.prefer_english))
        .collect();

    let title = format!(" {} ({}/{}) ", panel.title, list.selected + 1, items.len());
    let widget = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(Span::styled(title, Theme::title())),
        )
        .style(Theme::text());

    frame.render_widget(widget, area);
}

/// Format: ▸ Title (Year) Genre ★ 8.5   or   ▸ LIVE Name News
fn render_item<T: BrowserItem>(item: &T, is_selected: bool, prefer_english: bool) -> ListItem<'static> {
    let marker = if is_selected { "▸ " } else { "  " };
    let mut spans = vec![Span::styled(
        marker,
        if is_selected { Theme::accent() } else { Theme::dimmed() },
    )];

    if item.is_live() {
        spans.push(Span::styled(" LIVE ", Theme::live_badge()));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        item.title(prefer_english).to_string(),
        if is_selected { Theme::highlighted() } else { Theme::text() },
    ));

    if let Some(meta) = item.meta() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(meta, Theme::year()));
    }

    if let Some(rating) = item.rating() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("★ {:.1}", rating), Theme::rating(rating)));
    }

    ListItem::new(Line::from(spans))
}
