//! Category tab row

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Tabs},
};

use crate::catalog::TabCategory;
use crate::ui::Theme;

/// Render every tab of `C` with `active` highlighted
pub fn render_tabs<C: TabCategory>(frame: &mut Frame, area: Rect, active: C, focused: bool) {
    let titles: Vec<Line> = C::TABS.iter().map(|c| Line::from(c.label())).collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Theme::tab())
        .highlight_style(Theme::tab_active())
        .divider(Span::styled("│", Theme::dimmed()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if focused {
                    Theme::border_focused()
                } else {
                    Theme::border()
                }),
        );

    frame.render_widget(tabs, area);
}
