//! Color palette and style helpers for cinemabox
//!
//! Dark cinema palette: near-black background, marquee gold for focus,
//! crimson for the live badge and errors.

use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #0d0b0e
    pub const BACKGROUND: Color = Color::Rgb(0x0d, 0x0b, 0x0e);

    /// Primary: #f5c518 (marquee gold)
    pub const PRIMARY: Color = Color::Rgb(0xf5, 0xc5, 0x18);

    /// Secondary: #4fc3f7 (screen blue)
    pub const SECONDARY: Color = Color::Rgb(0x4f, 0xc3, 0xf7);

    /// Live: #e53935 (on-air red)
    pub const LIVE: Color = Color::Rgb(0xe5, 0x39, 0x35);

    /// Text: #ececec
    pub const TEXT: Color = Color::Rgb(0xec, 0xec, 0xec);

    /// Dim: #6b6670
    pub const DIM: Color = Color::Rgb(0x6b, 0x66, 0x70);

    /// Success: #66bb6a
    pub const SUCCESS: Color = Color::Rgb(0x66, 0xbb, 0x6a);

    /// Warning: #ffa726
    pub const WARNING: Color = Color::Rgb(0xff, 0xa7, 0x26);

    /// Error: #ff5252
    pub const ERROR: Color = Color::Rgb(0xff, 0x52, 0x52);

    /// Panels and overlays
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x1c, 0x19, 0x1f);

    /// Border color (dim gold)
    pub const BORDER: Color = Color::Rgb(0x7a, 0x62, 0x0c);

    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Inverted gold, used for the selected row and active tab
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS).add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING).add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn accent() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    /// "LIVE" badge on channels
    pub fn live_badge() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::LIVE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn tab_active() -> Style {
        Self::highlighted()
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn keybind_desc() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn year() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn genre() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Rating color bands
    pub fn rating(rating: f32) -> Style {
        if rating >= 8.0 {
            Self::success()
        } else if rating >= 6.5 {
            Self::warning()
        } else {
            Self::dimmed()
        }
    }

    /// Flag shown in the player controls, lit when `on`
    pub fn toggle(on: bool) -> Style {
        if on {
            Self::success()
        } else {
            Self::dimmed()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CONTRAST
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance per WCAG 2.0
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two RGB colors, 1.0 to 21.0
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}
