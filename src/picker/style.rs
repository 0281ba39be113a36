//! Styles for the picker, built once per process

use ratatui::style::{Color, Modifier, Style};
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

const ACCENT: Color = Color::Rgb(0x94, 0xe2, 0xd5);
const MUTED: Color = Color::Rgb(0x62, 0x62, 0x62);

/// How a single entry row is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct RowStyle {
    /// Gutter in front of the entry text, always four columns wide
    pub prefix: &'static str,
    pub style: Style,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub status: Style,
    pub filter_prompt: Style,
    pub pagination_active: Style,
    pub pagination_inactive: Style,
    pub help: Style,
    /// Indexed by `row_index(highlighted, active)`
    rows: [RowStyle; 4],
}

impl Default for Theme {
    fn default() -> Self {
        let accent = Style::default().fg(ACCENT);
        Self {
            title: Style::default()
                .fg(Color::Rgb(0xff, 0xfd, 0xf5))
                .bg(Color::Rgb(0x25, 0x63, 0x8c))
                .add_modifier(Modifier::BOLD),
            status: Style::default().fg(MUTED),
            filter_prompt: accent,
            pagination_active: Style::default().fg(Color::Gray),
            pagination_inactive: Style::default().fg(MUTED),
            help: Style::default().fg(MUTED),
            rows: [
                RowStyle {
                    prefix: "    ",
                    style: Style::default(),
                },
                RowStyle {
                    prefix: "  > ",
                    style: accent,
                },
                RowStyle {
                    prefix: "*   ",
                    style: Style::default(),
                },
                RowStyle {
                    prefix: "* > ",
                    style: accent,
                },
            ],
        }
    }
}

fn row_index(highlighted: bool, active: bool) -> usize {
    usize::from(highlighted) | (usize::from(active) << 1)
}

impl Theme {
    /// Row treatment for the highlight/active combination
    pub fn row(&self, highlighted: bool, active: bool) -> &RowStyle {
        &self.rows[row_index(highlighted, active)]
    }
}

/// Picker theme (initialized on first use)
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
