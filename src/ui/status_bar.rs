//! Status bar UI component.

use super::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Key hints shown on the right of the status bar.
const KEYMAP: &str = "Tab focus · Enter open · ←→ slider · n inspect · v view · y copy · T theme · q quit ";

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, status: &str, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(KEYMAP.width() as u16),
        ])
        .split(area);

    let status = Paragraph::new(format!(" {}", status))
        .style(Style::default().fg(colors.fg0).bg(colors.bg1));
    f.render_widget(status, chunks[0]);

    let keymap = Paragraph::new(KEYMAP).style(Style::default().fg(colors.fg1).bg(colors.bg1));
    f.render_widget(keymap, chunks[1]);
}
