//! User interface rendering.

mod chart;
mod controls;
mod status_bar;
mod table;
mod theme;

use crate::app::{App, ViewMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub use theme::ThemeColors;

/// Width of the controls column on the left.
const CONTROLS_WIDTH: u16 = 32;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(
        Block::default().style(Style::default().bg(colors.bg0)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CONTROLS_WIDTH), Constraint::Min(10)])
        .split(chunks[0]);

    controls::draw_controls(f, main[0], app, &colors);

    if let Some(chart) = app.session.dashboard.chart() {
        match app.view_mode {
            ViewMode::Chart => chart::draw_chart(f, main[1], chart, app.inspect, &colors),
            ViewMode::Table => {
                table::draw_table(f, main[1], chart.bundle(), app.table_scroll, &colors)
            }
        }
    } else {
        draw_no_chart(f, main[1], app, &colors);
    }

    status_bar::draw_status(f, chunks[1], &app.status, &colors);

    controls::draw_popup(f, app, &colors);
}

fn draw_no_chart(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let block = Block::default()
        .title(format!(" {} ", app.session.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let para = Paragraph::new("This dashboard has controls only")
        .style(Style::default().fg(colors.fg1))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(para, inner);
}

/// A fixed-size rectangle centered in `r`, clamped to fit.
fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
