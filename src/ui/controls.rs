//! Controls column and dropdown popup rendering.

use super::{centered_fixed, ThemeColors};
use crate::app::App;
use crate::controls::{Control, Select, Slider};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Terminal rows taken by one control (value line plus borders).
const CONTROL_HEIGHT: u16 = 3;

/// Draw the controls column.
pub(super) fn draw_controls(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let controls = app.session.dashboard.controls();
    let constraints: Vec<Constraint> = controls
        .iter()
        .map(|_| Constraint::Length(CONTROL_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, control) in controls.iter().enumerate() {
        draw_control(f, slots[i], control, i == app.focus, colors);
    }
}

fn draw_control(
    f: &mut Frame<'_>,
    area: Rect,
    control: &Control,
    focused: bool,
    colors: &ThemeColors,
) {
    let border = if focused { colors.yellow } else { colors.bg2 };
    let block = Block::default()
        .title(format!(" {} ", control.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = match control {
        Control::Select(select) => select_line(select, colors),
        Control::Slider(slider) => slider_line(slider, inner.width, colors),
    };
    f.render_widget(Paragraph::new(line), inner);
}

fn select_line(select: &Select, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            select.value.clone(),
            Style::default()
                .fg(colors.fg0)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▾", Style::default().fg(colors.fg1)),
    ])
}

fn slider_line(slider: &Slider, width: u16, colors: &ThemeColors) -> Line<'static> {
    let value = slider.value.to_string();
    let bounds_width = slider.start.to_string().len() + slider.end.to_string().len();
    let track_width = (width as usize)
        .saturating_sub(bounds_width + value.len() + 3)
        .max(3);
    let marker = ((slider.ratio() * (track_width - 1) as f64).round() as usize).min(track_width - 1);

    let mut track = String::new();
    for i in 0..track_width {
        track.push(if i == marker { '●' } else { '─' });
    }

    Line::from(vec![
        Span::styled(slider.start.to_string(), Style::default().fg(colors.fg1)),
        Span::styled(track, Style::default().fg(colors.orange)),
        Span::styled(slider.end.to_string(), Style::default().fg(colors.fg1)),
        Span::raw(" "),
        Span::styled(
            value,
            Style::default()
                .fg(colors.fg0)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Draw the dropdown popup, if one is open.
pub(super) fn draw_popup(f: &mut Frame<'_>, app: &App, colors: &ThemeColors) {
    let Some(popup) = app.popup else {
        return;
    };
    let Some(select) = app
        .session
        .dashboard
        .controls()
        .get(popup.control)
        .and_then(|c| c.as_select())
    else {
        return;
    };

    let title = format!(" {} ", select.title);
    let content_width = select
        .options
        .iter()
        .map(|o| o.width())
        .chain(std::iter::once(title.width()))
        .max()
        .unwrap_or(0) as u16;
    let area = centered_fixed(
        content_width + 4,
        select.options.len() as u16 + 2,
        f.area(),
    );

    f.render_widget(Clear, area);

    let items: Vec<ListItem<'_>> = select
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let style = if idx == popup.cursor {
                Style::default()
                    .fg(colors.bg0)
                    .bg(colors.yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg0)
            };
            ListItem::new(Line::from(format!(" {} ", option))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.yellow))
            .style(Style::default().bg(colors.bg0)),
    );

    f.render_widget(list, area);
}
