//! Table view of the chart's data bundle.

use super::ThemeColors;
use crate::data::DataBundle;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows sampled per column when sizing column widths.
const WIDTH_SAMPLE: usize = 200;

/// Draw the bundle as an aligned table, one field per column.
pub(super) fn draw_table(
    f: &mut Frame<'_>,
    area: Rect,
    bundle: &DataBundle,
    scroll: usize,
    colors: &ThemeColors,
) {
    let title = format!(" Bundle ({} rows) ", bundle.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if bundle.is_empty() {
        return;
    }

    // One row for the header.
    let viewport = inner.height.saturating_sub(1) as usize;
    let scroll = scroll.min(bundle.len().saturating_sub(1));

    let widths: Vec<Constraint> = bundle
        .iter()
        .map(|(name, series)| {
            let cells = (0..bundle.len().min(WIDTH_SAMPLE))
                .map(|row| series.display(row).width())
                .max()
                .unwrap_or(0);
            Constraint::Length(cells.max(name.width()) as u16)
        })
        .collect();

    let header = Row::new(
        bundle
            .iter()
            .map(|(name, _)| Cell::from(name.to_string()))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(colors.green)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row<'_>> = (scroll..bundle.len())
        .take(viewport)
        .map(|row| {
            Row::new(
                bundle
                    .iter()
                    .map(|(_, series)| Cell::from(series.display(row)))
                    .collect::<Vec<_>>(),
            )
            .style(Style::default().fg(colors.fg0))
        })
        .collect();

    let table = Table::new(rows, widths).header(header);
    f.render_widget(table, inner);
}
