//! Scatter chart rendering.

use super::ThemeColors;
use crate::chart::Chart as ChartModel;
use crate::util::format_number;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

/// One renderable point group: a legend label and its points.
struct PointGroup {
    name: Option<String>,
    points: Vec<(f64, f64)>,
}

/// Draw the scatter chart for the current bundle.
pub(super) fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    chart: &ChartModel,
    inspect: Option<usize>,
    colors: &ThemeColors,
) {
    let bundle = chart.bundle();
    let (Ok(xs), Ok(ys)) = (bundle.numeric("x"), bundle.numeric("y")) else {
        draw_empty(f, area, chart, colors);
        return;
    };

    let groups = group_points(xs, ys, chart);
    let highlight = inspect
        .and_then(|row| xs.get(row).zip(ys.get(row)))
        .map(|(x, y)| vec![(*x, *y)]);

    let mut datasets: Vec<Dataset<'_>> = groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let mut dataset = Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.series[i % colors.series.len()]))
                .data(&group.points);
            if let Some(ref name) = group.name {
                dataset = dataset.name(name.clone());
            }
            dataset
        })
        .collect();

    if let Some(ref point) = highlight {
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.yellow))
                .data(point),
        );
    }

    let (x0, x1) = chart.x_bounds();
    let (y0, y1) = chart.y_bounds();

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", chart.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .style(Style::default().bg(colors.bg0)),
        )
        .x_axis(axis(&chart.x_label, (x0, x1), colors))
        .y_axis(axis(&chart.y_label, (y0, y1), colors))
        .legend_position(Some(LegendPosition::BottomLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    f.render_widget(widget, area);
}

fn axis<'a>(label: &str, bounds: (f64, f64), colors: &ThemeColors) -> Axis<'a> {
    let (lo, hi) = bounds;
    let mid = (lo + hi) / 2.0;
    Axis::default()
        .title(Span::styled(
            label.to_string(),
            Style::default().fg(colors.green),
        ))
        .style(Style::default().fg(colors.fg1))
        .bounds([lo, hi])
        .labels(vec![
            Span::styled(format_number(lo), Style::default().fg(colors.fg1)),
            Span::styled(format_number(mid), Style::default().fg(colors.fg1)),
            Span::styled(format_number(hi), Style::default().fg(colors.fg1)),
        ])
}

/// Group points by the chart's color field, keeping first-appearance order.
/// Without a color field (or with a non-text one) everything lands in one
/// unnamed group. Non-finite points are dropped.
fn group_points(xs: &[f64], ys: &[f64], chart: &ChartModel) -> Vec<PointGroup> {
    let categories = chart
        .color_field
        .as_deref()
        .and_then(|field| chart.bundle().text(field).ok());

    let Some(categories) = categories else {
        let points = xs
            .iter()
            .zip(ys)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| (*x, *y))
            .collect();
        return vec![PointGroup { name: None, points }];
    };

    let mut groups: Vec<PointGroup> = Vec::new();
    for ((x, y), category) in xs.iter().zip(ys).zip(categories) {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        let idx = match groups
            .iter()
            .position(|g| g.name.as_deref() == Some(category.as_str()))
        {
            Some(idx) => idx,
            None => {
                groups.push(PointGroup {
                    name: Some(category.clone()),
                    points: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[idx].points.push((*x, *y));
    }
    groups
}

fn draw_empty(f: &mut Frame<'_>, area: Rect, chart: &ChartModel, colors: &ThemeColors) {
    let block = Block::default()
        .title(format!(" {} ", chart.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let para = Paragraph::new("No data to display")
        .style(Style::default().fg(colors.fg1))
        .alignment(Alignment::Center);
    f.render_widget(para, inner);
}
