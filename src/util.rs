//! Utility functions for Rosling.

use arboard::Clipboard;

use crate::chart::Chart;
use crate::data::DataBundle;
use crate::error::Result;

/// Format a number for display: integers without a fraction, everything else
/// with three significant decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    if value == value.trunc() && value.abs() < 1e12 {
        return format!("{}", value as i64);
    }
    format!("{:.3}", value)
}

/// Render a bundle as tab-separated text, one header row then one row per
/// entry.
pub fn bundle_to_tsv(bundle: &DataBundle) -> String {
    let mut text = String::new();

    let names: Vec<&str> = bundle.iter().map(|(name, _)| name).collect();
    text.push_str(&names.join("\t"));
    text.push('\n');

    for row in 0..bundle.len() {
        let cells: Vec<String> = bundle.iter().map(|(_, series)| series.display(row)).collect();
        text.push_str(&cells.join("\t"));
        text.push('\n');
    }

    text
}

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy a bundle to the clipboard as tab-separated text.
pub fn copy_bundle(bundle: &DataBundle) -> Result<()> {
    copy_to_clipboard(&bundle_to_tsv(bundle))
}

/// One-line readout for an inspected bundle row: the hover field first, then
/// x, y, and the size field when the chart carries one.
pub fn inspect_line(chart: &Chart, row: usize) -> String {
    let bundle = chart.bundle();
    let mut parts = Vec::new();

    if let Some(label) = chart
        .hover_field
        .as_deref()
        .and_then(|field| bundle.get(field))
        .map(|series| series.display(row))
    {
        parts.push(label);
    }

    for field in ["x", "y"] {
        if let Some(series) = bundle.get(field) {
            parts.push(format!("{}={}", field, series.display(row)));
        }
    }

    if let Some((field, series)) = chart
        .size_field
        .as_deref()
        .and_then(|field| bundle.get(field).map(|series| (field, series)))
    {
        parts.push(format!("{}={}", field, series.display(row)));
    }

    format!("[{}/{}] {}", row + 1, bundle.len(), parts.join("  "))
}
