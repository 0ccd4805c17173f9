//! Multi-control Gapminder dashboard.
//!
//! A year slider and two axis dropdowns drive one shared recomputation: any
//! control changing rebuilds the bundle from the selected year's slice,
//! relabels and rescales both axes, and restates the title.

use std::sync::Arc;

use super::{control_mut, Dashboard};
use crate::chart::Chart;
use crate::controls::{Control, ControlChange, ControlId, Select, Slider};
use crate::data::{DataBundle, Series, Table};
use crate::error::Result;

/// Index of the year slider.
pub const YEAR: ControlId = 0;
/// Index of the x-axis dropdown.
pub const X_AXIS: ControlId = 1;
/// Index of the y-axis dropdown.
pub const Y_AXIS: ControlId = 2;

/// Year shown when the dashboard opens.
const DEFAULT_YEAR: i64 = 1970;

/// Columns selectable on either axis.
const AXIS_OPTIONS: [&str; 4] = ["fertility", "life", "child_mortality", "gdp"];

/// Axis labels for known fields; anything absent falls back to the raw name.
const AXIS_LABELS: [(&str, &str); 2] = [
    ("life", "Life Expectancy (years)"),
    ("fertility", "Fertility (children per woman)"),
];

/// Population is rendered as a point size: scaled down and offset so the
/// smallest countries stay visible.
const POP_DIVISOR: f64 = 20_000_000.0;
const POP_OFFSET: f64 = 2.0;

/// Region-colored scatter over the Gapminder dataset.
#[derive(Debug)]
pub struct Gapminder {
    table: Arc<Table>,
    controls: Vec<Control>,
    chart: Chart,
}

impl Gapminder {
    /// Compose the dashboard over a loaded, year-indexed Gapminder table.
    pub fn from_table(table: Arc<Table>) -> Result<Self> {
        let (first, last) = table
            .year_span()
            .ok_or(crate::error::RoslingError::NoYearIndex)?;

        let controls = vec![
            Control::Slider(Slider::new("Year", first, last, 1, DEFAULT_YEAR)),
            Control::Select(Select::new("x-axis data", &AXIS_OPTIONS, "fertility")),
            Control::Select(Select::new("y-axis data", &AXIS_OPTIONS, "life")),
        ];

        let mut chart = Chart::new(DataBundle::new())?;
        chart.color_field = Some("region".to_string());
        chart.size_field = Some("pop".to_string());
        chart.hover_field = Some("country".to_string());

        let mut dashboard = Self {
            table,
            controls,
            chart,
        };
        dashboard.rebuild()?;
        Ok(dashboard)
    }

    fn year(&self) -> i64 {
        self.controls[YEAR]
            .as_slider()
            .map(|s| s.value)
            .unwrap_or(DEFAULT_YEAR)
    }

    fn axis_field(&self, control: ControlId, fallback: &str) -> String {
        self.controls[control]
            .as_select()
            .map(|s| s.value.clone())
            .unwrap_or_else(|| fallback.to_string())
    }

    fn axis_label(field: &str) -> String {
        AXIS_LABELS
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| field.to_string())
    }

    /// One shared recomputation for all three controls.
    ///
    /// Order matters for visual consistency: axis labels, then data, then
    /// ranges, then title, so everything agrees by the time the next frame
    /// renders. Ranges span the whole dataset, not the selected year, keeping
    /// axes stable while the year moves.
    fn rebuild(&mut self) -> Result<()> {
        let year = self.year();
        let x = self.axis_field(X_AXIS, "fertility");
        let y = self.axis_field(Y_AXIS, "life");

        self.chart.x_label = Self::axis_label(&x);
        self.chart.y_label = Self::axis_label(&y);

        let rows = self.table.year_rows(year)?;
        let pop: Vec<f64> = self
            .table
            .slice_numeric("population", &rows)?
            .into_iter()
            .map(|p| p / POP_DIVISOR + POP_OFFSET)
            .collect();
        let bundle = DataBundle::new()
            .with_field("x", Series::Numeric(self.table.slice_numeric(&x, &rows)?))
            .with_field("y", Series::Numeric(self.table.slice_numeric(&y, &rows)?))
            .with_field("country", Series::Text(self.table.slice_text("country", &rows)?))
            .with_field("pop", Series::Numeric(pop))
            .with_field("region", Series::Text(self.table.slice_text("region", &rows)?));
        self.chart.replace_bundle(bundle)?;

        self.chart.x_range = Some(self.table.min_max(&x)?);
        self.chart.y_range = Some(self.table.min_max(&y)?);

        self.chart.title = format!("Gapminder data for {}", year);
        Ok(())
    }
}

impl Dashboard for Gapminder {
    fn name(&self) -> &'static str {
        "gapminder"
    }

    fn controls(&self) -> &[Control] {
        &self.controls
    }

    fn chart(&self) -> Option<&Chart> {
        Some(&self.chart)
    }

    fn on_change(&mut self, change: &ControlChange) -> Result<()> {
        control_mut(&mut self.controls, change.control)?.set_value(&change.new);
        self.rebuild()
    }
}
