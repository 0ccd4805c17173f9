//! Single-dropdown scatter updater over the literacy/birth-rate dataset.

use std::sync::Arc;

use super::{control_mut, Dashboard};
use crate::chart::Chart;
use crate::controls::{Control, ControlChange, ControlId, Select};
use crate::data::Table;
use crate::error::Result;

/// Index of the distribution dropdown.
pub const DISTRIBUTION: ControlId = 0;

/// Scatter of fertility against a selectable distribution column.
///
/// The x series is always the fertility column; the dropdown switches the y
/// series between female literacy and population, replacing the chart's
/// bundle wholesale on every change.
#[derive(Debug)]
pub struct Literacy {
    table: Arc<Table>,
    controls: Vec<Control>,
    chart: Chart,
}

impl Literacy {
    /// Compose the dashboard over a loaded literacy table.
    pub fn from_table(table: Arc<Table>) -> Result<Self> {
        let bundle = table.xy_bundle("fertility", "female_literacy")?;
        let mut chart = Chart::new(bundle)?;
        chart.title = "Literacy and birth rate".to_string();
        chart.x_label = "fertility".to_string();
        chart.y_label = "female_literacy".to_string();

        Ok(Self {
            table,
            controls: vec![Control::Select(Select::new(
                "distribution",
                &["female_literacy", "population"],
                "female_literacy",
            ))],
            chart,
        })
    }
}

impl Dashboard for Literacy {
    fn name(&self) -> &'static str {
        "literacy"
    }

    fn controls(&self) -> &[Control] {
        &self.controls
    }

    fn chart(&self) -> Option<&Chart> {
        Some(&self.chart)
    }

    fn on_change(&mut self, change: &ControlChange) -> Result<()> {
        control_mut(&mut self.controls, change.control)?.set_value(&change.new);

        // The branch follows the incoming value: female_literacy selects the
        // literacy column, anything else selects population.
        let y = match change.new.as_choice() {
            Some("female_literacy") => "female_literacy",
            _ => "population",
        };
        self.chart
            .replace_bundle(self.table.xy_bundle("fertility", y)?)?;
        self.chart.y_label = y.to_string();
        Ok(())
    }
}
