//! Option-linked dropdown pair.

use super::{control_mut, Dashboard};
use crate::chart::Chart;
use crate::controls::{Control, ControlChange, ControlId, Select};
use crate::error::Result;

/// Index of the driving dropdown.
pub const FIRST: ControlId = 0;
/// Index of the dropdown whose options follow the first.
pub const SECOND: ControlId = 1;

/// Two dropdowns where the first's selection rewrites the second's option set
/// and resets its value to that set's first entry.
#[derive(Debug)]
pub struct LinkedSelects {
    controls: Vec<Control>,
}

impl LinkedSelects {
    /// Create the pair in its initial state.
    pub fn new() -> Self {
        Self {
            controls: vec![
                Control::Select(Select::new("First", &["A", "B"], "A")),
                Control::Select(Select::new("Second", &["1", "2", "3"], "1")),
            ],
        }
    }

    fn first_value(&self) -> &str {
        self.controls[FIRST]
            .as_select()
            .map(|s| s.value.as_str())
            .unwrap_or_default()
    }
}

impl Default for LinkedSelects {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard for LinkedSelects {
    fn name(&self) -> &'static str {
        "linked-selects"
    }

    fn controls(&self) -> &[Control] {
        &self.controls
    }

    fn chart(&self) -> Option<&Chart> {
        None
    }

    fn on_change(&mut self, change: &ControlChange) -> Result<()> {
        control_mut(&mut self.controls, change.control)?.set_value(&change.new);

        if change.control == FIRST {
            let (options, value): (&[&str], &str) = if self.first_value() == "A" {
                (&["1", "2", "3"], "1")
            } else {
                (&["100", "200", "300"], "100")
            };
            if let Control::Select(second) = &mut self.controls[SECOND] {
                second.set_options(options, value);
            }
        }
        Ok(())
    }
}
