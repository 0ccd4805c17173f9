//! Dashboard implementations.
//!
//! A dashboard owns its controls and optional chart and reacts to control
//! changes delivered by the host event loop. Handlers run to completion one
//! at a time, so the chart moves between consistent states atomically from
//! the caller's perspective.

pub mod gapminder;
pub mod linked_selects;
pub mod literacy;

pub use gapminder::Gapminder;
pub use linked_selects::LinkedSelects;
pub use literacy::Literacy;

use crate::chart::Chart;
use crate::controls::{Control, ControlChange};
use crate::error::{Result, RoslingError};

/// A keyboard-driven dashboard: controls plus an optional chart.
pub trait Dashboard: std::fmt::Debug {
    /// Short name shown in the UI.
    fn name(&self) -> &'static str;

    /// The dashboard's controls, in layout order.
    fn controls(&self) -> &[Control];

    /// The chart, for dashboards that have one.
    fn chart(&self) -> Option<&Chart>;

    /// Apply a control change: record the control's new value, then run the
    /// dashboard's updater.
    fn on_change(&mut self, change: &ControlChange) -> Result<()>;
}

/// The dashboards Rosling can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    /// Two dropdowns where the first rewrites the second's option set.
    LinkedSelects,
    /// Dropdown switching a scatter between two column pairings.
    Literacy,
    /// Year slider plus axis dropdowns over the Gapminder dataset.
    Gapminder,
}

impl DashboardKind {
    /// Every dashboard, in listing order.
    pub const ALL: [DashboardKind; 3] = [
        DashboardKind::LinkedSelects,
        DashboardKind::Literacy,
        DashboardKind::Gapminder,
    ];

    /// Resolve a dashboard from its CLI name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "linked-selects" => Ok(DashboardKind::LinkedSelects),
            "literacy" => Ok(DashboardKind::Literacy),
            "gapminder" => Ok(DashboardKind::Gapminder),
            _ => Err(RoslingError::unknown_dashboard(name)),
        }
    }

    /// The CLI name.
    pub fn name(self) -> &'static str {
        match self {
            DashboardKind::LinkedSelects => "linked-selects",
            DashboardKind::Literacy => "literacy",
            DashboardKind::Gapminder => "gapminder",
        }
    }
}

/// Look up a control mutably, rejecting out-of-range change events.
pub(crate) fn control_mut(controls: &mut [Control], index: usize) -> Result<&mut Control> {
    controls
        .get_mut(index)
        .ok_or(RoslingError::ControlNotFound { index })
}
