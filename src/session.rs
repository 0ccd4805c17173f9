//! Session composition.
//!
//! A session is the explicit root object tying one dashboard to one process:
//! it resolves the dashboard by name, loads its dataset, and hands the
//! composed dashboard to the app. There is no process-wide registry; the
//! caller owns the session it built.

use std::path::Path;
use std::sync::Arc;

use crate::dashboards::{Dashboard, DashboardKind, Gapminder, LinkedSelects, Literacy};
use crate::data::DataReader;
use crate::error::Result;

/// One served dashboard and its identity.
#[derive(Debug)]
pub struct Session {
    /// Which dashboard this session serves.
    pub kind: DashboardKind,
    /// The composed dashboard.
    pub dashboard: Box<dyn Dashboard>,
}

impl Session {
    /// Resolve a dashboard name, load its dataset from `data_dir`, and
    /// compose the session.
    pub fn build(name: &str, data_dir: &Path) -> Result<Self> {
        let kind = DashboardKind::parse(name)?;
        tracing::info!("Composing session for {}", kind.name());

        let dashboard: Box<dyn Dashboard> = match kind {
            DashboardKind::LinkedSelects => Box::new(LinkedSelects::new()),
            DashboardKind::Literacy => {
                let path = data_dir.join("literacy_birth_rate.csv");
                let table = DataReader::read_literacy(&path)?;
                Box::new(Literacy::from_table(Arc::new(table))?)
            }
            DashboardKind::Gapminder => {
                let path = data_dir.join("gapminder_tidy.csv");
                let table = DataReader::read_gapminder(&path)?;
                Box::new(Gapminder::from_table(Arc::new(table))?)
            }
        };

        Ok(Self { kind, dashboard })
    }

    /// Title line for the session.
    pub fn title(&self) -> String {
        format!("rosling - {}", self.kind.name())
    }
}
