//! Rosling - a terminal-based interactive dashboard viewer for tabular data.
//!
//! Rosling serves small keyboard-driven dashboards over CSV datasets: dropdowns
//! and sliders on the left, a scatter chart on the right. Changing a control
//! re-derives the chart's data bundle, axis labels, ranges, and title in a
//! single synchronous update.
//!
//! # Features
//!
//! - Column-oriented CSV loading with mean imputation of missing values
//! - Dropdown and slider controls with change-event dispatch
//! - Scatter charts with categorical coloring and point inspection
//! - Table view of the chart's backing data bundle
//! - Gruvbox color themes
//! - Clipboard export of the current data bundle
//!
//! # Example
//!
//! ```ignore
//! use rosling::session::Session;
//! use std::path::Path;
//!
//! // Compose a dashboard session
//! let session = Session::build("gapminder", Path::new("data"))?;
//! println!("Serving {}", session.kind.name());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod controls;
pub mod dashboards;
pub mod data;
pub mod error;
pub mod session;
pub mod ui;
pub mod util;

pub use error::{Result, RoslingError};
