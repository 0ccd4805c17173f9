//! Chart model - one data bundle plus its visual encodings.
//!
//! A chart owns exactly one [`DataBundle`] together with mutable title, axis
//! labels, and axis ranges. Dashboard updaters mutate these between frames;
//! rendering reads them without further computation.

use crate::data::DataBundle;
use crate::error::Result;

/// Fraction of the data span added on each side when ranges are auto-derived.
const AUTO_RANGE_PADDING: f64 = 0.05;

/// A scatter chart bound to a data bundle.
#[derive(Debug, Clone)]
pub struct Chart {
    /// Chart title.
    pub title: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Explicit x-axis range; `None` derives the range from the bundle.
    pub x_range: Option<(f64, f64)>,
    /// Explicit y-axis range; `None` derives the range from the bundle.
    pub y_range: Option<(f64, f64)>,
    /// Field whose categories pick point colors.
    pub color_field: Option<String>,
    /// Field carrying the size encoding.
    pub size_field: Option<String>,
    /// Field shown when inspecting a point.
    pub hover_field: Option<String>,
    bundle: DataBundle,
}

impl Chart {
    /// Create a chart over a bundle, validating the equal-length invariant.
    pub fn new(bundle: DataBundle) -> Result<Self> {
        bundle.validate()?;
        Ok(Self {
            title: String::new(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            x_range: None,
            y_range: None,
            color_field: None,
            size_field: None,
            hover_field: None,
            bundle,
        })
    }

    /// The bundle currently backing the chart.
    pub fn bundle(&self) -> &DataBundle {
        &self.bundle
    }

    /// Replace the bundle wholesale.
    ///
    /// The replacement is validated first; on a length mismatch the chart
    /// keeps its previous bundle, so readers never observe mixed lengths.
    pub fn replace_bundle(&mut self, bundle: DataBundle) -> Result<()> {
        bundle.validate()?;
        self.bundle = bundle;
        Ok(())
    }

    /// Effective x-axis bounds: the explicit range, or the data span padded.
    pub fn x_bounds(&self) -> (f64, f64) {
        self.x_range.unwrap_or_else(|| self.data_bounds("x"))
    }

    /// Effective y-axis bounds: the explicit range, or the data span padded.
    pub fn y_bounds(&self) -> (f64, f64) {
        self.y_range.unwrap_or_else(|| self.data_bounds("y"))
    }

    fn data_bounds(&self, field: &str) -> (f64, f64) {
        let values = self
            .bundle
            .get(field)
            .and_then(|s| s.as_numeric())
            .unwrap_or(&[]);
        let (min, max) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });
        if min > max {
            return (0.0, 1.0);
        }
        if min == max {
            return (min - 0.5, max + 0.5);
        }
        let pad = (max - min) * AUTO_RANGE_PADDING;
        (min - pad, max + pad)
    }
}
