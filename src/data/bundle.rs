//! Data bundles - the named series backing a chart.
//!
//! A bundle maps short field names (`"x"`, `"y"`, `"country"`, ...) to
//! equal-length series. Charts hold exactly one bundle and updaters replace it
//! wholesale rather than patching individual fields, so a chart never observes
//! sequences of mismatched length.

use crate::error::{Result, RoslingError};

/// A single named sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// Floating-point values.
    Numeric(Vec<f64>),
    /// Categorical or label values.
    Text(Vec<String>),
}

impl Series {
    /// Number of values in the series.
    pub fn len(&self) -> usize {
        match self {
            Series::Numeric(v) => v.len(),
            Series::Text(v) => v.len(),
        }
    }

    /// True if the series holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The numeric values, if this is a numeric series.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Series::Numeric(v) => Some(v),
            Series::Text(_) => None,
        }
    }

    /// The text values, if this is a text series.
    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            Series::Numeric(_) => None,
            Series::Text(v) => Some(v),
        }
    }

    /// Format the value at `index` for display.
    pub fn display(&self, index: usize) -> String {
        match self {
            Series::Numeric(v) => v
                .get(index)
                .map(|x| crate::util::format_number(*x))
                .unwrap_or_default(),
            Series::Text(v) => v.get(index).cloned().unwrap_or_default(),
        }
    }
}

/// Named set of equal-length value series backing a chart.
///
/// Field order is preserved so rendering and export walk the fields in the
/// order the dashboard built them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataBundle {
    fields: Vec<(String, Series)>,
}

impl DataBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any existing field of the same name.
    pub fn insert(&mut self, name: impl Into<String>, series: Series) {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = series;
        } else {
            self.fields.push((name, series));
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_field(mut self, name: impl Into<String>, series: Series) -> Self {
        self.insert(name, series);
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Numeric values of a field.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        self.get(name)
            .ok_or_else(|| RoslingError::column_not_found(name))?
            .as_numeric()
            .ok_or_else(|| RoslingError::ColumnKind {
                name: name.to_string(),
                expected: "numeric",
            })
    }

    /// Text values of a field.
    pub fn text(&self, name: &str) -> Result<&[String]> {
        self.get(name)
            .ok_or_else(|| RoslingError::column_not_found(name))?
            .as_text()
            .ok_or_else(|| RoslingError::ColumnKind {
                name: name.to_string(),
                expected: "text",
            })
    }

    /// Iterate over `(name, series)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.fields.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of rows (length of the first field; 0 for an empty bundle).
    pub fn len(&self) -> usize {
        self.fields.first().map(|(_, s)| s.len()).unwrap_or(0)
    }

    /// True if the bundle holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the equal-length invariant across all fields.
    pub fn validate(&self) -> Result<()> {
        let expected = self.len();
        for (name, series) in &self.fields {
            if series.len() != expected {
                return Err(RoslingError::LengthMismatch {
                    name: name.clone(),
                    len: series.len(),
                    expected,
                });
            }
        }
        Ok(())
    }
}
