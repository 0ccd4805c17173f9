//! Column-oriented tabular datasets.
//!
//! A [`Table`] is loaded once per session and treated as read-only afterwards,
//! apart from a single mean-imputation pass over numeric columns at load time.
//! Tables may carry an integer year index for row slicing.

use crate::data::{DataBundle, Series};
use crate::error::{Result, RoslingError};

/// A single named column of a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric values; missing cells are NaN until imputation.
    Numeric(Vec<f64>),
    /// Text values; missing cells are empty strings.
    Text(Vec<String>),
}

impl Column {
    /// Number of cells in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    /// True if the column holds no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Column-oriented in-memory dataset.
#[derive(Debug, Clone)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
    years: Option<Vec<i64>>,
    rows: usize,
}

impl Table {
    /// Build a table from named columns, validating equal lengths.
    pub fn from_columns(names: Vec<String>, columns: Vec<Column>) -> Result<Self> {
        let rows = columns.first().map(|c| c.len()).unwrap_or(0);
        for (name, column) in names.iter().zip(&columns) {
            if column.len() != rows {
                return Err(RoslingError::LengthMismatch {
                    name: name.clone(),
                    len: column.len(),
                    expected: rows,
                });
            }
        }
        Ok(Self {
            names,
            columns,
            years: None,
            rows,
        })
    }

    /// Attach a year index of one entry per row.
    pub fn with_year_index(mut self, years: Vec<i64>) -> Result<Self> {
        if years.len() != self.rows {
            return Err(RoslingError::LengthMismatch {
                name: "Year".to_string(),
                len: years.len(),
                expected: self.rows,
            });
        }
        self.years = Some(years);
        Ok(self)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// True if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in load order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| RoslingError::column_not_found(name))
    }

    /// Numeric values of a column.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        match self.column(name)? {
            Column::Numeric(v) => Ok(v),
            Column::Text(_) => Err(RoslingError::ColumnKind {
                name: name.to_string(),
                expected: "numeric",
            }),
        }
    }

    /// Text values of a column.
    pub fn text(&self, name: &str) -> Result<&[String]> {
        match self.column(name)? {
            Column::Text(v) => Ok(v),
            Column::Numeric(_) => Err(RoslingError::ColumnKind {
                name: name.to_string(),
                expected: "text",
            }),
        }
    }

    /// Replace missing (non-finite) numeric cells with the column mean.
    ///
    /// Text columns are left untouched. A column with no finite values keeps
    /// its NaNs since no mean exists for it.
    pub fn impute_missing(&mut self) {
        for (name, column) in self.names.iter().zip(self.columns.iter_mut()) {
            let Column::Numeric(values) = column else {
                continue;
            };
            let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
            if finite.is_empty() || finite.len() == values.len() {
                continue;
            }
            let mean = finite.iter().sum::<f64>() / finite.len() as f64;
            let mut imputed = 0usize;
            for value in values.iter_mut() {
                if !value.is_finite() {
                    *value = mean;
                    imputed += 1;
                }
            }
            tracing::debug!("Imputed {} cells in '{}' with mean {}", imputed, name, mean);
        }
    }

    /// The year index, if the table has one.
    pub fn years(&self) -> Option<&[i64]> {
        self.years.as_deref()
    }

    /// First and last year present in the index.
    pub fn year_span(&self) -> Option<(i64, i64)> {
        let years = self.years.as_deref()?;
        let first = years.iter().copied().min()?;
        let last = years.iter().copied().max()?;
        Some((first, last))
    }

    /// Row indices matching a year, in table order.
    pub fn year_rows(&self, year: i64) -> Result<Vec<usize>> {
        let years = self.years.as_deref().ok_or(RoslingError::NoYearIndex)?;
        let rows: Vec<usize> = years
            .iter()
            .enumerate()
            .filter(|(_, y)| **y == year)
            .map(|(i, _)| i)
            .collect();
        if rows.is_empty() {
            return Err(RoslingError::YearNotFound { year });
        }
        Ok(rows)
    }

    /// Slice a numeric column at the given row indices.
    pub fn slice_numeric(&self, name: &str, rows: &[usize]) -> Result<Vec<f64>> {
        let values = self.numeric(name)?;
        Ok(rows.iter().map(|&i| values[i]).collect())
    }

    /// Slice a text column at the given row indices.
    pub fn slice_text(&self, name: &str, rows: &[usize]) -> Result<Vec<String>> {
        let values = self.text(name)?;
        Ok(rows.iter().map(|&i| values[i].clone()).collect())
    }

    /// Min and max of a numeric column over all rows, ignoring non-finite cells.
    pub fn min_max(&self, name: &str) -> Result<(f64, f64)> {
        let (min, max) = self
            .numeric(name)?
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });
        if min > max {
            return Err(RoslingError::NoNumericData {
                name: name.to_string(),
            });
        }
        Ok((min, max))
    }

    /// Build a bundle field from a whole numeric column.
    pub fn numeric_series(&self, name: &str) -> Result<Series> {
        Ok(Series::Numeric(self.numeric(name)?.to_vec()))
    }

    /// Derive a two-field `x`/`y` bundle from two numeric columns.
    pub fn xy_bundle(&self, x: &str, y: &str) -> Result<DataBundle> {
        let bundle = DataBundle::new()
            .with_field("x", self.numeric_series(x)?)
            .with_field("y", self.numeric_series(y)?);
        bundle.validate()?;
        Ok(bundle)
    }
}
