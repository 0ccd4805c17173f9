//! CSV dataset readers.
//!
//! Each dashboard assumes a fixed column layout, so the readers here assign
//! names positionally or via serde field names rather than trusting the file's
//! own header row. Numeric cells that are absent or unparsable load as NaN and
//! are mean-imputed before the table is returned.

use super::{Column, Table};
use crate::error::{Result, RoslingError};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Column names assigned positionally to the literacy/birth-rate dataset.
///
/// The trailing space in `"Country "` is part of the original layout.
pub const LITERACY_COLUMNS: [&str; 5] = [
    "Country ",
    "Continent",
    "female_literacy",
    "fertility",
    "population",
];

/// Which positional columns of the literacy dataset are numeric.
const LITERACY_NUMERIC: [bool; 5] = [false, false, true, true, true];

/// One row of the Gapminder dataset, keyed by the file's header names.
#[derive(Debug, Deserialize)]
struct GapminderRecord {
    #[serde(rename = "Year")]
    year: i64,
    #[serde(rename = "Country")]
    country: String,
    region: String,
    fertility: Option<f64>,
    life: Option<f64>,
    population: Option<f64>,
    child_mortality: Option<f64>,
    gdp: Option<f64>,
}

/// CSV dataset reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read the literacy/birth-rate dataset.
    ///
    /// Columns are renamed positionally to [`LITERACY_COLUMNS`]; the file's
    /// header row is discarded. Numeric columns are mean-imputed.
    pub fn read_literacy(path: &Path) -> Result<Table> {
        let file = File::open(path)
            .map_err(|e| RoslingError::file_open(path.to_path_buf(), e))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut columns: Vec<Column> = LITERACY_NUMERIC
            .iter()
            .map(|&numeric| {
                if numeric {
                    Column::Numeric(Vec::new())
                } else {
                    Column::Text(Vec::new())
                }
            })
            .collect();

        for record in rdr.records() {
            let record = record?;
            for (i, column) in columns.iter_mut().enumerate() {
                let cell = record.get(i).map(str::trim).unwrap_or("");
                match column {
                    Column::Numeric(values) => {
                        values.push(cell.parse().unwrap_or(f64::NAN));
                    }
                    Column::Text(values) => {
                        values.push(cell.to_string());
                    }
                }
            }
        }

        if columns[0].is_empty() {
            return Err(RoslingError::EmptyDataset {
                path: path.to_path_buf(),
            });
        }

        let names = LITERACY_COLUMNS.iter().map(|s| s.to_string()).collect();
        let mut table = Table::from_columns(names, columns)?;
        table.impute_missing();
        tracing::info!("Loaded {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    /// Read the Gapminder dataset, indexed by `Year`.
    ///
    /// Numeric columns are mean-imputed.
    pub fn read_gapminder(path: &Path) -> Result<Table> {
        let file = File::open(path)
            .map_err(|e| RoslingError::file_open(path.to_path_buf(), e))?;
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

        let mut years = Vec::new();
        let mut country = Vec::new();
        let mut region = Vec::new();
        let mut fertility = Vec::new();
        let mut life = Vec::new();
        let mut population = Vec::new();
        let mut child_mortality = Vec::new();
        let mut gdp = Vec::new();

        for result in rdr.deserialize() {
            let record: GapminderRecord = result?;
            years.push(record.year);
            country.push(record.country);
            region.push(record.region);
            fertility.push(record.fertility.unwrap_or(f64::NAN));
            life.push(record.life.unwrap_or(f64::NAN));
            population.push(record.population.unwrap_or(f64::NAN));
            child_mortality.push(record.child_mortality.unwrap_or(f64::NAN));
            gdp.push(record.gdp.unwrap_or(f64::NAN));
        }

        if years.is_empty() {
            return Err(RoslingError::EmptyDataset {
                path: path.to_path_buf(),
            });
        }

        let names = vec![
            "country".to_string(),
            "region".to_string(),
            "fertility".to_string(),
            "life".to_string(),
            "population".to_string(),
            "child_mortality".to_string(),
            "gdp".to_string(),
        ];
        let columns = vec![
            Column::Text(country),
            Column::Text(region),
            Column::Numeric(fertility),
            Column::Numeric(life),
            Column::Numeric(population),
            Column::Numeric(child_mortality),
            Column::Numeric(gdp),
        ];

        let mut table = Table::from_columns(names, columns)?.with_year_index(years)?;
        table.impute_missing();
        tracing::info!("Loaded {} rows from {}", table.len(), path.display());
        Ok(table)
    }
}
