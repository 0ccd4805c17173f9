//! Loading and table behavior tests.

use std::io::Write;
use std::path::PathBuf;

use rosling::dashboards::Dashboard;
use rosling::data::{Column, DataReader, Table, LITERACY_COLUMNS};
use rosling::RoslingError;

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const LITERACY_CSV: &str = "\
Country,Continent,female literacy rate (%),fertility,population
Chine,ASI,90.5,1.769,1324655000
Inde,ASI,50.8,2.682,1139964932
USA,NAM,99.0,2.077,304060000
Indonesie,ASI,,2.132,227345082
";

const GAPMINDER_CSV: &str = "\
Country,Year,fertility,life,population,child_mortality,gdp,region
India,1964,5.9,44.0,470000000,230.0,980.0,South Asia
Norway,1964,2.9,73.5,3700000,17.0,12500.0,Europe & Central Asia
India,1970,5.6,48.4,550000000,202.0,1200.0,South Asia
Norway,1970,2.5,74.2,3900000,14.6,16900.0,Europe & Central Asia
";

#[test]
fn literacy_columns_are_renamed_positionally() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "literacy_birth_rate.csv", LITERACY_CSV);

    let table = DataReader::read_literacy(&path).unwrap();
    assert_eq!(table.column_names(), LITERACY_COLUMNS);
    assert_eq!(table.len(), 4);
    assert_eq!(table.text("Country ").unwrap()[0], "Chine");
}

#[test]
fn missing_numeric_cells_are_imputed_with_column_mean() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "literacy_birth_rate.csv", LITERACY_CSV);

    let table = DataReader::read_literacy(&path).unwrap();
    let literacy = table.numeric("female_literacy").unwrap();

    let mean = (90.5 + 50.8 + 99.0) / 3.0;
    assert!((literacy[3] - mean).abs() < 1e-9);
    assert!(literacy.iter().all(|v| v.is_finite()));
}

#[test]
fn empty_literacy_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "literacy_birth_rate.csv",
        "Country,Continent,a,b,c\n",
    );

    let err = DataReader::read_literacy(&path).unwrap_err();
    assert!(matches!(err, RoslingError::EmptyDataset { .. }));
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.csv");

    let err = DataReader::read_literacy(&path).unwrap_err();
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn gapminder_is_indexed_by_year() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "gapminder_tidy.csv", GAPMINDER_CSV);

    let table = DataReader::read_gapminder(&path).unwrap();
    assert_eq!(table.year_span(), Some((1964, 1970)));
    assert_eq!(table.year_rows(1970).unwrap(), [2, 3]);
    assert_eq!(
        table.slice_text("country", &[2, 3]).unwrap(),
        ["India", "Norway"]
    );
    assert_eq!(table.slice_numeric("life", &[2, 3]).unwrap(), [48.4, 74.2]);
}

#[test]
fn gapminder_min_max_spans_all_years() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "gapminder_tidy.csv", GAPMINDER_CSV);

    let table = DataReader::read_gapminder(&path).unwrap();
    assert_eq!(table.min_max("fertility").unwrap(), (2.5, 5.9));
    assert_eq!(table.min_max("gdp").unwrap(), (980.0, 16900.0));
}

#[test]
fn year_without_rows_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "gapminder_tidy.csv", GAPMINDER_CSV);

    let table = DataReader::read_gapminder(&path).unwrap();
    let err = table.year_rows(1999).unwrap_err();
    assert!(matches!(err, RoslingError::YearNotFound { year: 1999 }));
}

#[test]
fn session_composes_gapminder_from_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(&dir, "gapminder_tidy.csv", GAPMINDER_CSV);

    let session = rosling::session::Session::build("gapminder", dir.path()).unwrap();
    assert_eq!(session.kind.name(), "gapminder");

    let chart = session.dashboard.chart().unwrap();
    assert_eq!(chart.title, "Gapminder data for 1970");
    assert_eq!(session.dashboard.controls().len(), 3);
}

#[test]
fn session_rejects_unknown_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let err = rosling::session::Session::build("histogram", dir.path()).unwrap_err();
    assert!(matches!(err, RoslingError::UnknownDashboard { .. }));
}

#[test]
fn table_rejects_mismatched_column_lengths() {
    let names = vec!["a".to_string(), "b".to_string()];
    let columns = vec![
        Column::Numeric(vec![1.0, 2.0]),
        Column::Numeric(vec![1.0]),
    ];

    let err = Table::from_columns(names, columns).unwrap_err();
    assert!(matches!(err, RoslingError::LengthMismatch { .. }));
}

#[test]
fn wrong_column_kind_is_an_error() {
    let names = vec!["region".to_string()];
    let columns = vec![Column::Text(vec!["Europe".into()])];
    let table = Table::from_columns(names, columns).unwrap();

    assert!(matches!(
        table.numeric("region").unwrap_err(),
        RoslingError::ColumnKind { .. }
    ));
    assert!(matches!(
        table.numeric("bogus").unwrap_err(),
        RoslingError::ColumnNotFound { .. }
    ));
}

#[test]
fn all_missing_column_is_left_unimputed() {
    let names = vec!["a".to_string()];
    let columns = vec![Column::Numeric(vec![f64::NAN, f64::NAN])];
    let mut table = Table::from_columns(names, columns).unwrap();

    table.impute_missing();
    assert!(table.numeric("a").unwrap().iter().all(|v| v.is_nan()));
    assert!(matches!(
        table.min_max("a").unwrap_err(),
        RoslingError::NoNumericData { .. }
    ));
}
