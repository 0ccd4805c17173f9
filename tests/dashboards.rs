//! Behavioral tests for the three dashboards.

use std::sync::Arc;

use rosling::controls::{Control, ControlChange, ControlValue};
use rosling::dashboards::{
    gapminder, linked_selects, literacy, Dashboard, Gapminder, LinkedSelects, Literacy,
};
use rosling::data::{Column, DataBundle, Series, Table};
use rosling::RoslingError;

fn choice(s: &str) -> ControlValue {
    ControlValue::Choice(s.to_string())
}

fn change(control: usize, old: ControlValue, new: ControlValue) -> ControlChange {
    ControlChange { control, old, new }
}

fn select_state(control: &Control) -> (Vec<String>, String) {
    let select = control.as_select().expect("control is a select");
    (select.options.clone(), select.value.clone())
}

// --- linked-selects -------------------------------------------------------

#[test]
fn linked_selects_initial_state() {
    let dash = LinkedSelects::new();
    let (options, value) = select_state(&dash.controls()[linked_selects::SECOND]);
    assert_eq!(options, ["1", "2", "3"]);
    assert_eq!(value, "1");
    assert!(dash.chart().is_none());
}

#[test]
fn selecting_b_rewrites_second_options() {
    let mut dash = LinkedSelects::new();
    dash.on_change(&change(linked_selects::FIRST, choice("A"), choice("B")))
        .unwrap();

    let (options, value) = select_state(&dash.controls()[linked_selects::SECOND]);
    assert_eq!(options, ["100", "200", "300"]);
    assert_eq!(value, "100");
}

#[test]
fn selecting_a_restores_second_options() {
    let mut dash = LinkedSelects::new();
    dash.on_change(&change(linked_selects::FIRST, choice("A"), choice("B")))
        .unwrap();
    dash.on_change(&change(linked_selects::FIRST, choice("B"), choice("A")))
        .unwrap();

    let pristine = LinkedSelects::new();
    assert_eq!(dash.controls(), pristine.controls());
}

#[test]
fn second_select_change_does_not_touch_first() {
    let mut dash = LinkedSelects::new();
    dash.on_change(&change(linked_selects::SECOND, choice("1"), choice("3")))
        .unwrap();

    let (_, first_value) = select_state(&dash.controls()[linked_selects::FIRST]);
    let (options, value) = select_state(&dash.controls()[linked_selects::SECOND]);
    assert_eq!(first_value, "A");
    assert_eq!(options, ["1", "2", "3"]);
    assert_eq!(value, "3");
}

#[test]
fn out_of_range_control_is_rejected() {
    let mut dash = LinkedSelects::new();
    let err = dash
        .on_change(&change(5, choice("A"), choice("B")))
        .unwrap_err();
    assert!(matches!(err, RoslingError::ControlNotFound { index: 5 }));
}

// --- literacy -------------------------------------------------------------

fn literacy_table() -> Arc<Table> {
    let names = rosling::data::LITERACY_COLUMNS
        .iter()
        .map(|s| s.to_string())
        .collect();
    let columns = vec![
        Column::Text(vec!["Chine".into(), "Inde".into(), "USA".into()]),
        Column::Text(vec!["ASI".into(), "ASI".into(), "NAM".into()]),
        Column::Numeric(vec![90.5, 50.8, 99.0]),
        Column::Numeric(vec![1.769, 2.682, 2.077]),
        Column::Numeric(vec![1_324_655_000.0, 1_139_964_932.0, 304_060_000.0]),
    ];
    Arc::new(Table::from_columns(names, columns).unwrap())
}

#[test]
fn literacy_initial_bundle_pairs_fertility_with_literacy() {
    let table = literacy_table();
    let dash = Literacy::from_table(table.clone()).unwrap();

    let bundle = dash.chart().unwrap().bundle();
    assert_eq!(bundle.numeric("x").unwrap(), table.numeric("fertility").unwrap());
    assert_eq!(
        bundle.numeric("y").unwrap(),
        table.numeric("female_literacy").unwrap()
    );
}

#[test]
fn selecting_population_switches_y_only() {
    let table = literacy_table();
    let mut dash = Literacy::from_table(table.clone()).unwrap();

    dash.on_change(&change(
        literacy::DISTRIBUTION,
        choice("female_literacy"),
        choice("population"),
    ))
    .unwrap();

    let bundle = dash.chart().unwrap().bundle();
    assert_eq!(bundle.numeric("x").unwrap(), table.numeric("fertility").unwrap());
    assert_eq!(
        bundle.numeric("y").unwrap(),
        table.numeric("population").unwrap()
    );
}

#[test]
fn literacy_updater_is_idempotent() {
    let table = literacy_table();
    let mut dash = Literacy::from_table(table).unwrap();
    let event = change(
        literacy::DISTRIBUTION,
        choice("female_literacy"),
        choice("population"),
    );

    dash.on_change(&event).unwrap();
    let once = dash.chart().unwrap().bundle().clone();
    dash.on_change(&event).unwrap();
    let twice = dash.chart().unwrap().bundle().clone();

    assert_eq!(once, twice);
}

#[test]
fn literacy_round_trip_restores_bundle() {
    let table = literacy_table();
    let mut dash = Literacy::from_table(table).unwrap();
    let initial = dash.chart().unwrap().bundle().clone();

    dash.on_change(&change(
        literacy::DISTRIBUTION,
        choice("female_literacy"),
        choice("population"),
    ))
    .unwrap();
    dash.on_change(&change(
        literacy::DISTRIBUTION,
        choice("population"),
        choice("female_literacy"),
    ))
    .unwrap();

    assert_eq!(dash.chart().unwrap().bundle(), &initial);
}

// --- gapminder ------------------------------------------------------------

/// Three years of a toy Gapminder table; 1970 holds rows 2..=4.
fn gapminder_table() -> Arc<Table> {
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
        Column::Text(vec![
            "India".into(),
            "Norway".into(),
            "India".into(),
            "Norway".into(),
            "Kenya".into(),
            "India".into(),
        ]),
        Column::Text(vec![
            "South Asia".into(),
            "Europe & Central Asia".into(),
            "South Asia".into(),
            "Europe & Central Asia".into(),
            "Sub-Saharan Africa".into(),
            "South Asia".into(),
        ]),
        Column::Numeric(vec![5.9, 2.9, 5.6, 2.5, 8.1, 2.6]),
        Column::Numeric(vec![44.0, 73.5, 48.4, 74.2, 52.8, 64.4]),
        Column::Numeric(vec![
            4.7e8, 3.7e6, 5.5e8, 3.9e6, 1.1e7, 1.2e9,
        ]),
        Column::Numeric(vec![230.0, 17.0, 202.0, 14.6, 144.0, 66.0]),
        Column::Numeric(vec![980.0, 12500.0, 1200.0, 16900.0, 1400.0, 3400.0]),
    ];
    let years = vec![1964, 1964, 1970, 1970, 1970, 2006];
    Arc::new(
        Table::from_columns(names, columns)
            .unwrap()
            .with_year_index(years)
            .unwrap(),
    )
}

#[test]
fn gapminder_initial_state_matches_1970_slice() {
    let table = gapminder_table();
    let dash = Gapminder::from_table(table.clone()).unwrap();
    let chart = dash.chart().unwrap();
    let bundle = chart.bundle();

    assert_eq!(chart.title, "Gapminder data for 1970");
    assert_eq!(
        bundle.text("country").unwrap(),
        ["India", "Norway", "Kenya"]
    );
    assert_eq!(
        bundle.text("region").unwrap(),
        ["South Asia", "Europe & Central Asia", "Sub-Saharan Africa"]
    );
    assert_eq!(bundle.numeric("x").unwrap(), [5.6, 2.5, 8.1]);
    assert_eq!(bundle.numeric("y").unwrap(), [48.4, 74.2, 52.8]);

    let expected_pop: Vec<f64> = [5.5e8, 3.9e6, 1.1e7]
        .iter()
        .map(|p| p / 20_000_000.0 + 2.0)
        .collect();
    assert_eq!(bundle.numeric("pop").unwrap(), expected_pop);
}

#[test]
fn gapminder_axis_ranges_span_all_years() {
    let table = gapminder_table();
    let dash = Gapminder::from_table(table.clone()).unwrap();
    let chart = dash.chart().unwrap();

    // Global extrema, not the 1970 slice's.
    assert_eq!(chart.x_range, Some((2.5, 8.1)));
    assert_eq!(chart.y_range, Some((44.0, 74.2)));
}

#[test]
fn gapminder_axis_labels_use_lookup_with_fallback() {
    let table = gapminder_table();
    let mut dash = Gapminder::from_table(table).unwrap();
    {
        let chart = dash.chart().unwrap();
        assert_eq!(chart.x_label, "Fertility (children per woman)");
        assert_eq!(chart.y_label, "Life Expectancy (years)");
    }

    dash.on_change(&change(
        gapminder::X_AXIS,
        choice("fertility"),
        choice("gdp"),
    ))
    .unwrap();

    let chart = dash.chart().unwrap();
    assert_eq!(chart.x_label, "gdp");
    assert_eq!(chart.x_range, Some((980.0, 16900.0)));
    assert_eq!(chart.bundle().numeric("x").unwrap(), [1200.0, 16900.0, 1400.0]);
}

#[test]
fn gapminder_year_change_reslices_and_retitles() {
    let table = gapminder_table();
    let mut dash = Gapminder::from_table(table).unwrap();

    dash.on_change(&change(
        gapminder::YEAR,
        ControlValue::Number(1970),
        ControlValue::Number(2006),
    ))
    .unwrap();

    let chart = dash.chart().unwrap();
    assert_eq!(chart.title, "Gapminder data for 2006");
    assert_eq!(chart.bundle().text("country").unwrap(), ["India"]);
    // Ranges are global and therefore unchanged by the year.
    assert_eq!(chart.x_range, Some((2.5, 8.1)));
}

#[test]
fn gapminder_missing_year_is_an_error() {
    let table = gapminder_table();
    let mut dash = Gapminder::from_table(table).unwrap();

    let err = dash
        .on_change(&change(
            gapminder::YEAR,
            ControlValue::Number(1970),
            ControlValue::Number(1965),
        ))
        .unwrap_err();
    assert!(matches!(err, RoslingError::YearNotFound { year: 1965 }));
}

#[test]
fn gapminder_round_trip_restores_chart() {
    let table = gapminder_table();
    let mut dash = Gapminder::from_table(table).unwrap();
    let initial_bundle = dash.chart().unwrap().bundle().clone();
    let initial_title = dash.chart().unwrap().title.clone();

    dash.on_change(&change(
        gapminder::Y_AXIS,
        choice("life"),
        choice("child_mortality"),
    ))
    .unwrap();
    dash.on_change(&change(
        gapminder::Y_AXIS,
        choice("child_mortality"),
        choice("life"),
    ))
    .unwrap();

    let chart = dash.chart().unwrap();
    assert_eq!(chart.bundle(), &initial_bundle);
    assert_eq!(chart.title, initial_title);
    assert_eq!(chart.y_label, "Life Expectancy (years)");
}

#[test]
fn gapminder_requires_year_index() {
    let names = vec!["fertility".to_string()];
    let columns = vec![Column::Numeric(vec![1.0])];
    let table = Arc::new(Table::from_columns(names, columns).unwrap());

    let err = Gapminder::from_table(table).unwrap_err();
    assert!(matches!(err, RoslingError::NoYearIndex));
}

// --- chart/bundle invariants ---------------------------------------------

#[test]
fn mismatched_bundle_is_rejected_and_chart_keeps_old_data() {
    let table = literacy_table();
    let dash = Literacy::from_table(table).unwrap();
    let mut chart = dash.chart().unwrap().clone();

    let bad = DataBundle::new()
        .with_field("x", Series::Numeric(vec![1.0, 2.0]))
        .with_field("y", Series::Numeric(vec![1.0]));
    let err = chart.replace_bundle(bad).unwrap_err();

    assert!(matches!(err, RoslingError::LengthMismatch { .. }));
    assert_eq!(chart.bundle().len(), 3);
}
