//! Unit tests for descriptive statistics

use flightscope::pipeline::{count_categories, numeric_values, quantile_sorted, summarize_numeric};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_numeric_summary_exact_values() {
    let df = df! {
        "x" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
    }
    .unwrap();

    let summary = summarize_numeric(&df, "x").unwrap().unwrap();

    assert_eq!(summary.count, 5);
    assert_eq!(summary.null_count, 0);
    assert!((summary.mean - 3.0).abs() < 1e-10);
    assert!(
        (summary.std - 2.5f64.sqrt()).abs() < 1e-10,
        "Sample std of 1..5 should be sqrt(2.5), got {}",
        summary.std
    );
    assert_eq!(summary.min, 1.0);
    assert!((summary.q1 - 2.0).abs() < 1e-10);
    assert!((summary.median - 3.0).abs() < 1e-10);
    assert!((summary.q3 - 4.0).abs() < 1e-10);
    assert_eq!(summary.max, 5.0);
}

#[test]
fn test_numeric_summary_skips_nulls() {
    let df = df! {
        "x" => [Some(1.0f64), None, Some(3.0)],
    }
    .unwrap();

    let summary = summarize_numeric(&df, "x").unwrap().unwrap();

    assert_eq!(summary.count, 2);
    assert_eq!(summary.null_count, 1);
    assert!((summary.mean - 2.0).abs() < 1e-10);
}

#[test]
fn test_numeric_summary_single_value() {
    let df = df! {
        "x" => [7.0f64],
    }
    .unwrap();

    let summary = summarize_numeric(&df, "x").unwrap().unwrap();

    assert_eq!(summary.count, 1);
    assert_eq!(summary.std, 0.0, "Single value has zero sample std");
    assert_eq!(summary.min, 7.0);
    assert_eq!(summary.max, 7.0);
}

#[test]
fn test_numeric_summary_absent_column() {
    let df = common::create_flight_dataframe();

    let summary = summarize_numeric(&df, "No_Such_Column").unwrap();

    assert!(summary.is_none(), "Absent column should yield no summary");
}

#[test]
fn test_numeric_summary_all_null_column() {
    let df = df! {
        "x" => [None::<f64>, None, None],
    }
    .unwrap();

    let summary = summarize_numeric(&df, "x").unwrap();

    assert!(summary.is_none(), "All-null column should yield no summary");
}

#[test]
fn test_numeric_values_ignores_non_numeric() {
    let df = common::create_flight_dataframe();

    let values = numeric_values(&df, "Airline").unwrap();

    assert!(
        values.is_none(),
        "A string column has no numeric values to summarize"
    );
}

#[test]
fn test_quantile_interpolation() {
    let sorted = [1.0f64, 2.0, 3.0, 4.0];

    assert!((quantile_sorted(&sorted, 0.0) - 1.0).abs() < 1e-10);
    assert!((quantile_sorted(&sorted, 0.5) - 2.5).abs() < 1e-10);
    assert!((quantile_sorted(&sorted, 1.0) - 4.0).abs() < 1e-10);
}

#[test]
fn test_category_counts_sum_equals_row_count() {
    let df = common::create_flight_dataframe();

    for column in ["Airline", "Origin_Airport", "Airplane_Type"] {
        let counts = count_categories(&df, column).unwrap().unwrap();
        assert_eq!(
            counts.total() + counts.null_count,
            df.height(),
            "Counts for '{}' should cover every row",
            column
        );
    }
}

#[test]
fn test_category_counts_ordering() {
    let df = common::create_flight_dataframe();

    let counts = count_categories(&df, "Airline").unwrap().unwrap();

    assert_eq!(counts.counts[0], ("SkyJet".to_string(), 5));
    assert_eq!(counts.counts[1], ("AirFast".to_string(), 4));
    assert_eq!(counts.counts[2], ("Nimbus".to_string(), 3));
    assert_eq!(counts.distinct(), 3);
}

#[test]
fn test_category_counts_with_nulls() {
    let df = df! {
        "airline" => [Some("A"), None, Some("B"), Some("A")],
    }
    .unwrap();

    let counts = count_categories(&df, "airline").unwrap().unwrap();

    assert_eq!(counts.total(), 3);
    assert_eq!(counts.null_count, 1);
    assert_eq!(counts.counts[0], ("A".to_string(), 2));
}

#[test]
fn test_category_counts_absent_column() {
    let df = common::create_flight_dataframe();

    let counts = count_categories(&df, "No_Such_Column").unwrap();

    assert!(counts.is_none());
}

#[test]
fn test_category_counts_integer_column() {
    // Ordinal columns are counted through their integer labels
    let df = common::create_flight_dataframe();

    let counts = count_categories(&df, "Day_of_Week").unwrap().unwrap();

    assert_eq!(counts.distinct(), 7);
    assert_eq!(counts.total(), df.height());
}
