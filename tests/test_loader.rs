//! Unit tests for dataset loader

use flightscope::pipeline::{get_column_names, load_dataset_with_progress};
use polars::prelude::*;
use std::io::Write;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

/// Write a minimal hand-rolled flights CSV and return its path
fn write_small_flights_csv(dir: &TempDir) -> std::path::PathBuf {
    let csv_path = dir.path().join("flights.csv");
    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "Airline,Flight_Distance,Flight_Cancelled").unwrap();
    writeln!(file, "SkyJet,2475.0,0").unwrap();
    writeln!(file, "AirFast,606.0,1").unwrap();
    writeln!(file, "Nimbus,1946.0,0").unwrap();
    csv_path
}

#[test]
fn test_load_csv_file() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = write_small_flights_csv(&temp_dir);

    let (df, rows, cols, mem_mb) = load_dataset_with_progress(&csv_path, 100).unwrap();

    assert_eq!(rows, 3, "Header row must not count as data");
    assert_eq!(cols, 3);
    assert_eq!(
        df.get_column_names(),
        &["Airline", "Flight_Distance", "Flight_Cancelled"]
    );
    assert!(mem_mb >= 0.0, "Memory estimate should be non-negative");
}

#[test]
fn test_load_flight_csv_roundtrip() {
    let mut df = common::create_flight_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let (loaded, rows, cols, _mem) = load_dataset_with_progress(&csv_path, 100).unwrap();

    common::assert_shape(&loaded, 12, 13);
    assert_eq!(rows, 12);
    assert_eq!(cols, 13);
    common::assert_has_columns(
        &loaded,
        &[
            "Airline",
            "Flight_Distance",
            "Weather_Score",
            "Flight_Cancelled",
        ],
    );
}

#[test]
fn test_load_parquet_file() {
    let mut df = df! {
        "Flight_Distance" => [740.0f64, 760.0, 1745.0],
        "Passenger_Load" => [0.92f64, 0.78, 0.85],
    }
    .unwrap();
    let (_temp_dir, parquet_path) = common::create_temp_parquet(&mut df);

    let (loaded, rows, cols, _mem) = load_dataset_with_progress(&parquet_path, 100).unwrap();

    assert_eq!(rows, 3);
    assert_eq!(cols, 2);
    common::assert_has_columns(&loaded, &["Flight_Distance", "Passenger_Load"]);
}

#[test]
fn test_get_column_names_csv() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = write_small_flights_csv(&temp_dir);

    let columns = get_column_names(&csv_path).unwrap();

    assert_eq!(
        columns,
        vec!["Airline", "Flight_Distance", "Flight_Cancelled"]
    );
}

#[test]
fn test_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let bad_path = temp_dir.path().join("flights.xlsx");
    std::fs::File::create(&bad_path).unwrap();

    let result = load_dataset_with_progress(&bad_path, 100);

    assert!(result.is_err(), "Unsupported format should return error");
    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("Unsupported") || err_msg.contains("format"),
        "Error message should mention unsupported format: {}",
        err_msg
    );
}

#[test]
fn test_nonexistent_file() {
    let path = std::path::Path::new("/nonexistent/path/to/flights.csv");

    let result = load_dataset_with_progress(path, 100);

    assert!(result.is_err(), "Nonexistent file should return error");
    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("not found"),
        "Error message should mention the missing file: {}",
        err_msg
    );
}

#[test]
fn test_csv_type_inference() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("typed.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "Airline,Day_of_Week,Weather_Score").unwrap();
    writeln!(file, "SkyJet,1,0.82").unwrap();
    writeln!(file, "AirFast,5,0.31").unwrap();
    drop(file);

    let (df, rows, cols, _) = load_dataset_with_progress(&csv_path, 100).unwrap();

    assert_eq!(rows, 2);
    assert_eq!(cols, 3);
    assert_eq!(df.column("Airline").unwrap().dtype(), &DataType::String);
    assert!(df.column("Day_of_Week").unwrap().dtype().is_integer());
    assert!(df.column("Weather_Score").unwrap().dtype().is_float());
}

#[test]
fn test_csv_with_missing_values() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("gaps.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "Airline,Flight_Distance,Flight_Cancelled").unwrap();
    writeln!(file, "SkyJet,,0").unwrap();
    writeln!(file, ",606.0,").unwrap();
    writeln!(file, "Nimbus,1946.0,1").unwrap();
    drop(file);

    let (df, rows, cols, _) = load_dataset_with_progress(&csv_path, 100).unwrap();

    assert_eq!(rows, 3);
    assert_eq!(cols, 3);
    assert_eq!(
        df.column("Airline").unwrap().null_count(),
        1,
        "Airline has one empty cell"
    );
    assert_eq!(df.column("Flight_Distance").unwrap().null_count(), 1);
    assert_eq!(df.column("Flight_Cancelled").unwrap().null_count(), 1);
}

#[test]
fn test_large_file_memory_estimate() {
    let mut df = common::create_large_flight_dataframe(1000);
    let (_temp_dir, parquet_path) = common::create_temp_parquet(&mut df);

    let (_, rows, cols, mem_mb) = load_dataset_with_progress(&parquet_path, 100).unwrap();

    assert_eq!(rows, 1000);
    assert_eq!(cols, 5);
    assert!(
        mem_mb > 0.0,
        "Large DataFrame should have positive memory estimate"
    );
}

#[test]
fn test_schema_inference_length() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("delays.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "Previous_Flight_Delay_Minutes").unwrap();
    for minutes in 0..100 {
        writeln!(file, "{}", minutes).unwrap();
    }
    drop(file);

    // Both a short and a full inference window must read every row
    let (df_short, _, _, _) = load_dataset_with_progress(&csv_path, 10).unwrap();
    let (df_full, _, _, _) = load_dataset_with_progress(&csv_path, 1000).unwrap();

    assert_eq!(df_short.height(), 100);
    assert_eq!(df_full.height(), 100);
    assert_eq!(df_short.width(), df_full.width());
}
