//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a small flight dataset with known characteristics for testing
///
/// 12 flights, 5 cancelled. Covers every column the default profile
/// expects, with realistic-looking values:
/// - `Airline`: 3 carriers (SkyJet x5, AirFast x4, Nimbus x3)
/// - `Flight_Distance` / `Airline_Rating`: repeated values per route/carrier
/// - `Day_of_Week` / `Month`: integer-coded ordinals
pub fn create_flight_dataframe() -> DataFrame {
    df! {
        "Airline" => ["SkyJet", "SkyJet", "AirFast", "AirFast", "SkyJet", "Nimbus",
                      "Nimbus", "AirFast", "SkyJet", "Nimbus", "AirFast", "SkyJet"],
        "Origin_Airport" => ["JFK", "LAX", "ORD", "JFK", "ATL", "LAX",
                             "ORD", "ATL", "JFK", "LAX", "ORD", "ATL"],
        "Destination_Airport" => ["LAX", "JFK", "ATL", "ORD", "JFK", "ATL",
                                  "LAX", "ORD", "ATL", "ORD", "JFK", "LAX"],
        "Airplane_Type" => ["A320", "B737", "A320", "B737", "E190", "A320",
                            "B737", "E190", "A320", "B737", "E190", "A320"],
        "Flight_Distance" => [2475.0f64, 2475.0, 606.0, 740.0, 760.0, 1946.0,
                              1745.0, 606.0, 760.0, 1745.0, 740.0, 1946.0],
        "Scheduled_Departure_Time" => [8.5f64, 14.25, 6.0, 21.75, 12.0, 9.5,
                                       17.25, 7.0, 19.5, 11.0, 15.75, 22.0],
        "Day_of_Week" => [1i32, 2, 3, 4, 5, 6, 7, 1, 2, 3, 4, 5],
        "Month" => [1i32, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        "Weather_Score" => [0.8f64, 0.3, 0.9, 0.2, 0.7, 0.5, 0.1, 0.95, 0.6, 0.4, 0.85, 0.15],
        "Previous_Flight_Delay_Minutes" => [0.0f64, 45.0, 10.0, 120.0, 0.0, 30.0,
                                            95.0, 5.0, 60.0, 15.0, 0.0, 150.0],
        "Airline_Rating" => [4.5f64, 4.5, 3.2, 3.2, 4.5, 3.9, 3.9, 3.2, 4.5, 3.9, 3.2, 4.5],
        "Passenger_Load" => [0.92f64, 0.78, 0.85, 0.64, 0.88, 0.71, 0.95, 0.55, 0.82, 0.69, 0.76, 0.9],
        "Flight_Cancelled" => [0i32, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1],
    }
    .unwrap()
}

/// Create the minimal aggregation fixture: 4 rows, one categorical
/// column with 2 values appearing twice each, one group fully
/// cancelled, the other fully completed.
///
/// Expectations derive directly: AirFast rate 1.0, SkyJet rate 0.0,
/// mean distance 150.0 for cancelled rows and 350.0 for completed.
pub fn create_aggregation_fixture() -> DataFrame {
    df! {
        "Airline" => ["AirFast", "AirFast", "SkyJet", "SkyJet"],
        "Flight_Distance" => [100.0f64, 200.0, 300.0, 400.0],
        "Flight_Cancelled" => [1i32, 1, 0, 0],
    }
    .unwrap()
}

/// Create a DataFrame with known correlation patterns
pub fn create_correlation_test_dataframe() -> DataFrame {
    df! {
        "a" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "b" => [2.0f64, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0], // Perfectly correlated with a (b = 2*a)
        "c" => [10.0f64, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0], // Negatively correlated with a
        "d" => [5.0f64, 1.0, 8.0, 2.0, 9.0, 3.0, 7.0, 4.0, 6.0, 0.0], // Uncorrelated random
        "constant" => [5.0f64; 10], // Zero variance
    }
    .unwrap()
}

/// Create a larger flight dataset for stress tests
pub fn create_large_flight_dataframe(rows: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let airlines = ["SkyJet", "AirFast", "Nimbus", "CloudLine"];
    let airline: Vec<&str> = (0..rows)
        .map(|_| airlines[rng.gen_range(0..airlines.len())])
        .collect();
    let distance: Vec<f64> = (0..rows).map(|_| rng.gen_range(100.0..3000.0)).collect();
    let weather: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>()).collect();
    let load: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>()).collect();
    let cancelled: Vec<i32> = (0..rows).map(|_| rng.gen_range(0..2)).collect();

    DataFrame::new(vec![
        Column::new("Airline".into(), airline),
        Column::new("Flight_Distance".into(), distance),
        Column::new("Weather_Score".into(), weather),
        Column::new("Passenger_Load".into(), load),
        Column::new("Flight_Cancelled".into(), cancelled),
    ])
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(
        rows, expected_rows,
        "Row count mismatch: expected {}, got {}",
        expected_rows, rows
    );
    assert_eq!(
        cols, expected_cols,
        "Column count mismatch: expected {}, got {}",
        expected_cols, cols
    );
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}
