//! Flightscope: Flight Cancellation EDA Library
//!
//! A library for exploring flight-cancellation datasets: descriptive
//! statistics, correlation analysis, and cancellation insights.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
