//! Report module - rendering views and exporting results

pub mod charts;
pub mod distributions;
pub mod insights_export;
pub mod relationships;
pub mod summary;
pub mod target_views;

pub use charts::*;
pub use distributions::*;
pub use insights_export::*;
pub use relationships::*;
pub use summary::*;
pub use target_views::*;
