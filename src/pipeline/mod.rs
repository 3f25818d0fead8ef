//! Pipeline module - orchestrates the analysis steps

pub mod correlation;
pub mod describe;
pub mod insights;
pub mod loader;
pub mod profile;

pub use correlation::*;
pub use describe::*;
pub use insights::*;
pub use loader::*;
pub use profile::*;
