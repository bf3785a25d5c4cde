//! CLI output formatting
//!
//! Human-readable, colored terminal display of the build report.

pub mod display;

pub use display::Reporter;
