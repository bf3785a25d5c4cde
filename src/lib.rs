//! jenkins-report - Jenkins build environment report
//!
//! Reads the variables a Jenkins job runner injects into a build and prints
//! them as a colored, sectioned terminal report. Unset variables print a
//! placeholder; nothing about the environment is treated as an error.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod env;
pub mod report;
pub mod style;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use cli::Reporter;
pub use env::{EnvSource, ProcessEnv};
pub use report::{render, run, Field, Section, SECTIONS};
pub use style::{paint, ColorMode, Style};
