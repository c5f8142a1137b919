//! Shared utilities for MIC crates.
//!
//! Polars `AnyValue` helpers used when measurements are read from tabular data.

pub mod polars;

pub use polars::{any_to_string, any_to_string_non_empty};
