//! CLI library components for the `mic` tool.

pub mod logging;
pub mod report;
