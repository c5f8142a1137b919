//! Configuration options for MIC validation.

use std::fmt;
use std::str::FromStr;

use mic_model::MicError;
use serde::{Deserialize, Serialize};

/// Which comparators survive validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepOperators {
    /// Keep comparators as given.
    #[default]
    All,
    /// Strip every comparator.
    None,
    /// Only the lowest value becomes `<=min` and the highest `>=max`;
    /// everything in between loses its comparator.
    Edges,
}

impl KeepOperators {
    pub fn as_str(self) -> &'static str {
        match self {
            KeepOperators::All => "all",
            KeepOperators::None => "none",
            KeepOperators::Edges => "edges",
        }
    }
}

impl FromStr for KeepOperators {
    type Err = MicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(KeepOperators::All),
            "none" => Ok(KeepOperators::None),
            "edges" => Ok(KeepOperators::Edges),
            other => Err(MicError::InvalidArgument(format!(
                "keep_operators must be one of \"all\", \"none\" or \"edges\", got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for KeepOperators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a validation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Remove missing and blank inputs before processing instead of keeping
    /// them as missing values.
    pub drop_missing: bool,

    /// Comparator policy applied to accepted values.
    pub keep_operators: KeepOperators,

    /// Column being validated, used only to label the diagnostic.
    pub column: Option<String>,

    /// Do not log the diagnostic. It is still returned to the caller.
    pub quiet: bool,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drop_missing(mut self, enable: bool) -> Self {
        self.drop_missing = enable;
        self
    }

    pub fn with_keep_operators(mut self, keep: KeepOperators) -> Self {
        self.keep_operators = keep;
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Opt out of the warning log.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }
}
