//! Report types shared by the `mic` commands.

use std::path::PathBuf;

use mic_core::{Diagnostic, Mic, mic_p50, mic_p90, stats};
use mic_ingest::ColumnValidation;
use mic_normalization::{Candidate, normalize};
use serde::Serialize;

/// Per-column outcome of `mic validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub values: usize,
    pub valid: usize,
    pub invalid: usize,
    pub invalid_percentage: u32,
    pub min: Option<f64>,
    pub median: Option<f64>,
    pub max: Option<f64>,
    pub mic50: Option<Mic>,
    pub mic90: Option<Mic>,
    pub invalid_inputs: Vec<String>,
}

impl ColumnSummary {
    pub fn from_validation(validation: &ColumnValidation) -> Self {
        let values = &validation.values;
        let diagnostic: &Diagnostic = &validation.diagnostic;
        Self {
            column: validation.column.clone(),
            values: values.len(),
            valid: values.len() - values.missing_count(),
            invalid: diagnostic.invalid_count,
            invalid_percentage: diagnostic.percentage(),
            min: stats::min(values, true),
            median: stats::median(values, true),
            max: stats::max(values, true),
            mic50: mic_p50(values, true).ok().flatten(),
            mic90: mic_p90(values, true).ok().flatten(),
            invalid_inputs: diagnostic.invalid_inputs.clone(),
        }
    }
}

/// Outcome of `mic validate` for one file.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub source: PathBuf,
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
    pub output: Option<PathBuf>,
}

impl ValidationReport {
    pub fn has_invalid(&self) -> bool {
        self.columns.iter().any(|column| column.invalid > 0)
    }

    pub fn total_invalid(&self) -> usize {
        self.columns.iter().map(|column| column.invalid).sum()
    }
}

/// How one raw value fares through normalization and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizeOutcome {
    pub raw: String,
    pub candidate: Option<String>,
    pub mic: Option<Mic>,
    pub note: &'static str,
}

pub fn describe_normalization(raw: &str) -> NormalizeOutcome {
    let (candidate, mic, note) = match normalize(raw) {
        Candidate::Blank => (None, None, "blank"),
        Candidate::Unparseable => (None, None, "no MIC content"),
        Candidate::Value(value) => match Mic::from_canonical(&value) {
            Some(mic) => (Some(value), Some(mic), "valid"),
            None => (Some(value), None, "not a valid MIC level"),
        },
    };
    NormalizeOutcome {
        raw: raw.to_string(),
        candidate,
        mic,
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_each_outcome() {
        assert_eq!(describe_normalization("  ").note, "blank");
        assert_eq!(describe_normalization("R").note, "no MIC content");
        let out_of_table = describe_normalization("3000");
        assert_eq!(out_of_table.candidate.as_deref(), Some("3000"));
        assert_eq!(out_of_table.mic, None);
        let valid = describe_normalization("=> 64");
        assert_eq!(valid.mic.map(Mic::as_str), Some(">=64"));
    }
}
