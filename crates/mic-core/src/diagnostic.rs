//! Per-call validation diagnostic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregated report of inputs that became missing because they were not
/// valid MICs. Blank or already-missing inputs are never counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Inputs invalidated by validation.
    pub invalid_count: usize,
    /// Non-blank inputs that were evaluated.
    pub evaluated: usize,
    /// Column context supplied by the caller.
    pub column: Option<String>,
    /// Distinct offending raw inputs, sorted.
    pub invalid_inputs: Vec<String>,
}

impl Diagnostic {
    pub fn is_empty(&self) -> bool {
        self.invalid_count == 0
    }

    /// Share of evaluated inputs that were invalidated, rounded half to even.
    pub fn percentage(&self) -> u32 {
        if self.evaluated == 0 {
            return 0;
        }
        let share = 100.0 * self.invalid_count as f64 / self.evaluated as f64;
        share.round_ties_even() as u32
    }

    /// Human-readable warning text.
    pub fn message(&self) -> String {
        let plural = if self.invalid_count == 1 { "" } else { "s" };
        let column = self
            .column
            .as_ref()
            .map(|name| format!(" in column '{name}'"))
            .unwrap_or_default();
        format!(
            "{count} result{plural}{column} truncated ({pct}%) that were invalid MICs: {list}",
            count = self.invalid_count,
            pct = self.percentage(),
            list = quoted_list(&self.invalid_inputs),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// `"a"`, `"a" and "b"`, `"a", "b" and "c"`.
pub fn quoted_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|value| format!("\"{value}\"")).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}
