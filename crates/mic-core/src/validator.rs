//! Batch validation: normalize, look up, aggregate one diagnostic.

use std::collections::BTreeSet;

use mic_model::Mic;
use mic_normalization::{Candidate, normalize};
use tracing::{debug, warn};

use crate::diagnostic::Diagnostic;
use crate::input::RawInput;
use crate::options::ValidationOptions;
use crate::rescale::apply_operator_policy;
use crate::vector::MicVector;

/// Result of a validation call.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub values: MicVector,
    pub diagnostic: Diagnostic,
}

impl Validated {
    pub fn into_values(self) -> MicVector {
        self.values
    }
}

/// Outcome for a single element.
enum Outcome {
    Blank,
    Accepted(Mic),
    Rejected(String),
}

fn classify(raw: RawInput) -> Outcome {
    let text = match raw {
        RawInput::Mic(mic) => return Outcome::Accepted(mic),
        other => match other.to_text() {
            Some(text) => text,
            None => return Outcome::Blank,
        },
    };
    match normalize(&text) {
        Candidate::Blank => Outcome::Blank,
        Candidate::Unparseable => Outcome::Rejected(text),
        Candidate::Value(candidate) => match Mic::from_canonical(&candidate) {
            Some(mic) => Outcome::Accepted(mic),
            None => Outcome::Rejected(text),
        },
    }
}

/// Validate a batch of raw inputs.
///
/// Per-element problems never fail the call: unparseable and out-of-table
/// inputs become missing and are aggregated into the returned
/// [`Diagnostic`], which is also logged once at warn level unless
/// [`ValidationOptions::quiet`] was requested.
pub fn validate<I, T>(inputs: I, options: &ValidationOptions) -> Validated
where
    I: IntoIterator<Item = T>,
    T: Into<RawInput>,
{
    let mut values = Vec::new();
    let mut evaluated = 0usize;
    let mut invalid_count = 0usize;
    let mut invalid_inputs = BTreeSet::new();

    for raw in inputs {
        match classify(raw.into()) {
            Outcome::Blank if options.drop_missing => {}
            Outcome::Blank => values.push(None),
            Outcome::Accepted(mic) => {
                evaluated += 1;
                values.push(Some(mic));
            }
            Outcome::Rejected(text) => {
                evaluated += 1;
                invalid_count += 1;
                invalid_inputs.insert(text);
                values.push(None);
            }
        }
    }

    let values = apply_operator_policy(MicVector::from(values), options.keep_operators);
    let diagnostic = Diagnostic {
        invalid_count,
        evaluated,
        column: options.column.clone(),
        invalid_inputs: invalid_inputs.into_iter().collect(),
    };

    if diagnostic.is_empty() {
        debug!(
            count = values.len(),
            column = options.column.as_deref(),
            "validated MIC values"
        );
    } else if !options.quiet {
        warn!(
            invalid_count = diagnostic.invalid_count,
            percentage = diagnostic.percentage(),
            column = options.column.as_deref(),
            "{}",
            diagnostic.message()
        );
    }

    Validated { values, diagnostic }
}

/// Validate a batch with default options.
pub fn as_mic<I, T>(inputs: I) -> MicVector
where
    I: IntoIterator<Item = T>,
    T: Into<RawInput>,
{
    validate(inputs, &ValidationOptions::default()).values
}

/// Normalize and look up a single value. Never logs.
pub fn parse_mic(raw: impl Into<RawInput>) -> Option<Mic> {
    match classify(raw.into()) {
        Outcome::Accepted(mic) => Some(mic),
        Outcome::Blank | Outcome::Rejected(_) => None,
    }
}

/// Whether `raw` normalizes to a member of the level table.
pub fn is_valid_mic(raw: &str) -> bool {
    parse_mic(raw).is_some()
}

/// Whether every non-blank entry is a valid MIC.
///
/// Vacuously true when all entries are blank; callers that need at least
/// one value check that separately.
pub fn all_valid_mics<S: AsRef<str>>(values: &[S]) -> bool {
    values
        .iter()
        .map(AsRef::as_ref)
        .filter(|value| !value.trim().is_empty())
        .all(is_valid_mic)
}
