//! Comparator policies and range rescaling.

use mic_model::{Comparator, Mic, MicError, Result};

use crate::options::KeepOperators;
use crate::validator::parse_mic;
use crate::vector::MicVector;

/// An optional `[min, max]` measurement range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MicRange {
    pub min: Option<Mic>,
    pub max: Option<Mic>,
}

impl MicRange {
    /// Build a range, rejecting `min > max` by numeric projection.
    pub fn new(min: Option<Mic>, max: Option<Mic>) -> Result<Self> {
        if let (Some(low), Some(high)) = (min, max)
            && low.magnitude() > high.magnitude()
        {
            return Err(MicError::InvalidArgument(format!(
                "MIC range minimum {low} is greater than maximum {high}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Parse range bounds from raw text. A blank bound is open.
    pub fn parse(min: Option<&str>, max: Option<&str>) -> Result<Self> {
        Self::new(parse_bound(min)?, parse_bound(max)?)
    }
}

fn parse_bound(raw: Option<&str>) -> Result<Option<Mic>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_mic(text)
            .map(|mic| Some(mic.without_comparator()))
            .ok_or_else(|| {
                MicError::InvalidArgument(format!("{text:?} is not a valid MIC range bound"))
            }),
    }
}

/// Apply a comparator policy to validated values.
pub fn apply_operator_policy(values: MicVector, keep: KeepOperators) -> MicVector {
    match keep {
        KeepOperators::All => values,
        KeepOperators::None => values
            .iter()
            .map(|value| value.map(Mic::without_comparator))
            .collect(),
        KeepOperators::Edges => mark_edges(values),
    }
}

/// Lowest magnitude becomes `<=`, highest `>=`, everything else bare.
/// When every value shares one magnitude the `>=` edge wins.
fn mark_edges(values: MicVector) -> MicVector {
    let magnitudes = values.present().map(Mic::magnitude);
    let Some((low, high)) = magnitudes.fold(None, |acc: Option<(f64, f64)>, value| {
        Some(match acc {
            None => (value, value),
            Some((low, high)) => (low.min(value), high.max(value)),
        })
    }) else {
        return values;
    };

    values
        .iter()
        .map(|value| {
            value.map(|mic| {
                let magnitude = mic.magnitude();
                let comparator = if magnitude == high {
                    Comparator::GreaterOrEqual
                } else if magnitude == low {
                    Comparator::LessOrEqual
                } else {
                    Comparator::Equal
                };
                mic.with_comparator(comparator)
            })
        })
        .collect()
}

/// Clamp every value into `range`, then apply `keep`.
///
/// Values below the minimum become the minimum and values above the maximum
/// become the maximum, compared by numeric projection.
pub fn rescale_mic(values: &MicVector, range: MicRange, keep: KeepOperators) -> MicVector {
    let clamped: MicVector = values
        .iter()
        .map(|value| {
            value.map(|mic| match (range.min, range.max) {
                (Some(min), _) if mic.magnitude() < min.magnitude() => min,
                (_, Some(max)) if mic.magnitude() > max.magnitude() => max,
                _ => mic,
            })
        })
        .collect();
    apply_operator_policy(clamped, keep)
}
