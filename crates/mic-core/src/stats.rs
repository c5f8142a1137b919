//! Descriptive statistics over numeric projections.
//!
//! Functions taking `na_rm` return `None` when a missing value is present
//! and `na_rm` is false, mirroring how missing values propagate through
//! arithmetic.

use mic_model::{Mic, MicError, Result};
use serde::Serialize;

use crate::validator::parse_mic;
use crate::vector::MicVector;

/// Present projections, or `None` if a missing value must propagate.
fn projections(values: &MicVector, na_rm: bool) -> Option<Vec<f64>> {
    if !na_rm && values.missing_count() > 0 {
        return None;
    }
    Some(values.present().map(Mic::magnitude).collect())
}

pub fn sum(values: &MicVector, na_rm: bool) -> Option<f64> {
    projections(values, na_rm).map(|numbers| numbers.iter().sum())
}

pub fn prod(values: &MicVector, na_rm: bool) -> Option<f64> {
    projections(values, na_rm).map(|numbers| numbers.iter().product())
}

pub fn mean(values: &MicVector, na_rm: bool) -> Option<f64> {
    let numbers = projections(values, na_rm)?;
    if numbers.is_empty() {
        return None;
    }
    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

pub fn min(values: &MicVector, na_rm: bool) -> Option<f64> {
    projections(values, na_rm)?.into_iter().reduce(f64::min)
}

pub fn max(values: &MicVector, na_rm: bool) -> Option<f64> {
    projections(values, na_rm)?.into_iter().reduce(f64::max)
}

pub fn range(values: &MicVector, na_rm: bool) -> Option<(f64, f64)> {
    Some((min(values, na_rm)?, max(values, na_rm)?))
}

/// Sample variance (denominator `n - 1`).
pub fn var(values: &MicVector, na_rm: bool) -> Option<f64> {
    let numbers = projections(values, na_rm)?;
    if numbers.len() < 2 {
        return None;
    }
    let n = numbers.len() as f64;
    let mean = numbers.iter().sum::<f64>() / n;
    let squares: f64 = numbers.iter().map(|value| (value - mean).powi(2)).sum();
    Some(squares / (n - 1.0))
}

pub fn sd(values: &MicVector, na_rm: bool) -> Option<f64> {
    var(values, na_rm).map(f64::sqrt)
}

pub fn median(values: &MicVector, na_rm: bool) -> Option<f64> {
    let numbers = projections(values, na_rm)?;
    quantile_sorted(&sorted(numbers), 0.5)
}

fn sorted(mut numbers: Vec<f64>) -> Vec<f64> {
    numbers.sort_by(f64::total_cmp);
    numbers
}

/// Linear interpolation between order statistics.
fn quantile_sorted(numbers: &[f64], prob: f64) -> Option<f64> {
    let last = numbers.len().checked_sub(1)?;
    let h = last as f64 * prob;
    let lower = h.floor() as usize;
    let upper = h.ceil() as usize;
    let fraction = h - lower as f64;
    Some(numbers[lower] + fraction * (numbers[upper] - numbers[lower]))
}

fn check_probs(probs: &[f64]) -> Result<()> {
    match probs.iter().find(|prob| !(0.0..=1.0).contains(*prob)) {
        Some(prob) => Err(MicError::InvalidArgument(format!(
            "probability {prob} is outside [0, 1]"
        ))),
        None => Ok(()),
    }
}

/// Sample quantiles with linear interpolation between order statistics
/// (`x[j] + (h - j) * (x[j+1] - x[j])` with `h = (n - 1) * p`).
///
/// A probability outside `[0, 1]`, or a missing value without `na_rm`, is
/// a call error. An empty input yields `None` for every probability.
pub fn quantile(values: &MicVector, probs: &[f64], na_rm: bool) -> Result<Vec<Option<f64>>> {
    check_probs(probs)?;
    let numbers = projections(values, na_rm).ok_or_else(|| {
        MicError::InvalidArgument(
            "missing values are not allowed in quantile unless na_rm is set".to_string(),
        )
    })?;
    let numbers = sorted(numbers);
    Ok(probs
        .iter()
        .map(|&prob| quantile_sorted(&numbers, prob))
        .collect())
}

/// The observed MIC at percentile `prob` (inverse of the empirical
/// distribution), without its comparator.
fn observed_percentile(values: &MicVector, prob: f64, na_rm: bool) -> Result<Option<Mic>> {
    check_probs(&[prob])?;
    if !na_rm && values.missing_count() > 0 {
        return Err(MicError::InvalidArgument(
            "missing values are not allowed in MIC percentiles unless na_rm is set".to_string(),
        ));
    }
    let ordered = values.sorted(false);
    if ordered.is_empty() {
        return Ok(None);
    }
    let position = ((ordered.len() as f64 * prob).ceil() as usize).max(1) - 1;
    Ok(ordered
        .get(position)
        .flatten()
        .and_then(|mic| parse_mic(mic.magnitude_str())))
}

/// MIC50: the lowest observed MIC inhibiting at least half of the isolates.
pub fn mic_p50(values: &MicVector, na_rm: bool) -> Result<Option<Mic>> {
    observed_percentile(values, 0.5, na_rm)
}

/// MIC90: the lowest observed MIC inhibiting at least 90% of the isolates.
pub fn mic_p90(values: &MicVector, na_rm: bool) -> Result<Option<Mic>> {
    observed_percentile(values, 0.9, na_rm)
}

fn cumulative(values: &MicVector, op: impl Fn(f64, f64) -> f64) -> Vec<Option<f64>> {
    let mut acc: Option<f64> = None;
    let mut poisoned = false;
    values
        .iter()
        .map(|value| {
            match value {
                Some(mic) if !poisoned => {
                    let next = acc.map_or(mic.magnitude(), |acc| op(acc, mic.magnitude()));
                    acc = Some(next);
                }
                _ => poisoned = true,
            }
            if poisoned { None } else { acc }
        })
        .collect()
}

/// Running sums; everything after the first missing value is missing.
pub fn cumsum(values: &MicVector) -> Vec<Option<f64>> {
    cumulative(values, |a, b| a + b)
}

pub fn cumprod(values: &MicVector) -> Vec<Option<f64>> {
    cumulative(values, |a, b| a * b)
}

pub fn cummin(values: &MicVector) -> Vec<Option<f64>> {
    cumulative(values, f64::min)
}

pub fn cummax(values: &MicVector) -> Vec<Option<f64>> {
    cumulative(values, f64::max)
}

/// Five-number summary plus mean and counts. Missing values are skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MicSummary {
    pub count: usize,
    pub missing: usize,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub mean: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

pub fn summary(values: &MicVector) -> MicSummary {
    let numbers = sorted(values.present().map(Mic::magnitude).collect());
    MicSummary {
        count: numbers.len(),
        missing: values.missing_count(),
        min: numbers.first().copied(),
        q1: quantile_sorted(&numbers, 0.25),
        median: quantile_sorted(&numbers, 0.5),
        mean: mean(values, true),
        q3: quantile_sorted(&numbers, 0.75),
        max: numbers.last().copied(),
    }
}
