//! The typed MIC vector.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, Range};

use mic_model::{Comparator, LevelTable, Mic, MicError, Result};
use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::input::RawInput;
use crate::options::{KeepOperators, ValidationOptions};
use crate::validator::{Validated, validate};

/// An ordered sequence of validated MICs or missing values.
///
/// Every present element is a level table member. There is no mutable
/// indexing; writes go through [`MicVector::set`] and
/// [`MicVector::set_range`], which re-validate their input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MicVector {
    values: Vec<Option<Mic>>,
}

impl MicVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw inputs with default options.
    pub fn parse<I, T>(inputs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RawInput>,
    {
        validate(inputs, &ValidationOptions::default()).values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `None` when out of bounds, `Some(None)` for a missing element.
    pub fn get(&self, index: usize) -> Option<Option<Mic>> {
        self.values.get(index).copied()
    }

    pub fn values(&self) -> &[Option<Mic>] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Mic>> + '_ {
        self.values.iter().copied()
    }

    /// Present values only.
    pub fn present(&self) -> impl Iterator<Item = Mic> + '_ {
        self.values.iter().flatten().copied()
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_none()).count()
    }

    pub fn slice(&self, range: Range<usize>) -> Result<Self> {
        self.values
            .get(range.clone())
            .map(|values| Self::from(values.to_vec()))
            .ok_or_else(|| {
                MicError::InvalidArgument(format!(
                    "range {range:?} is out of bounds for {} values",
                    self.len()
                ))
            })
    }

    /// Elements at the given positions, in the given order.
    pub fn select(&self, indices: &[usize]) -> Result<Self> {
        indices
            .iter()
            .map(|&index| {
                self.get(index).ok_or_else(|| {
                    MicError::InvalidArgument(format!(
                        "index {index} is out of bounds for {} values",
                        self.len()
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::from)
    }

    /// Assign one element after re-validating it.
    ///
    /// An invalid value is stored as missing and reported in the returned
    /// diagnostic, exactly like any other validation miss. Comparators are
    /// kept as given; the operator policy is not applied to a lone element.
    pub fn set(
        &mut self,
        index: usize,
        raw: impl Into<RawInput>,
        options: &ValidationOptions,
    ) -> Result<Diagnostic> {
        if index >= self.len() {
            return Err(MicError::InvalidArgument(format!(
                "index {index} is out of bounds for {} values",
                self.len()
            )));
        }
        let raw: RawInput = raw.into();
        let validated = validate([raw], &assignment_options(options));
        self.values[index] = validated.values.get(0).flatten();
        Ok(validated.diagnostic)
    }

    /// Assign a contiguous range after re-validating every replacement.
    ///
    /// The range is checked before anything is validated. As with [`set`],
    /// comparators are kept as given.
    ///
    /// [`set`]: Self::set
    pub fn set_range<I, T>(
        &mut self,
        start: usize,
        raw: I,
        options: &ValidationOptions,
    ) -> Result<Diagnostic>
    where
        I: IntoIterator<Item = T>,
        T: Into<RawInput>,
    {
        let raw: Vec<RawInput> = raw.into_iter().map(Into::into).collect();
        let end = start
            .checked_add(raw.len())
            .filter(|end| *end <= self.len())
            .ok_or_else(|| {
                MicError::InvalidArgument(format!(
                    "assignment of {} values at {start} exceeds {} values",
                    raw.len(),
                    self.len()
                ))
            })?;
        let validated = validate(raw, &assignment_options(options));
        self.values[start..end].copy_from_slice(validated.values.values());
        Ok(validated.diagnostic)
    }

    /// Concatenate vectors by re-validating their text forms as one batch.
    ///
    /// The result is a new vector, so the operator policy in `options`
    /// applies across the joined values: under `Edges` only the extremes of
    /// the whole concatenation keep a comparator.
    pub fn concat(parts: &[&MicVector], options: &ValidationOptions) -> Validated {
        validate(parts.iter().copied().flat_map(MicVector::text_inputs), options)
    }

    /// Concatenate raw inputs after this vector, re-validating everything.
    ///
    /// Like [`concat`](Self::concat), the operator policy applies across the
    /// whole new vector.
    pub fn append<I, T>(&self, raw: I, options: &ValidationOptions) -> Validated
    where
        I: IntoIterator<Item = T>,
        T: Into<RawInput>,
    {
        validate(
            self.text_inputs().chain(raw.into_iter().map(Into::into)),
            options,
        )
    }

    fn text_inputs(&self) -> impl Iterator<Item = RawInput> + '_ {
        self.values
            .iter()
            .map(|value| RawInput::from(value.map(Mic::as_str)))
    }

    /// Distinct elements in first-seen order. Missing counts as one value.
    pub fn unique(&self) -> Self {
        let mut seen = Vec::new();
        for value in &self.values {
            if !seen.contains(value) {
                seen.push(*value);
            }
        }
        Self::from(seen)
    }

    /// The whole vector repeated `times` times.
    pub fn repeat(&self, times: usize) -> Self {
        Self::from(self.values.repeat(times))
    }

    /// Canonical strings, `None` for missing.
    pub fn as_strings(&self) -> Vec<Option<&'static str>> {
        self.iter().map(|value| value.map(Mic::as_str)).collect()
    }

    /// Comparator of each element, for display.
    pub fn comparators(&self) -> Vec<Option<Comparator>> {
        self.iter().map(|value| value.map(Mic::comparator)).collect()
    }

    /// Numeric projection of each element.
    pub fn to_f64(&self) -> Vec<Option<f64>> {
        self.iter().map(|value| value.map(Mic::magnitude)).collect()
    }

    /// Distinct levels present, in table order.
    pub fn levels_in_use(&self) -> Vec<Mic> {
        let mut levels: Vec<Mic> = self.present().collect();
        levels.sort_by_key(|mic| mic.rank());
        levels.dedup();
        levels
    }

    /// Frequency of each level present, in table order.
    pub fn counts(&self) -> Vec<(Mic, usize)> {
        let mut counts: HashMap<Mic, usize> = HashMap::new();
        for mic in self.present() {
            *counts.entry(mic).or_default() += 1;
        }
        let mut counts: Vec<(Mic, usize)> = counts.into_iter().collect();
        counts.sort_by_key(|(mic, _)| mic.rank());
        counts
    }

    /// Positions that sort the vector by numeric projection.
    ///
    /// The sort is stable: values sharing a magnitude keep their input order
    /// whatever their comparator. Missing values go last.
    pub fn order(&self, descending: bool) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.len()).collect();
        indices.sort_by(|&a, &b| match (self.values[a], self.values[b]) {
            (Some(a), Some(b)) if descending => b.cmp_numeric(a),
            (Some(a), Some(b)) => a.cmp_numeric(b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        indices
    }

    /// Sorted copy by numeric projection, missing values dropped.
    pub fn sorted(&self, descending: bool) -> Self {
        self.order(descending)
            .into_iter()
            .filter_map(|index| self.values[index])
            .map(Some)
            .collect()
    }
}

/// Options for re-validating assigned elements: never drop, keep every comparator.
fn assignment_options(options: &ValidationOptions) -> ValidationOptions {
    options
        .clone()
        .with_drop_missing(false)
        .with_keep_operators(KeepOperators::All)
}

/// All canonical levels, in table order.
pub fn levels() -> &'static [String] {
    LevelTable::global().levels()
}

impl From<Vec<Option<Mic>>> for MicVector {
    fn from(values: Vec<Option<Mic>>) -> Self {
        Self { values }
    }
}

impl From<Vec<Mic>> for MicVector {
    fn from(values: Vec<Mic>) -> Self {
        values.into_iter().map(Some).collect()
    }
}

impl FromIterator<Option<Mic>> for MicVector {
    fn from_iter<I: IntoIterator<Item = Option<Mic>>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MicVector {
    type Item = Option<Mic>;
    type IntoIter = std::vec::IntoIter<Option<Mic>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a MicVector {
    type Item = Option<Mic>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Option<Mic>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter().copied()
    }
}

impl Index<usize> for MicVector {
    type Output = Option<Mic>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl fmt::Display for MicVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self
            .iter()
            .map(|value| value.map_or("NA", Mic::as_str))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(values: &[&str]) -> MicVector {
        validate(values.iter().copied(), &ValidationOptions::new().quiet()).values
    }

    #[test]
    fn set_revalidates() {
        let mut values = vector(&["1", "2", "4"]);
        let diagnostic = values
            .set(1, "<= 0,5", &ValidationOptions::new().quiet())
            .unwrap();
        assert!(diagnostic.is_empty());
        assert_eq!(values.as_strings(), [Some("1"), Some("<=0.5"), Some("4")]);

        let diagnostic = values.set(0, "3000", &ValidationOptions::new().quiet()).unwrap();
        assert_eq!(diagnostic.invalid_count, 1);
        assert_eq!(values.get(0), Some(None));
    }

    #[test]
    fn set_out_of_bounds_is_a_call_error() {
        let mut values = vector(&["1"]);
        assert!(matches!(
            values.set(3, "2", &ValidationOptions::new()),
            Err(MicError::InvalidArgument(_))
        ));
        assert!(matches!(
            values.set_range(0, ["2", "4"], &ValidationOptions::new()),
            Err(MicError::InvalidArgument(_))
        ));
    }

    #[test]
    fn set_range_replaces_a_block() {
        let mut values = vector(&["1", "2", "4", "8"]);
        values
            .set_range(1, ["16", ">=32"], &ValidationOptions::new().quiet())
            .unwrap();
        assert_eq!(values.to_string(), "[1, 16, >=32, 8]");
    }

    #[test]
    fn set_range_rejects_overflowing_start() {
        let mut values = vector(&["1", "2"]);
        let result = values.set_range(usize::MAX, ["4"], &ValidationOptions::new().quiet());
        assert!(matches!(result, Err(MicError::InvalidArgument(_))));
        assert_eq!(values.as_strings(), [Some("1"), Some("2")]);
    }

    #[test]
    fn assignment_ignores_edge_policy() {
        let edges = ValidationOptions::new()
            .with_keep_operators(KeepOperators::Edges)
            .quiet();
        let mut values = vector(&["1", "2", "8"]);
        values.set(1, "4", &edges).unwrap();
        assert_eq!(values.as_strings(), [Some("1"), Some("4"), Some("8")]);

        values.set_range(0, ["<=1", "2"], &edges).unwrap();
        assert_eq!(values.as_strings(), [Some("<=1"), Some("2"), Some("8")]);
    }

    #[test]
    fn concat_round_trips_through_text() {
        let a = vector(&["1", "<=0.5"]);
        let b = vector(&[">=64"]);
        let joined = MicVector::concat(&[&a, &b], &ValidationOptions::new().quiet());
        assert_eq!(joined.values.to_string(), "[1, <=0.5, >=64]");

        let appended = a.append(["2.0", "x"], &ValidationOptions::new().quiet());
        assert_eq!(appended.values.to_string(), "[1, <=0.5, 2, NA]");
        assert_eq!(appended.diagnostic.invalid_inputs, ["x"]);
    }

    #[test]
    fn unique_and_repeat_keep_values() {
        let values = vector(&["2", "1", "2", ""]);
        assert_eq!(values.unique().to_string(), "[2, 1, NA]");
        assert_eq!(vector(&["1"]).repeat(3).to_string(), "[1, 1, 1]");
    }

    #[test]
    fn levels_in_use_and_counts_follow_table_order() {
        let values = vector(&["8", ">=8", "1", "8"]);
        let levels: Vec<&str> = values.levels_in_use().into_iter().map(Mic::as_str).collect();
        assert_eq!(levels, ["1", "8", ">=8"]);
        let counts: Vec<(&str, usize)> = values
            .counts()
            .into_iter()
            .map(|(mic, count)| (mic.as_str(), count))
            .collect();
        assert_eq!(counts, [("1", 1), ("8", 2), (">=8", 1)]);
    }

    #[test]
    fn order_places_missing_last() {
        let values = vector(&["4", "", "1"]);
        assert_eq!(values.order(false), [2, 0, 1]);
        assert_eq!(values.order(true), [0, 2, 1]);
    }

    #[test]
    fn slice_and_select() {
        let values = vector(&["1", "2", "4"]);
        assert_eq!(values.slice(1..3).unwrap().to_string(), "[2, 4]");
        assert_eq!(values.select(&[2, 0]).unwrap().to_string(), "[4, 1]");
        assert!(values.slice(2..5).is_err());
        assert!(values.select(&[7]).is_err());
    }
}
