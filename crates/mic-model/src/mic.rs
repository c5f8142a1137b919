//! The validated MIC value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::comparator::Comparator;
use crate::error::MicError;
use crate::levels::LevelTable;

/// A single validated measurement: an index into the canonical level table.
///
/// A `Mic` can only be built from a canonical table member, so its string
/// form always round-trips. Equality is by level (`">=128" != "128"`);
/// numeric ordering is available through [`Mic::magnitude`] and
/// [`Mic::cmp_numeric`] and ignores the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mic {
    rank: u32,
}

impl Mic {
    /// Look up an exact canonical string (no normalization).
    pub fn from_canonical(value: &str) -> Option<Self> {
        LevelTable::global()
            .rank_of(value)
            .and_then(Self::from_rank)
    }

    /// Build from a sorted table position.
    pub fn from_rank(rank: usize) -> Option<Self> {
        if rank >= LevelTable::global().len() {
            return None;
        }
        u32::try_from(rank).ok().map(|rank| Self { rank })
    }

    /// Sorted table position (display-order default only).
    pub fn rank(self) -> usize {
        self.rank as usize
    }

    /// Canonical serialized form, e.g. `"<=0.002"`.
    pub fn as_str(self) -> &'static str {
        LevelTable::global().get(self.rank()).unwrap_or_default()
    }

    pub fn comparator(self) -> Comparator {
        Comparator::split(self.as_str()).0
    }

    /// The magnitude as written in the table, without comparator.
    pub fn magnitude_str(self) -> &'static str {
        Comparator::split(self.as_str()).1
    }

    /// Numeric projection of this value.
    pub fn magnitude(self) -> f64 {
        LevelTable::global()
            .magnitude(self.rank())
            .unwrap_or(f64::NAN)
    }

    /// Same magnitude with a different comparator.
    ///
    /// Always succeeds: every magnitude appears with all five comparators,
    /// laid out contiguously in table order.
    pub fn with_comparator(self, comparator: Comparator) -> Self {
        let base = self.rank() - self.comparator().rank();
        Self::from_rank(base + comparator.rank()).unwrap_or(self)
    }

    /// Same magnitude without comparator.
    pub fn without_comparator(self) -> Self {
        self.with_comparator(Comparator::Equal)
    }

    /// Compare by numeric projection only.
    pub fn cmp_numeric(self, other: Mic) -> std::cmp::Ordering {
        self.magnitude().total_cmp(&other.magnitude())
    }
}

impl fmt::Display for Mic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mic {
    type Err = MicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(s).ok_or_else(|| MicError::NotCanonical(s.to_string()))
    }
}

impl TryFrom<String> for Mic {
    type Error = MicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mic> for String {
    fn from(value: Mic) -> Self {
        value.as_str().to_string()
    }
}
