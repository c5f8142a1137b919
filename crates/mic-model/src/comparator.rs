//! Comparators that may prefix a MIC magnitude.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bound qualifier of a measurement.
///
/// Variants are declared in table order: for a given magnitude the canonical
/// level table lists `<`, `<=`, the bare value, `>=`, then `>`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Comparator {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessOrEqual,
    /// No comparator: an exact reading.
    #[default]
    #[serde(rename = "")]
    Equal,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = ">")]
    Greater,
}

impl Comparator {
    /// All comparators in table order.
    pub const ALL: [Comparator; 5] = [
        Comparator::Less,
        Comparator::LessOrEqual,
        Comparator::Equal,
        Comparator::GreaterOrEqual,
        Comparator::Greater,
    ];

    /// Serialized prefix (`""` for [`Comparator::Equal`]).
    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::Less => "<",
            Comparator::LessOrEqual => "<=",
            Comparator::Equal => "",
            Comparator::GreaterOrEqual => ">=",
            Comparator::Greater => ">",
        }
    }

    /// Position within [`Comparator::ALL`].
    pub fn rank(self) -> usize {
        match self {
            Comparator::Less => 0,
            Comparator::LessOrEqual => 1,
            Comparator::Equal => 2,
            Comparator::GreaterOrEqual => 3,
            Comparator::Greater => 4,
        }
    }

    /// Parse a bare comparator token (`"<"`, `"<="`, `""`, `">="`, `">"`).
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|comparator| comparator.as_str() == token.trim())
    }

    /// Split a serialized value into its comparator and the remainder.
    pub fn split(value: &str) -> (Self, &str) {
        // Two-character prefixes must be tried before their one-character forms.
        for comparator in [
            Comparator::LessOrEqual,
            Comparator::GreaterOrEqual,
            Comparator::Less,
            Comparator::Greater,
        ] {
            if let Some(rest) = value.strip_prefix(comparator.as_str()) {
                return (comparator, rest);
            }
        }
        (Comparator::Equal, value)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
