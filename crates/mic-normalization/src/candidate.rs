use serde::{Deserialize, Serialize};

/// Outcome of normalizing one raw token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Candidate {
    /// The input was empty or whitespace; it is missing, not invalid.
    Blank,
    /// The input had content but nothing survived the cleanup.
    Unparseable,
    /// A cleaned string that may or may not be a canonical level.
    Value(String),
}

impl Candidate {
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Candidate::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Candidate::Blank)
    }
}
