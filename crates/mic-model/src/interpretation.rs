//! Boundary to clinical interpretation engines.
//!
//! Mapping a measurement to a susceptibility category needs breakpoint
//! tables per organism, agent and guideline. That lives outside this
//! workspace; this module only fixes the shape of the hand-over.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mic::Mic;

/// Categorical outcome of interpreting one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Susceptibility {
    #[serde(rename = "S")]
    Susceptible,
    #[serde(rename = "SDD")]
    SusceptibleDoseDependent,
    #[serde(rename = "I")]
    Intermediate,
    #[serde(rename = "R")]
    Resistant,
    #[serde(rename = "NI")]
    NonInterpretable,
}

impl Susceptibility {
    pub fn code(self) -> &'static str {
        match self {
            Self::Susceptible => "S",
            Self::SusceptibleDoseDependent => "SDD",
            Self::Intermediate => "I",
            Self::Resistant => "R",
            Self::NonInterpretable => "NI",
        }
    }
}

impl fmt::Display for Susceptibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An engine that turns a validated measurement into a category.
///
/// Implementations receive only table-valid values, so [`Mic::magnitude`]
/// is always finite. `Ok(None)` means no breakpoint applies.
pub trait SusceptibilityInterpreter {
    fn interpret(
        &self,
        value: Mic,
        organism: &str,
        agent: &str,
        guideline: &str,
    ) -> Result<Option<Susceptibility>>;
}
