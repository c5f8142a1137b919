//! MIC data model.
//!
//! - **levels**: the canonical level table (every valid comparator + magnitude)
//! - **mic**: the validated [`Mic`] value
//! - **comparator**: `<`, `<=`, bare, `>=`, `>`
//! - **numeric**: the numeric projection shared by all arithmetic and ordering
//! - **ops**: scalar arithmetic on [`Mic`] through its magnitude
//! - **interpretation**: the hand-over trait for breakpoint engines

pub mod comparator;
pub mod error;
pub mod interpretation;
pub mod levels;
pub mod mic;
pub mod numeric;
pub mod ops;

pub use comparator::Comparator;
pub use error::{MicError, Result};
pub use interpretation::{Susceptibility, SusceptibilityInterpreter};
pub use levels::LevelTable;
pub use mic::Mic;
pub use numeric::{format_numeric, to_number};
