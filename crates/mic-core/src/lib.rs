//! MIC validation engine.
//!
//! Raw laboratory input goes through the normalization pipeline, is looked
//! up in the canonical level table and lands in a [`MicVector`]. Every
//! arithmetic, statistical and ordering operation works on the numeric
//! projection of the values; only display keeps the comparator.
//!
//! ```
//! use mic_core::{ValidationOptions, stats, validate};
//!
//! let validated = validate(
//!     [">=32", "1.0", "<= 0,128", "foo"],
//!     &ValidationOptions::new().quiet(),
//! );
//! assert_eq!(validated.values.to_string(), "[>=32, 1, <=0.128, NA]");
//! assert_eq!(validated.diagnostic.invalid_inputs, ["foo"]);
//! assert_eq!(stats::max(&validated.values, true), Some(32.0));
//! ```

pub mod diagnostic;
pub mod input;
pub mod ops;
pub mod options;
pub mod rescale;
pub mod stats;
pub mod validator;
pub mod vector;

pub use diagnostic::Diagnostic;
pub use input::RawInput;
pub use mic_model::{Comparator, LevelTable, Mic, MicError, Result, format_numeric, to_number};
pub use options::{KeepOperators, ValidationOptions};
pub use rescale::{MicRange, apply_operator_policy, rescale_mic};
pub use stats::{MicSummary, mic_p50, mic_p90};
pub use validator::{Validated, all_valid_mics, as_mic, is_valid_mic, parse_mic, validate};
pub use vector::{MicVector, levels};
