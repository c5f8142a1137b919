//! Normalization of raw laboratory MIC input.
//!
//! Real-world exports mix decimal commas, Unicode comparators, units,
//! interpretation codes and stray punctuation. [`normalize`] rewrites one
//! raw token into a canonical-form [`Candidate`]; table membership is
//! checked downstream.
//!
//! ```
//! use mic_normalization::{normalize, Candidate};
//!
//! assert_eq!(normalize("\u{2264} 0,25"), Candidate::Value("<=0.25".to_string()));
//! assert_eq!(normalize("<=0.002; S"), Candidate::Value("<=0.002".to_string()));
//! assert_eq!(normalize(""), Candidate::Blank);
//! ```

mod candidate;
mod pipeline;

pub use candidate::Candidate;
pub use pipeline::{clean, normalize};
