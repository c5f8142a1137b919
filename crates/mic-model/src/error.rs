use thiserror::Error;

#[derive(Debug, Error)]
pub enum MicError {
    /// A call-level contract violation (bad option, bad range, unknown column).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A string that is not a member of the canonical level table.
    #[error("not a canonical MIC value: {0:?}")]
    NotCanonical(String),
}

pub type Result<T> = std::result::Result<T, MicError>;
