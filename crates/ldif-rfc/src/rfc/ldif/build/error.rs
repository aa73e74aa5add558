//! LDIF encode error types.

use thiserror::Error;

use super::fold::MIN_LINE_WIDTH;

/// Result type for LDIF encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Entry content that cannot be written as LDIF.
///
/// `entry` is the 1-based position of the offending entry in the input sequence.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("entry {entry}: attribute name is empty")]
    EmptyAttributeName { entry: usize },

    #[error("entry {entry}: invalid attribute name {name:?}: {reason}")]
    InvalidAttributeName {
        entry: usize,
        name: String,
        reason: &'static str,
    },

    #[error("entry {entry}: value of {name:?} {reason}")]
    UnsafeValue {
        entry: usize,
        name: String,
        reason: &'static str,
    },

    #[error("line width {0} is too small, must be at least {min}", min = MIN_LINE_WIDTH)]
    InvalidLineWidth(usize),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}
