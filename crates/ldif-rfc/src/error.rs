use thiserror::Error;

use crate::rfc::ldif::build::EncodeError;
use crate::rfc::ldif::parse::ParseError;

/// LDIF decoding and encoding errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Encode error: {0}")]
    EncodeError(#[from] EncodeError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
