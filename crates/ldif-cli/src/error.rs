use std::io;
use std::path::PathBuf;

use ldif_core::error::CoreError;
use ldif_rfc::rfc::ldif::{EncodeError, ParseError};
use thiserror::Error;

/// Errors reported by the `ldif` command
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to open {}: {source}", path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("Failed to create {}: {source}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("Invalid LDIF in {input}: {source}")]
    Parse { input: String, source: ParseError },

    #[error("Failed to encode: {0}")]
    Encode(#[from] EncodeError),

    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type CliResult<T> = std::result::Result<T, CliError>;
