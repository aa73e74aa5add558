//! The `ldif` command: JSON dumps, re-folding and validation of LDIF files.

pub mod cli;
pub mod commands;
pub mod error;
pub mod util;

pub use commands::run;
