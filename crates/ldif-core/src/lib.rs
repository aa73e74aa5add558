//! Shared configuration, constants and errors for the LDIF toolkit.

pub mod config;
pub mod constants;
pub mod error;
