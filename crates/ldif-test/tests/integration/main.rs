//! Integration tests across the LDIF crates and the `ldif` command.

mod cli;
mod helpers;
mod streaming;
