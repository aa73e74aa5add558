//! LDIF tools - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `ldif_test::component::` paths.

pub mod component {
    pub use ldif_core::{config, constants};

    pub mod ldif {
        pub use ldif_rfc::error::{RfcError, RfcResult};
        pub use ldif_rfc::rfc::ldif::*;
    }

    pub mod cli {
        pub use ldif_cli::cli::{CheckArgs, Cli, Commands, FormatArgs, ShowArgs};
        pub use ldif_cli::commands::{check::check, format::format, run, show::show};
        pub use ldif_cli::error::{CliError, CliResult};
    }
}
