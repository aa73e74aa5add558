pub mod check;
pub mod format;
pub mod show;

use ldif_core::config::Settings;

use crate::cli::{Cli, Commands};
use crate::error::CliResult;

/// Runs the selected subcommand against stdin/stdout or the named files.
///
/// Settings are validated first, so hand-built settings get the same checks
/// as loaded ones.
///
/// ## Errors
/// Returns invalid settings, or the first input, decoding, encoding or
/// output error.
pub fn run(cli: &Cli, settings: &Settings) -> CliResult<()> {
    settings.validate()?;

    match &cli.command {
        Commands::Show(args) => show::run(args, settings),
        Commands::Format(args) => format::run(args, settings),
        Commands::Check(args) => check::run(args, settings),
    }
}
