use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ldif_core::config::EncodeConfig;
use ldif_core::constants::{CONFIG_FILE_NAME, LINE_WIDTH_ENV, LOG_LEVEL_ENV};
use ldif_rfc::rfc::ldif::EncodeOptions;

const ENV_HELP: &str = const_str::concat!(
    "\x1b[1m\x1b[4mConfiguration:\x1b[0m\n",
    "  Settings are read from ",
    CONFIG_FILE_NAME,
    " in the working directory (or --config) and the environment.\n",
    "  \x1b[1m",
    LOG_LEVEL_ENV,
    "\x1b[0m     Log filter (default: info)\n",
    "  \x1b[1m",
    LINE_WIDTH_ENV,
    "\x1b[0m Fold width for `format`, 0 disables folding (default: 76)"
);

#[derive(Debug, Parser)]
#[command(
    name = "ldif",
    about = "Read, normalise and validate LDIF content records.",
    version,
    after_help = ENV_HELP
)]
pub struct Cli {
    /// Configuration file (defaults to ldif.toml when present)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Print each entry as one JSON line")]
    Show(ShowArgs),

    #[command(visible_alias = "fmt", about = "Re-encode entries with normalised folding")]
    Format(FormatArgs),

    #[command(visible_aliases = ["t", "test"], about = "Decode everything and report the entry count")]
    Check(CheckArgs),
}

#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    /// LDIF file to read, `-` for stdin
    pub input: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// LDIF file to read, `-` for stdin
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Maximum physical line width in octets, 0 disables folding
    #[arg(short = 'w', long = "line-width", value_name = "OCTETS")]
    pub line_width: Option<usize>,

    /// Never fold lines
    #[arg(long, conflicts_with = "line_width")]
    pub no_fold: bool,

    /// Version number for the `version: N` header
    #[arg(long = "version-header", value_name = "N")]
    pub version_header: Option<u32>,

    /// Do not write the `version:` header
    #[arg(long, conflicts_with = "version_header")]
    pub no_version_header: bool,
}

impl FormatArgs {
    /// Applies command line overrides on top of the configured encoder settings.
    #[must_use]
    pub fn encode_options(&self, config: &EncodeConfig) -> EncodeOptions {
        let mut options = EncodeOptions::from(config);

        options.line_width = match (self.no_fold, self.line_width) {
            (true, _) | (false, Some(0)) => None,
            (false, Some(width)) => Some(width),
            (false, None) => options.line_width,
        };

        if self.no_version_header {
            options.version = None;
        } else if let Some(version) = self.version_header {
            options.version = Some(version);
        } else {
            // configured header
        }

        options
    }
}

#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// LDIF file to read, `-` for stdin
    pub input: PathBuf,

    /// Suppress output
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
