use std::io::{BufRead, Write};

use ldif_core::config::Settings;
use ldif_rfc::rfc::ldif::{DecodeOptions, decode_eager_with};

use crate::cli::CheckArgs;
use crate::error::{CliError, CliResult};
use crate::util::{input_name, open_input, open_output};

/// Validates the input file and prints its entry count unless quiet.
///
/// ## Errors
/// Returns the first decoding error or a failure writing the report.
pub fn run(args: &CheckArgs, settings: &Settings) -> CliResult<()> {
    let name = input_name(&args.input);
    let input = open_input(&args.input)?;

    let count = check(input, DecodeOptions::from(&settings.decode), &name)?;

    if !args.quiet {
        let mut output = open_output(None)?;
        writeln!(output, "{name}: {count} entries")?;
        output.flush()?;
    }

    Ok(())
}

/// Decodes all of `input` and returns the number of entries.
///
/// ## Errors
/// Returns the first decoding error, with its line number.
pub fn check<R: BufRead>(input: R, options: DecodeOptions, name: &str) -> CliResult<usize> {
    let entries = decode_eager_with(input, options).map_err(|source| CliError::Parse {
        input: name.to_string(),
        source,
    })?;
    Ok(entries.len())
}
