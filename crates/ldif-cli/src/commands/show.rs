use std::io::{BufRead, Write};

use ldif_core::config::Settings;
use ldif_rfc::rfc::ldif::{DecodeOptions, decode_lazy_with};

use crate::cli::ShowArgs;
use crate::error::{CliError, CliResult};
use crate::util::{input_name, open_input, open_output};

/// Prints every entry of the input file as JSON lines on stdout.
///
/// ## Errors
/// Returns an error if the input cannot be opened or decoded.
pub fn run(args: &ShowArgs, settings: &Settings) -> CliResult<()> {
    let input = open_input(&args.input)?;
    let output = open_output(None)?;

    show(
        input,
        output,
        DecodeOptions::from(&settings.decode),
        &input_name(&args.input),
    )?;
    Ok(())
}

/// Writes every entry of `input` to `output` as one JSON object per line.
///
/// Entries are written as they are decoded, so output before a decoding
/// error stays in place.
///
/// ## Errors
/// Returns the first decoding or write error.
#[tracing::instrument(skip(input, output, options))]
pub fn show<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    options: DecodeOptions,
    name: &str,
) -> CliResult<usize> {
    let mut count = 0;

    for entry in decode_lazy_with(input, options) {
        let entry = entry.map_err(|source| CliError::Parse {
            input: name.to_string(),
            source,
        })?;
        serde_json::to_writer(&mut output, &entry)?;
        output.write_all(b"\n")?;
        count += 1;
    }

    output.flush()?;
    tracing::debug!(count, "Printed entries");

    Ok(count)
}
