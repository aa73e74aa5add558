use std::io::{BufRead, Write};

use ldif_core::config::Settings;
use ldif_rfc::rfc::ldif::{DecodeOptions, EncodeOptions, Encoder, decode_lazy_with};

use crate::cli::FormatArgs;
use crate::error::{CliError, CliResult};
use crate::util::{input_name, open_input, open_output};

/// Re-encodes the input file to the output file or stdout.
///
/// ## Errors
/// Returns an error if the input cannot be read or an entry cannot be encoded.
pub fn run(args: &FormatArgs, settings: &Settings) -> CliResult<()> {
    let encode = args.encode_options(&settings.encode);
    let decode = DecodeOptions::from(&settings.decode);

    let input = open_input(&args.input)?;
    let output = open_output(args.output.as_deref())?;

    let count = format(input, output, decode, encode, &input_name(&args.input))?;
    tracing::info!(count, "Formatted entries");

    Ok(())
}

/// Decodes `input` lazily and re-encodes every entry to `output`.
///
/// The encoder is set up before reading, so an invalid line width fails
/// without consuming input. Entries already written are not rolled back when a
/// later one fails.
///
/// ## Errors
/// Returns the first decoding, encoding or write error.
#[tracing::instrument(skip(input, output))]
pub fn format<R: BufRead, W: Write>(
    input: R,
    output: W,
    decode: DecodeOptions,
    encode: EncodeOptions,
    name: &str,
) -> CliResult<usize> {
    let mut encoder = Encoder::new(output, encode)?;

    for entry in decode_lazy_with(input, decode) {
        let entry = entry.map_err(|source| CliError::Parse {
            input: name.to_string(),
            source,
        })?;
        encoder.write_entry(&entry)?;
    }

    let written = encoder.written();
    encoder.finish()?;

    Ok(written)
}
