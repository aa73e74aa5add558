use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Path that selects stdin or stdout instead of a file.
pub const STDIO: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path == Path::new(STDIO)
}

/// Returns a display name for error messages.
#[must_use]
pub fn input_name(path: &Path) -> String {
    if is_stdio(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Opens `path` for buffered reading; `-` reads stdin.
///
/// ## Errors
/// Returns an error if the file cannot be opened.
pub fn open_input(path: &Path) -> CliResult<Box<dyn BufRead>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Opens `path` for buffered writing, truncating it; `None` or `-` writes stdout.
///
/// ## Errors
/// Returns an error if the file cannot be created.
pub fn open_output(path: Option<&Path>) -> CliResult<Box<dyn Write>> {
    match path {
        Some(path) if !is_stdio(path) => {
            let file = File::create(path).map_err(|source| CliError::CreateOutput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        _ => Ok(Box::new(io::stdout().lock())),
    }
}
