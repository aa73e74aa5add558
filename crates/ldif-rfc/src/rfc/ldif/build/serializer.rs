//! LDIF serialization.

use std::io::Write;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use ldif_core::config::EncodeConfig;
use ldif_core::constants::DEFAULT_VERSION;

use super::error::{EncodeError, EncodeResult};
use super::fold::{DEFAULT_LINE_WIDTH, MIN_LINE_WIDTH, fold_line};
use crate::rfc::ldif::core::{Entry, Value};
use crate::rfc::ldif::parse::VERSION;

/// Encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Maximum physical line width; `None` disables folding.
    pub line_width: Option<usize>,
    /// Version header written before the first entry; `None` writes none.
    pub version: Option<u32>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            line_width: Some(DEFAULT_LINE_WIDTH),
            version: Some(DEFAULT_VERSION),
        }
    }
}

impl EncodeOptions {
    #[must_use]
    pub fn with_line_width(mut self, line_width: Option<usize>) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Omits the version header.
    ///
    /// A decoder that skips a leading `version:` line will then take the
    /// first pair of the first entry for a header if that pair is
    /// `version: <digits>`.
    #[must_use]
    pub fn without_version(mut self) -> Self {
        self.version = None;
        self
    }
}

impl From<&EncodeConfig> for EncodeOptions {
    fn from(config: &EncodeConfig) -> Self {
        Self {
            line_width: config.fold_width(),
            version: config.header_version(),
        }
    }
}

/// Streaming entry writer.
///
/// Each entry is rendered and validated in full before any of its bytes reach
/// the writer. Output of earlier entries is not rolled back on error.
pub struct Encoder<W> {
    writer: W,
    line_width: Option<usize>,
    written: usize,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder, writing the version header if one is configured.
    ///
    /// ## Errors
    /// Returns an error if the line width is below [`MIN_LINE_WIDTH`] or the
    /// header cannot be written.
    pub fn new(mut writer: W, options: EncodeOptions) -> EncodeResult<Self> {
        if let Some(width) = options.line_width
            && width < MIN_LINE_WIDTH
        {
            return Err(EncodeError::InvalidLineWidth(width));
        }

        if let Some(version) = options.version {
            let header = fold_line(&format!("{VERSION}: {version}"), options.line_width);
            writer.write_all(header.as_bytes())?;
            writer.write_all(b"\n")?;
        }

        Ok(Self {
            writer,
            line_width: options.line_width,
            written: 0,
        })
    }

    /// Writes one entry followed by a blank line.
    ///
    /// ## Errors
    /// Returns an error if the entry has an invalid attribute name or a value
    /// that cannot be written as plain text, or if writing fails.
    pub fn write_entry(&mut self, entry: &Entry) -> EncodeResult<()> {
        let block = render_entry(entry, self.written + 1, self.line_width)?;
        self.writer.write_all(block.as_bytes())?;
        self.written += 1;
        Ok(())
    }

    /// Number of entries written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and returns the writer.
    ///
    /// ## Errors
    /// Returns an error if flushing fails.
    pub fn finish(mut self) -> EncodeResult<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Renders one entry as a block of folded lines plus the separating blank line.
fn render_entry(entry: &Entry, ordinal: usize, line_width: Option<usize>) -> EncodeResult<String> {
    let mut output = String::new();

    for (name, value) in entry {
        validate_name(name, ordinal)?;

        let line = match value {
            Value::Text(text) => {
                validate_plain(name, text, ordinal)?;
                format!("{name}: {text}")
            }
            Value::Binary(bytes) => format!("{name}:: {}", STANDARD.encode(bytes)),
            Value::Url(url) => {
                validate_plain(name, url, ordinal)?;
                format!("{name}:< {url}")
            }
        };

        output.push_str(&fold_line(&line, line_width));
    }

    output.push('\n');
    Ok(output)
}

fn validate_name(name: &str, entry: usize) -> EncodeResult<()> {
    let invalid = |reason: &'static str| EncodeError::InvalidAttributeName {
        entry,
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(EncodeError::EmptyAttributeName { entry });
    }
    if name.starts_with(' ') {
        return Err(invalid("begins with a space"));
    }
    if name.starts_with('#') {
        return Err(invalid("begins with '#'"));
    }
    if name.contains(':') {
        return Err(invalid("contains ':'"));
    }
    if name.contains(['\n', '\r']) {
        return Err(invalid("contains a line break"));
    }
    Ok(())
}

/// Rejects plain values that would not read back unchanged.
fn validate_plain(name: &str, value: &str, entry: usize) -> EncodeResult<()> {
    let unsafe_value = |reason: &'static str| EncodeError::UnsafeValue {
        entry,
        name: name.to_string(),
        reason,
    };

    if value.contains(['\n', '\r']) {
        return Err(unsafe_value("contains a line break"));
    }
    if value.starts_with(' ') {
        return Err(unsafe_value("begins with a space"));
    }
    Ok(())
}

/// Writes `entries` to `writer` with default options.
///
/// ## Errors
/// Returns the first invalid entry or write error. Entries written before the
/// error remain in the output.
pub fn encode<'a, W, I>(writer: W, entries: I) -> EncodeResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Entry>,
{
    encode_with(writer, entries, EncodeOptions::default())
}

/// Writes `entries` to `writer`, returning the number of entries written.
///
/// ## Errors
/// Returns the first invalid entry or write error. Entries written before the
/// error remain in the output.
#[tracing::instrument(skip(writer, entries))]
pub fn encode_with<'a, W, I>(writer: W, entries: I, options: EncodeOptions) -> EncodeResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Entry>,
{
    let mut encoder = Encoder::new(writer, options)?;

    for entry in entries {
        if let Err(err) = encoder.write_entry(entry) {
            tracing::warn!(error = %err, written = encoder.written(), "Failed to encode entry");
            return Err(err);
        }
    }

    let written = encoder.written();
    encoder.finish()?;

    tracing::debug!(count = written, "Encoded entries");

    Ok(written)
}

/// Serializes entries to a string with default options.
///
/// ## Errors
/// Returns an error if an entry is invalid.
pub fn serialize(entries: &[Entry]) -> EncodeResult<String> {
    serialize_with(entries, EncodeOptions::default())
}

/// Serializes entries to a string.
///
/// ## Errors
/// Returns an error if an entry is invalid or the options are out of range.
pub fn serialize_with(entries: &[Entry], options: EncodeOptions) -> EncodeResult<String> {
    if let Some(width) = options.line_width
        && width < MIN_LINE_WIDTH
    {
        return Err(EncodeError::InvalidLineWidth(width));
    }

    let mut output = String::new();
    if let Some(version) = options.version {
        output.push_str(&fold_line(&format!("{VERSION}: {version}"), options.line_width));
        output.push('\n');
    }
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&render_entry(entry, i + 1, options.line_width)?);
    }
    Ok(output)
}
