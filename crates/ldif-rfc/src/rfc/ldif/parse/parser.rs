//! LDIF entry decoder.

use std::io::BufRead;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use ldif_core::config::DecodeConfig;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{LogicalLine, Unfolder};
use crate::rfc::ldif::core::{Entry, Value};

/// Attribute name of the optional header line (`version: 1`).
pub const VERSION: &str = "version";

/// Decoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Consume a leading `version: <digits>` line instead of returning it as
    /// part of the first entry.
    pub skip_version: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { skip_version: true }
    }
}

impl From<&DecodeConfig> for DecodeOptions {
    fn from(config: &DecodeConfig) -> Self {
        Self {
            skip_version: config.skip_version,
        }
    }
}

/// Pull-based entry decoder.
///
/// Each call to `next` reads just enough input to complete one entry. After
/// an error the iterator is exhausted; entries yielded before stay valid.
pub struct Decoder<R> {
    lines: Unfolder<R>,
    options: DecodeOptions,
    attributes: Vec<(String, Value)>,
    seen_content: bool,
    done: bool,
}

impl<R: BufRead> Decoder<R> {
    /// Creates a decoder over `reader`.
    pub fn new(reader: R, options: DecodeOptions) -> Self {
        Self {
            lines: Unfolder::new(reader),
            options,
            attributes: Vec::new(),
            seen_content: false,
            done: false,
        }
    }

    fn take_entry(&mut self) -> Option<Entry> {
        if self.attributes.is_empty() {
            return None;
        }
        let entry = Entry::from(std::mem::take(&mut self.attributes));
        tracing::trace!(
            pairs = entry.len(),
            dn = entry.dn().unwrap_or_default(),
            "Decoded entry"
        );
        Some(entry)
    }

    fn accept(&mut self, line: usize, text: &str) -> ParseResult<()> {
        let (name, value) = parse_content_line(text, line)?;

        let first = !self.seen_content;
        self.seen_content = true;
        if first && self.options.skip_version && is_version_header(&name, &value) {
            tracing::debug!(line, "Skipping version header");
            return Ok(());
        }

        self.attributes.push((name, value));
        Ok(())
    }

    fn next_entry(&mut self) -> ParseResult<Option<Entry>> {
        while let Some(line) = self.lines.next().transpose()? {
            match line {
                LogicalLine::Blank { .. } => {
                    if let Some(entry) = self.take_entry() {
                        return Ok(Some(entry));
                    }
                }
                LogicalLine::Content { line, text } => self.accept(line, &text)?,
            }
        }

        // EOF ends the last record
        Ok(self.take_entry())
    }
}

impl<R: BufRead> Iterator for Decoder<R> {
    type Item = ParseResult<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                self.attributes.clear();
                tracing::warn!(error = %err, "Failed to decode LDIF entry");
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Decoder<R> {}

/// Splits one unfolded content line into attribute name and value.
///
/// ## Errors
/// Returns an error if the line has no colon, the name is empty, or a `::`
/// payload is not valid base64.
pub fn parse_content_line(text: &str, line: usize) -> ParseResult<(String, Value)> {
    let (name, rest) = text
        .split_once(':')
        .ok_or_else(|| ParseError::missing_colon(line))?;

    if name.is_empty() {
        return Err(ParseError::empty_attribute_name(line));
    }

    let value = if let Some(payload) = rest.strip_prefix(':') {
        Value::Binary(decode_base64(payload, line)?)
    } else if let Some(url) = rest.strip_prefix('<') {
        Value::Url(url.trim_start_matches(' ').to_string())
    } else {
        Value::Text(rest.trim_start_matches(' ').to_string())
    };

    Ok((name.to_string(), value))
}

/// Decodes a base64 payload, ignoring ASCII whitespace anywhere in it.
fn decode_base64(payload: &str, line: usize) -> ParseResult<Vec<u8>> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|err| ParseError::invalid_base64(line, &err))
}

fn is_version_header(name: &str, value: &Value) -> bool {
    name.eq_ignore_ascii_case(VERSION)
        && value
            .as_text()
            .is_some_and(|v| !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()))
}

/// Returns a lazy decoder over `reader` with default options.
pub fn decode_lazy<R: BufRead>(reader: R) -> Decoder<R> {
    Decoder::new(reader, DecodeOptions::default())
}

/// Returns a lazy decoder over `reader`.
pub fn decode_lazy_with<R: BufRead>(reader: R, options: DecodeOptions) -> Decoder<R> {
    Decoder::new(reader, options)
}

/// Reads every entry from `reader`.
///
/// ## Errors
/// Returns the first parse error; no entries are returned in that case.
pub fn decode_eager<R: BufRead>(reader: R) -> ParseResult<Vec<Entry>> {
    decode_eager_with(reader, DecodeOptions::default())
}

/// Reads every entry from `reader` using the given options.
///
/// ## Errors
/// Returns the first parse error; no entries are returned in that case.
#[tracing::instrument(skip(reader))]
pub fn decode_eager_with<R: BufRead>(
    reader: R,
    options: DecodeOptions,
) -> ParseResult<Vec<Entry>> {
    tracing::debug!("Decoding LDIF stream");

    let entries = Decoder::new(reader, options).collect::<ParseResult<Vec<_>>>()?;

    tracing::debug!(count = entries.len(), "Decoded entries");

    Ok(entries)
}

/// Parses an LDIF document held in memory.
///
/// ## Errors
/// Returns a parse error if the document is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<Entry>> {
    decode_eager(input.as_bytes())
}

/// Parses a document expected to contain at least one entry, returning the first.
///
/// ## Errors
/// Returns an error if the document contains no entries or is malformed.
pub fn parse_single(input: &str) -> ParseResult<Entry> {
    decode_lazy(input.as_bytes())
        .next()
        .unwrap_or_else(|| {
            tracing::warn!("No entry found in document");
            Err(ParseError::new(
                ParseErrorKind::UnexpectedEof,
                1,
                "no entry found in document",
            ))
        })
}
