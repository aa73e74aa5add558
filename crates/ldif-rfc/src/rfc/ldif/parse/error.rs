//! LDIF parse error types.

use std::fmt;

/// Result type for LDIF parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred during LDIF parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Physical line where the offending logical line starts (1-based).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates a missing colon error.
    #[must_use]
    pub fn missing_colon(line: usize) -> Self {
        Self::new(
            ParseErrorKind::MissingColon,
            line,
            "expected `name: value`, found no colon",
        )
    }

    /// Creates an empty attribute name error.
    #[must_use]
    pub fn empty_attribute_name(line: usize) -> Self {
        Self::new(
            ParseErrorKind::EmptyAttributeName,
            line,
            "line starts with a colon",
        )
    }

    /// Creates an error for a continuation line with nothing to continue.
    #[must_use]
    pub fn orphan_continuation(line: usize) -> Self {
        Self::new(
            ParseErrorKind::OrphanContinuation,
            line,
            "continuation line does not follow a content line",
        )
    }

    /// Creates an invalid base64 payload error.
    #[must_use]
    pub fn invalid_base64(line: usize, err: &base64::DecodeError) -> Self {
        Self::new(ParseErrorKind::InvalidBase64, line, err.to_string())
    }

    /// Creates an I/O error raised while reading the given line.
    #[must_use]
    pub fn io(line: usize, err: &std::io::Error) -> Self {
        Self::new(ParseErrorKind::Io, line, err.to_string())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended before a required entry.
    UnexpectedEof,
    /// Content line without a `:` separator.
    MissingColon,
    /// Content line with nothing before the first `:`.
    EmptyAttributeName,
    /// Continuation line at the start of input or after a blank line.
    OrphanContinuation,
    /// Payload after `::` is not valid base64.
    InvalidBase64,
    /// Line is not valid UTF-8.
    EncodingError,
    /// Reading from the underlying stream failed.
    Io,
}

impl ParseErrorKind {
    /// Returns whether the error concerns line framing rather than a value payload.
    #[must_use]
    pub const fn is_framing(self) -> bool {
        matches!(
            self,
            Self::MissingColon | Self::EmptyAttributeName | Self::OrphanContinuation
        )
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::MissingColon => write!(f, "missing colon separator"),
            Self::EmptyAttributeName => write!(f, "empty attribute name"),
            Self::OrphanContinuation => write!(f, "orphan continuation line"),
            Self::InvalidBase64 => write!(f, "invalid base64 value"),
            Self::EncodingError => write!(f, "encoding error"),
            Self::Io => write!(f, "read error"),
        }
    }
}
