//! LDIF lexer: physical lines to logical (unfolded) lines.
//!
//! A line starting with a single space continues the previous line; the
//! space is dropped and the rest is appended without a separator
//! (RFC 2849 §2, note 2). Lines starting with `#` are comments and are
//! dropped together with their continuations.

use std::io::BufRead;

use super::error::{ParseError, ParseErrorKind, ParseResult};

/// An unfolded line handed to the entry parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalLine {
    /// Empty line, ends the current record.
    Blank {
        /// Physical line number (1-based).
        line: usize,
    },
    /// `name: value` statement with all continuations joined.
    Content {
        /// Physical line number where the statement starts (1-based).
        line: usize,
        /// Unfolded text.
        text: String,
    },
}

impl LogicalLine {
    /// Returns the physical line number where this line starts.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Blank { line } | Self::Content { line, .. } => *line,
        }
    }
}

/// The logical line being assembled while looking ahead for continuations.
enum Pending {
    Blank(usize),
    Comment,
    Content { line: usize, text: String },
}

impl Pending {
    fn classify(line: usize, text: String) -> Self {
        if text.is_empty() {
            Self::Blank(line)
        } else if text.starts_with('#') {
            Self::Comment
        } else {
            Self::Content { line, text }
        }
    }

    fn into_logical(self) -> Option<LogicalLine> {
        match self {
            Self::Blank(line) => Some(LogicalLine::Blank { line }),
            Self::Comment => None,
            Self::Content { line, text } => Some(LogicalLine::Content { line, text }),
        }
    }
}

/// Lazily unfolds lines from a reader.
///
/// Holds at most one logical line while peeking at the next physical line.
/// Stops after the first error.
pub struct Unfolder<R> {
    reader: R,
    buf: Vec<u8>,
    line_num: usize,
    pending: Option<Pending>,
    done: bool,
}

impl<R: BufRead> Unfolder<R> {
    /// Creates an unfolder over `reader`. The reader is read once, front to back.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_num: 0,
            pending: None,
            done: false,
        }
    }

    /// Number of physical lines read so far.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.line_num
    }

    /// Reads the next physical line without its terminator.
    fn read_physical(&mut self) -> ParseResult<Option<String>> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|err| ParseError::io(self.line_num + 1, &err))?;
        if read == 0 {
            return Ok(None);
        }
        self.line_num += 1;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        let bytes = std::mem::take(&mut self.buf);
        String::from_utf8(bytes).map(Some).map_err(|err| {
            ParseError::new(
                ParseErrorKind::EncodingError,
                self.line_num,
                format!("invalid UTF-8 at byte {}", err.utf8_error().valid_up_to()),
            )
        })
    }

    fn next_line(&mut self) -> ParseResult<Option<LogicalLine>> {
        loop {
            let Some(physical) = self.read_physical()? else {
                // EOF flushes whatever is pending
                match self.pending.take() {
                    Some(pending) => {
                        if let Some(logical) = pending.into_logical() {
                            return Ok(Some(logical));
                        }
                        continue;
                    }
                    None => return Ok(None),
                }
            };

            if let Some(rest) = physical.strip_prefix(' ') {
                match &mut self.pending {
                    Some(Pending::Content { text, .. }) => text.push_str(rest),
                    Some(Pending::Comment) => {}
                    Some(Pending::Blank(_)) | None => {
                        return Err(ParseError::orphan_continuation(self.line_num));
                    }
                }
                continue;
            }

            let next = Pending::classify(self.line_num, physical);
            if let Some(logical) = self
                .pending
                .replace(next)
                .and_then(Pending::into_logical)
            {
                return Ok(Some(logical));
            }
        }
    }
}

impl<R: BufRead> Iterator for Unfolder<R> {
    type Item = ParseResult<LogicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                tracing::warn!(error = %err, "Failed to unfold LDIF line");
                Some(Err(err))
            }
        }
    }
}

/// Unfolds an in-memory document into logical lines.
///
/// ## Errors
/// Returns an error on an orphan continuation line.
pub fn unfold(input: &str) -> ParseResult<Vec<LogicalLine>> {
    Unfolder::new(input.as_bytes()).collect()
}
