//! Line folding for LDIF (RFC 2849 §2, note 2).

/// Default maximum physical line length in octets (not including the newline).
pub const DEFAULT_LINE_WIDTH: usize = ldif_core::constants::DEFAULT_LINE_WIDTH;

/// Smallest usable width: continuation lines need the leading space plus one octet.
pub const MIN_LINE_WIDTH: usize = 2;

/// Folds a line to at most `width` octets per physical line.
///
/// Continuation lines start with a single space, which counts toward the
/// width. Splits never fall inside a UTF-8 sequence; a character wider than
/// the room left on a line is kept whole. `None` disables folding. Every
/// physical line, including the last, ends with `\n`.
///
/// Widths below [`MIN_LINE_WIDTH`] are treated as [`MIN_LINE_WIDTH`];
/// [`Encoder::new`](super::Encoder::new) rejects such widths before folding.
#[must_use]
pub fn fold_line(line: &str, width: Option<usize>) -> String {
    let width = match width {
        Some(w) if line.len() > w => w.max(MIN_LINE_WIDTH),
        _ => return format!("{line}\n"),
    };

    let mut result = String::with_capacity(line.len() + (line.len() / (width - 1) + 1) * 2);
    let mut pos = 0;
    let mut first_line = true;

    while pos < line.len() {
        // Continuation lines have one less octet available (the leading space)
        let max_len = if first_line { width } else { width - 1 };

        let mut end = (pos + max_len).min(line.len());

        // Back up if we're in the middle of a UTF-8 character
        while end > pos && !line.is_char_boundary(end) {
            end -= 1;
        }

        if end == pos {
            // Single character wider than the line: emit it whole
            end = pos + 1;
            while !line.is_char_boundary(end) {
                end += 1;
            }
        }

        if !first_line {
            result.push(' ');
        }
        result.push_str(&line[pos..end]);
        result.push('\n');

        pos = end;
        first_line = false;
    }

    result
}
