//! Source positions.
//!
//! A [`Position`] pins a region of one source stream down to the byte, and knows
//! enough about the surrounding text to render itself for a human: 1-based line
//! and column numbers, the text of the enclosing line, and a `file:line:col:`
//! header. Every token, AST node and diagnostic carries one.
//!
//! Byte indices are 0-based and half-open (`start_index..end_index`). Lines and
//! columns are 1-based; columns count Unicode scalars, not bytes, so they line up
//! with what an editor shows. Line terminators are `\r\n`, `\r`, `\n`, U+2028 and
//! U+2029, in that match order (`\r\n` counts as one terminator).

use std::sync::Arc;

/// Line terminators, longest first so `\r\n` wins over `\r`.
pub const EOLS: [&str; 5] = ["\r\n", "\r", "\n", "\u{2028}", "\u{2029}"];

/// Characters that start a line terminator.
pub const IEOLS: [char; 4] = ['\r', '\n', '\u{2028}', '\u{2029}'];

/// A half-open span `[start_index, end_index)` into one source stream.
///
/// Cheap to clone: the stream name and content are shared `Arc<str>`s. Fields are
/// private so a position can only be built through [`Position::new`] or
/// [`Position::from_indices`], both of which keep the line/column numbers and the
/// byte indices consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    file_name: Arc<str>,
    file_content: Arc<str>,
    start_index: usize,
    end_index: usize,
    start_line: usize,
    end_line: usize,
    start_column: usize,
    end_column: usize,
}

impl Position {
    /// Build a position from fully resolved coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the span is inverted, the indices fall outside the content, or
    /// either index is not on a character boundary.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        file_name: Arc<str>,
        file_content: Arc<str>,
        start_index: usize,
        end_index: usize,
        start_line: usize,
        end_line: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        assert!(start_index <= end_index, "inverted span");
        assert!(end_index <= file_content.len(), "span outside content");
        assert!(
            file_content.is_char_boundary(start_index) && file_content.is_char_boundary(end_index),
            "span not on character boundaries"
        );
        assert!(start_line >= 1 && start_line <= end_line, "inverted lines");
        assert!(start_column >= 1 && end_column >= 1, "columns are 1-based");
        Self {
            file_name,
            file_content,
            start_index,
            end_index,
            start_line,
            end_line,
            start_column,
            end_column,
        }
    }

    /// Build a position from byte indices plus the line/column of the start.
    ///
    /// Walks the span once to derive the end line and column, counting the
    /// terminators of [`EOLS`]. This is how the lexer materializes positions while
    /// scanning: it tracks where each token starts and lets this constructor work
    /// out where it ends.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Position::new`].
    pub fn from_indices(
        file_name: Arc<str>,
        file_content: Arc<str>,
        start_index: usize,
        end_index: usize,
        start_line: usize,
        start_column: usize,
    ) -> Self {
        assert!(start_index <= end_index, "inverted span");
        assert!(end_index <= file_content.len(), "span outside content");

        let mut index = start_index;
        let mut end_line = start_line;
        // Byte index just past the last terminator inside the span, if any.
        let mut last_line_start: Option<usize> = None;
        while index < end_index {
            let rest = &file_content[index..];
            if let Some(eol) = EOLS.iter().find(|eol| rest.starts_with(**eol)) {
                index += eol.len();
                end_line += 1;
                last_line_start = Some(index);
            } else {
                match rest.chars().next() {
                    Some(c) => index += c.len_utf8(),
                    None => break,
                }
            }
        }

        let end_column = match last_line_start {
            None => start_column + file_content[start_index..end_index].chars().count(),
            Some(line_start) => file_content[line_start..end_index].chars().count() + 1,
        };

        Self::new(
            file_name,
            file_content,
            start_index,
            end_index,
            start_line,
            end_line,
            start_column,
            end_column,
        )
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_content(&self) -> &Arc<str> {
        &self.file_content
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// 1-based line of the first character.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// 1-based line of the character just past the span.
    pub fn end_line(&self) -> usize {
        self.end_line
    }

    /// 1-based column (in Unicode scalars) of the first character.
    pub fn start_column(&self) -> usize {
        self.start_column
    }

    /// 1-based column just past the span, on `end_line`.
    pub fn end_column(&self) -> usize {
        self.end_column
    }

    /// The spanned source text.
    pub fn text(&self) -> &str {
        &self.file_content[self.start_index..self.end_index]
    }

    /// Smallest position covering both `self` and `other`.
    ///
    /// The two positions must come from the same stream; merging across streams
    /// is a logic error upstream.
    ///
    /// # Panics
    ///
    /// Panics if the stream names differ.
    pub fn merge(&self, other: &Position) -> Position {
        assert_eq!(
            self.file_name, other.file_name,
            "merging positions from different streams"
        );
        let (start_index, start_line, start_column) = if self.start_index <= other.start_index {
            (self.start_index, self.start_line, self.start_column)
        } else {
            (other.start_index, other.start_line, other.start_column)
        };
        let (end_index, end_line, end_column) = if self.end_index >= other.end_index {
            (self.end_index, self.end_line, self.end_column)
        } else {
            (other.end_index, other.end_line, other.end_column)
        };
        Position {
            file_name: Arc::clone(&self.file_name),
            file_content: Arc::clone(&self.file_content),
            start_index,
            end_index,
            start_line,
            end_line,
            start_column,
            end_column,
        }
    }

    /// `file:line:col:` header for diagnostics.
    pub fn header(&self) -> String {
        format!(
            "{}:{}:{}:",
            self.file_name, self.start_line, self.start_column
        )
    }

    /// Full text of the line(s) enclosing the span, without the trailing
    /// terminator.
    pub fn line_text(&self) -> &str {
        &self.file_content[self.start_of_line_index()..self.end_of_line_index()]
    }

    /// Byte index of the first character of the line containing the span start.
    fn start_of_line_index(&self) -> usize {
        match self.file_content[..self.start_index].rfind(IEOLS) {
            None => 0,
            // `rfind` lands on the last terminator character before the span, so
            // stepping past that one character reaches the line start even for a
            // `\r\n` pair.
            Some(at) => at + self.file_content[at..].chars().next().map_or(1, char::len_utf8),
        }
    }

    /// Byte index just past the last character of the line containing the span
    /// end. The search starts at the last character *inside* the span so that a
    /// span ending in a terminator stays on its own line.
    fn end_of_line_index(&self) -> usize {
        let tail_start = self.file_content[self.start_index..self.end_index]
            .char_indices()
            .last()
            .map_or(self.start_index, |(at, _)| self.start_index + at);
        match self.file_content[tail_start..].find(IEOLS) {
            None => self.file_content.len(),
            Some(at) => tail_start + at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(content: &str, start: usize, end: usize, line: usize, column: usize) -> Position {
        Position::from_indices(
            Arc::from("test.vba"),
            Arc::from(content),
            start,
            end,
            line,
            column,
        )
    }

    #[test]
    fn single_line_span() {
        let p = pos("Dim x As Integer", 4, 5, 1, 5);
        assert_eq!(p.text(), "x");
        assert_eq!((p.start_line(), p.end_line()), (1, 1));
        assert_eq!((p.start_column(), p.end_column()), (5, 6));
        assert_eq!(p.header(), "test.vba:1:5:");
        assert_eq!(p.line_text(), "Dim x As Integer");
    }

    #[test]
    fn span_crossing_lines_resets_the_column() {
        // A line continuation token: blank, underscore, newline.
        let p = pos("a _\nb", 1, 4, 1, 2);
        assert_eq!(p.text(), " _\n");
        assert_eq!((p.start_line(), p.end_line()), (1, 2));
        assert_eq!((p.start_column(), p.end_column()), (2, 1));
    }

    #[test]
    fn crlf_counts_as_one_terminator() {
        let p = pos("a\r\nb\r\nc", 0, 7, 1, 1);
        assert_eq!(p.end_line(), 3);
        assert_eq!(p.end_column(), 2);
    }

    #[test]
    fn columns_count_scalars_not_bytes() {
        // é is two bytes but one column.
        let p = pos("é = 1", 0, 2, 1, 1);
        assert_eq!(p.text(), "é");
        assert_eq!(p.end_column(), 2);
    }

    #[test]
    fn unicode_line_separators_terminate_lines() {
        let p = pos("a\u{2028}b", 0, 5, 1, 1);
        assert_eq!(p.text(), "a\u{2028}b");
        assert_eq!(p.end_line(), 2);
        assert_eq!(p.end_column(), 2);
    }

    #[test]
    fn merge_takes_the_hull() {
        let content = "a + b";
        let left = pos(content, 0, 1, 1, 1);
        let right = pos(content, 4, 5, 1, 5);
        let merged = left.merge(&right);
        assert_eq!(merged.text(), "a + b");
        assert_eq!(merged.start_column(), 1);
        assert_eq!(merged.end_column(), 6);
        // Order does not matter.
        assert_eq!(right.merge(&left), merged);
    }

    #[test]
    fn line_text_of_a_middle_line() {
        let content = "first\nsecond\nthird";
        let p = pos(content, 6, 12, 2, 1);
        assert_eq!(p.text(), "second");
        assert_eq!(p.line_text(), "second");
    }

    #[test]
    fn line_text_spanning_two_lines() {
        let content = "one\ntwo three\nfour";
        let p = pos(content, 0, 7, 1, 1);
        assert_eq!(p.line_text(), "one\ntwo three");
    }

    #[test]
    fn line_text_when_span_ends_in_a_terminator() {
        // An end-of-statement token holding the newline still renders with the
        // line it terminates.
        let content = "a = 1\nb = 2";
        let p = pos(content, 5, 6, 1, 6);
        assert_eq!(p.text(), "\n");
        assert_eq!(p.line_text(), "a = 1");
    }

    #[test]
    fn line_text_after_crlf() {
        let content = "one\r\ntwo";
        let p = pos(content, 5, 8, 2, 1);
        assert_eq!(p.line_text(), "two");
    }

    #[test]
    fn empty_span_at_end_of_stream() {
        let content = "abc";
        let p = pos(content, 3, 3, 1, 4);
        assert_eq!(p.text(), "");
        assert_eq!(p.end_column(), 4);
        assert_eq!(p.line_text(), "abc");
    }

    #[test]
    #[should_panic(expected = "inverted span")]
    fn inverted_span_is_rejected() {
        pos("abc", 2, 1, 1, 3);
    }

    #[test]
    #[should_panic(expected = "span outside content")]
    fn out_of_bounds_span_is_rejected() {
        pos("abc", 0, 4, 1, 1);
    }
}
