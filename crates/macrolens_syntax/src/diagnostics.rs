//! Positioned scan and syntax errors, and their plain-text rendering.
//!
//! Analyst tooling pipes these diagnostics into logs and reports, so the rendered
//! form is deliberately terse and grep-friendly:
//!
//! ```text
//! lure.vba:3:9: Expected an expression
//! total = * 2
//!         ^
//! ```
//!
//! One header line with a `file:line:col:` prefix, the enclosing source line(s),
//! and a caret line marking the span: `^` under the first character, `~` under
//! the rest of the span on that line.

use thiserror::Error;

use crate::position::{IEOLS, Position};

/// A character sequence no scanner recognizes.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ScanError {
    pub message: String,
    pub position: Position,
}

impl ScanError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// Three-line rendering with header, source line and caret marker.
    pub fn render(&self) -> String {
        render(&self.message, Some(&self.position))
    }
}

/// Well-formed tokens that do not form a valid construct.
///
/// The position is optional: a handful of failures (an unknown entry-point rule
/// name, for instance) have no source location to point at.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub position: Option<Position>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: Option<Position>) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// Shorthand for an error pinned to a source span.
    pub fn at(message: impl Into<String>, position: Position) -> Self {
        Self::new(message, Some(position))
    }

    pub fn render(&self) -> String {
        render(&self.message, self.position.as_ref())
    }
}

/// Any front-end failure: either the lexer or the parser gave up.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    pub fn position(&self) -> Option<&Position> {
        match self {
            ParseError::Scan(e) => Some(&e.position),
            ParseError::Syntax(e) => e.position.as_ref(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            ParseError::Scan(e) => e.render(),
            ParseError::Syntax(e) => e.render(),
        }
    }
}

/// Render a message with its optional source context.
///
/// Without a position this is just the message. With one, the caret line puts
/// `^` under the span's first character and `~` under the remainder of the span,
/// clipped to the first line for multi-line spans.
fn render(message: &str, position: Option<&Position>) -> String {
    let Some(position) = position else {
        return message.to_string();
    };

    let spanned = position.text();
    let first_line_len = spanned
        .split(IEOLS)
        .next()
        .map_or(0, |line| line.chars().count());
    let tildes = first_line_len.saturating_sub(1);

    format!(
        "{} {}\n{}\n{}^{}",
        position.header(),
        message,
        position.line_text(),
        " ".repeat(position.start_column() - 1),
        "~".repeat(tildes),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use insta::assert_snapshot;

    use super::*;

    fn position(content: &str, start: usize, end: usize, line: usize, column: usize) -> Position {
        Position::from_indices(
            Arc::from("lure.vba"),
            Arc::from(content),
            start,
            end,
            line,
            column,
        )
    }

    #[test]
    fn renders_header_line_and_caret() {
        let err = SyntaxError::at(
            "Expected an expression",
            position("total = * 2", 8, 9, 1, 9),
        );
        assert_snapshot!(err.render(), @r"
        lure.vba:1:9: Expected an expression
        total = * 2
                ^
        ");
    }

    #[test]
    fn underlines_the_whole_span() {
        let err = SyntaxError::at(
            "Unknown statement",
            position("DoEvents now", 0, 8, 1, 1),
        );
        assert_snapshot!(err.render(), @r"
        lure.vba:1:1: Unknown statement
        DoEvents now
        ^~~~~~~~
        ");
    }

    #[test]
    fn points_at_the_right_line_of_a_larger_stream() {
        let content = "Sub Go()\n  x = )\nEnd Sub";
        let err = ScanError::new("Unbalanced closing parenthesis", position(content, 15, 16, 2, 7));
        assert_snapshot!(err.render(), @r"
        lure.vba:2:7: Unbalanced closing parenthesis
          x = )
              ^
        ");
    }

    #[test]
    fn empty_span_still_gets_a_caret() {
        let err = SyntaxError::at("Expected 'End Sub'", position("Sub Go()", 8, 8, 1, 9));
        assert_snapshot!(err.render(), @r"
        lure.vba:1:9: Expected 'End Sub'
        Sub Go()
                ^
        ");
    }

    #[test]
    fn positionless_errors_render_bare() {
        let err = SyntaxError::new("Unknown rule \"statment\"", None);
        assert_eq!(err.render(), "Unknown rule \"statment\"");
    }

    #[test]
    fn scan_and_syntax_errors_share_the_parse_error_surface() {
        let scan = ScanError::new("Can't scan this character sequence", position("§", 0, 2, 1, 1));
        let parse: ParseError = scan.clone().into();
        assert_eq!(parse.render(), scan.render());
        assert_eq!(parse.position(), Some(&scan.position));
        assert_eq!(parse.to_string(), "Can't scan this character sequence");
    }
}
