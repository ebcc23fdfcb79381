//! Token type and categories.
//!
//! A token is a plain record: the raw source text, a category, and the position
//! the text was scanned from. VBA folds case everywhere, so token equality and
//! hashing fold ASCII case too; `tok == "dim"` matches `Dim`, `DIM` and `dIm`
//! alike. Comparing two tokens also requires their categories to match, so an
//! identifier `mod` and the keyword `Mod` stay distinct.

use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::position::Position;

/// What kind of lexeme a token is.
///
/// First-pass scanning only produces the raw categories; the second pass promotes
/// identifiers to `Keyword`, `Operator`, `Boolean`, `Variant` or `Object`, and
/// symbols that double as operators to `Operator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Bookkeeping marker before the first scanned token. Never yielded by the
    /// token stream.
    StartOfFile,
    /// Empty token at the end of the stream. Popping past it yields it again.
    EndOfFile,
    /// A line terminator or `:` statement separator.
    EndOfStatement,
    /// Whitespace, including `_`-continuations that splice physical lines.
    Blank,
    /// A symbol with no operator role, such as `;` or `:=`.
    Symbol,
    /// A `'` or `Rem` comment, excluding the terminator that ends it.
    Comment,
    /// An integer literal in any base, with an optional width suffix.
    Integer,
    /// A floating-point, exponent or currency literal.
    Float,
    /// A double-quoted string literal, quotes included.
    String,
    /// A name that is not reserved.
    Identifier,
    /// A reserved word without a more specific role.
    Keyword,
    /// A symbol or word with an operator role.
    Operator,
    /// `True` or `False`.
    Boolean,
    /// `Empty` or `Null`.
    Variant,
    /// `Nothing`.
    Object,
}

/// One scanned lexeme.
#[derive(Debug, Clone)]
pub struct Token {
    /// Raw source text, case preserved.
    pub text: String,
    pub category: TokenCategory,
    pub position: Position,
}

/// Failure to concatenate two tokens that are not adjacent in one stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConcatError {
    #[error("tokens come from different streams")]
    DifferentStreams,
    #[error("tokens are not adjacent")]
    NotAdjacent,
}

impl Token {
    pub fn new(text: impl Into<String>, category: TokenCategory, position: Position) -> Self {
        Self {
            text: text.into(),
            category,
            position,
        }
    }

    /// Join this token with the one scanned immediately after it.
    ///
    /// The result keeps this token's category and covers both spans. Fails if the
    /// tokens come from different streams or do not touch: fusing tokens that
    /// were never neighbours would fabricate source text.
    pub fn concat(&self, next: &Token) -> Result<Token, ConcatError> {
        if self.position.file_name() != next.position.file_name() {
            return Err(ConcatError::DifferentStreams);
        }
        if self.position.end_index() != next.position.start_index() {
            return Err(ConcatError::NotAdjacent);
        }
        Ok(Token {
            text: format!("{}{}", self.text, next.text),
            category: self.category,
            position: self.position.merge(&next.position),
        })
    }
}

/// Category-sensitive, case-insensitive equality.
impl PartialEq for Token {
    fn eq(&self, other: &Token) -> bool {
        self.category == other.category && self.text.eq_ignore_ascii_case(&other.text)
    }
}

impl Eq for Token {}

/// Case-insensitive comparison against bare text, ignoring the category.
impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.text.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text.eq_ignore_ascii_case(other)
    }
}

/// Hashes the lowercase text, consistent with the case-insensitive equality.
impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        for byte in self.text.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}
