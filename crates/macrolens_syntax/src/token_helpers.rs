//! Small token predicates used throughout the parser.
//!
//! These keep the parser free of raw category/text matching; the grammar code
//! reads as `token.is_keyword("then")` rather than tuple patterns.

use crate::lexer::{Token, TokenCategory};

impl Token {
    /// Whether this is a symbol or operator token spelled `text`.
    ///
    /// The second lexer pass promotes `(`, `=`, `,` and friends to operator
    /// tokens, so grammar code matching punctuation has to accept both
    /// categories.
    pub fn is_punct(&self, text: &str) -> bool {
        matches!(
            self.category,
            TokenCategory::Symbol | TokenCategory::Operator
        ) && self.text == text
    }

    /// Whether this is the keyword `word` (case-insensitive).
    pub fn is_keyword(&self, word: &str) -> bool {
        self.category == TokenCategory::Keyword && *self == word
    }

    pub fn is_end_of_statement(&self) -> bool {
        self.category == TokenCategory::EndOfStatement
    }

    pub fn is_end_of_file(&self) -> bool {
        self.category == TokenCategory::EndOfFile
    }

    pub fn is_blank(&self) -> bool {
        self.category == TokenCategory::Blank
    }

    pub fn is_comment(&self) -> bool {
        self.category == TokenCategory::Comment
    }

    /// Whether a name can be read off this token: identifiers always, keywords
    /// too (type names like `Integer` and the `VB_*` attributes are reserved
    /// words that still act as names).
    pub fn is_name_like(&self) -> bool {
        matches!(
            self.category,
            TokenCategory::Identifier | TokenCategory::Keyword
        )
    }

    /// Whether this token can open an expression.
    pub fn can_start_expression(&self) -> bool {
        match self.category {
            TokenCategory::Integer
            | TokenCategory::Float
            | TokenCategory::String
            | TokenCategory::Identifier
            | TokenCategory::Boolean
            | TokenCategory::Variant
            | TokenCategory::Object => true,
            TokenCategory::Keyword => *self == "me",
            TokenCategory::Operator => {
                matches!(self.text.as_str(), "-" | "." | "!" | "(")
                    || self.text.eq_ignore_ascii_case("not")
            }
            _ => false,
        }
    }

    /// Human-readable description for error messages.
    pub fn describe(&self) -> String {
        match self.category {
            TokenCategory::EndOfFile => "end of file".to_string(),
            TokenCategory::EndOfStatement => "end of statement".to_string(),
            TokenCategory::Blank => "blank".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::lex;

    #[test]
    fn punctuation_matches_both_symbol_and_operator_categories() {
        let tokens = lex("(;", "test.vba").unwrap();
        assert!(tokens[0].is_punct("("));
        assert!(tokens[1].is_punct(";"));
        assert!(!tokens[0].is_punct(")"));
    }

    #[test]
    fn keyword_check_is_category_sensitive() {
        let tokens = lex("Dim mid2", "test.vba").unwrap();
        assert!(tokens[0].is_keyword("dim"));
        assert!(tokens[0].is_keyword("DIM"));
        assert!(!tokens[2].is_keyword("mid2"));
    }

    #[test]
    fn expression_starters() {
        let tokens = lex("x 1 \"s\" True Not ( - , Then", "test.vba").unwrap();
        let starters: Vec<bool> = tokens
            .iter()
            .filter(|t| !t.is_blank())
            .map(|t| t.can_start_expression())
            .collect();
        // x, 1, "s", True, Not, (, -, `,`, Then, eof
        assert_eq!(
            starters,
            vec![true, true, true, true, true, true, true, false, false, false]
        );
    }
}
