/// Small stream-handling helpers shared by the parser chunks.
impl Parser {
    /// Peek the next token, cloned out of the buffer.
    fn peek_owned(&mut self) -> Result<Token, ParseError> {
        Ok(self.lexer.peek(0)?.clone())
    }

    fn pop(&mut self) -> Result<Token, ParseError> {
        Ok(self.lexer.pop()?)
    }

    /// Position of the next token.
    fn current_position(&mut self) -> Result<Position, ParseError> {
        Ok(self.lexer.peek(0)?.position.clone())
    }

    /// Skip blanks (continuations included). Comments are not blanks: several
    /// grammar decisions treat a comment like the end of statement it precedes.
    fn skip_blanks(&mut self) -> Result<(), ParseError> {
        while self.lexer.peek(0)?.is_blank() {
            self.lexer.pop()?;
        }
        Ok(())
    }

    /// Skip everything between statements: blanks, comments and statement
    /// separators.
    fn skip_separators(&mut self) -> Result<(), ParseError> {
        loop {
            let next = self.lexer.peek(0)?;
            if next.is_blank() || next.is_comment() || next.is_end_of_statement() {
                self.lexer.pop()?;
            } else {
                return Ok(());
            }
        }
    }

    /// Consume the next token if it is the punctuation `text`.
    fn eat_punct(&mut self, text: &str) -> Result<bool, ParseError> {
        self.skip_blanks()?;
        if self.lexer.peek(0)?.is_punct(text) {
            self.lexer.pop()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume the next token if it is the keyword `word`.
    fn eat_keyword(&mut self, word: &str) -> Result<bool, ParseError> {
        self.skip_blanks()?;
        if self.lexer.peek(0)?.is_keyword(word) {
            self.lexer.pop()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Require the keyword `word`.
    fn expect_keyword(&mut self, word: &str) -> Result<Token, ParseError> {
        self.skip_blanks()?;
        let next = self.peek_owned()?;
        if next.is_keyword(word) {
            self.pop()
        } else {
            Err(SyntaxError::at(
                format!("Expected '{}', found {}", word, next.describe()),
                next.position,
            )
            .into())
        }
    }

    /// Require the punctuation `text`.
    fn expect_punct(&mut self, text: &str) -> Result<Token, ParseError> {
        self.skip_blanks()?;
        let next = self.peek_owned()?;
        if next.is_punct(text) {
            self.pop()
        } else {
            Err(SyntaxError::at(
                format!("Expected '{}', found {}", text, next.describe()),
                next.position,
            )
            .into())
        }
    }

    /// Require an identifier; yields its text with position.
    fn expect_identifier(&mut self) -> Result<Spanned<String>, ParseError> {
        self.skip_blanks()?;
        let next = self.peek_owned()?;
        if next.category == TokenCategory::Identifier {
            let token = self.pop()?;
            Ok(Spanned::new(token.text, token.position))
        } else {
            Err(SyntaxError::at(
                format!("Expected an identifier, found {}", next.describe()),
                next.position,
            )
            .into())
        }
    }

    /// Require a type name: an identifier or a reserved type word (`Integer`,
    /// `String`, ...).
    fn expect_type_name(&mut self) -> Result<Spanned<String>, ParseError> {
        self.skip_blanks()?;
        let next = self.peek_owned()?;
        if next.is_name_like() {
            let token = self.pop()?;
            Ok(Spanned::new(token.text, token.position))
        } else {
            Err(SyntaxError::at(
                format!("Expected a type name, found {}", next.describe()),
                next.position,
            )
            .into())
        }
    }

    /// Check (without consuming) that the current statement is over: the next
    /// non-blank token must be a separator, a comment or the end of the stream.
    fn expect_statement_boundary(&mut self) -> Result<(), ParseError> {
        self.skip_blanks()?;
        let next = self.peek_owned()?;
        if next.is_end_of_statement() || next.is_end_of_file() || next.is_comment() {
            Ok(())
        } else {
            Err(SyntaxError::at(
                format!("Expected end of statement, found {}", next.describe()),
                next.position,
            )
            .into())
        }
    }

    /// Require the end of the current statement: a separator, a comment running
    /// to the line end, or the end of the stream (left unconsumed).
    fn expect_end_of_statement(&mut self) -> Result<(), ParseError> {
        self.skip_blanks()?;
        if self.lexer.peek(0)?.is_comment() {
            self.lexer.pop()?;
            self.skip_blanks()?;
        }
        let next = self.peek_owned()?;
        if next.is_end_of_statement() {
            self.pop()?;
            Ok(())
        } else if next.is_end_of_file() {
            Ok(())
        } else {
            Err(SyntaxError::at(
                format!("Expected end of statement, found {}", next.describe()),
                next.position,
            )
            .into())
        }
    }
}
