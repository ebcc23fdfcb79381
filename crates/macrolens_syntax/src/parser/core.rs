/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the named entry-point dispatch and
/// the result type it hands back.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding one giant source file.

/// What a named entry point produced.
///
/// Embedding engines drive the parser by rule name (a REPL parses statements,
/// an expression evaluator parses expressions), so the result is a sum over the
/// supported entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRule {
    Module(Spanned<Block>),
    Block(Spanned<Block>),
    Statement(Spanned<Stmt>),
    Expression(Spanned<Expr>),
}

/// Keywords that end the block they follow; the enclosing construct consumes
/// them.
const BLOCK_TERMINATORS: &[&str] = &["end", "else", "elseif", "next", "wend", "loop"];

/// Parser state: just the token stream. All position tracking lives in the
/// tokens themselves.
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self { lexer }
    }

    /// Parse the stream as the named rule.
    ///
    /// Supported rules are `"module"`, `"block"`, `"statement"` and
    /// `"expression"`. An unknown rule name is a positionless syntax error.
    pub fn parse(&mut self, rule: &str) -> Result<ParsedRule, ParseError> {
        match rule {
            "module" => self.module().map(ParsedRule::Module),
            "block" => self.block().map(ParsedRule::Block),
            "statement" => self.statement().map(ParsedRule::Statement),
            "expression" => self.expression_entry().map(ParsedRule::Expression),
            _ => Err(SyntaxError::new(format!("Unknown rule {rule:?}"), None).into()),
        }
    }

    /// Parse a whole module: statements up to end of file.
    pub fn module(&mut self) -> Result<Spanned<Block>, ParseError> {
        let start = self.current_position()?;
        let block = self.block()?;
        self.skip_separators()?;
        let trailing = self.peek_owned()?;
        if !trailing.is_end_of_file() {
            return Err(SyntaxError::at(
                format!("Unexpected {} at module level", trailing.describe()),
                trailing.position,
            )
            .into());
        }
        let position = start.merge(&trailing.position);
        Ok(Spanned::new(block.node, position))
    }

    /// Parse statements until end of file or a block terminator keyword, which
    /// is left in the stream for the enclosing construct.
    pub fn block(&mut self) -> Result<Spanned<Block>, ParseError> {
        let start = self.current_position()?;
        let mut body = Vec::new();
        loop {
            self.skip_separators()?;
            let next = self.lexer.peek(0)?;
            if next.is_end_of_file() {
                break;
            }
            if next.category == TokenCategory::Keyword
                && BLOCK_TERMINATORS.iter().any(|word| *next == *word)
            {
                break;
            }
            body.push(self.statement()?);
            self.expect_statement_boundary()?;
        }
        let position = match body.last() {
            Some(last) => start.merge(&last.position),
            None => start,
        };
        Ok(Spanned::new(Block { body }, position))
    }
}
