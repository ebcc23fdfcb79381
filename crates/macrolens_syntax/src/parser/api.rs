/// Public parsing entry points.
///
/// Thin wrappers that build the lexer/parser pair and run one rule. `stream_name`
/// follows the lexer's convention: empty means "name the stream after its
/// content hash".

/// Parse a whole module.
#[tracing::instrument(skip_all, fields(stream_name = stream_name, stream_len = source.len()))]
pub fn parse_module(source: &str, stream_name: &str) -> Result<Spanned<Block>, ParseError> {
    Parser::new(Lexer::new(source, stream_name)).module()
}

/// Parse a single statement.
#[tracing::instrument(skip_all, fields(stream_name = stream_name, stream_len = source.len()))]
pub fn parse_statement(source: &str, stream_name: &str) -> Result<Spanned<Stmt>, ParseError> {
    Parser::new(Lexer::new(source, stream_name)).statement()
}

/// Parse a single expression; the whole stream must be one expression.
#[tracing::instrument(skip_all, fields(stream_name = stream_name, stream_len = source.len()))]
pub fn parse_expression(source: &str, stream_name: &str) -> Result<Spanned<Expr>, ParseError> {
    Parser::new(Lexer::new(source, stream_name)).expression_entry()
}
