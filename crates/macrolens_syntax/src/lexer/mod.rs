//! Two-pass tokenizer with lookahead and checkpoint backtracking.
//!
//! The first pass runs a fixed, ordered set of scanners ([`scan`]) and takes the
//! first match; the order encodes the grammar's priorities. The second pass
//! reclassifies what the first pass produced, using the shared vocabulary
//! registries: identifiers that are reserved words become keywords (or operators,
//! boolean/variant/object literals), symbols with an operator role become
//! operators. `Mid`/`MidB` keep their identifier category, and followed
//! immediately by `$` they fuse with it into one identifier token.
//!
//! The stream is pull-based. [`Lexer::pop`] yields the next token, [`Lexer::peek`]
//! looks ahead without consuming, and the checkpoint API gives the parser cheap
//! speculative parsing: a checkpoint is an index into the append-only token
//! buffer, so saving and backtracking are O(1) and never re-scan source text.
//!
//! Popping past the end of the stream yields empty end-of-file tokens forever.

mod scan;
pub mod tokens;

use std::collections::VecDeque;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::trace;

use macrolens_core::lang::keywords::{self, Reclass};
use macrolens_core::lang::operators;

use crate::diagnostics::ScanError;
use crate::position::Position;

pub use tokens::{ConcatError, Token, TokenCategory};

type Scanner = fn(&str, usize) -> Option<usize>;

/// First-pass scanners, in priority order. First match wins.
const SCANNERS: &[(Scanner, TokenCategory)] = &[
    (scan::end_of_file, TokenCategory::EndOfFile),
    (scan::blank, TokenCategory::Blank),
    (scan::float, TokenCategory::Float),
    (scan::float_leading_dot, TokenCategory::Float),
    (scan::integer, TokenCategory::Integer),
    (scan::string, TokenCategory::String),
    (scan::symbol, TokenCategory::Symbol),
    (scan::end_of_statement, TokenCategory::EndOfStatement),
    (scan::rem_comment, TokenCategory::Comment),
    (scan::identifier, TokenCategory::Identifier),
    (scan::quote_comment, TokenCategory::Comment),
];

/// Pull-based token stream over one source stream.
pub struct Lexer {
    stream: Arc<str>,
    stream_name: Arc<str>,
    /// Byte offset of the next unscanned character.
    index: usize,
    /// 1-based line/column of the next unscanned character.
    line: usize,
    column: usize,
    /// Scanned tokens not yet dropped; `pending[0]` is token number `base`.
    pending: VecDeque<Token>,
    /// Absolute number of the first buffered token.
    base: usize,
    /// Absolute number of the next token [`Lexer::pop`] yields.
    cursor: usize,
    /// Saved cursors, innermost last.
    checkpoints: Vec<usize>,
}

impl Lexer {
    /// Build a lexer over `stream`.
    ///
    /// An empty `stream_name` is replaced by a hash of the content, so that
    /// diagnostics for anonymous streams (macros carved out of documents rarely
    /// have a real path) still carry a stable, attributable name.
    pub fn new(stream: &str, stream_name: &str) -> Self {
        let stream: Arc<str> = Arc::from(stream);
        let stream_name: Arc<str> = if stream_name.is_empty() {
            Arc::from(content_hash(&stream))
        } else {
            Arc::from(stream_name)
        };
        Self {
            stream,
            stream_name,
            index: 0,
            line: 1,
            column: 1,
            pending: VecDeque::new(),
            base: 0,
            cursor: 0,
            checkpoints: Vec::new(),
        }
    }

    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }

    /// Yield the next token.
    ///
    /// At the end of the stream this returns an empty end-of-file token, and
    /// keeps doing so on every further call.
    pub fn pop(&mut self) -> Result<Token, ScanError> {
        self.ensure(1)?;
        let token = self.pending[self.cursor - self.base].clone();
        self.cursor += 1;
        if self.checkpoints.is_empty() {
            self.drop_consumed();
        }
        Ok(token)
    }

    /// Look `distance` tokens ahead without consuming anything. `peek(0)` is the
    /// token the next [`Lexer::pop`] would yield.
    pub fn peek(&mut self, distance: usize) -> Result<&Token, ScanError> {
        self.ensure(distance + 1)?;
        Ok(&self.pending[self.cursor - self.base + distance])
    }

    /// Mark the current stream state. Checkpoints nest.
    pub fn save_checkpoint(&mut self) {
        self.checkpoints.push(self.cursor);
        trace!(cursor = self.cursor, depth = self.checkpoints.len(), "checkpoint saved");
    }

    /// Rewind to the innermost checkpoint and drop it. Tokens popped since the
    /// checkpoint will be yielded again, identical to the first delivery.
    ///
    /// # Panics
    ///
    /// Panics if no checkpoint is active; that is a bug in the caller.
    pub fn backtrack(&mut self) {
        let checkpoint = self
            .checkpoints
            .pop()
            .expect("backtrack without an active checkpoint");
        trace!(from = self.cursor, to = checkpoint, "backtracking");
        self.cursor = checkpoint;
    }

    /// Drop the innermost checkpoint, keeping the tokens consumed since.
    ///
    /// # Panics
    ///
    /// Panics if no checkpoint is active; that is a bug in the caller.
    pub fn discard_checkpoint(&mut self) {
        self.checkpoints
            .pop()
            .expect("discard without an active checkpoint");
        if self.checkpoints.is_empty() {
            self.drop_consumed();
        }
    }

    /// Drain the whole stream, end-of-file token included.
    pub fn tokens(mut self) -> Result<Vec<Token>, ScanError> {
        let mut out = Vec::new();
        loop {
            let token = self.pop()?;
            let done = token.category == TokenCategory::EndOfFile;
            out.push(token);
            if done {
                return Ok(out);
            }
        }
    }

    /// Make sure `count` tokens are buffered at and after the cursor.
    fn ensure(&mut self, count: usize) -> Result<(), ScanError> {
        while self.pending.len() < self.cursor - self.base + count {
            self.second_pass()?;
        }
        Ok(())
    }

    /// Forget tokens before the cursor. Only valid with no active checkpoint.
    fn drop_consumed(&mut self) {
        while self.base < self.cursor {
            self.pending.pop_front();
            self.base += 1;
        }
    }

    /// Scan one raw token.
    fn first_pass(&mut self) -> Result<Token, ScanError> {
        for (scanner, category) in SCANNERS {
            if let Some(end) = scanner(&self.stream, self.index) {
                return Ok(self.take(end, *category));
            }
        }
        let end = self.index
            + self.stream[self.index..]
                .chars()
                .next()
                .map_or(0, char::len_utf8);
        let position = self.position_of(self.index, end);
        Err(ScanError::new("Can't scan this character sequence", position))
    }

    /// Scan and reclassify, appending one (or, for `Mid$`, up to two) tokens to
    /// the buffer.
    fn second_pass(&mut self) -> Result<(), ScanError> {
        let token = self.reclassified()?;
        if token.category == TokenCategory::Identifier && (token == "mid" || token == "midb") {
            return self.fuse_mid(token);
        }
        self.pending.push_back(token);
        Ok(())
    }

    /// Scan one token and promote its category through the vocabulary
    /// registries.
    fn reclassified(&mut self) -> Result<Token, ScanError> {
        let mut token = self.first_pass()?;
        match token.category {
            TokenCategory::Identifier if keywords::is_keyword(&token.text) => {
                match keywords::reclassify(&token.text) {
                    Some(Reclass::Operator) => token.category = TokenCategory::Operator,
                    Some(Reclass::Boolean) => token.category = TokenCategory::Boolean,
                    Some(Reclass::Variant) => token.category = TokenCategory::Variant,
                    Some(Reclass::Object) => token.category = TokenCategory::Object,
                    // `Mid` and `MidB` are reserved only for the `$` fusion;
                    // they stay identifiers so plain `Mid(s, 1)` calls parse.
                    None if token == "mid" || token == "midb" => {}
                    None => token.category = TokenCategory::Keyword,
                }
            }
            TokenCategory::Symbol if operators::is_symbol_operator(&token.text) => {
                token.category = TokenCategory::Operator;
            }
            _ => {}
        }
        Ok(token)
    }

    /// `Mid`/`MidB` directly followed by `$` is one identifier token (`Mid$`
    /// names a different function than `Mid`). Any other follower is kept as
    /// its own, reclassified token.
    fn fuse_mid(&mut self, token: Token) -> Result<(), ScanError> {
        let next = self.reclassified()?;
        if next.category == TokenCategory::Symbol && next.text == "$" {
            if let Ok(fused) = token.concat(&next) {
                self.pending.push_back(fused);
                return Ok(());
            }
        }
        self.pending.push_back(token);
        self.pending.push_back(next);
        Ok(())
    }

    fn take(&mut self, end: usize, category: TokenCategory) -> Token {
        let position = self.position_of(self.index, end);
        let token = Token::new(&self.stream[self.index..end], category, position.clone());
        self.index = end;
        self.line = position.end_line();
        self.column = position.end_column();
        token
    }

    fn position_of(&self, start: usize, end: usize) -> Position {
        Position::from_indices(
            Arc::clone(&self.stream_name),
            Arc::clone(&self.stream),
            start,
            end,
            self.line,
            self.column,
        )
    }
}

/// Tokenize a whole stream.
#[tracing::instrument(skip_all, fields(stream_name = stream_name, stream_len = stream.len()))]
pub fn lex(stream: &str, stream_name: &str) -> Result<Vec<Token>, ScanError> {
    Lexer::new(stream, stream_name).tokens()
}

/// Short hex digest used to name anonymous streams.
fn content_hash(stream: &str) -> String {
    let digest = Sha256::digest(stream.as_bytes());
    digest.iter().take(8).map(|b| format!("{b:02x}")).collect()
}
