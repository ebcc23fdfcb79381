//! Syntax front end for VBA-family macro source.
//!
//! This crate turns the text of a macro module (typically extracted from an Office
//! document) into a positioned abstract syntax tree. It is the first stage of the
//! macrolens pipeline; static and dynamic analyses build on the AST it produces.
//!
//! The front end is split into:
//! - [`position`]: spans into the original source, precise to the character,
//! - [`lexer`]: a two-pass tokenizer with lookahead and checkpoint backtracking,
//! - [`ast`]: the tree node types,
//! - [`parser`]: a hand-written parser whose expression layer is a precedence
//!   (shunting-yard) engine,
//! - [`diagnostics`]: positioned scan and syntax errors with a terse, grep-friendly
//!   rendering.
//!
//! Malicious macros are routinely mangled on purpose, so the front end leans
//! permissive where VBA hosts are: case is folded everywhere, spelling synonyms
//! such as `=<` are accepted, and every error points back at the offending source.
//!
//! ## Quick start
//!
//! ```
//! use macrolens_syntax::parser::parse_expression;
//!
//! let expr = parse_expression("a * b + 1", "demo.vba").unwrap();
//! assert_eq!(expr.position.text(), "a * b + 1");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod token_helpers;
