//! Parser for VBA-family macro source.
//!
//! Statements are parsed by recursive descent; expressions by a precedence
//! (shunting-yard) engine that folds identical adjacent binary operators into
//! one n-ary node. The parser pulls tokens from the [`Lexer`] on demand and uses
//! its checkpoints to parse speculatively where the grammar is ambiguous (an
//! implicit assignment is indistinguishable from a call statement until the `=`
//! does or does not show up).
//!
//! ## Examples
//!
//! ```rust
//! use macrolens_syntax::parser::parse_module;
//!
//! let source = "Sub Payload()\n    x = 2 + 2\nEnd Sub\n";
//! let module = parse_module(source, "lure.vba").unwrap();
//! assert_eq!(module.node.body.len(), 1);
//! ```

use macrolens_core::lang::operators::Op;

use crate::ast::*;
use crate::diagnostics::{ParseError, SyntaxError};
use crate::lexer::{Lexer, Token, TokenCategory};
use crate::position::Position;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/expr.rs");
include!("parser/literals.rs");
include!("parser/stmts.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
