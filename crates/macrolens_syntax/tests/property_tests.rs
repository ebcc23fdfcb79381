//! Property-based tests for the macro front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use macrolens_core::lang::keywords;
use macrolens_syntax::ast::{Expr, Literal};
use macrolens_syntax::lexer::{Lexer, TokenCategory, lex};
use macrolens_syntax::parser::parse_expression;

// Strategy for generating identifiers that are not reserved words.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}".prop_filter("Not a keyword", |s| !keywords::is_keyword(s))
}

// Strategy for generating a chain of one repeated binary operator,
// e.g. `3 + 41 + 7`.
fn chain_strategy() -> impl Strategy<Value = (String, usize)> {
    (
        prop::collection::vec(1u16..1000, 2..8),
        prop_oneof!["\\+", "\\*", "-"],
    )
        .prop_map(|(values, op)| {
            let rendered: Vec<String> = values.iter().map(u16::to_string).collect();
            (rendered.join(&format!(" {op} ")), values.len())
        })
}

// =============================================================================
// Lexer Properties
// =============================================================================

mod lexer_properties {
    use super::*;

    proptest! {
        /// Property: A non-reserved identifier lexes to exactly one identifier
        /// token with its text intact.
        #[test]
        fn identifiers_survive_lexing(ident in ident_strategy()) {
            let tokens = lex(&ident, "prop.vba").expect("lex failed");
            prop_assert_eq!(tokens.len(), 2); // identifier + end of file
            prop_assert_eq!(tokens[0].category, TokenCategory::Identifier);
            prop_assert_eq!(tokens[0].text.as_str(), ident.as_str());
        }

        /// Property: Token spans tile the stream. Every token's position reads
        /// back its own text, and the concatenation of all token texts is the
        /// original stream.
        #[test]
        fn token_spans_tile_the_stream((source, _) in chain_strategy()) {
            let tokens = lex(&source, "prop.vba").expect("lex failed");
            let mut rebuilt = String::new();
            for token in &tokens {
                prop_assert_eq!(token.position.text(), token.text.as_str());
                rebuilt.push_str(&token.text);
            }
            prop_assert_eq!(rebuilt, source);
        }

        /// Property: Backtracking to a checkpoint replays the exact same
        /// tokens.
        #[test]
        fn checkpoint_replay_is_identical((source, _) in chain_strategy()) {
            let mut lexer = Lexer::new(&source, "prop.vba");
            lexer.pop().expect("pop failed");
            lexer.save_checkpoint();
            let mut first_run = Vec::new();
            loop {
                let token = lexer.pop().expect("pop failed");
                let done = token.category == TokenCategory::EndOfFile;
                first_run.push(token);
                if done {
                    break;
                }
            }
            lexer.backtrack();
            for expected in &first_run {
                let replayed = lexer.pop().expect("pop failed");
                prop_assert_eq!(&replayed, expected);
            }
        }
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

mod parser_properties {
    use super::*;

    proptest! {
        /// Property: A chain of one repeated binary operator folds into a
        /// single n-ary node with one operand per term.
        #[test]
        fn repeated_operators_fold_flat((source, terms) in chain_strategy()) {
            let parsed = parse_expression(&source, "prop.vba").expect("parse failed");
            let Expr::Operation { operands, .. } = parsed.node else {
                panic!("expected an operation, got {:?}", parsed.node);
            };
            prop_assert_eq!(operands.len(), terms);
        }

        /// Property: The span of a parsed expression covers exactly the source
        /// it was parsed from.
        #[test]
        fn expression_spans_cover_the_source((source, _) in chain_strategy()) {
            let parsed = parse_expression(&source, "prop.vba").expect("parse failed");
            prop_assert_eq!(parsed.position.text(), source.as_str());
        }

        /// Property: Small decimal literals decode to 16-bit integers with
        /// their numeric value intact.
        #[test]
        fn small_decimal_literals_round_trip(value in 0i64..=32767) {
            let source = value.to_string();
            let parsed = parse_expression(&source, "prop.vba").expect("parse failed");
            let Expr::Literal(Literal::Integer { value: decoded, .. }) = parsed.node else {
                panic!("expected an integer literal");
            };
            prop_assert_eq!(decoded, value);
        }

        /// Property: Any non-reserved identifier parses as a bare name.
        #[test]
        fn identifiers_parse_as_names(ident in ident_strategy()) {
            let parsed = parse_expression(&ident, "prop.vba").expect("parse failed");
            prop_assert_eq!(parsed.node, Expr::Name(ident));
        }
    }
}
