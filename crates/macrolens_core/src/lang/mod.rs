//! VBA language vocabulary registries.
//!
//! This module is the front door for language-level vocabulary: the reserved-word set,
//! the reclassification sets applied by the lexer's second pass, and the operator table
//! with its precedence metadata.
//!
//! The design goal is to avoid stringly-typed checks scattered across the toolchain.
//! The lexer resolves raw token text against these tables once; everything downstream
//! works with token categories and [`operators::Op`] kinds.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - VBA is case-insensitive, so every lookup here folds case.

pub mod keywords;
pub mod operators;
