//! Provide the canonical VBA language vocabulary shared across the macrolens toolchain.
//!
//! This crate is intentionally small and dependency-free. It contains the reserved-word
//! and operator tables that both:
//! - the lexer can use to reclassify raw tokens, and
//! - downstream tooling (deobfuscation, re-formatting, reporting) can use to stay
//!   aligned with the front end without re-declaring vocabulary.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no AST types, and no global state.
//! - All lookups are case-insensitive, matching VBA's case folding rules.

pub mod lang;
