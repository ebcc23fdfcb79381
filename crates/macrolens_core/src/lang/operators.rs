//! Operator table for VBA expressions.
//!
//! Each operator kind carries a precedence level used by the expression engine:
//! higher binds tighter. The two negative levels belong to the closing
//! parentheses, which never end up in an AST node; they exist so that a closing
//! symbol compares lower than every real operator and therefore flushes the
//! whole pending stack back to its opening marker.

use std::fmt;

/// Symbols that are promoted from plain symbol tokens to operator tokens by the
/// lexer's second pass.
pub const SYMBOL_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "\\", "^", "&", "=", "<>", "><", "<", ">", "<=", "=<", ">=", "=>", "(",
    ")", ".", "!", ",",
];

/// Operator kinds, covering word operators, symbol operators and the structural
/// pseudo-operators the expression engine tracks on its stack.
///
/// Spelling synonyms are folded at construction: `=<` and `<=` are both [`Op::Le`],
/// `=>` and `>=` both [`Op::Ge`], `><` and `<>` both [`Op::Ne`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `.` — member access, or with-member access in prefix position.
    Dot,
    /// `!` — dictionary access, or with-dictionary access in prefix position.
    Bang,
    /// `(` — grouping, call or index opening.
    LParen,
    /// `^`
    Pow,
    /// Unary `-`
    Neg,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `\` — integer division.
    IntDiv,
    /// `Mod`
    Mod,
    /// Binary `-`
    Sub,
    /// `+`
    Add,
    /// `&` — string concatenation.
    Concat,
    /// `=` in expression position.
    Eq,
    /// `<>` or `><`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=` or `=<`
    Le,
    /// `>=` or `=>`
    Ge,
    /// `Is` — object identity.
    Is,
    /// `Like` — pattern match.
    Like,
    /// `Not`
    Not,
    /// `And`
    And,
    /// `Or`
    Or,
    /// `Xor`
    Xor,
    /// `Eqv`
    Eqv,
    /// `Imp`
    Imp,
    /// `,` — argument separator.
    Comma,
    /// `)` closing a call or index.
    IndexClose,
    /// `)` closing a group.
    CloseParen,
}

impl Op {
    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> i8 {
        match self {
            Op::CloseParen => -2,
            Op::IndexClose => -1,
            Op::Comma => 0,
            Op::Imp => 1,
            Op::Eqv => 2,
            Op::Xor => 3,
            Op::Or => 4,
            Op::And => 5,
            Op::Not => 6,
            Op::Is | Op::Like | Op::Eq | Op::Ne | Op::Lt | Op::Gt | Op::Le | Op::Ge => 7,
            Op::Concat => 8,
            Op::Add | Op::Sub => 9,
            Op::Mod => 10,
            Op::IntDiv => 11,
            Op::Mul | Op::Div => 12,
            Op::Neg => 13,
            Op::Pow => 14,
            Op::Dot | Op::Bang | Op::LParen => 15,
        }
    }

    /// Whether this operator may appear in prefix position.
    pub fn is_unary(self) -> bool {
        matches!(self, Op::Neg | Op::Not | Op::Dot | Op::Bang | Op::LParen)
    }

    /// Resolve operator text to a kind.
    ///
    /// `unary` states whether the token sits in prefix position; it only changes
    /// the reading of `-`. Case is ignored for word operators. Returns `None`
    /// for text that is not an operator at all.
    pub fn from_symbol(text: &str, unary: bool) -> Option<Op> {
        let folded = text.to_ascii_lowercase();
        let op = match folded.as_str() {
            "." => Op::Dot,
            "!" => Op::Bang,
            "(" => Op::LParen,
            ")" => Op::CloseParen,
            "^" => Op::Pow,
            "-" if unary => Op::Neg,
            "-" => Op::Sub,
            "*" => Op::Mul,
            "/" => Op::Div,
            "\\" => Op::IntDiv,
            "mod" => Op::Mod,
            "+" => Op::Add,
            "&" => Op::Concat,
            "=" => Op::Eq,
            "," => Op::Comma,
            "<>" | "><" => Op::Ne,
            "<" => Op::Lt,
            ">" => Op::Gt,
            "<=" | "=<" => Op::Le,
            ">=" | "=>" => Op::Ge,
            "is" => Op::Is,
            "like" => Op::Like,
            "not" => Op::Not,
            "and" => Op::And,
            "or" => Op::Or,
            "xor" => Op::Xor,
            "eqv" => Op::Eqv,
            "imp" => Op::Imp,
            _ => return None,
        };
        Some(op)
    }

    /// Canonical source spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Dot => ".",
            Op::Bang => "!",
            Op::LParen => "(",
            Op::Pow => "^",
            Op::Neg | Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::IntDiv => "\\",
            Op::Mod => "Mod",
            Op::Add => "+",
            Op::Concat => "&",
            Op::Eq => "=",
            Op::Ne => "<>",
            Op::Lt => "<",
            Op::Gt => ">",
            Op::Le => "<=",
            Op::Ge => ">=",
            Op::Is => "Is",
            Op::Like => "Like",
            Op::Not => "Not",
            Op::And => "And",
            Op::Or => "Or",
            Op::Xor => "Xor",
            Op::Eqv => "Eqv",
            Op::Imp => "Imp",
            Op::Comma => ",",
            Op::IndexClose | Op::CloseParen => ")",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a symbol token doubles as an operator.
pub fn is_symbol_operator(text: &str) -> bool {
    SYMBOL_OPERATORS.contains(&text)
}
