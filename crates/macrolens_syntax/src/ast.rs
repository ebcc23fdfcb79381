//! Abstract syntax tree node types.
//!
//! Every node is wrapped in a [`Spanned`] carrying the [`Position`] it was parsed
//! from; analyses report findings against those spans. The tree is deliberately
//! plain data (public fields, no behaviour beyond a few predicates) so that
//! downstream passes can pattern-match freely.

use macrolens_core::lang::operators::Op;

use crate::position::Position;

/// A node plus the source span it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub position: Position,
}

impl<T> Spanned<T> {
    pub fn new(node: T, position: Position) -> Self {
        Self { node, position }
    }
}

/// Storage width of an integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    /// `Integer`, 16 bits (`%` suffix).
    W16,
    /// `Long`, 32 bits (`&` suffix).
    W32,
    /// `LongLong`, 64 bits (`^` suffix).
    W64,
}

/// A literal value.
///
/// Integer literals store the value after VBA's width semantics have been
/// applied: `&HFFFF%` is `-1`, not `65535`. Currency literals store the scaled
/// integer (four decimal digits of fraction), exactly as the runtime represents
/// them.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer { value: i64, width: IntegerWidth },
    /// `!` suffix.
    Single(f32),
    /// `#` suffix or no suffix.
    Double(f64),
    /// `@` suffix; the value times 10^4, stored as an integer.
    Currency(i64),
    /// Decoded content, quotes stripped and `""` unescaped.
    Str(String),
    Bool(bool),
    Empty,
    Null,
    Nothing,
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Explicitly parenthesized sub-expression. Kept in the tree: deobfuscation
    /// wants to reproduce the author's grouping.
    Paren(Box<Spanned<Expr>>),
    Literal(Literal),
    /// A plain name.
    Name(String),
    Me,
    /// `parent.child`; the child is always a bare name.
    MemberAccess {
        parent: Box<Spanned<Expr>>,
        child: Spanned<String>,
    },
    /// `parent!key`.
    DictAccess {
        parent: Box<Spanned<Expr>>,
        key: Spanned<String>,
    },
    /// `.child` inside a `With` block.
    WithMemberAccess(Spanned<String>),
    /// `!key` inside a `With` block.
    WithDictAccess(Spanned<String>),
    /// `base(args)` — a call or an array index; VBA cannot tell them apart
    /// syntactically, so neither do we.
    Index {
        base: Box<Spanned<Expr>>,
        args: ArgList,
    },
    /// A bare comma-joined list, before it is attached to a call.
    Args(ArgList),
    /// An omitted argument slot, as in `f(a, , b)`. Only ever appears
    /// transiently inside the expression engine; argument lists store the
    /// omission as an [`Arg`] without a value.
    Missing,
    /// An operator application. Identical adjacent binary operators are folded
    /// into one node with all their operands (`a + b + c` has three operands);
    /// unary operators have exactly one.
    Operation {
        operator: Op,
        operands: Vec<Spanned<Expr>>,
    },
}

impl Expr {
    /// Whether this expression can be the target of an assignment.
    pub fn is_l_expr(&self) -> bool {
        matches!(
            self,
            Expr::Name(_)
                | Expr::MemberAccess { .. }
                | Expr::DictAccess { .. }
                | Expr::WithMemberAccess(_)
                | Expr::WithDictAccess(_)
                | Expr::Index { .. }
        )
    }
}

/// Arguments of a call or index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgList(pub Vec<Arg>);

impl ArgList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// One argument. `value` is `None` for an omitted slot (`f(a, , b)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    pub value: Option<Spanned<Expr>>,
}

/// A sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub body: Vec<Spanned<Stmt>>,
}

/// What kind of declaration a [`VarDecl`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Dim,
    Const,
}

/// Whether an assignment was spelled `Let` (or bare) or `Set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignKind {
    Let,
    Set,
}

/// One declared variable or constant.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Spanned<String>,
    /// Declared type, if an `As` clause is present.
    pub ty: Option<Spanned<String>>,
    /// `As New T`.
    pub new: bool,
    /// Initial value; mandatory for constants.
    pub value: Option<Spanned<Expr>>,
}

/// One `If`/`ElseIf` arm.
#[derive(Debug, Clone, PartialEq)]
pub struct IfArm {
    pub condition: Spanned<Expr>,
    pub body: Block,
}

/// One procedure parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Spanned<String>,
    pub optional: bool,
    /// `true` for `ByVal`; `ByRef` is the default.
    pub by_val: bool,
    pub param_array: bool,
    pub ty: Option<Spanned<String>>,
    /// Default value of an `Optional` parameter.
    pub default: Option<Spanned<Expr>>,
}

/// A `Sub` or `Function` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcDef {
    pub name: Spanned<String>,
    pub params: Vec<Spanned<Param>>,
    /// Return type; `None` for subs and untyped functions.
    pub returns: Option<Spanned<String>>,
    pub body: Block,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `Dim x As T` / `Const k = 1` with a single declared name.
    VarDecl {
        kind: DeclKind,
        decl: Spanned<VarDecl>,
    },
    /// `Dim a, b As Long`.
    MultiVarDecl {
        kind: DeclKind,
        decls: Vec<Spanned<VarDecl>>,
    },
    /// `x = e`, `Let x = e` or `Set x = e`.
    Assign {
        kind: AssignKind,
        target: Spanned<Expr>,
        value: Spanned<Expr>,
    },
    /// `Call f(a)`, `f a, b` or a bare `f`.
    Call {
        target: Spanned<Expr>,
        args: ArgList,
    },
    If {
        arms: Vec<IfArm>,
        else_body: Option<Block>,
    },
    For {
        counter: Spanned<String>,
        start: Spanned<Expr>,
        end: Spanned<Expr>,
        step: Option<Spanned<Expr>>,
        body: Block,
    },
    While {
        condition: Spanned<Expr>,
        body: Block,
    },
    FunctionDef(ProcDef),
    SubDef(ProcDef),
}
