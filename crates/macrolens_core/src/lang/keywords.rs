//! Reserved words of the VBA grammar and the reclassification sets applied on top
//! of them.
//!
//! Identifier tokens whose text matches an entry in [`KEYWORDS`] are promoted to
//! keyword tokens by the lexer's second pass. A handful of reserved words carry a
//! more specific role than "keyword" (word-shaped operators, boolean and variant
//! literals, the object literal `Nothing`); [`reclassify`] reports that role so the
//! lexer can promote them further.

/// More specific role a reserved word can take on, beyond plain keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reclass {
    /// Word-shaped operator (`And`, `Not`, `Like`, ...).
    Operator,
    /// Boolean literal (`True`, `False`).
    Boolean,
    /// Variant literal (`Empty`, `Null`).
    Variant,
    /// Object literal (`Nothing`).
    Object,
}

/// Every reserved word of the grammar, lowercase, sorted for binary search.
///
/// The table includes the `VB_*` attribute names that appear in module headers
/// extracted from Office documents; they are reserved in that position even though
/// user code rarely spells them.
pub const KEYWORDS: &[&str] = &[
    "access",
    "addressof",
    "alias",
    "and",
    "any",
    "append",
    "as",
    "attribute",
    "base",
    "binary",
    "boolean",
    "byref",
    "byte",
    "byval",
    "call",
    "case",
    "class_initialize",
    "class_terminate",
    "close",
    "compare",
    "const",
    "currency",
    "date",
    "declare",
    "defbool",
    "defbyte",
    "defcur",
    "defdate",
    "defdbl",
    "defint",
    "deflng",
    "deflnglng",
    "deflngptr",
    "defobj",
    "defsng",
    "defstr",
    "defvar",
    "dim",
    "do",
    "double",
    "each",
    "else",
    "elseif",
    "empty",
    "end",
    "endif",
    "enum",
    "eqv",
    "erase",
    "error",
    "event",
    "exit",
    "explicit",
    "false",
    "for",
    "friend",
    "function",
    "get",
    "global",
    "go",
    "gosub",
    "goto",
    "if",
    "imp",
    "implements",
    "in",
    "input",
    "integer",
    "is",
    "len",
    "let",
    "lib",
    "like",
    "line",
    "lineinput",
    "lock",
    "long",
    "longlong",
    "longptr",
    "loop",
    "lset",
    "me",
    "mid",
    "midb",
    "mod",
    "module",
    "new",
    "next",
    "not",
    "nothing",
    "null",
    "object",
    "on",
    "open",
    "option",
    "optional",
    "or",
    "output",
    "paramarray",
    "preserve",
    "print",
    "private",
    "property",
    "ptrsafe",
    "public",
    "put",
    "raiseevent",
    "random",
    "read",
    "redim",
    "rem",
    "reset",
    "resume",
    "return",
    "rset",
    "seek",
    "select",
    "set",
    "shared",
    "single",
    "spc",
    "static",
    "step",
    "stop",
    "string",
    "sub",
    "tab",
    "text",
    "then",
    "to",
    "true",
    "type",
    "typeof",
    "unlock",
    "until",
    "variant",
    "vb_base",
    "vb_control",
    "vb_creatable",
    "vb_customizable",
    "vb_description",
    "vb_exposed",
    "vb_ext_key",
    "vb_globalnamespace",
    "vb_helpid",
    "vb_invoke_func",
    "vb_invoke_property",
    "vb_invoke_propertyput",
    "vb_invoke_propertyputref",
    "vb_memberflags",
    "vb_name",
    "vb_predeclaredid",
    "vb_procdata",
    "vb_templatederived",
    "vb_usermemid",
    "vb_vardescription",
    "vb_varhelpid",
    "vb_varmemberflags",
    "vb_varprocdata",
    "vb_varusermemid",
    "wend",
    "while",
    "width",
    "with",
    "withevents",
    "write",
    "xor",
];

/// Reserved words that act as operators in expressions.
pub const WORD_OPERATORS: &[&str] = &["and", "eqv", "imp", "is", "like", "not", "or", "xor"];

/// Reserved words that are boolean literals.
pub const BOOLEANS: &[&str] = &["false", "true"];

/// Reserved words that are variant literals.
pub const VARIANTS: &[&str] = &["empty", "null"];

/// Reserved words that are object literals.
pub const OBJECTS: &[&str] = &["nothing"];

/// Whether `name` is a reserved word, ignoring case.
pub fn is_keyword(name: &str) -> bool {
    let folded = name.to_ascii_lowercase();
    KEYWORDS.binary_search(&folded.as_str()).is_ok()
}

/// The specialized role of the reserved word `name`, if it has one.
///
/// Returns `None` for reserved words that stay plain keywords, and for names that
/// are not reserved at all.
pub fn reclassify(name: &str) -> Option<Reclass> {
    let folded = name.to_ascii_lowercase();
    let name = folded.as_str();
    if WORD_OPERATORS.contains(&name) {
        Some(Reclass::Operator)
    } else if BOOLEANS.contains(&name) {
        Some(Reclass::Boolean)
    } else if VARIANTS.contains(&name) {
        Some(Reclass::Variant)
    } else if OBJECTS.contains(&name) {
        Some(Reclass::Object)
    } else {
        None
    }
}
