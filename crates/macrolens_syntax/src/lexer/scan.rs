//! First-pass scanners.
//!
//! Each scanner tries to recognize one lexeme at a byte offset of the stream and
//! returns the end offset of the match, or `None`. The driver in the parent
//! module tries them in a fixed order and takes the first match, so the order
//! *is* the grammar priority: numeric literals before plain symbols (otherwise
//! `&h0` would scan as `&` then `h0`), `Rem` comments before identifiers, and
//! end-of-file before everything.

use crate::position::EOLS;

/// Whitespace characters. U+0019 shows up in streams extracted from OLE blobs;
/// U+3000 is the ideographic space.
fn is_blank_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{19}' | '\u{3000}')
}

fn char_at(stream: &str, index: usize) -> Option<char> {
    stream[index..].chars().next()
}

/// Consume consecutive blank characters starting at `index`.
fn eat_blanks(stream: &str, mut index: usize) -> usize {
    while let Some(c) = char_at(stream, index) {
        if !is_blank_char(c) {
            break;
        }
        index += c.len_utf8();
    }
    index
}

/// Matches the empty end-of-file lexeme. Keeping it as a scanner (rather than a
/// special case in the driver) preserves first-match-wins as the single rule.
pub(super) fn end_of_file(stream: &str, index: usize) -> Option<usize> {
    (index == stream.len()).then_some(index)
}

/// Blanks, including `_`-continuations: blank, underscore, optional blanks, a
/// line terminator, then optional blanks on the next line, all folded into one
/// blank token.
pub(super) fn blank(stream: &str, index: usize) -> Option<usize> {
    let mut end = eat_blanks(stream, index);
    if end == index {
        return None;
    }
    if char_at(stream, end) == Some('_') {
        let after_gap = eat_blanks(stream, end + 1);
        if let Some(eol) = EOLS.iter().find(|eol| stream[after_gap..].starts_with(**eol)) {
            end = eat_blanks(stream, after_gap + eol.len());
        }
        // No terminator after the underscore: the `_` is not a continuation,
        // leave it for the next scanner.
    }
    Some(end)
}

fn eat_digits(stream: &str, mut index: usize, radix: u32) -> usize {
    while let Some(c) = char_at(stream, index) {
        if !c.is_digit(radix) {
            break;
        }
        index += 1;
    }
    index
}

/// Optional exponent part: `e`/`E`/`d`/`D`, optional sign, digits.
fn eat_exponent(stream: &str, index: usize) -> Option<usize> {
    if !matches!(char_at(stream, index), Some('e' | 'E' | 'd' | 'D')) {
        return None;
    }
    let mut at = index + 1;
    if matches!(char_at(stream, at), Some('+' | '-')) {
        at += 1;
    }
    let end = eat_digits(stream, at, 10);
    (end > at).then_some(end)
}

fn eat_float_suffix(stream: &str, index: usize) -> usize {
    match char_at(stream, index) {
        Some('!' | '#' | '@') => index + 1,
        _ => index,
    }
}

/// Floats that start with digits: a fraction, an exponent or a type suffix must
/// be present, otherwise the lexeme belongs to the integer scanner.
pub(super) fn float(stream: &str, index: usize) -> Option<usize> {
    let digits_end = eat_digits(stream, index, 10);
    if digits_end == index {
        return None;
    }
    let mut end = digits_end;
    let mut qualified = false;
    if char_at(stream, end) == Some('.') {
        end = eat_digits(stream, end + 1, 10);
        qualified = true;
    }
    if let Some(exp_end) = eat_exponent(stream, end) {
        end = exp_end;
        qualified = true;
    }
    let suffixed = eat_float_suffix(stream, end);
    if suffixed > end {
        end = suffixed;
        qualified = true;
    }
    qualified.then_some(end)
}

/// Floats that start with the decimal point: `.25`, `.5e3!`.
pub(super) fn float_leading_dot(stream: &str, index: usize) -> Option<usize> {
    if char_at(stream, index) != Some('.') {
        return None;
    }
    let digits_end = eat_digits(stream, index + 1, 10);
    if digits_end == index + 1 {
        return None;
    }
    let end = eat_exponent(stream, digits_end).unwrap_or(digits_end);
    Some(eat_float_suffix(stream, end))
}

/// Integer literals: decimal digits, `&o`/`&` octal or `&h` hex, each with an
/// optional `%`/`&`/`^` width suffix.
pub(super) fn integer(stream: &str, index: usize) -> Option<usize> {
    let digits_end = match char_at(stream, index) {
        Some('&') => match char_at(stream, index + 1) {
            Some('h' | 'H') => {
                let end = eat_digits(stream, index + 2, 16);
                (end > index + 2).then_some(end)?
            }
            Some('o' | 'O') => {
                let end = eat_digits(stream, index + 2, 8);
                (end > index + 2).then_some(end)?
            }
            _ => {
                let end = eat_digits(stream, index + 1, 8);
                (end > index + 1).then_some(end)?
            }
        },
        _ => {
            let end = eat_digits(stream, index, 10);
            (end > index).then_some(end)?
        }
    };
    match char_at(stream, digits_end) {
        Some('%' | '&' | '^') => Some(digits_end + 1),
        _ => Some(digits_end),
    }
}

/// Double-quoted strings; `""` inside is an escaped quote. An unterminated
/// string matches nothing and surfaces as a scan error.
pub(super) fn string(stream: &str, index: usize) -> Option<usize> {
    if char_at(stream, index) != Some('"') {
        return None;
    }
    let mut at = index + 1;
    loop {
        match char_at(stream, at) {
            None => return None,
            Some('"') => {
                if char_at(stream, at + 1) == Some('"') {
                    at += 2;
                } else {
                    return Some(at + 1);
                }
            }
            Some(c) => at += c.len_utf8(),
        }
    }
}

const TWO_CHAR_SYMBOLS: [&str; 7] = [":=", "<=", "=<", ">=", "=>", "<>", "><"];
const ONE_CHAR_SYMBOLS: [char; 23] = [
    ',', '.', '!', '?', '#', '(', ')', '[', ']', ';', '%', '&', '^', '@', '$', '+', '-', '*', '/',
    '\\', '<', '>', '=',
];

/// Symbols, longest first so `:=` and the two-character comparisons win over
/// their one-character prefixes. Bare `:` is not a symbol; it terminates a
/// statement.
pub(super) fn symbol(stream: &str, index: usize) -> Option<usize> {
    if TWO_CHAR_SYMBOLS.iter().any(|sym| stream[index..].starts_with(sym)) {
        return Some(index + 2);
    }
    match char_at(stream, index) {
        Some(c) if ONE_CHAR_SYMBOLS.contains(&c) => Some(index + 1),
        _ => None,
    }
}

/// Statement terminators: a line terminator or `:`.
pub(super) fn end_of_statement(stream: &str, index: usize) -> Option<usize> {
    if let Some(eol) = EOLS.iter().find(|eol| stream[index..].starts_with(**eol)) {
        return Some(index + eol.len());
    }
    (char_at(stream, index) == Some(':')).then(|| index + 1)
}

/// `Rem` comments: the word `rem` followed by end-of-line, end-of-file, or a
/// space and then anything up to the line terminator (exclusive).
pub(super) fn rem_comment(stream: &str, index: usize) -> Option<usize> {
    let rest = stream.get(index..index + 3)?;
    if !rest.eq_ignore_ascii_case("rem") {
        return None;
    }
    let after = index + 3;
    if after == stream.len() || EOLS.iter().any(|eol| stream[after..].starts_with(*eol)) {
        return Some(after);
    }
    match char_at(stream, after) {
        Some(' ') => Some(to_end_of_line(stream, after + 1)),
        // `remainder` and friends are identifiers.
        _ => None,
    }
}

/// Identifiers: a letter, then letters, digits or underscores.
pub(super) fn identifier(stream: &str, index: usize) -> Option<usize> {
    if !matches!(char_at(stream, index), Some(c) if c.is_ascii_alphabetic()) {
        return None;
    }
    let mut end = index + 1;
    while matches!(
        char_at(stream, end),
        Some(c) if c.is_ascii_alphanumeric() || c == '_'
    ) {
        end += 1;
    }
    Some(end)
}

/// `'` comments, up to the line terminator (exclusive).
pub(super) fn quote_comment(stream: &str, index: usize) -> Option<usize> {
    (char_at(stream, index) == Some('\'')).then(|| to_end_of_line(stream, index + 1))
}

fn to_end_of_line(stream: &str, mut index: usize) -> usize {
    while let Some(c) = char_at(stream, index) {
        if EOLS.iter().any(|eol| stream[index..].starts_with(*eol)) {
            break;
        }
        index += c.len_utf8();
    }
    index
}
