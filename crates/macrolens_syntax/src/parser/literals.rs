/// Literal decoding.
///
/// VBA's numeric literal semantics live here: integer width suffixes (`%`, `&`,
/// `^`), base prefixes (`&H`, `&O`, bare `&`), the signed/bit-pattern asymmetry
/// between decimal and base-prefixed literals, float suffixes (`!`, `#`, `@`)
/// and the two exponent marker spellings (`e`, `d`). Decoding happens during
/// parsing so that out-of-range literals are reported with their position, and
/// so the AST carries values, not strings.

/// Build an operand node from a literal, identifier or `Me` token.
fn primary(token: &Token) -> Result<Spanned<Expr>, ParseError> {
    let position = token.position.clone();
    let node = match token.category {
        TokenCategory::Integer => Expr::Literal(decode_integer(token)?),
        TokenCategory::Float => Expr::Literal(decode_float(token)?),
        TokenCategory::String => Expr::Literal(Literal::Str(decode_string(&token.text))),
        TokenCategory::Boolean => Expr::Literal(Literal::Bool(*token == "true")),
        TokenCategory::Variant => {
            if *token == "empty" {
                Expr::Literal(Literal::Empty)
            } else {
                Expr::Literal(Literal::Null)
            }
        }
        TokenCategory::Object => Expr::Literal(Literal::Nothing),
        TokenCategory::Identifier => Expr::Name(token.text.clone()),
        _ => unreachable!("primary on a non-operand token"),
    };
    Ok(Spanned::new(node, position))
}

fn integer_out_of_range(token: &Token, width: IntegerWidth) -> ParseError {
    let bits = match width {
        IntegerWidth::W16 => 16,
        IntegerWidth::W32 => 32,
        IntegerWidth::W64 => 64,
    };
    SyntaxError::at(
        format!("Integer literal out of range for {bits} bits"),
        token.position.clone(),
    )
    .into()
}

/// Decode an integer literal token.
///
/// Decimal literals are signed: a width suffix demands the value fit the
/// positive range of that width. Base-prefixed literals are bit patterns: the
/// digits must fit the width *unsigned* and are then reinterpreted as the
/// signed value of that width, so `&HFFFF%` decodes to `-1`.
///
/// Without a suffix, a decimal literal takes the narrowest fitting width (16
/// then 32 bits) and falls back to a `Double` when even 32 bits are too small;
/// a base-prefixed literal tries the 16- then 32-bit pattern and fails beyond
/// that.
fn decode_integer(token: &Token) -> Result<Literal, ParseError> {
    let text = token.text.as_str();
    let (body, width) = match text.as_bytes().last() {
        Some(b'%') => (&text[..text.len() - 1], Some(IntegerWidth::W16)),
        Some(b'&') => (&text[..text.len() - 1], Some(IntegerWidth::W32)),
        Some(b'^') => (&text[..text.len() - 1], Some(IntegerWidth::W64)),
        _ => (text, None),
    };
    let (radix, digits) = match body.strip_prefix('&') {
        Some(rest) => {
            if let Some(hex) = rest.strip_prefix(['h', 'H']) {
                (16, hex)
            } else if let Some(oct) = rest.strip_prefix(['o', 'O']) {
                (8, oct)
            } else {
                (8, rest)
            }
        }
        None => (10, body),
    };
    // Overflowing u128 only happens with absurd digit counts; treated the same
    // as exceeding the width.
    let parsed = u128::from_str_radix(digits, radix).ok();

    match (width, radix) {
        (Some(width), 10) => {
            let max = match width {
                IntegerWidth::W16 => i16::MAX as u128,
                IntegerWidth::W32 => i32::MAX as u128,
                IntegerWidth::W64 => i64::MAX as u128,
            };
            match parsed {
                Some(value) if value <= max => Ok(Literal::Integer {
                    value: value as i64,
                    width,
                }),
                _ => Err(integer_out_of_range(token, width)),
            }
        }
        (Some(width), _) => {
            let value = match (width, parsed) {
                (IntegerWidth::W16, Some(v)) if v <= u16::MAX as u128 => v as u16 as i16 as i64,
                (IntegerWidth::W32, Some(v)) if v <= u32::MAX as u128 => v as u32 as i32 as i64,
                (IntegerWidth::W64, Some(v)) if v <= u64::MAX as u128 => v as u64 as i64,
                _ => return Err(integer_out_of_range(token, width)),
            };
            Ok(Literal::Integer { value, width })
        }
        (None, 10) => match parsed {
            Some(v) if v <= i16::MAX as u128 => Ok(Literal::Integer {
                value: v as i64,
                width: IntegerWidth::W16,
            }),
            Some(v) if v <= i32::MAX as u128 => Ok(Literal::Integer {
                value: v as i64,
                width: IntegerWidth::W32,
            }),
            // Too big for a Long: VBA quietly reads it as a Double.
            _ => match digits.parse::<f64>() {
                Ok(value) => Ok(Literal::Double(value)),
                Err(_) => Err(integer_out_of_range(token, IntegerWidth::W32)),
            },
        },
        (None, _) => match parsed {
            Some(v) if v <= u16::MAX as u128 => Ok(Literal::Integer {
                value: v as u16 as i16 as i64,
                width: IntegerWidth::W16,
            }),
            Some(v) if v <= u32::MAX as u128 => Ok(Literal::Integer {
                value: v as u32 as i32 as i64,
                width: IntegerWidth::W32,
            }),
            _ => Err(integer_out_of_range(token, IntegerWidth::W32)),
        },
    }
}

/// Decode a float literal token into a `Single`, `Double` or `Currency`.
fn decode_float(token: &Token) -> Result<Literal, ParseError> {
    let text = token.text.as_str();
    let (body, suffix) = match text.as_bytes().last() {
        Some(b'!') => (&text[..text.len() - 1], Some('!')),
        Some(b'#') => (&text[..text.len() - 1], Some('#')),
        Some(b'@') => (&text[..text.len() - 1], Some('@')),
        _ => (text, None),
    };
    let (mantissa, exponent) = match body.find(['e', 'E', 'd', 'D']) {
        Some(at) => (&body[..at], &body[at + 1..]),
        None => (body, ""),
    };
    let malformed =
        || ParseError::from(SyntaxError::at("Malformed float literal", token.position.clone()));
    let mantissa: f64 = mantissa.parse().map_err(|_| malformed())?;
    let exponent: i32 = if exponent.is_empty() {
        0
    } else {
        exponent.parse().map_err(|_| malformed())?
    };
    let value = mantissa * 10f64.powi(exponent);

    match suffix {
        Some('!') => {
            if value.is_finite() && value.abs() <= f32::MAX as f64 {
                Ok(Literal::Single(value as f32))
            } else {
                Err(SyntaxError::at(
                    "Float literal out of range for Single",
                    token.position.clone(),
                )
                .into())
            }
        }
        Some('@') => {
            // Currency is a 64-bit integer of 1/10000ths.
            let scaled = value * 10_000.0;
            if scaled.is_finite() && scaled.abs() <= i64::MAX as f64 {
                Ok(Literal::Currency(scaled.round() as i64))
            } else {
                Err(SyntaxError::at(
                    "Float literal out of range for Currency",
                    token.position.clone(),
                )
                .into())
            }
        }
        _ => {
            if value.is_finite() {
                Ok(Literal::Double(value))
            } else {
                Err(SyntaxError::at(
                    "Float literal out of range for Double",
                    token.position.clone(),
                )
                .into())
            }
        }
    }
}

/// Strip the quotes and unescape doubled quotes.
fn decode_string(text: &str) -> String {
    text[1..text.len() - 1].replace("\"\"", "\"")
}
