/// The expression engine.
///
/// A single left-to-right scan over the token stream drives two stacks: pending
/// operators and finished operands. Arity is resolved from the preceding
/// element (`-` after an operator is a negation, after an operand a
/// subtraction; `(` after an operand opens a call/index, otherwise a group).
///
/// A lower-precedence operator arriving on top of a higher-precedence one
/// flushes reductions, with one twist: an operator identical to the one on top
/// of the stack is pushed without reducing, so that `a + b + c` accumulates a
/// *run* that later folds into one n-ary node. Unary operators always push
/// without reducing, and reduce one at a time, so `--x` nests.
///
/// The stack is seeded with a virtual open parenthesis. A `)` that reduces all
/// the way down to it does not belong to this expression; scanning stops in
/// front of it and the caller decides what it means. Tokens that cannot
/// continue the expression (a keyword in operator position, a plain symbol, a
/// comment, an operand directly after another operand) likewise end the scan
/// without being consumed.
///
/// A comma with no operand in front of it records an omitted argument slot
/// (`f(a, , b)` passes three arguments, the middle one absent), as does a
/// trailing comma before the closing parenthesis.

/// One entry on the operator stack.
enum StackOp {
    /// Virtual open parenthesis seeded before scanning.
    Sentinel,
    /// A grouping `(`; `depth` is the operand stack height at push time.
    Group { token: Token, depth: usize },
    /// A call/index `(`.
    Index { token: Token, depth: usize },
    Unary { op: Op, token: Token },
    Binary { op: Op, token: Token },
}

impl StackOp {
    fn is_open_marker(&self) -> bool {
        matches!(
            self,
            StackOp::Sentinel | StackOp::Group { .. } | StackOp::Index { .. }
        )
    }

    fn precedence(&self) -> i8 {
        match self {
            StackOp::Sentinel | StackOp::Group { .. } => Op::CloseParen.precedence(),
            StackOp::Index { .. } => Op::IndexClose.precedence(),
            StackOp::Unary { op, .. } | StackOp::Binary { op, .. } => op.precedence(),
        }
    }
}

/// What the previous expression element was.
#[derive(Clone, Copy, PartialEq)]
enum Prev {
    None,
    Operand,
    Operator,
    /// A just-closed parenthesis; operand-like, except that a `(` after it
    /// still opens a call (`f(1)(2)`).
    Close,
}

impl Prev {
    /// In prefix position, operators read as unary.
    fn prefix(self) -> bool {
        matches!(self, Prev::None | Prev::Operator)
    }

    fn operand_like(self) -> bool {
        matches!(self, Prev::Operand | Prev::Close)
    }
}

/// Operator and operand stacks, with the reduction rules.
struct ExprEngine {
    ops: Vec<StackOp>,
    operands: Vec<Spanned<Expr>>,
}

impl ExprEngine {
    fn new() -> Self {
        Self {
            ops: vec![StackOp::Sentinel],
            operands: Vec::new(),
        }
    }

    /// Whether a real parenthesis is currently open.
    fn in_parens(&self) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, StackOp::Group { .. } | StackOp::Index { .. }))
    }

    /// Operand stack height owned by contexts outside the innermost open
    /// marker. Reductions never reach below it: `f(a +)` must not steal `f`.
    fn operand_floor(&self) -> usize {
        self.ops
            .iter()
            .rev()
            .find_map(|op| match op {
                StackOp::Sentinel => Some(0),
                StackOp::Group { depth, .. } | StackOp::Index { depth, .. } => Some(*depth),
                StackOp::Unary { .. } | StackOp::Binary { .. } => None,
            })
            .unwrap_or(0)
    }

    /// Record an omitted argument slot: a placeholder operand standing where
    /// the argument would have been.
    fn push_missing(&mut self, token: &Token) {
        self.operands
            .push(Spanned::new(Expr::Missing, token.position.clone()));
    }

    /// Push a binary operator, flushing reductions first. An operator identical
    /// to the top of the stack is stacked un-reduced to build up an n-ary run.
    fn push_binary(&mut self, op: Op, token: Token) -> Result<(), ParseError> {
        loop {
            match self.ops.last() {
                Some(top)
                    if !top.is_open_marker()
                        && top.precedence() >= op.precedence()
                        && !matches!(top, StackOp::Binary { op: t, .. } if *t == op) =>
                {
                    self.reduce_top()?;
                }
                _ => break,
            }
        }
        self.ops.push(StackOp::Binary { op, token });
        Ok(())
    }

    /// Open a call/index parenthesis. Tighter-or-equal postfix operators (a
    /// pending member access run) fold first so the call base is complete.
    fn push_index(&mut self, token: Token) -> Result<(), ParseError> {
        while matches!(
            self.ops.last(),
            Some(top) if !top.is_open_marker() && top.precedence() >= Op::LParen.precedence()
        ) {
            self.reduce_top()?;
        }
        let depth = self.operands.len();
        self.ops.push(StackOp::Index { token, depth });
        Ok(())
    }

    fn push_group(&mut self, token: Token) {
        let depth = self.operands.len();
        self.ops.push(StackOp::Group { token, depth });
    }

    /// Reduce until an open marker (group, index or the sentinel) surfaces.
    fn reduce_to_marker(&mut self) -> Result<(), ParseError> {
        while matches!(self.ops.last(), Some(top) if !top.is_open_marker()) {
            self.reduce_top()?;
        }
        Ok(())
    }

    /// Pop one operator (or one maximal run of identical binary operators) and
    /// fold it with its operands into a single node.
    fn reduce_top(&mut self) -> Result<(), ParseError> {
        match self.ops.pop() {
            Some(StackOp::Unary { op, token }) => {
                if self.operands.len() <= self.operand_floor() {
                    return Err(
                        SyntaxError::at("Expected an expression", token.position).into()
                    );
                }
                let Some(operand) = self.operands.pop() else {
                    unreachable!("operand floor checked above");
                };
                let position = token.position.merge(&operand.position);
                let node = match op {
                    Op::Dot => Expr::WithMemberAccess(expect_name(operand, "member")?),
                    Op::Bang => Expr::WithDictAccess(expect_name(operand, "key")?),
                    _ => Expr::Operation {
                        operator: op,
                        operands: vec![operand],
                    },
                };
                self.operands.push(Spanned::new(node, position));
                Ok(())
            }
            Some(StackOp::Binary { op, token }) => {
                let mut count = 2;
                while matches!(self.ops.last(), Some(StackOp::Binary { op: t, .. }) if *t == op) {
                    self.ops.pop();
                    count += 1;
                }
                if self.operands.len() < count + self.operand_floor() {
                    let position = self
                        .operands
                        .last()
                        .map_or(token.position, |operand| operand.position.clone());
                    return Err(SyntaxError::at("Expected an expression", position).into());
                }
                let operands = self.operands.split_off(self.operands.len() - count);
                let folded = fold_run(op, operands)?;
                self.operands.push(folded);
                Ok(())
            }
            // Open markers are handled by the close/finish paths, never reduced.
            _ => unreachable!("reduce_top on an open marker"),
        }
    }

    /// Close the innermost real parenthesis with `close` being the `)` token.
    fn close_group_or_index(&mut self, close: Token) -> Result<(), ParseError> {
        match self.ops.pop() {
            Some(StackOp::Group { token, depth }) => {
                if self.operands.len() <= depth {
                    return Err(SyntaxError::at(
                        "Expected an expression inside parentheses",
                        close.position,
                    )
                    .into());
                }
                let Some(inner) = self.operands.pop() else {
                    return Err(
                        SyntaxError::at("Expected an expression", close.position).into()
                    );
                };
                let position = token.position.merge(&close.position);
                self.operands
                    .push(Spanned::new(Expr::Paren(Box::new(inner)), position));
                Ok(())
            }
            Some(StackOp::Index { token, depth }) => {
                // Nothing between the parentheses means an empty argument list,
                // not a missing expression: `f()` is a plain call.
                let args = if self.operands.len() > depth {
                    match self.operands.pop() {
                        Some(top) => expr_to_arg_list(top),
                        None => ArgList::default(),
                    }
                } else {
                    ArgList::default()
                };
                let Some(base) = self.operands.pop() else {
                    return Err(SyntaxError::at(
                        "Expected an expression before '('",
                        token.position,
                    )
                    .into());
                };
                let position = base.position.merge(&close.position);
                self.operands.push(Spanned::new(
                    Expr::Index {
                        base: Box::new(base),
                        args,
                    },
                    position,
                ));
                Ok(())
            }
            _ => unreachable!("closing without an open parenthesis"),
        }
    }
}

/// Fold one run of `count >= 1` identical binary operators over `count + 1`
/// operands into a single node.
fn fold_run(op: Op, operands: Vec<Spanned<Expr>>) -> Result<Spanned<Expr>, ParseError> {
    match op {
        // Access chains fold left so `a.b.c` parses as `(a.b).c`; every link
        // after the first must be a bare name.
        Op::Dot | Op::Bang => {
            let what = if op == Op::Dot { "member" } else { "key" };
            let mut iter = operands.into_iter();
            let Some(mut node) = iter.next() else {
                unreachable!("binary run with no operands");
            };
            for link in iter {
                let link = expect_name(link, what)?;
                let position = node.position.merge(&link.position);
                let folded = if op == Op::Dot {
                    Expr::MemberAccess {
                        parent: Box::new(node),
                        child: link,
                    }
                } else {
                    Expr::DictAccess {
                        parent: Box::new(node),
                        key: link,
                    }
                };
                node = Spanned::new(folded, position);
            }
            Ok(node)
        }
        Op::Comma => {
            let position = match (operands.first(), operands.last()) {
                (Some(first), Some(last)) => first.position.merge(&last.position),
                _ => unreachable!("binary run with no operands"),
            };
            let args = ArgList(operands.into_iter().map(arg_of).collect());
            Ok(Spanned::new(Expr::Args(args), position))
        }
        _ => {
            let position = match (operands.first(), operands.last()) {
                (Some(first), Some(last)) => first.position.merge(&last.position),
                _ => unreachable!("binary run with no operands"),
            };
            Ok(Spanned::new(
                Expr::Operation {
                    operator: op,
                    operands,
                },
                position,
            ))
        }
    }
}

/// Unwrap an operand that must be a bare name (the right side of an access).
fn expect_name(expr: Spanned<Expr>, what: &str) -> Result<Spanned<String>, ParseError> {
    match expr.node {
        Expr::Name(name) => Ok(Spanned::new(name, expr.position)),
        _ => Err(SyntaxError::at(format!("Expected a {what} name"), expr.position).into()),
    }
}

/// Wrap one folded operand as an argument; an omitted-slot placeholder becomes
/// an argument with no value.
fn arg_of(value: Spanned<Expr>) -> Arg {
    match value.node {
        Expr::Missing => Arg { value: None },
        _ => Arg { value: Some(value) },
    }
}

/// Normalize an expression into an argument list: a bare comma fold already is
/// one, anything else becomes a single argument.
fn expr_to_arg_list(expr: Spanned<Expr>) -> ArgList {
    match expr.node {
        Expr::Args(list) => list,
        _ => ArgList(vec![arg_of(expr)]),
    }
}

impl Parser {
    /// Parse one expression. Stops, without consuming, at the first token that
    /// cannot continue it. A comma outside any parenthesis folds into a bare
    /// argument list (`f a, b` passes one).
    pub(crate) fn expression(&mut self) -> Result<Spanned<Expr>, ParseError> {
        self.expression_impl(true)
    }

    /// Like [`Parser::expression`], but a comma outside any parenthesis ends
    /// the expression. Used where the grammar owns the commas: declaration and
    /// parameter lists.
    pub(crate) fn scalar_expression(&mut self) -> Result<Spanned<Expr>, ParseError> {
        self.expression_impl(false)
    }

    fn expression_impl(&mut self, top_commas: bool) -> Result<Spanned<Expr>, ParseError> {
        let mut engine = ExprEngine::new();
        let mut prev = Prev::None;
        loop {
            let token = self.peek_owned()?;
            match token.category {
                TokenCategory::Blank => {
                    self.pop()?;
                }
                TokenCategory::Integer
                | TokenCategory::Float
                | TokenCategory::String
                | TokenCategory::Identifier
                | TokenCategory::Boolean
                | TokenCategory::Variant
                | TokenCategory::Object => {
                    if prev.operand_like() {
                        break;
                    }
                    self.pop()?;
                    engine.operands.push(primary(&token)?);
                    prev = Prev::Operand;
                }
                TokenCategory::Keyword => {
                    // `Mod` never got reclassified (it is a plain keyword) but
                    // acts as a binary operator; `Me` is an operand.
                    if token == "me" && prev.prefix() {
                        self.pop()?;
                        engine
                            .operands
                            .push(Spanned::new(Expr::Me, token.position.clone()));
                        prev = Prev::Operand;
                    } else if token == "mod" && prev.operand_like() {
                        self.pop()?;
                        engine.push_binary(Op::Mod, token)?;
                        prev = Prev::Operator;
                    } else {
                        break;
                    }
                }
                TokenCategory::Operator => {
                    if token.text == "," && !top_commas && !engine.in_parens() {
                        break;
                    }
                    if token.text == ")" {
                        if prev == Prev::Operator
                            && matches!(
                                engine.ops.last(),
                                Some(StackOp::Binary { op: Op::Comma, .. })
                            )
                        {
                            // A trailing comma leaves an omitted final slot:
                            // `f(a, )` passes two arguments.
                            engine.push_missing(&token);
                        }
                        engine.reduce_to_marker()?;
                        if matches!(engine.ops.last(), Some(StackOp::Sentinel)) {
                            // Not our parenthesis; the caller owns it.
                            break;
                        }
                        let close = self.pop()?;
                        engine.close_group_or_index(close)?;
                        prev = Prev::Close;
                    } else {
                        let unary = prev.prefix();
                        let Some(op) = Op::from_symbol(&token.text, unary) else {
                            break;
                        };
                        self.pop()?;
                        if op == Op::LParen {
                            if unary {
                                engine.push_group(token);
                            } else {
                                engine.push_index(token)?;
                            }
                        } else if unary && op == Op::Comma {
                            // A comma with nothing in front of it is an omitted
                            // argument slot: `f(, a)`, `f(a, , b)`.
                            engine.push_missing(&token);
                            engine.push_binary(op, token)?;
                        } else if unary {
                            if !op.is_unary() {
                                let position = engine
                                    .operands
                                    .last()
                                    .map_or(token.position, |operand| operand.position.clone());
                                return Err(
                                    SyntaxError::at("Expected an expression", position).into()
                                );
                            }
                            engine.ops.push(StackOp::Unary { op, token });
                        } else {
                            if op == Op::Not {
                                return Err(SyntaxError::at(
                                    "'Not' cannot follow an operand",
                                    token.position,
                                )
                                .into());
                            }
                            engine.push_binary(op, token)?;
                        }
                        prev = Prev::Operator;
                    }
                }
                // End of statement/file, plain symbols, comments: all end the
                // expression, unconsumed.
                _ => break,
            }
        }

        engine.reduce_to_marker()?;
        match engine.ops.pop() {
            Some(StackOp::Sentinel) => {}
            Some(StackOp::Group { token, .. }) | Some(StackOp::Index { token, .. }) => {
                return Err(SyntaxError::at(
                    "Unbalanced opening parenthesis",
                    token.position,
                )
                .into());
            }
            Some(_) | None => unreachable!("operator stack lost its sentinel"),
        }

        match engine.operands.len() {
            1 => match engine.operands.pop() {
                Some(expr) => Ok(expr),
                None => unreachable!(),
            },
            0 => Err(SyntaxError::at("Expected an expression", self.current_position()?).into()),
            _ => {
                let position = match (engine.operands.first(), engine.operands.last()) {
                    (Some(first), Some(last)) => first.position.merge(&last.position),
                    _ => unreachable!(),
                };
                Err(SyntaxError::at("Expected an operator between expressions", position).into())
            }
        }
    }

    /// Entry-point variant of [`Parser::expression`]: the rest of the stream
    /// must hold nothing but separators.
    fn expression_entry(&mut self) -> Result<Spanned<Expr>, ParseError> {
        let expr = self.expression()?;
        self.skip_separators()?;
        let trailing = self.peek_owned()?;
        if !trailing.is_end_of_file() {
            return Err(SyntaxError::at(
                format!("Unexpected {} after expression", trailing.describe()),
                trailing.position,
            )
            .into());
        }
        Ok(expr)
    }
}
