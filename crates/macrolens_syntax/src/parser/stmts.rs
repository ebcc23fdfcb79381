/// Statement parsing, by recursive descent.
///
/// The one genuinely ambiguous spot in the grammar is a statement starting with
/// a name: `x = 1` is an assignment, `x 1` a call, and the decision point (the
/// `=`) sits an arbitrary distance in (`a.b(i).c = 1`). The parser resolves it
/// speculatively: checkpoint, try the assignment reading, and backtrack to the
/// call reading if no `=` shows up.
impl Parser {
    /// Parse one statement. The statement terminator is left in the stream.
    pub(crate) fn statement(&mut self) -> Result<Spanned<Stmt>, ParseError> {
        self.skip_blanks()?;
        let next = self.peek_owned()?;
        if next.category != TokenCategory::Keyword {
            return self.assignment_or_call();
        }
        match next.text.to_ascii_lowercase().as_str() {
            "dim" => self.var_declaration(DeclKind::Dim),
            "const" => self.var_declaration(DeclKind::Const),
            "set" => self.keyword_assignment(AssignKind::Set),
            "let" => self.keyword_assignment(AssignKind::Let),
            "call" => self.call_keyword_statement(),
            "if" => self.if_statement(),
            "for" => self.for_statement(),
            "while" => self.while_statement(),
            "function" => self.proc_definition(true),
            "sub" => self.proc_definition(false),
            // `Me.Target = ...` and friends.
            "me" => self.assignment_or_call(),
            _ => Err(SyntaxError::at(
                format!("Unexpected keyword '{}'", next.text),
                next.position,
            )
            .into()),
        }
    }

    /// `Dim a, b As Long` / `Const k = 1, n As Integer = 2`.
    fn var_declaration(&mut self, kind: DeclKind) -> Result<Spanned<Stmt>, ParseError> {
        let keyword = self.pop()?;
        let mut decls = Vec::new();
        loop {
            decls.push(self.single_var_decl(kind)?);
            if !self.eat_punct(",")? {
                break;
            }
        }
        let position = match decls.last() {
            Some(last) => keyword.position.merge(&last.position),
            None => keyword.position.clone(),
        };
        let stmt = if decls.len() == 1 {
            let decl = decls.remove(0);
            Stmt::VarDecl { kind, decl }
        } else {
            Stmt::MultiVarDecl { kind, decls }
        };
        Ok(Spanned::new(stmt, position))
    }

    /// One `name [As [New] Type] [= value]` clause.
    fn single_var_decl(&mut self, kind: DeclKind) -> Result<Spanned<VarDecl>, ParseError> {
        let name = self.expect_identifier()?;
        let mut position = name.position.clone();
        let mut ty = None;
        let mut new = false;
        if self.eat_keyword("as")? {
            new = self.eat_keyword("new")?;
            let declared = self.expect_type_name()?;
            position = position.merge(&declared.position);
            ty = Some(declared);
        }
        let mut value = None;
        if self.eat_punct("=")? {
            let initial = self.scalar_expression()?;
            position = position.merge(&initial.position);
            value = Some(initial);
        }
        if kind == DeclKind::Const && value.is_none() {
            return Err(SyntaxError::at("Constant declaration requires a value", position).into());
        }
        Ok(Spanned::new(
            VarDecl {
                name,
                ty,
                new,
                value,
            },
            position,
        ))
    }

    /// `Set x = e` / `Let x = e`.
    fn keyword_assignment(&mut self, kind: AssignKind) -> Result<Spanned<Stmt>, ParseError> {
        let keyword = self.pop()?;
        let target = self.l_expression()?;
        self.expect_punct("=")?;
        let value = self.scalar_expression()?;
        let position = keyword.position.merge(&value.position);
        Ok(Spanned::new(
            Stmt::Assign {
                kind,
                target,
                value,
            },
            position,
        ))
    }

    /// A statement starting with a name: implicit assignment or call.
    fn assignment_or_call(&mut self) -> Result<Spanned<Stmt>, ParseError> {
        self.lexer.save_checkpoint();
        match self.try_implicit_assignment() {
            Ok(Some(stmt)) => {
                self.lexer.discard_checkpoint();
                Ok(stmt)
            }
            Ok(None) => {
                self.lexer.backtrack();
                self.implicit_call_statement()
            }
            Err(err) => {
                self.lexer.discard_checkpoint();
                Err(err)
            }
        }
    }

    /// The assignment reading of an ambiguous statement. `None` means "not an
    /// assignment after all": the caller backtracks and reparses as a call.
    fn try_implicit_assignment(&mut self) -> Result<Option<Spanned<Stmt>>, ParseError> {
        let Ok(target) = self.l_expression() else {
            return Ok(None);
        };
        self.skip_blanks()?;
        if !self.lexer.peek(0)?.is_punct("=") {
            return Ok(None);
        }
        self.pop()?;
        let value = self.scalar_expression()?;
        let position = target.position.merge(&value.position);
        Ok(Some(Spanned::new(
            Stmt::Assign {
                kind: AssignKind::Let,
                target,
                value,
            },
            position,
        )))
    }

    /// `f`, `f(a)`, `f a, b`, `obj.m x` — a call without the `Call` keyword.
    fn implicit_call_statement(&mut self) -> Result<Spanned<Stmt>, ParseError> {
        let target = self.l_expression()?;
        self.skip_blanks()?;
        let next = self.peek_owned()?;
        if next.can_start_expression() {
            let args = self.expression()?;
            let position = target.position.merge(&args.position);
            return Ok(Spanned::new(
                Stmt::Call {
                    target,
                    args: expr_to_arg_list(args),
                },
                position,
            ));
        }
        // No argument tokens follow. A parenthesized form (`f(a)`) arrived as
        // an index expression; unwrap it into the call.
        let position = target.position.clone();
        let (target, args) = match target.node {
            Expr::Index { base, args } => (*base, args),
            node => (Spanned::new(node, position.clone()), ArgList::default()),
        };
        Ok(Spanned::new(Stmt::Call { target, args }, position))
    }

    /// `Call f(a, b)` / `Call obj.m`.
    fn call_keyword_statement(&mut self) -> Result<Spanned<Stmt>, ParseError> {
        let keyword = self.pop()?;
        let target = self.l_expression()?;
        let stmt_position = keyword.position.merge(&target.position);
        let inner_position = target.position.clone();
        let (target, args) = match target.node {
            Expr::Index { base, args } => (*base, args),
            node => (Spanned::new(node, inner_position), ArgList::default()),
        };
        Ok(Spanned::new(Stmt::Call { target, args }, stmt_position))
    }

    /// A restricted expression that can stand left of `=`: a name, `Me` or a
    /// with-access, followed by member/dictionary accesses and indexings.
    ///
    /// This is deliberately not the full expression engine: in statement
    /// position a bare `=` *is* the assignment operator, so the target must be
    /// parsed without ever reading `=` as a comparison.
    fn l_expression(&mut self) -> Result<Spanned<Expr>, ParseError> {
        self.skip_blanks()?;
        let next = self.peek_owned()?;
        let mut expr = match next.category {
            TokenCategory::Identifier => {
                let token = self.pop()?;
                Spanned::new(Expr::Name(token.text), token.position)
            }
            TokenCategory::Keyword if next == "me" => {
                let token = self.pop()?;
                Spanned::new(Expr::Me, token.position)
            }
            TokenCategory::Operator if next.text == "." => {
                let token = self.pop()?;
                let child = self.access_name()?;
                let position = token.position.merge(&child.position);
                Spanned::new(Expr::WithMemberAccess(child), position)
            }
            TokenCategory::Operator if next.text == "!" => {
                let token = self.pop()?;
                let key = self.access_name()?;
                let position = token.position.merge(&key.position);
                Spanned::new(Expr::WithDictAccess(key), position)
            }
            _ => {
                return Err(SyntaxError::at(
                    format!("Expected an assignable expression, found {}", next.describe()),
                    next.position,
                )
                .into());
            }
        };
        loop {
            self.skip_blanks()?;
            let next = self.lexer.peek(0)?;
            if next.is_punct(".") {
                self.pop()?;
                let child = self.access_name()?;
                let position = expr.position.merge(&child.position);
                expr = Spanned::new(
                    Expr::MemberAccess {
                        parent: Box::new(expr),
                        child,
                    },
                    position,
                );
            } else if next.is_punct("!") {
                self.pop()?;
                let key = self.access_name()?;
                let position = expr.position.merge(&key.position);
                expr = Spanned::new(
                    Expr::DictAccess {
                        parent: Box::new(expr),
                        key,
                    },
                    position,
                );
            } else if next.is_punct("(") {
                self.pop()?;
                let (args, close) = self.index_args()?;
                let position = expr.position.merge(&close.position);
                expr = Spanned::new(
                    Expr::Index {
                        base: Box::new(expr),
                        args,
                    },
                    position,
                );
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// The name after a `.` or `!`. Reserved words are allowed: `doc.Close`
    /// is everyday VBA.
    fn access_name(&mut self) -> Result<Spanned<String>, ParseError> {
        self.skip_blanks()?;
        let next = self.peek_owned()?;
        if next.is_name_like() {
            let token = self.pop()?;
            Ok(Spanned::new(token.text, token.position))
        } else {
            Err(SyntaxError::at(
                format!("Expected a member name, found {}", next.describe()),
                next.position,
            )
            .into())
        }
    }

    /// Arguments between `(` (already consumed) and `)`. Returns the list and
    /// the closing token.
    fn index_args(&mut self) -> Result<(ArgList, Token), ParseError> {
        self.skip_blanks()?;
        if self.lexer.peek(0)?.is_punct(")") {
            let close = self.pop()?;
            return Ok((ArgList::default(), close));
        }
        let args = self.expression()?;
        let close = self.expect_punct(")")?;
        Ok((expr_to_arg_list(args), close))
    }

    /// `If` in both block and single-line form.
    fn if_statement(&mut self) -> Result<Spanned<Stmt>, ParseError> {
        let keyword = self.pop()?;
        let condition = self.scalar_expression()?;
        self.expect_keyword("then")?;
        self.skip_blanks()?;
        let next = self.peek_owned()?;
        if next.is_end_of_statement() || next.is_comment() || next.is_end_of_file() {
            self.block_if(keyword, condition)
        } else {
            self.single_line_if(keyword, condition)
        }
    }

    /// `If ... Then <eol> ... [ElseIf ... Then ...]* [Else ...] End If`.
    fn block_if(
        &mut self,
        keyword: Token,
        condition: Spanned<Expr>,
    ) -> Result<Spanned<Stmt>, ParseError> {
        let mut arms = Vec::new();
        let mut pending_condition = Some(condition);
        let mut else_body: Option<Block> = None;
        let end_token;
        loop {
            let body = self.block()?;
            match pending_condition.take() {
                Some(condition) => arms.push(IfArm {
                    condition,
                    body: body.node,
                }),
                None => else_body = Some(body.node),
            }
            self.skip_blanks()?;
            let next = self.peek_owned()?;
            if next.is_keyword("elseif") {
                if else_body.is_some() {
                    return Err(SyntaxError::at("'ElseIf' after 'Else'", next.position).into());
                }
                self.pop()?;
                pending_condition = Some(self.scalar_expression()?);
                self.expect_keyword("then")?;
                self.expect_end_of_statement()?;
            } else if next.is_keyword("else") {
                if else_body.is_some() {
                    return Err(SyntaxError::at("Duplicate 'Else'", next.position).into());
                }
                self.pop()?;
                self.expect_end_of_statement()?;
            } else if next.is_keyword("end") {
                self.pop()?;
                end_token = self.expect_keyword("if")?;
                break;
            } else {
                return Err(SyntaxError::at(
                    format!("Expected 'End If', found {}", next.describe()),
                    next.position,
                )
                .into());
            }
        }
        let position = keyword.position.merge(&end_token.position);
        Ok(Spanned::new(Stmt::If { arms, else_body }, position))
    }

    /// `If c Then stmt [Else stmt]` on one line.
    fn single_line_if(
        &mut self,
        keyword: Token,
        condition: Spanned<Expr>,
    ) -> Result<Spanned<Stmt>, ParseError> {
        let then_stmt = self.statement()?;
        let mut position = keyword.position.merge(&then_stmt.position);
        let arms = vec![IfArm {
            condition,
            body: Block {
                body: vec![then_stmt],
            },
        }];
        let mut else_body = None;
        self.skip_blanks()?;
        if self.lexer.peek(0)?.is_keyword("else") {
            self.pop()?;
            let else_stmt = self.statement()?;
            position = position.merge(&else_stmt.position);
            else_body = Some(Block {
                body: vec![else_stmt],
            });
        }
        Ok(Spanned::new(Stmt::If { arms, else_body }, position))
    }

    /// `For i = a To b [Step s] ... Next [i]`.
    fn for_statement(&mut self) -> Result<Spanned<Stmt>, ParseError> {
        let keyword = self.pop()?;
        let counter = self.expect_identifier()?;
        self.expect_punct("=")?;
        let start = self.scalar_expression()?;
        self.expect_keyword("to")?;
        let end = self.scalar_expression()?;
        let step = if self.eat_keyword("step")? {
            Some(self.scalar_expression()?)
        } else {
            None
        };
        self.expect_end_of_statement()?;
        let body = self.block()?;
        let next_kw = self.expect_keyword("next")?;
        self.skip_blanks()?;
        let end_position = if self.lexer.peek(0)?.category == TokenCategory::Identifier {
            let footer = self.pop()?;
            if !footer.text.eq_ignore_ascii_case(&counter.node) {
                return Err(SyntaxError::at(
                    format!("'Next {}' does not match 'For {}'", footer.text, counter.node),
                    footer.position,
                )
                .into());
            }
            footer.position
        } else {
            next_kw.position
        };
        let position = keyword.position.merge(&end_position);
        Ok(Spanned::new(
            Stmt::For {
                counter,
                start,
                end,
                step,
                body: body.node,
            },
            position,
        ))
    }

    /// `While c ... Wend`.
    fn while_statement(&mut self) -> Result<Spanned<Stmt>, ParseError> {
        let keyword = self.pop()?;
        let condition = self.scalar_expression()?;
        self.expect_end_of_statement()?;
        let body = self.block()?;
        let wend = self.expect_keyword("wend")?;
        let position = keyword.position.merge(&wend.position);
        Ok(Spanned::new(
            Stmt::While {
                condition,
                body: body.node,
            },
            position,
        ))
    }

    /// `Sub name(params) ... End Sub` / `Function name(params) [As T] ... End
    /// Function`.
    fn proc_definition(&mut self, is_function: bool) -> Result<Spanned<Stmt>, ParseError> {
        let keyword = self.pop()?;
        let name = self.expect_identifier()?;
        let mut params = Vec::new();
        self.skip_blanks()?;
        if self.lexer.peek(0)?.is_punct("(") {
            self.pop()?;
            self.skip_blanks()?;
            if !self.lexer.peek(0)?.is_punct(")") {
                loop {
                    params.push(self.parameter()?);
                    if !self.eat_punct(",")? {
                        break;
                    }
                }
            }
            self.expect_punct(")")?;
        }
        let returns = if is_function && self.eat_keyword("as")? {
            Some(self.expect_type_name()?)
        } else {
            None
        };
        self.expect_end_of_statement()?;
        let body = self.block()?;
        self.expect_keyword("end")?;
        let closer = if is_function {
            self.expect_keyword("function")?
        } else {
            self.expect_keyword("sub")?
        };
        let def = ProcDef {
            name,
            params,
            returns,
            body: body.node,
        };
        let position = keyword.position.merge(&closer.position);
        let stmt = if is_function {
            Stmt::FunctionDef(def)
        } else {
            Stmt::SubDef(def)
        };
        Ok(Spanned::new(stmt, position))
    }

    /// `[Optional] [ByVal|ByRef] [ParamArray] name [As T] [= default]`.
    fn parameter(&mut self) -> Result<Spanned<Param>, ParseError> {
        self.skip_blanks()?;
        let start = self.current_position()?;
        let optional = self.eat_keyword("optional")?;
        let by_val = self.eat_keyword("byval")?;
        if !by_val {
            // ByRef is the default; the keyword only makes it explicit.
            self.eat_keyword("byref")?;
        }
        let param_array = self.eat_keyword("paramarray")?;
        let name = self.expect_identifier()?;
        let mut position = start.merge(&name.position);
        let mut ty = None;
        if self.eat_keyword("as")? {
            let declared = self.expect_type_name()?;
            position = position.merge(&declared.position);
            ty = Some(declared);
        }
        let mut default = None;
        if self.eat_punct("=")? {
            if !optional {
                return Err(SyntaxError::at(
                    "Default value on a non-Optional parameter",
                    position,
                )
                .into());
            }
            let value = self.scalar_expression()?;
            position = position.merge(&value.position);
            default = Some(value);
        }
        Ok(Spanned::new(
            Param {
                name,
                optional,
                by_val,
                param_array,
                ty,
                default,
            },
            position,
        ))
    }
}
