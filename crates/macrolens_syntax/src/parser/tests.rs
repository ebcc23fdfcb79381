#[cfg(test)]
mod tests {
    use super::*;

    fn expr(source: &str) -> Spanned<Expr> {
        parse_expression(source, "test.vba").unwrap()
    }

    fn expr_err(source: &str) -> ParseError {
        parse_expression(source, "test.vba").unwrap_err()
    }

    fn lit(source: &str) -> Literal {
        match expr(source).node {
            Expr::Literal(literal) => literal,
            other => panic!("expected a literal, got {other:?}"),
        }
    }

    fn stmt(source: &str) -> Spanned<Stmt> {
        parse_statement(source, "test.vba").unwrap()
    }

    fn module(source: &str) -> Spanned<Block> {
        parse_module(source, "test.vba").unwrap()
    }

    fn name(expr: &Spanned<Expr>) -> &str {
        match &expr.node {
            Expr::Name(name) => name,
            other => panic!("expected a name, got {other:?}"),
        }
    }

    fn operation(expr: &Spanned<Expr>) -> (Op, &Vec<Spanned<Expr>>) {
        match &expr.node {
            Expr::Operation { operator, operands } => (*operator, operands),
            other => panic!("expected an operation, got {other:?}"),
        }
    }

    // ---- expression shapes ----------------------------------------------

    #[test]
    fn mixed_precedence_parse_shape() {
        let parsed = expr("a * b * (c + ab) + -c");
        let (op, operands) = operation(&parsed);
        assert_eq!(op, Op::Add);
        assert_eq!(operands.len(), 2);

        // Left operand: one flat multiplication with three factors.
        let (op, factors) = operation(&operands[0]);
        assert_eq!(op, Op::Mul);
        assert_eq!(factors.len(), 3);
        assert_eq!(name(&factors[0]), "a");
        assert_eq!(name(&factors[1]), "b");
        let Expr::Paren(inner) = &factors[2].node else {
            panic!("expected a parenthesized factor");
        };
        let (op, terms) = operation(inner);
        assert_eq!(op, Op::Add);
        assert_eq!(name(&terms[0]), "c");
        assert_eq!(name(&terms[1]), "ab");

        // Right operand: a unary minus over c.
        let (op, negated) = operation(&operands[1]);
        assert_eq!(op, Op::Neg);
        assert_eq!(negated.len(), 1);
        assert_eq!(name(&negated[0]), "c");
    }

    #[test]
    fn identical_operators_fold_into_one_nary_node() {
        let parsed = expr("1 + 2 + 3 + 4");
        let (op, operands) = operation(&parsed);
        assert_eq!(op, Op::Add);
        assert_eq!(operands.len(), 4);
    }

    #[test]
    fn different_operators_at_equal_precedence_stay_left_associative() {
        let parsed = expr("1 + 2 - 3");
        let (op, operands) = operation(&parsed);
        assert_eq!(op, Op::Sub);
        assert_eq!(operands.len(), 2);
        let (inner, _) = operation(&operands[0]);
        assert_eq!(inner, Op::Add);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let parsed = expr("1 + 2 * 3");
        let (op, operands) = operation(&parsed);
        assert_eq!(op, Op::Add);
        let (inner, _) = operation(&operands[1]);
        assert_eq!(inner, Op::Mul);
    }

    #[test]
    fn unary_operators_nest_instead_of_folding() {
        let parsed = expr("--x");
        let (op, operands) = operation(&parsed);
        assert_eq!(op, Op::Neg);
        let (inner, inner_operands) = operation(&operands[0]);
        assert_eq!(inner, Op::Neg);
        assert_eq!(name(&inner_operands[0]), "x");
    }

    #[test]
    fn negation_binds_looser_than_power() {
        // -x ^ 2 is -(x ^ 2).
        let parsed = expr("-x ^ 2");
        let (op, operands) = operation(&parsed);
        assert_eq!(op, Op::Neg);
        let (inner, _) = operation(&operands[0]);
        assert_eq!(inner, Op::Pow);
    }

    #[test]
    fn not_binds_tighter_than_and() {
        let parsed = expr("Not a And b");
        let (op, operands) = operation(&parsed);
        assert_eq!(op, Op::And);
        let (inner, _) = operation(&operands[0]);
        assert_eq!(inner, Op::Not);
    }

    #[test]
    fn mod_keyword_acts_as_an_operator() {
        let parsed = expr("a Mod b Mod c");
        let (op, operands) = operation(&parsed);
        assert_eq!(op, Op::Mod);
        assert_eq!(operands.len(), 3);
    }

    #[test]
    fn comparison_synonyms_fold() {
        let (op, _) = operation(&expr("a =< b"));
        assert_eq!(op, Op::Le);
        let (op, _) = operation(&expr("a >< b"));
        assert_eq!(op, Op::Ne);
    }

    #[test]
    fn member_access_chains_fold_left() {
        let parsed = expr("a.b.c");
        let Expr::MemberAccess { parent, child } = &parsed.node else {
            panic!("expected member access");
        };
        assert_eq!(child.node, "c");
        let Expr::MemberAccess { parent, child } = &parent.node else {
            panic!("expected nested member access");
        };
        assert_eq!(name(parent), "a");
        assert_eq!(child.node, "b");
    }

    #[test]
    fn dict_access_and_with_access_forms() {
        assert!(matches!(expr("tbl!key").node, Expr::DictAccess { .. }));
        let Expr::WithMemberAccess(child) = expr(".Field").node else {
            panic!("expected with-member access");
        };
        assert_eq!(child.node, "Field");
        assert!(matches!(expr("!key").node, Expr::WithDictAccess(_)));
    }

    #[test]
    fn access_chain_through_an_index() {
        let parsed = expr("a.b(1).c");
        let Expr::MemberAccess { parent, child } = &parsed.node else {
            panic!("expected member access");
        };
        assert_eq!(child.node, "c");
        let Expr::Index { base, args } = &parent.node else {
            panic!("expected index under the access");
        };
        assert_eq!(args.len(), 1);
        assert!(matches!(base.node, Expr::MemberAccess { .. }));
    }

    #[test]
    fn member_name_must_be_a_name() {
        // `.1` would scan as a float, so use a string to hit the access rule.
        let err = expr_err("a.\"s\"");
        assert!(err.to_string().contains("member name"), "{err}");
    }

    #[test]
    fn assignment_target_member_must_be_a_name() {
        let err = parse_statement("a. = 1", "test.vba").unwrap_err();
        assert!(err.to_string().contains("member name"), "{err}");
    }

    #[test]
    fn mid_parses_as_an_ordinary_call() {
        let Expr::Index { base, args } = expr("Mid(s, 2)").node else {
            panic!("expected a call");
        };
        assert_eq!(name(&base), "Mid");
        assert_eq!(args.len(), 2);

        let Stmt::Assign { value, .. } = stmt("x = Mid$(s, 2)").node else {
            panic!("expected an assignment");
        };
        let Expr::Index { base, .. } = &value.node else {
            panic!("expected a call");
        };
        assert_eq!(name(base), "Mid$");
    }

    #[test]
    fn call_with_arguments() {
        let parsed = expr("f(1, 2)");
        let Expr::Index { base, args } = &parsed.node else {
            panic!("expected a call");
        };
        assert_eq!(name(base), "f");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn empty_argument_list() {
        let Expr::Index { args, .. } = expr("f()").node else {
            panic!("expected a call");
        };
        assert!(args.is_empty());
    }

    #[test]
    fn chained_calls() {
        // f(1)(2): the result of the first call is indexed again.
        let Expr::Index { base, args } = expr("f(1)(2)").node else {
            panic!("expected a call");
        };
        assert_eq!(args.len(), 1);
        assert!(matches!(base.node, Expr::Index { .. }));
    }

    #[test]
    fn omitted_arguments_become_valueless_slots() {
        let Expr::Index { args, .. } = expr("f(a, , b)").node else {
            panic!("expected a call");
        };
        assert_eq!(args.len(), 3);
        assert!(args.0[0].value.is_some());
        assert!(args.0[1].value.is_none());
        assert!(args.0[2].value.is_some());
    }

    #[test]
    fn leading_and_trailing_argument_slots() {
        let Expr::Index { args, .. } = expr("f(, a)").node else {
            panic!("expected a call");
        };
        assert_eq!(args.len(), 2);
        assert!(args.0[0].value.is_none());

        let Expr::Index { args, .. } = expr("f(a, )").node else {
            panic!("expected a call");
        };
        assert_eq!(args.len(), 2);
        assert!(args.0[1].value.is_none());
    }

    #[test]
    fn grouping_is_preserved_in_the_tree() {
        let parsed = expr("(a)");
        assert!(matches!(parsed.node, Expr::Paren(_)));
        assert_eq!(parsed.position.text(), "(a)");
    }

    #[test]
    fn me_is_an_operand() {
        let Expr::MemberAccess { parent, child } = expr("Me.Cells").node else {
            panic!("expected member access");
        };
        assert!(matches!(parent.node, Expr::Me));
        assert_eq!(child.node, "Cells");
    }

    #[test]
    fn expression_spans_cover_the_whole_expression() {
        assert_eq!(expr("a + b * c").position.text(), "a + b * c");
        assert_eq!(expr("-x").position.text(), "-x");
        assert_eq!(expr("f(1, 2)").position.text(), "f(1, 2)");
    }

    // ---- expression errors ----------------------------------------------

    #[test]
    fn unbalanced_open_paren_is_an_error() {
        let err = expr_err("(a or b");
        assert!(err.to_string().contains("Unbalanced"), "{err}");
        // The error points at the opening parenthesis.
        assert_eq!(err.position().unwrap().start_column(), 1);
    }

    #[test]
    fn stray_close_paren_is_an_error() {
        let err = expr_err("a + b)");
        assert!(err.to_string().contains("Unexpected ')'"), "{err}");
    }

    #[test]
    fn missing_operand_is_an_error() {
        let err = expr_err("a + * 2");
        assert_eq!(err.to_string(), "Expected an expression");
        let err = expr_err("");
        assert_eq!(err.to_string(), "Expected an expression");
    }

    #[test]
    fn dangling_operator_inside_a_call_is_an_error() {
        let err = expr_err("f(a +)");
        assert_eq!(err.to_string(), "Expected an expression");
        let err = expr_err("f(-)");
        assert_eq!(err.to_string(), "Expected an expression");
    }

    #[test]
    fn empty_group_is_an_error() {
        let err = expr_err("x + ()");
        assert!(err.to_string().contains("inside parentheses"), "{err}");
    }

    #[test]
    fn not_after_an_operand_is_an_error() {
        let err = expr_err("a Not b");
        assert!(err.to_string().contains("'Not'"), "{err}");
    }

    // ---- literals -------------------------------------------------------

    #[test]
    fn decimal_integers_take_the_narrowest_width() {
        assert_eq!(
            lit("1234"),
            Literal::Integer {
                value: 1234,
                width: IntegerWidth::W16
            }
        );
        assert_eq!(
            lit("40000"),
            Literal::Integer {
                value: 40000,
                width: IntegerWidth::W32
            }
        );
    }

    #[test]
    fn huge_decimal_integer_falls_back_to_double() {
        assert_eq!(lit("4886718345"), Literal::Double(4886718345.0));
    }

    #[test]
    fn hex_bit_patterns_reinterpret_as_signed() {
        assert_eq!(
            lit("&hffff%"),
            Literal::Integer {
                value: -1,
                width: IntegerWidth::W16
            }
        );
        assert_eq!(
            lit("&hffff"),
            Literal::Integer {
                value: -1,
                width: IntegerWidth::W16
            }
        );
        assert_eq!(
            lit("&h7fff"),
            Literal::Integer {
                value: 32767,
                width: IntegerWidth::W16
            }
        );
        assert_eq!(
            lit("&H8000%"),
            Literal::Integer {
                value: -32768,
                width: IntegerWidth::W16
            }
        );
        assert_eq!(
            lit("&hffffffff&"),
            Literal::Integer {
                value: -1,
                width: IntegerWidth::W32
            }
        );
        assert_eq!(
            lit("&h10000"),
            Literal::Integer {
                value: 65536,
                width: IntegerWidth::W32
            }
        );
        // With a 64-bit suffix the 16-bit pattern is just a positive number.
        assert_eq!(
            lit("&hffff^"),
            Literal::Integer {
                value: 65535,
                width: IntegerWidth::W64
            }
        );
    }

    #[test]
    fn octal_literals() {
        assert_eq!(
            lit("&o17"),
            Literal::Integer {
                value: 15,
                width: IntegerWidth::W16
            }
        );
        assert_eq!(
            lit("&777"),
            Literal::Integer {
                value: 511,
                width: IntegerWidth::W16
            }
        );
    }

    #[test]
    fn width_suffixes_pin_the_width() {
        assert_eq!(
            lit("2&"),
            Literal::Integer {
                value: 2,
                width: IntegerWidth::W32
            }
        );
        assert_eq!(
            lit("9^"),
            Literal::Integer {
                value: 9,
                width: IntegerWidth::W64
            }
        );
    }

    #[test]
    fn suffixed_decimal_out_of_range_is_an_error() {
        let err = expr_err("40000%");
        assert!(err.to_string().contains("16 bits"), "{err}");
        let err = expr_err("&h1ffff%");
        assert!(err.to_string().contains("16 bits"), "{err}");
    }

    #[test]
    fn float_suffixes_select_the_type() {
        assert_eq!(lit("3!"), Literal::Single(3.0));
        assert_eq!(lit("3.5"), Literal::Double(3.5));
        assert_eq!(lit("1d3"), Literal::Double(1000.0));
        assert_eq!(lit("2e2#"), Literal::Double(200.0));
    }

    #[test]
    fn leading_dot_float_with_negative_exponent() {
        let Literal::Single(value) = lit(".13e-5!") else {
            panic!("expected a Single");
        };
        assert!((f64::from(value) - 1.3e-6).abs() < 1e-12);
    }

    #[test]
    fn currency_scales_by_ten_thousand() {
        assert_eq!(lit("3.12e5@"), Literal::Currency(3_120_000_000));
        assert_eq!(lit("2@"), Literal::Currency(20_000));
        assert_eq!(lit("0.5@"), Literal::Currency(5_000));
    }

    #[test]
    fn huge_exponent_is_an_error() {
        let err = expr_err("1e999");
        assert!(err.to_string().contains("out of range"), "{err}");
    }

    #[test]
    fn string_literals_unescape() {
        assert_eq!(lit("\"\""), Literal::Str(String::new()));
        assert_eq!(
            lit("\"he said \"\"hi\"\"\""),
            Literal::Str("he said \"hi\"".to_string())
        );
    }

    #[test]
    fn word_literals() {
        assert_eq!(lit("True"), Literal::Bool(true));
        assert_eq!(lit("false"), Literal::Bool(false));
        assert_eq!(lit("Empty"), Literal::Empty);
        assert_eq!(lit("Null"), Literal::Null);
        assert_eq!(lit("Nothing"), Literal::Nothing);
    }

    // ---- statements -----------------------------------------------------

    #[test]
    fn implicit_assignment() {
        let Stmt::Assign {
            kind,
            target,
            value,
        } = stmt("x = 5").node
        else {
            panic!("expected an assignment");
        };
        assert_eq!(kind, AssignKind::Let);
        assert_eq!(name(&target), "x");
        assert!(matches!(value.node, Expr::Literal(Literal::Integer { .. })));
    }

    #[test]
    fn assignment_through_an_access_chain() {
        let Stmt::Assign { target, .. } = stmt("a.b(0) = 1").node else {
            panic!("expected an assignment");
        };
        assert!(matches!(target.node, Expr::Index { .. }));
    }

    #[test]
    fn set_and_let_assignments() {
        let Stmt::Assign { kind, .. } = stmt("Set obj = other.thing").node else {
            panic!("expected an assignment");
        };
        assert_eq!(kind, AssignKind::Set);
        let Stmt::Assign { kind, .. } = stmt("Let y = 1").node else {
            panic!("expected an assignment");
        };
        assert_eq!(kind, AssignKind::Let);
    }

    #[test]
    fn assignment_to_a_literal_is_an_error() {
        let err = parse_statement("5 = x", "test.vba").unwrap_err();
        assert!(err.to_string().contains("assignable"), "{err}");
    }

    #[test]
    fn call_statement_forms() {
        let Stmt::Call { target, args } = stmt("MsgBox \"hi\"").node else {
            panic!("expected a call");
        };
        assert_eq!(name(&target), "MsgBox");
        assert_eq!(args.len(), 1);

        let Stmt::Call { target, args } = stmt("f a, b").node else {
            panic!("expected a call");
        };
        assert_eq!(name(&target), "f");
        assert_eq!(args.len(), 2);

        let Stmt::Call { target, args } = stmt("f(a)").node else {
            panic!("expected a call");
        };
        assert_eq!(name(&target), "f");
        assert_eq!(args.len(), 1);

        let Stmt::Call { args, .. } = stmt("f").node else {
            panic!("expected a call");
        };
        assert!(args.is_empty());

        // Omitted slots survive in implicit calls too.
        let Stmt::Call { args, .. } = stmt("MsgBox \"hi\", , \"title\"").node else {
            panic!("expected a call");
        };
        assert_eq!(args.len(), 3);
        assert!(args.0[1].value.is_none());
    }

    #[test]
    fn call_keyword_statement() {
        let Stmt::Call { target, args } = stmt("Call Shell(cmd, 0)").node else {
            panic!("expected a call");
        };
        assert_eq!(name(&target), "Shell");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn with_access_call_statement() {
        let Stmt::Call { target, .. } = stmt(".Run cmd").node else {
            panic!("expected a call");
        };
        assert!(matches!(target.node, Expr::WithMemberAccess(_)));
    }

    #[test]
    fn dim_declarations() {
        let Stmt::VarDecl { kind, decl } = stmt("Dim x As Integer").node else {
            panic!("expected a declaration");
        };
        assert_eq!(kind, DeclKind::Dim);
        assert_eq!(decl.node.name.node, "x");
        assert_eq!(decl.node.ty.as_ref().unwrap().node, "Integer");
        assert!(!decl.node.new);

        let Stmt::MultiVarDecl { decls, .. } = stmt("Dim a, b As New Foo").node else {
            panic!("expected a multi declaration");
        };
        assert_eq!(decls.len(), 2);
        assert!(decls[0].node.ty.is_none());
        assert!(decls[1].node.new);
    }

    #[test]
    fn const_declarations_require_values() {
        let Stmt::MultiVarDecl { kind, decls } = stmt("Const k = 1, n As Integer = 2").node
        else {
            panic!("expected a multi declaration");
        };
        assert_eq!(kind, DeclKind::Const);
        assert!(decls.iter().all(|d| d.node.value.is_some()));

        let err = parse_statement("Const k", "test.vba").unwrap_err();
        assert!(err.to_string().contains("requires a value"), "{err}");
    }

    #[test]
    fn block_if_with_elseif_and_else() {
        let source = "If a > 0 Then\n    x = 1\nElseIf b Then\n    x = 2\nElse\n    x = 3\nEnd If";
        let Stmt::If { arms, else_body } = stmt(source).node else {
            panic!("expected an if");
        };
        assert_eq!(arms.len(), 2);
        assert_eq!(arms[0].body.body.len(), 1);
        assert_eq!(else_body.unwrap().body.len(), 1);
    }

    #[test]
    fn single_line_if() {
        let Stmt::If { arms, else_body } = stmt("If a Then x = 1 Else y = 2").node else {
            panic!("expected an if");
        };
        assert_eq!(arms.len(), 1);
        assert_eq!(arms[0].body.body.len(), 1);
        assert!(else_body.is_some());
    }

    #[test]
    fn if_statement_span_covers_end_if() {
        let source = "If a Then\n    x = 1\nEnd If";
        assert_eq!(stmt(source).position.text(), source);
    }

    #[test]
    fn for_loop_with_step_and_footer() {
        let source = "For i = 1 To 10 Step 2\n    total = total + i\nNext i";
        let Stmt::For {
            counter,
            step,
            body,
            ..
        } = stmt(source).node
        else {
            panic!("expected a for");
        };
        assert_eq!(counter.node, "i");
        assert!(step.is_some());
        assert_eq!(body.body.len(), 1);
    }

    #[test]
    fn for_footer_counter_must_match() {
        let source = "For i = 1 To 3\nNext j";
        let err = parse_statement(source, "test.vba").unwrap_err();
        assert!(err.to_string().contains("does not match"), "{err}");

        // Case differences are fine, and the footer is optional.
        assert!(parse_statement("For i = 1 To 3\nNext I", "test.vba").is_ok());
        assert!(parse_statement("For i = 1 To 3\nNext", "test.vba").is_ok());
    }

    #[test]
    fn while_loop() {
        let source = "While x < 3\n    x = x + 1\nWend";
        let Stmt::While { condition, body } = stmt(source).node else {
            panic!("expected a while");
        };
        let (op, _) = operation(&condition);
        assert_eq!(op, Op::Lt);
        assert_eq!(body.body.len(), 1);
    }

    #[test]
    fn sub_definition_with_parameters() {
        let source = "Sub Launch(a, Optional ByVal b As Long = 5)\nEnd Sub";
        let Stmt::SubDef(def) = stmt(source).node else {
            panic!("expected a sub");
        };
        assert_eq!(def.name.node, "Launch");
        assert_eq!(def.params.len(), 2);
        let plain = &def.params[0].node;
        assert!(!plain.optional && !plain.by_val && plain.ty.is_none());
        let rich = &def.params[1].node;
        assert!(rich.optional && rich.by_val);
        assert_eq!(rich.ty.as_ref().unwrap().node, "Long");
        assert!(rich.default.is_some());
        assert!(def.returns.is_none());
    }

    #[test]
    fn function_definition_with_return_type() {
        let source = "Function F(x As Double) As Double\n    F = x\nEnd Function";
        let Stmt::FunctionDef(def) = stmt(source).node else {
            panic!("expected a function");
        };
        assert_eq!(def.returns.as_ref().unwrap().node, "Double");
        assert_eq!(def.body.body.len(), 1);
    }

    #[test]
    fn unknown_statement_keyword_is_an_error() {
        let err = parse_statement("GoTo 10", "test.vba").unwrap_err();
        assert!(err.to_string().contains("Unexpected keyword"), "{err}");
    }

    #[test]
    fn junk_after_a_statement_is_an_error() {
        let err = parse_module("Dim x 5\n", "test.vba").unwrap_err();
        assert!(err.to_string().contains("Expected end of statement"), "{err}");
    }

    // ---- modules and entry points ---------------------------------------

    #[test]
    fn parses_a_small_macro_module() {
        let source = "\
' dropper stub
Sub AutoOpen()
    Dim path As String
    path = Environ(\"TEMP\") & \"\\run.exe\"
    If path <> \"\" Then
        Download path
    End If
End Sub
";
        let module = module(source);
        assert_eq!(module.node.body.len(), 1);
        let Stmt::SubDef(def) = &module.node.body[0].node else {
            panic!("expected a sub");
        };
        assert_eq!(def.name.node, "AutoOpen");
        assert_eq!(def.body.body.len(), 3);
    }

    #[test]
    fn statements_split_on_colons_too() {
        let module = module("x = 1: y = 2\n");
        assert_eq!(module.node.body.len(), 2);
    }

    #[test]
    fn comments_are_transparent_between_statements() {
        let module = module("x = 1 ' set up\n' more\ny = 2\n");
        assert_eq!(module.node.body.len(), 2);
    }

    #[test]
    fn unterminated_sub_is_an_error() {
        let err = parse_module("Sub X()\n    y = 1\n", "test.vba").unwrap_err();
        assert!(err.to_string().contains("Expected 'end'"), "{err}");
    }

    #[test]
    fn named_rule_dispatch() {
        let mut parser = Parser::new(Lexer::new("a + b", "test.vba"));
        let ParsedRule::Expression(parsed) = parser.parse("expression").unwrap() else {
            panic!("expected an expression result");
        };
        assert!(matches!(parsed.node, Expr::Operation { .. }));

        let mut parser = Parser::new(Lexer::new("x = 1\n", "test.vba"));
        assert!(matches!(
            parser.parse("module").unwrap(),
            ParsedRule::Module(_)
        ));

        let err = Parser::new(Lexer::new("", "test.vba"))
            .parse("statment")
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown rule \"statment\"");
        assert!(err.position().is_none());
    }

    #[test]
    fn scan_errors_surface_through_the_parser() {
        let err = parse_module("x = \"broken\n", "test.vba").unwrap_err();
        assert!(matches!(err, ParseError::Scan(_)));
    }

    #[test]
    fn line_continuations_splice_statements() {
        let Stmt::Assign { value, .. } = stmt("x = 1 + _\n    2").node else {
            panic!("expected an assignment");
        };
        let (op, operands) = operation(&value);
        assert_eq!(op, Op::Add);
        assert_eq!(operands.len(), 2);
    }
}
