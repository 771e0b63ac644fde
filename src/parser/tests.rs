//! Unit tests for the parser module.
//!
//! This module contains tests for parsing language constructs including:
//! - Operator precedence and associativity
//! - Grouping, unary operators and literals
//! - Variable declarations, print, blocks and assignment
//! - Panic-mode recovery after syntax errors

use crate::{
    ast::{expressions::Expr, printer::AstPrinter, statements::Stmt},
    errors::diagnostics::Diagnostics,
    lexer::{
        lexer::tokenize,
        tokens::{Literal, TokenKind},
    },
};

use super::parser::{parse, parse_expression, Parser, MAX_NESTING_DEPTH};

fn parse_str(source: &str) -> (Vec<Stmt>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize(source, &mut diagnostics);
    let program = parse(tokens, &mut diagnostics);
    (program, diagnostics)
}

fn print_expr(source: &str) -> String {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize(source, &mut diagnostics);
    let expr = parse_expression(tokens, &mut diagnostics).unwrap();
    assert!(!diagnostics.had_error(), "{:?}", diagnostics.errors());
    AstPrinter::new().print_expr(&expr)
}

fn print_program(source: &str) -> String {
    let (program, diagnostics) = parse_str(source);
    assert!(!diagnostics.had_error(), "{:?}", diagnostics.errors());
    AstPrinter::new().print_program(&program)
}

fn number(expr: &Expr) -> f64 {
    match expr {
        Expr::Literal {
            value: Literal::Number(n),
        } => *n,
        other => panic!("expected number literal, got {:?}", other),
    }
}

#[test]
fn test_multiplication_binds_tighter() {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize("1 + 2 * 3", &mut diagnostics);
    let expr = parse_expression(tokens, &mut diagnostics).unwrap();

    let Expr::Binary {
        left,
        operator,
        right,
    } = expr
    else {
        panic!("expected binary expression");
    };
    assert_eq!(number(&left), 1.0);
    assert_eq!(operator.kind, TokenKind::Plus);

    let Expr::Binary {
        left,
        operator,
        right,
    } = *right
    else {
        panic!("expected nested binary expression");
    };
    assert_eq!(number(&left), 2.0);
    assert_eq!(operator.kind, TokenKind::Star);
    assert_eq!(number(&right), 3.0);
}

#[test]
fn test_precedence_levels() {
    assert_eq!(print_expr("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(print_expr("1 * 2 + 3"), "(+ (* 1 2) 3)");
    assert_eq!(print_expr("1 < 2 == 3 > 4"), "(== (< 1 2) (> 3 4))");
    assert_eq!(print_expr("1 + 2 <= 3 - 4"), "(<= (+ 1 2) (- 3 4))");
    assert_eq!(print_expr("-1 * 2"), "(* (- 1) 2)");
    assert_eq!(print_expr("a != b == c"), "(== (!= a b) c)");
}

#[test]
fn test_left_associativity() {
    assert_eq!(print_expr("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(print_expr("8 / 4 / 2"), "(/ (/ 8 4) 2)");
    assert_eq!(print_expr("1 >= 2 >= 3"), "(>= (>= 1 2) 3)");
}

#[test]
fn test_left_associativity_shape() {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize("1 - 2 - 3", &mut diagnostics);
    let expr = parse_expression(tokens, &mut diagnostics).unwrap();

    let Expr::Binary { left, right, .. } = expr else {
        panic!("expected binary expression");
    };
    assert_eq!(number(&right), 3.0);
    assert!(matches!(*left, Expr::Binary { .. }));
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(print_expr("(1 + 2) * 3"), "(* (group (+ 1 2)) 3)");
    assert_eq!(print_expr("((1))"), "(group (group 1))");
}

#[test]
fn test_unary_is_right_associative() {
    assert_eq!(print_expr("!!true"), "(! (! true))");
    assert_eq!(print_expr("--1"), "(- (- 1))");
    assert_eq!(print_expr("!-x"), "(! (- x))");
}

#[test]
fn test_primary_literals() {
    assert_eq!(print_expr("nil"), "nil");
    assert_eq!(print_expr("false"), "false");
    assert_eq!(print_expr("12.5"), "12.5");
    assert_eq!(print_expr("\"hi\""), "hi");
    assert_eq!(print_expr("name"), "name");
}

#[test]
fn test_literal_values() {
    let (program, _) = parse_str("true; \"s\"; 4;");

    assert_eq!(
        program,
        vec![
            Stmt::Expression {
                expr: Expr::literal(Literal::Bool(true))
            },
            Stmt::Expression {
                expr: Expr::literal(Literal::String("s".to_string()))
            },
            Stmt::Expression {
                expr: Expr::literal(Literal::Number(4.0))
            },
        ]
    );
}

#[test]
fn test_parse_variable_declaration() {
    let (program, diagnostics) = parse_str("var x = 12;");

    assert!(!diagnostics.had_error());
    assert_eq!(program.len(), 1);

    let Stmt::VarDecl { name, initializer } = &program[0] else {
        panic!("expected variable declaration");
    };
    assert_eq!(name.lexeme, "x");
    assert_eq!(name.line, 1);
    assert_eq!(initializer, &Some(Expr::literal(Literal::Number(12.0))));
}

#[test]
fn test_parse_variable_declaration_without_initializer() {
    assert_eq!(print_program("var x;"), "(var x)");
}

#[test]
fn test_parse_print_statement() {
    assert_eq!(print_program("print 1 + 2;"), "(print (+ 1 2))");
}

#[test]
fn test_parse_expression_statement() {
    assert_eq!(print_program("a == b;"), "(; (== a b))");
}

#[test]
fn test_parse_assignment() {
    assert_eq!(print_program("x = 1 + 2;"), "(; (= x (+ 1 2)))");
    assert_eq!(print_program("a = b = c;"), "(; (= a (= b c)))");
}

#[test]
fn test_invalid_assignment_target() {
    let (program, diagnostics) = parse_str("1 = 2; print 3;");

    assert_eq!(diagnostics.len(), 1);
    let error = &diagnostics.errors()[0];
    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
    assert_eq!(error.to_string(), "[line 1] Error at '=': Invalid assignment target.");

    // No panic mode: the statement itself is kept and parsing carries on
    assert_eq!(
        AstPrinter::new().print_program(&program),
        "(; 1)\n(print 3)"
    );
}

#[test]
fn test_parse_block() {
    assert_eq!(
        print_program("{ var a = 1; { print a; } }"),
        "(block (var a = 1) (block (print a)))"
    );
    assert_eq!(print_program("{}"), "(block)");
}

#[test]
fn test_unclosed_block() {
    let (program, diagnostics) = parse_str("{ print 1;");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.errors()[0].to_string(),
        "[line 1] Error at end: Expect '}' after block."
    );
    assert!(program.is_empty());
}

#[test]
fn test_error_inside_block_recovers_inside_block() {
    let (program, diagnostics) = parse_str("{ print ; print 2; }\nprint 3;");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        AstPrinter::new().print_program(&program),
        "(block (print 2))\n(print 3)"
    );
}

#[test]
fn test_recovery_keeps_following_statement() {
    let (program, diagnostics) = parse_str("var ; print 1;");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.errors()[0].to_string(),
        "[line 1] Error at ';': Expect variable name."
    );
    assert_eq!(
        program,
        vec![Stmt::Print {
            expr: Expr::literal(Literal::Number(1.0))
        }]
    );
}

#[test]
fn test_one_error_per_statement() {
    let (program, diagnostics) = parse_str("print (1 + ;\nvar = 3;\nprint 4;");

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.errors()[0].get_line(), 1);
    assert_eq!(diagnostics.errors()[1].get_line(), 2);
    assert_eq!(AstPrinter::new().print_program(&program), "(print 4)");
}

#[test]
fn test_recovery_stops_at_statement_keyword() {
    // No semicolon between the broken expression and the next statement
    let (program, diagnostics) = parse_str("1 + + 2 print 3;");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.errors()[0].to_string(),
        "[line 1] Error at '+': Expect expression."
    );
    assert_eq!(AstPrinter::new().print_program(&program), "(print 3)");
}

#[test]
fn test_synchronize_lands_on_boundary() {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize("1 + ) 2 3 ; 4 5 while x", &mut diagnostics);
    let mut parser = Parser::new(tokens);

    // Fails on `)`, then skips to just past the first semicolon
    assert!(super::stmt::parse_stmt(&mut parser).is_err());
    parser.synchronize();
    assert_eq!(parser.previous().kind, TokenKind::Semicolon);
    assert_eq!(parser.current_token().lexeme, "4");

    // Without a semicolon it stops on the next statement keyword
    assert!(super::stmt::parse_stmt(&mut parser).is_err());
    parser.synchronize();
    assert_eq!(parser.current_token_kind(), TokenKind::While);
}

#[test]
fn test_missing_close_paren() {
    let (program, diagnostics) = parse_str("print (1 + 2;");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.errors()[0].to_string(),
        "[line 1] Error at ';': Expect ')' after expression."
    );
    assert!(program.is_empty());
}

#[test]
fn test_missing_semicolon_at_end() {
    let (program, diagnostics) = parse_str("print 1");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.errors()[0].to_string(),
        "[line 1] Error at end: Expect ';' after value."
    );
    assert!(program.is_empty());
}

#[test]
fn test_missing_semicolon_messages() {
    let (_, diagnostics) = parse_str("var a = 1\nx\n");

    assert_eq!(
        diagnostics.errors()[0].to_string(),
        "[line 2] Error at 'x': Expect ';' after variable declaration."
    );
}

#[test]
fn test_reserved_keywords_are_not_expressions() {
    let (program, diagnostics) = parse_str("print class;\nprint 1;");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.errors()[0].to_string(),
        "[line 1] Error at 'class': Expect expression."
    );
    assert_eq!(AstPrinter::new().print_program(&program), "(print 1)");
}

#[test]
fn test_error_line_numbers() {
    let (_, diagnostics) = parse_str("print 1;\n\nprint );");

    assert_eq!(diagnostics.errors()[0].get_line(), 3);
}

#[test]
fn test_empty_program() {
    let (program, diagnostics) = parse_str("");

    assert!(program.is_empty());
    assert!(!diagnostics.had_error());
}

#[test]
fn test_parse_always_terminates_on_garbage() {
    let (_, diagnostics) = parse_str(") ) ( ; = = var var print");

    assert!(diagnostics.had_error());
}

#[test]
fn test_parse_expression_leaves_rest() {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize("1 + 2; 3", &mut diagnostics);
    let mut parser = Parser::new(tokens);

    let expr = parser.parse_expression().unwrap();
    assert_eq!(AstPrinter::new().print_expr(&expr), "(+ 1 2)");
    assert_eq!(parser.current_token_kind(), TokenKind::Semicolon);
}

#[test]
fn test_parse_expression_reports_errors() {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize("(1", &mut diagnostics);

    assert!(parse_expression(tokens, &mut diagnostics).is_none());
    assert_eq!(
        diagnostics.errors()[0].to_string(),
        "[line 1] Error at end: Expect ')' after expression."
    );
}

#[test]
#[should_panic(expected = "terminated by EOF")]
fn test_empty_token_stream_panics() {
    let mut diagnostics = Diagnostics::new();
    parse(vec![], &mut diagnostics);
}

#[test]
fn test_deep_grouping_is_reported() {
    let source = format!("print {}1{};\nprint 2;", "(".repeat(1500), ")".repeat(1500));
    let (program, diagnostics) = parse_str(&source);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.errors()[0].get_error_name(), "TooDeeplyNested");
    assert_eq!(
        diagnostics.errors()[0].to_string(),
        "[line 1] Error at '(': Too much nesting."
    );
    assert_eq!(AstPrinter::new().print_program(&program), "(print 2)");
}

#[test]
fn test_deep_unary_is_reported() {
    let source = format!("{}1;", "-".repeat(50000));
    let (program, diagnostics) = parse_str(&source);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.errors()[0].get_error_name(), "TooDeeplyNested");
    assert!(program.is_empty());
}

#[test]
fn test_deep_assignment_chain_is_reported() {
    let source = format!("{}1;", "a = ".repeat(1000));
    let (_, diagnostics) = parse_str(&source);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.errors()[0].get_error_name(), "TooDeeplyNested");
}

#[test]
fn test_deep_blocks_terminate() {
    let source = format!("{}{}", "{".repeat(1000), "}".repeat(1000));
    let (_, diagnostics) = parse_str(&source);

    assert!(diagnostics.had_error());
    assert_eq!(diagnostics.errors()[0].get_error_name(), "TooDeeplyNested");
}

#[test]
fn test_nesting_below_limit_parses() {
    let depth = MAX_NESTING_DEPTH - 1;
    let source = format!("print {}1{};", "(".repeat(depth), ")".repeat(depth));
    let (program, diagnostics) = parse_str(&source);

    assert!(!diagnostics.had_error(), "{:?}", diagnostics.errors());
    assert_eq!(program.len(), 1);
}

#[test]
fn test_nesting_depth_resets_between_statements() {
    let depth = MAX_NESTING_DEPTH - 1;
    let line = format!("print {}1;\n", "-".repeat(depth));
    let (program, diagnostics) = parse_str(&line.repeat(3));

    assert!(!diagnostics.had_error(), "{:?}", diagnostics.errors());
    assert_eq!(program.len(), 3);
}
