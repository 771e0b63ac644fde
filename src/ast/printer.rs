use crate::lexer::tokens::{Literal, Token};

use super::{
    ast::{ExprVisitor, StmtVisitor},
    expressions::Expr,
    statements::Stmt,
};

/// Renders a tree in fully parenthesized prefix form, e.g. `1 + 2 * 3`
/// becomes `(+ 1 (* 2 3))`.
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter
    }

    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }

    /// One line per top-level statement.
    pub fn print_program(&mut self, statements: &[Stmt]) -> String {
        statements
            .iter()
            .map(|stmt| self.print_stmt(stmt))
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut result = format!("({}", name);
        for expr in exprs {
            let rendered: String = expr.accept(self);
            result.push(' ');
            result.push_str(&rendered);
        }
        result.push(')');
        result
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_literal(&mut self, value: &Literal) -> String {
        value.to_string()
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        self.parenthesize("group", &[inner])
    }

    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[operand])
    }

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_variable(&mut self, name: &Token) -> String {
        name.lexeme.clone()
    }

    fn visit_assignment(&mut self, name: &Token, value: &Expr) -> String {
        let value: String = value.accept(self);
        format!("(= {} {})", name.lexeme, value)
    }
}

impl StmtVisitor<String> for AstPrinter {
    fn visit_expression_stmt(&mut self, expr: &Expr) -> String {
        self.parenthesize(";", &[expr])
    }

    fn visit_print_stmt(&mut self, expr: &Expr) -> String {
        self.parenthesize("print", &[expr])
    }

    fn visit_var_decl_stmt(&mut self, name: &Token, initializer: Option<&Expr>) -> String {
        match initializer {
            Some(initializer) => {
                let initializer: String = initializer.accept(self);
                format!("(var {} = {})", name.lexeme, initializer)
            }
            None => format!("(var {})", name.lexeme),
        }
    }

    fn visit_block_stmt(&mut self, statements: &[Stmt]) -> String {
        let mut result = String::from("(block");
        for stmt in statements {
            let rendered: String = stmt.accept(self);
            result.push(' ');
            result.push_str(&rendered);
        }
        result.push(')');
        result
    }
}
