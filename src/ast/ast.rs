use crate::lexer::tokens::{Literal, Token};

use super::{expressions::Expr, statements::Stmt};

/// Visitor over expression nodes.
///
/// Consumers such as an evaluator or the [`AstPrinter`](super::printer::AstPrinter)
/// implement this to process a tree without the node types depending on
/// them. Matching on [`Expr`] directly works just as well.
pub trait ExprVisitor<R> {
    fn visit_literal(&mut self, value: &Literal) -> R;
    fn visit_grouping(&mut self, inner: &Expr) -> R;
    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> R;
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> R;
    fn visit_variable(&mut self, name: &Token) -> R;
    fn visit_assignment(&mut self, name: &Token, value: &Expr) -> R;
}

/// Visitor over statement nodes.
pub trait StmtVisitor<R> {
    fn visit_expression_stmt(&mut self, expr: &Expr) -> R;
    fn visit_print_stmt(&mut self, expr: &Expr) -> R;
    fn visit_var_decl_stmt(&mut self, name: &Token, initializer: Option<&Expr>) -> R;
    fn visit_block_stmt(&mut self, statements: &[Stmt]) -> R;
}
