use crate::lexer::tokens::{Literal, Token};

use super::ast::ExprVisitor;

/// Expression nodes. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number, string, boolean or `nil` constant.
    Literal { value: Literal },
    /// A parenthesized expression, kept so the source's grouping survives.
    Grouping { inner: Box<Expr> },
    /// `!operand` or `-operand`.
    Unary { operator: Token, operand: Box<Expr> },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// A read of the variable `name`.
    Variable { name: Token },
    /// `name = value`
    Assignment { name: Token, value: Box<Expr> },
}

impl Expr {
    pub fn literal(value: Literal) -> Self {
        Expr::Literal { value }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping {
            inner: Box::new(inner),
        }
    }

    pub fn unary(operator: Token, operand: Expr) -> Self {
        Expr::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn variable(name: Token) -> Self {
        Expr::Variable { name }
    }

    pub fn assignment(name: Token, value: Expr) -> Self {
        Expr::Assignment {
            name,
            value: Box::new(value),
        }
    }

    /// Dispatches to the visitor method matching this node.
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Expr::Literal { value } => visitor.visit_literal(value),
            Expr::Grouping { inner } => visitor.visit_grouping(inner),
            Expr::Unary { operator, operand } => visitor.visit_unary(operator, operand),
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, operator, right),
            Expr::Variable { name } => visitor.visit_variable(name),
            Expr::Assignment { name, value } => visitor.visit_assignment(name, value),
        }
    }
}
