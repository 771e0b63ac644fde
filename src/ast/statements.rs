use crate::lexer::tokens::Token;

use super::{ast::StmtVisitor, expressions::Expr};

/// Statement nodes, in the order they appear in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects: `expr;`
    Expression { expr: Expr },
    /// `print expr;`
    Print { expr: Expr },
    /// `var name;` or `var name = initializer;`
    VarDecl {
        name: Token,
        initializer: Option<Expr>,
    },
    /// `{ statements }`
    Block { statements: Vec<Stmt> },
}

impl Stmt {
    /// Dispatches to the visitor method matching this node.
    pub fn accept<R, V: StmtVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Stmt::Expression { expr } => visitor.visit_expression_stmt(expr),
            Stmt::Print { expr } => visitor.visit_print_stmt(expr),
            Stmt::VarDecl { name, initializer } => {
                visitor.visit_var_decl_stmt(name, initializer.as_ref())
            }
            Stmt::Block { statements } => visitor.visit_block_stmt(statements),
        }
    }
}
