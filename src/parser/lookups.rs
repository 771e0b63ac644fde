use std::collections::HashMap;

use crate::{ast::statements::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Expression precedence levels, loosest first. Each level parses its
/// operands at the next, tighter level.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
    Primary,
}

impl BindingPower {
    /// The next tighter level. `Primary` is its own successor.
    pub fn next(self) -> Self {
        match self {
            BindingPower::Default => BindingPower::Assignment,
            BindingPower::Assignment => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Comparison,
            BindingPower::Comparison => BindingPower::Term,
            BindingPower::Term => BindingPower::Factor,
            BindingPower::Factor => BindingPower::Unary,
            BindingPower::Unary => BindingPower::Primary,
            BindingPower::Primary => BindingPower::Primary,
        }
    }

    /// Left-associative binary operators parsed at this level.
    pub fn binary_operators(self) -> &'static [TokenKind] {
        match self {
            BindingPower::Equality => &[TokenKind::NotEquals, TokenKind::Equals],
            BindingPower::Comparison => &[
                TokenKind::Greater,
                TokenKind::GreaterEquals,
                TokenKind::Less,
                TokenKind::LessEquals,
            ],
            BindingPower::Term => &[TokenKind::Dash, TokenKind::Plus],
            BindingPower::Factor => &[TokenKind::Slash, TokenKind::Star],
            _ => &[],
        }
    }
}

/// Tokens that begin a new declaration or statement; recovery stops here.
pub const SYNC_LOOKUP: &[TokenKind] = &[
    TokenKind::Class,
    TokenKind::Fun,
    TokenKind::Var,
    TokenKind::For,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Print,
    TokenKind::Return,
];

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations
    parser.decl(TokenKind::Var, parse_var_decl_stmt);

    // Statements
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

/// Handlers keyed by the token that starts the production.
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
