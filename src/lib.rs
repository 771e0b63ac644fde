#![allow(clippy::module_inception)]

//! Scanner and parser for the Lox scripting language.
//!
//! Source text goes through [`lexer::lexer::tokenize`] and then
//! [`parser::parser::parse`], producing the program's statements. Both
//! passes report problems into a caller-owned
//! [`Diagnostics`](errors::diagnostics::Diagnostics) and always run to
//! completion; check `had_error()` before handing the tree to an
//! evaluator.

use crate::{
    ast::statements::Stmt,
    errors::diagnostics::Diagnostics,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Scans and parses `source` in one go.
pub fn parse_source(source: &str, diagnostics: &mut Diagnostics) -> Vec<Stmt> {
    let tokens = tokenize(source, diagnostics);
    parse(tokens, diagnostics)
}
