//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a sequence of statements. It uses recursive descent with one
//! function per precedence level and handles:
//!
//! - Statement parsing (variable declarations, print, blocks, expressions)
//! - Expression parsing (assignment, binary and unary operators, literals)
//! - Panic-mode error recovery at statement boundaries
//!
//! Statements are dispatched through lookup tables keyed by their leading
//! token; expression precedence is described by `BindingPower`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
