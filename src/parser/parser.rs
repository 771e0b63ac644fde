//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry
//! points. Expressions are parsed by recursive descent over the precedence
//! levels in [`BindingPower`]; statements are dispatched on their leading
//! token through lookup tables.
//!
//! Every grammar production returns `Result<_, Error>`. An `Err` unwinds
//! through `?` to the nearest declaration, which reports it and
//! resynchronizes at the next statement boundary, so one malformed
//! statement yields one diagnostic and the rest of the program still
//! parses.

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, BindingPower, StmtHandler, StmtLookup, SYNC_LOOKUP},
    stmt::parse_declaration,
};

/// How deeply groupings, prefix operators, assignments and blocks may nest
/// before the parser gives up on the statement.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// The cursor only ever moves forward and never past the final EOF token.
pub struct Parser {
    /// The tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Current nesting depth, see [`MAX_NESTING_DEPTH`]
    depth: usize,
    /// Errors found so far, handed to the caller's sink when parsing ends
    errors: Vec<Error>,
    /// Handlers for productions only valid at declaration level
    decl_lookup: StmtLookup,
    /// Handlers for statements keyed by their leading token
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Panics
    ///
    /// If `tokens` is empty or does not end with an EOF token. Token
    /// streams from the lexer always do; anything else is a caller bug.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(
            matches!(tokens.last(), Some(token) if token.kind == TokenKind::EOF),
            "parser requires a token stream terminated by EOF"
        );

        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
            errors: vec![],
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Returns the most recently consumed token.
    ///
    /// Before anything is consumed this is the first token.
    pub fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Advances to the next token and returns the consumed one. At EOF
    /// the cursor stays put.
    pub fn advance(&mut self) -> &Token {
        if !self.at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    pub fn at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Returns true if the current token is of the given kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.at_end() && self.current_token_kind() == kind
    }

    /// Consumes the current token if it is any of `kinds`.
    pub fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|kind| self.check(*kind)) {
            self.advance();
            return true;
        }

        false
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `message` - The diagnostic to report if it is missing
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the consumed token, otherwise an Error located
    /// at the current token.
    pub fn expect(
        &mut self,
        expected_kind: TokenKind,
        message: &'static str,
    ) -> Result<Token, Error> {
        if self.check(expected_kind) {
            return Ok(self.advance().clone());
        }

        Err(Error::at_token(
            ErrorImpl::ExpectedToken {
                expected: expected_kind.as_str(),
                message,
            },
            self.current_token(),
        ))
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.at_end()
    }

    /// Runs `production` one nesting level deeper. Past
    /// [`MAX_NESTING_DEPTH`] it fails at the current token instead, which
    /// bounds recursion on pathological input.
    pub fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::at_token(
                ErrorImpl::TooDeeplyNested,
                self.current_token(),
            ));
        }

        self.depth += 1;
        let result = production(self);
        self.depth -= 1;

        result
    }

    /// Records an error without unwinding.
    pub fn report(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Discards tokens until a statement boundary: just past a semicolon,
    /// or at a keyword that starts a declaration or statement.
    pub fn synchronize(&mut self) {
        let from = self.pos;
        self.advance();

        while !self.at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                break;
            }

            if self.current_token().is_one_of_many(SYNC_LOOKUP) {
                break;
            }

            self.advance();
        }

        debug!(
            "synchronized from token {} to token {} (line {})",
            from,
            self.pos,
            self.current_token().line
        );
    }

    /// Returns a reference to the declaration lookup table.
    pub fn get_decl_lookup(&self) -> &StmtLookup {
        &self.decl_lookup
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a handler for a production only allowed where a
    /// declaration is, such as `var`.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: StmtHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses declarations until EOF. Statements that fail to parse are
    /// reported and left out of the result.
    pub fn parse_program(&mut self) -> Vec<Stmt> {
        let mut body = vec![];

        while self.has_tokens() {
            if let Some(stmt) = parse_declaration(self) {
                body.push(stmt);
            }
        }

        body
    }

    /// Parses a single expression, e.g. one line typed at a prompt.
    ///
    /// Tokens after the expression are left unconsumed.
    pub fn parse_expression(&mut self) -> Option<Expr> {
        match parse_expr(self, BindingPower::Default) {
            Ok(expr) => Some(expr),
            Err(error) => {
                self.report(error);
                None
            }
        }
    }

    /// Hands every collected error to `diagnostics`.
    pub fn finish(self, diagnostics: &mut Diagnostics) {
        for error in self.errors {
            diagnostics.push(error);
        }
    }
}

/// Parses a token stream into the program's top-level statements.
///
/// This is the main entry point for parsing. It never fails: syntax errors
/// are reported to `diagnostics` and the offending statements are dropped.
///
/// # Panics
///
/// If `tokens` is empty or not terminated by EOF.
pub fn parse(tokens: Vec<Token>, diagnostics: &mut Diagnostics) -> Vec<Stmt> {
    debug!("parsing {} tokens", tokens.len());

    let mut parser = Parser::new(tokens);
    let body = parser.parse_program();

    debug!(
        "parsed {} statements with {} errors",
        body.len(),
        parser.errors.len()
    );

    parser.finish(diagnostics);
    body
}

/// Parses a token stream holding a single expression.
pub fn parse_expression(tokens: Vec<Token>, diagnostics: &mut Diagnostics) -> Option<Expr> {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expression();
    parser.finish(diagnostics);
    expr
}
