use crate::{
    ast::statements::Stmt,
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// `varDecl | statement`, with panic-mode recovery.
///
/// Returns `None` when the declaration was malformed; the error has then
/// been reported and the cursor moved to the next statement boundary.
pub fn parse_declaration(parser: &mut Parser) -> Option<Stmt> {
    let handler = parser
        .get_decl_lookup()
        .get(&parser.current_token_kind())
        .copied();

    let result = match handler {
        Some(handler) => handler(parser),
        None => parse_stmt(parser),
    };

    match result {
        Ok(stmt) => Some(stmt),
        Err(error) => {
            parser.report(error);
            parser.synchronize();
            None
        }
    }
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon, "Expect ';' after expression.")?;

    Ok(Stmt::Expression { expr })
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon, "Expect ';' after value.")?;

    Ok(Stmt::Print { expr })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier, "Expect variable name.")?;

    let initializer = if parser.match_kinds(&[TokenKind::Assignment]) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(
        TokenKind::Semicolon,
        "Expect ';' after variable declaration.",
    )?;

    Ok(Stmt::VarDecl { name, initializer })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(|parser| {
        parser.advance();

        let mut statements = Vec::new();
        while !parser.check(TokenKind::CloseCurly) && parser.has_tokens() {
            if let Some(stmt) = parse_declaration(parser) {
                statements.push(stmt);
            }
        }

        parser.expect(TokenKind::CloseCurly, "Expect '}' after block.")?;

        Ok(Stmt::Block { statements })
    })
}
