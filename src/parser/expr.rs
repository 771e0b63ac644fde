use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose loosest operator binds at least as tightly
/// as `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    match bp {
        BindingPower::Default | BindingPower::Assignment => parse_assignment_expr(parser),
        BindingPower::Equality
        | BindingPower::Comparison
        | BindingPower::Term
        | BindingPower::Factor => parse_binary_expr(parser, bp),
        BindingPower::Unary => parse_unary_expr(parser),
        BindingPower::Primary => parse_primary_expr(parser),
    }
}

/// `IDENTIFIER "=" assignment | equality`, right associative.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let expr = parse_expr(parser, BindingPower::Equality)?;

    if parser.match_kinds(&[TokenKind::Assignment]) {
        let equals = parser.previous().clone();
        let value = parser.nested(parse_assignment_expr)?;

        if let Expr::Variable { name } = expr {
            return Ok(Expr::assignment(name, value));
        }

        // Reported but not unwound: the parser is not confused here.
        parser.report(Error::at_token(ErrorImpl::InvalidAssignmentTarget, &equals));
    }

    Ok(expr)
}

/// One left-associative level: `next (op next)*`, folding each operator
/// into a new node whose left child is everything parsed so far.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_expr(parser, bp.next())?;

    while parser.match_kinds(bp.binary_operators()) {
        let operator = parser.previous().clone();
        let right = parse_expr(parser, bp.next())?;
        left = Expr::binary(left, operator, right);
    }

    Ok(left)
}

/// `("!" | "-") unary | primary`
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.match_kinds(&[TokenKind::Not, TokenKind::Dash]) {
        let operator = parser.previous().clone();
        let operand = parser.nested(parse_unary_expr)?;
        return Ok(Expr::unary(operator, operand));
    }

    parse_primary_expr(parser)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // Only numbers and strings carry a literal
    if let Some(value) = parser.current_token().literal.clone() {
        parser.advance();
        return Ok(Expr::literal(value));
    }

    match parser.current_token_kind() {
        TokenKind::False => {
            parser.advance();
            Ok(Expr::literal(Literal::Bool(false)))
        }
        TokenKind::True => {
            parser.advance();
            Ok(Expr::literal(Literal::Bool(true)))
        }
        TokenKind::Nil => {
            parser.advance();
            Ok(Expr::literal(Literal::Nil))
        }
        TokenKind::Identifier => Ok(Expr::variable(parser.advance().clone())),
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ => Err(Error::at_token(
            ErrorImpl::ExpectedExpression,
            parser.current_token(),
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        parser.advance();
        let expr = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::CloseParen, "Expect ')' after expression.")?;

        Ok(Expr::grouping(expr))
    })
}
