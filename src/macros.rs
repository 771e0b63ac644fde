//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source text of the token
/// * `$literal` - The token's literal value, if any
/// * `$line` - The source line the token ends on
/// * `$column` - The column the token starts at on that line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Some(Literal::Number(42.0)), 1, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr, $column:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            line: $line,
            column: $column,
        }
    };
}

/// Creates a default lexer handler for operators and punctuation.
///
/// Generates a handler function that advances the lexer past the matched
/// text and pushes a token of the given kind with no literal value.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal source text of the token
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, _len: usize| {
            let column = lexer.column();
            lexer.advance_n($value.len());
            lexer.push($crate::MK_TOKEN!(
                $kind,
                String::from($value),
                None,
                lexer.line(),
                column
            ));
        }
    };
}
