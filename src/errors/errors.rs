use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

/// Where on its line an error was detected, rendered into the diagnostic
/// between `Error` and the message.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorLocation {
    None,
    AtEnd,
    At(String),
    /// Caller-supplied text, used verbatim.
    Raw(String),
}

impl ErrorLocation {
    pub fn from_token(token: &Token) -> Self {
        if token.kind == TokenKind::EOF {
            ErrorLocation::AtEnd
        } else {
            ErrorLocation::At(token.lexeme.clone())
        }
    }
}

impl Display for ErrorLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorLocation::None => write!(f, ""),
            ErrorLocation::AtEnd => write!(f, " at end"),
            ErrorLocation::At(lexeme) => write!(f, " at '{}'", lexeme),
            ErrorLocation::Raw(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
    column: Option<u32>,
    location: ErrorLocation,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
            column: None,
            location: ErrorLocation::None,
        }
    }

    /// Creates an error positioned at `token`, using the "at end" form for EOF.
    pub fn at_token(error_impl: ErrorImpl, token: &Token) -> Self {
        Error {
            internal_error: error_impl,
            line: token.line,
            column: Some(token.column),
            location: ErrorLocation::from_token(token),
        }
    }

    pub fn with_location(mut self, location: ErrorLocation) -> Self {
        self.location = location;
        self
    }

    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    /// The 1-based column the error points at, when it is known.
    pub fn get_column(&self) -> Option<u32> {
        self.column
    }

    pub fn get_location(&self) -> &ErrorLocation {
        &self.location
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::ExpectedExpression => "ExpectedExpression",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::TooDeeplyNested => "TooDeeplyNested",
            ErrorImpl::Reported { .. } => "Reported",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the language, remove it",
                character
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Close the string with a `\"`"))
            }
            ErrorImpl::ExpectedExpression => ErrorTip::None,
            ErrorImpl::ExpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("Insert a `{}` here", expected))
            }
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "Only variables can be assigned to",
            )),
            ErrorImpl::TooDeeplyNested => ErrorTip::Suggestion(String::from(
                "Split the code into smaller pieces",
            )),
            ErrorImpl::Reported { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected character '{character}'.")]
    UnexpectedCharacter { character: char },
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Expect expression.")]
    ExpectedExpression,
    #[error("{message}")]
    ExpectedToken { expected: &'static str, message: &'static str },
    #[error("Invalid assignment target.")]
    InvalidAssignmentTarget,
    #[error("Too much nesting.")]
    TooDeeplyNested,
    /// A free-form report made through `Diagnostics::report`.
    #[error("{message}")]
    Reported { message: String },
}
