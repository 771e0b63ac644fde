use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// Receives the lexer positioned at the start of a match and the length of
/// the matched text in bytes. A handler must move the lexer forward.
pub type RegexHandler = fn(&mut Lexer, usize);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored; the first one matching at the cursor wins.
    // Two-character operators precede their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \r\t\n]+").unwrap(), handler: whitespace_handler },
        RegexPattern { regex: Regex::new("^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: String,
    pos: usize,
    line: u32,
    /// Byte offset where the current lexeme begins
    start: usize,
    /// Byte offset of the first character of `line`
    line_start: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            errors: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            start: 0,
            line_start: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!("scanned {}", token);
        self.tokens.push(token);
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the current lexeme's first character.
    pub fn column(&self) -> u32 {
        if self.start < self.line_start {
            return 1;
        }

        self.source[self.line_start..self.start].chars().count() as u32 + 1
    }

    /// Counts the newlines in `source[from..to]` and moves the line start
    /// past the last one.
    fn track_lines(&mut self, from: usize, to: usize) {
        let text = &self.source[from..to];

        if let Some(last) = text.rfind('\n') {
            self.line += text.matches('\n').count() as u32;
            self.line_start = from + last + 1;
        }
    }

    pub fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn error(&mut self, error: ErrorImpl) {
        let error = Error::new(error, self.line).with_column(self.column());
        self.errors.push(error);
    }

    /// Scans one lexeme starting at the cursor. Unknown characters are
    /// reported and skipped.
    fn scan_token(&mut self) {
        self.start = self.pos;

        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(self.remainder()) {
                let len = matched.end();
                (pattern.handler)(self, len);
                return;
            }
        }

        if let Some(character) = self.at() {
            self.advance_n(character.len_utf8());
            self.error(ErrorImpl::UnexpectedCharacter { character });
        }
    }

    /// Runs the scan to completion, handing every lexical error to
    /// `diagnostics`. The result always ends with exactly one EOF token.
    pub fn scan(mut self, diagnostics: &mut Diagnostics) -> Vec<Token> {
        while !self.at_eof() {
            self.scan_token();
        }

        self.start = self.pos;
        self.push(MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            None,
            self.line,
            self.column()
        ));

        debug!(
            "scanned {} tokens over {} lines with {} errors",
            self.tokens.len(),
            self.line,
            self.errors.len()
        );

        for error in self.errors {
            diagnostics.push(error);
        }

        self.tokens
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) {
    lexer.advance_n(len);
}

fn whitespace_handler(lexer: &mut Lexer, len: usize) {
    lexer.track_lines(lexer.pos, lexer.pos + len);
    lexer.advance_n(len);
}

fn number_handler(lexer: &mut Lexer, len: usize) {
    let lexeme = lexer.remainder()[..len].to_string();
    let column = lexer.column();
    lexer.advance_n(len);

    // Digits with an optional fraction always parse; overflow becomes `inf`.
    let literal = lexeme.parse::<f64>().ok().map(Literal::Number);
    lexer.push(MK_TOKEN!(TokenKind::Number, lexeme, literal, lexer.line, column));
}

fn symbol_handler(lexer: &mut Lexer, len: usize) {
    let lexeme = lexer.remainder()[..len].to_string();
    let column = lexer.column();
    lexer.advance_n(len);

    let kind = match RESERVED_LOOKUP.get(lexeme.as_str()) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    };

    lexer.push(MK_TOKEN!(kind, lexeme, None, lexer.line, column));
}

fn string_handler(lexer: &mut Lexer, _len: usize) {
    // Strings are raw: no escapes, and they may span lines.
    let body_start = lexer.pos + 1;

    match lexer.source[body_start..].find('"') {
        Some(offset) => {
            let end = body_start + offset;
            let value = lexer.source[body_start..end].to_string();
            let lexeme = lexer.source[lexer.pos..=end].to_string();

            lexer.track_lines(body_start, end);
            lexer.pos = end + 1;

            let column = lexer.column();
            lexer.push(MK_TOKEN!(
                TokenKind::String,
                lexeme,
                Some(Literal::String(value)),
                lexer.line,
                column
            ));
        }
        None => {
            lexer.track_lines(body_start, lexer.source.len());
            lexer.pos = lexer.source.len();
            lexer.error(ErrorImpl::UnterminatedString);
        }
    }
}

/// Scans `source` into tokens terminated by a single EOF token.
///
/// Never fails: unexpected characters and unterminated strings are
/// reported to `diagnostics` and produce no token.
pub fn tokenize(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    Lexer::new(source).scan(diagnostics)
}
