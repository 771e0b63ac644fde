//! The diagnostic sink shared by the lexer and the parser.
//!
//! Neither pass stops on malformed input. Both push what they find into a
//! caller-owned [`Diagnostics`] value and keep going; the caller checks
//! [`Diagnostics::had_error`] afterwards to decide whether the resulting
//! tree should be executed at all.

use log::error;

use super::errors::{Error, ErrorImpl, ErrorLocation, ErrorTip};

/// Exit code a caller conventionally uses when a whole-file parse reported
/// errors (`EX_DATAERR`).
pub const EXIT_CODE_DATA_ERROR: i32 = 65;

#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    errors: Vec<Error>,
    had_error: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Records a free-form error. `location` is rendered verbatim between
    /// `Error` and the message, e.g. `" at end"`.
    pub fn report(&mut self, line: u32, location: &str, message: &str) {
        let location = if location.is_empty() {
            ErrorLocation::None
        } else {
            ErrorLocation::Raw(location.to_string())
        };

        self.push(
            Error::new(
                ErrorImpl::Reported {
                    message: message.to_string(),
                },
                line,
            )
            .with_location(location),
        );
    }

    pub fn push(&mut self, error: Error) {
        error!("{}", error);
        self.had_error = true;
        self.errors.push(error);
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Clears the error flag and everything collected so far, e.g. between
    /// two lines of an interactive session.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.errors.clear();
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line
/// terminator.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders `error` against the source it was reported for:
///
/// ```text
/// Error: ExpectedToken (Insert a `;` here)
/// [line 2] Error at end: Expect ';' after value.
///   |
/// 2 | print 1
///   | -------^
/// ```
///
/// Errors without a known column close the snippet with a bare `|`.
pub fn render(error: &Error, source: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("{}\n", error));

    let line_str = error.get_line().to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let text = get_source_line(source, error.get_line());
    if let Some(text) = text {
        out.push_str(&format!("{} | {}\n", line_str, text.trim()));
    }

    match (text, error.get_column()) {
        (Some(text), Some(column)) => {
            // The source line is printed without its indentation
            let indent = text.chars().take_while(|c| c.is_whitespace()).count();
            let arrows = (column as usize).saturating_sub(indent).max(1);

            out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
        }
        _ => out.push_str(&format!("{:>padding$}\n", "|")),
    }

    out
}
