use std::fmt::Display;

use thiserror::Error;

use crate::{get_line_at_position, Position};

/// A syntax error: the grammar failed to match the whole input.
///
/// This is the only error the front-end produces. It points at the first
/// input that could not be matched and says what was expected there.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_detail(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        "SyntaxError"
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("Expected {} here", expected))
            }
            ErrorImpl::ReservedKeyword { keyword } => ErrorTip::Suggestion(format!(
                "`{}` is a reserved keyword, pick another name",
                keyword
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::None,
        }
    }

    /// Renders the error against the source it came from.
    ///
    /// ```text
    /// SyntaxError: expected an expression, found end of input
    /// -> main.ael:1:5
    ///   |
    /// 1 | x =
    ///   | ----^
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = format!("{}: {}\n", self.get_error_name(), self.internal_error);
        out.push_str(&format!("-> {}\n", self.position));

        let Some((line, line_text, line_pos)) = get_line_at_position(source, self.position.offset)
        else {
            return out;
        };

        let line_str = line.to_string();
        let padding = line_str.len() + 2;

        out.push_str(&format!("{:>padding$}\n", "|"));

        let line_text = line_text.trim_end_matches(['\n', '\r']);
        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
        out.push_str(&format!("{} | {}\n", line_str, line_text_removed));

        let column = line_text[..line_pos.min(line_text.len())].chars().count();
        let arrows = column.saturating_sub(removed_whitespace) + 1;
        out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

        if let ErrorTip::Suggestion(tip) = self.get_tip() {
            out.push_str(&format!("\n{:>padding$} {}", "=", tip));
        }

        out
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}: {}",
            self.position,
            self.get_error_name(),
            self.internal_error
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}

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
    #[error("expected {expected}, found {token}")]
    UnexpectedToken { token: String, expected: String },
    #[error("expected identifier, found reserved keyword `{keyword}`")]
    ReservedKeyword { keyword: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
