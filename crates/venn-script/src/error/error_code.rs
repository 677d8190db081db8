//! Error codes for script diagnostics.
//!
//! - `E0xx` - lexer errors
//! - `E1xx` - parser errors
//! - `E2xx` - validation warnings

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexer (E0xx)
    /// A string was opened with `"` but the line ended first.
    E001,
    /// A character that starts no token.
    E002,
    /// Unknown escape in a string literal.
    E003,

    // Parser (E1xx)
    /// A token of the wrong kind for this argument.
    E100,
    /// The line ended before every argument was given.
    E101,
    /// The first word of a line names no command.
    E102,
    /// More arguments than the command takes.
    E103,
    /// A rating that is not a whole number.
    E104,
    /// A stage edge other than `start` or `end`.
    E105,

    // Validation (E2xx)
    /// A region id not present in the diagram.
    E200,
    /// A value not on the relative value or stage axis.
    E201,
    /// A rating outside `1..=5`.
    E202,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Short description, used as the default label text.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated string literal",
            ErrorCode::E002 => "unexpected character",
            ErrorCode::E003 => "invalid escape sequence",
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "missing argument",
            ErrorCode::E102 => "unknown command",
            ErrorCode::E103 => "unexpected extra argument",
            ErrorCode::E104 => "invalid rating",
            ErrorCode::E105 => "invalid stage edge",
            ErrorCode::E200 => "unknown region",
            ErrorCode::E201 => "unknown axis value",
            ErrorCode::E202 => "rating out of range",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
