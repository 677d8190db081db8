//! Tokens produced by the script lexer.

use std::fmt;

use crate::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Token<'src> {
    /// Bare word: command names, region ids, unquoted values.
    Word(&'src str),
    /// Numeric literal, always read as `f32`.
    Number(f32),
    /// Double-quoted string with escapes resolved.
    StringLiteral(String),
    /// `// ...` up to the end of the line.
    LineComment(&'src str),
    Whitespace,
    Newline,
}

impl Token<'_> {
    /// Tokens that carry no meaning for the parser.
    pub fn is_trivia(&self) -> bool {
        matches!(self, Token::Whitespace | Token::LineComment(_))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "`{word}`"),
            Token::Number(number) => write!(f, "number `{number}`"),
            Token::StringLiteral(text) => write!(f, "string \"{text}\""),
            Token::LineComment(_) => write!(f, "comment"),
            Token::Whitespace => write!(f, "whitespace"),
            Token::Newline => write!(f, "end of line"),
        }
    }
}

/// A token with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}
