//! Lexical analyzer for interaction scripts.
//!
//! [`tokenize`] turns source text into [`PositionedToken`]s. It recovers from
//! bad input and reports every lexical problem of the file at once.

use winnow::{
    Parser as _,
    ascii::float,
    combinator::{alt, cut_err, not, peek, preceded, repeat, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{none_of, one_of, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Diagnostic details attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LexerDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span runs from here to the failure position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<LexerDiagnostic>>;

/// Characters allowed inside a bare word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '+' | '&')
}

/// Parse an escape sequence after a backslash: `\"`, `\\`, `\n` or `\t`.
fn string_escape(input: &mut Input<'_>) -> IResult<char> {
    let escape_start = input.current_token_start();

    preceded(
        '\\',
        cut_err(one_of(['"', '\\', 'n', 't']).map(|c| match c {
            'n' => '\n',
            't' => '\t',
            other => other,
        }))
        .context(LexerDiagnostic {
            code: ErrorCode::E003,
            message: "invalid escape sequence",
            help: Some("supported escapes are `\\\"`, `\\\\`, `\\n` and `\\t`"),
            start: escape_start,
        }),
    )
    .parse_next(input)
}

/// Parse a double-quoted string on a single line.
fn string_literal<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    let string_char = none_of(['"', '\\', '\n']);
    let string_content =
        repeat(0.., alt((string_escape, string_char))).fold(String::new, |mut acc, ch| {
            acc.push(ch);
            acc
        });

    let start_pos = input.current_token_start();
    let open: IResult<char> = '"'.parse_next(input);
    open?;

    cut_err(terminated(string_content, '"'))
        .context(LexerDiagnostic {
            code: ErrorCode::E001,
            message: "unterminated string literal",
            help: Some("add the closing `\"` before the end of the line"),
            start: start_pos,
        })
        .parse_next(input)
        .map(Token::StringLiteral)
}

/// Parse a number that is not the prefix of a word (`info` is a word, not `inf`).
fn number<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    terminated(float, peek(not(one_of(is_word_char))))
        .map(Token::Number)
        .parse_next(input)
}

fn line_comment<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    preceded("//", take_while(0.., |c| c != '\n'))
        .map(Token::LineComment)
        .parse_next(input)
}

fn word<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., is_word_char)
        .map(Token::Word)
        .parse_next(input)
}

fn newline<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    '\n'.value(Token::Newline).parse_next(input)
}

/// Whitespace other than `\n`, including the `\r` of CRLF line endings.
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c.is_whitespace() && c != '\n')
        .value(Token::Whitespace)
        .parse_next(input)
}

fn positioned_token<'a>(input: &mut Input<'a>) -> IResult<PositionedToken<'a>> {
    let start_pos = input.current_token_start();

    let token = alt((
        line_comment,
        string_literal, // Commits after the opening quote
        number,         // Must come before word
        word,
        newline, // Before whitespace
        whitespace,
    ))
    .parse_next(input)?;

    let end_pos = input.current_token_start();
    Ok(PositionedToken::new(token, Span::new(start_pos..end_pos)))
}

/// Accumulates tokens and diagnostics during tokenization.
struct Lexer<'a> {
    tokens: Vec<PositionedToken<'a>>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Lexer<'a> {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn tokenize(&mut self, mut input: Input<'a>) {
        while !input.is_empty() {
            let start_pos = input.current_token_start();
            match positioned_token(&mut input) {
                Ok(token) => self.tokens.push(token),
                Err(e) => {
                    let error_pos = input.current_token_start();
                    self.diagnostics.emit(Self::convert_err_mode(e, error_pos));

                    // A failed string stops before the newline; keep that newline
                    // so the next line is lexed on its own.
                    if error_pos == start_pos && !input.is_empty() {
                        input.next_token();
                    }
                }
            }
        }
    }

    fn finish(self) -> Result<Vec<PositionedToken<'a>>, ParseError> {
        self.diagnostics.finish().map(|()| self.tokens)
    }

    /// Converts a winnow error into a diagnostic, using the innermost
    /// [`LexerDiagnostic`] context. Falls back to E002 without one.
    fn convert_err_mode(err: ErrMode<ContextError<LexerDiagnostic>>, error_pos: usize) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        if let Some(LexerDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            // Cover at least one character so the label is visible
            let span = Span::new(*start..error_pos.max(*start + 1));
            let mut diag = Diagnostic::error(*message)
                .with_code(*code)
                .with_label(span, code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        let span = Span::new(error_pos..error_pos.saturating_add(1));
        Diagnostic::error("unexpected character")
            .with_code(ErrorCode::E002)
            .with_label(span, ErrorCode::E002.description())
            .with_help("quote values that contain punctuation, e.g. \"Eval + Adapt\"")
    }
}

/// Tokenize a whole script, collecting every lexical error.
pub fn tokenize(input: &str) -> Result<Vec<PositionedToken<'_>>, ParseError> {
    let mut lexer = Lexer::new();
    lexer.tokenize(LocatingSlice::new(input));
    lexer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_token(input: &str) -> Token<'_> {
        let mut located = LocatingSlice::new(input);
        positioned_token(&mut located)
            .unwrap_or_else(|e| panic!("failed to lex {input:?}: {e:?}"))
            .token
    }

    fn significant(input: &str) -> Vec<Token<'_>> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .filter(|t| !t.is_trivia())
            .collect()
    }

    #[test]
    fn test_words() {
        assert_eq!(single_token("click"), Token::Word("click"));
        assert_eq!(single_token("eval_adapt"), Token::Word("eval_adapt"));
        assert_eq!(single_token("info"), Token::Word("info"));
        assert_eq!(single_token("intent"), Token::Word("intent"));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(single_token("42"), Token::Number(42.0));
        assert_eq!(single_token("-12.5"), Token::Number(-12.5));
        assert_eq!(single_token("1.25"), Token::Number(1.25));
        assert_eq!(single_token("2e2 "), Token::Number(200.0));
    }

    #[test]
    fn test_number_prefix_of_word_is_word() {
        assert_eq!(single_token("3rd"), Token::Word("3rd"));
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(
            single_token("\"Eval + Adapt\""),
            Token::StringLiteral("Eval + Adapt".to_string())
        );
        assert_eq!(
            single_token(r#""say \"hi\"""#),
            Token::StringLiteral("say \"hi\"".to_string())
        );
        assert_eq!(single_token("\"\""), Token::StringLiteral(String::new()));
    }

    #[test]
    fn test_comments_and_lines() {
        let tokens = significant("click intent // pick it\nrelease\n");
        assert_eq!(
            tokens,
            vec![
                Token::Word("click"),
                Token::Word("intent"),
                Token::Newline,
                Token::Word("release"),
                Token::Newline,
            ]
        );
    }

    #[test]
    fn test_crlf_is_whitespace_then_newline() {
        let tokens = significant("release\r\nhandle");
        assert_eq!(
            tokens,
            vec![Token::Word("release"), Token::Newline, Token::Word("handle")]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = tokenize("drag 10 20").unwrap();
        assert_eq!(tokens[0].span, Span::new(0..4));
        assert_eq!(tokens[2].span, Span::new(5..7));
        assert_eq!(tokens[4].span, Span::new(8..10));
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("value intent \"Medium\nrelease").unwrap_err();
        let diags = err.diagnostics();

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code(), Some(ErrorCode::E001));
        assert_eq!(diags[0].labels()[0].span().start(), 13);
    }

    #[test]
    fn test_invalid_escape() {
        let err = tokenize(r#"value intent "bad \q""#).unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E003));
    }

    #[test]
    fn test_collects_every_unexpected_character() {
        let err = tokenize("click #\nplace intent 1 2 ;").unwrap_err();
        let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();

        assert_eq!(codes, vec![Some(ErrorCode::E002), Some(ErrorCode::E002)]);
    }
}
