//! Parser for interaction script tokens.
//!
//! Scripts are line oriented: trivia is dropped, the token stream is split at
//! newlines and every non-empty line is parsed as one [`Command`]. A bad line
//! produces one diagnostic and parsing resumes on the next line, so a file's
//! errors are all reported together.

use log::{debug, trace};
use winnow::{
    Parser,
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use venn_core::{identifier::Id, scale::StageEdge};

use crate::{
    command::{Command, CommandKeyword},
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    script::Script,
    span::{Span, Spanned},
    tokens::{PositionedToken, Token},
};

/// Context attached to argument parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Context {
    /// What the argument is, for "missing ..." and "expected ..." messages.
    Expected(&'static str),
    /// A dedicated diagnostic for a present but malformed argument.
    Invalid {
        code: ErrorCode,
        message: &'static str,
    },
}

type Input<'t> = TokenSlice<'t, PositionedToken<'t>>;
type Error = ErrMode<ContextError<Context>>;
type IResult<O> = Result<O, Error>;

fn word<'t>(input: &mut Input<'t>) -> IResult<Spanned<&'t str>> {
    any.verify_map(|token: &'t PositionedToken<'t>| match &token.token {
        Token::Word(word) => Some(Spanned::new(*word, token.span)),
        _ => None,
    })
    .parse_next(input)
}

/// A bare word or a quoted string.
fn text<'t>(input: &mut Input<'t>) -> IResult<Spanned<String>> {
    any.verify_map(|token: &'t PositionedToken<'t>| match &token.token {
        Token::Word(word) => Some(Spanned::new(word.to_string(), token.span)),
        Token::StringLiteral(text) => Some(Spanned::new(text.clone(), token.span)),
        _ => None,
    })
    .parse_next(input)
}

fn number<'t>(input: &mut Input<'t>) -> IResult<Spanned<f32>> {
    any.verify_map(|token: &'t PositionedToken<'t>| match &token.token {
        Token::Number(number) => Some(Spanned::new(*number, token.span)),
        _ => None,
    })
    .parse_next(input)
}

fn region<'t>(input: &mut Input<'t>) -> IResult<Spanned<Id>> {
    text.map(|name| name.map(|name| Id::new(&name)))
        .context(Context::Expected("region id"))
        .parse_next(input)
}

fn coordinate<'t>(what: &'static str) -> impl Parser<Input<'t>, f32, Error> {
    number.map(|n| n.get()).context(Context::Expected(what))
}

fn axis_value<'t>(what: &'static str) -> impl Parser<Input<'t>, Spanned<String>, Error> {
    text.context(Context::Expected(what))
}

fn stage_edge<'t>(input: &mut Input<'t>) -> IResult<StageEdge> {
    word.verify_map(|word| word.inner().parse::<StageEdge>().ok())
        .context(Context::Expected("stage edge"))
        .context(Context::Invalid {
            code: ErrorCode::E105,
            message: "expected `start` or `end`",
        })
        .parse_next(input)
}

fn rating<'t>(input: &mut Input<'t>) -> IResult<Spanned<i32>> {
    number
        .verify_map(|n| {
            let value = n.get();
            let whole = value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f32;
            whole.then(|| n.map(|v| v as i32))
        })
        .context(Context::Expected("rating"))
        .context(Context::Invalid {
            code: ErrorCode::E104,
            message: "rating must be a whole number",
        })
        .parse_next(input)
}

/// Parse the arguments of `keyword`.
fn arguments(keyword: CommandKeyword, input: &mut Input<'_>) -> IResult<Command> {
    let command = match keyword {
        CommandKeyword::Click => Command::Click {
            id: region(input)?,
        },
        CommandKeyword::Background => Command::Background,
        CommandKeyword::Handle => Command::Handle,
        CommandKeyword::Release => Command::Release,
        CommandKeyword::Drag => Command::Drag {
            x: coordinate("x coordinate").parse_next(input)?,
            y: coordinate("y coordinate").parse_next(input)?,
        },
        CommandKeyword::Resize => Command::Resize {
            scale_x: coordinate("horizontal scale").parse_next(input)?,
            scale_y: coordinate("vertical scale").parse_next(input)?,
        },
        CommandKeyword::Value => Command::Value {
            id: region(input)?,
            value: axis_value("relative value").parse_next(input)?,
        },
        CommandKeyword::Stage => Command::Stage {
            id: region(input)?,
            edge: stage_edge(input)?,
            stage: axis_value("stage").parse_next(input)?,
        },
        CommandKeyword::Rate => Command::Rate {
            id: region(input)?,
            rating: rating(input)?,
        },
        CommandKeyword::Unrate => Command::Unrate {
            id: region(input)?,
        },
        CommandKeyword::Place => Command::Place {
            id: region(input)?,
            x: coordinate("x coordinate").parse_next(input)?,
            y: coordinate("y coordinate").parse_next(input)?,
        },
    };
    Ok(command)
}

fn command_list_help() -> String {
    let names: Vec<&str> = CommandKeyword::ALL.iter().map(|k| k.as_str()).collect();
    format!("commands are: {}", names.join(", "))
}

/// Turn a failed argument parse into a diagnostic.
///
/// The failing parser leaves the input at the offending token; if there is
/// none, the line ended early.
fn argument_error(
    err: Error,
    input: &Input<'_>,
    keyword: CommandKeyword,
    name_span: Span,
    line_span: Span,
) -> Diagnostic {
    let context_error = match err {
        ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
        ErrMode::Incomplete(_) => ContextError::new(),
    };
    let expected = context_error
        .context()
        .find_map(|c| match c {
            Context::Expected(what) => Some(*what),
            Context::Invalid { .. } => None,
        })
        .unwrap_or("argument");
    let invalid = context_error.context().find_map(|c| match c {
        Context::Invalid { code, message } => Some((*code, *message)),
        Context::Expected(_) => None,
    });
    let usage = format!("usage: {}", keyword.usage());

    match (input.peek_token(), invalid) {
        (Some(token), Some((code, message))) => Diagnostic::error(message)
            .with_code(code)
            .with_label(token.span, code.description())
            .with_help(usage),
        (Some(token), None) => Diagnostic::error(format!("expected {expected}, found {}", token.token))
            .with_code(ErrorCode::E100)
            .with_label(token.span, format!("expected {expected}"))
            .with_help(usage),
        (None, _) => Diagnostic::error(format!("missing {expected}"))
            .with_code(ErrorCode::E101)
            .with_label(line_span.end_point(), format!("expected {expected} here"))
            .with_secondary_label(name_span, format!("`{keyword}` needs more arguments"))
            .with_help(usage),
    }
}

/// Parse one line of significant tokens. `tokens` is never empty.
fn parse_line<'t>(tokens: &'t [PositionedToken<'t>]) -> Result<Spanned<Command>, Diagnostic> {
    let line_span = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.union(last.span),
        _ => Span::default(),
    };
    let mut input = Input::new(tokens);

    let name = word.parse_next(&mut input).map_err(|_| {
        let found = &tokens[0];
        Diagnostic::error(format!("expected a command, found {}", found.token))
            .with_code(ErrorCode::E100)
            .with_label(found.span, "a line starts with a command")
            .with_help(command_list_help())
    })?;

    let keyword: CommandKeyword = name.inner().parse().map_err(|()| {
        Diagnostic::error(format!("unknown command `{}`", name.inner()))
            .with_code(ErrorCode::E102)
            .with_label(name.span(), ErrorCode::E102.description())
            .with_help(command_list_help())
    })?;

    let command = arguments(keyword, &mut input)
        .map_err(|err| argument_error(err, &input, keyword, name.span(), line_span))?;

    if let Some(extra) = input.peek_token() {
        return Err(Diagnostic::error(format!("unexpected {} after `{keyword}`", extra.token))
            .with_code(ErrorCode::E103)
            .with_label(extra.span, ErrorCode::E103.description())
            .with_help(format!("usage: {}", keyword.usage())));
    }

    trace!(keyword:% = keyword, span:% = line_span; "Parsed command");
    Ok(Spanned::new(command, line_span))
}

/// Build a script from the lexer's token stream.
pub(crate) fn build_script(tokens: &[PositionedToken<'_>]) -> Result<Script, ParseError> {
    let significant: Vec<PositionedToken<'_>> = tokens
        .iter()
        .filter(|t| !t.token.is_trivia())
        .cloned()
        .collect();

    let mut diagnostics = DiagnosticCollector::new();
    let mut commands = Vec::new();

    for line in significant.split(|t| matches!(t.token, Token::Newline)) {
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(command) => commands.push(command),
            Err(diagnostic) => diagnostics.emit(diagnostic),
        }
    }

    diagnostics.finish()?;
    debug!(commands = commands.len(); "Script parsed");
    Ok(Script::new(commands))
}
