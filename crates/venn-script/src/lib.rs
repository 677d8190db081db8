//! # Venn Script
//!
//! Parser for interaction scripts: plain-text files with one pointer or
//! selector event per line, replayed against a diagram to make a session
//! reproducible.
//!
//! ```text
//! // Move the strategy region up and widen it
//! click intent
//! drag 450 400
//! release
//! resize 1.2 1
//! stage intent start Activation
//! stage intent end "Eval + Adapt"
//! rate intent 4
//! ```
//!
//! ## Usage
//!
//! ```
//! # use venn_script::{parse, Command, ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let script = parse("click intent\ndrag 450 400\nrelease\n")?;
//!     assert_eq!(script.len(), 3);
//!     assert!(matches!(script.commands()[1].inner(), Command::Drag { .. }));
//!     Ok(())
//! }
//! ```

mod command;
pub mod error;
mod lexer;
mod parser;
#[cfg(test)]
mod parser_tests;
mod script;
mod span;
mod tokens;
mod validate;

pub use command::{Command, CommandKeyword};
pub use error::ParseError;
pub use script::Script;
pub use span::{Span, Spanned};

use log::info;

/// Parse a script.
///
/// Lexing and parsing each report every error of the file at once. On
/// success the commands are returned in file order; see
/// [`Script::validate`] for checks against a concrete diagram.
pub fn parse(source: &str) -> Result<Script, ParseError> {
    info!(bytes = source.len(); "Parsing interaction script");
    let tokens = lexer::tokenize(source)?;
    parser::build_script(&tokens)
}
