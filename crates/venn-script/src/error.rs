//! Diagnostics for interaction scripts.
//!
//! Every problem found in a script is a [`Diagnostic`]: a severity, an
//! [`ErrorCode`], one or more labeled source spans and optional help text.
//! Lexing and parsing collect all diagnostics of a file in one pass and
//! return them together as a [`ParseError`]; validation only produces
//! warnings, which never stop a script from running.
//!
//! ```
//! # use venn_script::error::{Diagnostic, ErrorCode};
//! # use venn_script::Span;
//! let diag = Diagnostic::error("unknown command `clik`")
//!     .with_code(ErrorCode::E102)
//!     .with_label(Span::new(0..4), "not a command")
//!     .with_help("did you mean `click`?");
//!
//! assert_eq!(diag.to_string(), "error[E102]: unknown command `clik`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
