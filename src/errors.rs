//! Error types of the link-header pipeline, one closed set per stage.

pub use crate::lexer::LexError;
pub use crate::parser::ParseError;
pub use crate::resolver::ResolveError;

use thiserror::Error;

/// A hard failure of the lexing or parsing stage.
///
/// Either variant invalidates the whole header field; callers should treat
/// the header as absent and log. Per-entry resolution problems never surface
/// here: they are collected as [`ResolveDiagnostic`]s next to the surviving
/// links.
///
/// [`ResolveDiagnostic`]: crate::resolver::ResolveDiagnostic
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LinkHeaderError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
