/// Lexing errors.
///
/// Raised by the scanner when a character belongs to none of the recognized
/// token categories.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream: missing program markers, missing or unexpected tokens,
/// and invalid assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution: unbound
/// variables, calls of non-callable values, unsupported member access and the
/// host's execution limits.
pub mod runtime_error;

pub use lex_error::UnknownCharacterError;
pub use parse_error::SyntaxError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any error the pipeline can produce, tagged by the stage that failed.
///
/// Each stage fails fast, so a run produces at most one of these.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The scanner met an unknown character.
    #[error(transparent)]
    Lex(#[from] UnknownCharacterError),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Execution failed after parsing succeeded.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
