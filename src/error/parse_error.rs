use thiserror::Error;

/// Represents all errors that can occur while parsing a token stream.
///
/// Every variant carries the line of the token where the parser gave up. The
/// parser never recovers, so the first error is the only one reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyntaxError {
    /// The program does not open with the start keyword.
    #[error("Error on line {line}: শুরুতে 'ও কাকা' বলো! (Program must start with 'ও কাকা').")]
    MissingProgramStart {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The statements ran out without reaching the end keyword.
    #[error("Error on line {line}: শেষে 'আসি কাকা' বলো! (Program must end with 'আসি কাকা').")]
    MissingProgramEnd {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but something else was found.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    Expected {
        /// Description of the required token.
        expected: String,
        /// The token that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token that cannot start an expression.
    #[error("Error on line {line}: অপ্রত্যাশিত টোকেন (Unexpected token): {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The left side of `=` is not a plain identifier.
    #[error("Error on line {line}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
}
