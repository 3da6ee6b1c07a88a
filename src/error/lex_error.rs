use thiserror::Error;

/// A character that starts no token.
///
/// The scanner stops at the first such character; nothing after it is read.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Error on line {line}: অচেনা অক্ষর (Unknown character): '{character}'.")]
pub struct UnknownCharacterError {
    /// The offending character.
    pub character: char,
    /// The source line where the character appears.
    pub line:      usize,
}

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, UnknownCharacterError>;
