use alloc::string::String;

use thiserror::Error;

/// A parse failure, with the position of the character that triggered it.
///
/// Parsing stops at the first error; no partial tree is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct ParserError {
    pub(crate) source: SyntaxError,
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based column of the offending character.
    pub column: usize,
}

/// The two ways a document can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character that cannot start a token, a malformed literal, or a token
    /// the grammar did not expect at this point.
    #[error("invalid token: {0}")]
    InvalidToken(String),
    /// A string literal still open when the input ran out.
    #[error("expected a closing '\"' before the end of input")]
    EndOfString,
}

impl ParserError {
    pub(crate) fn new(source: SyntaxError, line: usize, column: usize) -> Self {
        Self {
            source,
            line,
            column,
        }
    }

    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.source
    }

    /// Returns `true` for [`SyntaxError::InvalidToken`].
    #[must_use]
    pub fn is_invalid_token(&self) -> bool {
        matches!(self.source, SyntaxError::InvalidToken(_))
    }

    /// Returns `true` for [`SyntaxError::EndOfString`].
    #[must_use]
    pub fn is_end_of_string(&self) -> bool {
        matches!(self.source, SyntaxError::EndOfString)
    }
}
