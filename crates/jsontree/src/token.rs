use alloc::{borrow::Cow, string::String};
use core::fmt;

use crate::buffer::ByteBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Colon,
    String,
    Integer,
    Boolean,
    Null,
}

impl TokenKind {
    /// The punctuator kind for a single structural byte.
    pub fn punctuator(byte: u8) -> Option<Self> {
        Some(match byte {
            b'{' => Self::OpenBrace,
            b'}' => Self::CloseBrace,
            b'[' => Self::OpenBracket,
            b']' => Self::CloseBracket,
            b',' => Self::Comma,
            b':' => Self::Colon,
            _ => return None,
        })
    }
}

/// A classified lexeme. String lexemes have their quotes stripped; integer
/// lexemes keep the digits (and sign) exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    kind: TokenKind,
    lexeme: ByteBuffer,
    line: usize,
    column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: ByteBuffer, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme,
            line,
            column,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> Cow<'_, str> {
        self.lexeme.as_text()
    }

    pub fn into_text(self) -> String {
        self.lexeme.to_text()
    }

    /// Line and column of the token's first character.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "string \"{}\"", self.lexeme()),
            TokenKind::Integer => write!(f, "integer {}", self.lexeme()),
            TokenKind::Boolean | TokenKind::Null => f.write_str(&self.lexeme()),
            _ => write!(f, "'{}'", self.lexeme()),
        }
    }
}
