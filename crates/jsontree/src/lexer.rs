//! Character-level tokenizer.
//!
//! The lexer owns a copy of the input and walks it with a read cursor,
//! handing out one [`Token`] per call to [`Lexer::next_token`]. End of input
//! is `Ok(None)`; the grammar decides whether that is acceptable.
use alloc::{format, string::String};

use crate::{
    ParserOptions,
    buffer::ByteBuffer,
    error::{ParserError, SyntaxError},
    escape_buffer::{self, InvalidHexDigit, UnicodeEscapeBuffer},
    token::{Token, TokenKind},
};

#[derive(Debug)]
pub(crate) struct Lexer {
    source: ByteBuffer,
    pos: usize,
    line: usize,
    column: usize,
    decode_escapes: bool,
    lexeme_capacity: usize,
    unicode_escape: UnicodeEscapeBuffer,
}

impl Lexer {
    pub fn new(text: &str, options: &ParserOptions) -> Self {
        let source = ByteBuffer::from(text);
        tracing::trace!(len = source.len(), capacity = source.capacity(), "lexer input buffered");
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
            decode_escapes: options.decode_escapes,
            lexeme_capacity: options.lexeme_capacity,
            unicode_escape: UnicodeEscapeBuffer::new(),
        }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Line and column of the next unread character.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Produces the next token, or `None` once only whitespace remains.
    ///
    /// # Errors
    ///
    /// `InvalidToken` for a character that cannot start a token or a
    /// malformed literal, escape or integer; `EndOfString` for an
    /// unterminated string.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParserError> {
        loop {
            let Some(byte) = self.peek() else {
                return Ok(None);
            };
            let (line, column) = self.position();

            let token = match byte {
                b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => {
                    self.advance();
                    continue;
                }
                b'"' => self.string(line, column)?,
                b'-' | b'0'..=b'9' => self.integer(line, column)?,
                b't' => self.literal("true", TokenKind::Boolean, line, column)?,
                b'f' => self.literal("false", TokenKind::Boolean, line, column)?,
                b'n' => self.literal("null", TokenKind::Null, line, column)?,
                _ => {
                    let Some(kind) = TokenKind::punctuator(byte) else {
                        return Err(self.unexpected_character());
                    };
                    self.advance();
                    let mut lexeme = ByteBuffer::with_capacity(1);
                    lexeme.push(byte);
                    Token::new(kind, lexeme, line, column)
                }
            };

            return Ok(Some(token));
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos)
    }

    /// The full character at the cursor, for error messages.
    fn peek_char(&self) -> Option<char> {
        let (ch, _) = bstr::decode_utf8(&self.source.as_bytes()[self.pos.min(self.source.len())..]);
        ch
    }

    #[inline]
    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if !is_continuation(byte) {
            self.column += 1;
        }
        Some(byte)
    }

    /// Copies the run of bytes matching `pred` into `dst` in one slice.
    /// `pred` must reject `\n` so that line tracking stays in `advance`.
    fn copy_while(&mut self, dst: &mut ByteBuffer, pred: impl Fn(u8) -> bool) -> usize {
        let rest = &self.source.as_bytes()[self.pos..];
        let len = rest.iter().position(|&b| !pred(b)).unwrap_or(rest.len());
        let run = &rest[..len];

        debug_assert!(!run.contains(&b'\n'));
        dst.extend_from_slice(run);
        self.column += run.iter().filter(|&&b| !is_continuation(b)).count();
        self.pos += len;
        len
    }

    fn error(&self, source: SyntaxError) -> ParserError {
        ParserError::new(source, self.line, self.column)
    }

    fn invalid(&self, message: String) -> ParserError {
        self.error(SyntaxError::InvalidToken(message))
    }

    fn unexpected_character(&self) -> ParserError {
        match self.peek_char() {
            Some(ch) => self.invalid(format!("unexpected character {ch:?}")),
            None => self.invalid("unexpected byte".into()),
        }
    }

    fn new_lexeme(&self) -> ByteBuffer {
        ByteBuffer::with_capacity(self.lexeme_capacity)
    }

    // ---------------------------------------------------------------------
    // Literals
    // ---------------------------------------------------------------------

    fn literal(
        &mut self,
        text: &'static str,
        kind: TokenKind,
        line: usize,
        column: usize,
    ) -> Result<Token, ParserError> {
        for &expected in text.as_bytes() {
            if self.peek() != Some(expected) {
                return Err(self.invalid(format!("malformed literal, expected `{text}`")));
            }
            self.advance();
        }
        Ok(Token::new(kind, ByteBuffer::from(text), line, column))
    }

    fn integer(&mut self, line: usize, column: usize) -> Result<Token, ParserError> {
        let mut lexeme = self.new_lexeme();
        if self.peek() == Some(b'-') {
            self.advance();
            lexeme.push(b'-');
        }

        if self.copy_while(&mut lexeme, |b| b.is_ascii_digit()) == 0 {
            return Err(self.invalid("expected a digit after '-'".into()));
        }
        Ok(Token::new(TokenKind::Integer, lexeme, line, column))
    }

    // ---------------------------------------------------------------------
    // Strings
    // ---------------------------------------------------------------------

    fn string(&mut self, line: usize, column: usize) -> Result<Token, ParserError> {
        self.advance(); // opening quote
        let mut lexeme = self.new_lexeme();

        loop {
            self.copy_while(&mut lexeme, |b| !matches!(b, b'"' | b'\\' | b'\n'));

            match self.advance() {
                None => return Err(self.error(SyntaxError::EndOfString)),
                Some(b'"') => return Ok(Token::new(TokenKind::String, lexeme, line, column)),
                Some(b'\\') => self.escape(&mut lexeme)?,
                Some(byte) => lexeme.push(byte),
            }
        }
    }

    /// Handles the character after a backslash.
    fn escape(&mut self, lexeme: &mut ByteBuffer) -> Result<(), ParserError> {
        let Some(byte) = self.peek() else {
            return Err(self.error(SyntaxError::EndOfString));
        };

        let decoded = match byte {
            b'"' | b'\\' | b'/' => byte,
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => {
                self.advance();
                return self.unicode_escape(lexeme);
            }
            _ => {
                let ch = self.peek_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(self.invalid(format!("invalid escape sequence '\\{ch}'")));
            }
        };
        self.advance();

        if self.decode_escapes {
            lexeme.push(decoded);
        } else {
            lexeme.push(b'\\');
            lexeme.push(byte);
        }
        Ok(())
    }

    /// Reads four hex digits after `\u`. In decoding mode a high surrogate
    /// must be followed by a `\u` escape holding the low half.
    fn unicode_escape(&mut self, lexeme: &mut ByteBuffer) -> Result<(), ParserError> {
        let start = self.pos;
        let unit = self.hex_unit()?;

        if !self.decode_escapes {
            lexeme.extend_from_slice(b"\\u");
            lexeme.extend_from_slice(&self.source.as_bytes()[start..self.pos]);
            return Ok(());
        }

        if escape_buffer::is_low_surrogate(unit) {
            return Err(self.invalid(format!("unpaired surrogate \\u{unit:04X}")));
        }

        let ch = if escape_buffer::is_high_surrogate(unit) {
            if self.peek() != Some(b'\\') || self.source.get(self.pos + 1) != Some(b'u') {
                return Err(self.invalid(format!("unpaired surrogate \\u{unit:04X}")));
            }
            self.advance();
            self.advance();

            let low = self.hex_unit()?;
            if !escape_buffer::is_low_surrogate(low) {
                return Err(self.invalid(format!(
                    "invalid surrogate pair \\u{unit:04X}\\u{low:04X}"
                )));
            }
            escape_buffer::combine_surrogates(unit, low)
        } else {
            char::from_u32(u32::from(unit))
        };

        match ch {
            Some(ch) => {
                lexeme.push_char(ch);
                Ok(())
            }
            None => Err(self.invalid(format!("invalid unicode escape \\u{unit:04X}"))),
        }
    }

    fn hex_unit(&mut self) -> Result<u16, ParserError> {
        self.unicode_escape.reset();
        loop {
            let Some(byte) = self.peek() else {
                return Err(self.error(SyntaxError::EndOfString));
            };
            match self.unicode_escape.feed(byte) {
                Ok(unit) => {
                    self.advance();
                    if let Some(unit) = unit {
                        return Ok(unit);
                    }
                }
                Err(InvalidHexDigit(_)) => {
                    let ch = self.peek_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(self.invalid(format!("invalid unicode escape character {ch:?}")));
                }
            }
        }
    }
}

/// UTF-8 continuation bytes do not start a new column.
#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
