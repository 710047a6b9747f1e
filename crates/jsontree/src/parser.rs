//! Recursive-descent grammar driver.
//!
//! The parser pulls one token at a time from the [`Lexer`] and keeps exactly
//! one token of lookahead in `current`. Each grammar procedure is entered
//! with `current` on its first token and returns with `current` on the token
//! after the construct it consumed:
//!
//! ```text
//! document := object | array
//! object   := '{' [ members ] '}'
//! members  := member (',' member)*
//! member   := STRING ':' value
//! array    := '[' [ elements ] ']'
//! elements := value (',' value)*
//! value    := NULL | BOOLEAN | STRING | INTEGER | object | array
//! ```
//!
//! The first error aborts the parse; nothing is recovered.
//!
//! # Examples
//!
//! ```rust
//! let root = jsontree::parse(r#"{"a": {"b": 1}}"#).unwrap();
//! assert_eq!(root[0].key(), "a");
//! assert_eq!(root[0][0].value(), "1");
//!
//! let err = jsontree::parse("[1, 2,]").unwrap_err();
//! assert!(err.is_invalid_token());
//! ```
use alloc::{format, string::String, vec::Vec};

use tracing::{debug, trace};

use crate::{
    ParserOptions,
    error::{ParserError, SyntaxError},
    lexer::Lexer,
    node::{Node, ROOT_KEY},
    token::{Token, TokenKind},
};

/// Parses a complete JSON document with the default [`ParserOptions`].
///
/// The document must be a single object or array. The returned root node
/// has key [`ROOT_KEY`] and owns the whole tree.
///
/// # Errors
///
/// Returns a [`ParserError`] describing the first lexical or grammatical
/// violation.
pub fn parse(text: &str) -> Result<Node, ParserError> {
    parse_with_options(text, ParserOptions::default())
}

/// Parses a complete JSON document with the given options.
///
/// # Errors
///
/// Returns a [`ParserError`] describing the first lexical or grammatical
/// violation, or nesting deeper than [`ParserOptions::max_depth`].
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<Node, ParserError> {
    debug!(len = text.len(), max_depth = options.max_depth, "parsing document");
    Parser::new(text, &options).run()
}

#[derive(Debug)]
struct Parser {
    lexer: Lexer,
    current: Option<Token>,
    depth: usize,
    max_depth: usize,

    /// Panic on syntax errors instead of returning them
    #[cfg(any(test, feature = "fuzzing"))]
    panic_on_error: bool,
}

impl Parser {
    fn new(text: &str, options: &ParserOptions) -> Self {
        Self {
            lexer: Lexer::new(text, options),
            current: None,
            depth: 0,
            max_depth: options.max_depth,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: options.panic_on_error,
        }
    }

    fn run(mut self) -> Result<Node, ParserError> {
        match self.document() {
            Ok(root) => {
                debug_assert!(self.lexer.eof());
                debug!(
                    root = %root.json_type(),
                    children = root.len(),
                    "parsed document"
                );
                Ok(root)
            }
            Err(err) => {
                #[cfg(any(test, feature = "fuzzing"))]
                assert!(!self.panic_on_error, "Syntax error: {err}");
                debug!(
                    error = %err.kind(),
                    line = err.line,
                    column = err.column,
                    "parse failed"
                );
                Err(err)
            }
        }
    }

    // ---------------------------------------------------------------------
    // Token plumbing
    // ---------------------------------------------------------------------

    fn advance(&mut self) -> Result<(), ParserError> {
        self.current = self.lexer.next_token()?;
        if let Some(token) = &self.current {
            let (line, column) = token.position();
            trace!(kind = ?token.kind(), lexeme = %token.lexeme(), line, column, "token");
        }
        Ok(())
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current.as_ref().map(Token::kind)
    }

    /// Consumes the current token if it is `kind`.
    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<(), ParserError> {
        if self.current_kind() != Some(kind) {
            return Err(self.unexpected(what));
        }
        self.advance()
    }

    /// An error naming what was wanted and what was found instead.
    fn unexpected(&self, expected: &str) -> ParserError {
        match &self.current {
            Some(token) => {
                let (line, column) = token.position();
                ParserError::new(
                    SyntaxError::InvalidToken(format!("expected {expected}, found {token}")),
                    line,
                    column,
                )
            }
            None => {
                let (line, column) = self.lexer.position();
                ParserError::new(
                    SyntaxError::InvalidToken(format!("expected {expected}, found end of input")),
                    line,
                    column,
                )
            }
        }
    }

    fn enter(&mut self) -> Result<(), ParserError> {
        if self.depth >= self.max_depth {
            return Err(self.unexpected(&format!(
                "at most {} levels of nesting (nesting too deep)",
                self.max_depth
            )));
        }
        self.depth += 1;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Grammar
    // ---------------------------------------------------------------------

    fn document(&mut self) -> Result<Node, ParserError> {
        self.advance()?;

        let root = match self.current_kind() {
            Some(TokenKind::OpenBrace) => self.object(ROOT_KEY.into())?,
            Some(TokenKind::OpenBracket) => self.array(ROOT_KEY.into())?,
            _ => return Err(self.unexpected("'{' or '[' at the start of the document")),
        };

        if self.current.is_some() {
            return Err(self.unexpected("end of input after the document"));
        }
        Ok(root)
    }

    fn object(&mut self, key: String) -> Result<Node, ParserError> {
        self.enter()?;
        let mut members = Vec::new();

        self.advance()?; // '{'
        self.members(&mut members)?;
        self.expect(TokenKind::CloseBrace, "',' or '}'")?;

        self.depth -= 1;
        Ok(Node::object(key, members))
    }

    fn array(&mut self, key: String) -> Result<Node, ParserError> {
        self.enter()?;
        let mut elements = Vec::new();

        self.advance()?; // '['
        self.elements(&mut elements)?;
        self.expect(TokenKind::CloseBracket, "',' or ']'")?;

        self.depth -= 1;
        Ok(Node::array(key, elements))
    }

    fn members(&mut self, members: &mut Vec<Node>) -> Result<(), ParserError> {
        if self.current_kind() == Some(TokenKind::CloseBrace) {
            return Ok(());
        }

        self.member(members)?;
        while self.current_kind() == Some(TokenKind::Comma) {
            self.advance()?;
            self.member(members)?;
        }
        Ok(())
    }

    fn member(&mut self, members: &mut Vec<Node>) -> Result<(), ParserError> {
        let key = match self.current.take() {
            Some(token) if token.kind() == TokenKind::String => token.into_text(),
            other => {
                self.current = other;
                return Err(self.unexpected("a string key"));
            }
        };

        self.advance()?;
        self.expect(TokenKind::Colon, "':' after an object key")?;
        self.value(members, key)
    }

    fn elements(&mut self, elements: &mut Vec<Node>) -> Result<(), ParserError> {
        if self.current_kind() == Some(TokenKind::CloseBracket) {
            return Ok(());
        }

        self.value(elements, String::new())?;
        while self.current_kind() == Some(TokenKind::Comma) {
            self.advance()?;
            self.value(elements, String::new())?;
        }
        Ok(())
    }

    /// Parses one value and appends it to its parent's children under `key`.
    fn value(&mut self, children: &mut Vec<Node>, key: String) -> Result<(), ParserError> {
        let child = match self.current_kind() {
            Some(TokenKind::OpenBrace) => self.object(key)?,
            Some(TokenKind::OpenBracket) => self.array(key)?,
            Some(TokenKind::Null | TokenKind::Boolean | TokenKind::String | TokenKind::Integer) => {
                self.terminal(key)?
            }
            _ => return Err(self.unexpected("a value")),
        };

        children.push(child);
        Ok(())
    }

    fn terminal(&mut self, key: String) -> Result<Node, ParserError> {
        let Some(token) = self.current.take() else {
            return Err(self.unexpected("a value"));
        };

        let node = match token.kind() {
            TokenKind::Null => Node::null(key),
            TokenKind::Boolean => Node::boolean(key, token.lexeme() == "true"),
            TokenKind::Integer => Node::integer(key, token.into_text()),
            TokenKind::String => Node::string(key, token.into_text()),
            _ => {
                self.current = Some(token);
                return Err(self.unexpected("a value"));
            }
        };

        self.advance()?;
        Ok(node)
    }
}
