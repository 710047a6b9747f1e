/// Configuration options for [`parse_with_options`](crate::parse_with_options).
///
/// # Examples
///
/// ```rust
/// use jsontree::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     max_depth: 4,
///     ..Default::default()
/// };
/// let root = parse_with_options(r#"{"a":[1]}"#, options).unwrap();
/// assert_eq!(root.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting depth of objects and arrays, counting the root.
    ///
    /// A document nested deeper than this is rejected with an invalid token
    /// error instead of recursing further.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,

    /// Whether escape sequences in strings are decoded.
    ///
    /// When `true`, `\n` becomes a newline, `\u00e9` becomes `é`, and
    /// surrogate pairs are combined. When `false`, string values keep the
    /// escape text exactly as written in the source, backslash included. Both
    /// modes reject escapes outside the JSON set.
    ///
    /// # Default
    ///
    /// `true`
    pub decode_escapes: bool,

    /// Initial capacity in bytes of each lexeme buffer. Buffers double when
    /// they fill up.
    ///
    /// # Default
    ///
    /// `16`
    pub lexeme_capacity: usize,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on parse failures.
    pub panic_on_error: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: 128,
            decode_escapes: true,
            lexeme_capacity: 16,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
