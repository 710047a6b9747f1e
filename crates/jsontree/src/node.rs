//! The parsed tree.
//!
//! Every value in a document becomes a [`Node`]: a key plus one of six kinds
//! of content. Objects and arrays own their children in source order;
//! strings, integers, booleans and null are terminal. Object members carry
//! their member name as the key, array elements carry an empty key, and the
//! synthetic root carries [`ROOT_KEY`].
//!
//! Parents own their children outright, so a tree is dropped with its root and
//! traversal hands out plain borrows.
use alloc::{string::String, vec::Vec};
use core::{fmt, ops::Index, slice};

/// Key given to the node that wraps the whole document.
pub const ROOT_KEY: &str = "__ROOT_ELEMENT__";

/// The kind of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    /// `{ ... }`
    Object,
    /// `[ ... ]`
    Array,
    /// A string literal.
    String,
    /// An integer literal, kept as digit text.
    Integer,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
}

impl JsonType {
    /// Lower-case name used in messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::String => "string",
            JsonType::Integer => "integer",
            JsonType::Boolean => "boolean",
            JsonType::Null => "null",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Content {
    Object(Vec<Node>),
    Array(Vec<Node>),
    String(String),
    Integer(String),
    Boolean(bool),
    Null,
}

/// One value of a parsed document, together with the key it was stored
/// under.
///
/// Two trees compare equal when they have the same shape, keys and values.
///
/// # Examples
///
/// ```
/// use jsontree::{JsonType, parse};
///
/// let root = parse(r#"{"name": "ada", "tags": ["x", "y"]}"#).unwrap();
/// assert!(root.is_object());
/// assert_eq!(root.len(), 2);
///
/// let name = &root[0];
/// assert_eq!(name.key(), "name");
/// assert_eq!(name.value(), "ada");
///
/// let tags = root.find("tags").unwrap();
/// assert_eq!(tags.json_type(), JsonType::Array);
/// assert_eq!(tags[1].value(), "y");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    key: String,
    content: Content,
}

impl Node {
    /// An object owning `members` in source order.
    pub(crate) fn object(key: String, members: Vec<Node>) -> Self {
        Self::with_content(key, Content::Object(members))
    }

    /// An array owning `elements` in source order.
    pub(crate) fn array(key: String, elements: Vec<Node>) -> Self {
        Self::with_content(key, Content::Array(elements))
    }

    pub(crate) fn string(key: String, value: String) -> Self {
        Self::with_content(key, Content::String(value))
    }

    pub(crate) fn integer(key: String, digits: String) -> Self {
        Self::with_content(key, Content::Integer(digits))
    }

    pub(crate) fn boolean(key: String, value: bool) -> Self {
        Self::with_content(key, Content::Boolean(value))
    }

    pub(crate) fn null(key: String) -> Self {
        Self::with_content(key, Content::Null)
    }

    fn with_content(key: String, content: Content) -> Self {
        Self { key, content }
    }

    /// The kind of this node.
    #[must_use]
    pub fn json_type(&self) -> JsonType {
        match self.content {
            Content::Object(_) => JsonType::Object,
            Content::Array(_) => JsonType::Array,
            Content::String(_) => JsonType::String,
            Content::Integer(_) => JsonType::Integer,
            Content::Boolean(_) => JsonType::Boolean,
            Content::Null => JsonType::Null,
        }
    }

    /// The member name this node was stored under. Empty for array elements,
    /// [`ROOT_KEY`] for the root.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value text of a terminal node.
    ///
    /// Strings give their contents, integers their digit text, booleans
    /// `"true"` or `"false"`, null gives `"null"`. Objects and arrays give
    /// `""`.
    #[must_use]
    pub fn value(&self) -> &str {
        match &self.content {
            Content::Object(_) | Content::Array(_) => "",
            Content::String(text) | Content::Integer(text) => text,
            Content::Boolean(true) => "true",
            Content::Boolean(false) => "false",
            Content::Null => "null",
        }
    }

    /// Number of children of an object or array; `1` for a terminal node.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.content {
            Content::Object(children) | Content::Array(children) => children.len(),
            _ => 1,
        }
    }

    /// Returns `true` for an object or array without children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.content {
            Content::Object(children) | Content::Array(children) => children.is_empty(),
            _ => false,
        }
    }

    /// The children of an object or array, in source order. Empty for
    /// terminal nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Object(children) | Content::Array(children) => children,
            _ => &[],
        }
    }

    /// Iterates over [`children`](Self::children).
    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.children().iter()
    }

    /// The `index`-th child, or `None` if out of range or terminal.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.children().get(index)
    }

    /// The first member of an object stored under `key`.
    ///
    /// Objects keep every member in source order, so a repeated key finds
    /// its first occurrence. Always `None` for anything but an object.
    ///
    /// ```
    /// let root = jsontree::parse(r#"{"a": 1, "a": 2}"#).unwrap();
    /// assert_eq!(root.find("a").unwrap().value(), "1");
    /// assert!(root.find("b").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Node> {
        match &self.content {
            Content::Object(children) => children.iter().find(|child| child.key == key),
            _ => None,
        }
    }

    /// The string contents, if this is a string node.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.content {
            Content::String(text) => Some(text),
            _ => None,
        }
    }

    /// Parses the digit text of an integer node.
    ///
    /// Returns `None` for other kinds and for integers outside the `i64`
    /// range; the digit text itself is always available from
    /// [`value`](Self::value).
    ///
    /// ```
    /// let root = jsontree::parse("[-42, 99999999999999999999]").unwrap();
    /// assert_eq!(root[0].as_i64(), Some(-42));
    /// assert_eq!(root[1].as_i64(), None);
    /// assert_eq!(root[1].value(), "99999999999999999999");
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match &self.content {
            Content::Integer(digits) => digits.parse().ok(),
            _ => None,
        }
    }

    /// The value of a boolean node.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.content {
            Content::Boolean(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if the node is `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.content, Content::Null)
    }

    /// Returns `true` if the node is `true` or `false`.
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self.content, Content::Boolean(_))
    }

    /// Returns `true` if the node is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self.content, Content::Integer(_))
    }

    /// Returns `true` if the node is a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self.content, Content::String(_))
    }

    /// Returns `true` if the node is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.content, Content::Array(_))
    }

    /// Returns `true` if the node is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.content, Content::Object(_))
    }

    /// Returns `true` for strings, integers, booleans and null.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.is_composite()
    }

    /// Returns `true` for objects and arrays.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(self.content, Content::Object(_) | Content::Array(_))
    }
}

impl Index<usize> for Node {
    type Output = Node;

    /// The `index`-th child of an object or array.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, or if the node is terminal: a
    /// string, integer, boolean or null has nothing to index.
    fn index(&self, index: usize) -> &Node {
        match &self.content {
            Content::Object(children) | Content::Array(children) => &children[index],
            _ => panic!("cannot index into a {} node", self.json_type()),
        }
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Escapes a string for inclusion in a JSON string literal.
///
/// Quotes, backslashes and control characters are escaped, as are the line
/// separators U+2028 and U+2029.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0C}' => f.write_str("\\f")?,
            '\u{2028}' | '\u{2029}' => write!(f, "\\u{:04X}", c as u32)?,
            c if c.is_ascii_control() || (c.is_control() && c as u32 <= 0xFFFF) => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Renders the subtree as compact JSON. A node's own key is not part of its
/// rendering; object members are rendered as `"key":value` by their parent.
///
/// String values are escaped as they are stored, so a tree parsed with
/// escape decoding turned off renders its backslashes escaped once more.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Content::Null => f.write_str("null"),
            Content::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Content::Integer(digits) => f.write_str(digits),
            Content::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Content::Array(children) => {
                f.write_str("[")?;
                let mut first = true;
                for child in children {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{child}")?;
                }
                f.write_str("]")
            }
            Content::Object(children) => {
                f.write_str("{")?;
                let mut first = true;
                for child in children {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(&child.key, f)?;
                    write!(f, "\":{child}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// Serialization is available to tests and to downstream crates enabling the
// `serde` feature. Objects serialize as maps in source order and integers as
// numbers when they fit in an `i64`.
#[cfg(any(test, feature = "serde"))]
impl serde::Serialize for Node {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};

        match &self.content {
            Content::Null => serializer.serialize_unit(),
            Content::Boolean(b) => serializer.serialize_bool(*b),
            Content::Integer(digits) => match digits.parse::<i64>() {
                Ok(n) => serializer.serialize_i64(n),
                Err(_) => serializer.serialize_str(digits),
            },
            Content::String(s) => serializer.serialize_str(s),
            Content::Array(children) => {
                let mut seq = serializer.serialize_seq(Some(children.len()))?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
            Content::Object(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for child in children {
                    map.serialize_entry(child.key(), child)?;
                }
                map.end()
            }
        }
    }
}
