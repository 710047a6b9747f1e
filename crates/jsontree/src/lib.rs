//! Parse JSON text into an owned tree of typed nodes.
//!
//! A document is a single object or array. Parsing it yields a root [`Node`]
//! keyed [`ROOT_KEY`]; every object member carries its key, and array
//! elements carry an empty key. Integers keep their digit text exactly as
//! written.
//!
//! ```rust
//! use jsontree::{JsonType, parse};
//!
//! let root = parse(r#"{"name": "probe", "ids": [1, -2], "ok": true}"#).unwrap();
//! assert_eq!(root.json_type(), JsonType::Object);
//!
//! let ids = root.find("ids").unwrap();
//! assert_eq!(ids.len(), 2);
//! assert_eq!(ids[1].value(), "-2");
//! assert_eq!(root.to_string(), r#"{"name":"probe","ids":[1,-2],"ok":true}"#);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod escape_buffer;
mod lexer;
mod token;

mod error;
mod node;
mod options;
mod parser;

#[cfg(test)]
mod tests;

pub use error::{ParserError, SyntaxError};
pub use node::{JsonType, Node, ROOT_KEY};
pub use options::ParserOptions;
pub use parser::{parse, parse_with_options};
