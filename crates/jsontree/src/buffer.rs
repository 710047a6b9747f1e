//! Append-only byte accumulator used for the input text and for lexemes.
//!
//! Capacity is tracked explicitly and grows by doubling, so a sequence of
//! appends costs amortized O(1) per byte. The write cursor is the length of
//! the filled prefix and never exceeds the capacity.
use alloc::{borrow::Cow, string::String, vec::Vec};
use core::fmt;

use bstr::{BStr, ByteSlice};

/// Smallest capacity a buffer grows to from empty.
const MIN_CAPACITY: usize = 8;

#[derive(Clone, Default, PartialEq, Eq)]
pub(crate) struct ByteBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl ByteBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Size of the backing region.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, byte: u8) {
        self.reserve_for(1);
        self.data.push(byte);
    }

    pub fn push_char(&mut self, ch: char) {
        let mut tmp = [0u8; 4];
        self.extend_from_slice(ch.encode_utf8(&mut tmp).as_bytes());
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.reserve_for(bytes.len());
        self.data.extend_from_slice(bytes);
    }

    pub fn push_str(&mut self, text: &str) {
        self.extend_from_slice(text.as_bytes());
    }

    pub fn get(&self, pos: usize) -> Option<u8> {
        self.data.get(pos).copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Borrows the contents as text, replacing invalid UTF-8 only if present.
    pub fn as_text(&self) -> Cow<'_, str> {
        self.data.to_str_lossy()
    }

    /// Copies the contents out as an owned string.
    pub fn to_text(&self) -> String {
        self.as_text().into_owned()
    }

    /// Doubles the capacity until `additional` more bytes fit.
    fn reserve_for(&mut self, additional: usize) {
        let needed = self.data.len() + additional;
        if needed <= self.capacity {
            return;
        }

        let mut capacity = self.capacity.max(MIN_CAPACITY);
        while capacity < needed {
            capacity *= 2;
        }
        self.data.reserve_exact(capacity - self.data.len());
        self.capacity = capacity;
    }
}

impl From<&str> for ByteBuffer {
    fn from(text: &str) -> Self {
        let mut buffer = Self::with_capacity(text.len());
        buffer.push_str(text);
        buffer
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("data", &BStr::new(&self.data))
            .field("capacity", &self.capacity)
            .finish()
    }
}
