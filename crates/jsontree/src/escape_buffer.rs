//! Accumulates the four hexadecimal digits of a `\uXXXX` escape.
//!
//! The buffer yields a UTF-16 code unit rather than a `char`: a unit in the
//! surrogate range is only meaningful once paired, and pairing is decided by
//! the lexer, which can see the following escape.

#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    value: u16,
    len: u8,
}

/// A byte that is not an ASCII hexadecimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InvalidHexDigit(pub u8);

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.value = 0;
        self.len = 0;
    }

    /// Feeds one digit. Returns the code unit once the fourth digit arrives,
    /// and resets for the next escape.
    pub fn feed(&mut self, byte: u8) -> Result<Option<u16>, InvalidHexDigit> {
        let digit = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => return Err(InvalidHexDigit(byte)),
        };

        self.value = (self.value << 4) | u16::from(digit);
        self.len += 1;

        if self.len == 4 {
            let unit = self.value;
            self.reset();
            Ok(Some(unit))
        } else {
            Ok(None)
        }
    }
}

/// `0xD800..=0xDBFF`
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

/// `0xDC00..=0xDFFF`
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Combines a surrogate pair into a scalar value.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> Option<char> {
    let code = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code)
}
