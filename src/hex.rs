//! Hex-text decoding
//!
//! Diagnostic tooling hands frames around as text. Two forms are accepted:
//! free-form hex, where `0x` prefixes, whitespace and `|` separators are
//! stripped before pairing digits (`"0x7E|01 10"`), and plain
//! whitespace-separated octets (`"7E 01 10"`). Both decode the same inputs
//! to the same bytes wherever they overlap.

use heapless::Vec;

use crate::frame::MAX_FRAME_SIZE;

/// Errors from hex-text decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexError {
    /// The sanitized text has an odd number of hex digits
    OddLength,
    /// A character is not a hexadecimal digit
    InvalidDigit(char),
    /// A whitespace-separated token is not a single hex octet
    InvalidOctet,
    /// The text decodes to more bytes than the largest possible frame
    TooLong,
}

impl core::fmt::Display for HexError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HexError::OddLength => write!(f, "hex text has an odd number of digits"),
            HexError::InvalidDigit(c) => write!(f, "'{c}' is not a hex digit"),
            HexError::InvalidOctet => write!(f, "token is not a single hex octet"),
            HexError::TooLong => write!(f, "input exceeds the maximum frame size"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HexError {}

/// Strip `0x`/`0X` prefixes, ASCII whitespace and `|` separators from `text`.
///
/// Returns the surviving characters in order; [`decode`] pairs them into
/// bytes. Stripping is purely lexical, so a zero that happens to precede an
/// `x` is consumed with it.
pub fn sanitize(text: &str) -> impl Iterator<Item = char> + '_ {
    let mut chars = text.chars().peekable();
    core::iter::from_fn(move || loop {
        let c = chars.next()?;
        if c == '0' && matches!(chars.peek(), Some(&'x') | Some(&'X')) {
            chars.next();
            continue;
        }
        if c.is_ascii_whitespace() || c == '|' {
            continue;
        }
        return Some(c);
    })
}

/// Decode free-form hex text into raw bytes, most-significant nibble first.
pub fn decode(text: &str) -> Result<Vec<u8, MAX_FRAME_SIZE>, HexError> {
    let mut out = Vec::new();
    let mut digits = sanitize(text);
    while let Some(hi) = digits.next() {
        let lo = digits.next().ok_or(HexError::OddLength)?;
        let hi_val = hi.to_digit(16).ok_or(HexError::InvalidDigit(hi))?;
        let lo_val = lo.to_digit(16).ok_or(HexError::InvalidDigit(lo))?;
        out.push((hi_val << 4 | lo_val) as u8)
            .map_err(|_| HexError::TooLong)?;
    }
    Ok(out)
}

/// Decode whitespace-separated hex octets into raw bytes.
///
/// This is the capture-side form of the tooling, one token per byte
/// (`"7E 1 10"` is accepted; [`decode`] needs every octet zero-padded).
pub fn decode_octets(text: &str) -> Result<Vec<u8, MAX_FRAME_SIZE>, HexError> {
    let mut out = Vec::new();
    for token in text.split_ascii_whitespace() {
        let byte = u8::from_str_radix(token, 16).map_err(|_| HexError::InvalidOctet)?;
        out.push(byte).map_err(|_| HexError::TooLong)?;
    }
    Ok(out)
}
