//! Base-62 codec for short codes.
//!
//! Maps row identifiers to short codes and back using the alphabet
//! `0-9A-Za-z`. A symbol's position in the alphabet is its digit value, so
//! `"0"` is zero, `"z"` is 61 and `"10"` is 62.

use thiserror::Error;

/// Ordered base-62 alphabet. Index = digit value.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = ALPHABET.len() as u64;

/// `u64::MAX` needs 11 base-62 digits.
const MAX_ENCODED_LEN: usize = 11;

/// Errors returned by [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("short code exceeds the supported identifier range")]
    Overflow,
}

/// Encodes a non-negative integer as a minimal-length base-62 string.
///
/// The most significant symbol comes first. Zero encodes to `"0"`, never to
/// an empty string.
///
/// # Examples
///
/// ```
/// use shorturl::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }

    buf[i..].iter().map(|&b| b as char).collect()
}

/// Decodes a base-62 string, accumulating `value * 62 + digit` left to right.
///
/// An empty string decodes to `0`. Leading zero symbols are accepted even
/// though [`encode`] never produces them.
///
/// # Errors
///
/// - [`CodecError::InvalidCharacter`] if any character is outside [`ALPHABET`]
/// - [`CodecError::Overflow`] if the value does not fit in a `u64`
pub fn decode(s: &str) -> Result<u64, CodecError> {
    s.chars()
        .enumerate()
        .try_fold(0u64, |value, (position, character)| {
            let digit = digit_value(character)
                .ok_or(CodecError::InvalidCharacter { character, position })?;

            value
                .checked_mul(BASE)
                .and_then(|v| v.checked_add(digit))
                .ok_or(CodecError::Overflow)
        })
}

/// Returns true if `s` is exactly what [`encode`] produces for its value.
pub fn is_canonical(s: &str) -> bool {
    match decode(s) {
        Ok(value) => !s.is_empty() && encode(value) == s,
        Err(_) => false,
    }
}

fn digit_value(c: char) -> Option<u64> {
    let v = match c {
        '0'..='9' => c as u64 - '0' as u64,
        'A'..='Z' => c as u64 - 'A' as u64 + 10,
        'a'..='z' => c as u64 - 'a' as u64 + 36,
        _ => return None,
    };
    Some(v)
}
