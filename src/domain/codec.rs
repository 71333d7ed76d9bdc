//! Base62 short-code codec.
//!
//! Converts the monotonic ids issued by the record store into compact,
//! URL-safe short codes and back. The alphabet is digits, then lowercase,
//! then uppercase letters, so `encode(0) == "0"` and `encode(61) == "Z"`.

use thiserror::Error;

/// Symbols in ascending digit value.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// Longest possible encoding of a `u64` ("lYGhA16ahyf" for `u64::MAX`).
const MAX_ENCODED_LEN: usize = 11;

/// Errors returned when a string is not a valid base62 code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("short code is empty")]
    Empty,

    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("short code does not fit in 64 bits")]
    Overflow,
}

/// Encodes a non-negative integer as a base62 string without leading zeros.
///
/// # Examples
///
/// ```
/// use shortenme::domain::codec::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }

    // Every byte comes from ALPHABET, which is ASCII.
    buf[pos..].iter().map(|&b| b as char).collect()
}

/// Decodes a base62 string back into the integer it represents.
///
/// Leading zero symbols are accepted and contribute nothing, so `"007"`
/// decodes to 7. Use [`is_canonical`] to reject such forms.
///
/// # Errors
///
/// - [`CodecError::Empty`] for an empty string
/// - [`CodecError::InvalidCharacter`] for a symbol outside [`ALPHABET`]
/// - [`CodecError::Overflow`] if the value exceeds `u64::MAX`
pub fn decode(s: &str) -> Result<u64, CodecError> {
    if s.is_empty() {
        return Err(CodecError::Empty);
    }

    s.chars().enumerate().try_fold(0u64, |acc, (position, character)| {
        let digit = digit_value(character)
            .ok_or(CodecError::InvalidCharacter { character, position })?;
        acc.checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or(CodecError::Overflow)
    })
}

/// Returns true if `s` is exactly what [`encode`] produces for some value.
///
/// Codes failing this check can never have been allocated, so callers use it
/// to answer "not found" without a backend round-trip.
pub fn is_canonical(s: &str) -> bool {
    decode(s).is_ok_and(|n| encode(n) == s)
}

fn digit_value(c: char) -> Option<u64> {
    let v = match c {
        '0'..='9' => c as u64 - '0' as u64,
        'a'..='z' => c as u64 - 'a' as u64 + 10,
        'A'..='Z' => c as u64 - 'A' as u64 + 36,
        _ => return None,
    };
    Some(v)
}
