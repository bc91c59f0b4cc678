//! Seed codec
//!
//! Converts between the 64-bit run seed and its canonical display string.
//! The string is base 35 over `0-9A-Z` with the letter `O` removed; an `O`
//! typed by a player is read as the digit `0`.
//!
//! # Example
//!
//! ```rust
//! use spire_seed_core::seed::{decode, encode};
//!
//! let seed = decode("testseed1").unwrap();
//! assert_eq!(encode(seed), "TESTSEED1");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical alphabet, digit value = index
pub const ALPHABET: &[u8; 35] = b"0123456789ABCDEFGHIJKLMNPQRSTUVWXYZ";

const RADIX: u64 = ALPHABET.len() as u64;

/// Longest canonical string a 64-bit seed can produce
pub const MAX_CANONICAL_LEN: usize = 13;

/// Errors from seed text parsing
#[derive(Debug, Error, PartialEq)]
pub enum SeedError {
    #[error("Seed text is empty")]
    Empty,

    #[error("Invalid seed character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid decimal seed '{0}'")]
    InvalidDecimal(String),
}

/// Encode a seed as its canonical string
///
/// The seed is treated as an unsigned 64-bit magnitude, so negative seeds
/// produce long strings rather than a sign.
pub fn encode(seed: i64) -> String {
    let mut n = seed as u64;
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(MAX_CANONICAL_LEN);
    while n != 0 {
        digits.push(ALPHABET[(n % RADIX) as usize]);
        n /= RADIX;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Decode seed text (case-insensitive)
///
/// Accumulation wraps mod 2^64 and the result is reinterpreted as signed.
pub fn decode(text: &str) -> Result<i64, SeedError> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(SeedError::Empty);
    }

    let mut total: u64 = 0;
    for (position, character) in normalized.chars().enumerate() {
        let digit = digit_value(character)
            .ok_or(SeedError::InvalidCharacter { character, position })?;
        total = total.wrapping_mul(RADIX).wrapping_add(digit);
    }
    Ok(total as i64)
}

/// Canonical form of seed text: `encode(decode(text))`
///
/// Text longer than 64 bits canonicalizes to the wrapped value.
pub fn canonicalize(text: &str) -> Result<String, SeedError> {
    decode(text).map(encode)
}

/// Parse user input that may be either canonical text or a decimal seed
///
/// Decimal is recognised by a leading sign, or by an all-digit string
/// longer than any canonical string can be.
pub fn parse_seed_input(text: &str) -> Result<i64, SeedError> {
    let trimmed = text.trim();
    let signed = trimmed.starts_with('-') || trimmed.starts_with('+');
    let long_digits =
        trimmed.len() > MAX_CANONICAL_LEN && trimmed.bytes().all(|b| b.is_ascii_digit());

    if signed || long_digits {
        trimmed
            .parse::<i64>()
            .map_err(|_| SeedError::InvalidDecimal(trimmed.to_string()))
    } else {
        decode(trimmed)
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_ascii_uppercase().replace('O', "0")
}

fn digit_value(character: char) -> Option<u64> {
    ALPHABET
        .iter()
        .position(|&b| b as char == character)
        .map(|index| index as u64)
}

/// Run seed
///
/// Displays as the canonical string, parses from seed text, and
/// serializes as the raw integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub i64);

impl Seed {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.0))
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_seed_input(s).map(Seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_encodes_as_digit() {
        assert_eq!(encode(0), "0");
        assert_eq!(decode("0").unwrap(), 0);
    }

    #[test]
    fn test_letter_o_reads_as_zero() {
        assert_eq!(decode("1O").unwrap(), 35);
        assert_eq!(decode("1o").unwrap(), decode("10").unwrap());
    }

    #[test]
    fn test_lowercase_accepted() {
        assert_eq!(decode("abc").unwrap(), 12_647);
    }

    #[test]
    fn test_invalid_character_reported() {
        assert_eq!(
            decode("AB-C"),
            Err(SeedError::InvalidCharacter {
                character: '-',
                position: 2
            })
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(decode("   "), Err(SeedError::Empty));
    }

    #[test]
    fn test_negative_seed_encodes_unsigned() {
        assert_eq!(encode(-1), "5G24A25UXKXFF");
        assert_eq!(decode("5G24A25UXKXFF").unwrap(), -1);
    }

    #[test]
    fn test_canonicalize_strips_leading_zeros() {
        assert_eq!(canonicalize(" 00ab ").unwrap(), "AB");
        assert_eq!(canonicalize("ooo").unwrap(), "0");
    }

    #[test]
    fn test_canonicalize_overflowing_text_wraps() {
        let text = "ZZZZZZZZZZZZZZ";
        let wrapped = encode(decode(text).unwrap());
        assert_eq!(canonicalize(text).unwrap(), wrapped);
        assert_ne!(wrapped, text);
    }

    #[test]
    fn test_parse_seed_input_forms() {
        assert_eq!(parse_seed_input("-5").unwrap(), -5);
        assert_eq!(parse_seed_input("+64004406012856").unwrap(), 64_004_406_012_856);
        assert_eq!(
            parse_seed_input("64004406012856").unwrap(),
            decode("TESTSEED1").unwrap()
        );
        assert_eq!(parse_seed_input("12").unwrap(), 37);
        assert!(matches!(
            parse_seed_input("-12x"),
            Err(SeedError::InvalidDecimal(_))
        ));
    }

    #[test]
    fn test_seed_display_and_parse() {
        let seed: Seed = "testseed1".parse().unwrap();
        assert_eq!(seed.value(), 64_004_406_012_856);
        assert_eq!(seed.to_string(), "TESTSEED1");
    }
}
