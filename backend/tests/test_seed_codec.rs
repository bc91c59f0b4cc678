//! Tests for base-35 seed text
//!
//! Critical invariants tested:
//! - decode(encode(v)) == v for every 64-bit seed
//! - 'O' reads as '0' and case is ignored
//! - Overlong text wraps instead of failing

use proptest::prelude::*;
use spire_seed_core::seed::{canonicalize, decode, encode, parse_seed_input, ALPHABET};
use spire_seed_core::{Seed, SeedError};

#[test]
fn test_known_encodings() {
    assert_eq!(encode(1), "1");
    assert_eq!(encode(35), "10");
    assert_eq!(encode(0), "0");
    assert_eq!(encode(-1), "5G24A25UXKXFF");
    assert_eq!(encode(i64::MAX), "2QIJMIKEYSYQ7");
    assert_eq!(encode(i64::MIN), "2QIJMIKEYSYQ8");
    assert_eq!(encode(64_004_406_012_856), "TESTSEED1");
}

#[test]
fn test_known_decodings() {
    assert_eq!(decode("TESTSEED1"), Ok(64_004_406_012_856));
    assert_eq!(decode("  testseed1 "), Ok(64_004_406_012_856));
    assert_eq!(decode("1O"), Ok(35));
    assert_eq!(decode("abc"), Ok(12_647));
    assert_eq!(decode("5G24A25UXKXFF"), Ok(-1));
}

#[test]
fn test_alphabet_has_no_letter_o() {
    assert_eq!(ALPHABET.len(), 35);
    assert!(!ALPHABET.contains(&b'O'));
}

#[test]
fn test_decode_errors() {
    assert_eq!(decode(""), Err(SeedError::Empty));
    assert_eq!(decode("   "), Err(SeedError::Empty));
    assert_eq!(
        decode("TEST-SEED"),
        Err(SeedError::InvalidCharacter {
            character: '-',
            position: 4
        })
    );
}

#[test]
fn test_overlong_text_wraps() {
    // 14 digits overflow 64 bits; the accumulation wraps silently
    let wrapped = decode("ZZZZZZZZZZZZZZ").unwrap();
    let expected = (0..14).fold(0u64, |acc, _| acc.wrapping_mul(35).wrapping_add(34));
    assert_eq!(wrapped, expected as i64);
}

#[test]
fn test_canonicalize() {
    assert_eq!(canonicalize(" testseedo ").unwrap(), "TESTSEED0");
    assert_eq!(canonicalize("0001O").unwrap(), "10");
    assert_eq!(canonicalize("OOO").unwrap(), "0");
    assert!(canonicalize("bad!").is_err());
    assert_eq!(
        canonicalize("zzzzzzzzzzzzzz").unwrap(),
        encode(decode("ZZZZZZZZZZZZZZ").unwrap())
    );
}

#[test]
fn test_parse_seed_input_decimal_forms() {
    assert_eq!(parse_seed_input("-1"), Ok(-1));
    assert_eq!(parse_seed_input("+42"), Ok(42));
    assert_eq!(
        parse_seed_input("64004406012856000"),
        Ok(64_004_406_012_856_000)
    );
    // Short digit strings are seed text, not decimal
    assert_eq!(parse_seed_input("10"), Ok(35));
    assert!(matches!(
        parse_seed_input("-abc"),
        Err(SeedError::InvalidDecimal(_))
    ));
}

#[test]
fn test_seed_newtype() {
    let seed: Seed = "TESTSEED1".parse().unwrap();
    assert_eq!(seed.value(), 64_004_406_012_856);
    assert_eq!(seed.to_string(), "TESTSEED1");
    assert_eq!(serde_json::to_string(&seed).unwrap(), "64004406012856");
}

proptest! {
    #[test]
    fn prop_encode_decode_roundtrip(value in any::<i64>()) {
        let text = encode(value);
        prop_assert!(text.len() <= 13);
        prop_assert_eq!(decode(&text), Ok(value));
        prop_assert_eq!(canonicalize(&text.to_lowercase()), Ok(text));
    }

    #[test]
    fn prop_canonicalize_matches_reencode(text in "[0-9A-NP-Za-np-z]{1,20}") {
        let reencoded = decode(&text).map(encode);
        prop_assert_eq!(canonicalize(&text), reencoded);
    }
}
