mod common;

use common::{BrokenRng, FIXTURE_PUBLIC_KEY_B32, fixture_key, seeded_key};
use licensor::{
    Codec, Encoding, Format, KeyKind, LicenseError, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH,
    PrivateKey, PublicKey, generate_key_pair, generate_key_pair_with,
};
use pretty_assertions::assert_eq;
use rand::{SeedableRng, rngs::StdRng};

const RANDOM_42: &str = "q8ZxR2mN4vLpT7wKc1YhB9sD3fGjE6uAo0iXnWbVkU";

// ── Generation ───────────────────────────────────────────────────

#[test]
fn generate_yields_distinct_keys() {
    let a = PrivateKey::generate().unwrap();
    let b = PrivateKey::generate().unwrap();
    assert_ne!(a, b);
}

#[test]
fn generate_key_pair_public_matches_private() {
    let (private_key, public_key) = generate_key_pair().unwrap();
    assert_eq!(private_key.public_key(), public_key);
}

#[test]
fn generate_with_seeded_source_is_reproducible() {
    let (a, _) = generate_key_pair_with(&mut StdRng::seed_from_u64(42)).unwrap();
    let (b, _) = generate_key_pair_with(&mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn generate_surfaces_random_source_failure() {
    let err = PrivateKey::generate_with(&mut BrokenRng).unwrap_err();
    match err {
        LicenseError::RandomSourceFailure(msg) => assert!(msg.contains("entropy")),
        other => panic!("expected RandomSourceFailure, got {other:?}"),
    }
}

#[test]
fn public_key_derivation_is_pure() {
    let key = seeded_key(1);
    assert_eq!(key.public_key(), key.public_key());
    assert_eq!(key.clone().public_key(), key.public_key());
}

#[test]
fn fixture_public_key_is_stable() {
    assert_eq!(fixture_key().public_key().to_b32_string(), FIXTURE_PUBLIC_KEY_B32);
}

// ── Private key serialization ────────────────────────────────────

#[test]
fn private_key_bytes_roundtrip() {
    let key = seeded_key(2);
    let bytes = key.to_bytes();
    assert_eq!(bytes.len(), PRIVATE_KEY_LENGTH);
    assert_eq!(PrivateKey::from_bytes(&bytes).unwrap(), key);
}

#[test]
fn private_key_text_roundtrips() {
    let key = seeded_key(3);
    assert_eq!(PrivateKey::from_b64_string(&key.to_b64_string()).unwrap(), key);
    assert_eq!(PrivateKey::from_b32_string(&key.to_b32_string()).unwrap(), key);
    assert_eq!(PrivateKey::from_hex_string(&key.to_hex_string()).unwrap(), key);
}

#[test]
fn private_key_format_dispatch_roundtrip() {
    let key = seeded_key(4);
    for format in [Format::Bytes, Format::Base64, Format::Base32, Format::Hex] {
        let encoded = key.encode(format);
        assert_eq!(PrivateKey::decode(format, &encoded).unwrap(), key, "{format}");
    }
}

#[test]
fn private_key_rejects_wrong_length() {
    for len in [0, 31, 33, 42, 64] {
        let err = PrivateKey::from_bytes(&vec![7u8; len]).unwrap_err();
        assert!(matches!(
            err,
            LicenseError::InvalidKeyLength {
                kind: KeyKind::Private,
                expected: PRIVATE_KEY_LENGTH,
                actual,
            } if actual == len
        ));
    }
}

#[test]
fn private_key_accepts_any_seed_of_right_length() {
    for fill in [0x00, 0x01, 0x7f, 0xff] {
        assert!(PrivateKey::from_bytes(&[fill; PRIVATE_KEY_LENGTH]).is_ok());
    }
}

#[test]
fn private_key_random_text_rejected() {
    assert!(PrivateKey::from_b64_string(RANDOM_42).is_err());
    assert!(PrivateKey::from_b32_string(RANDOM_42).is_err());
    assert!(PrivateKey::from_hex_string(RANDOM_42).is_err());
}

#[test]
fn private_key_valid_text_wrong_length_is_length_error() {
    let text = Encoding::Hex.encode(&[1u8; 16]);
    assert!(matches!(
        PrivateKey::from_hex_string(&text),
        Err(LicenseError::InvalidKeyLength { actual: 16, .. })
    ));
}

#[test]
fn private_key_decode_error_names_encoding() {
    let upper = seeded_key(5).to_hex_string().to_uppercase();
    assert!(matches!(
        PrivateKey::from_hex_string(&upper),
        Err(LicenseError::Decode {
            encoding: Encoding::Hex,
            ..
        })
    ));
}

// ── Public key serialization ─────────────────────────────────────

#[test]
fn public_key_bytes_roundtrip() {
    let public_key = seeded_key(6).public_key();
    let bytes = public_key.to_bytes();
    assert_eq!(bytes.len(), PUBLIC_KEY_LENGTH);
    assert_eq!(PublicKey::from_bytes(&bytes).unwrap(), public_key);
    assert_eq!(public_key.as_bytes().as_slice(), bytes.as_slice());
}

#[test]
fn public_key_text_roundtrips() {
    let public_key = seeded_key(7).public_key();
    assert_eq!(PublicKey::from_b64_string(&public_key.to_b64_string()).unwrap(), public_key);
    assert_eq!(PublicKey::from_b32_string(&public_key.to_b32_string()).unwrap(), public_key);
    assert_eq!(PublicKey::from_hex_string(&public_key.to_hex_string()).unwrap(), public_key);
}

#[test]
fn public_key_rejects_wrong_length() {
    let err = PublicKey::from_bytes(&[0u8; 42]).unwrap_err();
    assert!(matches!(
        err,
        LicenseError::InvalidKeyLength {
            kind: KeyKind::Public,
            expected: PUBLIC_KEY_LENGTH,
            actual: 42,
        }
    ));
}

#[test]
fn public_key_accepts_any_bytes_of_right_length() {
    let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
    bytes[0] = 2;
    assert!(PublicKey::from_bytes(&bytes).is_ok());
}

#[test]
fn public_key_random_text_rejected() {
    assert!(PublicKey::from_b64_string(RANDOM_42).is_err());
    assert!(PublicKey::from_b32_string(RANDOM_42).is_err());
    assert!(PublicKey::from_hex_string(RANDOM_42).is_err());
}

#[test]
fn public_key_base32_is_upper_case_padded() {
    let text = seeded_key(8).public_key().to_b32_string();
    assert!(text.ends_with('='));
    assert_eq!(text, text.to_uppercase());
}
