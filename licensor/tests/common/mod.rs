//! Shared fixtures for licensor tests.

#![allow(dead_code)]

use licensor::{Codec, PrivateKey};
use rand::{CryptoRng, RngCore, SeedableRng, rngs::StdRng};

/// Seed `01 02 .. 20` as lower-case hex.
pub const FIXTURE_PRIVATE_KEY_HEX: &str =
    "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20";

/// Public key of [`FIXTURE_PRIVATE_KEY_HEX`], base32.
pub const FIXTURE_PUBLIC_KEY_B32: &str = "PG2VMLUP4ZKPSQDYWEJORKMLU6IB7BJ242K35V7A4OIQXLIESZSA====";

/// Document signed into the fixture licenses.
pub const FIXTURE_DOCUMENT: &[u8] = br#"{"email":"test@example.com","end":"2030-01-01T00:00:00Z"}"#;

/// [`FIXTURE_DOCUMENT`] signed with the fixture key, in each text format.
pub const FIXTURE_LICENSE_B64: &str = "je819BsJAotNVBrjc39k12fvXhTgxue3MwluBz3KQ1sdVQNoWUQkCOb7INdfqrudWxxY1HoprLthVYRpwH2XDXsiZW1haWwiOiJ0ZXN0QGV4YW1wbGUuY29tIiwiZW5kIjoiMjAzMC0wMS0wMVQwMDowMDowMFoifQ==";
pub const FIXTURE_LICENSE_B32: &str = "RXXTL5A3BEBIWTKUDLRXG73E25T66XQU4DDOPNZTBFXAOPOKINNR2VIDNBMUIJAI435SBV27VK5Z2WY4LDKHUKNMXNQVLBDJYB6ZODL3EJSW2YLJNQRDUITUMVZXIQDFPBQW24DMMUXGG33NEIWCEZLOMQRDUIRSGAZTALJQGEWTAMKUGAYDUMBQHIYDAWRCPU======";
pub const FIXTURE_LICENSE_HEX: &str = "8def35f41b09028b4d541ae3737f64d767ef5e14e0c6e7b733096e073dca435b1d55036859442408e6fb20d75faabb9d5b1c58d47a29acbb61558469c07d970d7b22656d61696c223a2274657374406578616d706c652e636f6d222c22656e64223a22323033302d30312d30315430303a30303a30305a227d";

/// The fixture private key.
pub fn fixture_key() -> PrivateKey {
    PrivateKey::from_hex_string(FIXTURE_PRIVATE_KEY_HEX).unwrap()
}

/// A reproducible private key for the given seed.
pub fn seeded_key(seed: u64) -> PrivateKey {
    PrivateKey::generate_with(&mut StdRng::seed_from_u64(seed)).unwrap()
}

/// A random source that always fails.
pub struct BrokenRng;

impl RngCore for BrokenRng {
    fn next_u32(&mut self) -> u32 {
        unreachable!("generation must use try_fill_bytes")
    }

    fn next_u64(&mut self) -> u64 {
        unreachable!("generation must use try_fill_bytes")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unreachable!("generation must use try_fill_bytes")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new(std::io::Error::other("entropy pool unavailable")))
    }
}

impl CryptoRng for BrokenRng {}
