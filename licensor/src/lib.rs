//! Signed software licenses.
//!
//! A vendor generates an Ed25519 key pair, signs an arbitrary document
//! (JSON, a customer e-mail, anything) into a [`License`], and hands the
//! license text to the customer. The application ships only the
//! [`PublicKey`] and checks the license with [`License::verify`] before
//! trusting [`License::data`].
//!
//! # Wire Formats
//!
//! - Private key: 32-byte Ed25519 seed
//! - Public key: 32-byte compressed point
//! - License: `signature (64 bytes) || data`
//!
//! Each layout travels as raw bytes, standard padded base64, upper-case
//! padded base32 or lower-case hex through the [`Codec`] trait.
//!
//! # Example
//!
//! ```
//! use licensor::{Codec, License, generate_key_pair};
//!
//! let (private_key, public_key) = generate_key_pair()?;
//! let license = License::sign(&private_key, br#"{"email":"test@example.com"}"#.to_vec());
//! let text = license.to_b32_string();
//!
//! let received = License::from_b32_string(&text)?;
//! assert!(received.verify(&public_key)?);
//! # Ok::<(), licensor::LicenseError>(())
//! ```

mod codec;
mod encoding;
mod error;
mod keys;
mod license;
mod random;

pub use codec::Codec;
pub use encoding::{Encoding, Format};
pub use error::{KeyKind, LicenseError, LicenseResult};
pub use keys::{
    PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, PrivateKey, PublicKey, generate_key_pair,
    generate_key_pair_with,
};
pub use license::{License, SIGNATURE_LENGTH, sign};
pub use random::{RandomSource, os_source};
