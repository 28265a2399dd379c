//! Error types for key and license handling.

use thiserror::Error;

use crate::encoding::Encoding;

/// Which half of a key pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// The secret signing key.
    Private,
    /// The public verification key.
    Public,
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Private => f.write_str("private"),
            Self::Public => f.write_str("public"),
        }
    }
}

/// Errors raised while generating, decoding or verifying keys and licenses.
///
/// A signature that is well-formed but does not match is not an error:
/// [`License::verify`](crate::License::verify) reports it as `Ok(false)`.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// The secure random source could not produce bytes.
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),

    /// Raw key bytes have the wrong length for the scheme.
    #[error("invalid {kind} key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        kind: KeyKind,
        expected: usize,
        actual: usize,
    },

    /// Text is not valid for the requested alphabet or padding.
    #[error("invalid {encoding} input: {reason}")]
    Decode { encoding: Encoding, reason: String },

    /// License bytes are too short to contain a signature.
    #[error("truncated license envelope: expected at least {minimum} bytes, got {actual}")]
    TruncatedEnvelope { minimum: usize, actual: usize },

    /// Public key bytes do not describe a point on the curve.
    #[error("malformed public key: not a valid curve point")]
    MalformedPublicKey,

    /// An encoding selector name was not recognised.
    #[error("unknown format: {0}")]
    UnknownFormat(String),
}

impl From<rand::Error> for LicenseError {
    fn from(err: rand::Error) -> Self {
        Self::RandomSourceFailure(err.to_string())
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
