//! Signed license envelopes.
//!
//! Wire layout: `signature (64 bytes) || data (rest)`. The signature covers
//! exactly `data`, with no prefix or version tag.

use ed25519_dalek::Signature;
use tracing::debug;

use crate::codec::Codec;
use crate::error::{LicenseError, LicenseResult};
use crate::keys::{PrivateKey, PublicKey};

/// Size of an Ed25519 signature in bytes.
pub const SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// An opaque document bound to the signature of a private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    signature: [u8; SIGNATURE_LENGTH],
    data: Vec<u8>,
}

/// Signs `data` with `private_key`. Empty data is allowed.
pub fn sign(private_key: &PrivateKey, data: impl Into<Vec<u8>>) -> License {
    License::sign(private_key, data)
}

impl License {
    /// Signs `data` with `private_key`, taking ownership of the bytes so
    /// later changes to the caller's buffer cannot affect the envelope.
    pub fn sign(private_key: &PrivateKey, data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        let signature = private_key.sign_raw(&data);
        debug!(data_len = data.len(), "signed license");
        Self { signature, data }
    }

    /// Checks the signature over the data against `public_key`.
    ///
    /// Returns `Ok(true)` for a valid signature and `Ok(false)` when the
    /// signature does not match (wrong key, altered data or signature).
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::MalformedPublicKey`] when `public_key` is not
    /// a curve point or is a small-order point, so the check cannot be
    /// attempted at all.
    pub fn verify(&self, public_key: &PublicKey) -> LicenseResult<bool> {
        let verifying_key = public_key.verifying_key()?;
        let signature = Signature::from_bytes(&self.signature);
        match verifying_key.verify_strict(&self.data, &signature) {
            Ok(()) => Ok(true),
            Err(err) => {
                debug!(error = %err, "license signature rejected");
                Ok(false)
            }
        }
    }

    /// The signed document, for the caller to interpret after verifying.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The raw signature bytes.
    #[must_use]
    pub fn signature(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.signature
    }

    /// Consumes the license, returning the document.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl Codec for License {
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SIGNATURE_LENGTH + self.data.len());
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.data);
        out
    }

    fn from_bytes(bytes: &[u8]) -> LicenseResult<Self> {
        let Some((signature, data)) = bytes.split_first_chunk::<SIGNATURE_LENGTH>() else {
            return Err(LicenseError::TruncatedEnvelope {
                minimum: SIGNATURE_LENGTH,
                actual: bytes.len(),
            });
        };
        Ok(Self {
            signature: *signature,
            data: data.to_vec(),
        })
    }
}
