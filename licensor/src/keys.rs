//! Ed25519 key pair: generation and byte serialization.
//!
//! A [`PrivateKey`] is the 32-byte Ed25519 seed; any 32 bytes form a valid
//! seed. A [`PublicKey`] is the 32-byte compressed curve point. Its bytes
//! are only length-checked on construction and decompressed when a
//! license is verified against it.

use ed25519_dalek::{
    PUBLIC_KEY_LENGTH as DALEK_PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, Signer as _,
    SigningKey as DalekSigningKey, VerifyingKey as DalekVerifyingKey,
};
use tracing::debug;
use zeroize::Zeroizing;

use crate::codec::Codec;
use crate::error::{KeyKind, LicenseError, LicenseResult};
use crate::license::SIGNATURE_LENGTH;
use crate::random::{self, RandomSource};

/// Size of a serialized private key in bytes.
pub const PRIVATE_KEY_LENGTH: usize = SECRET_KEY_LENGTH;

/// Size of a serialized public key in bytes.
pub const PUBLIC_KEY_LENGTH: usize = DALEK_PUBLIC_KEY_LENGTH;

/// Secret signing key. Keep it with the vendor; never ship it.
#[derive(Clone)]
pub struct PrivateKey(DalekSigningKey);

/// Public verification key, embedded in the customer's application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

/// Generates a fresh key pair from the operating system's random source.
///
/// # Errors
///
/// Returns [`LicenseError::RandomSourceFailure`] if the OS cannot supply
/// random bytes.
pub fn generate_key_pair() -> LicenseResult<(PrivateKey, PublicKey)> {
    generate_key_pair_with(&mut random::os_source())
}

/// Generates a fresh key pair from the given random source.
///
/// # Errors
///
/// Returns [`LicenseError::RandomSourceFailure`] if `source` fails.
pub fn generate_key_pair_with<R: RandomSource + ?Sized>(
    source: &mut R,
) -> LicenseResult<(PrivateKey, PublicKey)> {
    let private_key = PrivateKey::generate_with(source)?;
    let public_key = private_key.public_key();
    Ok((private_key, public_key))
}

impl PrivateKey {
    /// Generates a private key from the operating system's random source.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::RandomSourceFailure`] if the OS cannot supply
    /// random bytes.
    pub fn generate() -> LicenseResult<Self> {
        Self::generate_with(&mut random::os_source())
    }

    /// Generates a private key from the given random source.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::RandomSourceFailure`] if `source` fails.
    pub fn generate_with<R: RandomSource + ?Sized>(source: &mut R) -> LicenseResult<Self> {
        let mut seed = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
        random::fill(source, &mut seed[..])?;
        debug!(len = PRIVATE_KEY_LENGTH, "generated private key");
        Ok(Self(DalekSigningKey::from_bytes(&seed)))
    }

    /// Derives the matching public key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.verifying_key().to_bytes())
    }

    /// Signs `message`, returning the raw signature bytes.
    pub(crate) fn sign_raw(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.0.sign(message).to_bytes()
    }
}

impl Codec for PrivateKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> LicenseResult<Self> {
        let seed = Zeroizing::new(fixed::<PRIVATE_KEY_LENGTH>(KeyKind::Private, bytes)?);
        Ok(Self(DalekSigningKey::from_bytes(&seed)))
    }
}

// Compares the seed only; the cached public half is a function of it.
impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes() == other.0.as_bytes()
    }
}

impl Eq for PrivateKey {}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("seed", &"[REDACTED]")
            .field("public_key", &self.public_key())
            .finish()
    }
}

impl PublicKey {
    /// Returns the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Decompresses the key for signature checks.
    ///
    /// Small-order points are rejected: any signature with a small-order
    /// `R` and `s = 0` would pass against them.
    pub(crate) fn verifying_key(&self) -> LicenseResult<DalekVerifyingKey> {
        let key =
            DalekVerifyingKey::from_bytes(&self.0).map_err(|_| LicenseError::MalformedPublicKey)?;
        if key.is_weak() {
            return Err(LicenseError::MalformedPublicKey);
        }
        Ok(key)
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl Codec for PublicKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> LicenseResult<Self> {
        fixed::<PUBLIC_KEY_LENGTH>(KeyKind::Public, bytes).map(Self)
    }
}

fn fixed<const N: usize>(kind: KeyKind, bytes: &[u8]) -> LicenseResult<[u8; N]> {
    <[u8; N]>::try_from(bytes).map_err(|_| LicenseError::InvalidKeyLength {
        kind,
        expected: N,
        actual: bytes.len(),
    })
}
