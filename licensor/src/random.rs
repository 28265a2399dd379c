//! Injectable source of secure randomness for key generation.

use rand::{CryptoRng, RngCore, rngs::OsRng};

use crate::error::LicenseResult;

/// A cryptographically secure random byte provider.
///
/// Implemented for every `RngCore + CryptoRng`, so production code passes
/// [`OsRng`] and tests pass a seeded `StdRng`.
pub trait RandomSource: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng + ?Sized> RandomSource for T {}

/// The process-wide operating system source.
#[must_use]
pub fn os_source() -> OsRng {
    OsRng
}

/// Fills `buf` from `source`. Failures are returned once, never retried.
pub(crate) fn fill<R: RandomSource + ?Sized>(source: &mut R, buf: &mut [u8]) -> LicenseResult<()> {
    source.try_fill_bytes(buf)?;
    Ok(())
}
