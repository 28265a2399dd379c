//! Shared transport for every wire type.
//!
//! A type supplies its exact byte layout; the text forms are derived here
//! once, for all types, by composing that layout with an [`Encoding`].

use crate::encoding::{Encoding, Format};
use crate::error::LicenseResult;

/// A value with a canonical byte layout and the text forms derived from it.
pub trait Codec: Sized {
    /// Serializes to the canonical byte layout.
    fn to_bytes(&self) -> Vec<u8>;

    /// Reconstructs a value from its canonical byte layout.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` does not have the required shape.
    fn from_bytes(bytes: &[u8]) -> LicenseResult<Self>;

    /// Encodes the byte layout as text.
    fn to_text(&self, encoding: Encoding) -> String {
        encoding.encode(&self.to_bytes())
    }

    /// Decodes text, then applies the byte-layout checks.
    ///
    /// # Errors
    ///
    /// Returns a decode error for malformed text, otherwise whatever
    /// [`Codec::from_bytes`] rejects.
    fn from_text(encoding: Encoding, text: &str) -> LicenseResult<Self> {
        Self::from_bytes(&encoding.decode(text)?)
    }

    /// Serializes through any [`Format`].
    fn encode(&self, format: Format) -> Vec<u8> {
        format.encode(&self.to_bytes())
    }

    /// Deserializes through any [`Format`].
    ///
    /// # Errors
    ///
    /// See [`Codec::from_text`].
    fn decode(format: Format, input: &[u8]) -> LicenseResult<Self> {
        Self::from_bytes(&format.decode(input)?)
    }

    /// Encodes the byte layout as standard padded base64.
    fn to_b64_string(&self) -> String {
        self.to_text(Encoding::Base64)
    }

    /// Decodes standard padded base64 text.
    ///
    /// # Errors
    ///
    /// See [`Codec::from_text`].
    fn from_b64_string(text: &str) -> LicenseResult<Self> {
        Self::from_text(Encoding::Base64, text)
    }

    /// Encodes the byte layout as upper-case padded base32.
    fn to_b32_string(&self) -> String {
        self.to_text(Encoding::Base32)
    }

    /// Decodes upper-case padded base32 text.
    ///
    /// # Errors
    ///
    /// See [`Codec::from_text`].
    fn from_b32_string(text: &str) -> LicenseResult<Self> {
        Self::from_text(Encoding::Base32, text)
    }

    /// Encodes the byte layout as lower-case hex.
    fn to_hex_string(&self) -> String {
        self.to_text(Encoding::Hex)
    }

    /// Decodes lower-case hex text.
    ///
    /// # Errors
    ///
    /// See [`Codec::from_text`].
    fn from_hex_string(text: &str) -> LicenseResult<Self> {
        Self::from_text(Encoding::Hex, text)
    }
}
