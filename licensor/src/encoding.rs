//! Text encodings and format dispatch.
//!
//! Output is canonical for each alphabet:
//! - base64: standard alphabet, `=` padding
//! - base32: RFC 4648 upper-case alphabet, `=` padding
//! - hex: lower-case
//!
//! Decoding accepts only that canonical form. Other alphabets, casings,
//! missing padding, whitespace and non-zero trailing bits are rejected.

use std::fmt;
use std::str::FromStr;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use data_encoding::BASE32;

use crate::error::{LicenseError, LicenseResult};

/// A text alphabet for transporting raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Standard base64 with padding.
    Base64,
    /// Upper-case base32 with padding.
    Base32,
    /// Lower-case hexadecimal.
    Hex,
}

impl Encoding {
    /// All text encodings, in selector order.
    pub const ALL: [Encoding; 3] = [Self::Base64, Self::Base32, Self::Hex];

    /// Encodes `bytes` to the canonical text form of this alphabet.
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Base64 => BASE64.encode(bytes),
            Self::Base32 => BASE32.encode(bytes),
            Self::Hex => hex::encode(bytes),
        }
    }

    /// Decodes canonical `text` back to bytes.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Decode`] if `text` is not in the canonical
    /// form of this alphabet.
    pub fn decode(self, text: &str) -> LicenseResult<Vec<u8>> {
        match self {
            Self::Base64 => BASE64.decode(text).map_err(|e| self.error(e)),
            Self::Base32 => BASE32.decode(text.as_bytes()).map_err(|e| self.error(e)),
            Self::Hex => {
                if let Some(pos) = text.bytes().position(|b| b.is_ascii_uppercase()) {
                    return Err(self.error(format!("upper-case character at offset {pos}")));
                }
                hex::decode(text).map_err(|e| self.error(e))
            }
        }
    }

    fn error(self, reason: impl ToString) -> LicenseError {
        LicenseError::Decode {
            encoding: self,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64 => f.write_str("base64"),
            Self::Base32 => f.write_str("base32"),
            Self::Hex => f.write_str("hex"),
        }
    }
}

/// Selects how a byte layout is carried: raw, or through a text [`Encoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Raw bytes, unchanged.
    Bytes,
    /// See [`Encoding::Base64`].
    Base64,
    /// See [`Encoding::Base32`].
    Base32,
    /// See [`Encoding::Hex`].
    Hex,
}

impl Format {
    /// The text encoding behind this format, or `None` for raw bytes.
    #[must_use]
    pub fn encoding(self) -> Option<Encoding> {
        match self {
            Self::Bytes => None,
            Self::Base64 => Some(Encoding::Base64),
            Self::Base32 => Some(Encoding::Base32),
            Self::Hex => Some(Encoding::Hex),
        }
    }

    /// Encodes `bytes`; text formats yield their ASCII text as bytes.
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> Vec<u8> {
        match self.encoding() {
            None => bytes.to_vec(),
            Some(encoding) => encoding.encode(bytes).into_bytes(),
        }
    }

    /// Reverses [`Format::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Decode`] if a text format is given input
    /// that is not UTF-8 or not canonical for its alphabet.
    pub fn decode(self, input: &[u8]) -> LicenseResult<Vec<u8>> {
        match self.encoding() {
            None => Ok(input.to_vec()),
            Some(encoding) => {
                let text = std::str::from_utf8(input).map_err(|e| encoding.error(e))?;
                encoding.decode(text)
            }
        }
    }
}

impl From<Encoding> for Format {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Base64 => Self::Base64,
            Encoding::Base32 => Self::Base32,
            Encoding::Hex => Self::Hex,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encoding() {
            None => f.write_str("bytes"),
            Some(encoding) => encoding.fmt(f),
        }
    }
}

impl FromStr for Format {
    type Err = LicenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bytes" | "raw" => Ok(Self::Bytes),
            "b64" | "base64" => Ok(Self::Base64),
            "b32" | "base32" => Ok(Self::Base32),
            "hex" => Ok(Self::Hex),
            _ => Err(LicenseError::UnknownFormat(s.to_string())),
        }
    }
}
