//! Fixed-length identity tokens.
//!
//! An [Id] names a registered type on the wire. Type identities are derived from the
//! entity signature (see [crate::Entity::signature]); the same derivation can name any
//! content-addressed value through [Id::hash].
//!
//! # Example
//! ```rust
//! use objwire_schema::Id;
//!
//! let id = Id::hash(b"hello world");
//! assert_eq!(id.len(), 20);
//! assert_eq!(Id::from_hex(&id.to_string()), Ok(id));
//! ```

use crate::Error;
use bytes::{Buf, BufMut};
use objwire_codec::{Error as CodecError, FixedSize, Read, ReadExt, Write};
use sha2::{Digest as _, Sha256};
use std::{
    fmt::{Debug, Display},
    ops::Deref,
};

/// Length of an encoded [Id].
pub const ID_LENGTH: usize = 20;

/// A 20-byte identity token.
///
/// The all-zero token ([Id::ZERO]) never names a type; it encodes an empty object slot.
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Id([u8; ID_LENGTH]);

impl Id {
    /// The reserved all-zero token.
    pub const ZERO: Self = Self([0u8; ID_LENGTH]);

    /// Derives the token of `content`: the first [ID_LENGTH] bytes of its SHA-256 digest.
    pub fn hash(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        let mut id = [0u8; ID_LENGTH];
        id.copy_from_slice(&digest[..ID_LENGTH]);
        Self(id)
    }

    /// Returns true for [Id::ZERO].
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ID_LENGTH]
    }

    /// Parses a token from 40 hexadecimal characters.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let bytes = from_hex(hex).ok_or(Error::InvalidHex)?;
        Self::try_from(bytes.as_slice())
    }
}

impl Write for Id {
    fn write(&self, buf: &mut impl BufMut) {
        self.0.write(buf);
    }
}

impl Read for Id {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        <[u8; ID_LENGTH]>::read(buf).map(Self)
    }
}

impl FixedSize for Id {
    const SIZE: usize = ID_LENGTH;
}

impl From<[u8; ID_LENGTH]> for Id {
    fn from(value: [u8; ID_LENGTH]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Id {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; ID_LENGTH] = value
            .try_into()
            .map_err(|_| Error::InvalidIdLength(value.len()))?;
        Ok(Self(array))
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Id {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

/// Converts bytes to a lowercase hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

/// Converts a hexadecimal string to bytes, ignoring whitespace and an optional `0x` prefix.
pub fn from_hex(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.replace(['\t', '\n', '\r', ' '], "");
    let hex = hex.strip_prefix("0x").unwrap_or(&hex);
    if hex.len() % 2 != 0 {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok())
        .collect()
}
