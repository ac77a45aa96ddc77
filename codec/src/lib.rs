//! Encode and decode the primitive layer of the objwire protocol.
//!
//! # Overview
//!
//! Ordered reads and writes of fixed-width scalars, length-prefixed text and bytes,
//! fixed-size byte arrays and homogeneous sequences over [bytes::Buf] / [bytes::BufMut].
//! Higher layers (descriptors, the type registry, polymorphic objects) build on these
//! traits without adding any framing of their own.
//!
//! # Wire Format
//!
//! - Integers and floats: fixed width, big-endian (IEEE-754 for floats).
//! - `bool`: one byte, `0` or `1`.
//! - [String] and [bytes::Bytes]: `u32` byte count, then the bytes (text is UTF-8).
//! - `[u8; N]`: the `N` raw bytes, no prefix.
//! - [Vec]: `u32` element count, then each element.
//! - Records: fields in declared order, no tags.
//!
//! # Example
//!
//! ```
//! use bytes::{Buf, BufMut};
//! use objwire_codec::{Decode, Encode, EncodeSize, Error, RangeCfg, Read, ReadExt, Write};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Aborted {
//!     is_assert: bool,
//!     reason: String,
//! }
//!
//! impl Write for Aborted {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.is_assert.write(buf);
//!         self.reason.write(buf);
//!     }
//! }
//!
//! impl EncodeSize for Aborted {
//!     fn encode_size(&self) -> usize {
//!         self.is_assert.encode_size() + self.reason.encode_size()
//!     }
//! }
//!
//! impl Read for Aborted {
//!     type Cfg = RangeCfg<usize>;
//!
//!     fn read_cfg(buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<Self, Error> {
//!         let is_assert = bool::read(buf)?;
//!         let reason = String::read_cfg(buf, cfg)?;
//!         Ok(Self { is_assert, reason })
//!     }
//! }
//!
//! let aborted = Aborted { is_assert: true, reason: "boom".into() };
//! let encoded = aborted.encode();
//! assert_eq!(encoded.len(), 1 + 4 + 4);
//! let decoded = Aborted::decode_cfg(encoded, &(..=1024).into()).unwrap();
//! assert_eq!(aborted, decoded);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod types;
pub mod util;

// Re-export main types and traits
pub use codec::{
    Codec, Config, Decode, DecodeExt, Encode, EncodeSize, FixedSize, Read, ReadExt, Write,
};
pub use config::RangeCfg;
pub use error::Error;
