//! Helpers shared by the codec implementations.

use crate::{Error, FixedSize, RangeCfg, ReadExt, Write};
use bytes::{Buf, BufMut};

/// Size of an encoded count prefix.
pub const LEN_SIZE: usize = u32::SIZE;

/// Fails with [Error::EndOfBuffer] unless `buf` holds at least `len` more bytes.
#[inline]
pub fn at_least<B: Buf>(buf: &mut B, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

/// Writes a `u32` count prefix.
///
/// Panics if `len` does not fit in a `u32` (the protocol cannot express it).
#[inline]
pub fn write_len(len: usize, buf: &mut impl BufMut) {
    let len = u32::try_from(len).expect("length exceeds u32");
    len.write(buf);
}

/// Reads a `u32` count prefix and checks it against `range`.
#[inline]
pub fn read_len(buf: &mut impl Buf, range: &RangeCfg<usize>) -> Result<usize, Error> {
    let len32 = u32::read(buf)?;
    let len = usize::try_from(len32).map_err(|_| Error::Invalid("length", "exceeds usize"))?;
    if !range.contains(&len) {
        return Err(Error::InvalidLength(len));
    }
    Ok(len)
}
