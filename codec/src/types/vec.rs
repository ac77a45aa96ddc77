//! Codec implementation for homogeneous sequences.
//!
//! Encoded as a `u32` element count followed by each element in iteration
//! order, with no per-element type information.

use crate::{
    util::{read_len, write_len, LEN_SIZE},
    EncodeSize, Error, RangeCfg, Read, Write,
};
use bytes::{Buf, BufMut};

impl<T: Write> Write for Vec<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(self.len(), buf);
        for item in self {
            item.write(buf);
        }
    }
}

impl<T: EncodeSize> EncodeSize for Vec<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        LEN_SIZE + self.iter().map(EncodeSize::encode_size).sum::<usize>()
    }
}

impl<T: Read> Read for Vec<T> {
    type Cfg = (RangeCfg<usize>, T::Cfg);

    #[inline]
    fn read_cfg(buf: &mut impl Buf, (range, cfg): &Self::Cfg) -> Result<Self, Error> {
        let len = read_len(buf, range)?;

        // Every element occupies at least one byte, so the remaining input bounds the
        // allocation even when the count prefix is hostile.
        let mut vec = Vec::with_capacity(len.min(buf.remaining()));
        for _ in 0..len {
            vec.push(T::read_cfg(buf, cfg)?);
        }
        Ok(vec)
    }
}
