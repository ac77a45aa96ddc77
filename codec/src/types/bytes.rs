//! Codec implementation for opaque byte arrays.
//!
//! Encoded as a `u32` byte count followed by the raw bytes. For portability
//! the length of the [`Bytes`] must fit within a [`u32`].

use crate::{
    util::{at_least, read_len, write_len, LEN_SIZE},
    EncodeSize, Error, RangeCfg, Read, Write,
};
use bytes::{Buf, BufMut, Bytes};

impl Write for Bytes {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(self.len(), buf);
        buf.put_slice(self);
    }
}

impl EncodeSize for Bytes {
    #[inline]
    fn encode_size(&self) -> usize {
        LEN_SIZE + self.len()
    }
}

impl Read for Bytes {
    type Cfg = RangeCfg<usize>;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, range: &Self::Cfg) -> Result<Self, Error> {
        let len = read_len(buf, range)?;
        at_least(buf, len)?;
        Ok(buf.copy_to_bytes(len))
    }
}
