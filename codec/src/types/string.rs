//! Codec implementation for text.
//!
//! Encoded as a `u32` count of UTF-8 bytes followed by the bytes themselves.

use crate::{
    util::{at_least, read_len, write_len, LEN_SIZE},
    EncodeSize, Error, RangeCfg, Read, Write,
};
use bytes::{Buf, BufMut};

impl Write for String {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(self.len(), buf);
        buf.put_slice(self.as_bytes());
    }
}

impl EncodeSize for String {
    #[inline]
    fn encode_size(&self) -> usize {
        LEN_SIZE + self.len()
    }
}

impl Read for String {
    type Cfg = RangeCfg<usize>;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, range: &Self::Cfg) -> Result<Self, Error> {
        let len = read_len(buf, range)?;
        at_least(buf, len)?;
        let mut raw = vec![0u8; len];
        buf.copy_to_slice(&mut raw);
        String::from_utf8(raw).map_err(|_| Error::Invalid("String", "invalid utf-8"))
    }
}
