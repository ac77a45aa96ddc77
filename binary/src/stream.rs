//! Whole-message helpers.
//!
//! A message is a single object in a polymorphic slot. [decode] requires the input to hold
//! exactly one message.

use crate::{
    object::{object_size, read_object, write_object},
    Error, Object, Registry,
};
use bytes::{Buf, BytesMut};
use objwire_codec::Error as CodecError;
use std::io;
use tracing::trace;

/// Encodes `object` with its identity token.
pub fn encode(object: &dyn Object) -> BytesMut {
    let len = object_size(object);
    let mut buf = BytesMut::with_capacity(len);
    write_object(object, &mut buf);
    assert_eq!(buf.len(), len);
    buf
}

/// Decodes exactly one object from `buf`.
pub fn decode(mut buf: impl Buf, registry: &Registry) -> Result<Box<dyn Object>, Error> {
    let object = read_object(&mut buf, registry)?;
    if buf.has_remaining() {
        return Err(CodecError::ExtraData(buf.remaining()).into());
    }
    Ok(object)
}

/// Encodes `object` into `writer`.
pub fn write_to(writer: &mut impl io::Write, object: &dyn Object) -> Result<(), Error> {
    let buf = encode(object);
    writer.write_all(&buf)?;
    trace!(id = %object.id(), len = buf.len(), "wrote object");
    Ok(())
}

/// Reads `reader` to its end and decodes exactly one object from the bytes.
pub fn read_from(reader: &mut impl io::Read, registry: &Registry) -> Result<Box<dyn Object>, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    trace!(len = bytes.len(), "read object");
    decode(bytes.as_slice(), registry)
}
