//! The value contract and polymorphic object slots.
//!
//! Concrete types implement [Value]. Every [Value] is also an [Object], the object-safe
//! view used wherever the concrete type is only known at runtime (heterogeneous sequences,
//! interface fields, registry factories).
//!
//! An object in a polymorphic slot is encoded as its [Id] followed by its own fields.
//! Decoding reads the [Id], resolves the class through the [Registry], instantiates a
//! blank value and decodes into it.

use crate::{Error, Registry};
use bytes::{Buf, BufMut};
use objwire_codec::{util::read_len, EncodeSize, FixedSize, ReadExt, Write};
use objwire_schema::{Entity, Id};
use std::{any::Any, fmt::Debug};
use tracing::trace;

/// Implemented by every type that can be encoded into a polymorphic slot.
///
/// `Write` must emit fields in exactly the order [Value::entity] declares them, and
/// [Value::read_value] must consume them in that same order.
pub trait Value:
    Write + EncodeSize + Default + Clone + PartialEq + Debug + Send + Sync + 'static
{
    /// Descriptor of this type.
    fn entity() -> &'static Entity;

    /// Reads the fields of this type (the identity token has already been consumed).
    fn read_value(buf: &mut impl Buf, registry: &Registry) -> Result<Self, Error>;
}

/// Object-safe view of a [Value].
pub trait Object: Any + Debug + Send + Sync {
    /// Descriptor of the concrete type.
    fn descriptor(&self) -> &'static Entity;

    /// Identity token of the concrete type.
    fn id(&self) -> Id {
        self.descriptor().id()
    }

    /// Writes the fields of this object (without its identity token).
    fn write_fields(&self, buf: &mut dyn BufMut);

    /// Size of [Object::write_fields] output.
    fn fields_size(&self) -> usize;

    /// Populates this object from `buf`.
    ///
    /// On error the object is left untouched.
    fn read_fields(&mut self, buf: &mut dyn Buf, registry: &Registry) -> Result<(), Error>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn clone_object(&self) -> Box<dyn Object>;

    /// True if `other` has the same concrete type and equal fields.
    fn eq_object(&self, other: &dyn Object) -> bool;
}

impl<T: Value> Object for T {
    fn descriptor(&self) -> &'static Entity {
        T::entity()
    }

    fn write_fields(&self, mut buf: &mut dyn BufMut) {
        self.write(&mut buf);
    }

    fn fields_size(&self) -> usize {
        self.encode_size()
    }

    fn read_fields(&mut self, mut buf: &mut dyn Buf, registry: &Registry) -> Result<(), Error> {
        *self = T::read_value(&mut buf, registry)?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_object(&self) -> Box<dyn Object> {
        Box::new(self.clone())
    }

    fn eq_object(&self, other: &dyn Object) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| other == self)
    }
}

impl dyn Object {
    /// Returns true if the concrete type is `T`.
    pub fn is<T: Value>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Value>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Converts into the concrete type, or `None` if it is not `T`.
    pub fn downcast<T: Value>(self: Box<Self>) -> Option<Box<T>> {
        self.into_any().downcast::<T>().ok()
    }
}

impl Clone for Box<dyn Object> {
    fn clone(&self) -> Self {
        self.clone_object()
    }
}

impl PartialEq for dyn Object {
    fn eq(&self, other: &Self) -> bool {
        self.eq_object(other)
    }
}

// A boxed object written on its own occupies a polymorphic slot.
impl Write for Box<dyn Object> {
    fn write(&self, buf: &mut impl BufMut) {
        write_object(self.as_ref(), buf);
    }
}

impl EncodeSize for Box<dyn Object> {
    fn encode_size(&self) -> usize {
        object_size(self.as_ref())
    }
}

/// Writes `object` into a polymorphic slot: identity token, then fields.
pub fn write_object(object: &dyn Object, buf: &mut impl BufMut) {
    object.id().write(buf);
    object.write_fields(buf);
}

/// Encoded size of `object` in a polymorphic slot.
pub fn object_size(object: &dyn Object) -> usize {
    Id::SIZE + object.fields_size()
}

/// Reads an object from a polymorphic slot.
///
/// Fails with [Error::UnknownType] if the identity token is not registered (including the
/// null token), and with an [objwire_codec::Error::Invalid] once objects nest deeper than
/// [crate::Config::max_depth].
pub fn read_object(buf: &mut impl Buf, registry: &Registry) -> Result<Box<dyn Object>, Error> {
    let nested = registry.nested()?;
    let id = Id::read(buf)?;
    let class = registry.lookup(&id)?;
    trace!(%id, name = %class.entity().qualified_name(), depth = nested.depth(), "decoding object");
    class.decode(buf, &nested)
}

/// Writes a nullable polymorphic slot. `None` is encoded as [Id::ZERO] with no fields.
pub fn write_optional_object(object: Option<&dyn Object>, buf: &mut impl BufMut) {
    match object {
        Some(object) => write_object(object, buf),
        None => Id::ZERO.write(buf),
    }
}

/// Encoded size of a nullable polymorphic slot.
pub fn optional_object_size(object: Option<&dyn Object>) -> usize {
    object.map_or(Id::SIZE, object_size)
}

/// Reads a nullable polymorphic slot.
pub fn read_optional_object(
    buf: &mut impl Buf,
    registry: &Registry,
) -> Result<Option<Box<dyn Object>>, Error> {
    let nested = registry.nested()?;
    let id = Id::read(buf)?;
    if id.is_zero() {
        return Ok(None);
    }
    let class = registry.lookup(&id)?;
    class.decode(buf, &nested).map(Some)
}

/// Reads a heterogeneous sequence: a `u32` count, then that many polymorphic slots.
///
/// The first element that fails to decode aborts the whole sequence.
pub fn read_objects(
    buf: &mut impl Buf,
    registry: &Registry,
) -> Result<Vec<Box<dyn Object>>, Error> {
    let len = read_len(buf, &registry.limit())?;
    let mut objects = Vec::with_capacity(len.min(buf.remaining() / Id::SIZE));
    for _ in 0..len {
        objects.push(read_object(buf, registry)?);
    }
    Ok(objects)
}
