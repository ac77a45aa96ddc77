//! Payload types shared by the integration tests.

#![allow(dead_code)]

use bytes::{Buf, BufMut};
use objwire_binary::{read_optional_object, write_optional_object, Error, Object, Registry, Value};
use objwire_codec::{EncodeSize, Read, ReadExt, Write};
use objwire_schema::{Entity, Method, Type};
use std::sync::LazyLock;

/// A span of memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryRange {
    pub base: u64,
    pub size: u64,
}

impl Write for MemoryRange {
    fn write(&self, buf: &mut impl BufMut) {
        self.base.write(buf);
        self.size.write(buf);
    }
}

impl EncodeSize for MemoryRange {
    fn encode_size(&self) -> usize {
        self.base.encode_size() + self.size.encode_size()
    }
}

impl Value for MemoryRange {
    fn entity() -> &'static Entity {
        static ENTITY: LazyLock<Entity> = LazyLock::new(|| {
            Entity::new("memory", "Range")
                .with_docs("A contiguous span of memory.")
                .with_field("Base", Type::method(Method::Uint64))
                .with_field("Size", Type::method(Method::Uint64))
        });
        &ENTITY
    }

    fn read_value(buf: &mut impl Buf, _: &Registry) -> Result<Self, Error> {
        Ok(Self {
            base: u64::read(buf)?,
            size: u64::read(buf)?,
        })
    }
}

/// Reports an aborted call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aborted {
    pub is_assert: bool,
    pub reason: String,
}

impl Write for Aborted {
    fn write(&self, buf: &mut impl BufMut) {
        self.is_assert.write(buf);
        self.reason.write(buf);
    }
}

impl EncodeSize for Aborted {
    fn encode_size(&self) -> usize {
        self.is_assert.encode_size() + self.reason.encode_size()
    }
}

impl Value for Aborted {
    fn entity() -> &'static Entity {
        static ENTITY: LazyLock<Entity> = LazyLock::new(|| {
            Entity::new("atom", "Aborted")
                .with_field("IsAssert", Type::method(Method::Bool))
                .with_field("Reason", Type::method(Method::String))
        });
        &ENTITY
    }

    fn read_value(buf: &mut impl Buf, registry: &Registry) -> Result<Self, Error> {
        Ok(Self {
            is_assert: bool::read(buf)?,
            reason: String::read_cfg(buf, &registry.limit())?,
        })
    }
}

/// A nested record, a byte sequence and an optional attachment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Observation {
    pub range: MemoryRange,
    pub data: Vec<u8>,
    pub extra: Option<Box<dyn Object>>,
}

impl Write for Observation {
    fn write(&self, buf: &mut impl BufMut) {
        self.range.write(buf);
        self.data.write(buf);
        write_optional_object(self.extra.as_deref(), buf);
    }
}

impl EncodeSize for Observation {
    fn encode_size(&self) -> usize {
        self.range.encode_size()
            + self.data.encode_size()
            + objwire_binary::optional_object_size(self.extra.as_deref())
    }
}

impl Value for Observation {
    fn entity() -> &'static Entity {
        static ENTITY: LazyLock<Entity> = LazyLock::new(|| {
            Entity::new("memory", "Observation")
                .with_field("Range", Type::entity(MemoryRange::entity()))
                .with_field("Data", Type::slice("", Type::method(Method::Uint8)))
                .with_field("Extra", Type::interface("binary.Object"))
        });
        &ENTITY
    }

    fn read_value(buf: &mut impl Buf, registry: &Registry) -> Result<Self, Error> {
        Ok(Self {
            range: MemoryRange::read_value(buf, registry)?,
            data: Vec::read_cfg(buf, &(registry.limit(), ()))?,
            extra: read_optional_object(buf, registry)?,
        })
    }
}

/// A registry holding the boxes and every payload above.
pub fn registry() -> Registry {
    let registry = Registry::default();
    objwire_binary::any::register(&registry).unwrap();
    registry.register::<MemoryRange>().unwrap();
    registry.register::<Aborted>().unwrap();
    registry.register::<Observation>().unwrap();
    registry
}
