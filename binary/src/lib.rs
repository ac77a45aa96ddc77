//! Register, encode and decode self-describing objects.
//!
//! # Overview
//!
//! Every type that can travel in a polymorphic slot implements [Value]: it names an
//! [Entity] describing its fields and knows how to write and read those fields with the
//! primitives of [objwire_codec]. On the wire, such an object is prefixed with the [Id]
//! derived from its entity. A [Registry], populated at startup, maps each [Id] back to a
//! [Class] that can instantiate and decode the type.
//!
//! Values embedded at a statically known type (a field of type `Vec<f64>`, a nested record)
//! carry no identity token. Only polymorphic slots do: a single object written with
//! [write_object], a nullable slot ([write_optional_object]) or a heterogeneous sequence
//! (`Vec<Box<dyn Object>>`).
//!
//! # Example
//!
//! ```rust
//! use bytes::{Buf, BufMut};
//! use objwire_binary::{any, stream, Error, Registry, Value};
//! use objwire_codec::{EncodeSize, ReadExt, Write};
//! use objwire_schema::{Entity, Method, Type};
//! use std::sync::LazyLock;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Range {
//!     base: u64,
//!     size: u64,
//! }
//!
//! impl Write for Range {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.base.write(buf);
//!         self.size.write(buf);
//!     }
//! }
//!
//! impl EncodeSize for Range {
//!     fn encode_size(&self) -> usize {
//!         self.base.encode_size() + self.size.encode_size()
//!     }
//! }
//!
//! impl Value for Range {
//!     fn entity() -> &'static Entity {
//!         static ENTITY: LazyLock<Entity> = LazyLock::new(|| {
//!             Entity::new("memory", "Range")
//!                 .with_field("Base", Type::method(Method::Uint64))
//!                 .with_field("Size", Type::method(Method::Uint64))
//!         });
//!         &ENTITY
//!     }
//!
//!     fn read_value(buf: &mut impl Buf, _: &Registry) -> Result<Self, Error> {
//!         Ok(Self {
//!             base: u64::read(buf)?,
//!             size: u64::read(buf)?,
//!         })
//!     }
//! }
//!
//! let registry = Registry::default();
//! any::register(&registry).unwrap();
//! registry.register::<Range>().unwrap();
//! registry.seal();
//!
//! let range = Range { base: 0x1000, size: 64 };
//! let encoded = stream::encode(&range);
//! assert_eq!(encoded.len(), 20 + 16);
//!
//! let decoded = stream::decode(encoded, &registry).unwrap();
//! assert_eq!(decoded.downcast_ref::<Range>(), Some(&range));
//! ```

pub mod any;
mod error;
pub mod object;
pub mod registry;
pub mod stream;
pub mod verify;

pub use error::Error;
pub use object::{
    object_size, optional_object_size, read_object, read_objects, read_optional_object,
    write_object, write_optional_object, Object, Value,
};
pub use objwire_schema::{Entity, Id};
pub use registry::{Class, Config, Registry};
