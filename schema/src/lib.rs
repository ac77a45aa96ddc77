//! Describe the shape of objwire types and derive their identities.
//!
//! An [Entity] documents a registrable type: its namespace, name, version and the ordered
//! [Field]s its codec reads and writes. Field descriptors ([Type]) cover scalars, inline
//! records, fixed arrays, homogeneous slices and polymorphic interface slots.
//!
//! Descriptors are pure metadata for introspection. They are built once per type (usually in
//! a lazily initialized static) and never consulted on the encode/decode path. The one
//! thing derived from them is the type's [Id], a hash of [Entity::signature].
//!
//! # Example
//!
//! ```rust
//! use objwire_schema::{Entity, Method, Type};
//!
//! let range = Entity::new("memory", "Range")
//!     .with_field("Base", Type::method(Method::Uint64))
//!     .with_field("Size", Type::method(Method::Uint64));
//!
//! assert_eq!(range.qualified_name(), "memory.Range");
//! assert_eq!(range.fields().len(), 2);
//! assert_eq!(range.id(), range.clone().id());
//! ```

mod entity;
mod error;
pub mod id;
mod ty;

pub use entity::{Entity, Field};
pub use error::Error;
pub use id::Id;
pub use ty::{Method, Type};
