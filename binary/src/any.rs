//! Boxed scalars and sequences.
//!
//! Each box is a single-field [Value] wrapping a native value, so a bare scalar can occupy a
//! polymorphic slot. Boxes live in the `any` namespace with a single `Value` field.
//!
//! # Example
//! ```rust
//! use objwire_binary::{any::{self, Boxed, Float64}, stream, Registry};
//!
//! let registry = Registry::default();
//! any::register(&registry).unwrap();
//!
//! let encoded = stream::encode(&Float64::new(3.5));
//! let decoded = stream::decode(encoded, &registry).unwrap();
//! assert_eq!(decoded.downcast_ref::<Float64>(), Some(&Float64(3.5)));
//! ```

use crate::{object::read_objects, Error, Object, Registry, Value};
use bytes::{Buf, BufMut};
use objwire_codec::{EncodeSize, Read, ReadExt, Write};
use objwire_schema::{Entity, Id, Method, Type};
use std::sync::LazyLock;

/// A single-field [Value] around a native value.
pub trait Boxed: Value {
    type Inner;

    fn new(inner: Self::Inner) -> Self;

    /// Returns the native value.
    fn unwrap(self) -> Self::Inner;
}

macro_rules! boxes {
    ($(
        $(#[$doc:meta])*
        $box:ident($inner:ty) = $name:literal, $ty:expr, |$buf:ident, $registry:ident| $read:expr;
    )*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Debug, Default, PartialEq)]
            pub struct $box(pub $inner);

            impl Write for $box {
                fn write(&self, buf: &mut impl BufMut) {
                    self.0.write(buf);
                }
            }

            impl EncodeSize for $box {
                fn encode_size(&self) -> usize {
                    self.0.encode_size()
                }
            }

            impl Value for $box {
                fn entity() -> &'static Entity {
                    static ENTITY: LazyLock<Entity> =
                        LazyLock::new(|| Entity::new("any", $name).with_field("Value", $ty));
                    &ENTITY
                }

                #[allow(unused_variables)]
                fn read_value($buf: &mut impl Buf, $registry: &Registry) -> Result<Self, Error> {
                    Ok(Self($read))
                }
            }

            impl Boxed for $box {
                type Inner = $inner;

                fn new(inner: $inner) -> Self {
                    Self(inner)
                }

                fn unwrap(self) -> $inner {
                    self.0
                }
            }

            impl From<$inner> for $box {
                fn from(inner: $inner) -> Self {
                    Self(inner)
                }
            }
        )*

        /// A boxed value of any kind, for callers that only hold a `&dyn Object`.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Scalar {
            $($box($inner),)*
        }

        impl Scalar {
            /// Boxes the value.
            pub fn into_object(self) -> Box<dyn Object> {
                match self {
                    $(Scalar::$box(inner) => Box::new($box(inner)),)*
                }
            }

            /// Unboxes `object`, or returns `None` if it is not a box.
            pub fn from_object(object: &dyn Object) -> Option<Self> {
                $(
                    if let Some(boxed) = object.downcast_ref::<$box>() {
                        return Some(Scalar::$box(boxed.0.clone()));
                    }
                )*
                None
            }

            /// Descriptor of the box this value belongs in.
            pub fn entity(&self) -> &'static Entity {
                match self {
                    $(Scalar::$box(_) => $box::entity(),)*
                }
            }
        }

        /// Registers every box.
        pub fn register(registry: &Registry) -> Result<(), Error> {
            $(registry.register::<$box>()?;)*
            Ok(())
        }
    };
}

fn slice(method: Method) -> Type {
    Type::slice("", Type::method(method))
}

boxes! {
    Bool(bool) = "bool_", Type::method(Method::Bool), |buf, registry| bool::read(buf)?;
    Int8(i8) = "int8_", Type::method(Method::Int8), |buf, registry| i8::read(buf)?;
    Uint8(u8) = "uint8_", Type::method(Method::Uint8), |buf, registry| u8::read(buf)?;
    Int16(i16) = "int16_", Type::method(Method::Int16), |buf, registry| i16::read(buf)?;
    Uint16(u16) = "uint16_", Type::method(Method::Uint16), |buf, registry| u16::read(buf)?;
    Int32(i32) = "int32_", Type::method(Method::Int32), |buf, registry| i32::read(buf)?;
    Uint32(u32) = "uint32_", Type::method(Method::Uint32), |buf, registry| u32::read(buf)?;
    Int64(i64) = "int64_", Type::method(Method::Int64), |buf, registry| i64::read(buf)?;
    Uint64(u64) = "uint64_", Type::method(Method::Uint64), |buf, registry| u64::read(buf)?;
    Float32(f32) = "float32_", Type::method(Method::Float32), |buf, registry| f32::read(buf)?;
    Float64(f64) = "float64_", Type::method(Method::Float64), |buf, registry| f64::read(buf)?;
    /// Boxed UTF-8 text.
    Text(String) = "string_", Type::method(Method::String),
        |buf, registry| String::read_cfg(buf, &registry.limit())?;

    BoolSlice(Vec<bool>) = "boolSlice", slice(Method::Bool),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    Int8Slice(Vec<i8>) = "int8Slice", slice(Method::Int8),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    Uint8Slice(Vec<u8>) = "uint8Slice", slice(Method::Uint8),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    Int16Slice(Vec<i16>) = "int16Slice", slice(Method::Int16),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    Uint16Slice(Vec<u16>) = "uint16Slice", slice(Method::Uint16),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    Int32Slice(Vec<i32>) = "int32Slice", slice(Method::Int32),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    Uint32Slice(Vec<u32>) = "uint32Slice", slice(Method::Uint32),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    Int64Slice(Vec<i64>) = "int64Slice", slice(Method::Int64),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    Uint64Slice(Vec<u64>) = "uint64Slice", slice(Method::Uint64),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    Float32Slice(Vec<f32>) = "float32Slice", slice(Method::Float32),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    Float64Slice(Vec<f64>) = "float64Slice", slice(Method::Float64),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    TextSlice(Vec<String>) = "stringSlice", slice(Method::String),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), registry.limit()))?;

    /// A sequence of identity tokens.
    IdSlice(Vec<Id>) = "idSlice", Type::slice("", Type::id()),
        |buf, registry| Vec::read_cfg(buf, &(registry.limit(), ()))?;
    /// A heterogeneous sequence: each element carries its own identity token.
    ObjectSlice(Vec<Box<dyn Object>>) = "objectSlice",
        Type::slice("", Type::interface("binary.Object")),
        |buf, registry| read_objects(buf, registry)?;
}
