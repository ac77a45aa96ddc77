//! Type descriptors.

use crate::Entity;
use std::fmt::{self, Display};

/// The wire method used to encode a primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Bool,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
    String,
}

impl Method {
    /// Every method, in declaration order.
    pub const ALL: [Method; 12] = [
        Method::Bool,
        Method::Int8,
        Method::Uint8,
        Method::Int16,
        Method::Uint16,
        Method::Int32,
        Method::Uint32,
        Method::Int64,
        Method::Uint64,
        Method::Float32,
        Method::Float64,
        Method::String,
    ];

    /// Canonical lowercase name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Bool => "bool",
            Method::Int8 => "int8",
            Method::Uint8 => "uint8",
            Method::Int16 => "int16",
            Method::Uint16 => "uint16",
            Method::Int32 => "int32",
            Method::Uint32 => "uint32",
            Method::Int64 => "int64",
            Method::Uint64 => "uint64",
            Method::Float32 => "float32",
            Method::Float64 => "float64",
            Method::String => "string",
        }
    }

    /// Encoded width in bytes, or `None` for length-prefixed methods.
    pub fn size(&self) -> Option<usize> {
        match self {
            Method::Bool | Method::Int8 | Method::Uint8 => Some(1),
            Method::Int16 | Method::Uint16 => Some(2),
            Method::Int32 | Method::Uint32 | Method::Float32 => Some(4),
            Method::Int64 | Method::Uint64 | Method::Float64 => Some(8),
            Method::String => None,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Describes the shape of a single field.
///
/// Descriptors document the wire layout for tools and humans. The codec of a type never
/// consults them; see `objwire_binary::verify` for checking the two agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    /// A scalar encoded with `method`.
    Primitive { name: String, method: Method },
    /// A nested record encoded inline, without an identity token.
    Struct(&'static Entity),
    /// `size` elements with no length prefix.
    Array {
        alias: String,
        element: Box<Type>,
        size: usize,
    },
    /// A `u32` count followed by that many elements of one statically known type.
    Slice { alias: String, element: Box<Type> },
    /// A polymorphic slot: an identity token followed by the referenced object's fields.
    Interface { name: String },
}

impl Type {
    pub fn primitive(name: impl Into<String>, method: Method) -> Self {
        Type::Primitive {
            name: name.into(),
            method,
        }
    }

    /// Shorthand for a primitive named after its method.
    pub fn method(method: Method) -> Self {
        Self::primitive(method.name(), method)
    }

    pub fn entity(entity: &'static Entity) -> Self {
        Type::Struct(entity)
    }

    pub fn array(alias: impl Into<String>, element: Type, size: usize) -> Self {
        Type::Array {
            alias: alias.into(),
            element: Box::new(element),
            size,
        }
    }

    pub fn slice(alias: impl Into<String>, element: Type) -> Self {
        Type::Slice {
            alias: alias.into(),
            element: Box::new(element),
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Type::Interface { name: name.into() }
    }

    /// The 20-byte identity token as a fixed array of bytes.
    pub fn id() -> Self {
        Self::array("id.ID", Self::primitive("byte", Method::Uint8), crate::id::ID_LENGTH)
    }

    /// Human readable name (aliases win over structure).
    pub fn name(&self) -> String {
        match self {
            Type::Primitive { name, .. } => name.clone(),
            Type::Struct(entity) => entity.qualified_name(),
            Type::Array {
                alias,
                element,
                size,
            } => {
                if alias.is_empty() {
                    format!("[{size}]{}", element.name())
                } else {
                    alias.clone()
                }
            }
            Type::Slice { alias, element } => {
                if alias.is_empty() {
                    format!("[]{}", element.name())
                } else {
                    alias.clone()
                }
            }
            Type::Interface { name } => name.clone(),
        }
    }

    /// Canonical layout description.
    ///
    /// Two types with equal signatures have identical wire layouts. Aliases and display
    /// names are not part of the signature; nested records contribute their identity.
    pub fn signature(&self) -> String {
        match self {
            Type::Primitive { method, .. } => method.name().to_string(),
            Type::Struct(entity) => format!("${}", entity.id()),
            Type::Array { element, size, .. } => format!("[{size}]{}", element.signature()),
            Type::Slice { element, .. } => format!("[]{}", element.signature()),
            Type::Interface { .. } => "?".to_string(),
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_sizes() {
        assert_eq!(Method::Bool.size(), Some(1));
        assert_eq!(Method::Uint16.size(), Some(2));
        assert_eq!(Method::Float32.size(), Some(4));
        assert_eq!(Method::Float64.size(), Some(8));
        assert_eq!(Method::String.size(), None);
        assert_eq!(Method::ALL.len(), 12);
    }

    #[test]
    fn test_names() {
        let float = Type::method(Method::Float64);
        assert_eq!(float.name(), "float64");
        assert_eq!(Type::slice("", float.clone()).name(), "[]float64");
        assert_eq!(Type::slice("Floats", float.clone()).name(), "Floats");
        assert_eq!(Type::id().name(), "id.ID");
        assert_eq!(
            Type::array("", Type::method(Method::Uint8), 4).name(),
            "[4]uint8"
        );
        assert_eq!(Type::interface("binary.Object").to_string(), "binary.Object");
    }

    #[test]
    fn test_signature_ignores_aliases() {
        let a = Type::slice("Floats", Type::primitive("double", Method::Float64));
        let b = Type::slice("", Type::method(Method::Float64));
        assert_eq!(a.signature(), b.signature());
        assert_eq!(a.signature(), "[]float64");
        assert_eq!(Type::id().signature(), "[20]uint8");
        assert_eq!(Type::interface("x").signature(), "?");
    }
}
