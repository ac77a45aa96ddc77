//! Check that a codec agrees with the layout its entity declares.
//!
//! Descriptors are never consulted while encoding or decoding, so nothing stops a type's
//! `Write` implementation from drifting away from its [Entity]. [layout] encodes a value
//! and walks the declared fields over the produced bytes; any shortfall, malformed
//! primitive or leftover byte is reported as [Error::SchemaMismatch].

use crate::{Class, Error, Object, Registry};
use bytes::{Buf, Bytes, BytesMut};
use objwire_codec::{util::LEN_SIZE, FixedSize};
use objwire_schema::{Entity, Id, Method, Type};
use tracing::debug;

/// Verifies the encoding of `object` against its entity.
pub fn layout(object: &dyn Object, registry: &Registry) -> Result<(), Error> {
    let entity = object.descriptor();
    let mismatch = |reason: String| Error::SchemaMismatch {
        entity: entity.qualified_name(),
        reason,
    };

    let expected = object.fields_size();
    let mut buf = BytesMut::with_capacity(expected);
    object.write_fields(&mut buf);
    if buf.len() != expected {
        return Err(mismatch(format!(
            "wrote {} bytes but reported a size of {expected}",
            buf.len()
        )));
    }

    let mut walker = Walker {
        buf: buf.freeze(),
        registry,
        depth: 1,
    };
    walker.entity(entity, "").map_err(mismatch)?;
    if walker.buf.has_remaining() {
        return Err(mismatch(format!(
            "{} bytes left after the last field",
            walker.buf.remaining()
        )));
    }
    Ok(())
}

/// Verifies a default instance of `class`.
pub fn class(class: &Class, registry: &Registry) -> Result<(), Error> {
    let object = class.create();
    if object.id() != class.id() {
        return Err(Error::SchemaMismatch {
            entity: class.entity().qualified_name(),
            reason: format!("instances report identity {}", object.id()),
        });
    }
    layout(object.as_ref(), registry)?;
    debug!(id = %class.id(), name = %class.entity().qualified_name(), "verified layout");
    Ok(())
}

struct Walker<'a> {
    buf: Bytes,
    registry: &'a Registry,
    // Object slots enclosing the current position, the verified object included.
    depth: usize,
}

impl Walker<'_> {
    fn take(&mut self, path: &str, len: usize) -> Result<Bytes, String> {
        if self.buf.remaining() < len {
            return Err(format!(
                "{path}: needs {len} bytes, {} left",
                self.buf.remaining()
            ));
        }
        Ok(self.buf.split_to(len))
    }

    fn count(&mut self, path: &str) -> Result<usize, String> {
        let mut prefix = self.take(path, LEN_SIZE)?;
        Ok(prefix.get_u32() as usize)
    }

    fn entity(&mut self, entity: &Entity, path: &str) -> Result<(), String> {
        for field in entity.fields() {
            let path = if path.is_empty() {
                field.declared.clone()
            } else {
                format!("{path}.{}", field.declared)
            };
            self.ty(&field.ty, &path)?;
        }
        Ok(())
    }

    fn ty(&mut self, ty: &Type, path: &str) -> Result<(), String> {
        match ty {
            Type::Primitive { method, .. } => self.primitive(*method, path),
            Type::Struct(entity) => self.entity(entity, path),
            Type::Array { element, size, .. } => {
                for i in 0..*size {
                    self.ty(element, &format!("{path}[{i}]"))?;
                }
                Ok(())
            }
            Type::Slice { element, .. } => {
                let count = self.count(path)?;
                for i in 0..count {
                    if !self.buf.has_remaining() && !zero_sized(element) {
                        return Err(format!("{path}: declares {count} elements, found {i}"));
                    }
                    self.ty(element, &format!("{path}[{i}]"))?;
                }
                Ok(())
            }
            Type::Interface { .. } => {
                let id = Id::try_from(self.take(path, Id::SIZE)?.as_ref())
                    .map_err(|err| format!("{path}: {err}"))?;
                if id.is_zero() {
                    return Ok(());
                }
                let class = self
                    .registry
                    .lookup(&id)
                    .map_err(|_| format!("{path}: unregistered type {id}"))?;
                let max_depth = self.registry.config().max_depth;
                if self.depth >= max_depth {
                    return Err(format!("{path}: nested deeper than {max_depth} objects"));
                }
                self.depth += 1;
                let result = self.entity(class.entity(), path);
                self.depth -= 1;
                result
            }
        }
    }

    fn primitive(&mut self, method: Method, path: &str) -> Result<(), String> {
        match method.size() {
            Some(size) => {
                let bytes = self.take(path, size)?;
                if method == Method::Bool && bytes[0] > 1 {
                    return Err(format!("{path}: invalid bool {}", bytes[0]));
                }
                Ok(())
            }
            None => {
                let len = self.count(path)?;
                let text = self.take(path, len)?;
                std::str::from_utf8(&text)
                    .map(|_| ())
                    .map_err(|_| format!("{path}: invalid utf-8"))
            }
        }
    }
}

fn zero_sized(ty: &Type) -> bool {
    match ty {
        Type::Primitive { .. } | Type::Slice { .. } | Type::Interface { .. } => false,
        Type::Struct(entity) => entity.fields().iter().all(|field| zero_sized(&field.ty)),
        Type::Array { element, size, .. } => *size == 0 || zero_sized(element),
    }
}
