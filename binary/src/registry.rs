//! Maps identity tokens to the types that can be decoded from them.
//!
//! A [Registry] is a cheap handle to shared state: clones observe the same registrations,
//! and every operation may be called concurrently from any number of threads.
//!
//! The handle passed down a decode also records how many object slots enclose the current
//! position, so hostile input cannot nest objects deeper than [Config::max_depth].

use crate::{verify, Error, Object, Value};
use bytes::Buf;
use objwire_codec::{Error as CodecError, RangeCfg};
use objwire_schema::{Entity, Id};
use std::{
    any::TypeId,
    collections::HashMap,
    fmt,
    sync::{Arc, RwLock},
};
use tracing::{debug, warn};

/// A registry binding: everything needed to recognize and instantiate one type.
#[derive(Clone, Copy)]
pub struct Class {
    id: Id,
    entity: &'static Entity,
    type_id: TypeId,
    type_name: &'static str,
    create: fn() -> Box<dyn Object>,
}

impl Class {
    /// The binding for `T`.
    pub fn of<T: Value>() -> Self {
        let entity = T::entity();
        Self {
            id: entity.id(),
            entity,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            create: create::<T>,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn entity(&self) -> &'static Entity {
        self.entity
    }

    /// Rust name of the bound type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// A fresh default instance.
    pub fn create(&self) -> Box<dyn Object> {
        (self.create)()
    }

    /// Instantiates a blank object and decodes its fields from `buf`.
    pub fn decode(
        &self,
        buf: &mut impl Buf,
        registry: &Registry,
    ) -> Result<Box<dyn Object>, Error> {
        let mut object = self.create();
        object.read_fields(buf, registry)?;
        Ok(object)
    }
}

fn create<T: Value>() -> Box<dyn Object> {
    Box::<T>::default()
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.type_id == other.type_id && self.entity == other.entity
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("id", &self.id)
            .field("name", &self.entity.qualified_name())
            .field("type", &self.type_name)
            .finish()
    }
}

/// Configuration for a [Registry].
#[derive(Clone, Debug)]
pub struct Config {
    /// Largest element count accepted when decoding a heterogeneous sequence.
    pub max_length: usize,

    /// Largest number of object slots a decoded object may be nested in (itself included).
    pub max_depth: usize,

    /// Check every class with [verify::class] before accepting it.
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_length: u32::MAX as usize,
            max_depth: 64,
            verify: false,
        }
    }
}

#[derive(Default)]
struct Inner {
    classes: HashMap<Id, Class>,
    names: HashMap<String, Id>,
    sealed: bool,
}

/// A concurrent map from [Id] to [Class].
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<RwLock<Inner>>,
    cfg: Config,
    depth: usize,
}

impl Registry {
    pub fn new(cfg: Config) -> Self {
        Self {
            inner: Arc::default(),
            cfg,
            depth: 0,
        }
    }

    /// Number of object slots enclosing the current decode position.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// A handle for decoding one object slot further down.
    pub(crate) fn nested(&self) -> Result<Registry, Error> {
        if self.depth >= self.cfg.max_depth {
            return Err(CodecError::Invalid("object", "nesting too deep").into());
        }
        Ok(Self {
            inner: self.inner.clone(),
            cfg: self.cfg.clone(),
            depth: self.depth + 1,
        })
    }

    /// Registers `T`.
    pub fn register<T: Value>(&self) -> Result<(), Error> {
        self.insert(Class::of::<T>())
    }

    /// Adds `class` to the registry.
    ///
    /// Registering the same binding twice is a no-op. Fails with [Error::Conflict] if the
    /// token (or the qualified name) is already bound to something else, and with
    /// [Error::Sealed] once [Registry::seal] has been called.
    pub fn insert(&self, class: Class) -> Result<(), Error> {
        if self.cfg.verify {
            verify::class(&class, self)?;
        }

        let name = class.entity.qualified_name();
        let mut inner = self.inner.write().unwrap();
        if let Some(existing) = inner.classes.get(&class.id) {
            if *existing == class {
                return Ok(());
            }
            warn!(
                id = %class.id,
                %name,
                existing = existing.type_name,
                conflicting = class.type_name,
                "conflicting registration"
            );
            return Err(Error::Conflict { id: class.id, name });
        }
        if inner.sealed {
            warn!(id = %class.id, %name, "registration after seal");
            return Err(Error::Sealed(class.id));
        }
        if let Some(other) = inner.names.get(&name) {
            warn!(id = %class.id, %name, existing = %other, "name already bound to another layout");
            return Err(Error::Conflict { id: class.id, name });
        }

        debug!(id = %class.id, %name, ty = class.type_name, "registered");
        inner.names.insert(name, class.id);
        inner.classes.insert(class.id, class);
        Ok(())
    }

    /// Resolves a decoded identity token.
    pub fn lookup(&self, id: &Id) -> Result<Class, Error> {
        self.inner
            .read()
            .unwrap()
            .classes
            .get(id)
            .copied()
            .ok_or(Error::UnknownType(*id))
    }

    /// The token under which `entity` is registered, if any.
    pub fn lookup_entity(&self, entity: &Entity) -> Option<Id> {
        let id = entity.id();
        let inner = self.inner.read().unwrap();
        inner.classes.contains_key(&id).then_some(id)
    }

    /// Finds a class by namespace and name.
    pub fn lookup_name(&self, namespace: &str, name: &str) -> Option<Class> {
        let qualified = Entity::new(namespace, name).qualified_name();
        let inner = self.inner.read().unwrap();
        let id = inner.names.get(&qualified)?;
        inner.classes.get(id).copied()
    }

    /// Snapshot of every class, ordered by qualified name.
    pub fn classes(&self) -> Vec<Class> {
        let mut classes: Vec<Class> = self
            .inner
            .read()
            .unwrap()
            .classes
            .values()
            .copied()
            .collect();
        classes.sort_by_key(|class| class.entity.qualified_name());
        classes
    }

    /// Every registered entity, ordered by qualified name.
    pub fn entities(&self) -> Vec<&'static Entity> {
        self.classes().into_iter().map(|class| class.entity).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rejects all further registrations. Idempotent re-registrations are still accepted.
    pub fn seal(&self) {
        let mut inner = self.inner.write().unwrap();
        if !inner.sealed {
            debug!(classes = inner.classes.len(), "sealed registry");
        }
        inner.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().unwrap().sealed
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Count limit applied to heterogeneous sequences.
    pub fn limit(&self) -> RangeCfg<usize> {
        (..=self.cfg.max_length).into()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read().unwrap();
        f.debug_struct("Registry")
            .field("classes", &inner.classes.len())
            .field("sealed", &inner.sealed)
            .field("cfg", &self.cfg)
            .field("depth", &self.depth)
            .finish()
    }
}
