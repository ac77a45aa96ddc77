//! Entities: the introspectable shape of a registrable type.

use crate::{Id, Type};
use std::{
    fmt::{self, Display},
    sync::OnceLock,
};

/// A named, ordered slot of an [Entity].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub declared: String,
    pub ty: Type,
}

impl Field {
    pub fn new(declared: impl Into<String>, ty: Type) -> Self {
        Self {
            declared: declared.into(),
            ty,
        }
    }
}

/// Metadata describing a registrable type.
///
/// Field order must match the order in which the type's codec writes and reads its fields.
/// The identity of the type is derived from [Entity::signature], so any change to the
/// qualified name, version or layout yields a different [Id].
#[derive(Clone, Debug, Default)]
pub struct Entity {
    namespace: String,
    name: String,
    docs: String,
    version: String,
    fields: Vec<Field>,

    id: OnceLock<Id>,
}

impl Entity {
    /// Creates an entity with no fields.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = docs.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self.id = OnceLock::new();
        self
    }

    /// Appends a field (fields are encoded in the order they are attached).
    pub fn with_field(mut self, declared: impl Into<String>, ty: Type) -> Self {
        self.fields.push(Field::new(declared, ty));
        self.id = OnceLock::new();
        self
    }

    /// Replaces all fields.
    pub fn set_fields(&mut self, fields: Vec<Field>) {
        self.fields = fields;
        self.id = OnceLock::new();
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn docs(&self) -> &str {
        &self.docs
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// `namespace.name`, or just `name` when the namespace is empty.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Canonical text from which the identity is derived.
    ///
    /// `namespace.name[@version]{field:signature,...}`
    pub fn signature(&self) -> String {
        let mut signature = self.qualified_name();
        if !self.version.is_empty() {
            signature.push('@');
            signature.push_str(&self.version);
        }
        signature.push('{');
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                signature.push(',');
            }
            signature.push_str(&field.declared);
            signature.push(':');
            signature.push_str(&field.ty.signature());
        }
        signature.push('}');
        signature
    }

    /// The identity token of this entity (computed once).
    pub fn id(&self) -> Id {
        *self.id.get_or_init(|| Id::hash(self.signature().as_bytes()))
    }
}

// The cached identity is derived state and does not take part in equality.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace
            && self.name == other.name
            && self.docs == other.docs
            && self.version == other.version
            && self.fields == other.fields
    }
}

impl Eq for Entity {}

impl Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())?;
        if !self.version.is_empty() {
            write!(f, " @{}", self.version)?;
        }
        writeln!(f, " {{")?;
        for field in &self.fields {
            writeln!(f, "    {}: {}", field.declared, field.ty)?;
        }
        write!(f, "}}")
    }
}
