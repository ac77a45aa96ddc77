use objwire_codec::Error as CodecError;
use objwire_schema::Id;
use thiserror::Error;

/// Errors that can occur when registering, encoding or decoding objects.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying bytes were truncated or malformed.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    /// A decoded identity token has no registry entry.
    #[error("unknown type: {0}")]
    UnknownType(Id),
    #[error("conflicting registration of {name} ({id})")]
    Conflict { id: Id, name: String },
    #[error("registry is sealed: cannot register {0}")]
    Sealed(Id),
    /// A codec disagrees with the field layout its entity declares.
    #[error("schema mismatch in {entity}: {reason}")]
    SchemaMismatch { entity: String, reason: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
