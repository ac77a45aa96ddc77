//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    /// The source ran out of bytes before the value was complete.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid bool")]
    InvalidBool,
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("invalid {0}: {1}")]
    Invalid(&'static str, &'static str), // context, message
}
