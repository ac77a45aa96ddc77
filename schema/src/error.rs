use thiserror::Error;

/// Errors that can occur when building schema values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid id length: {0}")]
    InvalidIdLength(usize),
    #[error("invalid hex")]
    InvalidHex,
}
