use thiserror::Error;

/// Errors returned by the cleaning and encoding entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// The handle did not point at a record. Nothing was mutated.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The JSON encoder rejected the cleaned record.
    #[error(transparent)]
    Encoding(#[from] serde_json::Error),
}

/// `Result` alias with [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
