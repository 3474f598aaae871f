use crate::format::WeightFormat;
use thiserror::Error;

/// Errors shared by the copy engine and every tensor-source backend.
///
/// Open-time failures (`OpenFailed`, `MalformedContainer`) abort container
/// construction; all other kinds are local to the request that raised them
/// and leave the container usable.
#[derive(Error, Debug)]
pub enum WeightError {
    #[error("failed to open {path}: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed container: {0}")]
    MalformedContainer(String),
    #[error("tensor '{name}' not found; available: {available}")]
    TensorNotFound { name: String, available: String },
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),
    #[error("unsupported conversion from {from} to {to}")]
    UnsupportedConversion {
        from: WeightFormat,
        to: WeightFormat,
    },
    #[error("unsupported tensor dtype: {0}")]
    UnsupportedDType(String),
    #[error("rank mismatch: expected {expected}, got {got}")]
    RankMismatch { expected: usize, got: usize },
    #[error("destination buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    #[error("{0} not supported by this tensor source")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, WeightError>;
