//! Error types for the SHA-1 engine.
//!
//! Hashing itself cannot fail once its inputs are valid: every error here is
//! raised before the first chunk is compressed and no partial digest is ever
//! produced.

use std::fmt;

/// Errors that can occur during parameter validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sha1ParamError {
    /// The thread count must be at least 1.
    ZeroThreads,
    /// More threads were requested than the host can run concurrently.
    TooManyThreads { requested: usize, available: usize },
}

/// Errors that can occur while computing a digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sha1Error {
    /// Invalid engine parameters.
    InvalidParams(Sha1ParamError),
    /// The requested length exceeds the provided buffer.
    LengthOutOfBounds { length: u64, available: usize },
    /// The padded buffer or the schedule table could not be allocated.
    AllocationFailed { bytes: usize },
    /// The worker pool could not be started.
    ThreadPool(String),
}

impl fmt::Display for Sha1ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sha1ParamError::ZeroThreads => write!(f, "thread count must be at least 1"),
            Sha1ParamError::TooManyThreads {
                requested,
                available,
            } => write!(
                f,
                "{requested} threads requested but only {available} are available"
            ),
        }
    }
}

impl fmt::Display for Sha1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sha1Error::InvalidParams(err) => write!(f, "invalid parameters: {err}"),
            Sha1Error::LengthOutOfBounds { length, available } => write!(
                f,
                "message length {length} exceeds buffer of {available} bytes"
            ),
            Sha1Error::AllocationFailed { bytes } => {
                write!(f, "failed to allocate {bytes} bytes")
            }
            Sha1Error::ThreadPool(reason) => write!(f, "failed to build worker pool: {reason}"),
        }
    }
}

impl std::error::Error for Sha1ParamError {}

impl std::error::Error for Sha1Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Sha1Error::InvalidParams(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Sha1ParamError> for Sha1Error {
    fn from(err: Sha1ParamError) -> Self {
        Sha1Error::InvalidParams(err)
    }
}
