//! Parameter definitions and validation for the SHA-1 engine.
//!
//! The only tunable is the size of the worker pool used for schedule
//! expansion. The digest never depends on it.

use super::error::Sha1ParamError;

/// Configuration parameters for [`Sha1Engine`](super::Sha1Engine).
///
/// # Recommended Values
///
/// - `threads`: 1 for short messages; up to [`available_threads`] for
///   messages spanning many thousands of chunks. Compression is sequential,
///   so speedups are bounded by the share of time spent expanding schedules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sha1Params {
    /// Number of worker threads used for schedule expansion (minimum 1).
    pub threads: usize,
}

impl Sha1Params {
    /// Parameters using the given number of worker threads.
    pub fn with_threads(threads: usize) -> Self {
        Self { threads }
    }

    /// Parameters using every hardware thread of the host.
    pub fn host() -> Self {
        Self {
            threads: available_threads(),
        }
    }

    /// Checks the parameters the engine itself depends on.
    ///
    /// A thread count of zero is rejected rather than clamped.
    pub fn validate(&self) -> Result<(), Sha1ParamError> {
        if self.threads < 1 {
            return Err(Sha1ParamError::ZeroThreads);
        }

        Ok(())
    }

    /// Like [`validate`](Self::validate), but also rejects thread counts
    /// larger than the host's available parallelism.
    ///
    /// The engine accepts oversubscribed pools; this check is meant for
    /// callers that want to refuse such requests up front.
    pub fn validate_for_host(&self) -> Result<(), Sha1ParamError> {
        self.validate()?;

        let available = available_threads();
        if self.threads > available {
            return Err(Sha1ParamError::TooManyThreads {
                requested: self.threads,
                available,
            });
        }

        Ok(())
    }
}

impl Default for Sha1Params {
    /// Default parameters: a single worker thread.
    fn default() -> Self {
        Self { threads: 1 }
    }
}

/// Number of threads the host can run concurrently.
///
/// Falls back to 1 when the platform cannot report it.
pub fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
