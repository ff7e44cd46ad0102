//! Reusable SHA-1 engine with a dedicated worker pool.
//!
//! [`Sha1Engine`] validates its parameters once and keeps its worker
//! threads alive between calls, so repeated digests do not pay for thread
//! start-up. Every call still allocates and frees its own padded buffer and
//! schedule table; nothing but the pool is shared between calls.

use log::{debug, trace};
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::DIGEST_LEN;
use super::core::{compress, digest_bytes};
use super::error::Sha1Error;
use super::padding::{PaddedMessage, pad};
use super::params::Sha1Params;
use super::schedule::{ScheduleTable, expand, expand_parallel};

/// A SHA-1 engine expanding message schedules on a fixed number of threads.
#[derive(Debug)]
pub struct Sha1Engine {
    params: Sha1Params,
    // `None` when a single thread is requested: expansion then runs on the
    // caller and no pool is spawned.
    pool: Option<ThreadPool>,
}

impl Sha1Engine {
    /// Creates an engine, spawning `params.threads` worker threads.
    ///
    /// # Errors
    ///
    /// - [`Sha1Error::InvalidParams`] if the parameters are invalid.
    /// - [`Sha1Error::ThreadPool`] if the worker threads cannot be spawned.
    pub fn new(params: Sha1Params) -> Result<Self, Sha1Error> {
        params.validate()?;

        let pool = if params.threads > 1 {
            let pool = ThreadPoolBuilder::new()
                .num_threads(params.threads)
                .thread_name(|i| format!("sha1p-worker-{i}"))
                .build()
                .map_err(|err| Sha1Error::ThreadPool(err.to_string()))?;
            Some(pool)
        } else {
            None
        };

        debug!("sha1 engine ready with {} threads", params.threads);

        Ok(Self { params, pool })
    }

    pub fn params(&self) -> &Sha1Params {
        &self.params
    }

    pub fn threads(&self) -> usize {
        self.params.threads
    }

    /// Computes the SHA-1 digest of the whole of `message`.
    pub fn digest(&self, message: &[u8]) -> Result<[u8; DIGEST_LEN], Sha1Error> {
        self.digest_prefix(message, message.len() as u64)
    }

    /// Computes the SHA-1 digest of the first `length` bytes of `message`.
    ///
    /// # Errors
    ///
    /// - [`Sha1Error::LengthOutOfBounds`] if `length > message.len()`.
    /// - [`Sha1Error::AllocationFailed`] if the working buffers cannot be
    ///   allocated.
    pub fn digest_prefix(
        &self,
        message: &[u8],
        length: u64,
    ) -> Result<[u8; DIGEST_LEN], Sha1Error> {
        let padded = pad(message, length)?;

        debug!(
            "hashing {} bytes in {} chunks on {} threads",
            length,
            padded.num_chunks(),
            self.params.threads
        );

        let table = self.expand(&padded)?;
        trace!("expanded {} schedule rows", table.num_rows());

        let state = compress(&table);

        Ok(digest_bytes(&state))
    }

    fn expand(&self, padded: &PaddedMessage) -> Result<ScheduleTable, Sha1Error> {
        match &self.pool {
            Some(pool) => expand_parallel(padded, pool),
            None => expand(padded),
        }
    }
}
