//! SHA-1 core hashing functions
//!
//! This module implements the compression side of SHA-1 and the public
//! entry points built on top of it.
//!
//! It provides:
//! - the compression of one expanded schedule row into the running state
//! - the in-order fold of a whole schedule table
//! - a single-block compression step and a sequential reference digest
//! - [`hash`], the multi-threaded entry point
//!
//! Compression is a strict left fold: chunk `i + 1` starts from the state
//! left by chunk `i`. It always runs on the calling thread.

use log::trace;

use super::computations::all_rounds;
use super::engine::Sha1Engine;
use super::error::Sha1Error;
use super::params::Sha1Params;
use super::schedule::{ScheduleTable, expand_row};
use super::{CHUNK_LEN, DIGEST_LEN, H160_INIT, SCHEDULE_LEN};
use crate::primitives::be::store_words;

/// Applies the 80 rounds of one schedule row to the running state.
#[inline(always)]
pub fn compress_row(row: &[u32; SCHEDULE_LEN], state: &mut [u32; 5]) {
    all_rounds(state, row);
}

/// Folds every row of `table` into a fresh running state, in chunk order.
pub fn compress(table: &ScheduleTable) -> [u32; 5] {
    let mut state = H160_INIT;

    for row in table.rows() {
        compress_row(row, &mut state);
    }

    trace!("compressed {} chunks", table.num_rows());

    state
}

/// Serializes the running state into the 20-byte digest.
pub fn digest_bytes(state: &[u32; 5]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    store_words(state, &mut out);
    out
}

/// Compresses a single 512-bit block.
///
/// Expands the block's message schedule and applies all 80 rounds,
/// updating `state` in place.
pub fn compress_block(block: &[u8; CHUNK_LEN], state: &mut [u32; 5]) {
    let mut w = [0u32; SCHEDULE_LEN];
    expand_row(block, &mut w);
    compress_row(&w, state);
}

/// Computes the SHA-1 digest of `input` on the calling thread.
///
/// Full blocks are compressed directly from the input; only the final one
/// or two padded blocks are built on the stack. No heap allocation is
/// performed.
pub fn sha1(input: &[u8]) -> [u8; DIGEST_LEN] {
    let mut state = H160_INIT;

    let (blocks, rest) = input.as_chunks::<CHUNK_LEN>();
    for block in blocks {
        compress_block(block, &mut state);
    }

    let mut block = [0u8; CHUNK_LEN];
    let rem = rest.len();

    block[..rem].copy_from_slice(rest);
    block[rem] = 0x80;

    // No room left for the length field
    if rem > 55 {
        compress_block(&block, &mut state);
        block = [0; CHUNK_LEN];
    }

    let bit_len = (input.len() as u64).wrapping_mul(8);
    block[56..].copy_from_slice(&bit_len.to_be_bytes());

    compress_block(&block, &mut state);

    digest_bytes(&state)
}

/// Computes the SHA-1 digest of the first `length` bytes of `message`,
/// expanding message schedules on `threads` worker threads.
///
/// The digest is the same for every valid thread count.
///
/// Each call spawns and joins its own worker pool when `threads > 1`.
/// Callers hashing repeatedly, or timing the digest, should build one
/// [`Sha1Engine`] and reuse it.
///
/// # Errors
///
/// - [`Sha1Error::InvalidParams`] if `threads` is zero.
/// - [`Sha1Error::LengthOutOfBounds`] if `length > message.len()`.
/// - [`Sha1Error::AllocationFailed`] if the working buffers cannot be
///   allocated.
/// - [`Sha1Error::ThreadPool`] if the worker threads cannot be spawned.
///
/// # Example
///
/// ```rust
/// use sha1p::hash::sha1::hash;
///
/// let digest = hash(b"abc", 3, 2).unwrap();
/// assert_eq!(digest[..4], [0xa9, 0x99, 0x3e, 0x36]);
/// ```
pub fn hash(message: &[u8], length: u64, threads: usize) -> Result<[u8; DIGEST_LEN], Sha1Error> {
    let engine = Sha1Engine::new(Sha1Params::with_threads(threads))?;
    engine.digest_prefix(message, length)
}
