//! SHA-1 message schedule expansion.
//!
//! Each 64-byte chunk expands into 80 words:
//!
//! - `W[0..16]` are the chunk's bytes read as big-endian words
//! - `W[t] = rotl1(W[t-3] ^ W[t-8] ^ W[t-14] ^ W[t-16])` for `t` in `16..80`
//!
//! A row depends only on its own chunk, so rows can be computed in any
//! order. [`expand_parallel`] hands disjoint rows to the worker pool; no
//! locking is needed because no two tasks ever touch the same row.

use rayon::ThreadPool;
use rayon::prelude::*;

use super::error::Sha1Error;
use super::padding::PaddedMessage;
use super::{CHUNK_LEN, SCHEDULE_LEN};
use crate::primitives::be::load_words;

/// One 80-word message schedule per chunk, in chunk order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleTable {
    rows: Vec<[u32; SCHEDULE_LEN]>,
}

impl ScheduleTable {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[[u32; SCHEDULE_LEN]] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[u32; SCHEDULE_LEN]> {
        self.rows.get(index)
    }
}

/// Expands a single chunk into its message schedule.
#[inline(always)]
pub fn expand_row(chunk: &[u8; CHUNK_LEN], row: &mut [u32; SCHEDULE_LEN]) {
    load_words(chunk, &mut row[..16]);

    for t in 16..SCHEDULE_LEN {
        row[t] = (row[t - 3] ^ row[t - 8] ^ row[t - 14] ^ row[t - 16]).rotate_left(1);
    }
}

/// Expands every chunk on the calling thread.
pub fn expand(padded: &PaddedMessage) -> Result<ScheduleTable, Sha1Error> {
    let mut rows = allocate_rows(padded.num_chunks())?;

    for (row, chunk) in rows.iter_mut().zip(padded.chunks()) {
        expand_row(chunk, row);
    }

    Ok(ScheduleTable { rows })
}

/// Expands every chunk on the threads of `pool`.
///
/// The result is identical to [`expand`].
pub fn expand_parallel(
    padded: &PaddedMessage,
    pool: &ThreadPool,
) -> Result<ScheduleTable, Sha1Error> {
    let mut rows = allocate_rows(padded.num_chunks())?;

    pool.install(|| {
        rows.par_iter_mut()
            .zip(padded.chunks().par_iter())
            .for_each(|(row, chunk)| expand_row(chunk, row));
    });

    Ok(ScheduleTable { rows })
}

fn allocate_rows(count: usize) -> Result<Vec<[u32; SCHEDULE_LEN]>, Sha1Error> {
    let bytes = count.saturating_mul(SCHEDULE_LEN * 4);

    let mut rows = Vec::new();
    rows.try_reserve_exact(count)
        .map_err(|_| Sha1Error::AllocationFailed { bytes })?;
    rows.resize(count, [0u32; SCHEDULE_LEN]);

    Ok(rows)
}
