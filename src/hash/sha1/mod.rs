//! SHA-1 with a multi-threaded message schedule.
//!
//! The digest is computed in three phases over an in-memory message:
//!
//! 1. **Padding**: the message is copied into a buffer whose length is a
//!    multiple of 64 bytes, terminated by `0x80`, zero bytes and the
//!    64-bit big-endian bit length.
//! 2. **Schedule expansion**: every 64-byte chunk is expanded into an
//!    80-word message schedule. Chunks are independent, so this phase runs
//!    on a pool of worker threads.
//! 3. **Compression**: the 80 rounds are applied to each schedule row, in
//!    chunk order, folding into a single five-word running state. Each chunk
//!    depends on the state left by the previous one, so this phase is
//!    sequential.
//!
//! The output is bit-identical to standard SHA-1 (FIPS 180-4) for every
//! thread count.

pub mod computations;
pub mod core;
pub mod engine;
pub mod error;
pub mod padding;
pub mod params;
pub mod schedule;

pub use self::core::{compress_block, hash, sha1};
pub use engine::Sha1Engine;
pub use error::{Sha1Error, Sha1ParamError};
pub use params::{Sha1Params, available_threads};

/// Size of a chunk (compression block) in bytes.
pub const CHUNK_LEN: usize = 64;

/// Number of words in the message schedule of one chunk.
pub const SCHEDULE_LEN: usize = 80;

/// Size of the digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Initial running state.
pub const H0: u32 = 0x6745_2301;
pub const H1: u32 = 0xEFCD_AB89;
pub const H2: u32 = 0x98BA_DCFE;
pub const H3: u32 = 0x1032_5476;
pub const H4: u32 = 0xC3D2_E1F0;

pub const H160_INIT: [u32; 5] = [H0, H1, H2, H3, H4];

/// Additive round constants, one per 20-round band.
pub const K0: u32 = 0x5A82_7999;
pub const K1: u32 = 0x6ED9_EBA1;
pub const K2: u32 = 0x8F1B_BCDC;
pub const K3: u32 = 0xCA62_C1D6;
