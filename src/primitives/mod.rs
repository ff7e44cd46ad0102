//! Primitive helpers
//!
//! This module defines low-level, byte-oriented helpers used by the hash
//! implementations of this crate.
//!
//! SHA-1 fixes its byte order to big-endian for both message words and the
//! encoded message length. Every conversion between words and bytes goes
//! through the explicit helpers in `be`, so no code path depends on the
//! endianness of the host machine.

pub mod be;
