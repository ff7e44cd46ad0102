//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-1 with a pure-Rust, multi-threaded implementation.

pub mod sha1;

/// Re-export of the SHA-1 entry points.
pub use self::sha1::core::{hash, sha1};
