//! Parallel SHA-1 digest engine
//!
//! This crate provides a from-scratch SHA-1 implementation that splits the
//! per-chunk work of the algorithm across a configurable number of worker
//! threads while producing digests bit-identical to standard SHA-1.
//!
//! The focus is on **clarity, predictability, and measurability**: the
//! padding, schedule expansion and compression phases are exposed as
//! separate, testable steps so their cost can be measured in isolation.
//!
//! # Module overview
//!
//! - `hash`  
//!   The SHA-1 engine. Padding and compression run on the calling thread;
//!   message schedule expansion, the only phase without cross-chunk
//!   dependencies, runs on a worker pool.
//!
//! - `primitives`  
//!   Explicit big-endian conversions between words and bytes.
//!
//! # Design goals
//!
//! - Output independent of the thread count
//! - Whole-message hashing only: the message must be resident in memory
//! - No state shared between separate hash calls
//! - Errors reported as values; allocation failure included
//!
//! SHA-1 is not collision resistant. This crate is intended for
//! compatibility and performance work, not for new security designs.

pub mod hash;
pub mod primitives;
