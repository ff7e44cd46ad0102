//! SHA-1 message padding.
//!
//! The padded message is the original bytes, a single `0x80` terminator,
//! zero bytes, and the message length in bits as a 64-bit big-endian
//! integer, sized to the smallest multiple of 64 bytes that fits all of it.
//!
//! ```text
//! | message (L) | 0x80 | 0x00 ... (55 - L) mod 64 | L * 8 (8 bytes, BE) |
//! ```

use super::CHUNK_LEN;
use super::error::Sha1Error;
use crate::primitives::be::encode_u64;

/// Size of the trailing bit-length field.
const LENGTH_FIELD_LEN: usize = 8;

/// A message padded to a whole number of chunks.
///
/// Invariants:
/// - `bytes.len() == CHUNK_LEN * num_chunks`
/// - the byte right after the message is `0x80`, followed only by zeros up
///   to the length field
/// - the last 8 bytes encode the message length in bits, big-endian
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedMessage {
    bytes: Vec<u8>,
    num_chunks: usize,
}

impl PaddedMessage {
    /// The whole padded buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn num_chunks(&self) -> usize {
        self.num_chunks
    }

    /// All chunks, in message order.
    pub fn chunks(&self) -> &[[u8; CHUNK_LEN]] {
        let (chunks, _) = self.bytes.as_chunks::<CHUNK_LEN>();
        chunks
    }

    /// A borrowed view of chunk `index`, if it exists.
    pub fn chunk(&self, index: usize) -> Option<&[u8; CHUNK_LEN]> {
        self.chunks().get(index)
    }
}

/// Number of bytes appended before the length field: the `0x80` terminator
/// plus the zero padding.
///
/// Always in `1..=64`. The arithmetic wraps, so it is well defined for
/// every `length`.
#[inline]
pub fn pad_len(length: u64) -> u64 {
    1 + (447u64.wrapping_sub(length.wrapping_mul(8)) % 512) / 8
}

/// Number of chunks in the padded form of a `length`-byte message.
///
/// Equal to `ceil((length + 9) / 64)`, without overflowing for lengths
/// close to `u64::MAX`.
#[inline]
pub fn num_chunks(length: u64) -> u64 {
    let chunk = CHUNK_LEN as u64;
    let tail = length % chunk + 1 + LENGTH_FIELD_LEN as u64;

    length / chunk + tail.div_ceil(chunk)
}

/// Pads the first `length` bytes of `message`.
///
/// # Errors
///
/// - [`Sha1Error::LengthOutOfBounds`] if `length` exceeds `message.len()`.
/// - [`Sha1Error::AllocationFailed`] if the padded buffer cannot be
///   allocated.
pub fn pad(message: &[u8], length: u64) -> Result<PaddedMessage, Sha1Error> {
    if length > message.len() as u64 {
        return Err(Sha1Error::LengthOutOfBounds {
            length,
            available: message.len(),
        });
    }

    let len = length as usize;
    let tail = pad_len(length) as usize + LENGTH_FIELD_LEN;
    let total = len
        .checked_add(tail)
        .ok_or(Sha1Error::AllocationFailed { bytes: usize::MAX })?;

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(total)
        .map_err(|_| Sha1Error::AllocationFailed { bytes: total })?;

    bytes.extend_from_slice(&message[..len]);
    bytes.push(0x80);
    bytes.resize(total - LENGTH_FIELD_LEN, 0x00);
    bytes.extend_from_slice(&encode_u64(length.wrapping_mul(8)));

    debug_assert_eq!(bytes.len() % CHUNK_LEN, 0);

    Ok(PaddedMessage {
        num_chunks: total / CHUNK_LEN,
        bytes,
    })
}
