//! Big-endian conversions between words and bytes.

/// Reads a 32-bit big-endian word.
#[inline(always)]
pub fn load_u32(bytes: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*bytes)
}

/// Reads sixteen consecutive big-endian words from a 64-byte block.
#[inline(always)]
pub fn load_words(block: &[u8; 64], out: &mut [u32]) {
    let (words, _) = block.as_chunks::<4>();

    for (slot, word) in out.iter_mut().zip(words) {
        *slot = load_u32(word);
    }
}

/// Writes `words` as consecutive big-endian bytes into `out`.
///
/// `out` must hold at least `4 * words.len()` bytes; extra bytes are left
/// untouched.
#[inline]
pub fn store_words(words: &[u32], out: &mut [u8]) {
    let (chunks, _) = out.as_chunks_mut::<4>();

    for (chunk, word) in chunks.iter_mut().zip(words) {
        *chunk = word.to_be_bytes();
    }
}

/// Encodes a 64-bit integer as eight big-endian bytes.
#[inline(always)]
pub fn encode_u64(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}
