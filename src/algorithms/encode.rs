//! Raw bytes to symbols.

use super::{data_symbols, encoded_len, index_mask};
use crate::alphabet::{Alphabet, PAD};

/// Encode `src` into the front of `dst`, returning the number of symbols
/// written.
///
/// # Panics
///
/// If `dst` is shorter than the encoded length of `src`.
pub(crate) fn encode<A: Alphabet>(src: &[u8], dst: &mut [u8]) -> usize {
    let elen = encoded_len::<A>(src.len());
    assert!(
        dst.len() >= elen,
        "output buffer too small: {} bytes needed, {} available",
        elen,
        dst.len()
    );
    let dst = &mut dst[..elen];

    let mut src_chunks = src.chunks_exact(A::BLOCK_BYTES);
    let mut dst_chunks = dst.chunks_exact_mut(A::BLOCK_SYMBOLS);

    for (s, d) in (&mut src_chunks).zip(&mut dst_chunks) {
        encode_group::<A>(s, d);
    }

    // The last chunk, which may have padding
    let src_rem = src_chunks.remainder();

    if !src_rem.is_empty() {
        let dst_rem = match dst_chunks.next() {
            Some(d) => d,
            None => dst_chunks.into_remainder(),
        };

        let (data, padding) = dst_rem.split_at_mut(data_symbols::<A>(src_rem.len()));
        encode_group::<A>(src_rem, data);
        padding.fill(PAD);
    }

    elen
}

/// Encode up to one group of raw bytes, zero-extended to `BLOCK_BYTES`, into
/// `dst.len()` symbols.
#[inline(always)]
fn encode_group<A: Alphabet>(src: &[u8], dst: &mut [u8]) {
    debug_assert!(src.len() <= A::BLOCK_BYTES);
    debug_assert_eq!(dst.len(), data_symbols::<A>(src.len()));

    let width = 8 * A::BLOCK_BYTES as u32;
    let mut acc = 0u64;

    for (i, &byte) in src.iter().enumerate() {
        acc |= u64::from(byte) << (width - 8 * (i as u32 + 1));
    }

    for (i, d) in dst.iter_mut().enumerate() {
        let shift = width - A::BITS * (i as u32 + 1);
        *d = A::encode_bits(((acc >> shift) & index_mask::<A>()) as u8);
    }
}
