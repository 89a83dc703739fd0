//! Bit-packing engine shared by every alphabet.
//!
//! A group of `BLOCK_BYTES` raw bytes is packed big-endian into a `u64`
//! accumulator and split into `BLOCK_SYMBOLS` units of `BITS` bits each
//! (24 bits for Base64, 40 bits for Base32). Only the width of the final
//! group varies, and it is a function of the input length alone.

pub(crate) mod decode;
pub(crate) mod encode;

use crate::alphabet::Alphabet;

/// Number of symbols needed to carry `bytes` raw bytes of a group.
#[inline]
pub(crate) fn data_symbols<A: Alphabet>(bytes: usize) -> usize {
    (bytes * 8).div_ceil(A::BITS as usize)
}

/// Number of raw bytes carried by a final group of `symbols` data symbols,
/// or `None` if no input length encodes to that many symbols.
#[inline]
pub(crate) fn tail_bytes<A: Alphabet>(symbols: usize) -> Option<usize> {
    let bytes = symbols * A::BITS as usize / 8;
    (data_symbols::<A>(bytes) == symbols).then_some(bytes)
}

/// Exact length of the encoding of `len` raw bytes.
#[inline]
pub(crate) fn encoded_len<A: Alphabet>(len: usize) -> usize {
    if A::PADDED {
        len.div_ceil(A::BLOCK_BYTES) * A::BLOCK_SYMBOLS
    } else {
        len / A::BLOCK_BYTES * A::BLOCK_SYMBOLS + data_symbols::<A>(len % A::BLOCK_BYTES)
    }
}

/// Upper bound on the number of bytes decoded from `len` symbols, padded or
/// not.
#[inline]
pub(crate) fn decoded_max_len<A: Alphabet>(len: usize) -> usize {
    len / A::BLOCK_SYMBOLS * A::BLOCK_BYTES + (len % A::BLOCK_SYMBOLS) * A::BITS as usize / 8
}

/// Mask selecting the low `BITS` bits of an index.
#[inline(always)]
fn index_mask<A: Alphabet>() -> u64 {
    (1u64 << A::BITS) - 1
}
