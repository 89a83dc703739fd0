//! Symbols to raw bytes.

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::{index_mask, tail_bytes};
use crate::{
    alphabet::{classify, Alphabet, PAD},
    errors::{ErrorKind, Result},
};

/// Flags accumulated while decoding one group.
struct Group {
    /// A symbol was neither in the alphabet nor padding.
    invalid: Choice,

    /// A padding character was found among the data symbols.
    pad: Choice,

    /// Bits of the last symbol beyond the last whole byte.
    ghost: u64,
}

/// Decode `src` into the front of `dst`, returning the number of bytes
/// written.
///
/// Structural problems which are visible from the input length and the
/// padding suffix are reported before any symbol is looked up. After that
/// every symbol is decoded regardless of errors, and on failure the bytes
/// already written are wiped.
///
/// # Panics
///
/// If `dst` is shorter than the decoded length of `src`.
pub(crate) fn decode<A: Alphabet>(src: &[u8], dst: &mut [u8]) -> Result<usize> {
    let src = if A::PADDED {
        remove_padding::<A>(src)?
    } else {
        src
    };

    let tail = tail_bytes::<A>(src.len() % A::BLOCK_SYMBOLS).ok_or(ErrorKind::BadPadding)?;
    let dlen = src.len() / A::BLOCK_SYMBOLS * A::BLOCK_BYTES + tail;
    assert!(
        dst.len() >= dlen,
        "output buffer too small: {} bytes needed, {} available",
        dlen,
        dst.len()
    );
    let dst = &mut dst[..dlen];

    let mut src_chunks = src.chunks_exact(A::BLOCK_SYMBOLS);
    let mut dst_chunks = dst.chunks_exact_mut(A::BLOCK_BYTES);
    let mut invalid = Choice::from(0);
    let mut bad_padding = Choice::from(0);

    for (s, d) in (&mut src_chunks).zip(&mut dst_chunks) {
        let group = decode_group::<A>(s, d);
        invalid |= group.invalid;
        bad_padding |= group.pad;
    }

    // Partial final group
    let src_rem = src_chunks.remainder();

    if !src_rem.is_empty() {
        let group = decode_group::<A>(src_rem, dst_chunks.into_remainder());
        invalid |= group.invalid;
        bad_padding |= group.pad | !group.ghost.ct_eq(&0);
    }

    if bool::from(invalid | bad_padding) {
        dst.zeroize();
    }

    if invalid.into() {
        Err(ErrorKind::InvalidEncodingChar)
    } else if bad_padding.into() {
        Err(ErrorKind::BadPadding)
    } else {
        Ok(dlen)
    }
}

/// Strip the padding suffix of the final group.
///
/// The length of the suffix gives away the length of the decoded output,
/// which is public anyway, but the symbols in front of it are only compared
/// in constant time.
fn remove_padding<A: Alphabet>(src: &[u8]) -> Result<&[u8]> {
    if src.len() % A::BLOCK_SYMBOLS != 0 {
        return Err(ErrorKind::BadPadding);
    }

    let last = &src[src.len().saturating_sub(A::BLOCK_SYMBOLS)..];
    let mut in_suffix = Choice::from(1);
    let mut pad_len = 0usize;

    for byte in last.iter().rev() {
        in_suffix &= byte.ct_eq(&PAD);
        pad_len += usize::from(in_suffix.unwrap_u8());
    }

    // An entire group of padding carries no data
    if pad_len == A::BLOCK_SYMBOLS {
        return Err(ErrorKind::BadPadding);
    }

    Ok(&src[..src.len() - pad_len])
}

/// Decode up to one group of symbols into `dst.len()` bytes.
#[inline(always)]
fn decode_group<A: Alphabet>(src: &[u8], dst: &mut [u8]) -> Group {
    debug_assert!(src.len() <= A::BLOCK_SYMBOLS);
    debug_assert!(tail_bytes::<A>(src.len() % A::BLOCK_SYMBOLS).is_some());

    let mut acc = 0u64;
    let mut invalid = Choice::from(0);
    let mut pad = Choice::from(0);

    for &byte in src {
        let symbol = classify::<A>(byte);
        invalid |= symbol.invalid;
        pad |= symbol.pad;
        acc = (acc << A::BITS) | (symbol.value as u64 & index_mask::<A>());
    }

    let width = A::BITS * src.len() as u32;
    let ghost_bits = width - 8 * dst.len() as u32;

    for (i, d) in dst.iter_mut().enumerate() {
        *d = (acc >> (width - 8 * (i as u32 + 1))) as u8;
    }

    Group {
        invalid,
        pad,
        ghost: acc & ((1u64 << ghost_bits) - 1),
    }
}
