//! Base64 and Base32 alphabets.
//!
//! Symbols are computed with arithmetic on sign masks rather than by indexing
//! a table, so neither the latency nor the memory access pattern of a lookup
//! depends on the value being looked up.

mod base32;
mod base64;

pub use self::{
    base32::{Base32, Base32Unpadded},
    base64::{Base64, Base64Unpadded},
};

use core::{fmt::Debug, ops::RangeInclusive};
use subtle::{Choice, ConstantTimeEq};

/// The padding character shared by every alphabet in this crate.
pub(crate) const PAD: u8 = b'=';

mod private {
    pub trait Sealed {}
}

pub(crate) use self::private::Sealed;

/// Core encoder/decoder functions for a particular alphabet.
///
/// This trait is sealed: the alphabets of this crate are the only
/// implementations.
///
/// ```compile_fail
/// use const_time_enc::alphabet::{Alphabet, DecodeStep, EncodeStep};
///
/// #[derive(Copy, Clone, Debug, Eq, PartialEq)]
/// struct Custom;
///
/// impl Alphabet for Custom {
///     const BASE: u8 = b'a';
///     const DECODER: &'static [DecodeStep] = &[];
///     const ENCODER: &'static [EncodeStep] = &[];
///     const BITS: u32 = 4;
///     const BLOCK_SYMBOLS: usize = 2;
///     const BLOCK_BYTES: usize = 1;
///     const PADDED: bool = false;
/// }
/// ```
pub trait Alphabet: 'static + Copy + Debug + Eq + Send + Sized + Sync + Sealed {
    /// Symbol for index zero.
    const BASE: u8;

    /// Decoder passes.
    const DECODER: &'static [DecodeStep];

    /// Encoder passes.
    const ENCODER: &'static [EncodeStep];

    /// Number of bits carried by one symbol.
    const BITS: u32;

    /// Number of symbols in a complete group.
    const BLOCK_SYMBOLS: usize;

    /// Number of raw bytes carried by a complete group.
    const BLOCK_BYTES: usize;

    /// Is this encoding padded?
    const PADDED: bool;

    /// Use bitwise operators instead of table-lookups to turn an index
    /// `0..2^BITS` into its symbol.
    #[inline(always)]
    fn encode_bits(src: u8) -> u8 {
        let src = src as i16;
        let mut diff = src + Self::BASE as i16;

        for step in Self::ENCODER {
            diff -= step.mask(src) & step.1;
        }

        diff as u8
    }

    /// Use bitwise operators instead of table-lookups to turn a symbol into
    /// its index.
    ///
    /// Returns a negative value for any byte outside of the alphabet,
    /// including the padding character.
    #[inline(always)]
    fn decode_bits(src: u8) -> i16 {
        let src = src as i16;
        let mut ret: i16 = -1;

        for step in Self::DECODER {
            ret += step.mask(src) & (src + step.1);
        }

        ret
    }
}

/// Classify a symbol in constant time.
///
/// Every predicate is computed for every input regardless of which one ends
/// up being true.
#[inline(always)]
pub(crate) fn classify<A: Alphabet>(src: u8) -> Symbol {
    let value = A::decode_bits(src);
    let pad = src.ct_eq(&PAD);
    let found = Choice::from((((value >> 8) as u8) & 1) ^ 1);

    Symbol {
        value,
        pad,
        invalid: !found & !pad,
    }
}

/// A classified encoded symbol.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Symbol {
    /// Index of the symbol in the alphabet, negative if it has none.
    pub(crate) value: i16,

    /// Set if the symbol is the padding character.
    pub(crate) pad: Choice,

    /// Set if the symbol is neither in the alphabet nor padding.
    pub(crate) invalid: Choice,
}

/// Constant-time decoder step: symbols in the range map to
/// `symbol + offset + 1`.
#[derive(Debug)]
pub struct DecodeStep(pub(crate) RangeInclusive<u8>, pub(crate) i16);

impl DecodeStep {
    /// All ones if `src` lies in the range, zero otherwise.
    #[inline(always)]
    pub(crate) fn mask(&self, src: i16) -> i16 {
        // Exclusive bounds of the inclusive range
        let start = *self.0.start() as i16 - 1;
        let end = *self.0.end() as i16 + 1;
        ((start - src) & (src - end)) >> 8
    }
}

/// Compute a difference using the given offset on indices above the
/// threshold.
#[derive(Copy, Clone, Debug)]
pub struct EncodeStep(pub(crate) u8, pub(crate) i16);

impl EncodeStep {
    /// All ones if `src` is above the threshold, zero otherwise.
    #[inline(always)]
    pub(crate) fn mask(&self, src: i16) -> i16 {
        (self.0 as i16 - src) >> 8
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, Alphabet, Base32, Base64};

    fn check_bijection<A: Alphabet>(symbols: &[u8]) {
        assert_eq!(symbols.len(), 1 << A::BITS);

        for (index, &symbol) in symbols.iter().enumerate() {
            assert_eq!(A::encode_bits(index as u8), symbol);
            assert_eq!(A::decode_bits(symbol), index as i16);
        }

        for byte in 0..=255u8 {
            if !symbols.contains(&byte) {
                assert!(A::decode_bits(byte) < 0, "byte {byte:#04x} decoded");
            }
        }
    }

    #[test]
    fn base64_bijection() {
        check_bijection::<Base64>(
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
        );
    }

    #[test]
    fn base32_bijection() {
        check_bijection::<Base32>(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");
    }

    /// Replay both lookups step by step for every input value.
    ///
    /// Every input walks the full list of steps and each step contributes
    /// through a mask that is either all ones or all zeros, so no input
    /// selects a different sequence of operations.
    fn check_trace<A: Alphabet>() {
        for byte in 0..=255u8 {
            let src = byte as i16;
            let masks: Vec<i16> = A::DECODER.iter().map(|step| step.mask(src)).collect();

            assert_eq!(masks.len(), A::DECODER.len());
            assert!(masks.iter().all(|&m| m == 0 || m == -1), "byte {byte:#04x}");
            assert!(masks.iter().filter(|&&m| m == -1).count() <= 1);

            let replayed = A::DECODER
                .iter()
                .zip(&masks)
                .fold(-1i16, |acc, (step, &m)| acc + (m & (src + step.1)));
            assert_eq!(replayed, A::decode_bits(byte));
        }

        for index in 0..(1u8 << A::BITS) {
            let src = index as i16;
            let masks: Vec<i16> = A::ENCODER.iter().map(|step| step.mask(src)).collect();

            assert_eq!(masks.len(), A::ENCODER.len());
            assert!(masks.iter().all(|&m| m == 0 || m == -1), "index {index}");

            let replayed = A::ENCODER
                .iter()
                .zip(&masks)
                .fold(src + A::BASE as i16, |acc, (step, &m)| acc - (m & step.1));
            assert_eq!(replayed as u8, A::encode_bits(index));
        }
    }

    #[test]
    fn base64_trace() {
        check_trace::<Base64>();
    }

    #[test]
    fn base32_trace() {
        check_trace::<Base32>();
    }

    #[test]
    fn classify_all_bytes() {
        for byte in 0..=255u8 {
            let symbol = classify::<Base64>(byte);
            let pad = bool::from(symbol.pad);
            let invalid = bool::from(symbol.invalid);

            assert_eq!(pad, byte == b'=');
            assert_eq!(invalid, symbol.value < 0 && byte != b'=');
            assert!(!(pad && invalid));
        }
    }

    #[test]
    fn padding_is_not_a_symbol() {
        assert!(Base64::decode_bits(b'=') < 0);
        assert!(Base32::decode_bits(b'=') < 0);
    }

    #[test]
    fn base32_rejects_lower_case() {
        for byte in b'a'..=b'z' {
            assert!(Base32::decode_bits(byte) < 0);
        }
    }
}
