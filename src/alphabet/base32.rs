//! RFC 4648 Base32 alphabet.

use super::{Alphabet, DecodeStep, EncodeStep, Sealed};

/// RFC 4648 upper case Base32 encoding with `=` padding.
///
/// ```text
/// [A-Z]      [2-7]
/// 0x41-0x5a, 0x32-0x37
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Base32;

impl Sealed for Base32 {}

impl Alphabet for Base32 {
    const BASE: u8 = b'A';
    const DECODER: &'static [DecodeStep] = DECODE_UPPER;
    const ENCODER: &'static [EncodeStep] = ENCODE_UPPER;
    const BITS: u32 = 5;
    const BLOCK_SYMBOLS: usize = 8;
    const BLOCK_BYTES: usize = 5;
    const PADDED: bool = true;
}

/// RFC 4648 upper case Base32 encoding *without* padding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Base32Unpadded;

impl Sealed for Base32Unpadded {}

impl Alphabet for Base32Unpadded {
    const BASE: u8 = b'A';
    const DECODER: &'static [DecodeStep] = DECODE_UPPER;
    const ENCODER: &'static [EncodeStep] = ENCODE_UPPER;
    const BITS: u32 = 5;
    const BLOCK_SYMBOLS: usize = 8;
    const BLOCK_BYTES: usize = 5;
    const PADDED: bool = false;
}

/// Upper-case Base32 decoder.
const DECODE_UPPER: &[DecodeStep] = &[DecodeStep(b'A'..=b'Z', -64), DecodeStep(b'2'..=b'7', -23)];

/// Upper-case Base32 encoder.
const ENCODE_UPPER: &[EncodeStep] = &[EncodeStep(25, 41)];
