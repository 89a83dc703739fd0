//! Standard Base64 alphabet.

use super::{Alphabet, DecodeStep, EncodeStep, Sealed};

/// Standard Base64 encoding with `=` padding.
///
/// ```text
/// [A-Z]      [a-z]      [0-9]      +     /
/// 0x41-0x5a, 0x61-0x7a, 0x30-0x39, 0x2b, 0x2f
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Base64;

impl Sealed for Base64 {}

impl Alphabet for Base64 {
    const BASE: u8 = b'A';
    const DECODER: &'static [DecodeStep] = DECODE_STANDARD;
    const ENCODER: &'static [EncodeStep] = ENCODE_STANDARD;
    const BITS: u32 = 6;
    const BLOCK_SYMBOLS: usize = 4;
    const BLOCK_BYTES: usize = 3;
    const PADDED: bool = true;
}

/// Standard Base64 encoding *without* padding.
///
/// ```text
/// [A-Z]      [a-z]      [0-9]      +     /
/// 0x41-0x5a, 0x61-0x7a, 0x30-0x39, 0x2b, 0x2f
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Base64Unpadded;

impl Sealed for Base64Unpadded {}

impl Alphabet for Base64Unpadded {
    const BASE: u8 = b'A';
    const DECODER: &'static [DecodeStep] = DECODE_STANDARD;
    const ENCODER: &'static [EncodeStep] = ENCODE_STANDARD;
    const BITS: u32 = 6;
    const BLOCK_SYMBOLS: usize = 4;
    const BLOCK_BYTES: usize = 3;
    const PADDED: bool = false;
}

/// Standard Base64 decoder.
const DECODE_STANDARD: &[DecodeStep] = &[
    DecodeStep(b'A'..=b'Z', -64),
    DecodeStep(b'a'..=b'z', -70),
    DecodeStep(b'0'..=b'9', 5),
    DecodeStep(b'+'..=b'+', 20),
    DecodeStep(b'/'..=b'/', 17),
];

/// Standard Base64 encoder.
const ENCODE_STANDARD: &[EncodeStep] = &[
    EncodeStep(25, -6),
    EncodeStep(51, 75),
    EncodeStep(61, 15),
    EncodeStep(62, -3),
];
