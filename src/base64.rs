//! Constant-time Base64 encoding and decoding.
//!
//! The padded functions produce and accept the standard encoding with `=`
//! padding. The `_unpadded` variants omit the padding on output and reject it
//! on input.

use crate::{
    alphabet::{Base64, Base64Unpadded},
    encoding::Encoding,
    errors::Result,
};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// Give the size of the buffer needed to contain the result of encoding a
/// bytestring `sz` bytes long into padded base64.
///
/// This is the exact length of the output of [`base64_encode`].
#[inline]
pub fn base64_encoded_max_size(sz: usize) -> usize {
    Base64::encoded_len(sz)
}

/// Give the length of the result of encoding a bytestring `sz` bytes long
/// into base64 without padding.
#[inline]
pub fn base64_encoded_unpadded_len(sz: usize) -> usize {
    Base64Unpadded::encoded_len(sz)
}

/// Give the upper bound for the size of the buffer needed to contain the
/// result of decoding a base64 string `sz` bytes long, padded or not.
#[inline]
pub fn base64_decoded_max_size(sz: usize) -> usize {
    Base64::decoded_max_len(sz)
}

/// Encode a bytestring into padded base64 in constant time.
///
/// Returns the number of bytes written to the front of `out`.
///
/// # Panics
///
/// If `out` is shorter than [`base64_encoded_max_size`] of the input.
///
/// ```
/// let mut out = [0u8; 4];
/// let len = const_time_enc::base64_encode(b"Man", &mut out);
/// assert_eq!(&out[..len], b"TWFu");
/// ```
pub fn base64_encode(bytestring: &[u8], out: &mut [u8]) -> usize {
    Base64::encode(bytestring, out).len()
}

/// Encode a bytestring into base64 without padding in constant time.
///
/// # Panics
///
/// If `out` is shorter than [`base64_encoded_unpadded_len`] of the input.
pub fn base64_encode_unpadded(bytestring: &[u8], out: &mut [u8]) -> usize {
    Base64Unpadded::encode(bytestring, out).len()
}

/// Decode a padded base64 string in constant time.
///
/// Returns the number of bytes written to the front of `out`. On error
/// nothing decoded is left in `out`.
///
/// # Panics
///
/// If `out` is too short for the number of bytes the input would decode to
/// once its padding suffix is stripped. This is checked before any symbol is
/// looked up, so a misplaced `=` still counts towards it. A buffer of
/// [`base64_decoded_max_size`] of the input never panics.
///
/// ```
/// use const_time_enc::{base64_decode, ErrorKind};
///
/// let mut out = [0u8; 3];
/// assert_eq!(base64_decode(b"TWE=", &mut out), Ok(2));
/// assert_eq!(&out[..2], b"Ma");
///
/// assert_eq!(base64_decode(b"T!FU", &mut out), Err(ErrorKind::InvalidEncodingChar));
/// assert_eq!(base64_decode(b"TW==", &mut out), Err(ErrorKind::BadPadding));
/// ```
pub fn base64_decode(encoded: &[u8], out: &mut [u8]) -> Result<usize> {
    Base64::decode(encoded, out).map(<[u8]>::len)
}

/// Decode a base64 string without padding in constant time.
///
/// Any `=` in the input is rejected as [`BadPadding`](crate::ErrorKind::BadPadding).
///
/// # Panics
///
/// If `out` is shorter than [`base64_decoded_max_size`] of the input and the
/// input length is one the encoder produces.
pub fn base64_decode_unpadded(encoded: &[u8], out: &mut [u8]) -> Result<usize> {
    Base64Unpadded::decode(encoded, out).map(<[u8]>::len)
}

/// Encode a bytestring into a padded base64 [`String`].
#[cfg(feature = "alloc")]
pub fn base64_encode_string(bytestring: &[u8]) -> String {
    Base64::encode_string(bytestring)
}

/// Decode a padded base64 string into a byte vector.
#[cfg(feature = "alloc")]
pub fn base64_decode_vec(encoded: &[u8]) -> Result<Vec<u8>> {
    Base64::decode_vec(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use hex_literal::hex;

    const VECTORS: &[(&[u8], &[u8])] = &[
        (b"", b""),
        (b"f", b"Zg=="),
        (b"fo", b"Zm8="),
        (b"foo", b"Zm9v"),
        (b"foob", b"Zm9vYg=="),
        (b"fooba", b"Zm9vYmE="),
        (b"foobar", b"Zm9vYmFy"),
        (b"Hello, world!", b"SGVsbG8sIHdvcmxkIQ=="),
        (&hex!("fbff"), b"+/8="),
        (&hex!("000000"), b"AAAA"),
        (&hex!("ffffff"), b"////"),
    ];

    #[test]
    fn rfc4648_encode() {
        let mut out = [0u8; 32];

        for &(raw, encoded) in VECTORS {
            let len = base64_encode(raw, &mut out);
            assert_eq!(&out[..len], encoded);
            assert_eq!(len, base64_encoded_max_size(raw.len()));
        }
    }

    #[test]
    fn rfc4648_decode() {
        let mut out = [0u8; 32];

        for &(raw, encoded) in VECTORS {
            let len = base64_decode(encoded, &mut out).unwrap();
            assert_eq!(&out[..len], raw);
            assert!(len <= base64_decoded_max_size(encoded.len()));
        }
    }

    #[test]
    fn unpadded() {
        let mut out = [0u8; 8];

        let len = base64_encode_unpadded(b"fooba", &mut out);
        assert_eq!(&out[..len], b"Zm9vYmE");
        assert_eq!(len, base64_encoded_unpadded_len(5));

        let mut raw = [0u8; 6];
        assert_eq!(base64_decode_unpadded(b"Zm9vYmE", &mut raw), Ok(5));
        assert_eq!(&raw[..5], b"fooba");

        assert_eq!(base64_decode_unpadded(b"Zm9vY", &mut raw), Err(ErrorKind::BadPadding));
    }

    #[test]
    fn unpadded_decoder_rejects_padding() {
        for encoded in [&b"Zm9vYmE="[..], b"Zm9vYg==", b"Zg=="] {
            let mut raw = [0x55u8; 8];
            let max = base64_decoded_max_size(encoded.len());
            assert_eq!(
                base64_decode_unpadded(encoded, &mut raw[..max]),
                Err(ErrorKind::BadPadding)
            );
            assert!(raw[..max].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn encode_is_deterministic() {
        let mut first = [0u8; 8];
        let mut second = [0u8; 8];
        base64_encode(&hex!("deadbeef"), &mut first);
        base64_encode(&hex!("deadbeef"), &mut second);
        assert_eq!(first, second);
        assert_eq!(&first, b"3q2+7w==");
    }

    #[test]
    fn encode_into_exact_buffer() {
        let mut out = [0u8; 4];
        assert_eq!(base64_encode(b"M", &mut out), 4);
        assert_eq!(&out, b"TQ==");
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn owned() {
        assert_eq!(base64_encode_string(b"Man"), "TWFu");
        assert_eq!(base64_decode_vec(b"TWFu"), Ok(b"Man".to_vec()));
        assert_eq!(base64_decode_vec(b"TWF"), Err(ErrorKind::BadPadding));
    }
}
