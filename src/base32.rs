//! Constant-time Base32 encoding and decoding (RFC 4648 upper case alphabet).

use crate::{
    alphabet::{Base32, Base32Unpadded},
    encoding::Encoding,
    errors::Result,
};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// Give the size of the buffer needed to contain the result of encoding a
/// bytestring `sz` bytes long into padded base32.
///
/// This is the exact length of the output of [`base32_encode`].
#[inline]
pub fn base32_encoded_max_size(sz: usize) -> usize {
    Base32::encoded_len(sz)
}

/// Give the length of the result of encoding a bytestring `sz` bytes long
/// into base32 without padding.
#[inline]
pub fn base32_encoded_unpadded_len(sz: usize) -> usize {
    Base32Unpadded::encoded_len(sz)
}

/// Give the upper bound for the size of the buffer needed to contain the
/// result of decoding a base32 string `sz` bytes long, padded or not.
#[inline]
pub fn base32_decoded_max_size(sz: usize) -> usize {
    Base32::decoded_max_len(sz)
}

/// Encode a bytestring into padded base32 in constant time.
///
/// # Panics
///
/// If `out` is shorter than [`base32_encoded_max_size`] of the input.
///
/// ```
/// let mut out = [0u8; 8];
/// let len = const_time_enc::base32_encode(b"foo", &mut out);
/// assert_eq!(&out[..len], b"MZXW6===");
/// ```
pub fn base32_encode(bytestring: &[u8], out: &mut [u8]) -> usize {
    Base32::encode(bytestring, out).len()
}

/// Encode a bytestring into base32 without padding in constant time.
///
/// # Panics
///
/// If `out` is shorter than [`base32_encoded_unpadded_len`] of the input.
pub fn base32_encode_unpadded(bytestring: &[u8], out: &mut [u8]) -> usize {
    Base32Unpadded::encode(bytestring, out).len()
}

/// Decode a padded base32 string in constant time.
///
/// Returns the number of bytes written to the front of `out`. On error
/// nothing decoded is left in `out`.
///
/// # Panics
///
/// If `out` is too short for the number of bytes the input would decode to
/// once its padding suffix is stripped. This is checked before any symbol is
/// looked up, so a misplaced `=` still counts towards it. A buffer of
/// [`base32_decoded_max_size`] of the input never panics.
pub fn base32_decode(encoded: &[u8], out: &mut [u8]) -> Result<usize> {
    Base32::decode(encoded, out).map(<[u8]>::len)
}

/// Decode a base32 string without padding in constant time.
///
/// Any `=` in the input is rejected as [`BadPadding`](crate::ErrorKind::BadPadding).
///
/// # Panics
///
/// If `out` is shorter than [`base32_decoded_max_size`] of the input and the
/// input length is one the encoder produces.
pub fn base32_decode_unpadded(encoded: &[u8], out: &mut [u8]) -> Result<usize> {
    Base32Unpadded::decode(encoded, out).map(<[u8]>::len)
}

/// Encode a bytestring into a padded base32 [`String`].
#[cfg(feature = "alloc")]
pub fn base32_encode_string(bytestring: &[u8]) -> String {
    Base32::encode_string(bytestring)
}

/// Decode a padded base32 string into a byte vector.
#[cfg(feature = "alloc")]
pub fn base32_decode_vec(encoded: &[u8]) -> Result<Vec<u8>> {
    Base32::decode_vec(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use hex_literal::hex;

    const VECTORS: &[(&[u8], &[u8])] = &[
        (b"", b""),
        (b"f", b"MY======"),
        (b"fo", b"MZXQ===="),
        (b"foo", b"MZXW6==="),
        (b"foob", b"MZXW6YQ="),
        (b"fooba", b"MZXW6YTB"),
        (b"foobar", b"MZXW6YTBOI======"),
        (b"Hello, World!", b"JBSWY3DPFQQFO33SNRSCC==="),
        (&hex!("00"), b"AA======"),
        (&hex!("010203050911214181"), b"AEBAGBIJCEQUDAI="),
    ];

    #[test]
    fn rfc4648_encode() {
        let mut out = [0u8; 32];

        for &(raw, encoded) in VECTORS {
            let len = base32_encode(raw, &mut out);
            assert_eq!(&out[..len], encoded);
            assert_eq!(len, base32_encoded_max_size(raw.len()));
        }
    }

    #[test]
    fn rfc4648_decode() {
        let mut out = [0u8; 32];

        for &(raw, encoded) in VECTORS {
            let len = base32_decode(encoded, &mut out).unwrap();
            assert_eq!(&out[..len], raw);
            assert!(len <= base32_decoded_max_size(encoded.len()));
        }
    }

    #[test]
    fn unpadded() {
        let mut out = [0u8; 16];

        let len = base32_encode_unpadded(b"foobar", &mut out);
        assert_eq!(&out[..len], b"MZXW6YTBOI");
        assert_eq!(len, base32_encoded_unpadded_len(6));

        let mut raw = [0u8; 6];
        assert_eq!(base32_decode_unpadded(b"MZXW6YTBOI", &mut raw), Ok(6));
        assert_eq!(&raw, b"foobar");

        // 1, 3 and 6 trailing symbols are never produced by the encoder
        for bad in [&b"MZXW6YTBO"[..], b"MZXW6YTBOIX", b"MZXW6YTBOIXXXX"] {
            assert_eq!(base32_decode_unpadded(bad, &mut out), Err(ErrorKind::BadPadding));
        }
    }

    #[test]
    fn ghost_bits() {
        let mut out = [0u8; 5];

        // One set bit beyond each partial group's last byte
        for bad in [&b"MZ======"[..], b"MZXR====", b"MZXW7===", b"MZXW6YR="] {
            assert_eq!(base32_decode(bad, &mut out), Err(ErrorKind::BadPadding));
        }
    }

    #[test]
    fn invalid_character() {
        let mut out = [0u8; 5];

        for bad in [&b"MZXW6YT1"[..], b"MZXW6YT8", b"MZXW6yTB", b"MZ-W6YTB"] {
            assert_eq!(base32_decode(bad, &mut out), Err(ErrorKind::InvalidEncodingChar));
        }
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn owned() {
        assert_eq!(base32_encode_string(b"foob"), "MZXW6YQ=");
        assert_eq!(base32_decode_vec(b"MZXW6YQ="), Ok(b"foob".to_vec()));
        assert_eq!(base32_decode_vec(b"MZXW6YQ"), Err(ErrorKind::BadPadding));
    }
}
