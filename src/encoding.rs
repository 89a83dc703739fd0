//! Encoding trait implemented for every alphabet.

use core::str;

use crate::{
    algorithms::{self, decode, encode},
    alphabet::Alphabet,
    errors::Result,
};

#[cfg(feature = "alloc")]
use {
    alloc::{string::String, vec::Vec},
    zeroize::Zeroizing,
};

/// Core encoder/decoder functions for a particular alphabet.
pub trait Encoding: Alphabet {
    /// Decode the provided input into the front of `dst`, returning a slice
    /// containing the decoded data.
    ///
    /// On error nothing decoded is left behind in `dst`.
    ///
    /// # Panics
    ///
    /// If `dst` is too short for the number of bytes the input would decode
    /// to once any padding suffix is stripped. This is checked before any
    /// symbol is looked up, so a misplaced `=` still counts towards it. A
    /// buffer of [`Encoding::decoded_max_len`] of the input never panics.
    fn decode(src: impl AsRef<[u8]>, dst: &mut [u8]) -> Result<&[u8]>;

    /// Decode the provided input into a byte vector.
    #[cfg(feature = "alloc")]
    fn decode_vec(input: impl AsRef<[u8]>) -> Result<Vec<u8>>;

    /// Encode the input byte slice.
    ///
    /// Writes the result into the front of `dst`, returning it as a string.
    ///
    /// # Panics
    ///
    /// If `dst` is shorter than [`Encoding::encoded_len`] of the input.
    fn encode<'a>(src: &[u8], dst: &'a mut [u8]) -> &'a str;

    /// Encode the input byte slice into a [`String`].
    #[cfg(feature = "alloc")]
    fn encode_string(input: &[u8]) -> String;

    /// Get the exact length of the encoding of `len` bytes.
    fn encoded_len(len: usize) -> usize;

    /// Get an upper bound on the length of the data decoded from `len`
    /// symbols.
    fn decoded_max_len(len: usize) -> usize;
}

impl<T: Alphabet> Encoding for T {
    fn decode(src: impl AsRef<[u8]>, dst: &mut [u8]) -> Result<&[u8]> {
        let len = decode::decode::<T>(src.as_ref(), dst)?;
        Ok(&dst[..len])
    }

    #[cfg(feature = "alloc")]
    fn decode_vec(input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        let input = input.as_ref();
        let mut output = Zeroizing::new(vec![0u8; Self::decoded_max_len(input.len())]);
        let len = Self::decode(input, &mut output)?.len();

        output.truncate(len);
        Ok(core::mem::take(&mut *output))
    }

    fn encode<'a>(src: &[u8], dst: &'a mut [u8]) -> &'a str {
        let len = encode::encode::<T>(src, dst);
        let dst = &dst[..len];
        debug_assert!(str::from_utf8(dst).is_ok());

        // SAFETY: `dst` is fully written and contains only valid one-byte UTF-8 chars
        #[allow(unsafe_code)]
        unsafe {
            str::from_utf8_unchecked(dst)
        }
    }

    #[cfg(feature = "alloc")]
    fn encode_string(input: &[u8]) -> String {
        let elen = Self::encoded_len(input.len());
        let mut dst = vec![0u8; elen];
        let len = Self::encode(input, &mut dst).len();

        debug_assert_eq!(elen, len);
        debug_assert!(str::from_utf8(&dst).is_ok());

        // SAFETY: `dst` is fully written and contains only valid one-byte UTF-8 chars
        #[allow(unsafe_code)]
        unsafe {
            String::from_utf8_unchecked(dst)
        }
    }

    fn encoded_len(len: usize) -> usize {
        algorithms::encoded_len::<T>(len)
    }

    fn decoded_max_len(len: usize) -> usize {
        algorithms::decoded_max_len::<T>(len)
    }
}
