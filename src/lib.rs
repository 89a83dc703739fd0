#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! # Usage
//!
//! ## Caller-provided buffers
//!
//! ```
//! use const_time_enc::{base64_decode, base64_decoded_max_size, base64_encode, base64_encoded_max_size};
//!
//! let secret = b"hunter2";
//!
//! let mut encoded = [0u8; 12];
//! assert!(encoded.len() >= base64_encoded_max_size(secret.len()));
//! let len = base64_encode(secret, &mut encoded);
//! assert_eq!(&encoded[..len], b"aHVudGVyMg==");
//!
//! let mut decoded = [0u8; 9];
//! assert!(decoded.len() >= base64_decoded_max_size(len));
//! let len = base64_decode(&encoded[..len], &mut decoded)?;
//! assert_eq!(&decoded[..len], secret);
//! # Ok::<(), const_time_enc::ErrorKind>(())
//! ```
//!
//! ## Trait API
//!
//! Every alphabet type implements [`Encoding`]:
//!
//! ```
//! use const_time_enc::{Base32, Base32Unpadded, Encoding};
//!
//! let mut buf = [0u8; 16];
//! assert_eq!(Base32::encode(b"foobar", &mut buf), "MZXW6YTBOI======");
//! assert_eq!(Base32Unpadded::encode(b"foobar", &mut buf), "MZXW6YTBOI");
//! ```

#[cfg(any(feature = "alloc", test))]
#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod algorithms;
pub mod alphabet;
pub mod base32;
pub mod base64;
pub mod errors;

mod encoding;

pub use crate::{
    alphabet::{Alphabet, Base32, Base32Unpadded, Base64, Base64Unpadded},
    base32::{
        base32_decode, base32_decode_unpadded, base32_decoded_max_size, base32_encode,
        base32_encode_unpadded, base32_encoded_max_size, base32_encoded_unpadded_len,
    },
    base64::{
        base64_decode, base64_decode_unpadded, base64_decoded_max_size, base64_encode,
        base64_encode_unpadded, base64_encoded_max_size, base64_encoded_unpadded_len,
    },
    encoding::Encoding,
    errors::{ErrorKind, Result},
};

#[cfg(feature = "alloc")]
pub use crate::{
    base32::{base32_decode_vec, base32_encode_string},
    base64::{base64_decode_vec, base64_encode_string},
};
