//! Error types.

use core::fmt;

/// Result type with the `const-time-enc` crate's [`ErrorKind`] type.
pub type Result<T> = core::result::Result<T, ErrorKind>;

/// Errors that can be returned by decoding operations.
///
/// Encoding never fails, so every variant describes a way in which an
/// encoded input is malformed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// An encoded string contained a byte value which is neither part of the
    /// encoding alphabet nor the `=` padding character.
    InvalidEncodingChar,

    /// The padding is inconsistent with the length of the input: wrong
    /// number of `=` characters, `=` outside of the final group, an input
    /// length no encoder can produce, or nonzero bits trailing the last
    /// decoded byte.
    BadPadding,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidEncodingChar => f.write_str("invalid encoding character"),
            ErrorKind::BadPadding => f.write_str("bad padding"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ErrorKind {}

#[cfg(test)]
mod tests {
    use super::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn display() {
        assert_eq!(
            ErrorKind::InvalidEncodingChar.to_string(),
            "invalid encoding character"
        );
        assert_eq!(ErrorKind::BadPadding.to_string(), "bad padding");
    }
}
