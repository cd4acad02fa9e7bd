//! Error type

use core::fmt::{self, Display};

/// Result type with the `primegroup` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Group operation errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Decoded coordinates are neither on the curve nor the identity encoding.
    InvalidEncoding,

    /// The length tag of an embedded payload exceeds the embedding capacity.
    InvalidEmbeddedLength,

    /// A fixed-length input had the wrong number of bytes.
    InvalidLength {
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },

    /// Affine coordinates which do not describe a point of the group.
    InvalidPoint,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEncoding => f.write_str("invalid point encoding"),
            Error::InvalidEmbeddedLength => f.write_str("invalid embedded data length"),
            Error::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected} bytes, got {actual}")
            }
            Error::InvalidPoint => f.write_str("coordinates are not a point of the group"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
