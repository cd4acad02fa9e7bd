//! Uncompressed SEC1 (ANSI X9.62) point encoding.
//!
//! ```text
//! 0x04 || x || y
//! ```
//!
//! where both coordinates are big-endian and zero-padded to the byte length
//! of the field. The identity encodes as a tag followed by an all-zero body.

use super::Point;
use crate::{params::to_be_bytes_padded, Error, PrimeCurve, Result};
use alloc::vec::Vec;
use num_bigint::BigUint;

#[cfg(feature = "std")]
use std::io;

#[cfg(feature = "serde")]
use serdect::serde::{de, ser, Deserialize, Serialize};

/// SEC1 tag byte of an uncompressed point.
const UNCOMPRESSED_TAG: u8 = 0x04;

impl<C: PrimeCurve> Point<C> {
    /// Length in bytes of an encoded point.
    pub fn encoded_len() -> usize {
        C::params().point_len()
    }

    /// Encodes this point as `0x04 || x || y` with both coordinates reduced
    /// modulo `p`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let coord_len = C::params().coord_len();
        let (x, y) = self.coordinates();

        let mut out = Vec::with_capacity(Self::encoded_len());
        out.push(UNCOMPRESSED_TAG);
        out.extend_from_slice(&to_be_bytes_padded(&x, coord_len));
        out.extend_from_slice(&to_be_bytes_padded(&y, coord_len));
        out
    }

    /// Decodes a point produced by [`Point::to_bytes`].
    ///
    /// An all-zero body decodes to the identity without an on-curve check.
    /// Any other body must carry the uncompressed tag and coordinates of a
    /// point on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let expected = Self::encoded_len();
        if bytes.len() != expected {
            return Err(Error::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }

        // Fold over the whole body so the identity check does not return early.
        let body = &bytes[1..];
        let acc = body.iter().fold(0u8, |acc, b| acc | b);
        if acc == 0 {
            return Ok(Self::identity());
        }

        if bytes[0] != UNCOMPRESSED_TAG {
            return Err(Error::InvalidEncoding);
        }

        let (x, y) = body.split_at(C::params().coord_len());
        let point =
            Self::from_coordinates_unchecked(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y));

        // Coordinates must be canonical field elements as well as on the curve.
        let p = &C::params().p;
        if &point.x >= p || &point.y >= p || !point.is_valid() {
            return Err(Error::InvalidEncoding);
        }

        Ok(point)
    }

    /// Writes the encoding of this point to `writer`, returning the number of
    /// bytes written.
    #[cfg(feature = "std")]
    pub fn write_to(&self, mut writer: impl io::Write) -> io::Result<usize> {
        let bytes = self.to_bytes();
        writer.write_all(&bytes)?;
        Ok(bytes.len())
    }

    /// Reads exactly [`Point::encoded_len`] bytes from `reader` and decodes
    /// them.
    #[cfg(feature = "std")]
    pub fn read_from(mut reader: impl io::Read) -> io::Result<Self> {
        let mut bytes = alloc::vec![0u8; Self::encoded_len()];
        reader.read_exact(&mut bytes)?;
        Self::from_bytes(&bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<C: PrimeCurve> TryFrom<&[u8]> for Point<C> {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

//
// serde support
//

#[cfg(feature = "serde")]
impl<C: PrimeCurve> Serialize for Point<C> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::slice::serialize_hex_upper_or_bin(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C: PrimeCurve> Deserialize<'de> for Point<C> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Self::from_bytes(&bytes).map_err(de::Error::custom)
    }
}
