//! Embedding of byte strings into points.
//!
//! A payload of up to [`Point::embed_len`] bytes is written into the low
//! bytes of a random x-coordinate: the least significant byte holds the
//! payload length and the payload sits immediately above it. The remaining
//! high bits are random, so retrying with fresh randomness eventually yields
//! an x-coordinate on the curve.
//!
//! Roughly half of all field elements are quadratic residues, so the number
//! of candidates drawn per embedding is geometrically distributed with mean
//! about 2. The loop is intentionally uncapped: any fixed cap could be hit by
//! a legitimate (if unlucky) keystream.

use super::Point;
use crate::{params::to_be_bytes_padded, scalar::random_bits, Error, PrimeCurve, Result};
use alloc::vec::Vec;
use elliptic_curve::rand_core::CryptoRngCore;
use num_bigint::BigUint;

impl<C: PrimeCurve> Point<C> {
    /// Maximum number of bytes [`Point::embed`] can store in one point.
    pub fn embed_len() -> usize {
        C::params().embed_len()
    }

    /// Picks a uniformly random point using `rng` as the keystream.
    pub fn pick(rng: &mut impl CryptoRngCore) -> Self {
        Self::embed(&[], rng)
    }

    /// Returns a random point whose x-coordinate carries `data`.
    ///
    /// `data` is truncated to [`Point::embed_len`] bytes. An empty payload
    /// leaves the whole x-coordinate random, as for [`Point::pick`].
    pub fn embed(data: &[u8], rng: &mut impl CryptoRngCore) -> Self {
        let params = C::params();
        let l = params.coord_len();
        let dl = data.len().min(params.embed_len());

        loop {
            let mut b = random_bits(params.bit_size, rng);
            if !data.is_empty() {
                // embed_len() < 256, so the length fits in the tag byte
                b[l - 1] = dl as u8;
                b[l - dl - 1..l - 1].copy_from_slice(&data[..dl]);
            }

            if let Some(point) = Self::from_x(BigUint::from_bytes_be(&b), rng) {
                return point;
            }
        }
    }

    /// Attempts to complete `x` to a point on the curve, choosing the sign of
    /// `y` from the high bit of one extra keystream byte.
    ///
    /// Returns `None` if `x` is not a valid coordinate or no `y` exists.
    fn from_x(x: BigUint, rng: &mut impl CryptoRngCore) -> Option<Self> {
        let params = C::params();
        if x >= params.p {
            return None;
        }

        let y2 = params.rhs(&x);
        let y = C::sqrt(&y2);
        if (&y * &y) % &params.p != y2 {
            return None;
        }

        let mut sign = [0u8; 1];
        rng.fill_bytes(&mut sign);
        let y = if sign[0] & 0x80 != 0 {
            (&params.p - y) % &params.p
        } else {
            y
        };

        Some(Self::from_coordinates_unchecked(x, y))
    }

    /// Extracts the payload stored by [`Point::embed`].
    ///
    /// Fails with [`Error::InvalidEmbeddedLength`] if the length tag is larger
    /// than [`Point::embed_len`], which is the case for most points not
    /// produced by `embed`.
    pub fn data(&self) -> Result<Vec<u8>> {
        let params = C::params();
        let l = params.coord_len();
        let (x, _) = self.coordinates();
        let b = to_be_bytes_padded(&x, l);

        let dl = usize::from(b[l - 1]);
        if dl > params.embed_len() {
            return Err(Error::InvalidEmbeddedLength);
        }

        Ok(b[l - dl - 1..l - 1].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, NistP256, PrimeCurve};
    use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};

    type Point = super::Point<NistP256>;

    fn keystream() -> ChaCha20Rng {
        ChaCha20Rng::from_seed([0x42; 32])
    }

    #[test]
    fn embed_len() {
        assert_eq!(Point::embed_len(), 30);
    }

    #[test]
    fn single_byte_round_trip() {
        let point = Point::embed(&[0xab], &mut keystream());
        assert!(point.is_valid());
        assert_eq!(point.data(), Ok(alloc::vec![0xab]));
    }

    #[test]
    fn empty_payload_is_random() {
        let a = Point::embed(&[], &mut keystream());
        let b = Point::pick(&mut keystream());
        assert_eq!(a, b);
        assert!(a.is_valid());
    }

    #[test]
    fn long_payload_is_truncated() {
        let data: alloc::vec::Vec<u8> = (0u8..40).collect();
        let point = Point::embed(&data, &mut keystream());
        assert_eq!(point.data(), Ok(data[..30].to_vec()));
    }

    #[test]
    fn same_keystream_same_point() {
        let a = Point::embed(b"hello", &mut keystream());
        let b = Point::embed(b"hello", &mut keystream());
        assert_eq!(a, b);
    }

    #[test]
    fn x_above_modulus_is_rejected() {
        let p = &NistP256::params().p;
        let x = p + 1u8;
        assert!(Point::from_x(x, &mut keystream()).is_none());
    }

    #[test]
    fn oversized_tag_is_rejected() {
        // The generator's x-coordinate ends in 0x96 = 150 > 30
        assert_eq!(Point::generator().data(), Err(Error::InvalidEmbeddedLength));
    }

    #[test]
    fn zero_tag_yields_empty_payload() {
        assert_eq!(Point::identity().data(), Ok(alloc::vec![]));
    }
}
