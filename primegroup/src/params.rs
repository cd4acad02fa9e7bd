//! Curve domain parameters.

use num_bigint::BigUint;

/// Domain parameters of a short Weierstrass curve `y² = x³ - 3x + b` over the
/// prime field of order `p`, whose group of points has prime order `n`.
///
/// Instances are built once per curve and only ever handed out by shared
/// reference, see [`PrimeCurve::params`](crate::PrimeCurve::params).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Prime modulus of the base field.
    pub p: BigUint,

    /// Prime order of the group.
    pub n: BigUint,

    /// Coefficient `b` in the curve equation.
    pub b: BigUint,

    /// Affine x-coordinate of the generator.
    pub gx: BigUint,

    /// Affine y-coordinate of the generator.
    pub gy: BigUint,

    /// Size of `p` in bits.
    pub bit_size: usize,
}

impl CurveParams {
    /// Number of bytes in one serialized field coordinate.
    pub fn coord_len(&self) -> usize {
        (self.bit_size + 7) / 8
    }

    /// Number of bytes in a serialized scalar.
    pub fn scalar_len(&self) -> usize {
        (bit_len(&self.n) + 7) / 8
    }

    /// Number of bytes in an uncompressed SEC1 point: one tag byte followed by
    /// both coordinates.
    pub fn point_len(&self) -> usize {
        1 + 2 * self.coord_len()
    }

    /// Maximum number of payload bytes which fit into a point's x-coordinate.
    ///
    /// The most significant 8 bits are reserved for randomness and the least
    /// significant 8 bits for the payload length.
    pub fn embed_len(&self) -> usize {
        bit_len(&self.p).saturating_sub(16) / 8
    }

    /// Evaluates the right hand side of the curve equation, `x³ - 3x + b mod p`.
    pub fn rhs(&self, x: &BigUint) -> BigUint {
        let x = x % &self.p;
        let x3 = x.modpow(&BigUint::from(3u8), &self.p);

        // `3p - 3x` keeps the subtraction non-negative for any reduced `x`
        let three_p = &self.p * 3u8;
        (x3 + &self.b + three_p - x * 3u8) % &self.p
    }
}

/// Bit length of `v` as a `usize`.
pub(crate) fn bit_len(v: &BigUint) -> usize {
    v.bits() as usize
}

/// Big-endian encoding of `v`, left-padded with zeros to `len` bytes.
///
/// `v` must fit in `len` bytes.
pub(crate) fn to_be_bytes_padded(v: &BigUint, len: usize) -> alloc::vec::Vec<u8> {
    let bytes = v.to_bytes_be();
    let mut out = alloc::vec![0u8; len.saturating_sub(bytes.len())];
    out.extend_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::{to_be_bytes_padded, CurveParams};
    use crate::{NistP256, PrimeCurve};
    use num_bigint::BigUint;

    fn params() -> &'static CurveParams {
        NistP256::params()
    }

    #[test]
    fn p256_lengths() {
        let params = params();
        assert_eq!(params.bit_size, 256);
        assert_eq!(params.coord_len(), 32);
        assert_eq!(params.scalar_len(), 32);
        assert_eq!(params.point_len(), 65);
        assert_eq!(params.embed_len(), 30);
    }

    #[test]
    fn generator_satisfies_equation() {
        let params = params();
        let lhs = (&params.gy * &params.gy) % &params.p;
        assert_eq!(lhs, params.rhs(&params.gx));
    }

    #[test]
    fn rhs_at_zero_is_b() {
        let params = params();
        assert_eq!(params.rhs(&BigUint::from(0u8)), params.b);
    }

    #[test]
    fn padding() {
        assert_eq!(to_be_bytes_padded(&BigUint::from(0x0102u16), 4), [0, 0, 1, 2]);
        assert_eq!(to_be_bytes_padded(&BigUint::from(0u8), 2), [0, 0]);
    }
}
