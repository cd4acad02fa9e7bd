//! NIST P-256 curve descriptor.

use super::{CurveArithmetic, PrimeCurve};
use crate::{params::to_be_bytes_padded, CurveParams};
use alloc::boxed::Box;
use elliptic_curve::{
    ff::PrimeField,
    sec1::{FromEncodedPoint, ToEncodedPoint},
};
use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::race::OnceBox;
use p256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint};

/// p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1
const MODULUS: [u8; 32] = hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

/// n = FFFFFFFF 00000000 FFFFFFFF FFFFFFFF BCE6FAAD A7179E84 F3B9CAC2 FC632551
const ORDER: [u8; 32] = hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

/// b = 0x5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B
const EQUATION_B: [u8; 32] =
    hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");

const GENERATOR_X: [u8; 32] =
    hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");

const GENERATOR_Y: [u8; 32] =
    hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");

/// Byte length of a P-256 field element or scalar.
const FIELD_BYTES: usize = 32;

/// NIST P-256 elliptic curve.
///
/// This curve is also known as prime256v1 (ANSI X9.62) and secp256r1 (SECG).
/// Its equation is `y² = x³ - 3x + b` over a ~256-bit prime field.
///
/// Point arithmetic is delegated to the [`p256`] crate; this descriptor
/// converts between its field representation and `BigUint` coordinates.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct NistP256;

impl PrimeCurve for NistP256 {
    const NAME: &'static str = "P256";

    fn params() -> &'static CurveParams {
        static PARAMS: OnceBox<CurveParams> = OnceBox::new();

        PARAMS.get_or_init(|| {
            Box::new(CurveParams {
                p: BigUint::from_bytes_be(&MODULUS),
                n: BigUint::from_bytes_be(&ORDER),
                b: BigUint::from_bytes_be(&EQUATION_B),
                gx: BigUint::from_bytes_be(&GENERATOR_X),
                gy: BigUint::from_bytes_be(&GENERATOR_Y),
                bit_size: 256,
            })
        })
    }

    fn sqrt(c: &BigUint) -> BigUint {
        sqrt(c, &Self::params().p)
    }
}

impl CurveArithmetic for NistP256 {
    fn add(x1: &BigUint, y1: &BigUint, x2: &BigUint, y2: &BigUint) -> (BigUint, BigUint) {
        from_projective(to_projective(x1, y1) + to_projective(x2, y2))
    }

    fn scalar_mult(x: &BigUint, y: &BigUint, k: &BigUint) -> (BigUint, BigUint) {
        from_projective(to_projective(x, y) * to_scalar(k))
    }

    fn scalar_base_mult(k: &BigUint) -> (BigUint, BigUint) {
        from_projective(ProjectivePoint::GENERATOR * to_scalar(k))
    }

    fn is_on_curve(x: &BigUint, y: &BigUint) -> bool {
        to_affine(x, y).is_some()
    }
}

/// Computes `c^((p + 1) / 4) mod p`, a square root of `c` whenever one exists.
///
/// For P-256, p ≡ 3 mod 4, so by Euler's criterion a residue `c` satisfies
/// `c^((p - 1) / 2) ≡ 1`, hence `(c^((p + 1) / 4))² ≡ c`. The exponent
///
/// ```text
/// (p + 1) / 4 = 2^254 - 2^222 + 2^190 + 2^94
/// ```
///
/// is assembled from windows of ones `c^(2^k - 1)` for k = 2, 4, 8, 16, 32,
/// from "Mathematical routines for the NIST prime elliptic curves" (2010).
fn sqrt(c: &BigUint, p: &BigUint) -> BigUint {
    let c = c % p;

    let t11 = mul(&c, &mul(&c, &c, p), p);
    let t1111 = mul(&sqn(&t11, 2, p), &t11, p);
    let t11111111 = mul(&sqn(&t1111, 4, p), &t1111, p);
    let x16 = mul(&sqn(&t11111111, 8, p), &t11111111, p);
    let x32 = mul(&sqn(&x16, 16, p), &x16, p);

    // c^(2^64 - 2^32 + 1)
    let r = mul(&sqn(&x32, 32, p), &c, p);

    // c^(2^160 - 2^128 + 2^96 + 1)
    let r = mul(&sqn(&r, 96, p), &c, p);

    sqn(&r, 94, p)
}

/// Returns `a * b mod p`.
fn mul(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

/// Returns `x^(2^n) mod p`.
fn sqn(x: &BigUint, n: usize, p: &BigUint) -> BigUint {
    (0..n).fold(x.clone(), |acc, _| (&acc * &acc) % p)
}

fn field_bytes(v: &BigUint, modulus: &BigUint) -> FieldBytes {
    FieldBytes::clone_from_slice(&to_be_bytes_padded(&(v % modulus), FIELD_BYTES))
}

fn to_affine(x: &BigUint, y: &BigUint) -> Option<AffinePoint> {
    let p = &NistP256::params().p;
    let encoded = EncodedPoint::from_affine_coordinates(
        &field_bytes(x, p),
        &field_bytes(y, p),
        false,
    );
    AffinePoint::from_encoded_point(&encoded).into()
}

fn to_projective(x: &BigUint, y: &BigUint) -> ProjectivePoint {
    let p = &NistP256::params().p;
    if (x % p).is_zero() && (y % p).is_zero() {
        return ProjectivePoint::IDENTITY;
    }

    // `Point` only hands valid coordinates to the provider
    to_affine(x, y)
        .map(ProjectivePoint::from)
        .unwrap_or(ProjectivePoint::IDENTITY)
}

fn from_projective(point: ProjectivePoint) -> (BigUint, BigUint) {
    let encoded = point.to_affine().to_encoded_point(false);
    match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => (BigUint::from_bytes_be(x), BigUint::from_bytes_be(y)),
        _ => (BigUint::zero(), BigUint::zero()),
    }
}

fn to_scalar(k: &BigUint) -> p256::Scalar {
    let n = &NistP256::params().n;
    Option::from(p256::Scalar::from_repr(field_bytes(k, n))).unwrap_or_default()
}
