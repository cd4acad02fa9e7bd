//! Curve descriptors.
//!
//! A curve is described by a zero-sized marker type implementing
//! [`PrimeCurve`]: it bundles the curve's [`CurveParams`], its square root
//! routine and the [`CurveArithmetic`] provider performing point arithmetic.
//! The marker is the type parameter of [`Point`](crate::Point),
//! [`Scalar`](crate::Scalar) and [`Group`](crate::Group), so the curve is
//! chosen once and every operation is statically dispatched.

mod p256;

pub use self::p256::NistP256;

use crate::CurveParams;
use core::fmt::Debug;
use num_bigint::BigUint;

/// Affine point arithmetic over `BigUint` coordinates.
///
/// Implementations follow the usual short Weierstrass semantics. The pair
/// `(0, 0)` denotes the point at infinity both on input and on output.
/// Input coordinates may be unreduced; implementations reduce them modulo `p`.
pub trait CurveArithmetic {
    /// Returns `(x1, y1) + (x2, y2)`.
    fn add(x1: &BigUint, y1: &BigUint, x2: &BigUint, y2: &BigUint) -> (BigUint, BigUint);

    /// Returns `[k] (x, y)`.
    fn scalar_mult(x: &BigUint, y: &BigUint, k: &BigUint) -> (BigUint, BigUint);

    /// Returns `[k] G` where `G` is the curve's generator.
    fn scalar_base_mult(k: &BigUint) -> (BigUint, BigUint);

    /// Returns `true` if the affine coordinates satisfy the curve equation.
    ///
    /// The point at infinity has no affine coordinates, so `(0, 0)` is never
    /// on the curve according to this check.
    fn is_on_curve(x: &BigUint, y: &BigUint) -> bool;
}

/// Elliptic curve of prime order with `a = -3`.
pub trait PrimeCurve:
    CurveArithmetic + Copy + Clone + Debug + Default + Eq + Send + Sync + 'static
{
    /// Name of the curve, e.g. `"P256"`.
    const NAME: &'static str;

    /// Domain parameters, built once and shared for the life of the process.
    fn params() -> &'static CurveParams;

    /// Computes a candidate square root of `c` modulo `p`.
    ///
    /// No residuosity check is performed. If `c` is not a quadratic residue
    /// the result is some value `r` with `r² ≢ c (mod p)`, so callers must
    /// square the result and compare before using it.
    fn sqrt(c: &BigUint) -> BigUint;
}
