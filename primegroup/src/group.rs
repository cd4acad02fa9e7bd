//! Group descriptor.

use crate::{CurveParams, Point, PrimeCurve, Scalar};
use core::{fmt, marker::PhantomData};
use num_bigint::BigUint;

/// Prime-order group of points on the curve `C`.
///
/// This is a zero-sized handle bundling the curve-wide constants with
/// factories for fresh scalars and points. It is `Copy` and can be passed
/// around freely; all state lives in the `'static` [`CurveParams`].
pub struct Group<C: PrimeCurve> {
    curve: PhantomData<C>,
}

impl<C: PrimeCurve> Group<C> {
    /// Handle for the group of points on `C`.
    pub const fn new() -> Self {
        Self { curve: PhantomData }
    }

    /// Name of the underlying curve.
    pub fn name(&self) -> &'static str {
        C::NAME
    }

    /// Domain parameters of the underlying curve.
    pub fn params(&self) -> &'static CurveParams {
        C::params()
    }

    /// Order `n` of the group.
    pub fn order(&self) -> &'static BigUint {
        &C::params().n
    }

    /// Number of bytes in an encoded scalar.
    pub fn scalar_len(&self) -> usize {
        C::params().scalar_len()
    }

    /// Number of bytes in an encoded point.
    pub fn point_len(&self) -> usize {
        C::params().point_len()
    }

    /// New scalar, initialized to zero.
    pub fn scalar(&self) -> Scalar<C> {
        Scalar::zero()
    }

    /// New point, initialized to the identity.
    pub fn point(&self) -> Point<C> {
        Point::identity()
    }
}

impl<C: PrimeCurve> Clone for Group<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: PrimeCurve> Copy for Group<C> {}

impl<C: PrimeCurve> Default for Group<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PrimeCurve> fmt::Debug for Group<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group<{}>", C::NAME)
    }
}

impl<C: PrimeCurve> fmt::Display for Group<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(C::NAME)
    }
}

#[cfg(test)]
mod tests {
    use crate::{NistP256, PrimeCurve};

    type Group = super::Group<NistP256>;

    #[test]
    fn p256_descriptor() {
        let group = Group::new();
        assert_eq!(alloc::format!("{group}"), "P256");
        assert_eq!(group.name(), "P256");
        assert_eq!(group.scalar_len(), 32);
        assert_eq!(group.point_len(), 65);
        assert_eq!(group.order(), &NistP256::params().n);
        assert!(group.scalar().is_zero());
        assert!(group.point().is_identity());
    }
}
