//! Group elements in affine coordinates.

mod embed;
mod encoding;

use crate::{Error, PrimeCurve, Result, Scalar};
use core::{
    fmt,
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_bigint::BigUint;
use num_traits::Zero;

/// Element of the prime-order group of points on the curve `C`.
///
/// Points are stored as affine coordinate pairs `(x, y)`. The identity (the
/// point at infinity) has no affine representation and is denoted by the
/// sentinel pair `(0, 0)`, which never satisfies the curve equation.
///
/// Coordinates are arbitrary-precision integers and are not required to be
/// reduced: comparison and encoding reduce them modulo `p` first, so two
/// points whose coordinates differ by multiples of `p` are equal.
///
/// Points are plain values. Cloning copies the coordinates, so mutating a
/// clone never affects the original.
pub struct Point<C: PrimeCurve> {
    x: BigUint,
    y: BigUint,
    curve: PhantomData<C>,
}

impl<C: PrimeCurve> Point<C> {
    pub(crate) fn from_coordinates_unchecked(x: BigUint, y: BigUint) -> Self {
        Self {
            x,
            y,
            curve: PhantomData,
        }
    }

    fn from_pair((x, y): (BigUint, BigUint)) -> Self {
        Self::from_coordinates_unchecked(x, y)
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self::from_coordinates_unchecked(BigUint::zero(), BigUint::zero())
    }

    /// Base point of the curve.
    pub fn generator() -> Self {
        let params = C::params();
        Self::from_coordinates_unchecked(params.gx.clone(), params.gy.clone())
    }

    /// Builds a point from affine coordinates.
    ///
    /// The coordinates are kept exactly as given; they only need to satisfy
    /// the curve equation after reduction modulo `p`. The pair `(0, 0)` is
    /// accepted as the identity.
    pub fn from_affine_coordinates(x: BigUint, y: BigUint) -> Result<Self> {
        let point = Self::from_coordinates_unchecked(x, y);
        if point.is_valid() {
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Affine coordinates reduced modulo `p`; `(0, 0)` for the identity.
    pub fn coordinates(&self) -> (BigUint, BigUint) {
        let p = &C::params().p;
        (&self.x % p, &self.y % p)
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> bool {
        let (x, y) = self.coordinates();
        x.is_zero() && y.is_zero()
    }

    /// Returns `true` if the coordinates satisfy the curve equation or denote
    /// the identity.
    pub fn is_valid(&self) -> bool {
        let (x, y) = self.coordinates();
        C::is_on_curve(&x, &y) || (x.is_zero() && y.is_zero())
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        Self::from_pair(C::add(&self.x, &self.y, &other.x, &other.y))
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `-self`, computed as `[-1] self`.
    pub fn neg(&self) -> Self {
        self.mul(&-Scalar::one())
    }

    /// Returns `[k] self`.
    pub fn mul(&self, k: &Scalar<C>) -> Self {
        Self::from_pair(C::scalar_mult(&self.x, &self.y, k.value()))
    }

    /// Returns `[k] G` where `G` is the curve's generator.
    pub fn mul_by_generator(k: &Scalar<C>) -> Self {
        Self::from_pair(C::scalar_base_mult(k.value()))
    }

    /// Returns `[k] base`, or `[k] G` when no base point is given.
    pub fn mul_base(k: &Scalar<C>, base: Option<&Self>) -> Self {
        match base {
            Some(base) => base.mul(k),
            None => Self::mul_by_generator(k),
        }
    }
}

impl<C: PrimeCurve> Clone for Point<C> {
    fn clone(&self) -> Self {
        Self::from_coordinates_unchecked(self.x.clone(), self.y.clone())
    }
}

impl<C: PrimeCurve> Default for Point<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: PrimeCurve> PartialEq for Point<C> {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates() == other.coordinates()
    }
}

impl<C: PrimeCurve> Eq for Point<C> {}

impl<C: PrimeCurve> fmt::Debug for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("curve", &C::NAME)
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<C: PrimeCurve> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

//
// Arithmetic trait impls
//

macro_rules! impl_point_binop {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident) => {
        impl<C: PrimeCurve> $op<&Point<C>> for &Point<C> {
            type Output = Point<C>;

            fn $op_fn(self, rhs: &Point<C>) -> Point<C> {
                Point::$op_fn(self, rhs)
            }
        }

        impl<C: PrimeCurve> $op<Point<C>> for &Point<C> {
            type Output = Point<C>;

            fn $op_fn(self, rhs: Point<C>) -> Point<C> {
                Point::$op_fn(self, &rhs)
            }
        }

        impl<C: PrimeCurve> $op<&Point<C>> for Point<C> {
            type Output = Point<C>;

            fn $op_fn(self, rhs: &Point<C>) -> Point<C> {
                Point::$op_fn(&self, rhs)
            }
        }

        impl<C: PrimeCurve> $op<Point<C>> for Point<C> {
            type Output = Point<C>;

            fn $op_fn(self, rhs: Point<C>) -> Point<C> {
                Point::$op_fn(&self, &rhs)
            }
        }

        impl<C: PrimeCurve> $assign<&Point<C>> for Point<C> {
            fn $assign_fn(&mut self, rhs: &Point<C>) {
                *self = Point::$op_fn(self, rhs);
            }
        }

        impl<C: PrimeCurve> $assign<Point<C>> for Point<C> {
            fn $assign_fn(&mut self, rhs: Point<C>) {
                *self = Point::$op_fn(self, &rhs);
            }
        }
    };
}

impl_point_binop!(Add, add, AddAssign, add_assign);
impl_point_binop!(Sub, sub, SubAssign, sub_assign);

impl<C: PrimeCurve> Mul<&Scalar<C>> for &Point<C> {
    type Output = Point<C>;

    fn mul(self, k: &Scalar<C>) -> Point<C> {
        Point::mul(self, k)
    }
}

impl<C: PrimeCurve> Mul<&Scalar<C>> for Point<C> {
    type Output = Point<C>;

    fn mul(self, k: &Scalar<C>) -> Point<C> {
        Point::mul(&self, k)
    }
}

impl<C: PrimeCurve> Mul<Scalar<C>> for Point<C> {
    type Output = Point<C>;

    fn mul(self, k: Scalar<C>) -> Point<C> {
        Point::mul(&self, &k)
    }
}

impl<C: PrimeCurve> MulAssign<&Scalar<C>> for Point<C> {
    fn mul_assign(&mut self, k: &Scalar<C>) {
        *self = Point::mul(self, k);
    }
}

impl<C: PrimeCurve> Neg for Point<C> {
    type Output = Point<C>;

    fn neg(self) -> Point<C> {
        Point::neg(&self)
    }
}

impl<C: PrimeCurve> Neg for &Point<C> {
    type Output = Point<C>;

    fn neg(self) -> Point<C> {
        Point::neg(self)
    }
}

impl<C: PrimeCurve> Sum for Point<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, p| acc.add(&p))
    }
}

impl<'a, C: PrimeCurve> Sum<&'a Point<C>> for Point<C> {
    fn sum<I: Iterator<Item = &'a Point<C>>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, p| acc.add(p))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, NistP256, PrimeCurve};
    use num_bigint::BigUint;

    type Point = super::Point<NistP256>;
    type Scalar = crate::Scalar<NistP256>;

    #[test]
    fn generator_and_identity_are_valid() {
        assert!(Point::generator().is_valid());
        assert!(Point::identity().is_valid());
        assert!(Point::identity().is_identity());
        assert!(!Point::generator().is_identity());
        assert_eq!(Point::default(), Point::identity());
    }

    #[test]
    fn unreduced_coordinates_compare_equal() {
        let params = NistP256::params();
        let shifted = Point::from_affine_coordinates(&params.gx + &params.p, params.gy.clone())
            .expect("valid after reduction");
        assert_eq!(shifted, Point::generator());
        assert_eq!(shifted.coordinates(), Point::generator().coordinates());
    }

    #[test]
    fn rejects_off_curve_coordinates() {
        let params = NistP256::params();
        assert_eq!(
            Point::from_affine_coordinates(params.gx.clone(), &params.gy + 1u8),
            Err(Error::InvalidPoint)
        );
        assert_eq!(
            Point::from_affine_coordinates(BigUint::from(0u8), BigUint::from(0u8)),
            Ok(Point::identity())
        );
    }

    #[test]
    fn multiplication_by_small_scalars() {
        let g = Point::generator();
        assert_eq!(g.mul(&Scalar::one()), g);
        assert_eq!(g.mul(&Scalar::zero()), Point::identity());
        assert_eq!(Point::mul_by_generator(&Scalar::from_u64(2)), &g + &g);
        assert_eq!(Point::mul_base(&Scalar::from_u64(3), None), &(&g + &g) + &g);
        assert_eq!(
            Point::mul_base(&Scalar::from_u64(3), Some(&g)),
            Point::mul_by_generator(&Scalar::from_u64(3))
        );
    }

    #[test]
    fn negation() {
        let g = Point::generator();
        let params = NistP256::params();
        let (x, y) = (-&g).coordinates();
        assert_eq!(x, params.gx);
        assert_eq!(y, &params.p - &params.gy);
        assert_eq!(-Point::identity(), Point::identity());
        assert_eq!(&g - &g, Point::identity());
    }

    #[test]
    fn clone_is_independent() {
        let g = Point::generator();
        let mut h = g.clone();
        h += &g;
        assert_eq!(g, Point::generator());
        assert_ne!(h, g);
    }

    #[test]
    fn display() {
        assert_eq!(alloc::format!("{}", Point::identity()), "(0,0)");
    }

    #[test]
    fn sum() {
        let g = Point::generator();
        let points = [g.clone(), g.clone(), g];
        let total: Point = points.iter().sum();
        assert_eq!(total, Point::mul_by_generator(&Scalar::from_u64(3)));
    }
}
