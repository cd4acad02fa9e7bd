//! Scalars: integers modulo the group order.

use crate::{
    params::{bit_len, to_be_bytes_padded},
    Error, PrimeCurve, Result,
};
use alloc::vec::Vec;
use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use elliptic_curve::rand_core::CryptoRngCore;
use num_bigint::BigUint;
use num_traits::{One, Zero};

#[cfg(feature = "serde")]
use serdect::serde::{de, ser, Deserialize, Serialize};

/// Integer modulo the order `n` of the group described by `C`.
///
/// Every constructor and operation reduces its result into `[0, n)`, so any
/// integer input is accepted and no arithmetic operation can fail.
pub struct Scalar<C: PrimeCurve> {
    value: BigUint,
    curve: PhantomData<C>,
}

impl<C: PrimeCurve> Scalar<C> {
    fn reduced(value: BigUint) -> Self {
        Self {
            value: value % &C::params().n,
            curve: PhantomData,
        }
    }

    /// Additive identity.
    pub fn zero() -> Self {
        Self {
            value: BigUint::zero(),
            curve: PhantomData,
        }
    }

    /// Multiplicative identity.
    pub fn one() -> Self {
        Self::reduced(BigUint::one())
    }

    /// Scalar from an unsigned integer, reduced modulo `n`.
    pub fn from_u64(v: u64) -> Self {
        Self::reduced(BigUint::from(v))
    }

    /// Scalar from a signed integer; negative values map to `n - |v|`.
    pub fn from_i64(v: i64) -> Self {
        let magnitude = Self::from_u64(v.unsigned_abs());
        if v < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Scalar from an arbitrary-precision integer, reduced modulo `n`.
    pub fn from_biguint(v: &BigUint) -> Self {
        Self::reduced(v.clone())
    }

    /// Interprets `bytes` as a big-endian unsigned integer of any length and
    /// reduces it modulo `n`.
    pub fn from_bytes_reduced(bytes: &[u8]) -> Self {
        Self::reduced(BigUint::from_bytes_be(bytes))
    }

    /// Decodes a big-endian scalar of exactly [`Group::scalar_len`] bytes,
    /// reducing it modulo `n`.
    ///
    /// [`Group::scalar_len`]: crate::Group::scalar_len
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let expected = C::params().scalar_len();
        if bytes.len() != expected {
            return Err(Error::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Self::from_bytes_reduced(bytes))
    }

    /// Canonical big-endian encoding, zero-padded to the byte length of `n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        to_be_bytes_padded(&self.value, C::params().scalar_len())
    }

    /// Uniformly random scalar drawn from `rng` by rejection sampling.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        let n = &C::params().n;
        let bits = bit_len(n);
        loop {
            let candidate = BigUint::from_bytes_be(&random_bits(bits, rng));
            if &candidate < n {
                return Self {
                    value: candidate,
                    curve: PhantomData,
                };
            }
        }
    }

    /// Underlying integer in `[0, n)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns `self + rhs mod n`.
    pub fn add(&self, rhs: &Self) -> Self {
        Self::reduced(&self.value + &rhs.value)
    }

    /// Returns `self - rhs mod n`.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }

    /// Returns `self * rhs mod n`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::reduced(&self.value * &rhs.value)
    }

    /// Returns `-self mod n`.
    pub fn neg(&self) -> Self {
        Self::reduced(&C::params().n - &self.value)
    }

    /// Returns the multiplicative inverse, or `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        // n is prime: self^(n - 2) * self ≡ 1 mod n
        let n = &C::params().n;
        Some(Self {
            value: self.value.modpow(&(n - 2u8), n),
            curve: PhantomData,
        })
    }
}

/// Draws `bits` random bits from `rng` as a big-endian byte string, clearing
/// the excess high bits of the leading byte.
pub(crate) fn random_bits(bits: usize, rng: &mut impl CryptoRngCore) -> Vec<u8> {
    let mut bytes = alloc::vec![0u8; (bits + 7) / 8];
    rng.fill_bytes(&mut bytes);

    let high_bits = bits % 8;
    if high_bits != 0 {
        bytes[0] &= !(0xffu8 << high_bits);
    }
    bytes
}

impl<C: PrimeCurve> Clone for Scalar<C> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            curve: PhantomData,
        }
    }
}

impl<C: PrimeCurve> Default for Scalar<C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<C: PrimeCurve> PartialEq for Scalar<C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C: PrimeCurve> Eq for Scalar<C> {}

impl<C: PrimeCurve> fmt::Debug for Scalar<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar<{}>(0x{})", C::NAME, self)
    }
}

impl<C: PrimeCurve> fmt::Display for Scalar<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<C: PrimeCurve> From<u64> for Scalar<C> {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

//
// Arithmetic trait impls
//

macro_rules! impl_scalar_binop {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident) => {
        impl<C: PrimeCurve> $op<&Scalar<C>> for &Scalar<C> {
            type Output = Scalar<C>;

            fn $op_fn(self, rhs: &Scalar<C>) -> Scalar<C> {
                Scalar::$op_fn(self, rhs)
            }
        }

        impl<C: PrimeCurve> $op<Scalar<C>> for &Scalar<C> {
            type Output = Scalar<C>;

            fn $op_fn(self, rhs: Scalar<C>) -> Scalar<C> {
                Scalar::$op_fn(self, &rhs)
            }
        }

        impl<C: PrimeCurve> $op<&Scalar<C>> for Scalar<C> {
            type Output = Scalar<C>;

            fn $op_fn(self, rhs: &Scalar<C>) -> Scalar<C> {
                Scalar::$op_fn(&self, rhs)
            }
        }

        impl<C: PrimeCurve> $op<Scalar<C>> for Scalar<C> {
            type Output = Scalar<C>;

            fn $op_fn(self, rhs: Scalar<C>) -> Scalar<C> {
                Scalar::$op_fn(&self, &rhs)
            }
        }

        impl<C: PrimeCurve> $assign<&Scalar<C>> for Scalar<C> {
            fn $assign_fn(&mut self, rhs: &Scalar<C>) {
                *self = Scalar::$op_fn(self, rhs);
            }
        }

        impl<C: PrimeCurve> $assign<Scalar<C>> for Scalar<C> {
            fn $assign_fn(&mut self, rhs: Scalar<C>) {
                *self = Scalar::$op_fn(self, &rhs);
            }
        }
    };
}

impl_scalar_binop!(Add, add, AddAssign, add_assign);
impl_scalar_binop!(Sub, sub, SubAssign, sub_assign);
impl_scalar_binop!(Mul, mul, MulAssign, mul_assign);

impl<C: PrimeCurve> Neg for Scalar<C> {
    type Output = Scalar<C>;

    fn neg(self) -> Scalar<C> {
        Scalar::neg(&self)
    }
}

impl<C: PrimeCurve> Neg for &Scalar<C> {
    type Output = Scalar<C>;

    fn neg(self) -> Scalar<C> {
        Scalar::neg(self)
    }
}

//
// serde support
//

#[cfg(feature = "serde")]
impl<C: PrimeCurve> Serialize for Scalar<C> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C: PrimeCurve> Deserialize<'de> for Scalar<C> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Self::from_bytes(&bytes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::random_bits;
    use crate::{Error, NistP256, PrimeCurve};
    use num_bigint::BigUint;
    use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};

    type Scalar = super::Scalar<NistP256>;

    fn n() -> &'static BigUint {
        &NistP256::params().n
    }

    #[test]
    fn identities() {
        let x = Scalar::from_u64(42);
        assert_eq!(&x + &Scalar::zero(), x);
        assert_eq!(&x * &Scalar::one(), x);
        assert_eq!(&x - &x, Scalar::zero());
        assert_eq!(&x + &(-&x), Scalar::zero());
    }

    #[test]
    fn reduction_is_total() {
        assert_eq!(Scalar::from_biguint(n()), Scalar::zero());
        assert_eq!(Scalar::from_biguint(&(n() + 5u8)), Scalar::from_u64(5));
        assert_eq!(Scalar::from_bytes_reduced(&[0xff; 64]).value() < n(), true);
        assert_eq!(Scalar::from_bytes_reduced(&[]), Scalar::zero());
    }

    #[test]
    fn negative_integers() {
        assert_eq!(Scalar::from_i64(-1), -Scalar::one());
        assert_eq!(*Scalar::from_i64(-1).value(), n() - 1u8);
        assert_eq!(Scalar::from_i64(7), Scalar::from_u64(7));
        assert_eq!(-Scalar::zero(), Scalar::zero());
    }

    #[test]
    fn wraps_around() {
        let max = Scalar::from_biguint(&(n() - 1u8));
        assert_eq!(&max + &Scalar::one(), Scalar::zero());
        assert_eq!(&Scalar::zero() - &Scalar::one(), max);
    }

    #[test]
    fn bytes_are_padded() {
        let bytes = Scalar::one().to_bytes();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[31], 1);
        assert!(bytes[..31].iter().all(|&b| b == 0));
        assert_eq!(Scalar::from_bytes(&bytes).ok(), Some(Scalar::one()));
    }

    #[test]
    fn fixed_length_decoding() {
        assert_eq!(
            Scalar::from_bytes(&[1u8; 31]),
            Err(Error::InvalidLength {
                expected: 32,
                actual: 31
            })
        );
        assert_eq!(
            Scalar::from_bytes(&[1u8; 33]),
            Err(Error::InvalidLength {
                expected: 32,
                actual: 33
            })
        );
    }

    #[test]
    fn invert() {
        assert_eq!(Scalar::zero().invert(), None);

        let x = Scalar::from_u64(0xdead_beef);
        let inv = x.invert().expect("non-zero");
        assert_eq!(&x * &inv, Scalar::one());
    }

    #[test]
    fn assign_ops() {
        let mut x = Scalar::from_u64(3);
        x += Scalar::from_u64(4);
        x *= &Scalar::from_u64(2);
        x -= Scalar::one();
        assert_eq!(x, Scalar::from_u64(13));
    }

    #[test]
    fn random_is_reduced() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..16 {
            assert!(Scalar::random(&mut rng).value() < n());
        }
    }

    #[test]
    fn random_bits_masks_high_byte() {
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        for _ in 0..32 {
            let bytes = random_bits(12, &mut rng);
            assert_eq!(bytes.len(), 2);
            assert_eq!(bytes[0] & 0xf0, 0);
        }
        assert_eq!(random_bits(256, &mut rng).len(), 32);
    }

    #[test]
    fn display() {
        let s = alloc::format!("{}", Scalar::from_u64(0xab));
        assert_eq!(s.len(), 64);
        assert!(s.ends_with("ab"));
    }
}
