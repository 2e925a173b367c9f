//! Elements of the Ristretto255 group.

use super::scalar::Scalar;
use crate::{
    codec::{array, Decode, Encode, FixedSize},
    Error,
};
use core::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg, Sub},
};
use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_POINT,
    ristretto::{CompressedRistretto, RistrettoPoint},
    traits::{Identity, IsIdentity, MultiscalarMul},
};
use sha2::Sha512;
use zeroize::Zeroize;

/// Length of a compressed [Point].
pub const POINT_LENGTH: usize = 32;

/// An element of the prime-order Ristretto255 group, cached alongside its canonical encoding.
///
/// Decoding accepts only canonical encodings of group elements. The identity is a valid
/// [Point]; callers that need a non-identity element (public keys, signature commitments)
/// must check [Point::is_identity].
#[derive(Clone, Copy, Zeroize)]
pub struct Point {
    raw: [u8; POINT_LENGTH],
    point: RistrettoPoint,
}

impl Point {
    /// Returns the group's neutral element.
    pub fn identity() -> Self {
        Self::from(RistrettoPoint::identity())
    }

    /// Returns the fixed generator `G`.
    pub fn generator() -> Self {
        Self::from(RISTRETTO_BASEPOINT_POINT)
    }

    /// Computes `scalar * G` with constant-time fixed-base multiplication.
    pub fn mul_base(scalar: &Scalar) -> Self {
        Self::from(RistrettoPoint::mul_base(scalar.inner()))
    }

    /// Maps arbitrary bytes to a point with unknown discrete logarithm.
    pub fn hash_from_bytes(input: &[u8]) -> Self {
        Self::from(RistrettoPoint::hash_from_bytes::<Sha512>(input))
    }

    /// Computes `sum(scalars[i] * points[i])` in constant time.
    ///
    /// Extra elements in the longer of the two iterators are ignored.
    pub fn multiscalar_mul<'a, S, P>(scalars: S, points: P) -> Self
    where
        S: IntoIterator<Item = &'a Scalar>,
        P: IntoIterator<Item = &'a Point>,
    {
        let (scalars, points): (Vec<&_>, Vec<&_>) = scalars
            .into_iter()
            .zip(points)
            .map(|(scalar, point)| (scalar.inner(), &point.point))
            .unzip();
        Self::from(RistrettoPoint::multiscalar_mul(scalars, points))
    }

    /// Returns true if this is the group's neutral element.
    pub fn is_identity(&self) -> bool {
        self.point.is_identity()
    }

    /// Returns the canonical compressed encoding.
    pub fn to_bytes(&self) -> [u8; POINT_LENGTH] {
        self.raw
    }
}

impl From<RistrettoPoint> for Point {
    fn from(point: RistrettoPoint) -> Self {
        Self {
            raw: point.compress().to_bytes(),
            point,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::from(self.point + rhs.point)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::from(self.point - rhs.point)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::from(-self.point)
    }
}

impl Mul<&Scalar> for Point {
    type Output = Point;

    fn mul(self, rhs: &Scalar) -> Point {
        Point::from(self.point * rhs.inner())
    }
}

impl FixedSize for Point {
    const SIZE: usize = POINT_LENGTH;
}

impl Encode for Point {}

impl Decode for Point {
    fn read(buf: &[u8]) -> Result<Self, Error> {
        let raw = array::<POINT_LENGTH>(buf)?;
        let point = CompressedRistretto(raw)
            .decompress()
            .ok_or(Error::MalformedInput("point", "not a canonical ristretto encoding"))?;
        Ok(Self { raw, point })
    }
}

impl PartialEq for Point {
    // Equality is decided on the group elements in constant time, not on the cached bytes.
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl AsRef<[u8]> for Point {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.raw))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.raw))
    }
}
