//! Scalars modulo the order of the Ristretto255 group.

use crate::{
    codec::{array, Decode, Encode, FixedSize},
    EntropySource, Error,
};
use core::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};
use curve25519_dalek::scalar::Scalar as DalekScalar;
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, Zeroizing};

/// Length of a canonically encoded [Scalar].
pub const SCALAR_LENGTH: usize = 32;

/// Maximum number of draws before rejection sampling gives up.
pub(crate) const MAX_ATTEMPTS: u32 = 1 << 16;

/// Mask applied to the most significant byte of a draw so that candidates fall below `2^253`.
///
/// The group order is slightly above `2^252`, so roughly half of all masked draws are accepted.
const DRAW_MASK: u8 = 0x1f;

/// An integer modulo the group order `l = 2^252 + 27742317777372353535851937790883648493`.
///
/// Every [Scalar] is fully reduced: decoding rejects any encoding that is not canonical.
/// Scalars may be secret, so the type is not `Copy` and arithmetic borrows its operands.
#[derive(Clone, Zeroize)]
pub struct Scalar {
    raw: [u8; SCALAR_LENGTH],
    scalar: DalekScalar,
}

impl Scalar {
    /// The additive identity.
    pub const ZERO: Self = Self {
        raw: [0u8; SCALAR_LENGTH],
        scalar: DalekScalar::ZERO,
    };

    /// Samples a scalar uniformly from `[1, l - 1]`.
    ///
    /// Draws are masked to 253 bits and resampled until they are canonical and non-zero, which
    /// avoids the bias a plain modular reduction would introduce.
    pub fn random<E: EntropySource + ?Sized>(source: &mut E) -> Result<Self, Error> {
        let mut draw = Zeroizing::new([0u8; SCALAR_LENGTH]);
        for _ in 0..MAX_ATTEMPTS {
            source.fill_secure(&mut draw[..])?;
            draw[SCALAR_LENGTH - 1] &= DRAW_MASK;
            let candidate: Option<DalekScalar> = DalekScalar::from_canonical_bytes(*draw).into();
            if let Some(scalar) = candidate {
                if scalar != DalekScalar::ZERO {
                    return Ok(Self::from(scalar));
                }
            }
        }
        Err(Error::RetriesExhausted(MAX_ATTEMPTS))
    }

    /// Returns the scalar corresponding to a small integer.
    pub fn from_u64(value: u64) -> Self {
        Self::from(DalekScalar::from(value))
    }

    /// Reduces a 512-bit digest modulo the group order.
    pub(crate) fn from_hash(hasher: Sha512) -> Self {
        let mut wide = [0u8; 64];
        wide.copy_from_slice(&hasher.finalize());
        let scalar = DalekScalar::from_bytes_mod_order_wide(&wide);
        wide.zeroize();
        Self::from(scalar)
    }

    /// Returns true if this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.scalar == DalekScalar::ZERO
    }

    /// Returns the canonical little-endian encoding.
    pub fn to_bytes(&self) -> [u8; SCALAR_LENGTH] {
        self.raw
    }

    pub(crate) fn inner(&self) -> &DalekScalar {
        &self.scalar
    }
}

impl From<DalekScalar> for Scalar {
    fn from(scalar: DalekScalar) -> Self {
        Self {
            raw: scalar.to_bytes(),
            scalar,
        }
    }
}

impl<'a> Add<&'a Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &'a Scalar) -> Scalar {
        Scalar::from(self.scalar + rhs.scalar)
    }
}

impl<'a> Sub<&'a Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &'a Scalar) -> Scalar {
        Scalar::from(self.scalar - rhs.scalar)
    }
}

impl<'a> Mul<&'a Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &'a Scalar) -> Scalar {
        Scalar::from(self.scalar * rhs.scalar)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar::from(-self.scalar)
    }
}

impl PartialEq for Scalar {
    /// Compares in constant time.
    fn eq(&self, other: &Self) -> bool {
        self.scalar == other.scalar
    }
}

impl Eq for Scalar {}

impl FixedSize for Scalar {
    const SIZE: usize = SCALAR_LENGTH;
}

impl Encode for Scalar {}

impl Decode for Scalar {
    fn read(buf: &[u8]) -> Result<Self, Error> {
        let raw = array::<SCALAR_LENGTH>(buf)?;
        let scalar: Option<DalekScalar> = DalekScalar::from_canonical_bytes(raw).into();
        let scalar = scalar.ok_or(Error::MalformedInput("scalar", "not canonically reduced"))?;
        Ok(Self { raw, scalar })
    }
}

impl AsRef<[u8]> for Scalar {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.raw))
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.raw))
    }
}
