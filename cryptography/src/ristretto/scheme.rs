//! Schnorr signatures over Ristretto255.
//!
//! A signature over `message` by private key `x` (public key `P = x * G`) is the pair `(R, s)`:
//!
//! ```text
//! k = H_nonce(x || attempt || message)   (mod l)
//! R = k * G
//! e = H_challenge(R || P || message)     (mod l)
//! s = k + e * x                          (mod l)
//! ```
//!
//! and is accepted iff `s * G == R + e * P`. Both hashes are domain-separated SHA-512 reduced
//! modulo the group order. The challenge binds the commitment, the public key, and the message;
//! dropping either of the latter two would allow forgeries.
//!
//! # Nonces
//!
//! Nonces are derived deterministically from the private key and the message, so signing never
//! consumes randomness and a weak generator cannot cause nonce reuse. Signing the same message
//! twice yields byte-identical signatures. `attempt` starts at zero and is only incremented in
//! the (cryptographically negligible) event that the nonce, the commitment, or the response
//! degenerates to zero.
//!
//! # Example
//! ```rust
//! use curvesig_cryptography::{ristretto::PrivateKey, PrivateKeyExt, Signer, Verifier};
//! use rand::rngs::OsRng;
//!
//! // Generate a new private key
//! let signer = PrivateKey::from_source(&mut OsRng).unwrap();
//!
//! // Sign a message
//! let msg = b"hello, world!";
//! let signature = signer.sign(msg).unwrap();
//!
//! // Verify the signature
//! assert!(signer.public_key().verify(msg, &signature));
//! ```

use super::{
    point::{Point, POINT_LENGTH},
    scalar::{Scalar, MAX_ATTEMPTS, SCALAR_LENGTH},
};
use crate::{
    codec::{array, Decode, Encode, FixedSize},
    EntropySource, Error,
};
use core::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
};
use sha2::{Digest, Sha512};
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Domain separation tag for nonce derivation.
const NONCE_DOMAIN: &[u8] = b"CURVESIG_SCHNORR_NONCE";

/// Domain separation tag for challenge derivation.
const CHALLENGE_DOMAIN: &[u8] = b"CURVESIG_SCHNORR_CHALLENGE";

pub const PRIVATE_KEY_LENGTH: usize = SCALAR_LENGTH;
pub const PUBLIC_KEY_LENGTH: usize = POINT_LENGTH;
pub const SIGNATURE_LENGTH: usize = POINT_LENGTH + SCALAR_LENGTH; // R || s

/// Derives the deterministic nonce for the given signing attempt.
fn nonce(private: &Scalar, attempt: u32, message: &[u8]) -> Scalar {
    let mut hasher = Sha512::new();
    hasher.update(NONCE_DOMAIN);
    hasher.update(private.as_ref());
    hasher.update(attempt.to_le_bytes());
    hasher.update(message);
    Scalar::from_hash(hasher)
}

/// Derives the challenge `e = H(R || P || message)`.
fn challenge(commitment: &Point, public: &Point, message: &[u8]) -> Scalar {
    let mut hasher = Sha512::new();
    hasher.update(CHALLENGE_DOMAIN);
    hasher.update(commitment.as_ref());
    hasher.update(public.as_ref());
    hasher.update(message);
    Scalar::from_hash(hasher)
}

/// Schnorr Private Key over Ristretto255.
///
/// Always a non-zero scalar. The scalar is zeroized on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    scalar: Scalar,
    #[zeroize(skip)]
    public: Point,
}

impl PrivateKey {
    /// Creates a private key from a scalar, rejecting zero.
    pub fn from_scalar(scalar: Scalar) -> Result<Self, Error> {
        if scalar.is_zero() {
            return Err(Error::MalformedInput("private key", "zero scalar"));
        }
        let public = Point::mul_base(&scalar);
        Ok(Self { scalar, public })
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    #[inline(always)]
    fn sign_inner(&self, message: &[u8]) -> Result<Signature, Error> {
        self.sign_with(message, |attempt| nonce(&self.scalar, attempt, message))
    }

    /// Signs with nonces drawn from `nonces`, resampling until one yields a usable signature.
    fn sign_with(
        &self,
        message: &[u8],
        mut nonces: impl FnMut(u32) -> Scalar,
    ) -> Result<Signature, Error> {
        for attempt in 0..MAX_ATTEMPTS {
            let mut k = nonces(attempt);
            let signature = self.try_sign(&k, message, attempt);
            k.zeroize();
            if let Some(signature) = signature {
                return Ok(signature);
            }
        }
        Err(Error::RetriesExhausted(MAX_ATTEMPTS))
    }

    fn try_sign(&self, k: &Scalar, message: &[u8], attempt: u32) -> Option<Signature> {
        if k.is_zero() {
            warn!(attempt, "rejected zero nonce");
            return None;
        }
        let r = Point::mul_base(k);
        if r.is_identity() {
            warn!(attempt, "rejected identity commitment");
            return None;
        }
        let e = challenge(&r, &self.public, message);
        let mut ex = &e * &self.scalar;
        let s = k + &ex;
        ex.zeroize();
        if s.is_zero() {
            warn!(attempt, "rejected zero response");
            return None;
        }
        Some(Signature::new(r, s))
    }
}

impl crate::PrivateKey for PrivateKey {}

impl crate::PrivateKeyExt for PrivateKey {
    fn from_source<E: EntropySource + ?Sized>(source: &mut E) -> Result<Self, Error> {
        Self::from_scalar(Scalar::random(source)?)
    }
}

impl crate::Signer for PrivateKey {
    type Signature = Signature;
    type PublicKey = PublicKey;

    fn public_key(&self) -> Self::PublicKey {
        PublicKey { point: self.public }
    }

    fn sign(&self, message: &[u8]) -> Result<Self::Signature, Error> {
        self.sign_inner(message)
    }
}

impl FixedSize for PrivateKey {
    const SIZE: usize = PRIVATE_KEY_LENGTH;
}

impl Encode for PrivateKey {}

impl Decode for PrivateKey {
    fn read(buf: &[u8]) -> Result<Self, Error> {
        let scalar = Scalar::read(buf)
            .map_err(|_| Error::MalformedInput("private key", "not canonically reduced"))?;
        Self::from_scalar(scalar)
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.scalar == other.scalar
    }
}

impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        self.scalar.as_ref()
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

/// Schnorr Public Key over Ristretto255 (compressed, 32 bytes).
///
/// Never the identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    point: Point,
}

impl PublicKey {
    /// Returns the underlying group element.
    pub fn point(&self) -> &Point {
        &self.point
    }

    #[inline(always)]
    fn verify_inner(&self, message: &[u8], signature: &Signature) -> bool {
        let e = challenge(&signature.r, &self.point, message);
        let expected = signature.r + self.point * &e;
        Point::mul_base(&signature.s) == expected
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(value: &PrivateKey) -> Self {
        Self {
            point: value.public,
        }
    }
}

impl crate::PublicKey for PublicKey {}

impl crate::Verifier for PublicKey {
    type Signature = Signature;

    fn verify(&self, message: &[u8], signature: &Self::Signature) -> bool {
        self.verify_inner(message, signature)
    }
}

impl FixedSize for PublicKey {
    const SIZE: usize = PUBLIC_KEY_LENGTH;
}

impl Encode for PublicKey {}

impl Decode for PublicKey {
    fn read(buf: &[u8]) -> Result<Self, Error> {
        let point = Point::read(buf)?;
        if point.is_identity() {
            return Err(Error::MalformedInput("public key", "identity"));
        }
        Ok(Self { point })
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        self.point.as_ref()
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self))
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self))
    }
}

/// Schnorr Signature over Ristretto255: the nonce commitment `R` followed by the response `s`.
#[derive(Clone)]
pub struct Signature {
    raw: [u8; SIGNATURE_LENGTH],
    r: Point,
    s: Scalar,
}

impl Signature {
    fn new(r: Point, s: Scalar) -> Self {
        let mut raw = [0u8; SIGNATURE_LENGTH];
        raw[..POINT_LENGTH].copy_from_slice(r.as_ref());
        raw[POINT_LENGTH..].copy_from_slice(s.as_ref());
        Self { raw, r, s }
    }

    /// Decodes a signature from its two fixed-width halves.
    ///
    /// Rejects a commitment that is not a canonical, non-identity point and a response that is
    /// not a canonical, non-zero scalar.
    pub fn from_parts(r: &[u8], s: &[u8]) -> Result<Self, Error> {
        let r = Point::decode(r)?;
        if r.is_identity() {
            return Err(Error::MalformedInput("signature", "identity commitment"));
        }
        let s = Scalar::decode(s)?;
        if s.is_zero() {
            return Err(Error::MalformedInput("signature", "zero response"));
        }
        Ok(Self::new(r, s))
    }

    /// Returns the nonce commitment `R`.
    pub fn r(&self) -> &Point {
        &self.r
    }

    /// Returns the response `s`.
    pub fn s(&self) -> &Scalar {
        &self.s
    }
}

impl crate::Signature for Signature {}

impl FixedSize for Signature {
    const SIZE: usize = SIGNATURE_LENGTH;
}

impl Encode for Signature {}

impl Decode for Signature {
    fn read(buf: &[u8]) -> Result<Self, Error> {
        let raw = array::<SIGNATURE_LENGTH>(buf)?;
        Self::from_parts(&raw[..POINT_LENGTH], &raw[POINT_LENGTH..])
    }
}

impl Eq for Signature {}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.raw))
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.raw))
    }
}

/// A private key and the public key derived from it.
#[derive(Clone)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generates a fresh keypair from the supplied entropy source.
    pub fn generate<E: EntropySource + ?Sized>(source: &mut E) -> Result<Self, Error> {
        let private = <PrivateKey as crate::PrivateKeyExt>::from_source(source)?;
        Ok(Self::from(private))
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Splits the keypair, handing ownership of the private key to the caller.
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private, self.public)
    }
}

impl From<PrivateKey> for KeyPair {
    fn from(private: PrivateKey) -> Self {
        let public = PublicKey::from(&private);
        Self { private, public }
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &self.private)
            .field("public", &self.public)
            .finish()
    }
}
