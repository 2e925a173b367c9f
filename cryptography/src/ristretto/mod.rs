//! Schnorr signatures, Diffie-Hellman, and commitments over the Ristretto255 group.
//!
//! Ristretto255 provides a prime-order group on top of Curve25519, so there is no cofactor to
//! clear and every canonically encoded element is a valid group member. Field and curve
//! arithmetic is delegated to [curve25519_dalek]; all scalar multiplications involving secrets
//! are constant-time.

mod point;
pub use point::{Point, POINT_LENGTH};
mod scalar;
pub use scalar::{Scalar, SCALAR_LENGTH};
mod scheme;
pub use scheme::{
    KeyPair, PrivateKey, PublicKey, Signature, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH,
    SIGNATURE_LENGTH,
};
