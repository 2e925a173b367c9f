//! Generate Ristretto255 keys, sign arbitrary messages with Schnorr signatures, and verify them.
//!
//! The fixed-width [KeyEngine] (and the C ABI built on top of it in [ffi]) is the primary
//! surface. The typed [ristretto] module underneath also offers Diffie-Hellman exchange
//! ([dhke]) and Pedersen commitments ([commitment]).
//!
//! # Status
//!
//! `curvesig-cryptography` is **ALPHA** software and is not yet recommended for production use.
//! Developers should expect breaking changes and occasional instability.

use core::fmt::Debug;
use rand::SeedableRng;

pub mod codec;
pub use codec::{Decode, Encode, FixedSize};
pub mod commitment;
pub mod dhke;
pub mod engine;
pub use engine::KeyEngine;
pub mod entropy;
pub use entropy::EntropySource;
mod error;
pub use error::Error;
pub mod ffi;
pub mod ristretto;
#[cfg(test)]
mod vectors;

/// Length in bytes of every key, commitment, and response crossing the engine boundary.
pub const KEY_LENGTH: usize = 32;

/// Returns the semantic version of this build.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Produces [Signature]s over messages that can be verified with a corresponding [PublicKey].
pub trait Signer: Send + Sync + Clone + 'static {
    /// The type of [Signature] produced by this [Signer].
    type Signature: Signature;

    /// The corresponding [PublicKey] type.
    type PublicKey: PublicKey<Signature = Self::Signature>;

    /// Returns the [PublicKey] corresponding to this [Signer].
    fn public_key(&self) -> Self::PublicKey;

    /// Sign a message.
    ///
    /// The message should not be hashed prior to calling this function. If a particular scheme
    /// requires a payload to be hashed before it is signed, it will be done internally.
    ///
    /// Only fails if the scheme exhausts its bounded resampling, which does not happen in
    /// practice.
    fn sign(&self, msg: &[u8]) -> Result<Self::Signature, Error>;
}

/// A [Signer] that can be serialized/deserialized.
pub trait PrivateKey: Signer + Sized + Decode + Encode + PartialEq {}

/// A [PrivateKey] that can be generated from a seed or an [EntropySource].
pub trait PrivateKeyExt: PrivateKey {
    /// Create a [PrivateKey] from a seed.
    ///
    /// # Warning
    ///
    /// This function is insecure and should only be used for examples
    /// and testing.
    fn from_seed(seed: u64) -> Result<Self, Error> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self::from_source(&mut rng)
    }

    /// Create a fresh [PrivateKey] using the supplied [EntropySource].
    fn from_source<E: EntropySource + ?Sized>(source: &mut E) -> Result<Self, Error>;
}

/// Verifies [Signature]s over messages.
pub trait Verifier {
    /// The type of [Signature] that this verifier can verify.
    type Signature: Signature;

    /// Verify that a [Signature] is a valid over a given message.
    ///
    /// The message should not be hashed prior to calling this function. If a particular
    /// scheme requires a payload to be hashed before it is signed, it will be done internally.
    fn verify(&self, msg: &[u8], sig: &Self::Signature) -> bool;
}

/// A [PublicKey], able to verify [Signature]s.
pub trait PublicKey: Verifier + Sized + Clone + Debug + Decode + Encode + PartialEq {}

/// A [Signature] over a message.
pub trait Signature: Sized + Clone + Debug + Decode + Encode + PartialEq {}
