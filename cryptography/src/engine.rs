//! The four operations exposed across the fixed-width buffer boundary.
//!
//! [KeyEngine] operates on `[u8; KEY_LENGTH]` buffers so that lengths are checked at compile
//! time, while decoding into [crate::ristretto] types guarantees that malformed data never
//! reaches arithmetic. Generation draws from the engine's injected [EntropySource]; signing
//! and verification are pure functions of their inputs.

use crate::{
    codec::Decode,
    ristretto::{KeyPair, PrivateKey, PublicKey, Signature},
    EntropySource, Error, Signer as _, Verifier as _, KEY_LENGTH,
};
use rand::rngs::OsRng;
use tracing::{debug, error, trace};

/// A fixed-width encoding of a scalar or a point.
pub type KeyBytes = [u8; KEY_LENGTH];

/// Generates keys, signs, and verifies over fixed-width buffers.
#[derive(Clone, Debug, Default)]
pub struct KeyEngine<E: EntropySource = OsRng> {
    source: E,
}

impl KeyEngine<OsRng> {
    /// Creates an engine backed by the operating system's random source.
    pub fn new() -> Self {
        Self { source: OsRng }
    }
}

impl<E: EntropySource> KeyEngine<E> {
    /// Creates an engine that draws randomness from `source`.
    pub fn with_source(source: E) -> Self {
        Self { source }
    }

    /// Returns the semantic version of this build.
    pub fn version(&self) -> &'static str {
        crate::version()
    }

    /// Generates a fresh keypair.
    ///
    /// Fails with [Error::EntropyUnavailable] if the random source cannot supply bytes; no
    /// weak or zero key is ever returned in that case.
    pub fn random_keypair(&mut self) -> Result<KeyPair, Error> {
        let keypair = KeyPair::generate(&mut self.source).inspect_err(|err| {
            error!(?err, "failed to generate keypair");
        })?;
        debug!(public = %hex::encode(keypair.public_key()), "generated keypair");
        Ok(keypair)
    }

    /// Signs `message` with the private key encoded in `private`, returning `(R, s)`.
    ///
    /// Fails with [Error::MalformedInput] if `private` is not a canonical, non-zero scalar.
    pub fn sign(&self, private: &KeyBytes, message: &[u8]) -> Result<(KeyBytes, KeyBytes), Error> {
        let private = PrivateKey::decode(private)?;
        let signature = private.sign(message)?;
        Ok((signature.r().to_bytes(), signature.s().to_bytes()))
    }

    /// Returns true iff `(r, s)` is a valid signature over `message` by `public`.
    ///
    /// Every failure, including undecodable or identity inputs, yields `false`.
    pub fn verify(&self, public: &KeyBytes, message: &[u8], r: &KeyBytes, s: &KeyBytes) -> bool {
        let public = match PublicKey::decode(public) {
            Ok(public) => public,
            Err(err) => {
                trace!(reason = %err, "rejected public key");
                return false;
            }
        };
        let signature = match Signature::from_parts(r, s) {
            Ok(signature) => signature,
            Err(err) => {
                trace!(reason = %err, "rejected signature encoding");
                return false;
            }
        };
        let valid = public.verify(message, &signature);
        if !valid {
            trace!(reason = "equation", "rejected signature");
        }
        valid
    }
}
