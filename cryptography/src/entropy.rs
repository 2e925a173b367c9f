//! Source of secure randomness for key generation.
//!
//! The engine never reaches for a global generator. Callers inject an [EntropySource] (in
//! production, [rand::rngs::OsRng]) and tests can substitute a seeded or failing one.

use crate::Error;
use rand::{CryptoRng, RngCore};

/// A cryptographically secure source of random bytes.
pub trait EntropySource {
    /// Fills `dest` with random bytes.
    ///
    /// Returns [Error::EntropyUnavailable] if the source cannot supply bytes. Callers must treat
    /// this as fatal rather than fall back to weaker randomness.
    fn fill_secure(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

impl<R: RngCore + CryptoRng> EntropySource for R {
    fn fill_secure(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.try_fill_bytes(dest)
            .map_err(|err| Error::EntropyUnavailable(err.to_string()))
    }
}
