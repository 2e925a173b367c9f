//! Diffie-Hellman key exchange over Ristretto255.
//!
//! Two parties holding `(a, A = a * G)` and `(b, B = b * G)` each compute `a * B == b * A`
//! without revealing their private keys. The raw shared point should be passed through a key
//! derivation function before it is used as a symmetric key.

use crate::ristretto::{Point, PrivateKey, PublicKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The result of a Diffie-Hellman exchange, zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DiffieHellmanSharedSecret(Point);

impl DiffieHellmanSharedSecret {
    /// Performs a Diffie-Hellman key exchange.
    pub fn new(private: &PrivateKey, public: &PublicKey) -> Self {
        Self(*public.point() * private.scalar())
    }

    /// Returns the shared secret as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl PartialEq for DiffieHellmanSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for DiffieHellmanSharedSecret {}

impl core::fmt::Debug for DiffieHellmanSharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "DiffieHellmanSharedSecret([REDACTED])")
    }
}
