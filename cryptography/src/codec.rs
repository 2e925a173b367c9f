//! Fixed-width encoding of keys, signatures, and group elements.
//!
//! Every value crossing the boundary of this crate has a constant encoded length. Decoding
//! untrusted bytes always validates the value (canonical range, group membership) before
//! returning it, so malformed data never reaches arithmetic.

use crate::Error;

/// Trait for types with a known, fixed encoded length.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

/// Trait for types that can be written to a caller-supplied buffer.
pub trait Encode: FixedSize + AsRef<[u8]> {
    /// Writes the encoding of this value into `buf`.
    ///
    /// Panics if `buf` is not exactly [FixedSize::SIZE] bytes long.
    fn write(&self, buf: &mut [u8]) {
        assert_eq!(
            buf.len(),
            Self::SIZE,
            "Can't encode {} bytes into {} bytes",
            Self::SIZE,
            buf.len()
        );
        buf.copy_from_slice(self.as_ref());
    }

    /// Encodes the value to a freshly allocated buffer.
    ///
    /// (Provided method).
    fn encode(&self) -> Vec<u8> {
        let mut buf = vec![0u8; Self::SIZE];
        self.write(&mut buf);
        buf
    }
}

/// Trait for types that can be decoded (and validated) from untrusted bytes.
pub trait Decode: FixedSize + Sized {
    /// Reads a value from a buffer that is exactly [FixedSize::SIZE] bytes long.
    fn read(buf: &[u8]) -> Result<Self, Error>;

    /// Decodes a value from a buffer, ensuring the buffer has exactly the expected size.
    ///
    /// (Provided method).
    fn decode(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() != Self::SIZE {
            return Err(Error::InvalidLength {
                expected: Self::SIZE,
                found: buf.len(),
            });
        }
        Self::read(buf)
    }
}

/// Copies a slice known to be `N` bytes long into an array.
pub(crate) fn array<const N: usize>(buf: &[u8]) -> Result<[u8; N], Error> {
    buf.try_into().map_err(|_| Error::InvalidLength {
        expected: N,
        found: buf.len(),
    })
}
