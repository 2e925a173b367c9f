//! Errors surfaced by key generation, signing, and decoding.

use thiserror::Error;

/// Errors that can occur when generating keys, signing, or decoding fixed-width values.
///
/// Verification never returns this type: every failure collapses to `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(String),
    #[error("malformed {0}: {1}")]
    MalformedInput(&'static str, &'static str),
    #[error("invalid length: expected {expected}, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("retries exhausted after {0} attempts")]
    RetriesExhausted(u32),
    #[error("invalid extension degree: {found} blinding factors, at most {max} supported")]
    ExtensionDegree { max: usize, found: usize },
}
