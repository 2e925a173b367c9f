//! C ABI over [KeyEngine].
//!
//! All buffers are allocated and freed by the caller. Keys, commitments, and responses are
//! exactly [KEY_LENGTH] bytes. Functions that can fail return a status code and leave their
//! output buffers untouched on failure. Verification returns `false` for any failure,
//! including null pointers.
//!
//! The declarations live in `include/curvesig.h`.

use crate::{engine::KeyBytes, Error, KeyEngine, KEY_LENGTH};
use std::ffi::{c_char, c_int, CStr};
use tracing::debug;

/// The call succeeded.
pub const STATUS_OK: c_int = 0;

/// A required pointer was null.
pub const STATUS_NULL_POINTER: c_int = 1;

/// The operating system's random source failed.
pub const STATUS_ENTROPY_UNAVAILABLE: c_int = 2;

/// An input was not a valid encoding.
pub const STATUS_MALFORMED_INPUT: c_int = 3;

/// Internal resampling hit its cap.
pub const STATUS_RETRIES_EXHAUSTED: c_int = 4;

static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

fn status(err: &Error) -> c_int {
    match err {
        Error::EntropyUnavailable(_) => STATUS_ENTROPY_UNAVAILABLE,
        Error::MalformedInput(_, _)
        | Error::InvalidLength { .. }
        | Error::ExtensionDegree { .. } => STATUS_MALFORMED_INPUT,
        Error::RetriesExhausted(_) => STATUS_RETRIES_EXHAUSTED,
    }
}

/// Borrows `len` bytes at `message`, treating a null pointer with zero length as empty.
unsafe fn message<'a>(message: *const u8, len: usize) -> Option<&'a [u8]> {
    if message.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(std::slice::from_raw_parts(message, len))
}

unsafe fn sign_bytes(
    private: *const [u8; KEY_LENGTH],
    message: Option<&[u8]>,
    r: *mut [u8; KEY_LENGTH],
    s: *mut [u8; KEY_LENGTH],
) -> c_int {
    let Some(message) = message else {
        return STATUS_NULL_POINTER;
    };
    if private.is_null() || r.is_null() || s.is_null() {
        return STATUS_NULL_POINTER;
    }
    match KeyEngine::new().sign(&*private, message) {
        Ok((signature_r, signature_s)) => {
            *r = signature_r;
            *s = signature_s;
            STATUS_OK
        }
        Err(err) => {
            debug!(?err, "sign failed");
            status(&err)
        }
    }
}

unsafe fn verify_bytes(
    public: *const [u8; KEY_LENGTH],
    message: Option<&[u8]>,
    r: *const [u8; KEY_LENGTH],
    s: *const [u8; KEY_LENGTH],
) -> bool {
    let Some(message) = message else {
        return false;
    };
    if public.is_null() || r.is_null() || s.is_null() {
        return false;
    }
    KeyEngine::new().verify(&*public, message, &*r, &*s)
}

/// Returns the crate version as a static, null-terminated string.
#[no_mangle]
pub extern "C" fn version() -> *const c_char {
    VERSION.as_ptr().cast()
}

/// Generates a keypair into `private` and `public`.
///
/// # Safety
///
/// `private` and `public` must each be null or valid for writes of [KEY_LENGTH] bytes.
#[no_mangle]
pub unsafe extern "C" fn random_keypair(
    private: *mut [u8; KEY_LENGTH],
    public: *mut [u8; KEY_LENGTH],
) -> c_int {
    if private.is_null() || public.is_null() {
        return STATUS_NULL_POINTER;
    }
    match KeyEngine::new().random_keypair() {
        Ok(keypair) => {
            let mut private_bytes: KeyBytes = [0u8; KEY_LENGTH];
            private_bytes.copy_from_slice(keypair.private_key().as_ref());
            let mut public_bytes: KeyBytes = [0u8; KEY_LENGTH];
            public_bytes.copy_from_slice(keypair.public_key().as_ref());
            *private = private_bytes;
            *public = public_bytes;
            zeroize::Zeroize::zeroize(&mut private_bytes);
            STATUS_OK
        }
        Err(err) => status(&err),
    }
}

/// Signs the null-terminated `message`, writing the commitment to `r` and the response to `s`.
///
/// # Safety
///
/// `private` must be null or valid for reads of [KEY_LENGTH] bytes, `message` must be null or
/// point to a null-terminated string, and `r` and `s` must each be null or valid for writes of
/// [KEY_LENGTH] bytes.
#[no_mangle]
pub unsafe extern "C" fn sign(
    private: *const [u8; KEY_LENGTH],
    message: *const c_char,
    r: *mut [u8; KEY_LENGTH],
    s: *mut [u8; KEY_LENGTH],
) -> c_int {
    let message = (!message.is_null()).then(|| CStr::from_ptr(message).to_bytes());
    sign_bytes(private, message, r, s)
}

/// Returns true iff `(r, s)` is a valid signature by `public` over the null-terminated `message`.
///
/// # Safety
///
/// `public`, `r`, and `s` must each be null or valid for reads of [KEY_LENGTH] bytes, and
/// `message` must be null or point to a null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn verify(
    public: *const [u8; KEY_LENGTH],
    message: *const c_char,
    r: *const [u8; KEY_LENGTH],
    s: *const [u8; KEY_LENGTH],
) -> bool {
    let message = (!message.is_null()).then(|| CStr::from_ptr(message).to_bytes());
    verify_bytes(public, message, r, s)
}

/// Signs `len` bytes at `message`, which may contain interior null bytes.
///
/// # Safety
///
/// As [sign], except `message` must be valid for reads of `len` bytes (or null when `len` is
/// zero).
#[no_mangle]
pub unsafe extern "C" fn sign_message(
    private: *const [u8; KEY_LENGTH],
    message_ptr: *const u8,
    len: usize,
    r: *mut [u8; KEY_LENGTH],
    s: *mut [u8; KEY_LENGTH],
) -> c_int {
    sign_bytes(private, message(message_ptr, len), r, s)
}

/// Verifies a signature over `len` bytes at `message`.
///
/// # Safety
///
/// As [verify], except `message` must be valid for reads of `len` bytes (or null when `len`
/// is zero).
#[no_mangle]
pub unsafe extern "C" fn verify_message(
    public: *const [u8; KEY_LENGTH],
    message_ptr: *const u8,
    len: usize,
    r: *const [u8; KEY_LENGTH],
    s: *const [u8; KEY_LENGTH],
) -> bool {
    verify_bytes(public, message(message_ptr, len), r, s)
}
