//! C bindings for [`ens_normalize`].
//!
//! The process-wide [`Normalizer`] is created by [`ens_init`] and dropped by [`ens_deinit`].
//! Every successful call returns a buffer owned by the caller that must be handed back to
//! [`ens_release`] exactly once. See `include/ens_normalize.h` for the C declarations.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use ens_normalize::{ErrorKind, NormalizeError, Normalizer, NormalizerConfig};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::{
    ffi::{CStr, c_char},
    panic::{self, AssertUnwindSafe},
    ptr, slice,
};

#[macro_use]
mod macros;

/// Code returned on success.
pub const ENS_OK: i32 = 0;

static NORMALIZER: RwLock<Option<Normalizer>> = parking_lot::const_rwlock(None);

/// Result of [`ens_normalize`] and [`ens_beautify`].
///
/// On success `data` points to `len` bytes of UTF-8 and `error_code` is [`ENS_OK`]. On failure
/// `data` is null, `len` is zero and `error_code` is one of the stable error codes.
#[repr(C)]
#[derive(Debug)]
pub struct EnsResult {
    pub data: *mut u8,
    pub len: usize,
    pub error_code: i32,
}

impl EnsResult {
    fn error(kind: ErrorKind) -> Self {
        Self { data: ptr::null_mut(), len: 0, error_code: kind.code() }
    }

    fn from_result(result: Result<String, NormalizeError>) -> Self {
        match result {
            Ok(s) => {
                let bytes = s.into_bytes().into_boxed_slice();
                let len = bytes.len();
                let data = Box::into_raw(bytes).cast::<u8>();
                Self { data, len, error_code: ENS_OK }
            }
            Err(err) => Self::error(err.kind()),
        }
    }
}

ffi_fn! {
    /// Loads the spec data selected by the configuration.
    ///
    /// Returns [`ENS_OK`] on success, also when already initialized, and the unknown error code
    /// when the data cannot be loaded.
    fn ens_init() -> i32 {
        let guard = NORMALIZER.upgradable_read();
        if guard.is_some() {
            return ENS_OK;
        }
        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        let normalizer =
            NormalizerConfig::load().and_then(|config| Normalizer::from_config(&config));
        match normalizer {
            Ok(normalizer) => {
                debug!(unicode = normalizer.spec().unicode_version(), "initialized");
                *guard = Some(normalizer);
                ENS_OK
            }
            Err(err) => {
                error!(%err, "failed to load spec data");
                ErrorKind::Unknown.code()
            }
        }
    }
}

ffi_fn! {
    /// Drops the process-wide spec data.
    fn ens_deinit() {
        if NORMALIZER.write().take().is_some() {
            debug!("deinitialized");
        }
    }
}

ffi_fn! {
    /// Returns the canonical form of a name.
    ///
    /// # Safety
    ///
    /// `input` must be null, point to `input_len` readable bytes, or, when `input_len` is zero,
    /// point to a NUL-terminated string.
    unsafe fn ens_normalize(input: *const u8, input_len: usize) -> EnsResult {
        // SAFETY: upheld by the caller.
        let input = unsafe { input_bytes(input, input_len) };
        with_normalizer(|n| n.normalize_bytes(input))
    }
}

ffi_fn! {
    /// Returns the display form of a name.
    ///
    /// # Safety
    ///
    /// Same as [`ens_normalize`].
    unsafe fn ens_beautify(input: *const u8, input_len: usize) -> EnsResult {
        // SAFETY: upheld by the caller.
        let input = unsafe { input_bytes(input, input_len) };
        with_normalizer(|n| n.beautify_bytes(input))
    }
}

ffi_fn! {
    /// Frees the buffer of a successful result. Error results are ignored.
    ///
    /// # Safety
    ///
    /// `result` must come from [`ens_normalize`] or [`ens_beautify`] and not have been released.
    unsafe fn ens_release(result: EnsResult) {
        if result.error_code != ENS_OK || result.data.is_null() {
            return;
        }
        // SAFETY: `data` and `len` come from `Box::into_raw` in `EnsResult::from_result`.
        drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(result.data, result.len)) });
    }
}

ffi_fn! {
    /// Returns the static message of an error code. The string must not be freed.
    fn ens_error_message(error_code: i32) -> *const c_char {
        if error_code == ENS_OK {
            return c"success".as_ptr();
        }
        ErrorKind::from_code(error_code).unwrap_or(ErrorKind::Unknown).c_message().as_ptr()
    }
}

fn with_normalizer(f: impl FnOnce(&Normalizer) -> Result<String, NormalizeError>) -> EnsResult {
    let guard = NORMALIZER.read();
    let Some(normalizer) = guard.as_ref() else {
        warn!("called before ens_init");
        return EnsResult::error(ErrorKind::Unknown);
    };
    EnsResult::from_result(f(normalizer))
}

/// # Safety
///
/// See [`ens_normalize`].
unsafe fn input_bytes<'a>(input: *const u8, input_len: usize) -> &'a [u8] {
    if input.is_null() {
        &[]
    } else if input_len == 0 {
        // SAFETY: NUL-terminated per the caller.
        unsafe { CStr::from_ptr(input.cast()) }.to_bytes()
    } else {
        // SAFETY: `input_len` readable bytes per the caller.
        unsafe { slice::from_raw_parts(input, input_len) }
    }
}

/// Value returned when a call panics.
trait PanicDefault {
    fn panic_default() -> Self;
}

impl PanicDefault for () {
    fn panic_default() -> Self {}
}

impl PanicDefault for i32 {
    fn panic_default() -> Self {
        ErrorKind::Unknown.code()
    }
}

impl PanicDefault for EnsResult {
    fn panic_default() -> Self {
        Self::error(ErrorKind::Unknown)
    }
}

impl PanicDefault for *const c_char {
    fn panic_default() -> Self {
        ErrorKind::Unknown.c_message().as_ptr()
    }
}

fn catch<T: PanicDefault>(f: impl FnOnce() -> T) -> T {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("unknown panic");
        error!(msg, "panic caught at the C boundary");
        T::panic_default()
    })
}
