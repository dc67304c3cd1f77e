//! Error handling traits for the primitive crates

use super::types::Error;

/// Extension trait for Result types
pub trait ResultExt<T, E>: Sized {
    /// Replace any error with the one produced by `f`, dropping the original
    fn wrap_err<F, E2>(self, f: F) -> core::result::Result<T, E2>
    where
        F: FnOnce() -> E2;

    /// Collapse any error into [`Error::DecryptionFailed`]
    fn or_decryption_failed(self) -> core::result::Result<T, Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn wrap_err<F, E2>(self, f: F) -> core::result::Result<T, E2>
    where
        F: FnOnce() -> E2,
    {
        self.map_err(|_| f())
    }

    fn or_decryption_failed(self) -> core::result::Result<T, Error> {
        self.wrap_err(|| Error::DecryptionFailed)
    }
}
