//! Platform interface for debug-token persistence.

use crate::error::StoreError;

/// Key-value store holding the persisted debug token.
///
/// The platform host supplies the secure implementation (Keychain on iOS,
/// Keystore-backed preferences on Android). Writes must be last-writer-wins
/// so concurrent callers converge on a single persisted value.
#[uniffi::export(with_foreign)]
pub trait TokenStore: Send + Sync {
    /// Reads the value stored under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, key: String) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&self, key: String, value: String) -> Result<(), StoreError>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal fails.
    fn remove(&self, key: String) -> Result<(), StoreError>;
}
