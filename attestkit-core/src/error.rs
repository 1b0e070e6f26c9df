use thiserror::Error;

/// Errors surfaced by a [`crate::storage::TokenStore`] implementation.
///
/// The debug provider itself never propagates these: any store failure
/// degrades to in-memory token generation.
#[derive(Debug, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum StoreError {
    /// The backing store cannot be opened or is not usable.
    #[error("store_unavailable: {reason}")]
    Unavailable {
        /// Description of why the store is unusable.
        reason: String,
    },
    /// Reading a value from the store failed.
    #[error("read_failed: {reason}")]
    ReadFailed {
        /// Description of the read failure.
        reason: String,
    },
    /// Writing a value to the store failed.
    #[error("write_failed: {reason}")]
    WriteFailed {
        /// Description of the write failure.
        reason: String,
    },
}
