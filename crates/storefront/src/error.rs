//! Key-value store errors.

use thiserror::Error;

/// Failure reported by a [`KeyValueStore`](crate::KeyValueStore).
///
/// `Ok(None)` from a read means "no data"; an error means the store itself
/// could not be used.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store refused the operation (quota, lock poisoning, ...).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The key cannot be represented by this store.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
