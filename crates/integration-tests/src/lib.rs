//! Integration tests for Time Rush.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p time-rush-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_persistence` - File-backed store shared across instances
//! - `admin_workflow` - Login, product editing, settings, export/import
//! - `normalization_properties` - Property tests over raw product records

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;
use tempfile::TempDir;

use time_rush_admin::AdminController;
use time_rush_storefront::{DEFAULT_ADMIN_PASSWORD, FileStore, MemoryStore, StoreError, Storefront};

/// A file-backed storefront in a temporary directory.
///
/// The directory is removed when the context is dropped.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create a fresh, empty data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self, StoreError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Open a new storefront over the shared directory, like a second tab.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn storefront(&self) -> Result<Storefront<FileStore>, StoreError> {
        Ok(Storefront::new(FileStore::open(self.dir.path())?))
    }

    /// An admin controller with its own session, not yet logged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn admin(&self) -> Result<AdminController<FileStore, MemoryStore>, StoreError> {
        Ok(AdminController::new(self.storefront()?, MemoryStore::new()))
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

/// The password a fresh store accepts.
#[must_use]
pub fn default_password() -> SecretString {
    SecretString::from(DEFAULT_ADMIN_PASSWORD)
}
