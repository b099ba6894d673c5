//! Time Rush Storefront - Persistence and storefront data operations.
//!
//! All durable state (catalog, settings, cart, admin credential) lives in a
//! string key-value store reached through the [`KeyValueStore`] port. The
//! [`Storefront`] facade reads and writes it and never fails: a missing
//! value, unparsable JSON, or an unavailable store all degrade to defaults.
//!
//! # Modules
//!
//! - [`kv`] - The store port plus in-memory and directory-backed stores
//! - [`keys`] - Persistence keys owned by this system
//! - [`store`] - The [`Storefront`] facade

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod keys;
pub mod kv;
pub mod store;

pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use store::{DEFAULT_ADMIN_PASSWORD, Storefront};
