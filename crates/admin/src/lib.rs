//! Time Rush Admin library.
//!
//! Catalog and settings administration on top of the storefront data
//! facade. Everything a rendering layer would need from the admin dashboard
//! lives here: the login gate, the product table filter, product and
//! settings forms, password changes, and JSON export/import.
//!
//! # Security
//!
//! The admin gate is a demo-grade shared password compared against the
//! stored credential. The authenticated flag lives in a separate,
//! session-scoped store so it is forgotten when the session ends.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod controller;
pub mod error;
pub mod filter;
pub mod forms;
pub mod transfer;

pub use controller::{AdminController, EditMode, MIN_PASSWORD_LENGTH};
pub use error::AdminError;
pub use filter::ProductFilter;
pub use forms::{ProductForm, SettingsForm};
pub use transfer::ImportSummary;
