//! Time Rush Core - Shared domain types library.
//!
//! This crate provides the domain types used across all Time Rush components:
//! - `storefront` - Key-value persistence and the storefront data facade
//! - `admin` - Catalog and settings administration
//! - `cli` - Command-line driver for a local data directory
//!
//! # Architecture
//!
//! The core crate contains only types and pure rules - no I/O, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products and their normalization, categories, cart, settings,
//!   money formatting, product id slugs and the export document

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
