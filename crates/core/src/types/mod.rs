//! Core types for Time Rush.
//!
//! This module provides typed records for the storefront's domain concepts
//! and the rules that turn loosely-shaped persisted data into them.

pub mod cart;
pub mod catalog;
pub mod category;
mod coerce;
pub mod export;
pub mod id;
pub mod price;
pub mod product;
pub mod settings;

pub use cart::{Cart, CartLine};
pub use catalog::default_catalog;
pub use category::{DEFAULT_CATEGORY, canonical_category, normalize_categories};
pub use export::{APP_NAME, ExportDocument};
pub use id::{ProductId, ProductIdError};
pub use price::{discount_percent, format_money};
pub use product::{Product, RawProduct, find_product};
pub use settings::Settings;
