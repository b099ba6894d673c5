//! Persistence keys.
//!
//! Keys are versioned so a future change of stored shape can move to a new
//! key instead of migrating in place.

/// Product list (JSON array of product records).
pub const PRODUCTS: &str = "tr_products_v1";

/// Store settings (JSON object, may be partial).
pub const SETTINGS: &str = "tr_settings_v1";

/// Cart (JSON object of product id to quantity).
pub const CART: &str = "tr_cart_v1";

/// Admin password (plain string).
pub const ADMIN_PASSWORD: &str = "tr_admin_pass_v1";

/// Session-scoped keys, stored separately from the persistent ones.
pub mod session {
    /// Authentication flag: `"1"` when the admin has logged in this session.
    pub const ADMIN_AUTHED: &str = "tr_admin_authed_v1";
}
