//! Storefront data facade.
//!
//! Every operation here is infallible from the caller's point of view. Store
//! errors are logged and treated as absence (reads) or dropped (writes);
//! malformed JSON is treated as absence.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use time_rush_core::{Cart, Product, Settings, default_catalog, format_money};

use crate::keys;
use crate::kv::KeyValueStore;

/// Password seeded on first access when none is stored.
pub const DEFAULT_ADMIN_PASSWORD: &str = "timerush";

/// Reads and writes storefront state through a [`KeyValueStore`].
#[derive(Debug)]
pub struct Storefront<S> {
    store: S,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Wrap a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Raw access
    // =========================================================================

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Store read failed, using fallback");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, error = %e, "Store write failed, change not persisted");
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(key, error = %e, "Stored value is not valid, using fallback");
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.write(key, &json),
            Err(e) => tracing::warn!(key, error = %e, "Failed to serialize value"),
        }
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Stored settings layered over the defaults, field by field.
    ///
    /// Returns the defaults when nothing is stored or the stored value is
    /// not a JSON object.
    pub fn load_settings(&self) -> Settings {
        self.read_json(keys::SETTINGS).unwrap_or_default()
    }

    /// Persist settings verbatim.
    pub fn save_settings<T: Serialize + ?Sized>(&self, settings: &T) {
        self.write_json(keys::SETTINGS, settings);
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// The normalized catalog.
    ///
    /// Uses the stored list when it is a non-empty array, otherwise the
    /// default catalog. Products without an id or name are dropped.
    pub fn load_products(&self) -> Vec<Product> {
        let raw = match self.read_json::<Vec<Value>>(keys::PRODUCTS) {
            Some(saved) if !saved.is_empty() => saved,
            _ => {
                tracing::debug!("No stored products, using default catalog");
                default_catalog()
            }
        };

        raw.into_iter()
            .map(Product::normalize)
            .filter(Product::is_valid)
            .collect()
    }

    /// Persist a product list verbatim.
    ///
    /// Records are not normalized here; that happens on every load.
    pub fn save_products<T: Serialize>(&self, products: &[T]) {
        self.write_json(keys::PRODUCTS, products);
    }

    /// Replace the stored catalog with the default one and return it
    /// normalized.
    pub fn reset_products_to_default(&self) -> Vec<Product> {
        self.save_products(&default_catalog());
        self.load_products()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The stored cart, empty when absent or unparsable.
    pub fn load_cart(&self) -> Cart {
        self.read_json(keys::CART).unwrap_or_default()
    }

    pub fn save_cart(&self, cart: &Cart) {
        self.write_json(keys::CART, cart);
    }

    /// Change the quantity of `id` by `qty` and persist.
    ///
    /// A missing or zero `qty` adds one. The entry is removed when the
    /// result is not positive.
    pub fn add_to_cart(&self, id: &str, qty: Option<i64>) -> Cart {
        let delta = qty.filter(|&q| q != 0).unwrap_or(1);
        let mut cart = self.load_cart();
        cart.add(id, delta);
        self.save_cart(&cart);
        cart
    }

    /// Set the quantity of `id` and persist. A non-positive `qty` removes it.
    pub fn set_qty(&self, id: &str, qty: i64) -> Cart {
        let mut cart = self.load_cart();
        cart.set(id, qty);
        self.save_cart(&cart);
        cart
    }

    pub fn remove_from_cart(&self, id: &str) -> Cart {
        let mut cart = self.load_cart();
        cart.remove(id);
        self.save_cart(&cart);
        cart
    }

    pub fn clear_cart(&self) -> Cart {
        let cart = Cart::new();
        self.save_cart(&cart);
        cart
    }

    // =========================================================================
    // Display helpers
    // =========================================================================

    /// Format an amount with the store's currency symbol.
    ///
    /// Loads the settings when none are given.
    pub fn format_money(&self, amount: f64, settings: Option<&Settings>) -> String {
        match settings {
            Some(s) => format_money(amount, &s.currency_symbol),
            None => format_money(amount, &self.load_settings().currency_symbol),
        }
    }

    // =========================================================================
    // Admin credential
    // =========================================================================

    /// The admin password, seeding [`DEFAULT_ADMIN_PASSWORD`] when none is
    /// stored.
    pub fn admin_password(&self) -> String {
        match self.read(keys::ADMIN_PASSWORD) {
            Some(current) if !current.is_empty() => current,
            _ => {
                tracing::info!("Seeding default admin password");
                self.write(keys::ADMIN_PASSWORD, DEFAULT_ADMIN_PASSWORD);
                DEFAULT_ADMIN_PASSWORD.to_owned()
            }
        }
    }

    /// Persist a new admin password, trimmed.
    pub fn set_admin_password(&self, password: &str) {
        self.write(keys::ADMIN_PASSWORD, password.trim());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{MemoryStore, StoreError};
    use serde_json::json;

    /// Store that fails every operation.
    struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("private mode".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("private mode".to_string()))
        }
    }

    fn storefront() -> Storefront<MemoryStore> {
        Storefront::new(MemoryStore::new())
    }

    fn raw(sf: &Storefront<MemoryStore>, key: &str) -> Option<Value> {
        sf.store()
            .get(key)
            .unwrap()
            .map(|s| serde_json::from_str(&s).unwrap())
    }

    #[test]
    fn test_load_settings_defaults() {
        assert_eq!(storefront().load_settings(), Settings::default());
    }

    #[test]
    fn test_load_settings_merges_partial() {
        let sf = storefront();
        sf.save_settings(&json!({"tagline": "X"}));

        let s = sf.load_settings();
        assert_eq!(s.tagline, "X");
        assert_eq!(s.store_name, Settings::default().store_name);
    }

    #[test]
    fn test_load_settings_malformed_falls_back() {
        let sf = Storefront::new(MemoryStore::with_entries([(keys::SETTINGS, "{not json")]));
        assert_eq!(sf.load_settings(), Settings::default());
    }

    #[test]
    fn test_load_products_defaults_when_absent() {
        let products = storefront().load_products();
        let expected: Vec<Product> = default_catalog().into_iter().map(Product::normalize).collect();
        assert_eq!(products, expected);
    }

    #[test]
    fn test_load_products_defaults_when_empty_array() {
        let sf = storefront();
        sf.save_products::<Value>(&[]);
        assert_eq!(sf.load_products().len(), default_catalog().len());
    }

    #[test]
    fn test_load_products_normalizes_and_filters() {
        let sf = storefront();
        sf.save_products(&[
            json!({"id": " a ", "name": "A", "category": "feature"}),
            json!({"id": "", "name": "No id"}),
            json!({"id": "no-name"}),
            json!(null),
        ]);

        let products = sf.load_products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "a");
        assert_eq!(products[0].category, "featured");
    }

    #[test]
    fn test_save_products_is_verbatim() {
        let sf = storefront();
        sf.save_products(&[json!({"id": "a", "name": "A", "legacy": true})]);
        assert_eq!(
            raw(&sf, keys::PRODUCTS),
            Some(json!([{"id": "a", "name": "A", "legacy": true}]))
        );
    }

    #[test]
    fn test_reset_products_to_default() {
        let sf = storefront();
        sf.save_products(&[json!({"id": "a", "name": "A"})]);

        let products = sf.reset_products_to_default();
        assert_eq!(products.len(), default_catalog().len());
        assert_eq!(raw(&sf, keys::PRODUCTS), Some(Value::Array(default_catalog())));
    }

    #[test]
    fn test_default_catalog_keeps_inactive_flag() {
        let products = storefront().load_products();
        let inactive: Vec<&str> = products
            .iter()
            .filter(|p| !p.active)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(inactive, vec!["hamilton-khaki-field"]);
    }

    #[test]
    fn test_add_to_cart_defaults_to_one() {
        let sf = storefront();
        sf.add_to_cart("a", None);
        let cart = sf.add_to_cart("a", Some(0));
        assert_eq!(cart.quantity("a"), 2);
        assert_eq!(sf.load_cart(), cart);
    }

    #[test]
    fn test_add_to_cart_negative_removes() {
        let sf = storefront();
        sf.add_to_cart("a", Some(2));
        let cart = sf.add_to_cart("a", Some(-5));
        assert!(cart.is_empty());
        assert_eq!(raw(&sf, keys::CART), Some(json!({})));
    }

    #[test]
    fn test_set_qty_and_remove() {
        let sf = storefront();
        sf.set_qty("a", 3);
        sf.set_qty("b", 1);
        assert_eq!(sf.load_cart().count(), 4);

        let cart = sf.set_qty("a", 0);
        assert_eq!(cart.quantity("a"), 0);
        assert_eq!(cart.len(), 1);

        let cart = sf.remove_from_cart("b");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_cart() {
        let sf = storefront();
        sf.add_to_cart("a", Some(3));
        assert!(sf.clear_cart().is_empty());
        assert!(sf.load_cart().is_empty());
    }

    #[test]
    fn test_load_cart_malformed_is_empty() {
        let sf = Storefront::new(MemoryStore::with_entries([(keys::CART, "[1,2]")]));
        assert!(sf.load_cart().is_empty());
    }

    #[test]
    fn test_format_money_uses_settings() {
        let sf = storefront();
        assert_eq!(sf.format_money(12.0, None), "$12.00");

        sf.save_settings(&json!({"currencySymbol": "€"}));
        assert_eq!(sf.format_money(12.0, None), "€12.00");

        let settings = Settings {
            currency_symbol: "£".to_string(),
            ..Settings::default()
        };
        assert_eq!(sf.format_money(3.456, Some(&settings)), "£3.46");
    }

    #[test]
    fn test_admin_password_seeded_once() {
        let sf = storefront();
        assert_eq!(sf.store().get(keys::ADMIN_PASSWORD).unwrap(), None);
        assert_eq!(sf.admin_password(), DEFAULT_ADMIN_PASSWORD);
        assert_eq!(
            sf.store().get(keys::ADMIN_PASSWORD).unwrap().as_deref(),
            Some(DEFAULT_ADMIN_PASSWORD)
        );

        sf.set_admin_password("  hunter22  ");
        assert_eq!(sf.admin_password(), "hunter22");
    }

    #[test]
    fn test_unavailable_store_degrades_to_defaults() {
        let sf = Storefront::new(UnavailableStore);

        assert_eq!(sf.load_settings(), Settings::default());
        assert_eq!(sf.load_products().len(), default_catalog().len());
        assert!(sf.load_cart().is_empty());
        assert_eq!(sf.add_to_cart("a", None).quantity("a"), 1);
        assert_eq!(sf.admin_password(), DEFAULT_ADMIN_PASSWORD);

        sf.save_settings(&Settings::default());
        sf.set_admin_password("ignored");
        assert!(sf.clear_cart().is_empty());
    }
}
