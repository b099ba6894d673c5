//! Shopping cart quantities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::coerce;
use super::product::{Product, find_product};

/// Mapping from product id to quantity.
///
/// Every stored quantity is positive: operations that would leave an entry
/// at zero or below remove it instead. Deserialization applies the same rule
/// to stored data, dropping entries whose quantity is not a positive number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct Cart {
    items: BTreeMap<String, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the quantity of `id` by `delta`, removing the entry when the
    /// result is not positive.
    pub fn add(&mut self, id: &str, delta: i64) {
        let next = i64::from(self.quantity(id)).saturating_add(delta);
        self.set(id, next);
    }

    /// Set the quantity of `id`, removing the entry when `qty` is not
    /// positive.
    pub fn set(&mut self, id: &str, qty: i64) {
        if qty <= 0 {
            self.items.remove(id);
        } else {
            let qty = u32::try_from(qty).unwrap_or(u32::MAX);
            self.items.insert(id.to_owned(), qty);
        }
    }

    /// Remove `id` from the cart, returning its quantity if it was present.
    pub fn remove(&mut self, id: &str) -> Option<u32> {
        self.items.remove(id)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Quantity of `id`, `0` when absent.
    #[must_use]
    pub fn quantity(&self, id: &str) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    /// Total number of items across all entries.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(id, quantity)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, &q)| (id.as_str(), q))
    }

    /// Resolve entries against the catalog, skipping ids it does not contain.
    #[must_use]
    pub fn lines<'a>(&self, products: &'a [Product]) -> Vec<CartLine<'a>> {
        self.iter()
            .filter_map(|(id, quantity)| {
                find_product(products, id).map(|product| CartLine { product, quantity })
            })
            .collect()
    }

    /// Sum of line totals for the entries found in the catalog.
    #[must_use]
    pub fn subtotal(&self, products: &[Product]) -> f64 {
        self.lines(products).iter().map(CartLine::line_total).sum()
    }
}

/// A cart entry resolved to its product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

impl CartLine<'_> {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

impl From<BTreeMap<String, Value>> for Cart {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut cart = Self::new();
        for (id, qty) in raw {
            cart.set(&id, coerce::integer(&qty));
        }
        cart
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}
