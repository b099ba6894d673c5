//! Catalog products and their normalization.
//!
//! Products are persisted verbatim and normalized on every read, so the
//! stored shape is only loosely trusted. [`RawProduct`] captures whatever a
//! stored record holds; converting it into a [`Product`] applies the
//! canonical shape:
//!
//! 1. primary category and category set (see [`normalize_categories`])
//! 2. `price` / `compareAtPrice` coerced to non-negative numbers
//! 3. `id`, `name`, `brand` trimmed; other text fields coerced as-is
//! 4. `images` from a non-empty list, else the single `image`, else empty
//! 5. `active` unless explicitly `false`
//!
//! Normalization is idempotent: a normalized product serialized and
//! normalized again is unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::normalize_categories;
use super::coerce;
use super::price::discount_percent;

/// A product record as found in storage or an import file.
///
/// Every field is optional and may hold any JSON value. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProduct {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub brand: Option<Value>,
    pub category: Option<Value>,
    pub categories: Option<Value>,
    pub price: Option<Value>,
    pub compare_at_price: Option<Value>,
    pub badge: Option<Value>,
    pub image: Option<Value>,
    pub images: Option<Value>,
    pub short_description: Option<Value>,
    pub description: Option<Value>,
    pub highlights: Option<Value>,
    pub specs: Option<Value>,
    pub active: Option<Value>,
}

impl RawProduct {
    /// Read a raw record from an arbitrary JSON value.
    ///
    /// Values that are not objects yield an empty record, which normalizes
    /// to a product without id or name.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// A normalized catalog product.
///
/// Deserializing a `Product` always runs normalization, so a `Product` value
/// upholds the category invariant: `categories` is non-empty, contains
/// `category`, and has no duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawProduct")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// Primary category, used by simple admin views.
    pub category: String,
    /// Every category the product belongs to, for storefront filtering.
    pub categories: Vec<String>,
    pub price: f64,
    /// Previous price; `0` means no discount.
    pub compare_at_price: f64,
    pub badge: String,
    pub image: String,
    pub images: Vec<String>,
    pub short_description: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub specs: BTreeMap<String, String>,
    pub active: bool,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        let (category, categories) =
            normalize_categories(raw.category.as_ref(), raw.categories.as_ref());

        let image = coerce::text(raw.image.as_ref());
        let images = match coerce::text_list(raw.images.as_ref()) {
            Some(list) if !list.is_empty() => list,
            _ if !image.is_empty() => vec![image.clone()],
            _ => Vec::new(),
        };

        let specs = match raw.specs {
            Some(Value::Object(map)) => map
                .into_iter()
                .map(|(k, v)| (k, coerce::text(Some(&v))))
                .collect(),
            _ => BTreeMap::new(),
        };

        Self {
            id: coerce::text(raw.id.as_ref()).trim().to_owned(),
            name: coerce::text(raw.name.as_ref()).trim().to_owned(),
            brand: coerce::text(raw.brand.as_ref()).trim().to_owned(),
            category,
            categories,
            price: coerce::amount(raw.price.as_ref()),
            compare_at_price: coerce::amount(raw.compare_at_price.as_ref()),
            badge: coerce::text(raw.badge.as_ref()),
            image,
            images,
            short_description: coerce::text(raw.short_description.as_ref()),
            description: coerce::text(raw.description.as_ref()),
            highlights: coerce::text_list(raw.highlights.as_ref()).unwrap_or_default(),
            specs,
            active: !matches!(raw.active, Some(Value::Bool(false))),
        }
    }
}

impl Product {
    /// Normalize an arbitrary JSON value into a product.
    #[must_use]
    pub fn normalize(value: Value) -> Self {
        RawProduct::from_value(value).into()
    }

    /// Whether the product can be listed: both id and name are present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty()
    }

    /// Case-insensitive membership in the category set.
    ///
    /// A blank category never matches.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        let wanted = category.trim().to_lowercase();
        if wanted.is_empty() {
            return false;
        }
        self.categories
            .iter()
            .any(|c| c.trim().to_lowercase() == wanted)
    }

    /// Whether the compare-at price marks this product as discounted.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price > self.price
    }

    /// The badge to show next to the product: the explicit badge, or `Sale`
    /// for discounted products without one.
    #[must_use]
    pub fn display_badge(&self) -> Option<&str> {
        if !self.badge.is_empty() {
            Some(&self.badge)
        } else if self.is_on_sale() {
            Some("Sale")
        } else {
            None
        }
    }

    /// Whole-number discount percentage, see [`discount_percent`].
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        discount_percent(self.price, self.compare_at_price)
    }
}

/// Find a product by id, comparing both sides trimmed.
#[must_use]
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    let id = id.trim();
    products.iter().find(|p| p.id.trim() == id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renormalize(product: &Product) -> Product {
        Product::normalize(serde_json::to_value(product).unwrap())
    }

    #[test]
    fn test_normalize_full_record() {
        let p = Product::normalize(json!({
            "id": "  seiko-presage ",
            "name": " Seiko Presage ",
            "brand": "Seiko",
            "category": "Dress",
            "categories": ["dress", "Featured"],
            "price": "425",
            "compareAtPrice": 500,
            "badge": "New",
            "image": "img/presage.jpg",
            "shortDescription": "Cocktail time",
            "highlights": ["Automatic", "Enamel dial"],
            "specs": {"Case": "40.5mm", "Water resistance": "50m"},
        }));

        assert_eq!(p.id, "seiko-presage");
        assert_eq!(p.name, "Seiko Presage");
        assert_eq!(p.category, "dress");
        assert_eq!(p.categories, vec!["dress", "featured"]);
        assert!((p.price - 425.0).abs() < f64::EPSILON);
        assert!((p.compare_at_price - 500.0).abs() < f64::EPSILON);
        assert_eq!(p.images, vec!["img/presage.jpg"]);
        assert_eq!(p.highlights, vec!["Automatic", "Enamel dial"]);
        assert_eq!(p.specs.get("Case").map(String::as_str), Some("40.5mm"));
        assert!(p.active);
    }

    #[test]
    fn test_normalize_empty_record() {
        let p = Product::normalize(json!({}));
        assert_eq!(p.id, "");
        assert_eq!(p.category, "classic");
        assert_eq!(p.categories, vec!["classic"]);
        assert!(p.images.is_empty());
        assert!(p.specs.is_empty());
        assert!(p.active);
        assert!(!p.is_valid());
    }

    #[test]
    fn test_normalize_non_object() {
        let p = Product::normalize(json!(42));
        assert!(!p.is_valid());
        assert_eq!(p.category, "classic");
    }

    #[test]
    fn test_feature_alias_becomes_featured() {
        let p = Product::normalize(json!({"id": "a", "name": "A", "category": "feature"}));
        assert_eq!(p.category, "featured");
        assert_eq!(p.categories, vec!["featured"]);
    }

    #[test]
    fn test_invalid_prices_default_to_zero() {
        let p = Product::normalize(json!({"price": "call us", "compareAtPrice": null}));
        assert!(p.price.abs() < f64::EPSILON);
        assert!(p.compare_at_price.abs() < f64::EPSILON);
    }

    #[test]
    fn test_active_only_false_when_explicit() {
        assert!(!Product::normalize(json!({"active": false})).active);
        assert!(Product::normalize(json!({"active": "no"})).active);
        assert!(Product::normalize(json!({"active": 0})).active);
        assert!(Product::normalize(json!({"active": null})).active);
    }

    #[test]
    fn test_images_prefer_list_over_single() {
        let p = Product::normalize(json!({"image": "a.jpg", "images": ["b.jpg", "c.jpg"]}));
        assert_eq!(p.image, "a.jpg");
        assert_eq!(p.images, vec!["b.jpg", "c.jpg"]);

        let p = Product::normalize(json!({"image": "a.jpg", "images": []}));
        assert_eq!(p.images, vec!["a.jpg"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = Product::normalize(json!({
            "id": " x ",
            "name": "X",
            "category": "Features",
            "categories": ["sport", "sport", "FEATURE"],
            "price": "12.5",
            "image": "x.png",
            "specs": {"a": 1, "b": null},
            "active": false,
        }));
        assert_eq!(renormalize(&once), once);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let p: Product =
            serde_json::from_str(r#"{"id":"a","name":"A","category":"features"}"#).unwrap();
        assert_eq!(p.category, "featured");
        assert!(p.active);
    }

    #[test]
    fn test_serializes_camel_case() {
        let p = Product::normalize(json!({"id": "a", "name": "A", "compareAtPrice": 10}));
        let value = serde_json::to_value(&p).unwrap();
        assert!(value.get("compareAtPrice").is_some());
        assert!(value.get("shortDescription").is_some());
        assert!(value.get("compare_at_price").is_none());
    }

    #[test]
    fn test_has_category() {
        let p = Product::normalize(json!({"category": "sport", "categories": ["luxury"]}));
        assert!(p.has_category("SPORT"));
        assert!(p.has_category(" luxury "));
        assert!(!p.has_category("dress"));
        assert!(!p.has_category(""));
    }

    #[test]
    fn test_display_badge() {
        let sale = Product::normalize(json!({"price": 80, "compareAtPrice": 100}));
        assert_eq!(sale.display_badge(), Some("Sale"));
        assert_eq!(sale.discount_percent(), 20);

        let badged = Product::normalize(json!({"badge": "Limited", "price": 80}));
        assert_eq!(badged.display_badge(), Some("Limited"));

        let plain = Product::normalize(json!({"price": 80}));
        assert_eq!(plain.display_badge(), None);
    }

    #[test]
    fn test_find_product_trims_both_sides() {
        let products = vec![
            Product::normalize(json!({"id": "a", "name": "A"})),
            Product::normalize(json!({"id": "b", "name": "B"})),
        ];
        assert_eq!(find_product(&products, "  b ").map(|p| p.name.as_str()), Some("B"));
        assert!(find_product(&products, "c").is_none());
    }
}
