//! Product table filtering.

use time_rush_core::Product;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Search box and category selector of the product table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring matched against name, brand and id.
    pub query: String,
    /// Category to keep; `None`, blank or `"all"` keeps everything.
    pub category: Option<String>,
}

impl ProductFilter {
    /// Whether `product` passes both the category and the search filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category = self.category.as_deref().map_or("", str::trim);
        if !category.is_empty() && category != ALL_CATEGORIES && !product.has_category(category) {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        [&product.name, &product.brand, &product.id]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Keep the products that match, preserving order.
    #[must_use]
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}
