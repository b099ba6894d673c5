//! Product category canonicalization.
//!
//! A product has one primary category, used by simple admin views, and a
//! category set used for storefront filtering. Both are canonicalized the
//! same way so filters can compare them directly.

use serde_json::Value;

use super::coerce;

/// Category assigned when a product names none.
pub const DEFAULT_CATEGORY: &str = "classic";

/// Canonical form of a category name: trimmed, lowercased, with common
/// aliases folded into their canonical spelling.
///
/// # Examples
///
/// ```
/// use time_rush_core::canonical_category;
///
/// assert_eq!(canonical_category(" Sport "), "sport");
/// assert_eq!(canonical_category("Feature"), "featured");
/// assert_eq!(canonical_category("features"), "featured");
/// ```
#[must_use]
pub fn canonical_category(raw: &str) -> String {
    let v = raw.trim().to_lowercase();
    match v.as_str() {
        "feature" | "features" => "featured".to_owned(),
        _ => v,
    }
}

/// Compute the primary category and category set of a raw record.
///
/// The primary category comes from `category` (blank means
/// [`DEFAULT_CATEGORY`]). The set comes from `categories` when that is an
/// array, otherwise it holds the primary alone. Every entry is
/// canonicalized, blanks are dropped, the primary is prepended when absent,
/// and duplicates are removed keeping the first occurrence.
#[must_use]
pub fn normalize_categories(
    category: Option<&Value>,
    categories: Option<&Value>,
) -> (String, Vec<String>) {
    let raw_primary = coerce::text(category);
    let raw_primary = if raw_primary.is_empty() {
        DEFAULT_CATEGORY
    } else {
        raw_primary.as_str()
    };
    let mut primary = canonical_category(raw_primary);
    if primary.is_empty() {
        primary = DEFAULT_CATEGORY.to_owned();
    }

    let mut cats: Vec<String> = match categories {
        Some(Value::Array(items)) => items
            .iter()
            .map(|c| canonical_category(&coerce::text(Some(c))))
            .filter(|c| !c.is_empty())
            .collect(),
        _ => vec![primary.clone()],
    };

    if !cats.contains(&primary) {
        cats.insert(0, primary.clone());
    }

    let mut seen = Vec::with_capacity(cats.len());
    cats.retain(|c| {
        if seen.contains(c) {
            false
        } else {
            seen.push(c.clone());
            true
        }
    });

    (primary, cats)
}
