//! Admin form parsing.
//!
//! Forms carry fields exactly as typed. Converting a form produces the
//! record that gets persisted; normalization of that record happens on the
//! next load like for any stored product.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use time_rush_core::{DEFAULT_CATEGORY, Product, ProductId, Settings};

use crate::AdminError;

/// The product editor's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    /// Requested id; the name is used when blank. Slugged on save.
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: String,
    pub compare_at_price: String,
    pub badge: String,
    pub image: String,
    pub short_description: String,
    pub description: String,
    /// Comma-separated list.
    pub highlights: String,
    /// One `key: value` pair per line.
    pub specs: String,
    pub active: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            brand: String::new(),
            category: DEFAULT_CATEGORY.to_owned(),
            price: String::new(),
            compare_at_price: String::new(),
            badge: String::new(),
            image: String::new(),
            short_description: String::new(),
            description: String::new(),
            highlights: String::new(),
            specs: String::new(),
            active: true,
        }
    }
}

impl ProductForm {
    /// Prefill the editor from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            compare_at_price: product.compare_at_price.to_string(),
            badge: product.badge.clone(),
            image: product.image.clone(),
            short_description: product.short_description.clone(),
            description: product.description.clone(),
            highlights: product.highlights.join(", "),
            specs: product
                .specs
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("\n"),
            active: product.active,
        }
    }

    /// Build the stored record for this form.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::MissingIdOrName`] when the name is blank or
    /// nothing usable remains of the id.
    pub fn to_record(&self) -> Result<Map<String, Value>, AdminError> {
        let name = self.name.trim();
        let id_source = match self.id.trim() {
            "" => name,
            id => id,
        };
        let id = ProductId::parse(id_source).map_err(|_| AdminError::MissingIdOrName)?;
        if name.is_empty() {
            return Err(AdminError::MissingIdOrName);
        }

        let image = self.image.trim();
        let images: Vec<&str> = if image.is_empty() { Vec::new() } else { vec![image] };

        let fields = [
            ("id", json!(id.as_str())),
            ("name", json!(name)),
            ("brand", json!(self.brand.trim())),
            ("category", json!(self.category)),
            ("price", json!(parse_amount(&self.price))),
            ("compareAtPrice", json!(parse_amount(&self.compare_at_price))),
            ("badge", json!(self.badge.trim())),
            ("image", json!(image)),
            ("images", json!(images)),
            ("shortDescription", json!(self.short_description.trim())),
            ("description", json!(self.description.trim())),
            ("highlights", json!(parse_highlights(&self.highlights))),
            ("specs", json!(parse_specs(&self.specs))),
            ("active", json!(self.active)),
        ];

        Ok(fields
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect())
    }
}

/// Parse a price field. Blank or non-numeric input is `0`.
fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Split a comma-separated list, dropping blank entries.
fn parse_highlights(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse `key: value` lines.
///
/// Lines without a colon or with a blank key are skipped. Only the first
/// colon separates, so values may contain colons. Later duplicates win.
fn parse_specs(raw: &str) -> BTreeMap<&str, &str> {
    raw.lines()
        .map(str::trim)
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

/// The settings form's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub store_name: String,
    pub tagline: String,
    pub currency_symbol: String,
    pub contact_email: String,
}

impl SettingsForm {
    /// Prefill the form from the current settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            store_name: settings.store_name.clone(),
            tagline: settings.tagline.clone(),
            currency_symbol: settings.currency_symbol.clone(),
            contact_email: settings.contact_email.clone(),
        }
    }

    /// Apply the form over `current`. Blank fields keep the current value.
    #[must_use]
    pub fn apply(&self, current: Settings) -> Settings {
        fn pick(field: &str, current: String) -> String {
            match field.trim() {
                "" => current,
                v => v.to_owned(),
            }
        }

        Settings {
            store_name: pick(&self.store_name, current.store_name),
            tagline: pick(&self.tagline, current.tagline),
            currency_symbol: pick(&self.currency_symbol, current.currency_symbol),
            contact_email: pick(&self.contact_email, current.contact_email),
            extra: current.extra,
        }
    }
}
