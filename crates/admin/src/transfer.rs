//! Export and import documents.
//!
//! Exports are [`ExportDocument`](time_rush_core::ExportDocument)s. Imports
//! accept any JSON document and take what they recognize: a `products`
//! array and a `settings` object, both written verbatim. Normalization of
//! imported products happens on the next load.

use serde_json::{Map, Value};

use crate::AdminError;

/// Parts of an import document that will be written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPlan {
    pub products: Option<Vec<Value>>,
    pub settings: Option<Map<String, Value>>,
}

impl ImportPlan {
    /// Parse an import document.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidImport`] when `text` is not valid JSON.
    pub fn parse(text: &str) -> Result<Self, AdminError> {
        let doc: Value = serde_json::from_str(text).map_err(AdminError::InvalidImport)?;

        let Value::Object(mut doc) = doc else {
            return Ok(Self::default());
        };

        let products = match doc.remove("products") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        };
        let settings = match doc.remove("settings") {
            Some(Value::Object(map)) => Some(map),
            _ => None,
        };

        Ok(Self { products, settings })
    }

    /// What applying this plan writes.
    #[must_use]
    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            products: self.products.as_ref().map(Vec::len),
            settings: self.settings.is_some(),
        }
    }
}

/// Outcome of an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of product records written, if the document had a list.
    pub products: Option<usize>,
    /// Whether settings were overwritten.
    pub settings: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_document() {
        let plan = ImportPlan::parse(
            r#"{"app":"TimeRush","products":[{"id":"a"},{"id":"b"}],"settings":{"tagline":"X"}}"#,
        )
        .unwrap();

        assert_eq!(plan.products.as_ref().map(Vec::len), Some(2));
        assert_eq!(plan.settings.as_ref().and_then(|s| s.get("tagline")), Some(&json!("X")));
        assert_eq!(
            plan.summary(),
            ImportSummary {
                products: Some(2),
                settings: true
            }
        );
    }

    #[test]
    fn test_parse_ignores_wrong_shapes() {
        let plan = ImportPlan::parse(r#"{"products":{"a":1},"settings":"nope"}"#).unwrap();
        assert_eq!(plan, ImportPlan::default());

        let plan = ImportPlan::parse("[1,2,3]").unwrap();
        assert_eq!(plan.summary(), ImportSummary::default());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            ImportPlan::parse("{\"products\": ["),
            Err(AdminError::InvalidImport(_))
        ));
    }
}
