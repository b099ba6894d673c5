//! Catalog export document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Product, Settings};

/// Value of the `app` field in every export.
pub const APP_NAME: &str = "TimeRush";

/// A full snapshot of the store's settings and catalog.
///
/// Serialized as `{settings, products, exportedAt, app}` with `exportedAt`
/// as an RFC 3339 UTC timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub settings: Settings,
    pub products: Vec<Product>,
    pub exported_at: DateTime<Utc>,
    pub app: String,
}

impl ExportDocument {
    /// Build an export stamped with the current time.
    #[must_use]
    pub fn new(settings: Settings, products: Vec<Product>) -> Self {
        Self {
            settings,
            products,
            exported_at: Utc::now(),
            app: APP_NAME.to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_export_shape() {
        let doc = ExportDocument::new(
            Settings::default(),
            vec![Product::normalize(json!({"id": "a", "name": "A"}))],
        );
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["app"], "TimeRush");
        assert_eq!(value["settings"]["storeName"], "Time Rush");
        assert_eq!(value["products"][0]["id"], "a");

        let stamp = value["exportedAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}
