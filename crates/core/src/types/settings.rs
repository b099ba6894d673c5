//! Store settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Site-wide store settings.
///
/// Deserialization layers the stored fields over [`Settings::default`] one
/// field at a time: a known field that is missing, `null` or not a string
/// keeps its default without affecting the others. Fields this type does
/// not know about are carried along unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct Settings {
    pub store_name: String,
    pub tagline: String,
    pub currency_symbol: String,
    pub contact_email: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_name: "Time Rush".to_owned(),
            tagline: "Premium watches, delivered on time.".to_owned(),
            currency_symbol: "$".to_owned(),
            contact_email: "support@timerush.example".to_owned(),
            extra: BTreeMap::new(),
        }
    }
}

impl From<Map<String, Value>> for Settings {
    fn from(stored: Map<String, Value>) -> Self {
        let mut settings = Self::default();

        for (key, value) in stored {
            let field = match key.as_str() {
                "storeName" => &mut settings.store_name,
                "tagline" => &mut settings.tagline,
                "currencySymbol" => &mut settings.currency_symbol,
                "contactEmail" => &mut settings.contact_email,
                _ => {
                    settings.extra.insert(key, value);
                    continue;
                }
            };
            if let Value::String(text) = value {
                *field = text;
            }
        }

        settings
    }
}
