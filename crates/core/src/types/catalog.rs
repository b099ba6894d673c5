//! Built-in default catalog.
//!
//! Used whenever no product list has been persisted, and written back by a
//! reset. Records are kept in their raw stored shape and go through the
//! same normalization as persisted data.

use serde_json::{Value, json};

/// The default product records, in display order.
#[must_use]
pub fn default_catalog() -> Vec<Value> {
    vec![
        json!({
            "id": "seiko-presage-cocktail",
            "name": "Seiko Presage Cocktail Time",
            "brand": "Seiko",
            "category": "featured",
            "categories": ["featured", "dress"],
            "price": 425,
            "compareAtPrice": 495,
            "badge": "Best seller",
            "image": "assets/images/products/seiko-presage.jpg",
            "shortDescription": "Automatic dress watch with a textured sunburst dial.",
            "description": "Inspired by Japanese cocktail culture, the Presage pairs a 4R35 automatic movement with a dial that shifts with the light.",
            "highlights": ["Automatic 4R35 movement", "Hardlex crystal", "41-hour power reserve"],
            "specs": {
                "Case": "40.5mm stainless steel",
                "Water resistance": "50m",
                "Movement": "Seiko 4R35"
            }
        }),
        json!({
            "id": "casio-gshock-ga2100",
            "name": "G-Shock GA-2100",
            "brand": "Casio",
            "category": "sport",
            "price": 99,
            "image": "assets/images/products/gshock-ga2100.jpg",
            "shortDescription": "Octagonal carbon-core guard structure.",
            "description": "Slim, shock resistant and built for daily wear, with analog-digital display and world time.",
            "highlights": ["Carbon core guard", "200m water resistance", "World time"],
            "specs": {
                "Case": "45.4mm resin",
                "Water resistance": "200m",
                "Battery": "Approx. 3 years"
            }
        }),
        json!({
            "id": "tissot-prx-40",
            "name": "Tissot PRX 40mm",
            "brand": "Tissot",
            "category": "Features",
            "categories": ["feature", "classic"],
            "price": 375,
            "compareAtPrice": 0,
            "badge": "",
            "image": "assets/images/products/tissot-prx.jpg",
            "images": [
                "assets/images/products/tissot-prx.jpg",
                "assets/images/products/tissot-prx-side.jpg"
            ],
            "shortDescription": "Integrated bracelet, 1970s silhouette.",
            "description": "A revival of a 1978 design with a tapered integrated bracelet and a crisp quartz movement.",
            "highlights": ["Integrated bracelet", "Sapphire crystal"],
            "specs": {
                "Case": "40mm stainless steel",
                "Water resistance": "100m"
            }
        }),
        json!({
            "id": "orient-bambino-v2",
            "name": "Orient Bambino V2",
            "brand": "Orient",
            "category": "classic",
            "price": 149,
            "compareAtPrice": 189,
            "image": "assets/images/products/orient-bambino.jpg",
            "shortDescription": "Domed crystal and a vintage dial.",
            "description": "An accessible automatic dress watch with a domed mineral crystal and applied indices.",
            "highlights": ["Automatic movement", "Domed crystal"],
            "specs": {
                "Case": "40.5mm stainless steel",
                "Water resistance": "30m"
            }
        }),
        json!({
            "id": "citizen-promaster-diver",
            "name": "Citizen Promaster Diver",
            "brand": "Citizen",
            "category": "sport",
            "categories": ["sport", "featured"],
            "price": 295,
            "image": "assets/images/products/citizen-promaster.jpg",
            "shortDescription": "Light-powered ISO diver.",
            "description": "Eco-Drive keeps it running on any light source, with a unidirectional bezel and screw-down crown.",
            "highlights": ["Eco-Drive", "ISO 6425 certified"],
            "specs": {
                "Case": "44mm stainless steel",
                "Water resistance": "200m"
            }
        }),
        json!({
            "id": "hamilton-khaki-field",
            "name": "Hamilton Khaki Field Mechanical",
            "brand": "Hamilton",
            "category": "classic",
            "price": 525,
            "badge": "Back soon",
            "image": "assets/images/products/hamilton-khaki.jpg",
            "shortDescription": "Hand-wound field watch with 80-hour reserve.",
            "description": "A military heritage field watch with the H-50 hand-wound movement.",
            "highlights": ["80-hour power reserve", "Sapphire crystal"],
            "specs": {
                "Case": "38mm stainless steel",
                "Water resistance": "50m"
            },
            "active": false
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Product;

    #[test]
    fn test_default_catalog_normalizes_cleanly() {
        let products: Vec<Product> = default_catalog().into_iter().map(Product::normalize).collect();
        assert_eq!(products.len(), 6);
        assert!(products.iter().all(Product::is_valid));
    }

    #[test]
    fn test_default_catalog_ids_are_unique() {
        let products: Vec<Product> = default_catalog().into_iter().map(Product::normalize).collect();
        for (i, p) in products.iter().enumerate() {
            assert!(products.iter().skip(i + 1).all(|q| q.id != p.id), "duplicate id {}", p.id);
        }
    }

    #[test]
    fn test_default_catalog_aliases_are_folded() {
        let products: Vec<Product> = default_catalog().into_iter().map(Product::normalize).collect();
        let prx = products.iter().find(|p| p.id == "tissot-prx-40");
        let prx = prx.map(|p| (p.category.as_str(), p.categories.clone()));
        assert_eq!(
            prx,
            Some(("featured", vec!["featured".to_owned(), "classic".to_owned()]))
        );
    }
}
