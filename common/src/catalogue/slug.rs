//! URL ids for products.
//!
//! A product is addressed by its store key. Records without a key, and links that
//! were written by hand, use a slug derived from the name instead. Slugs are not
//! unique: two names that differ only in punctuation produce the same slug, and
//! lookup returns the first match. `duplicate_ids` exists so callers can log it.

use crate::model::product::Product;
use std::collections::HashMap;

/// `"Silo, Bunker & Hoppers"` -> `"silo-bunker-hoppers"`.
pub fn derive_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        match ch {
            '(' | ')' | '&' | ',' => {}
            ch if ch.is_whitespace() || ch == '-' => {
                if !slug.ends_with('-') {
                    slug.push('-');
                }
            }
            ch => slug.push(ch),
        }
    }
    slug.trim_matches('-').to_string()
}

/// The id used in `/products/{id}` links.
pub fn product_id(product: &Product) -> String {
    if product.id.is_empty() {
        derive_slug(&product.name)
    } else {
        product.id.clone()
    }
}

/// Resolves a detail-view id: store key first, then name slug.
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products
        .iter()
        .find(|product| product_id(product) == id)
        .or_else(|| products.iter().find(|product| derive_slug(&product.name) == id))
}

/// Name slugs shared by more than one product, in first-seen order. Only the first
/// of each resolves through `find_product`.
pub fn duplicate_ids(products: &[Product]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order = Vec::new();
    for product in products {
        let slug = derive_slug(&product.name);
        if slug.is_empty() {
            continue;
        }
        let count = counts.entry(slug.clone()).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(slug);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::normalize::normalize_product;
    use serde_json::json;

    fn product(key: &str, name: &str) -> Product {
        normalize_product(key, &json!({ "name": name })).unwrap()
    }

    #[test]
    fn derives_slugs_like_the_catalogue_links() {
        assert_eq!(derive_slug("Juice Heater"), "juice-heater");
        assert_eq!(derive_slug("Silo, Bunker & Hoppers"), "silo-bunker-hoppers");
        assert_eq!(derive_slug("Conveyor Idlers, Rollers & Pulleys"), "conveyor-idlers-rollers-pulleys");
        assert_eq!(derive_slug("  Crystallizer (Air Cooled)  "), "crystallizer-air-cooled");
        assert_eq!(derive_slug("Elevator  Pressed -- PVC"), "elevator-pressed-pvc");
        assert_eq!(derive_slug(""), "");
    }

    #[test]
    fn lookup_prefers_store_key_then_slug() {
        let products = vec![product("-Nkey1", "Juice Heater"), product("", "Pug Mill")];

        assert_eq!(find_product(&products, "-Nkey1").map(|p| p.name.as_str()), Some("Juice Heater"));
        assert_eq!(find_product(&products, "juice-heater").map(|p| p.id.as_str()), Some("-Nkey1"));
        assert_eq!(find_product(&products, "pug-mill").map(|p| p.name.as_str()), Some("Pug Mill"));
        assert!(find_product(&products, "sugar-melter").is_none());
    }

    #[test]
    fn colliding_names_resolve_to_the_first_product() {
        let products = vec![
            product("", "Rakes & Slats"),
            product("", "Rakes, Slats"),
            product("", "Screw Conveyors"),
        ];

        assert_eq!(duplicate_ids(&products), vec!["rakes-slats"]);
        assert_eq!(
            find_product(&products, "rakes-slats").map(|p| p.name.as_str()),
            Some("Rakes & Slats")
        );
    }
}
