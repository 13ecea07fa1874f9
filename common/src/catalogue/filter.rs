//! Client-side filters for the product grid and the gallery.

use crate::catalogue::category::{Category, normalize_category};
use crate::catalogue::normalize::text_field;
use crate::model::Snapshot;
use crate::model::gallery::GalleryImage;
use crate::model::product::Product;
use serde_json::Value;

/// Tag of the catch-all chip.
pub const ALL_TAG: &str = "all";

/// Chip selected in the product filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    /// Parses a chip tag or `?category=` value. Blank and `"all"` select everything.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_TAG) {
            CategorySelection::All
        } else {
            CategorySelection::Only(normalize_category(trimmed))
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            CategorySelection::All => ALL_TAG,
            CategorySelection::Only(category) => category.as_tag(),
        }
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => selected == category,
        }
    }
}

/// Products in the selected category, in their original order.
pub fn filter_products<'a>(products: &'a [Product], selection: &CategorySelection) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| selection.matches(&product.category))
        .collect()
}

/// Chips for the filter bar: the canonical tags, then any other tag present in the
/// data in first-seen order.
pub fn category_chips(products: &[Product]) -> Vec<Category> {
    let mut chips = Category::CANONICAL.to_vec();
    for product in products {
        if !chips.contains(&product.category) {
            chips.push(product.category.clone());
        }
    }
    chips
}

/// Decodes a `gallery` snapshot, newest upload first.
///
/// Records that are not objects are skipped. Equal timestamps keep store key order.
pub fn gallery_from_snapshot(snapshot: &Snapshot) -> Vec<GalleryImage> {
    let mut images: Vec<GalleryImage> = snapshot
        .iter()
        .filter_map(|(key, raw)| gallery_image(key, raw))
        .collect();
    images.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
    images
}

/// One stored gallery record, read field by field so odd types degrade instead of
/// dropping the image.
fn gallery_image(key: &str, raw: &Value) -> Option<GalleryImage> {
    let record = raw.as_object()?;
    let text = |name: &str| record.get(name).map(text_field).unwrap_or_default();

    Some(GalleryImage {
        id: key.to_string(),
        title: text("title"),
        category: text("category"),
        image_url: text("imageUrl"),
        uploaded_at: record.get("uploadedAt").map(timestamp).unwrap_or_default(),
        file_name: text("fileName"),
    })
}

/// Milliseconds from an integer, a float or a numeric string; anything else is 0.
fn timestamp(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|millis| millis as i64))
            .unwrap_or_default(),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| {
                    text.parse::<f64>()
                        .ok()
                        .filter(|millis| millis.is_finite())
                        .map(|millis| millis as i64)
                })
                .unwrap_or_default()
        }
        _ => 0,
    }
}

/// Images whose raw category equals `category`; `None` or `"all"` keeps everything.
pub fn filter_gallery<'a>(images: &'a [GalleryImage], category: Option<&str>) -> Vec<&'a GalleryImage> {
    match category {
        None => images.iter().collect(),
        Some(tag) if tag == ALL_TAG => images.iter().collect(),
        Some(tag) => images.iter().filter(|image| image.category == tag).collect(),
    }
}

/// Distinct gallery categories in first-seen order.
pub fn gallery_categories(images: &[GalleryImage]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for image in images {
        if !image.category.is_empty() && !categories.contains(&image.category) {
            categories.push(image.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::normalize::normalize_products;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn catalogue() -> Vec<Product> {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "k1": { "name": "Crystallizer", "category": "Boiling House Equipment" },
            "k2": { "name": "Belt Conveyor", "category": "material handling" },
            "k3": { "name": "Juice Heater", "category": "boiling" },
            "k4": { "name": "Mill Rollers", "category": "Mil House" },
            "k5": { "name": "Storage Tank", "category": "Process & Storage Equipment" }
        }))
        .unwrap();
        normalize_products(&snapshot)
    }

    #[test]
    fn filter_returns_exactly_the_matching_subset() {
        let products = catalogue();
        for chip in category_chips(&products) {
            let selection = CategorySelection::Only(chip.clone());
            let filtered = filter_products(&products, &selection);
            let expected: Vec<&Product> = products.iter().filter(|p| p.category == chip).collect();
            assert_eq!(filtered, expected, "{chip}");
        }
        assert_eq!(filter_products(&products, &CategorySelection::All).len(), products.len());
    }

    #[test]
    fn filter_preserves_store_order() {
        let products = catalogue();
        let names: Vec<_> = filter_products(&products, &CategorySelection::parse("boiling"))
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Crystallizer", "Juice Heater"]);
    }

    #[test]
    fn typos_become_their_own_chip() {
        let chips = category_chips(&catalogue());
        assert_eq!(chips.len(), Category::CANONICAL.len() + 1);
        assert_eq!(chips.last(), Some(&Category::Unlisted("mil house".to_string())));
    }

    #[test]
    fn selection_parsing() {
        assert_eq!(CategorySelection::parse(""), CategorySelection::All);
        assert_eq!(CategorySelection::parse("ALL"), CategorySelection::All);
        assert_eq!(CategorySelection::parse("mill"), CategorySelection::Only(Category::Mill));
        assert_eq!(CategorySelection::parse("Mill House").as_tag(), "mill");
    }

    #[test]
    fn gallery_is_newest_first() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "a": { "title": "Old", "category": "Projects", "imageUrl": "/storage/gallery/1_a.jpg", "uploadedAt": 1000, "fileName": "gallery/1_a.jpg" },
            "b": { "title": "Newest", "category": "Fabrication", "imageUrl": "/storage/gallery/3_b.jpg", "uploadedAt": 3000, "fileName": "gallery/3_b.jpg" },
            "c": { "title": "Middle", "category": "Projects", "imageUrl": "/storage/gallery/2_c.jpg", "uploadedAt": 2000, "fileName": "gallery/2_c.jpg" },
            "d": "broken"
        }))
        .unwrap();

        let images = gallery_from_snapshot(&snapshot);
        let order: Vec<_> = images.iter().map(|i| (i.id.as_str(), i.uploaded_at)).collect();
        assert_eq!(order, vec![("b", 3000), ("c", 2000), ("a", 1000)]);
        assert!(images.windows(2).all(|pair| pair[0].uploaded_at > pair[1].uploaded_at));

        assert_eq!(gallery_categories(&images), vec!["Fabrication", "Projects"]);
        assert_eq!(filter_gallery(&images, Some("Projects")).len(), 2);
        assert_eq!(filter_gallery(&images, Some(ALL_TAG)).len(), 3);
        assert_eq!(filter_gallery(&images, None).len(), 3);
    }

    #[test]
    fn gallery_keeps_records_with_loose_field_types() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "a": { "title": "Mill tandem", "category": "Mill House", "imageUrl": "/storage/gallery/a.jpg", "uploadedAt": 4000 },
            "b": { "title": "Boiling house", "category": "Projects", "uploadedAt": "2000" },
            "c": { "title": "Crane", "category": "Fabrication", "uploadedAt": 1000.0 },
            "d": { "title": 2023, "category": "Projects", "uploadedAt": "yesterday" }
        }))
        .unwrap();

        let images = gallery_from_snapshot(&snapshot);
        let kept: Vec<_> = images.iter().map(|i| (i.id.as_str(), i.title.as_str(), i.uploaded_at)).collect();
        assert_eq!(
            kept,
            vec![("a", "Mill tandem", 4000), ("b", "Boiling house", 2000), ("c", "Crane", 1000), ("d", "2023", 0)]
        );
        assert_eq!(images[1].image_url, "");
    }

    #[test]
    fn gallery_ties_keep_key_order() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "k1": { "title": "First", "uploadedAt": 5000 },
            "k2": { "title": "Second", "uploadedAt": 5000 },
            "k3": { "title": "Later", "uploadedAt": 9000 },
            "k4": { "title": "Third", "uploadedAt": 5000 }
        }))
        .unwrap();

        let ids: Vec<_> = gallery_from_snapshot(&snapshot).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["k3", "k1", "k2", "k4"]);
    }
}
