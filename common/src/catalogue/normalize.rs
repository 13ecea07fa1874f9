//! Folds heterogeneous product records into `Product`.
//!
//! Operators enter lists through an upload form that has produced arrays, delimited
//! strings and index-keyed objects over time, so every list field goes through
//! `ensure_array`.

use crate::catalogue::category::normalize_category;
use crate::model::Snapshot;
use crate::model::product::Product;
use serde_json::{Map, Value};

/// Separators accepted inside a single text list entry.
const LIST_DELIMITERS: [char; 3] = [',', ';', '\n'];

static MISSING: Value = Value::Null;

/// Coerces any stored value into a list of non-empty, trimmed strings.
///
/// - `null` -> empty
/// - array -> its scalar items
/// - object -> its scalar values, index-like keys in numeric order
/// - string -> split on `,` `;` and newlines
/// - number / bool -> one item
///
/// Applying it to its own output returns the same list.
pub fn ensure_array(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        Value::Object(map) => ordered_values(map)
            .into_iter()
            .filter_map(scalar_text)
            .collect(),
        Value::String(text) => text
            .split(LIST_DELIMITERS)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Bool(_) | Value::Number(_) => scalar_text(value).into_iter().collect(),
    }
}

/// Single text field: trimmed string, stringified scalar, or empty.
pub fn text_field(value: &Value) -> String {
    scalar_text(value).unwrap_or_default()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Values of an object. Sparse arrays come back from the store as objects keyed
/// "0", "1", ..., "10"; those are ordered numerically rather than lexically.
fn ordered_values(map: &Map<String, Value>) -> Vec<&Value> {
    let indexed: Option<Vec<(u64, &Value)>> = map
        .iter()
        .map(|(key, value)| key.parse::<u64>().ok().map(|index| (index, value)))
        .collect();

    match indexed {
        Some(mut entries) => {
            entries.sort_by_key(|(index, _)| *index);
            entries.into_iter().map(|(_, value)| value).collect()
        }
        None => map.values().collect(),
    }
}

/// First field among `keys` that holds something other than `null`.
fn field<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> &'a Value {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
        .unwrap_or(&MISSING)
}

/// Builds the canonical product for one stored record.
///
/// Returns `None` when the record is not an object; the listing skips it.
pub fn normalize_product(key: &str, raw: &Value) -> Option<Product> {
    let record = raw.as_object()?;
    let category_label = text_field(field(record, &["category"]));

    Some(Product {
        id: key.to_string(),
        name: text_field(field(record, &["name"])),
        category: normalize_category(&category_label),
        category_label,
        image: text_field(field(record, &["image", "imageUrl"])),
        short_description: text_field(field(record, &["shortDescription", "description"])),
        full_description: text_field(field(record, &["fullDescription", "description"])),
        features: ensure_array(field(record, &["features"])),
        specifications: ensure_array(field(record, &["specifications", "specs"])),
        applications: ensure_array(field(record, &["applications"])),
        advantages: ensure_array(field(record, &["advantages"])),
        disadvantages: ensure_array(field(record, &["disadvantages"])),
    })
}

/// Normalises a whole `products` snapshot, keeping store key order.
pub fn normalize_products(snapshot: &Snapshot) -> Vec<Product> {
    snapshot
        .iter()
        .filter_map(|(key, raw)| normalize_product(key, raw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::category::Category;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn splits_mixed_delimiters() {
        let product = normalize_product("k1", &json!({ "features": "a, b; c\nd" })).unwrap();
        assert_eq!(product.features, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn degrades_instead_of_failing() {
        assert!(ensure_array(&Value::Null).is_empty());
        assert!(ensure_array(&json!("")).is_empty());
        assert!(ensure_array(&json!(" ,; \n ")).is_empty());
        assert_eq!(ensure_array(&json!(42)), vec!["42"]);
        assert_eq!(ensure_array(&json!([" x ", null, "", ["nested"], { "a": 1 }, 7])), vec!["x", "7"]);
    }

    #[test]
    fn object_values_follow_numeric_keys() {
        let value = json!({ "0": "first", "2": "third", "10": "eleventh", "1": "second" });
        assert_eq!(ensure_array(&value), vec!["first", "second", "third", "eleventh"]);

        let named = json!({ "b": "beta", "a": "alpha" });
        assert_eq!(ensure_array(&named), vec!["alpha", "beta"]);
    }

    #[test]
    fn ensure_array_is_idempotent() {
        let inputs = [
            json!("Capacity: 50-500 TPD; Material: SS304/316\nAutomatic control"),
            json!(["one, still one", "  two "]),
            json!({ "1": "b", "0": "a" }),
            json!(true),
            Value::Null,
        ];
        for input in inputs {
            let once = ensure_array(&input);
            let twice = ensure_array(&json!(once.clone()));
            assert_eq!(once, twice, "{input}");
        }
    }

    #[test]
    fn builds_canonical_product() {
        let raw = json!({
            "name": "  Juice Heater ",
            "category": "Boiling House Equipment",
            "imageUrl": "https://cdn.example.com/juice.jpg",
            "description": "Multi-stage juice heaters.",
            "specs": ["Capacity: 100-1000 TPD", "Material: SS316L"],
            "applications": { "0": "Juice heating", "1": "Pre-evaporation heating" },
            "advantages": null
        });
        let product = normalize_product("-Nabc", &raw).unwrap();

        assert_eq!(product.id, "-Nabc");
        assert_eq!(product.name, "Juice Heater");
        assert_eq!(product.category, Category::Boiling);
        assert_eq!(product.category_label, "Boiling House Equipment");
        assert_eq!(product.image, "https://cdn.example.com/juice.jpg");
        assert_eq!(product.short_description, "Multi-stage juice heaters.");
        assert_eq!(product.full_description, "Multi-stage juice heaters.");
        assert_eq!(product.specifications, vec!["Capacity: 100-1000 TPD", "Material: SS316L"]);
        assert_eq!(product.applications, vec!["Juice heating", "Pre-evaporation heating"]);
        assert!(product.advantages.is_empty());
        assert!(product.features.is_empty());
    }

    #[test]
    fn snapshot_keeps_key_order_and_skips_non_objects() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "b-key": { "name": "Second" },
            "a-key": { "name": "First" },
            "c-key": "not a record"
        }))
        .unwrap();

        let names: Vec<_> = normalize_products(&snapshot)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
