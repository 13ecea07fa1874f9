use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter tag of a product.
///
/// Raw categories are free text typed by an operator; `normalize_category` folds the
/// known spellings onto the canonical tags. Anything else is kept verbatim
/// (lower-cased) as `Unlisted`, so a typo shows up as its own filter chip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    Boiling,
    Material,
    Process,
    Mill,
    Spares,
    Turnkey,
    Other,
    Unlisted(String),
}

impl Category {
    /// Canonical tags in the order the filter bar shows them.
    pub const CANONICAL: [Category; 6] = [
        Category::Boiling,
        Category::Material,
        Category::Process,
        Category::Mill,
        Category::Spares,
        Category::Turnkey,
    ];

    pub fn as_tag(&self) -> &str {
        match self {
            Category::Boiling => "boiling",
            Category::Material => "material",
            Category::Process => "process",
            Category::Mill => "mill",
            Category::Spares => "spares",
            Category::Turnkey => "turnkey",
            Category::Other => "other",
            Category::Unlisted(tag) => tag,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Boiling => "Boiling House",
            Category::Material => "Material Handling",
            Category::Process => "Process & Storage",
            Category::Mill => "Mill House",
            Category::Spares => "Spares & Services",
            Category::Turnkey => "Turnkey Projects",
            Category::Other => "Other",
            Category::Unlisted(tag) => tag,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_tag().to_string()
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        normalize_category(&raw)
    }
}

fn canonical(key: &str) -> Option<Category> {
    let category = match key {
        "boiling house equipment" | "boiling house" | "boiling" => Category::Boiling,
        "material handling equipment" | "material handling" | "material" => Category::Material,
        "process & storage equipment"
        | "process and storage equipment"
        | "process & storage"
        | "process and storage"
        | "process equipment"
        | "process" => Category::Process,
        "mill house equipment" | "mill house" | "mill" => Category::Mill,
        "spares & services" | "spares and services" | "spares" | "services" => Category::Spares,
        "turnkey projects" | "turnkey project" | "turnkey erection work" | "turnkey" => {
            Category::Turnkey
        }
        "other" | "others" => Category::Other,
        _ => return None,
    };
    Some(category)
}

/// Maps raw category text onto a filter tag. Total: blank input becomes `Other`.
pub fn normalize_category(raw: &str) -> Category {
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return Category::Other;
    }
    canonical(&key).unwrap_or(Category::Unlisted(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_fold_onto_canonical_tags() {
        for raw in ["Boiling House Equipment", "boiling house", "  BOILING "] {
            assert_eq!(normalize_category(raw), Category::Boiling, "{raw}");
        }
        assert_eq!(normalize_category("Material Handling Equipment"), Category::Material);
        assert_eq!(normalize_category("Process & Storage Equipment"), Category::Process);
        assert_eq!(normalize_category("Mill House Equipment"), Category::Mill);
        assert_eq!(normalize_category("Spares & Services"), Category::Spares);
        assert_eq!(normalize_category("Turnkey Projects"), Category::Turnkey);
    }

    #[test]
    fn unknown_values_pass_through_lowercased() {
        let category = normalize_category("  Boilng House ");
        assert_eq!(category, Category::Unlisted("boilng house".to_string()));
        assert_eq!(category.as_tag(), "boilng house");
    }

    #[test]
    fn every_input_maps_to_a_non_empty_tag() {
        for raw in ["", "   ", "\n", "x", "Fabrication"] {
            assert!(!normalize_category(raw).as_tag().is_empty(), "{raw:?}");
        }
        assert_eq!(normalize_category(""), Category::Other);
    }

    #[test]
    fn serializes_as_its_tag() {
        let json = serde_json::to_string(&Category::Process).unwrap();
        assert_eq!(json, "\"process\"");
        let back: Category = serde_json::from_str("\"Mill House\"").unwrap();
        assert_eq!(back, Category::Mill);
    }
}
