use crate::catalogue::segment::{
    DescriptionSection, SECTION_DELIMITER, description_sections, segment_description,
};
use crate::model::product::Product;

/// Shown when a product has no advantages of its own.
pub const DEFAULT_ADVANTAGES: [&str; 9] = [
    "High-efficiency operation significantly reduces power consumption overheads",
    "Automated control systems ensure consistent output quality",
    "Robotic welded construction enhances structural integrity and service life",
    "Low maintenance design with easily accessible components minimizes downtime",
    "Optimized for varying load conditions to maintain peak performance",
    "Enhanced operational safety features for operator protection",
    "Modular component design allows for easy upgrades",
    "Integrated vibration damping system reduces noise levels",
    "Weather-resistant coating suitable for challenging outdoor environments",
];

/// Shown when a product has no considerations of its own.
pub const DEFAULT_DISADVANTAGES: [&str; 3] = [
    "Requires regular monitoring of operating parameters for optimal efficiency",
    "Initial installation requires specialized technical support and calibration",
    "Periodic maintenance checks recommended for rotating components",
];

/// Labels longer than this collapse to "Feature" in the hero stats.
const QUICK_STAT_MAX_LEN: usize = 20;

/// Everything the product detail view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    /// Description with list sections removed.
    pub description: String,
    pub sections: Vec<DescriptionSection>,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

impl ProductDetail {
    /// Segments the description and merges explicit lists with extracted ones.
    ///
    /// Explicit entries come first. An empty merged list falls back to the defaults.
    pub fn build(product: Product) -> Self {
        let source = product.description_source();
        let segmented = segment_description(source, SECTION_DELIMITER);
        let sections = description_sections(source, SECTION_DELIMITER, &product.name);

        let advantages = merged_or_default(
            &product.advantages,
            segmented.advantages,
            &DEFAULT_ADVANTAGES,
        );
        let disadvantages = merged_or_default(
            &product.disadvantages,
            segmented.disadvantages,
            &DEFAULT_DISADVANTAGES,
        );

        ProductDetail {
            description: segmented.description,
            sections,
            advantages,
            disadvantages,
            product,
        }
    }

    /// First feature as a hero stat label, if there is one.
    pub fn quick_stat_label(&self) -> Option<&str> {
        self.product.features.first().map(|feature| {
            if feature.chars().count() > QUICK_STAT_MAX_LEN {
                "Feature"
            } else {
                feature.as_str()
            }
        })
    }
}

fn merged_or_default(explicit: &[String], extracted: Vec<String>, defaults: &[&str]) -> Vec<String> {
    let merged: Vec<String> = explicit.iter().cloned().chain(extracted).collect();
    if merged.is_empty() {
        defaults.iter().map(|item| item.to_string()).collect()
    } else {
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::normalize::normalize_product;
    use crate::catalogue::segment::WORKING_PRINCIPLE;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn explicit_lists_come_before_extracted_points() {
        let product = normalize_product(
            "p1",
            &json!({
                "name": "Magma Mixer",
                "fullDescription": "Magma Mixer#Uniform mixing.#Advantages* variable speed#Working: paddles rotate",
                "advantages": "Robust construction"
            }),
        )
        .unwrap();

        let detail = ProductDetail::build(product);
        assert_eq!(detail.advantages, vec!["Robust construction", "variable speed"]);
        assert_eq!(detail.disadvantages.len(), DEFAULT_DISADVANTAGES.len());
        assert_eq!(detail.description, "Magma Mixer#Uniform mixing.");
        assert_eq!(
            detail.sections,
            vec![
                DescriptionSection { heading: None, body: "Uniform mixing.".into() },
                DescriptionSection {
                    heading: Some(WORKING_PRINCIPLE.into()),
                    body: "paddles rotate".into(),
                },
            ]
        );
    }

    #[test]
    fn empty_product_falls_back_to_defaults() {
        let product = normalize_product("p2", &json!({})).unwrap();
        let detail = ProductDetail::build(product);

        assert_eq!(detail.advantages, DEFAULT_ADVANTAGES.to_vec());
        assert_eq!(detail.disadvantages, DEFAULT_DISADVANTAGES.to_vec());
        assert!(detail.sections.is_empty());
        assert_eq!(detail.quick_stat_label(), None);
    }

    #[test]
    fn short_description_is_used_when_full_is_missing() {
        let product = normalize_product(
            "p3",
            &json!({ "shortDescription": "Compact unit#Disadvantages* heavy" }),
        )
        .unwrap();
        let detail = ProductDetail::build(product);
        assert_eq!(detail.disadvantages, vec!["heavy"]);
        assert_eq!(detail.description, "Compact unit");
    }

    #[test]
    fn long_first_feature_becomes_generic_label() {
        let mut product = normalize_product("p4", &json!({ "features": ["Compact"] })).unwrap();
        assert_eq!(ProductDetail::build(product.clone()).quick_stat_label(), Some("Compact"));

        product.features = vec!["Air cooled and vacuum cooled variants".into()];
        assert_eq!(ProductDetail::build(product).quick_stat_label(), Some("Feature"));
    }
}
