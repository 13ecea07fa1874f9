use crate::catalogue::category::Category;
use serde::{Deserialize, Serialize};

/// Canonical product as rendered by the catalogue views.
///
/// Built by `catalogue::normalize::normalize_product` from whatever shape the
/// operator's upload form left in the store. Every list is ordered, trimmed and free
/// of empty entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store key. Empty only for records that were built outside a snapshot.
    pub id: String,
    pub name: String,
    pub category: Category,
    /// The category text as entered, trimmed. Shown as the badge on the detail view.
    pub category_label: String,
    pub image: String,
    pub short_description: String,
    pub full_description: String,
    pub features: Vec<String>,
    pub specifications: Vec<String>,
    pub applications: Vec<String>,
    /// Explicit advantages only; extracted and default bullets are merged in
    /// `catalogue::detail::ProductDetail`.
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

impl Product {
    /// The text the detail view segments: the full description, or the short one.
    pub fn description_source(&self) -> &str {
        if self.full_description.is_empty() {
            &self.short_description
        } else {
            &self.full_description
        }
    }
}
