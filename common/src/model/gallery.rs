use serde::{Deserialize, Serialize};

/// One image in the project gallery.
///
/// Stored under `gallery/<key>` with camelCase fields. `id` is the store key and is
/// never written into the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    #[serde(skip)]
    pub id: String,
    pub title: String,
    /// Free text picked in the upload form; not normalised.
    pub category: String,
    pub image_url: String,
    /// Epoch milliseconds. Listing order is by this field, newest first.
    pub uploaded_at: i64,
    /// Blob path (`gallery/<timestamp>_<name>`) the image was written to.
    pub file_name: String,
}

/// Categories offered by the upload form.
pub const GALLERY_CATEGORIES: [&str; 6] = [
    "Boiling House Equipment",
    "Material Handling",
    "Process Equipment",
    "Mill House",
    "Projects",
    "Fabrication",
];
