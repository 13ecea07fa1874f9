//! Validation shared by the site's forms.
//!
//! Failures are returned as `ValidationError` and shown inline; the form stays
//! editable and nothing is sent.

use crate::model::gallery::GalleryImage;
use crate::requests::UploadResponse;

/// Largest image the gallery accepts, in bytes (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Text an operator must type before the gallery is cleared. Case-sensitive.
pub const CLEAR_CONFIRMATION: &str = "DELETE";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill all fields")]
    MissingFields,
    #[error("Image size should be less than 5MB")]
    ImageTooLarge,
    #[error("Please type DELETE to confirm")]
    ConfirmationMismatch,
}

/// The destructive clear only proceeds on an exact match.
pub fn check_clear_confirmation(typed: &str) -> Result<(), ValidationError> {
    if typed == CLEAR_CONFIRMATION {
        Ok(())
    } else {
        Err(ValidationError::ConfirmationMismatch)
    }
}

pub fn check_image_size(bytes: u64) -> Result<(), ValidationError> {
    if bytes > MAX_UPLOAD_BYTES {
        Err(ValidationError::ImageTooLarge)
    } else {
        Ok(())
    }
}

/// Fields of the gallery upload form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub title: String,
    pub category: String,
    /// Name and size of the chosen file, if any.
    pub file: Option<(String, u64)>,
}

impl UploadDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some((_, size)) = &self.file else {
            return Err(ValidationError::MissingFields);
        };
        if self.title.trim().is_empty() || self.category.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        check_image_size(*size)
    }

    /// The `gallery` record for a stored blob, built from the draft as it was
    /// validated rather than from whatever the form holds when the upload ends.
    pub fn into_record(self, uploaded: UploadResponse) -> GalleryImage {
        GalleryImage {
            id: String::new(),
            title: self.title.trim().to_string(),
            category: self.category,
            image_url: uploaded.url,
            uploaded_at: uploaded.uploaded_at,
            file_name: uploaded.path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_requires_exact_confirmation() {
        assert_eq!(check_clear_confirmation("DELETE"), Ok(()));
        for typed in ["delete", "Delete", "DELETE ", " DELETE", "", "DELET"] {
            assert_eq!(
                check_clear_confirmation(typed),
                Err(ValidationError::ConfirmationMismatch),
                "{typed:?}"
            );
        }
    }

    #[test]
    fn size_ceiling_is_inclusive() {
        assert_eq!(check_image_size(MAX_UPLOAD_BYTES), Ok(()));
        assert_eq!(check_image_size(MAX_UPLOAD_BYTES + 1), Err(ValidationError::ImageTooLarge));
    }

    #[test]
    fn upload_draft_needs_every_field() {
        let mut draft = UploadDraft {
            title: "Evaporator erection, 2023".into(),
            category: "Projects".into(),
            file: Some(("site.jpg".into(), 1_200_000)),
        };
        assert_eq!(draft.validate(), Ok(()));

        draft.category.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingFields));

        draft.category = "Projects".into();
        draft.file = None;
        assert_eq!(draft.validate(), Err(ValidationError::MissingFields));

        draft.file = Some(("huge.png".into(), MAX_UPLOAD_BYTES * 2));
        assert_eq!(draft.validate(), Err(ValidationError::ImageTooLarge));
    }

    #[test]
    fn record_comes_from_the_validated_draft() {
        let draft = UploadDraft {
            title: "  Mill tandem  ".into(),
            category: "Mill House".into(),
            file: Some(("tandem.jpg".into(), 800_000)),
        };
        assert_eq!(draft.validate(), Ok(()));
        let uploaded = UploadResponse {
            path: "gallery/1700000000000_tandem.jpg".into(),
            url: "/storage/gallery/1700000000000_tandem.jpg".into(),
            uploaded_at: 1_700_000_000_000,
        };

        let record = draft.into_record(uploaded);
        assert_eq!(record.title, "Mill tandem");
        assert_eq!(record.category, "Mill House");
        assert_eq!(record.image_url, "/storage/gallery/1700000000000_tandem.jpg");
        assert_eq!(record.file_name, "gallery/1700000000000_tandem.jpg");
        assert_eq!(record.uploaded_at, 1_700_000_000_000);
    }

    #[test]
    fn messages_match_the_form_copy() {
        assert_eq!(ValidationError::MissingFields.to_string(), "Please fill all fields");
        assert_eq!(
            ValidationError::ConfirmationMismatch.to_string(),
            "Please type DELETE to confirm"
        );
    }
}
