use common::forms::UploadDraft;
use gloo_file::ObjectUrl;
use yew::NodeRef;

#[derive(Clone, PartialEq)]
pub enum Notice {
    Success,
    Error(String),
}

pub struct GalleryUploadPage {
    pub title: String,
    pub category: String,
    pub file: Option<web_sys::File>,
    /// Local preview of `file`; revoked when dropped.
    pub preview: Option<ObjectUrl>,
    pub file_input_ref: NodeRef,
    /// Guards against a second submit while a request is in flight.
    pub uploading: bool,
    pub notice: Option<Notice>,
}

impl GalleryUploadPage {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            file: None,
            preview: None,
            file_input_ref: NodeRef::default(),
            uploading: false,
            notice: None,
        }
    }

    pub fn draft(&self) -> UploadDraft {
        UploadDraft {
            title: self.title.clone(),
            category: self.category.clone(),
            file: self.file.as_ref().map(|file| (file.name(), file.size() as u64)),
        }
    }

    /// Clears every field, including the native file input.
    pub fn reset(&mut self) {
        self.title.clear();
        self.category.clear();
        self.file = None;
        self.preview = None;
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
