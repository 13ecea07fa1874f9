use common::forms::UploadDraft;
use common::requests::UploadResponse;

pub enum Msg {
    SetTitle(String),
    SetCategory(String),
    FileSelected(Option<web_sys::File>),
    Submit,
    /// Blob is stored; the gallery record still has to be written from the draft
    /// validated at submit.
    Uploaded(UploadDraft, UploadResponse),
    Recorded,
    Failed(String),
    ClearBanner,
}
