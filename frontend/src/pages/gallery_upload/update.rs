use common::forms::check_image_size;
use common::model::collection::Collection;
use gloo_console::error;
use gloo_file::ObjectUrl;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::gateway;
use crate::helpers::BANNER_MS;

use super::messages::Msg;
use super::state::{GalleryUploadPage, Notice};

const UPLOAD_FAILED: &str = "Failed to upload image. Please try again.";

pub fn update(page: &mut GalleryUploadPage, ctx: &Context<GalleryUploadPage>, msg: Msg) -> bool {
    let edits_form = matches!(msg, Msg::SetTitle(_) | Msg::SetCategory(_) | Msg::FileSelected(_));
    if page.uploading && edits_form {
        return false;
    }

    match msg {
        Msg::SetTitle(title) => {
            page.title = title;
            true
        }
        Msg::SetCategory(category) => {
            page.category = category;
            true
        }
        Msg::FileSelected(None) => {
            page.file = None;
            page.preview = None;
            true
        }
        Msg::FileSelected(Some(file)) => {
            if let Err(e) = check_image_size(file.size() as u64) {
                page.notice = Some(Notice::Error(e.to_string()));
                page.file = None;
                page.preview = None;
                if let Some(input) = page.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                    input.set_value("");
                }
                return true;
            }
            let blob = gloo_file::Blob::from(web_sys::Blob::from(file.clone()));
            page.preview = Some(ObjectUrl::from(blob));
            page.file = Some(file);
            page.notice = None;
            true
        }
        Msg::Submit => {
            if page.uploading {
                return false;
            }
            let draft = page.draft();
            if let Err(e) = draft.validate() {
                page.notice = Some(Notice::Error(e.to_string()));
                return true;
            }
            let Some(file) = page.file.clone() else {
                return false;
            };
            page.uploading = true;
            page.notice = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                match gateway::upload_gallery_image(&file).await {
                    Ok(uploaded) => link.send_message(Msg::Uploaded(draft, uploaded)),
                    Err(e) => {
                        error!(format!("Gallery upload failed: {}", e));
                        link.send_message(Msg::Failed(UPLOAD_FAILED.to_string()));
                    }
                }
            });
            true
        }
        Msg::Uploaded(draft, uploaded) => {
            let record = draft.into_record(uploaded);
            let link = ctx.link().clone();
            spawn_local(async move {
                match gateway::push(Collection::Gallery, &record).await {
                    Ok(_) => link.send_message(Msg::Recorded),
                    Err(e) => {
                        error!(format!("Saving gallery record failed: {}", e));
                        link.send_message(Msg::Failed(UPLOAD_FAILED.to_string()));
                    }
                }
            });
            false
        }
        Msg::Recorded => {
            page.uploading = false;
            page.reset();
            page.notice = Some(Notice::Success);
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(BANNER_MS).await;
                link.send_message(Msg::ClearBanner);
            });
            true
        }
        Msg::Failed(message) => {
            page.uploading = false;
            page.notice = Some(Notice::Error(message));
            true
        }
        Msg::ClearBanner => {
            if page.notice == Some(Notice::Success) {
                page.notice = None;
                return true;
            }
            false
        }
    }
}
