use common::model::gallery::GALLERY_CATEGORIES;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::banner::{Banner, BannerKind};
use crate::helpers::target_value;

use super::messages::Msg;
use super::state::{GalleryUploadPage, Notice};

pub fn view(page: &GalleryUploadPage, ctx: &Context<GalleryUploadPage>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="admin-page">
            <div class="container admin-card">
                <h1>{"Upload Gallery Image"}</h1>
                <p class="admin-subtitle">{"Add new images to the gallery"}</p>
                { notice_banner(page) }
                <form class="admin-form" {onsubmit}>
                    <div class="form-group">
                        <label for="title">{"Image Title *"}</label>
                        <input
                            id="title"
                            type="text"
                            placeholder="e.g. 2500 TCD Mill Tandem"
                            value={page.title.clone()}
                            disabled={page.uploading}
                            oninput={link.callback(|e: InputEvent| Msg::SetTitle(target_value(&e)))}
                        />
                    </div>
                    <div class="form-group">
                        <label for="category">{"Category *"}</label>
                        <select id="category" disabled={page.uploading} onchange={link.callback(|e: Event| Msg::SetCategory(target_value(&e)))}>
                            <option value="" selected={page.category.is_empty()}>{"Select category"}</option>
                            { for GALLERY_CATEGORIES.iter().map(|category| html! {
                                <option value={*category} selected={page.category == *category}>{ *category }</option>
                            }) }
                        </select>
                    </div>
                    { file_picker(page, link) }
                    <button type="submit" class="btn btn-primary btn-large" disabled={page.uploading}>
                        { if page.uploading { "Uploading..." } else { "Upload Image" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

fn notice_banner(page: &GalleryUploadPage) -> Html {
    match &page.notice {
        Some(Notice::Success) => html! {
            <Banner kind={BannerKind::Success} message={"Image uploaded successfully!"} />
        },
        Some(Notice::Error(message)) => html! {
            <Banner kind={BannerKind::Error} message={message.clone()} />
        },
        None => html! {},
    }
}

fn file_picker(page: &GalleryUploadPage, link: &Scope<GalleryUploadPage>) -> Html {
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
    });
    let label = page
        .file
        .as_ref()
        .map(|file| file.name())
        .unwrap_or_else(|| "Choose an image".to_string());

    html! {
        <div class="form-group">
            <label for="image">{"Upload Image *"}</label>
            <label class="file-drop" for="image">
                <span>{ label }</span>
                <small>{"PNG or JPG, up to 5MB"}</small>
            </label>
            <input
                id="image"
                class="file-input"
                type="file"
                accept="image/*"
                disabled={page.uploading}
                ref={page.file_input_ref.clone()}
                {onchange}
            />
            if let Some(preview) = &page.preview {
                <div class="upload-preview">
                    <img src={preview.to_string()} alt="Preview" />
                </div>
            }
        </div>
    }
}
