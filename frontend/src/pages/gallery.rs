use crate::gateway::feed::{subscribe_or_fetch, FeedSubscription};
use crate::reveal::RevealScope;
use crate::tops_sheet::lightbox_sheet::{close_sheet, open_sheet, LightboxSheet};
use common::catalogue::filter::{filter_gallery, gallery_categories, gallery_from_snapshot};
use common::model::collection::Collection;
use common::model::feed::FeedEvent;
use common::model::gallery::GalleryImage;
use gloo_console::error;
use yew::prelude::*;

pub enum Msg {
    Feed(FeedEvent),
    Filter(Option<String>),
    Open(GalleryImage),
    Close,
}

pub struct GalleryPage {
    images: Option<Vec<GalleryImage>>,
    /// Raw category text, `None` for all.
    filter: Option<String>,
    /// Image shown in the lightbox. Kept after closing so the fade-out has content.
    selected: Option<GalleryImage>,
    lightbox_ref: NodeRef,
    reveal_pending: bool,
    reveal: Option<RevealScope>,
    _feed: Option<FeedSubscription>,
}

impl Component for GalleryPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let feed = subscribe_or_fetch(Collection::Gallery, ctx.link().callback(Msg::Feed));
        Self {
            images: None,
            filter: None,
            selected: None,
            lightbox_ref: NodeRef::default(),
            reveal_pending: true,
            reveal: None,
            _feed: feed,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Feed(FeedEvent::Snapshot { data }) => {
                let images = gallery_from_snapshot(&data);
                if let Some(filter) = &self.filter {
                    if !images.iter().any(|image| &image.category == filter) {
                        self.filter = None;
                    }
                }
                self.images = Some(images);
                self.reveal_pending = true;
                true
            }
            Msg::Feed(FeedEvent::Error { message }) => {
                error!(format!("Gallery feed error: {}", message));
                if self.images.is_none() {
                    self.images = Some(Vec::new());
                    return true;
                }
                false
            }
            Msg::Filter(filter) => {
                self.filter = filter;
                self.reveal_pending = true;
                true
            }
            Msg::Open(image) => {
                self.selected = Some(image);
                open_sheet(&self.lightbox_ref);
                true
            }
            Msg::Close => {
                close_sheet(&self.lightbox_ref);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(images) = &self.images else {
            return html! {
                <div class="loading-container">
                    <div class="loading-spinner"></div>
                    <p>{"Loading gallery..."}</p>
                </div>
            };
        };

        html! {
            <div class="gallery-page">
                <section class="gallery-hero">
                    <div class="container gallery-hero-content animate-fadeInUp">
                        <span class="hero-eyebrow">{"Visual Tour"}</span>
                        <h1>{"Project Gallery"}</h1>
                        <p class="hero-subtitle">{"Our Manufacturing Excellence & Completed Projects"}</p>
                    </div>
                </section>

                <section class="section gallery-main">
                    <div class="container">
                        if images.is_empty() {
                            <div class="empty-state">
                                <h3>{"No Images Yet"}</h3>
                                <p>{"Gallery is empty. Upload images from admin dashboard."}</p>
                            </div>
                        } else {
                            { self.view_filters(ctx, images) }
                            { self.view_grid(ctx, images) }
                        }
                    </div>
                </section>

                <LightboxSheet node_ref={self.lightbox_ref.clone()} on_close={ctx.link().callback(|_| Msg::Close)}>
                    if let Some(image) = &self.selected {
                        <img src={image.image_url.clone()} alt={image.title.clone()} />
                        <div class="lightbox-caption">
                            <h3>{ &image.title }</h3>
                            <span class="category-badge">{ &image.category }</span>
                        </div>
                    }
                </LightboxSheet>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.reveal_pending {
            self.reveal_pending = false;
            self.reveal = RevealScope::observe();
        }
    }
}

impl GalleryPage {
    fn view_filters(&self, ctx: &Context<Self>, images: &[GalleryImage]) -> Html {
        let chip = |filter: Option<String>, label: String| {
            let active = filter == self.filter;
            let onclick = ctx.link().callback(move |_| Msg::Filter(filter.clone()));
            html! {
                <button class={classes!("filter-btn", active.then_some("active"))} {onclick}>{ label }</button>
            }
        };
        html! {
            <div class="category-filter scroll-reveal">
                { chip(None, "All".to_string()) }
                { for gallery_categories(images).into_iter().map(|category| chip(Some(category.clone()), category)) }
            </div>
        }
    }

    fn view_grid(&self, ctx: &Context<Self>, images: &[GalleryImage]) -> Html {
        html! {
            <div class="gallery-grid">
                { for filter_gallery(images, self.filter.as_deref()).into_iter().map(|image| {
                    let selected = image.clone();
                    let onclick = ctx.link().callback(move |_| Msg::Open(selected.clone()));
                    html! {
                        <div key={image.id.clone()} class="gallery-item scroll-reveal" {onclick}>
                            <img src={image.image_url.clone()} alt={image.title.clone()} loading="lazy" />
                            <div class="gallery-overlay">
                                <h4>{ &image.title }</h4>
                                <span>{ &image.category }</span>
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    }
}
