use crate::components::banner::{Banner, BannerKind};
use crate::gateway;
use crate::helpers::{target_value, BANNER_MS};
use common::forms::{check_clear_confirmation, CLEAR_CONFIRMATION};
use common::model::collection::Collection;
use gloo_console::{error, log};
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

const CLEAR_FAILED: &str = "Failed to clear gallery. Please try again.";

pub enum Msg {
    Type(String),
    Submit,
    Cleared(usize),
    Failed,
    ClearBanner,
}

#[derive(Clone, PartialEq)]
enum Notice {
    Success,
    Error(String),
}

/// Deletes every gallery record once the operator types the confirmation word.
///
/// Stored image files are left in place.
pub struct ClearGalleryPage {
    confirmation: String,
    clearing: bool,
    notice: Option<Notice>,
}

impl Component for ClearGalleryPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            confirmation: String::new(),
            clearing: false,
            notice: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Type(text) => {
                self.confirmation = text;
                true
            }
            Msg::Submit => {
                if self.clearing {
                    return false;
                }
                if let Err(e) = check_clear_confirmation(&self.confirmation) {
                    self.notice = Some(Notice::Error(e.to_string()));
                    return true;
                }
                self.clearing = true;
                self.notice = None;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match gateway::remove(Collection::Gallery).await {
                        Ok(removed) => link.send_message(Msg::Cleared(removed)),
                        Err(e) => {
                            error!(format!("Clearing gallery failed: {}", e));
                            link.send_message(Msg::Failed);
                        }
                    }
                });
                true
            }
            Msg::Cleared(removed) => {
                log!(format!("Removed {} gallery records", removed));
                self.clearing = false;
                self.confirmation.clear();
                self.notice = Some(Notice::Success);
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(BANNER_MS).await;
                    link.send_message(Msg::ClearBanner);
                });
                true
            }
            Msg::Failed => {
                self.clearing = false;
                self.notice = Some(Notice::Error(CLEAR_FAILED.to_string()));
                true
            }
            Msg::ClearBanner => {
                if self.notice == Some(Notice::Success) {
                    self.notice = None;
                    return true;
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let armed = self.confirmation == CLEAR_CONFIRMATION;

        html! {
            <div class="admin-page">
                <div class="container admin-card danger">
                    <h1>{"Clear Gallery"}</h1>
                    <p class="admin-subtitle">{"Remove all images from gallery"}</p>
                    { match &self.notice {
                        Some(Notice::Success) => html! {
                            <Banner kind={BannerKind::Success} message={"Gallery cleared successfully!"} />
                        },
                        Some(Notice::Error(message)) => html! {
                            <Banner kind={BannerKind::Error} message={message.clone()} />
                        },
                        None => html! {},
                    } }
                    <div class="warning-box">
                        <strong>{"Warning"}</strong>
                        <p>{"This will permanently delete all gallery images from the database. This action cannot be undone!"}</p>
                    </div>
                    <form class="admin-form" {onsubmit}>
                        <div class="form-group">
                            <label for="confirm">{ format!("Type \"{}\" to confirm *", CLEAR_CONFIRMATION) }</label>
                            <input
                                id="confirm"
                                type="text"
                                autocomplete="off"
                                placeholder={format!("Type {}", CLEAR_CONFIRMATION)}
                                value={self.confirmation.clone()}
                                oninput={link.callback(|e: InputEvent| Msg::Type(target_value(&e)))}
                            />
                        </div>
                        <button type="submit" class="btn btn-danger btn-large" disabled={self.clearing || !armed}>
                            { if self.clearing { "Clearing..." } else { "Clear All Gallery Images" } }
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}
