use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, MouseEvent, NodeRef, Properties};

const SHOW_CLASS: &str = "show";
/// Delay before toggling `show`, so the transition runs after the content mounts.
const TRANSITION_DELAY_MS: u32 = 50;

/// Full-screen overlay. Clicking the backdrop or the close button emits `on_close`;
/// clicks inside the content do not.
pub struct LightboxSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    pub on_close: Callback<()>,
}

impl Component for LightboxSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("lightbox-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_backdrop = ctx.props().on_close.reform(|_: MouseEvent| ());
        let on_button = ctx.props().on_close.reform(|e: MouseEvent| e.stop_propagation());
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="lightbox" id={self.id.clone()} ref={ctx.props().node_ref.clone()} onclick={on_backdrop}>
                <button class="close-btn" aria-label="Close" onclick={on_button}>{"✕"}</button>
                <div class="lightbox-content" onclick={keep_open}>
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }
}

fn toggle_sheet(sheet_ref: &NodeRef, show: bool) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        Timeout::new(TRANSITION_DELAY_MS, move || {
            let classes = sheet.class_list();
            let _ = if show {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
        })
        .forget();
    }
}

pub fn open_sheet(sheet_ref: &NodeRef) {
    toggle_sheet(sheet_ref, true);
}

pub fn close_sheet(sheet_ref: &NodeRef) {
    toggle_sheet(sheet_ref, false);
}
