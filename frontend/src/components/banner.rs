use yew::{function_component, html, Html, Properties};

#[derive(Clone, Copy, PartialEq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub kind: BannerKind,
    pub message: String,
}

/// Inline form feedback: green for success, red for validation and transport errors.
#[function_component(Banner)]
pub fn banner(props: &BannerProps) -> Html {
    let (class, icon) = match props.kind {
        BannerKind::Success => ("success-message", "✔"),
        BannerKind::Error => ("error-message", "✖"),
    };
    html! {
        <div class={class} role="status">
            <span class="banner-icon">{ icon }</span>
            <p>{ props.message.clone() }</p>
        </div>
    }
}
