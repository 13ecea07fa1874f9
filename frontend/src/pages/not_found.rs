use crate::routes::Route;
use yew::{html, Component, Context, Html};
use yew_router::prelude::Link;

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NotFoundPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="not-found-page container">
                <h1>{"404"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to Home"}</Link<Route>>
            </div>
        }
    }
}
