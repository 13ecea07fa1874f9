use crate::routes::Route;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

/// Page offset, in pixels, past which the header switches to its compact style.
const SCROLLED_OFFSET: f64 = 50.0;

const NAV_ITEMS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::About, "About Us"),
    (Route::Products, "Products"),
    (Route::Gallery, "Gallery"),
    (Route::Contact, "Contact"),
];

pub enum Msg {
    SetMenuOpen(bool),
    RouteChanged,
    Scrolled(bool),
}

pub struct Header {
    menu_open: bool,
    scrolled: bool,
    _location_handle: Option<LocationHandle>,
    scroll_listener: Option<Closure<dyn FnMut(Event)>>,
}

impl Component for Header {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let location_handle = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_| Msg::RouteChanged));

        let link = ctx.link().clone();
        let scroll_listener = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default();
            link.send_message(Msg::Scrolled(offset > SCROLLED_OFFSET));
        });
        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback(
                "scroll",
                scroll_listener.as_ref().unchecked_ref(),
            );
        }

        Self {
            menu_open: false,
            scrolled: false,
            _location_handle: location_handle,
            scroll_listener: Some(scroll_listener),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetMenuOpen(open) => {
                self.menu_open = open;
                true
            }
            Msg::RouteChanged => {
                self.menu_open = false;
                true
            }
            Msg::Scrolled(scrolled) => {
                let changed = self.scrolled != scrolled;
                self.scrolled = scrolled;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let current = link.route::<Route>().unwrap_or(Route::NotFound);
        let close_menu = link.callback(|_: MouseEvent| Msg::SetMenuOpen(false));

        html! {
            <header class={classes!("header", self.scrolled.then_some("scrolled"))}>
                <div class="top-bar">
                    <div class="container">
                        <div class="contact-info">
                            <a href="tel:+919689052887" class="contact-link">{"☎ +91 9689052887"}</a>
                            <a href="mailto:info@csrindustries.com" class="contact-link">{"✉ info@csrindustries.com"}</a>
                        </div>
                    </div>
                </div>
                <nav class="navbar">
                    <div class="container nav-content">
                        <Link<Route> to={Route::Home} classes="logo">
                            <img src="/logo2.png" alt="CSR Industries Logo" class="logo-image" />
                            <div class="logo-text">
                                <h1>{"CSR INDUSTRIES"}</h1>
                                <p>{"Sugar Industry Equipment"}</p>
                            </div>
                        </Link<Route>>
                        if !self.menu_open {
                            <button class="menu-toggle" aria-label="Toggle menu"
                                onclick={link.callback(|_| Msg::SetMenuOpen(true))}>{"☰"}</button>
                        }
                        <ul class={classes!("nav-menu", self.menu_open.then_some("active"))}>
                            <button class="menu-close" aria-label="Close menu" onclick={close_menu.clone()}>{"✕"}</button>
                            { for NAV_ITEMS.iter().map(|(route, label)| html! {
                                <li onclick={close_menu.clone()}>
                                    <Link<Route> to={route.clone()}
                                        classes={classes!(route.is_active_on(&current).then_some("active"))}>
                                        { *label }
                                    </Link<Route>>
                                </li>
                            }) }
                            <li class="nav-cta" onclick={close_menu}>
                                <Link<Route> to={Route::Contact} classes="btn-download">{"Request Catalogue"}</Link<Route>>
                            </li>
                        </ul>
                    </div>
                </nav>
            </header>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.scroll_listener.take()) {
            let _ = window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        }
    }
}
