use crate::routes::Route;
use yew::{html, Component, Context, Html};
use yew_router::prelude::Link;

const QUICK_LINKS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::About, "About Us"),
    (Route::Products, "Products"),
    (Route::Gallery, "Gallery"),
    (Route::Contact, "Contact"),
];

const SERVICES: [&str; 5] = [
    "Boiling House Equipment",
    "Material Handling Systems",
    "Process Equipment",
    "Mill House Equipment",
    "Turnkey Solutions",
];

pub struct Footer {
    year: u32,
}

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            year: js_sys::Date::new_0().get_full_year(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <footer class="footer">
                <div class="footer-main">
                    <div class="container footer-grid">
                        <div class="footer-column">
                            <h3 class="footer-logo">{"CSR INDUSTRIES"}</h3>
                            <p class="footer-tagline">{"Sugar Industry Equipment Excellence"}</p>
                            <p class="footer-description">
                                {"Leading manufacturer and erector of sugar industry equipment with ISO 9001:2015 and JAS-ANZ certifications."}
                            </p>
                        </div>
                        <div class="footer-column">
                            <h4 class="footer-title">{"Quick Links"}</h4>
                            <ul class="footer-links">
                                { for QUICK_LINKS.iter().map(|(route, name)| html! {
                                    <li><Link<Route> to={route.clone()}>{"→ "}{ *name }</Link<Route>></li>
                                }) }
                            </ul>
                        </div>
                        <div class="footer-column">
                            <h4 class="footer-title">{"Our Services"}</h4>
                            <ul class="footer-links">
                                { for SERVICES.iter().map(|service| html! { <li><span>{"→ "}{ *service }</span></li> }) }
                            </ul>
                        </div>
                        <div class="footer-column">
                            <h4 class="footer-title">{"Contact Us"}</h4>
                            <ul class="footer-contact">
                                <li><span>{"Plot No. 382, Ekta Colony"}<br />{"Sangli, Maharashtra"}</span></li>
                                <li><a href="tel:+919689052887">{"+91 9689052887"}</a></li>
                                <li><a href="mailto:info@csrindustries.com">{"info@csrindustries.com"}</a></li>
                                <li><span>{"Mon - Sat: 9:00 AM - 6:00 PM"}</span></li>
                            </ul>
                            <a href="/catalogue.pdf" download="" class="footer-download-btn">{"Download Catalogue"}</a>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <div class="container footer-bottom-content">
                        <p>{ format!("© {} CSR Industries. All rights reserved.", self.year) }</p>
                        <div class="footer-certifications">
                            <span class="cert-badge">{"ISO 9001:2015"}</span>
                            <span class="cert-badge">{"JAS-ANZ"}</span>
                        </div>
                    </div>
                </div>
            </footer>
        }
    }
}
