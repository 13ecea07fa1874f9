use crate::reveal::RevealScope;
use crate::routes::Route;
use yew::{html, Component, Context, Html};
use yew_router::prelude::Link;

struct Service {
    title: &'static str,
    desc: &'static str,
    color: &'static str,
}

const SERVICES: [Service; 4] = [
    Service { title: "Boiling House Equipment", desc: "Crystallizers, Juice Heaters, Evaporator Bodies", color: "#0066cc" },
    Service { title: "Material Handling", desc: "Bagasse Handling, Ash Handling, Conveyors", color: "#ff6b35" },
    Service { title: "Process Equipment", desc: "Storage Tanks, Pressure Vessels, Heat Exchangers", color: "#28a745" },
    Service { title: "Mill House Equipment", desc: "Complete mill house solutions and spares", color: "#ffc107" },
];

const STATS: [(&str, &str); 4] = [
    ("500+", "Projects Completed"),
    ("200+", "Happy Clients"),
    ("20+", "Years Experience"),
    ("50+", "Awards Won"),
];

const FEATURES: [(&str, &str); 4] = [
    ("ISO 9001:2015 Certified", "Quality assured manufacturing"),
    ("JAS-ANZ Accredited", "International standards compliance"),
    ("Turnkey Solutions", "End-to-end project delivery"),
    ("Timely Delivery", "On-time project completion"),
];

const CLIENTS: [(&str, &str); 6] = [
    ("GM Sugar & Energy pvt ltd", "/client_logo_1.jpg"),
    ("Onkar Sugar", "/client_logo_2.jpg"),
    ("Lokmangal Agro", "/client_logo_1.jpg"),
    ("Vitthal Sugar Pandharpur", "/client_logo_2.jpg"),
    ("Bharti Sugar", "/client_logo_1.jpg"),
    ("Vitthalrao Shinde Sahakari Sakhar Karkhana Ltd", "/client_logo_2.jpg"),
];

pub struct HomePage {
    reveal: Option<RevealScope>,
}

impl Component for HomePage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { reveal: None }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="home">
                <section class="hero">
                    <div class="hero-background"><div class="hero-overlay"></div></div>
                    <div class="container hero-content animate-fadeInUp">
                        <h1 class="hero-title">
                            {"Leading Manufacturer of "}<span class="text-highlight">{"Sugar Industry Equipment"}</span>
                        </h1>
                        <p class="hero-subtitle">{"Certified manufacturer and erector with ISO 9001:2015 & JAS-ANZ accreditation"}</p>
                        <div class="hero-buttons">
                            <Link<Route> to={Route::Products} classes="btn btn-primary btn-large">{"Explore Products →"}</Link<Route>>
                            <Link<Route> to={Route::Contact} classes="btn btn-secondary btn-large">{"Get Quote"}</Link<Route>>
                        </div>
                    </div>
                </section>

                <section class="section stats-section">
                    <div class="container stats-grid scroll-reveal">
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="stat-card">
                                <div class="stat-value">{ *value }</div>
                                <div class="stat-label">{ *label }</div>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="section services-section">
                    <div class="container">
                        <h2 class="section-title scroll-reveal">{"Our Core Services"}</h2>
                        <p class="section-subtitle scroll-reveal">
                            {"Comprehensive solutions for sugar industry equipment manufacturing and installation"}
                        </p>
                        <div class="services-grid">
                            { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                                <div class="service-card card card-hover-glow scroll-reveal"
                                    style={format!("animation-delay: {:.2}s", index as f64 * 0.15)}>
                                    <div class="service-icon" style={format!("color: {}", service.color)}>{"⚙"}</div>
                                    <h3>{ service.title }</h3>
                                    <p>{ service.desc }</p>
                                    <Link<Route> to={Route::Products} classes="service-link">{"Learn More →"}</Link<Route>>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section about-preview">
                    <div class="container">
                        <div class="about-grid">
                            <div class="about-image scroll-reveal">
                                <div class="image-wrapper">
                                    <img src="https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=600&h=500&fit=crop"
                                        alt="CSR Industries Manufacturing" />
                                    <div class="image-badge"><span>{"★ 20+ Years"}</span></div>
                                </div>
                            </div>
                            <div class="about-content scroll-reveal">
                                <h2>{"About CSR Industries"}</h2>
                                <p class="lead-text">{"Your trusted partner in sugar industry equipment manufacturing"}</p>
                                <p>
                                    {"CSR Industries is a certified manufacturer and erector of sugar industry equipment, \
                                      serving government, semi-government, and industrial sectors across India."}
                                </p>
                                <p>
                                    {"With ISO 9001:2015 and JAS-ANZ certifications, we deliver quality equipment for \
                                      sugar plants, agro-industries, fertilizer companies, cement plants, and power plants."}
                                </p>
                                <div class="features-grid">
                                    { for FEATURES.iter().map(|(title, desc)| html! {
                                        <div class="feature-item">
                                            <div class="feature-content">
                                                <h4>{ *title }</h4>
                                                <p>{ *desc }</p>
                                            </div>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        </div>
                        <div class="about-cta">
                            <Link<Route> to={Route::About} classes="btn btn-primary btn-large">{"Learn More About Us →"}</Link<Route>>
                        </div>
                    </div>
                </section>

                <section class="section clients-section">
                    <div class="container">
                        <h2 class="section-title scroll-reveal">{"Our Valued Clients"}</h2>
                        <p class="section-subtitle scroll-reveal">{"Trusted by leading companies across India"}</p>
                        <div class="clients-grid scroll-reveal">
                            { for CLIENTS.iter().map(|(name, logo)| html! {
                                <div class="client-logo">
                                    <div class="client-placeholder">
                                        <img src={*logo} alt={*name} />
                                        <span>{ *name }</span>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section cta-section">
                    <div class="cta-background"></div>
                    <div class="container cta-content scroll-reveal">
                        <h2>{"Ready to Start Your Project?"}</h2>
                        <p>{"Contact us today for quality sugar industry equipment and turnkey solutions"}</p>
                        <div class="cta-buttons">
                            <Link<Route> to={Route::Contact} classes="btn btn-primary btn-large">{"Get Started →"}</Link<Route>>
                            <Link<Route> to={Route::Products} classes="btn btn-secondary btn-large">{"View Products"}</Link<Route>>
                        </div>
                    </div>
                </section>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.reveal = RevealScope::observe();
        }
    }
}
