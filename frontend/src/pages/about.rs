use crate::reveal::RevealScope;
use yew::{html, Component, Context, Html};

const STATS: [(&str, &str, &str); 4] = [
    ("20+", "Years Experience", "#0066cc"),
    ("200+", "Happy Clients", "#ff6b35"),
    ("500+", "Projects Completed", "#28a745"),
    ("ISO", "Certified Quality", "#ffc107"),
];

const VALUES: [(&str, &str); 6] = [
    ("Quality Excellence", "Uncompromising standards in every product"),
    ("Customer Focus", "Your success is our priority"),
    ("Innovation", "Cutting-edge solutions for modern challenges"),
    ("Integrity", "Honest and transparent business practices"),
    ("Continuous Improvement", "Always striving for better"),
    ("Commitment", "Dedicated to your satisfaction"),
];

const CERTIFICATIONS: [(&str, &str, &str); 2] = [
    (
        "ISO 9001:2015",
        "Quality Management System certification ensuring consistent quality in our manufacturing processes.",
        "Certified",
    ),
    (
        "JAS-ANZ",
        "Joint Accreditation System of Australia and New Zealand accreditation for international standards.",
        "Accredited",
    ),
];

const SECTORS: [(&str, &str); 3] = [
    (
        "Government Sector",
        "Serving various government sugar mills and industrial projects with reliable equipment and solutions.",
    ),
    (
        "Semi-Government Sector",
        "Partnering with cooperative sugar factories and public sector undertakings.",
    ),
    (
        "Industrial Sector",
        "Supporting private sugar mills, agro-industries, and allied manufacturing units.",
    ),
];

pub struct AboutPage {
    reveal: Option<RevealScope>,
}

impl Component for AboutPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { reveal: None }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="about-page">
                <section class="about-hero">
                    <div class="container about-hero-content animate-fadeInUp">
                        <h1>{"About CSR Industries"}</h1>
                        <p class="hero-subtitle">{"Your Trusted Partner in Sugar Industry Equipment"}</p>
                        <div class="hero-badge">{"★ 20+ Years of Excellence"}</div>
                    </div>
                </section>

                <section class="section company-profile">
                    <div class="container profile-grid">
                        <div class="profile-image scroll-reveal">
                            <img src="https://images.unsplash.com/photo-1504917595217-d4dc5ebe6122?w=600&h=500&fit=crop"
                                alt="CSR Industries Factory" />
                            <div class="image-badge"><span>{"State-of-the-art Facility"}</span></div>
                        </div>
                        <div class="profile-content scroll-reveal">
                            <h2>{"Company Profile"}</h2>
                            <p class="lead-text">{"Building Excellence Since 2000"}</p>
                            <p>
                                {"CSR Industries is a leading certified manufacturer and erector of sugar industry equipment, \
                                  established with a vision to provide high-quality industrial solutions. Located at Plot No. 382, \
                                  Ekta Colony, Sangli, we have been serving the sugar and allied industries with dedication and excellence."}
                            </p>
                            <p>
                                {"Our expertise spans across manufacturing and erecting equipment for sugar plants, agro-industries, \
                                  fertilizer companies, cement plants, and power plants. We pride ourselves on delivering turnkey \
                                  solutions that meet international quality standards."}
                            </p>
                        </div>
                    </div>
                </section>

                <section class="section stats-section">
                    <div class="container stats-grid">
                        { for STATS.iter().enumerate().map(|(index, (value, label, color))| html! {
                            <div class="stat-card-about scroll-reveal" style={format!("animation-delay: {:.1}s", index as f64 * 0.1)}>
                                <div class="stat-value" style={format!("color: {color}")}>{ *value }</div>
                                <div class="stat-label">{ *label }</div>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="section mvv-section">
                    <div class="container">
                        <div class="mvv-grid">
                            <div class="mvv-card scroll-reveal">
                                <h3>{"Our Mission"}</h3>
                                <p>
                                    {"To provide world-class sugar industry equipment and solutions that enhance operational \
                                      efficiency, ensure safety, and deliver exceptional value to our clients through innovation \
                                      and quality craftsmanship."}
                                </p>
                            </div>
                            <div class="mvv-card scroll-reveal">
                                <h3>{"Our Vision"}</h3>
                                <p>
                                    {"To be the most trusted and preferred manufacturer of sugar industry equipment in India, \
                                      recognized for our commitment to quality, innovation, and customer satisfaction."}
                                </p>
                            </div>
                        </div>
                        <div class="values-section scroll-reveal">
                            <h3 class="values-title">{"Our Core Values"}</h3>
                            <div class="values-grid">
                                { for VALUES.iter().map(|(title, desc)| html! {
                                    <div class="value-item">
                                        <h4>{ *title }</h4>
                                        <p>{ *desc }</p>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </section>

                <section class="section certifications-section">
                    <div class="container">
                        <h2 class="section-title scroll-reveal">{"Certifications & Quality Standards"}</h2>
                        <p class="section-subtitle scroll-reveal">{"Committed to international quality and safety standards"}</p>
                        <div class="certifications-grid">
                            { for CERTIFICATIONS.iter().map(|(title, desc, badge)| html! {
                                <div class="certification-card scroll-reveal">
                                    <span class="cert-status">{ *badge }</span>
                                    <h3>{ *title }</h3>
                                    <p>{ *desc }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section clientele-section">
                    <div class="container">
                        <h2 class="section-title scroll-reveal">{"Our Clientele"}</h2>
                        <p class="section-subtitle scroll-reveal">{"Serving diverse sectors with excellence and reliability"}</p>
                        <div class="sectors-grid">
                            { for SECTORS.iter().map(|(title, desc)| html! {
                                <div class="sector-card scroll-reveal">
                                    <h3>{ *title }</h3>
                                    <p>{ *desc }</p>
                                </div>
                            }) }
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
