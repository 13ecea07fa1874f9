use crate::components::product_card::ProductCard;
use crate::gateway::feed::{subscribe_or_fetch, FeedSubscription};
use crate::reveal::RevealScope;
use crate::routes::Route;
use common::catalogue::filter::{category_chips, filter_products, CategorySelection};
use common::catalogue::normalize::normalize_products;
use common::catalogue::slug::duplicate_ids;
use common::model::collection::Collection;
use common::model::feed::FeedEvent;
use common::model::product::Product;
use gloo_console::{error, warn};
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

const LOAD_FAILED: &str = "Unable to load products right now.";

const TURNKEY_FEATURES: [(&str, &str); 4] = [
    ("Design & Engineering", "Custom solutions tailored to your requirements"),
    ("Manufacturing", "In-house fabrication with quality control"),
    ("Installation", "Professional erection and commissioning"),
    ("After Sales", "Maintenance and spare parts support"),
];

#[derive(Deserialize)]
struct CategoryQuery {
    category: Option<String>,
}

pub enum Msg {
    Feed(FeedEvent),
    Select(CategorySelection),
    LocationChanged,
}

pub struct ProductsPage {
    /// `None` until the first snapshot arrives.
    products: Option<Vec<Product>>,
    selection: CategorySelection,
    load_error: bool,
    reveal_pending: bool,
    reveal: Option<RevealScope>,
    _feed: Option<FeedSubscription>,
    _location_handle: Option<LocationHandle>,
}

fn selection_from_query(ctx: &Context<ProductsPage>) -> CategorySelection {
    ctx.link()
        .location()
        .and_then(|location| location.query::<CategoryQuery>().ok())
        .and_then(|query| query.category)
        .map(|raw| CategorySelection::parse(&raw))
        .unwrap_or_default()
}

impl Component for ProductsPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let feed = subscribe_or_fetch(Collection::Products, ctx.link().callback(Msg::Feed));
        let location_handle = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_| Msg::LocationChanged));

        Self {
            products: None,
            selection: selection_from_query(ctx),
            load_error: false,
            reveal_pending: true,
            reveal: None,
            _feed: feed,
            _location_handle: location_handle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Feed(FeedEvent::Snapshot { data }) => {
                let products = normalize_products(&data);
                for id in duplicate_ids(&products) {
                    warn!(format!("Several products resolve to '{}'; links open the first", id));
                }
                self.products = Some(products);
                self.load_error = false;
                self.reveal_pending = true;
                true
            }
            Msg::Feed(FeedEvent::Error { message }) => {
                error!(format!("Products feed error: {}", message));
                self.load_error = self.products.is_none();
                true
            }
            Msg::Select(selection) => {
                self.selection = selection;
                self.reveal_pending = true;
                true
            }
            Msg::LocationChanged => {
                let selection = selection_from_query(ctx);
                if selection != self.selection {
                    self.selection = selection;
                    self.reveal_pending = true;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="products-page">
                <section class="products-hero">
                    <div class="products-hero-background"></div>
                    <div class="container products-hero-content animate-fadeInUp">
                        <h1>{"Our Products & Services"}</h1>
                        <p class="hero-subtitle">{"Quality Equipment for Sugar Industry Excellence"}</p>
                    </div>
                </section>

                <section class="section products-main">
                    <div class="container">
                        { self.view_catalogue(ctx) }
                    </div>
                </section>

                <section class="section turnkey-section">
                    <div class="container">
                        <h2 class="section-title scroll-reveal">{"Turnkey Projects"}</h2>
                        <p class="section-subtitle scroll-reveal">{"Complete end-to-end solutions for your sugar plant"}</p>
                        <div class="turnkey-content scroll-reveal">
                            <p class="turnkey-intro">
                                {"We offer complete turnkey solutions for sugar plants including design, manufacturing, \
                                  supply, erection, and commissioning of equipment. Our experienced team ensures seamless \
                                  project execution from concept to completion."}
                            </p>
                        </div>
                        <div class="turnkey-features">
                            { for TURNKEY_FEATURES.iter().map(|(title, desc)| html! {
                                <div class="turnkey-feature-card scroll-reveal">
                                    <h4>{ *title }</h4>
                                    <p>{ *desc }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section products-cta">
                    <div class="cta-background"></div>
                    <div class="container cta-content scroll-reveal">
                        <h2>{"Need a Custom Solution?"}</h2>
                        <p>{"Contact us for tailored equipment and turnkey project solutions"}</p>
                        <Link<Route> to={Route::Contact} classes="btn btn-primary btn-large">{"Get Quote →"}</Link<Route>>
                    </div>
                </section>
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

impl ProductsPage {
    fn view_catalogue(&self, ctx: &Context<Self>) -> Html {
        let Some(products) = &self.products else {
            return if self.load_error {
                html! { <p class="empty-state">{ LOAD_FAILED }</p> }
            } else {
                html! {
                    <div class="loading-container">
                        <div class="loading-spinner"></div>
                        <p>{"Loading products..."}</p>
                    </div>
                }
            };
        };

        let chip = |selection: CategorySelection, label: String| {
            let active = selection == self.selection;
            let onclick = ctx.link().callback(move |_| Msg::Select(selection.clone()));
            html! {
                <button class={classes!("filter-btn", active.then_some("active"))} {onclick}>
                    <span>{ label }</span>
                </button>
            }
        };
        let visible = filter_products(products, &self.selection);

        html! {
            <>
                <div class="category-filter scroll-reveal">
                    { chip(CategorySelection::All, "All Products".to_string()) }
                    { for category_chips(products).into_iter().map(|category| {
                        let label = category.label().to_string();
                        chip(CategorySelection::Only(category), label)
                    }) }
                </div>
                if visible.is_empty() {
                    <p class="empty-state">{"No products in this category yet."}</p>
                } else {
                    <div class="products-grid">
                        { for visible.into_iter().enumerate().map(|(index, product)| html! {
                            <ProductCard key={product.id.clone()} product={product.clone()} {index} />
                        }) }
                    </div>
                }
            </>
        }
    }
}
