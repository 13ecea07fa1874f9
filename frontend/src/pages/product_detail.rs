use crate::gateway::feed::{subscribe_or_fetch, FeedSubscription};
use crate::helpers::scroll_to_top;
use crate::reveal::RevealScope;
use crate::routes::Route;
use common::catalogue::detail::ProductDetail;
use common::catalogue::normalize::normalize_products;
use common::catalogue::slug::find_product;
use common::model::collection::Collection;
use common::model::feed::FeedEvent;
use common::model::product::Product;
use gloo_console::error;
use yew::prelude::*;
use yew_router::prelude::*;

/// Features listed beside the overview text.
const OVERVIEW_FEATURES: usize = 4;

#[derive(Properties, PartialEq)]
pub struct ProductDetailProps {
    /// Name slug from the URL.
    pub id: String,
}

#[derive(Clone, Copy, PartialEq)]
pub enum AnalysisTab {
    Advantages,
    Considerations,
}

pub enum Msg {
    Feed(FeedEvent),
    SelectTab(AnalysisTab),
}

pub struct ProductDetailPage {
    /// Last snapshot, kept so an id change resolves without waiting for the feed.
    products: Option<Vec<Product>>,
    detail: Option<ProductDetail>,
    tab: AnalysisTab,
    reveal_pending: bool,
    reveal: Option<RevealScope>,
    _feed: Option<FeedSubscription>,
}

impl ProductDetailPage {
    fn resolve(&mut self, id: &str) {
        self.detail = self
            .products
            .as_deref()
            .and_then(|products| find_product(products, id))
            .cloned()
            .map(ProductDetail::build);
        self.reveal_pending = true;
    }
}

impl Component for ProductDetailPage {
    type Message = Msg;
    type Properties = ProductDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        let feed = subscribe_or_fetch(Collection::Products, ctx.link().callback(Msg::Feed));
        Self {
            products: None,
            detail: None,
            tab: AnalysisTab::Advantages,
            reveal_pending: false,
            reveal: None,
            _feed: feed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Feed(FeedEvent::Snapshot { data }) => {
                self.products = Some(normalize_products(&data));
                self.resolve(&ctx.props().id);
                true
            }
            Msg::Feed(FeedEvent::Error { message }) => {
                error!(format!("Products feed error: {}", message));
                if self.products.is_none() {
                    // Stop the spinner; an empty catalogue renders "not found".
                    self.products = Some(Vec::new());
                    self.detail = None;
                    return true;
                }
                false
            }
            Msg::SelectTab(tab) => {
                let changed = self.tab != tab;
                self.tab = tab;
                changed
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id == old_props.id {
            return false;
        }
        self.tab = AnalysisTab::Advantages;
        self.resolve(&ctx.props().id);
        scroll_to_top();
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.products.is_none() {
            return html! {
                <div class="loading-container">
                    <div class="loading-spinner"></div>
                    <p>{"Loading Product Components..."}</p>
                </div>
            };
        }
        let Some(detail) = &self.detail else {
            return html! {
                <div class="not-found-container">
                    <h2>{"Product not found"}</h2>
                </div>
            };
        };

        html! {
            <div class="product-detail-page">
                { self.view_hero(detail) }
                { self.view_overview(detail) }
                { self.view_analysis(ctx, detail) }
                <section class="section detail-cta">
                    <div class="container cta-content scroll-reveal">
                        <h2>{"Ready to Optimize Your Production?"}</h2>
                        <p>{"Our engineers will size the equipment to your plant capacity."}</p>
                        <Link<Route> to={Route::Contact} classes="btn btn-primary btn-large">{"Get a Quote"}</Link<Route>>
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

impl ProductDetailPage {
    fn view_hero(&self, detail: &ProductDetail) -> Html {
        let product = &detail.product;
        html! {
            <section class="detail-hero">
                <div class="container detail-hero-grid">
                    <div class="detail-hero-text animate-fadeInUp">
                        <Link<Route> to={Route::Products} classes="back-link">{"← Back to Products"}</Link<Route>>
                        if !product.category_label.is_empty() {
                            <span class="category-badge">{ &product.category_label }</span>
                        }
                        <h1>{ &product.name }</h1>
                        <p class="hero-subtitle">{ &product.short_description }</p>
                        <div class="quick-stats">
                            if let Some(label) = detail.quick_stat_label() {
                                <div class="quick-stat">
                                    <strong>{ label }</strong>
                                    <span>{"Key Feature"}</span>
                                </div>
                            }
                            <div class="quick-stat">
                                <strong>{"High"}</strong>
                                <span>{"Efficiency"}</span>
                            </div>
                            <div class="quick-stat">
                                <strong>{"24/7"}</strong>
                                <span>{"Operation"}</span>
                            </div>
                        </div>
                    </div>
                    if !product.image.is_empty() {
                        <div class="detail-hero-image">
                            <img src={product.image.clone()} alt={product.name.clone()} />
                        </div>
                    }
                </div>
            </section>
        }
    }

    fn view_overview(&self, detail: &ProductDetail) -> Html {
        let product = &detail.product;
        html! {
            <section class="section detail-overview">
                <div class="container overview-grid">
                    <div class="overview-text scroll-reveal">
                        <h2 class="section-title">{"Product Overview"}</h2>
                        { for detail.sections.iter().map(|section| html! {
                            <div class="overview-section">
                                if let Some(heading) = &section.heading {
                                    <h3>{ heading }</h3>
                                }
                                <p>{ &section.body }</p>
                            </div>
                        }) }
                        <div class="overview-actions">
                            <Link<Route> to={Route::Contact} classes="btn btn-primary">{"Get Quote"}</Link<Route>>
                            <Link<Route> to={Route::Products} classes="btn btn-secondary">{"All Products"}</Link<Route>>
                        </div>
                    </div>
                    <aside class="overview-side scroll-reveal">
                        if !product.features.is_empty() {
                            <div class="side-block">
                                <h3>{"Key Features"}</h3>
                                <ul>
                                    { for product.features.iter().take(OVERVIEW_FEATURES).map(|f| html! { <li>{ f }</li> }) }
                                </ul>
                            </div>
                        }
                        if !product.specifications.is_empty() {
                            <div class="side-block">
                                <h3>{"Specifications"}</h3>
                                <ul>
                                    { for product.specifications.iter().map(|s| html! { <li>{ s }</li> }) }
                                </ul>
                            </div>
                        }
                        if !product.applications.is_empty() {
                            <div class="side-block">
                                <h3>{"Applications"}</h3>
                                <ul>
                                    { for product.applications.iter().map(|a| html! { <li>{ a }</li> }) }
                                </ul>
                            </div>
                        }
                    </aside>
                </div>
            </section>
        }
    }

    fn view_analysis(&self, ctx: &Context<Self>, detail: &ProductDetail) -> Html {
        let tab_button = |tab: AnalysisTab, label: &'static str| {
            let active = self.tab == tab;
            html! {
                <button
                    class={classes!("tab-btn", active.then_some("active"))}
                    onclick={ctx.link().callback(move |_| Msg::SelectTab(tab))}
                >
                    { label }
                </button>
            }
        };
        let (items, empty) = match self.tab {
            AnalysisTab::Advantages => (&detail.advantages, "No specific advantages listed."),
            AnalysisTab::Considerations => (&detail.disadvantages, "No specific considerations listed."),
        };

        html! {
            <section class="section detail-analysis">
                <div class="container">
                    <h2 class="section-title scroll-reveal">{"Key Features Analysis"}</h2>
                    <div class="analysis-tabs">
                        { tab_button(AnalysisTab::Advantages, "Advantages") }
                        { tab_button(AnalysisTab::Considerations, "Considerations") }
                    </div>
                    <div class="analysis-panel">
                        if items.is_empty() {
                            <p class="empty-state">{ empty }</p>
                        } else {
                            <ul class={classes!("analysis-list", (self.tab == AnalysisTab::Considerations).then_some("considerations"))}>
                                { for items.iter().map(|item| html! { <li>{ item }</li> }) }
                            </ul>
                        }
                    </div>
                </div>
            </section>
        }
    }
}
