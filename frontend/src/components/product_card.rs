use crate::routes::Route;
use common::catalogue::slug::product_id;
use common::model::product::Product;
use yew::{html, Component, Context, Html, Properties};
use yew_router::prelude::Link;

/// Specs shown on a card before the rest is left to the detail view.
const CARD_SPECS: usize = 3;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    /// Position in the grid; staggers the reveal animation.
    pub index: usize,
}

pub struct ProductCard;

impl Component for ProductCard {
    type Message = ();
    type Properties = ProductCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let ProductCardProps { product, index } = ctx.props();
        let detail = Route::ProductDetail { id: product_id(product) };
        let specs = if product.specifications.is_empty() {
            &product.features
        } else {
            &product.specifications
        };

        html! {
            <div class="product-card scroll-reveal" style={format!("animation-delay: {:.1}s", *index as f64 * 0.1)}>
                <div class="product-image">
                    <img src={product.image.clone()} alt={product.name.clone()} loading="lazy" />
                    <div class="product-overlay">
                        <Link<Route> to={detail.clone()} classes="btn-view">{"View Details"}</Link<Route>>
                    </div>
                </div>
                <div class="product-content">
                    <span class="product-category">{ product.category_label.clone() }</span>
                    <h3>{ product.name.clone() }</h3>
                    <p>{ product.short_description.clone() }</p>
                    <ul class="specs-list">
                        { for specs.iter().take(CARD_SPECS).map(|spec| html! { <li>{"✔ "}{ spec.clone() }</li> }) }
                    </ul>
                    <Link<Route> to={detail} classes="btn-download-product">{"View Details →"}</Link<Route>>
                </div>
            </div>
        }
    }
}
