use crate::pages::about::AboutPage;
use crate::pages::clear_gallery::ClearGalleryPage;
use crate::pages::contact::ContactPage;
use crate::pages::gallery::GalleryPage;
use crate::pages::gallery_upload::GalleryUploadPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::product_detail::ProductDetailPage;
use crate::pages::products::ProductsPage;
use yew::{html, Html};
use yew_router::Routable;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/products")]
    Products,
    #[at("/products/:id")]
    ProductDetail { id: String },
    #[at("/gallery")]
    Gallery,
    #[at("/contact")]
    Contact,
    #[at("/admin/gallery-upload")]
    GalleryUpload,
    #[at("/admin/clear-gallery")]
    ClearGallery,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether a navigation entry for `self` should be highlighted on `current`.
    pub fn is_active_on(&self, current: &Route) -> bool {
        match self {
            Route::Products => matches!(current, Route::Products | Route::ProductDetail { .. }),
            other => other == current,
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Products => html! { <ProductsPage /> },
        Route::ProductDetail { id } => html! { <ProductDetailPage {id} /> },
        Route::Gallery => html! { <GalleryPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::GalleryUpload => html! { <GalleryUploadPage /> },
        Route::ClearGallery => html! { <ClearGalleryPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn products_entry_stays_active_on_detail_pages() {
        let detail = Route::ProductDetail { id: "juice-heater".into() };
        assert!(Route::Products.is_active_on(&detail));
        assert!(Route::Products.is_active_on(&Route::Products));
        assert!(!Route::Home.is_active_on(&detail));
        assert!(Route::Gallery.is_active_on(&Route::Gallery));
    }

    #[test]
    fn recognises_site_paths() {
        assert_eq!(Route::recognize("/products/mill-rollers"), Some(Route::ProductDetail { id: "mill-rollers".into() }));
        assert_eq!(Route::recognize("/admin/clear-gallery"), Some(Route::ClearGallery));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}
