//! Types and pure transforms shared by the backend gateway and the Yew frontend.
//!
//! - `model`: records as they live in the document store, plus the canonical shapes
//!   the views render.
//! - `catalogue`: normalisation of operator-entered product data, description
//!   segmentation, slugs and listing filters.
//! - `forms`: presence/size/confirmation validation for the site's forms.
//! - `requests`: request and response payloads of the HTTP gateway.

pub mod catalogue;
pub mod forms;
pub mod model;
pub mod requests;
