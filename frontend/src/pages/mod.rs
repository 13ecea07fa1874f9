pub mod about;
pub mod clear_gallery;
pub mod contact;
pub mod gallery;
pub mod gallery_upload;
pub mod home;
pub mod not_found;
pub mod product_detail;
pub mod products;
