//! # Live Feed Service Module
//!
//! Server-sent event streams under `/api/feed`. Each stream starts with the
//! current snapshot of its collection and then emits a fresh snapshot after
//! every change to that collection.

mod subscribe;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/feed";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{collection}", get().to(subscribe::process))
}
