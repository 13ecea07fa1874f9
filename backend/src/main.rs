mod blobs;
mod config;
mod error;
mod feed;
mod services;
mod store;

use crate::blobs::BlobStore;
use crate::feed::state::{FeedHub, FEED_CAPACITY};
use crate::store::DocumentStore;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        // Client-side routes such as /products/mill-roller resolve to the SPA shell.
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = config::load_config()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = config.url();

    let store = DocumentStore::open(&config.store.database_path, FeedHub::new(FEED_CAPACITY))
        .map_err(io::Error::other)?;
    std::fs::create_dir_all(&config.storage.root_dir)?;
    let blobs = BlobStore::new(&config.storage.root_dir, &config.storage.public_prefix);

    if config.server.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);
    info!("Document store at {}", config.store.database_path.display());
    info!(
        "Blob storage at {} served under {}",
        blobs.root().display(),
        config.storage.public_prefix
    );

    let store = web::Data::new(store);
    let blobs = web::Data::new(blobs);
    let public_prefix = config.storage.public_prefix.clone();
    let blob_root = config.storage.root_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB per record
            .app_data(store.clone())
            .app_data(blobs.clone())
            .service(services::database::configure_routes())
            .service(services::feed::configure_routes())
            .service(services::storage::configure_routes())
            .service(Files::new(&public_prefix, &blob_root))
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await
}
