//! Main entry point for the backend server.
//!
//! Opens the saved-games store, configures application state, and launches
//! the HTTP server with the game endpoints.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use actix_web::{web, App, HttpServer};
use log::info;

use battleships::config::server::{BIND_ENV, DEFAULT_BIND_ADDRESS};
use battleships::config::store::{DATA_DIR_ENV, DATA_FOLDER};
use battleships::server;
use battleships::store::JsonFileStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DATA_FOLDER));
    let store = JsonFileStore::in_dir(&data_dir);
    info!("[Server] Saving games to {}", store.path().display());

    // Shared application state for HTTP handlers.
    let state = web::Data::new(server::state::AppState::new(Arc::new(store)));

    let bind = env::var(BIND_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
    info!("[Server] Listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .wrap(actix_web::middleware::Logger::default())
            .app_data(state.clone())
            .configure(server::router::config)
    })
    .bind(bind)?
    .run()
    .await
}
