//! Main entry point for the Storefront backend.
//!
//! This file initializes the Axum web server, sets up the database
//! connection, and hands route registration to the application router.
//! It orchestrates the application's startup and defines its overall
//! structure.

mod api;
mod app;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod services;
mod utils;

use config::Config;
use database::Database;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    let pool = db.pool().clone();

    let app = app::build_router(pool, config.clone());

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting Storefront server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}
