//! Defines the HTTP route for product search.

use super::handlers::search_products;
use axum::{Router, routing::get};

/// Creates the search router
pub fn search_router() -> Router {
    Router::new().route("/{keyword}", get(search_products))
}
