//! Defines the HTTP routes for delivery addresses.
//!
//! Every address route requires an authenticated session.

use super::handlers::*;
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

/// Creates the address router
pub fn address_router() -> Router {
    Router::new()
        .route("/add", post(add_address))
        .route("/get", get(get_addresses))
        .route("/update/{address_id}", put(update_address))
        .route("/delete/{address_id}", delete(delete_address))
        .layer(middleware::from_fn(jwt_auth))
}
