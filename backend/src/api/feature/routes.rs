//! Defines the HTTP routes for feature banners.
//!
//! Reading is public; adding a banner is an admin operation.

use super::handlers::*;
use crate::auth::middleware::{admin_auth, jwt_auth};
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the feature-banner router
pub fn feature_router() -> Router {
    Router::new()
        .route(
            "/add",
            post(add_feature)
                .layer(middleware::from_fn(admin_auth))
                .layer(middleware::from_fn(jwt_auth)),
        )
        .route("/get", get(get_features))
}
