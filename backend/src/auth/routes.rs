//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle user registration, login, logout, and the
//! auth-status check. They are designed to be nested into the main Axum
//! router under `/api/auth`.

use crate::auth::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/check-auth", get(check_auth))
}
