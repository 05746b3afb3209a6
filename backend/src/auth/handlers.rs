//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for registration, login,
//! logout, and auth-status checks, parse request data, and interact with the
//! `auth::service` for core business logic. Login and logout own the
//! session cookie; everything else about tokens lives in the service.

use crate::api::common::service_error_to_http;
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::config::Config;
use crate::utils::cookies::{
    build_clear_cookie, build_session_cookie, extract_session_token, set_cookie_header,
};
use axum::{
    extract::{Extension, Json},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Handle user registration request
#[axum::debug_handler]
pub async fn register(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Config>,
    Json(payload): Json<RegisterRequest>,
) -> Result<ResponseJson<MessageResponse>, (StatusCode, String)> {
    let auth_service = AuthService::new(&pool, &config);

    match auth_service.register(payload).await {
        Ok(()) => Ok(ResponseJson(MessageResponse {
            success: true,
            message: "Registration successful".to_string(),
        })),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login request, setting the session cookie on success
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<([(HeaderName, HeaderValue); 1], ResponseJson<LoginResponse>), (StatusCode, String)> {
    let auth_service = AuthService::new(&pool, &config);

    match auth_service.login(payload).await {
        Ok((token, user)) => {
            let cookie = build_session_cookie(&config, &token);
            Ok((
                [(header::SET_COOKIE, set_cookie_header(&cookie))],
                ResponseJson(LoginResponse {
                    success: true,
                    message: "Login successful!".to_string(),
                    user,
                }),
            ))
        }
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle logout request; clears the cookie whether or not a session existed
#[axum::debug_handler]
pub async fn logout(
    Extension(config): Extension<Config>,
) -> ([(HeaderName, HeaderValue); 1], ResponseJson<MessageResponse>) {
    let cookie = build_clear_cookie(&config);

    (
        [(header::SET_COOKIE, set_cookie_header(&cookie))],
        ResponseJson(MessageResponse {
            success: true,
            message: "Logged out successfully!".to_string(),
        }),
    )
}

/// Check auth status from the session cookie
#[axum::debug_handler]
pub async fn check_auth(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Config>,
    headers: HeaderMap,
) -> Result<ResponseJson<CheckAuthResponse>, (StatusCode, String)> {
    let Some(token) = extract_session_token(&headers) else {
        return Err(unauthenticated("No authentication token"));
    };

    let auth_service = AuthService::new(&pool, &config);

    match auth_service.check_auth(&token).await {
        Ok(user) => Ok(ResponseJson(CheckAuthResponse {
            success: true,
            is_authenticated: true,
            user: Some(user),
            message: None,
        })),
        Err(_) => Err(unauthenticated("Invalid authentication token")),
    }
}

/// 401 body in the check-auth shape; the message never distinguishes why
/// verification failed.
fn unauthenticated(message: &str) -> (StatusCode, String) {
    let body = CheckAuthResponse {
        success: false,
        is_authenticated: false,
        user: None,
        message: Some(message.to_string()),
    };
    (
        StatusCode::UNAUTHORIZED,
        serde_json::to_string(&body).unwrap(),
    )
}
