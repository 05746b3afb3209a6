//! Session-cookie construction and extraction.
//!
//! The session token travels in an HTTP-only cookie. Secure and SameSite
//! attributes depend on the deployment environment: strict same-site with the
//! Secure flag in production, lax without it during local development.

use crate::config::Config;
use axum::http::{HeaderMap, HeaderValue, header};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Build the Set-Cookie value that installs a session token.
pub fn build_session_cookie(config: &Config, token: &str) -> String {
    let mut parts = vec![
        format!("{}={}", SESSION_COOKIE, token),
        "HttpOnly".to_string(),
        "Path=/".to_string(),
        format!("Max-Age={}", config.jwt_expires_in_seconds),
    ];

    if config.is_production() {
        parts.push("Secure".to_string());
        parts.push("SameSite=Strict".to_string());
    } else {
        parts.push("SameSite=Lax".to_string());
    }

    parts.join("; ")
}

/// Build the Set-Cookie value that clears the session cookie.
pub fn build_clear_cookie(config: &Config) -> String {
    let mut parts = vec![
        format!("{}=", SESSION_COOKIE),
        "HttpOnly".to_string(),
        "Path=/".to_string(),
        "Max-Age=0".to_string(),
        "Expires=Thu, 01 Jan 1970 00:00:00 GMT".to_string(),
    ];

    if config.is_production() {
        parts.push("Secure".to_string());
        parts.push("SameSite=Strict".to_string());
    } else {
        parts.push("SameSite=Lax".to_string());
    }

    parts.join("; ")
}

/// Turn a cookie string into a header value.
pub fn set_cookie_header(cookie: &str) -> HeaderValue {
    HeaderValue::from_str(cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Extract a cookie value from request headers.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name { Some(value.to_string()) } else { None }
        })
}

/// Extract the session token from request headers.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, SESSION_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppEnv;

    fn test_config(app_env: AppEnv) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 3,
            jwt_secret: "secret".to_string(),
            jwt_expires_in_seconds: 86400,
            server_port: 0,
            app_env,
        }
    }

    #[test]
    fn production_cookie_is_strict_and_secure() {
        let cookie = build_session_cookie(&test_config(AppEnv::Production), "abc");
        assert!(cookie.starts_with("token=abc"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("Path=/"));
    }

    #[test]
    fn development_cookie_is_lax_and_not_secure() {
        let cookie = build_session_cookie(&test_config(AppEnv::Development), "abc");
        assert!(!cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = build_clear_cookie(&test_config(AppEnv::Development));
        assert!(cookie.starts_with("token="));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn extracts_cookie_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; token=abc123; other=xyz"),
        );

        assert_eq!(extract_session_token(&headers), Some("abc123".to_string()));
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn missing_cookie_header_yields_none() {
        let headers = HeaderMap::new();
        assert_eq!(extract_session_token(&headers), None);
    }
}
