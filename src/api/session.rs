//! Session cookie handling
//!
//! Resolves the viewer session from the `Cookie` header and builds the
//! `Set-Cookie` header for sessions created during the request.

use axum::http::{header, HeaderMap, HeaderValue};

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::session::SessionHandle;

/// Read a cookie value by name
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Session for this request, created if the cookie is missing or stale
pub async fn resolve(state: &AppState, headers: &HeaderMap) -> ApiResult<SessionHandle> {
    let cookie = read_cookie(headers, &state.config.cookie_name);
    let handle = state.sessions.get_or_create(cookie).await?;
    Ok(handle)
}

/// Response headers carrying the cookie for a newly created session
pub fn cookie_headers(state: &AppState, handle: &SessionHandle) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    if handle.is_new {
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            state.config.cookie_name,
            handle.id,
            state.sessions.config().idle_timeout_secs
        );
        let value = HeaderValue::from_str(&cookie)
            .map_err(|e| ApiError::Internal(format!("Invalid cookie header: {}", e)))?;
        headers.insert(header::SET_COOKIE, value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; ki_cockpit_session=abc-123;other=1"),
        );

        assert_eq!(read_cookie(&headers, "ki_cockpit_session"), Some("abc-123"));
        assert_eq!(read_cookie(&headers, "other"), Some("1"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_read_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("a=1"));
        headers.append(header::COOKIE, HeaderValue::from_static("b=2"));

        assert_eq!(read_cookie(&headers, "b"), Some("2"));
        assert_eq!(read_cookie(&HeaderMap::new(), "a"), None);
    }
}
