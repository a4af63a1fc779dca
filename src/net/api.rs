//! REST client for the backend auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with cookies
//! included so the session rides along on every request.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response is inspected before the body is read: an unauthorized
//! status on any path other than the session probe forces a full-page
//! redirect to `/login` (the probe legitimately returns 401 for anonymous
//! visitors and must not loop the login screen). The error still propagates
//! to the caller after the redirect is issued. The probe itself resolves
//! every failure to "no session" — absence is not an exceptional condition.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg(feature = "hydrate")]
use super::types::ErrorBody;
use super::types::{MeResponse, User};

/// Base path of the backend REST API, same origin as the app.
pub const API_BASE: &str = "/api/v1";

/// Session probe endpoint, exempt from the unauthorized redirect.
pub const SESSION_PROBE: &str = "/auth/me";

/// Failure of an API call. `Status` carries the backend's error message
/// when the body parses as the standard `{error}` envelope.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unsupported,
}

/// Join an endpoint path onto the API base.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Interceptor decision: does this response force a redirect to `/login`?
///
/// True only for unauthorized responses on paths other than the session
/// probe.
pub fn unauthorized_redirect(status: u16, path: &str) -> bool {
    status == 401 && !path.contains(SESSION_PROBE)
}

/// Issue a GET to `{API_BASE}{path}` and decode the JSON body.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, a non-success status, or an
/// undecodable body. Unauthorized responses additionally trigger the login
/// redirect unless `path` is the session probe.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url(path))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(path, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unsupported)
    }
}

/// Issue a POST to `{API_BASE}{path}` with an optional JSON body and decode
/// the JSON response.
///
/// # Errors
///
/// Same contract as [`get`].
pub async fn post<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: Option<&B>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&api_url(path))
            .credentials(web_sys::RequestCredentials::Include);
        let resp = match body {
            Some(b) => req
                .json(b)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await,
            None => req.send().await,
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(path, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unsupported)
    }
}

/// Fetch the currently authenticated user from the session probe.
///
/// Returns `None` when not authenticated, on any failure, or on the server.
/// Transport failures are logged but still read as signed-out.
pub async fn fetch_current_user() -> Option<User> {
    match get::<MeResponse>(SESSION_PROBE).await {
        Ok(me) => Some(me.user),
        Err(ApiError::Transport(e)) => {
            leptos::logging::warn!("session probe unreachable, treating as signed out: {e}");
            None
        }
        Err(_) => None,
    }
}

/// Check the response status, run the unauthorized interceptor, and decode
/// the body into `T` (or the backend error envelope on failure).
#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(
    path: &str,
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = resp.status();
    if unauthorized_redirect(status, path) {
        redirect_to_login();
        return Err(ApiError::Unauthorized);
    }
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !resp.ok() {
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => resp.status_text(),
        };
        return Err(ApiError::Status { status, message });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Full-page navigation to the login screen, discarding in-memory state.
#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
