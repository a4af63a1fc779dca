//! Auth mutations: login, register, logout.
//!
//! Each performs exactly one network call. On success the returned identity
//! (or its absence, for logout) is written straight into the session cache —
//! no refetch of the probe — before the function returns, so the caller can
//! navigate immediately with the cache already current. On failure nothing
//! is written; the error is the caller's to display.

use crate::net::api::{self, ApiError};
use crate::net::types::{AuthResponse, Credentials, User};

use super::context::AuthSession;

/// Sign in with email/password. The backend sets the session cookie.
///
/// # Errors
///
/// Propagates the API error (bad credentials, validation, transport)
/// untouched; the session cache is not modified.
pub async fn login(session: AuthSession, credentials: &Credentials) -> Result<User, ApiError> {
    let resp: AuthResponse = api::post("/auth/login", Some(credentials)).await?;
    let user = expect_user(resp)?;
    session.store_identity(user.clone());
    Ok(user)
}

/// Create an account and sign in.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(session: AuthSession, credentials: &Credentials) -> Result<User, ApiError> {
    let resp: AuthResponse = api::post("/auth/register", Some(credentials)).await?;
    let user = expect_user(resp)?;
    session.store_identity(user.clone());
    Ok(user)
}

/// Sign out. The backend clears the session cookie; the cache resolves to
/// absent and the cache epoch bumps, invalidating every principal-scoped
/// entry in the app.
///
/// # Errors
///
/// Propagates the API error; the session cache is not modified on failure.
pub async fn logout(session: AuthSession) -> Result<(), ApiError> {
    let _: AuthResponse = api::post::<Credentials, _>("/auth/logout", None).await?;
    session.sign_out();
    Ok(())
}

/// A successful login/register must carry the principal.
fn expect_user(resp: AuthResponse) -> Result<User, ApiError> {
    resp.user
        .ok_or_else(|| ApiError::Decode("auth response missing user".to_owned()))
}
