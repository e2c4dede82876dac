//! Login Stub Handlers
//!
//! One demo account. The session token is opaque and never checked by the
//! task routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;

use crate::domain::{Credentials, DomainError};
use crate::error::{ApiErrorResponse, ApiResult};
use crate::AppState;

pub const SESSION_COOKIE: &str = "session_token";

/// Seven days, in seconds.
pub const SESSION_MAX_AGE: u64 = 60 * 60 * 24 * 7;

fn session_cookie(token: &str, max_age: u64) -> ApiResult<HeaderValue> {
    let cookie = format!("{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}");
    HeaderValue::from_str(&cookie)
        .map_err(|error| DomainError::Internal(format!("unencodable cookie: {error}")).into())
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(credentials) = payload?;

    let session = state.account.authenticate(&credentials).map_err(|error| {
        tracing::warn!(email = %credentials.email, "login rejected");
        ApiErrorResponse::from(error)
    })?;

    tracing::info!(user = %session.user.id, "login accepted");
    let cookie = session_cookie(&session.token, SESSION_MAX_AGE)?;
    Ok((AppendHeaders([(header::SET_COOKIE, cookie)]), Json(session)))
}

/// Expires the session cookie.
pub async fn logout() -> ApiResult<impl IntoResponse> {
    let cookie = session_cookie("", 0)?;
    Ok((StatusCode::NO_CONTENT, AppendHeaders([(header::SET_COOKIE, cookie)])))
}
