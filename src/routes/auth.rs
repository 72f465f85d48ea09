// src/routes/auth.rs
use axum::{
    Json,
    extract::{FromRequestParts, State},
    http::request::Parts,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    error::AppError,
    message::{AuthStatus, LoginRequest, MessageResponse},
    state::SharedState,
};

pub const SESSION_COOKIE: &str = "session_id";

/// Username of the logged-in caller. Rejects with 401 when there is no live session.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl FromRequestParts<SharedState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &SharedState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            tracing::trace!("no session cookie");
            return Err(AppError::Unauthorized);
        };

        match state.sessions.touch(cookie.value()).await {
            Some(username) => Ok(CurrentUser(username)),
            None => {
                tracing::debug!("session cookie does not match a live session");
                Err(AppError::Unauthorized)
            }
        }
    }
}

fn session_cookie(id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

pub async fn login(
    State(state): State<SharedState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    if !state.credentials.verify(&payload.username, &payload.password) {
        tracing::debug!(username = %payload.username, "login rejected");
        return Err(AppError::InvalidCredentials);
    }

    // Never reuse an id the client brought with it.
    if let Some(previous) = jar.get(SESSION_COOKIE) {
        state.sessions.remove_session(previous.value()).await;
    }

    let session_id = state.sessions.create_session(payload.username.clone()).await;
    tracing::info!(username = %payload.username, "logged in");

    let jar = jar.add(session_cookie(session_id));
    Ok((jar, Json(MessageResponse { message: "Login successful".to_string() })))
}

pub async fn logout(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if state.sessions.remove_session(cookie.value()).await {
            tracing::info!("logged out");
        }
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Json(MessageResponse { message: "Logout successful".to_string() }))
}

pub async fn check_auth(State(state): State<SharedState>, jar: CookieJar) -> Json<AuthStatus> {
    let username = match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.get_username(cookie.value()).await,
        None => None,
    };

    Json(AuthStatus { is_authenticated: username.is_some(), username })
}
