// src/routes/mod.rs
pub mod auth;
pub mod commentary;
pub mod scores;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(public_dir: impl AsRef<Path>) -> Router<SharedState> {
    // Protected routes take a `CurrentUser` argument instead of sitting behind a layer.
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/check-auth", get(auth::check_auth))
        .route("/live-scores", get(scores::live_scores))
        .route("/fetch-commentary", get(commentary::fetch_commentary))
        .route("/saved-commentary", get(commentary::saved_commentary))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
