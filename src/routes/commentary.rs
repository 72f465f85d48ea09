// src/routes/commentary.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{FetchCommentaryResponse, SavedCommentaryResponse},
    routes::auth::CurrentUser,
    services::commentary::{fetch_and_save_commentary, load_saved_commentary},
    state::SharedState,
};

pub async fn fetch_commentary(
    State(state): State<SharedState>,
    CurrentUser(username): CurrentUser,
) -> Result<Json<FetchCommentaryResponse>, AppError> {
    tracing::debug!(%username, "fetching commentary");
    let commentary = fetch_and_save_commentary(&state.http, &state.commentary_url, state.commentary.as_ref())
        .await
        .map_err(AppError::FetchCommentary)?;

    Ok(Json(FetchCommentaryResponse {
        message: "Commentary fetched and saved successfully.".to_string(),
        commentary,
    }))
}

pub async fn saved_commentary(
    State(state): State<SharedState>,
    _user: CurrentUser,
) -> Result<Json<SavedCommentaryResponse>, AppError> {
    let commentary = load_saved_commentary(state.commentary.as_ref())
        .await
        .map_err(AppError::SavedCommentary)?;

    Ok(Json(SavedCommentaryResponse { commentary }))
}
