// src/routes/scores.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::LiveScoresResponse,
    services::scraper::fetch_live_scores,
    state::SharedState,
};

pub async fn live_scores(State(state): State<SharedState>) -> Result<Json<LiveScoresResponse>, AppError> {
    let live_scores = fetch_live_scores(&state.http, &state.live_scores_url)
        .await
        .map_err(AppError::LiveScores)?;

    Ok(Json(LiveScoresResponse { live_scores }))
}
