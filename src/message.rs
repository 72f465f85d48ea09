// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveScoresResponse {
    pub live_scores: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FetchCommentaryResponse {
    pub message: String,
    pub commentary: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedCommentaryResponse {
    pub commentary: Option<Value>,
}
