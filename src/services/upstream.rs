// src/services/upstream.rs
use std::time::Duration;

use reqwest::{Client, Response};

use crate::error::FetchError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared client for every upstream call. Cheap to clone.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

async fn get_ok(client: &Client, url: &str) -> Result<Response, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    tracing::debug!(%url, %status, "upstream responded");
    Ok(response)
}

/// GET `url` and return the body decoded as text. Any non-2xx status is an error.
pub async fn get_text(client: &Client, url: &str) -> Result<String, FetchError> {
    Ok(get_ok(client, url).await?.text().await?)
}

/// GET `url` and return the body exactly as sent.
pub async fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    Ok(get_ok(client, url).await?.bytes().await?.to_vec())
}
