// src/services/scraper.rs
use std::sync::LazyLock;

use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::FetchError;
use crate::services::upstream::get_text;

/// One score card per match on the live-scores page.
pub const LIVE_SCORE_SELECTOR: &str = "div.cb-scr-wll-chvrn.cb-lv-scrs-col";

static LIVE_SCORE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(LIVE_SCORE_SELECTOR).expect("selector is hard coded"));

/// Trimmed text of every score card, in document order.
pub fn extract_live_scores(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&LIVE_SCORE)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

pub async fn fetch_live_scores(client: &Client, url: &str) -> Result<Vec<String>, FetchError> {
    let html = get_text(client, url).await?;
    let scores = extract_live_scores(&html);
    tracing::debug!(count = scores.len(), "scraped live scores");
    Ok(scores)
}
