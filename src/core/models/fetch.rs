//! Fetch the model list from the provider's `/models` endpoint.

use reqwest::StatusCode;

use crate::core::config::Config;

use super::error::ListError;
use super::info::{ModelInfo, ModelList};

/// Identifier fragments that suggest a model small enough for a free account.
pub const FREE_TIER_MARKERS: [&str; 5] = ["7b", "8b", "small", "tiny", "mini"];

/// Free-tier heuristic: case-insensitive substring match against [`FREE_TIER_MARKERS`].
pub fn is_likely_free(model_id: &str) -> bool {
    let id = model_id.to_lowercase();
    FREE_TIER_MARKERS.iter().any(|marker| id.contains(marker))
}

/// Stable ascending sort on the raw id (code-point order, no case folding).
pub fn sort_models(models: &mut [ModelInfo]) {
    models.sort_by(|a, b| a.id.cmp(&b.id));
}

fn build_client(config: &Config) -> Result<reqwest::Client, ListError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Issue one authenticated `GET {base_url}/models` and return the entries sorted by id.
///
/// # Errors
/// - [`ListError::HttpStatus`] for any status other than 200, carrying the raw body.
/// - [`ListError::Transport`] when the request cannot be sent or the body cannot be read.
/// - [`ListError::Parse`] when a 200 body is not a model list.
pub async fn fetch_models(config: &Config) -> Result<Vec<ModelInfo>, ListError> {
    let url = config.models_url();
    log::debug!("GET {}", url);

    let client = build_client(config)?;
    let response = client
        .get(&url)
        .bearer_auth(&config.api_key)
        .send()
        .await?;

    let status = response.status();
    log::debug!("models endpoint responded with {}", status);
    let body = response.text().await?;

    if status != StatusCode::OK {
        return Err(ListError::HttpStatus {
            code: status.as_u16(),
            body,
        });
    }

    let mut models = serde_json::from_str::<ModelList>(&body)?.data;
    sort_models(&mut models);
    log::info!("Fetched {} models", models.len());
    Ok(models)
}
