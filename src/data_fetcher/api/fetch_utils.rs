//! Single-shot HTTP fetching of feed documents with status-specific errors

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use super::jsonp::unwrap_jsonp;
use crate::error::AppError;

/// Longest slice of an error body kept in error messages
const ERROR_BODY_PREVIEW_CHARS: usize = 500;

/// Maps a non-2xx response to the matching error variant.
/// The response body (truncated) is carried in the message for diagnostics.
fn status_error(status_code: u16, reason: &str, body: &str, url: &str) -> AppError {
    let body_preview: String = body.trim().chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
    let message = if body_preview.is_empty() {
        reason.to_string()
    } else {
        format!("{reason}: {body_preview}")
    };

    match status_code {
        404 => AppError::api_not_found(message, url),
        429 => AppError::api_rate_limit(message, url),
        400..=499 => AppError::api_client_error(status_code, message, url),
        502 | 503 => AppError::api_service_unavailable(status_code, message, url),
        _ => AppError::api_server_error(status_code, message, url),
    }
}

/// Issues one GET and returns the raw body text.
///
/// Fails with a network error on transport failure or any non-2xx status.
/// There is no retry: a failure is surfaced to the caller immediately.
#[instrument(skip(client))]
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching feed from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        let body = response.text().await.unwrap_or_default();
        error!(
            "HTTP {} - {} (URL: {}) body: {}",
            status_code,
            reason,
            url,
            body.chars().take(200).collect::<String>()
        );
        return Err(status_error(status_code, reason, &body, url));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(256).collect();
    debug!("Response text (first 256 chars): {preview}");

    Ok(response_text)
}

/// Fetches a feed document and unwraps its JSONP envelope.
pub async fn fetch_feed(client: &Client, url: &str) -> Result<Value, AppError> {
    let text = fetch_text(client, url).await?;
    unwrap_jsonp(&text).map_err(|e| {
        error!("Failed to parse feed payload: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            text.chars().take(200).collect::<String>()
        );
        AppError::api_malformed_json(e.to_string(), url)
    })
}
