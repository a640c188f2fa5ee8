pub mod inventory_log;
pub mod product;
pub mod report;

use common::ApiResponse;
use gloo_net::http::Request;
use serde::Deserialize;
use crate::settings;

/// Error Response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub message: String,
}

/// Common GET request handler.
///
/// Unwraps the `{ data: ... }` envelope; an envelope flagged
/// `success: false` is reported as an error even on HTTP 200.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                log::error!("GET {} - API error: {}", endpoint, err.message);
                format!("Error: {}", err.message)
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("GET {} - {}", endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if api_response.is_rejected() {
        let error_msg = api_response
            .message
            .clone()
            .unwrap_or_else(|| "Request was not successful".to_string());
        log::error!("GET {} - Rejected: {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.into_data())
}
