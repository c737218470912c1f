//! Backend health check (`GET {base}/`).

use gloo_net::http::Request;

use crate::config::endpoint;
use crate::services::upload::http_error;
use crate::types::{AppError, AppResult, HealthStatus, RawResponse};

/// Ask the backend whether it is up.
pub async fn check_health(base_url: &str) -> AppResult<HealthStatus> {
    let url = endpoint(base_url, "/");
    let response = Request::get(&url)
        .send()
        .await
        .map_err(http_error)?;

    let raw = RawResponse {
        status: response.status(),
        body: response
            .text()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))?,
    };
    parse_health(&raw)
}

/// Decode a health response; non-2xx counts as a server error.
pub fn parse_health(raw: &RawResponse) -> AppResult<HealthStatus> {
    if !raw.ok() {
        return Err(AppError::Server(Some(format!("Backend answered {}", raw.status))));
    }
    serde_json::from_str(&raw.body).map_err(|e| AppError::Parse(e.to_string()))
}
