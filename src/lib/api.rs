//! HTTP helpers for JSON APIs with consistent timeouts and error handling. The
//! browser build sends through `gloo-net` with an abort-controller timeout; native
//! builds use `reqwest` with the same timeout so the client can run in tests and
//! tooling. Status handling and error-body extraction are shared by both.
//! The helpers never log request bodies; callers pass credentials through them.

use super::errors::AppError;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, to_string};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;
/// Fields auth providers use for the human-readable part of an error body.
const ERROR_MESSAGE_FIELDS: [&str; 4] = ["msg", "error_description", "message", "error"];

/// Status and body of a completed request, before interpretation.
struct RawResponse {
    status: u16,
    body: String,
}

impl RawResponse {
    fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts JSON with custom headers and parses a JSON response.
pub async fn post_json_with_headers_response<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<T, AppError> {
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = transport::post(url, payload, headers).await?;

    handle_json_response(response)
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(message: &str) -> AppError {
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("timed out") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the auth service: {message}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
fn handle_json_response<T: DeserializeOwned>(response: RawResponse) -> Result<T, AppError> {
    if response.ok() {
        serde_json::from_str::<T>(&response.body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(AppError::Http {
            status: response.status,
            message: extract_error_message(&response.body),
        })
    }
}

/// Pulls the provider's message out of a JSON error body, or falls back to the raw text.
fn extract_error_message(body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ERROR_MESSAGE_FIELDS.iter().find_map(|field| {
            value
                .get(field)
                .and_then(Value::as_str)
                .map(str::to_string)
        })
    });

    sanitize_body(from_json.unwrap_or_else(|| body.to_string()))
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(target_arch = "wasm32")]
mod transport {
    use super::{AppError, DEFAULT_TIMEOUT_MS, RawResponse, map_request_error};
    use gloo_net::http::Request;
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    /// Sends a JSON POST with an abort timeout to avoid hanging UI state.
    pub(super) async fn post(
        url: &str,
        payload: String,
        headers: &[(String, String)],
    ) -> Result<RawResponse, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let mut builder = Request::post(url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(&signal));

        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let request = builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;
        let response = request
            .send()
            .await
            .map_err(|err| map_request_error(&err.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod transport {
    use super::{AppError, DEFAULT_TIMEOUT_MS, RawResponse, map_request_error};
    use reqwest::header::CONTENT_TYPE;
    use std::time::Duration;

    /// Sends a JSON POST with a client-level timeout.
    pub(super) async fn post(
        url: &str,
        payload: String,
        headers: &[(String, String)],
    ) -> Result<RawResponse, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(u64::from(DEFAULT_TIMEOUT_MS)))
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        let mut builder = client.post(url).header(CONTENT_TYPE, "application/json");

        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(payload).send().await.map_err(map_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_error)?;
        Ok(RawResponse { status, body })
    }

    fn map_error(err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            map_request_error(&err.to_string())
        }
    }
}
