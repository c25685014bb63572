//! Retry helper for HTTP requests with exponential backoff.
//!
//! This module provides functionality to automatically retry HTTP requests
//! that fail with throttling or transient gateway status codes, using
//! exponential backoff between retry attempts.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Longest error message kept from a response body.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Sends an HTTP request with automatic retry logic for retryable statuses.
///
/// This function wraps a `reqwest::RequestBuilder` with retry logic that:
/// - Detects retryable status codes (429, 502, 503, 504)
/// - Implements exponential backoff (1s, 2s, 4s = 2^attempt)
/// - Respects the `max_retries` parameter (0 disables retries)
/// - Logs retry attempts with `tracing::debug`
/// - Returns `MaxRetriesExceeded` error when retries are exhausted
///
/// Non-success responses that are not retried become [`ClientError::ApiError`]
/// (or [`ClientError::AuthFailed`] for 401).
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                if attempt == 0 {
                    debug!("Request builder cannot be cloned, single attempt only");
                    let response = builder
                        .send()
                        .await
                        .map_err(ClientError::from_send_error)?;
                    return check_status(response).await;
                } else {
                    debug!("Cannot clone request builder for retry");
                    return Err(ClientError::InvalidRequest(
                        "request body cannot be retried".to_string(),
                    ));
                }
            }
        };

        let response = attempt_builder
            .send()
            .await
            .map_err(ClientError::from_send_error)?;
        let status = response.status().as_u16();

        if ClientError::is_retryable_status(status) {
            if attempt < max_retries {
                let backoff_secs = 2u64.pow(attempt as u32);
                debug!(
                    attempt = attempt + 1,
                    max_retries = max_retries + 1,
                    backoff_secs = backoff_secs,
                    status = status,
                    "Retryable status, retrying with exponential backoff"
                );
                tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                continue;
            }
            if max_retries == 0 {
                return check_status(response).await;
            }
            debug!(attempts = attempt + 1, "Max retries exhausted");
            return Err(ClientError::MaxRetriesExceeded {
                attempts: max_retries + 1,
                status,
            });
        }

        if attempt > 0 {
            debug!(attempt = attempt + 1, "Request succeeded after retry");
        }
        return check_status(response).await;
    }

    Err(ClientError::InvalidRequest(
        "retry loop ended without a response".to_string(),
    ))
}

/// Turn a non-success response into a typed error.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let url = response.url().to_string();
    if status.as_u16() == 401 {
        return Err(ClientError::AuthFailed(url));
    }

    // Jenkins explains rejected job operations in X-Error; bodies are HTML pages.
    let header_message = response
        .headers()
        .get("X-Error")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let message = match header_message {
        Some(m) => m,
        None => {
            let body = response.text().await.unwrap_or_default();
            summarize_body(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string())
        }
    };

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Keep plain-text bodies (short, single line); drop HTML pages.
fn summarize_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('<') {
        return None;
    }
    let first_line = trimmed.lines().next().unwrap_or(trimmed);
    Some(first_line.chars().take(MAX_ERROR_BODY_CHARS).collect())
}
