//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`GatewayError::Api`]) so the client stays focused
//! on request construction and reply mapping.

use crate::error::GatewayError;

/// Longest error body kept in [`GatewayError::Api`].
const MAX_ERROR_BODY: usize = 512;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`GatewayError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`GatewayError::Api`] with the status code and
///   the Google error message (or the raw body if it is not the usual
///   `{"error": {"message": ...}}` envelope).
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(GatewayError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(GatewayError::Api {
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

fn error_message(body: &str) -> String {
    let from_envelope = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string));
    let message = from_envelope.unwrap_or_else(|| body.trim().to_string());
    if message.chars().count() > MAX_ERROR_BODY {
        let mut cut: String = message.chars().take(MAX_ERROR_BODY).collect();
        cut.push('…');
        cut
    } else {
        message
    }
}
