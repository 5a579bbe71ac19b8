//! Status-code classification for registry responses.
//!
//! Maps 404/400/429/5xx to their own [`LookupError`] kinds so the lookup
//! entry point only deals with decoding successful bodies.

use crate::error::LookupError;

/// Fallback when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LookupError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    tracing::debug!(status = status.as_u16(), "registry returned error status");

    match status.as_u16() {
        404 => Err(LookupError::NotFound),
        400 => Err(LookupError::BadRequest {
            message: resp.text().await.unwrap_or_default(),
        }),
        429 => Err(LookupError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        }),
        code if code >= 500 => Err(LookupError::ServerError { status: code }),
        code => Err(LookupError::Api {
            status: code,
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
