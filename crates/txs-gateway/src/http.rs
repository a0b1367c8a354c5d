//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks so the client methods stay focused on
//! request construction and response mapping:
//! - 401/403 → [`GatewayError::Unauthorized`]
//! - 429 → [`GatewayError::RateLimited`] (honors `Retry-After`, falls back to 60 s)
//! - other non-success → [`GatewayError::Api`] with status and body

use reqwest::StatusCode;

use crate::error::GatewayError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Redirects (3xx) count as
/// success because job polling reads their `Location` header.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, GatewayError> {
    let status = resp.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(GatewayError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(GatewayError::Unauthorized(format!(
            "{status}: {}",
            resp.text().await.unwrap_or_default()
        )));
    }
    if !(status.is_success() || status.is_redirection()) {
        return Err(GatewayError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
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

/// Read the `Location` header of a redirect.
pub fn location(resp: &reqwest::Response) -> Option<String> {
    resp.headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body("")
                .unwrap(),
        )
    }

    fn mock_response_with_header(status: u16, name: &str, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header(name, value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_header(429, "Retry-After", "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_header(429, "Retry-After", "soon");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn location_reads_redirect_target() {
        let resp = mock_response_with_header(303, "Location", "https://cdn.example/file");
        assert_eq!(location(&resp).as_deref(), Some("https://cdn.example/file"));
        assert!(location(&mock_response(200)).is_none());
    }

    #[tokio::test]
    async fn check_response_rate_limited_default() {
        let err = check_response(mock_response(429)).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        let err = check_response(mock_response(401)).await.unwrap_err();
        assert!(matches!(err, GatewayError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let err = check_response(mock_response(404)).await.unwrap_err();
        assert!(matches!(err, GatewayError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn check_response_passes_success_and_redirect() {
        assert!(check_response(mock_response(200)).await.is_ok());
        assert!(check_response(mock_response(303)).await.is_ok());
    }
}
