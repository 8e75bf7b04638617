//! HTTP retrieval of essay pages
//!
//! One outbound GET per call. The body is returned as text for any HTTP
//! status code; only transport failures and non-text content types are
//! reported as errors.

use crate::error::EssayError;
use crate::types::Page;
use crate::DEFAULT_USER_AGENT;
use bytes::Bytes;
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;
use tracing::{debug, error, warn};

/// Binary content type prefixes; essays are text, so these are rejected
const BINARY_PREFIXES: &[&str] = &[
    "image/",
    "audio/",
    "video/",
    "application/octet-stream",
    "application/pdf",
    "application/zip",
    "application/gzip",
    "font/",
];

/// First-byte timeout (connect + first response byte)
const FIRST_BYTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Body timeout (total)
const BODY_TIMEOUT: Duration = Duration::from_secs(30);

/// Marker appended when the body read hits the timeout
const TRUNCATION_MARKER: &str = "\n\n[..more content timed out...]";

/// Options for a page fetch
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
}

/// Fetch a URL and return the page body plus response metadata
///
/// No status-code branching: a 404 page body is still a body. A slow body
/// yields the bytes read so far with a truncation marker appended.
pub async fn fetch_page(url: &str, options: &FetchOptions) -> Result<Page, EssayError> {
    if url.is_empty() {
        return Err(EssayError::MissingUrl);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(EssayError::InvalidUrlScheme);
    }

    let mut headers = HeaderMap::new();
    let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html, text/plain, */*;q=0.8"),
    );

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .connect_timeout(FIRST_BYTE_TIMEOUT)
        .timeout(FIRST_BYTE_TIMEOUT)
        .build()
        .map_err(EssayError::ClientBuild)?;

    debug!(%url, "fetching essay page");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(EssayError::from_reqwest)?;

    let status_code = response.status().as_u16();

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    if let Some(ref ct) = content_type {
        if is_binary_content_type(ct) {
            warn!(%url, content_type = %ct, "refusing binary content");
            return Err(EssayError::BinaryContent(ct.clone()));
        }
    }

    let (body, truncated) = read_body_with_timeout(response, BODY_TIMEOUT).await;
    let size = body.len() as u64;

    let mut body = String::from_utf8_lossy(&body).to_string();
    if truncated {
        body.push_str(TRUNCATION_MARKER);
    }

    Ok(Page {
        url: url.to_string(),
        status_code,
        content_type,
        size,
        truncated,
        body,
    })
}

/// Check if content type indicates binary content
fn is_binary_content_type(content_type: &str) -> bool {
    let ct_lower = content_type.to_lowercase();
    BINARY_PREFIXES
        .iter()
        .any(|prefix| ct_lower.starts_with(prefix))
}

/// Read response body with timeout, returning partial content if timeout occurs
async fn read_body_with_timeout(response: reqwest::Response, timeout: Duration) -> (Bytes, bool) {
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        let chunk_future = stream.next();
        let timeout_future = tokio::time::sleep_until(deadline);

        tokio::select! {
            chunk = chunk_future => {
                match chunk {
                    Some(Ok(bytes)) => {
                        body.extend_from_slice(&bytes);
                    }
                    Some(Err(e)) => {
                        error!("Error reading body chunk: {}", e);
                        let has_content = !body.is_empty();
                        return (Bytes::from(body), has_content);
                    }
                    None => {
                        // Stream complete
                        return (Bytes::from(body), false);
                    }
                }
            }
            _ = timeout_future => {
                warn!("Body timeout reached, returning partial content");
                return (Bytes::from(body), true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_binary_content_type() {
        assert!(is_binary_content_type("image/png"));
        assert!(is_binary_content_type("audio/mp3"));
        assert!(is_binary_content_type("video/mp4"));
        assert!(is_binary_content_type("application/pdf"));
        assert!(is_binary_content_type("application/octet-stream"));
        assert!(is_binary_content_type("font/woff2"));

        assert!(!is_binary_content_type("text/html"));
        assert!(!is_binary_content_type("text/html; charset=utf-8"));
        assert!(!is_binary_content_type("text/plain"));
        assert!(!is_binary_content_type("application/json"));
    }

    #[tokio::test]
    async fn test_fetch_missing_url() {
        let result = fetch_page("", &FetchOptions::default()).await;
        assert!(matches!(result, Err(EssayError::MissingUrl)));
    }

    #[tokio::test]
    async fn test_fetch_invalid_scheme() {
        let result = fetch_page("ftp://example.com/essay.html", &FetchOptions::default()).await;
        assert!(matches!(result, Err(EssayError::InvalidUrlScheme)));
    }
}
