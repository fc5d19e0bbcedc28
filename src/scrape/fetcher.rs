//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with the configured user agent
//! - GET requests for listing and detail pages
//! - GET requests for raw image bytes
//!
//! There are no retries anywhere. Every failure is reported to the caller
//! as an outcome value and contained at the smallest possible scope.

use reqwest::Client;
use std::time::Duration;

/// Result of fetching one page
///
/// Failures are ordinary values here, not errors: the pipeline treats a
/// failed fetch as "skip this item" and never aborts sibling work over it.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched the page
    Success {
        /// HTTP status code
        status: u16,
        /// Page body content
        body: String,
    },

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status: u16,
    },

    /// Transport-level failure (connection refused, timeout, bad body)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchOutcome {
    /// Returns true only for conventional success status codes
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}

/// Builds the HTTP client shared by every fetch in a run
///
/// # Arguments
///
/// * `user_agent` - The user-agent string to send with every request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body as text
///
/// Redirects follow the transport default. Any non-success status or
/// transport error becomes a non-success [`FetchOutcome`]; nothing is
/// retried.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return FetchOutcome::HttpError {
                    status: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success {
                    status: status.as_u16(),
                    body,
                },
                Err(e) => FetchOutcome::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => FetchOutcome::NetworkError {
            error: e.to_string(),
        },
    }
}

/// Fetches a URL and returns its raw bytes, used for cover images
///
/// Returns `None` on any non-success status or transport error; the
/// caller decides whether that is worth logging.
pub async fn fetch_bytes(client: &Client, url: &str) -> Option<Vec<u8>> {
    match client.get(url).send().await {
        Ok(response) if response.status().is_success() => {
            response.bytes().await.ok().map(|b| b.to_vec())
        }
        _ => None,
    }
}
