//! Catalog category discovery
//!
//! Fetches the site index page and reads the sidebar category list.

use crate::record::Category;
use crate::scrape::extract::extract_categories;
use crate::scrape::fetcher::{fetch_page, FetchOutcome};
use crate::site::site_url;
use reqwest::Client;

/// Discovers the site's categories from its index page
///
/// Returns the categories in markup order, or an empty list when the
/// index page cannot be fetched. A failed fetch is non-fatal by design:
/// it is logged here and the driver simply has nothing to crawl.
pub async fn discover_categories(client: &Client, base_url: &str) -> Vec<Category> {
    let index_url = site_url(base_url, "index.html");

    match fetch_page(client, &index_url).await {
        FetchOutcome::Success { body, .. } => extract_categories(&body),
        FetchOutcome::HttpError { status } => {
            tracing::warn!("Category discovery failed: HTTP {} for {}", status, index_url);
            Vec::new()
        }
        FetchOutcome::NetworkError { error } => {
            tracing::warn!("Category discovery failed: {} for {}", error, index_url);
            Vec::new()
        }
    }
}
