//! Product detail page scraping
//!
//! One [`ProductScraper`] handles one detail page: fetch, extract, and
//! assemble the finished record. The record is built exactly once, from
//! the complete set of extracted fields; no half-populated product is
//! ever visible to a caller.

use crate::record::Product;
use crate::scrape::extract::extract_product_details;
use crate::scrape::fetcher::{fetch_page, FetchOutcome};
use reqwest::Client;

/// Scrapes one product detail page into a [`Product`] record
#[derive(Debug)]
pub struct ProductScraper {
    base_url: String,
    route: String,
    category_name: String,
}

impl ProductScraper {
    /// Creates a scraper bound to one detail page URL and the category it
    /// was discovered under
    ///
    /// # Arguments
    ///
    /// * `base_url` - The site root, used to absolutize the cover image URL
    /// * `route` - The absolute URL of the product detail page
    /// * `category_name` - The category the product was discovered under
    pub fn new(
        base_url: impl Into<String>,
        route: impl Into<String>,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            route: route.into(),
            category_name: category_name.into(),
        }
    }

    /// Fetches and extracts the product record
    ///
    /// Returns `None` on any fetch failure; the failure is logged here
    /// and the caller skips the item. On success the returned record is
    /// complete and immutable:
    ///
    /// - `product_page_url` is the URL that was fetched
    /// - `category` is the caller-supplied category name, never derived
    ///   from the page
    /// - price fields have the leading currency symbol stripped
    /// - `review_rating` falls back to `"0"` when the attribute table
    ///   did not yield one
    pub async fn retrieve_product(&self, client: &Client) -> Option<Product> {
        let body = match fetch_page(client, &self.route).await {
            FetchOutcome::Success { body, .. } => body,
            FetchOutcome::HttpError { status } => {
                tracing::warn!("Product fetch failed for {}: HTTP {}", self.route, status);
                return None;
            }
            FetchOutcome::NetworkError { error } => {
                tracing::warn!("Product fetch failed for {}: {}", self.route, error);
                return None;
            }
        };

        let details = extract_product_details(&body, &self.base_url);

        Some(Product {
            upc: details.attributes.upc,
            product_page_url: self.route.clone(),
            title: details.title,
            price_including_tax: details.attributes.price_including_tax,
            price_excluding_tax: details.attributes.price_excluding_tax,
            number_available: details.attributes.number_available,
            product_description: details.description,
            category: self.category_name.clone(),
            review_rating: details.attributes.review_rating.unwrap_or_else(|| "0".to_string()),
            image_url: details.image_url,
        })
    }
}
