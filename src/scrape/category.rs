//! Category listing crawl and product fan-out
//!
//! A [`CategoryScraper`] walks one category: it paginates the listing to
//! collect product links in discovery order, then drives a
//! [`ProductScraper`] over each link. Failures stay local — a dead
//! listing page loses that page's links, a dead product loses that
//! record, and everything else proceeds.

use crate::record::Product;
use crate::scrape::extract::{extract_last_page, extract_product_links};
use crate::scrape::fetcher::{fetch_page, FetchOutcome};
use crate::scrape::pacing::Pacer;
use crate::scrape::product::ProductScraper;
use crate::site::{listing_page_url, site_url};
use reqwest::Client;

/// Scrapes every product of one category, in listing order
#[derive(Debug)]
pub struct CategoryScraper {
    base_url: String,
    route: String,
    category_name: String,
}

impl CategoryScraper {
    /// Creates a scraper for one category
    ///
    /// # Arguments
    ///
    /// * `base_url` - The site root
    /// * `category_url` - The category's absolute-from-root listing path
    /// * `category_name` - The category title, stamped onto every record
    pub fn new(
        base_url: impl Into<String>,
        category_url: &str,
        category_name: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        let route = site_url(&base_url, category_url);
        Self {
            base_url,
            route,
            category_name: category_name.into(),
        }
    }

    /// Crawls the category and returns its successfully scraped products
    ///
    /// The result order matches link discovery order (page, then position
    /// on page). The sequence may be shorter than the number of links:
    /// failed product fetches are logged and skipped, never retried. The
    /// pacer delay runs after every product attempt, success or failure.
    pub async fn get_books(&self, client: &Client, pacer: &Pacer) -> Vec<Product> {
        tracing::info!("Scraping category {}...", self.category_name);

        let links = self.collect_links(client).await;
        if links.is_empty() {
            return Vec::new();
        }

        let mut products = Vec::new();
        for link in &links {
            let product_url = site_url(&self.base_url, link);
            tracing::info!("Scraping product {}", product_url);

            let scraper =
                ProductScraper::new(&self.base_url, product_url, &self.category_name);
            match scraper.retrieve_product(client).await {
                Some(product) => products.push(product),
                None => tracing::warn!("Skipping product {}", link),
            }

            pacer.pause().await;
        }

        products
    }

    /// Collects product links across every listing page of the category
    ///
    /// Page 1 failing fails the whole category (logged, empty result).
    /// Page 2 onward fail individually: a dead page is skipped and the
    /// remaining pages are still fetched.
    async fn collect_links(&self, client: &Client) -> Vec<String> {
        let first_page = match fetch_page(client, &self.route).await {
            FetchOutcome::Success { body, .. } => body,
            FetchOutcome::HttpError { status } => {
                tracing::error!(
                    "Scraping category {} failed: HTTP {} for {}",
                    self.category_name,
                    status,
                    self.route
                );
                return Vec::new();
            }
            FetchOutcome::NetworkError { error } => {
                tracing::error!(
                    "Scraping category {} failed: {} for {}",
                    self.category_name,
                    error,
                    self.route
                );
                return Vec::new();
            }
        };

        let mut links = extract_product_links(&first_page);

        // An absent or unreadable pager means a single-page listing
        let Some(last_page) = extract_last_page(&first_page) else {
            return links;
        };

        for index in 2..=last_page {
            let page_url = listing_page_url(&self.route, index);
            match fetch_page(client, &page_url).await {
                FetchOutcome::Success { body, .. } => {
                    links.extend(extract_product_links(&body));
                }
                outcome => {
                    tracing::warn!(
                        "Skipping listing page {} of {}: {:?}",
                        index,
                        self.category_name,
                        outcome
                    );
                }
            }
        }

        links
    }
}
