//! Scrape module: the crawl and extraction pipeline
//!
//! This module contains the core scraping logic:
//! - HTTP fetching with failure-as-outcome semantics
//! - CSS-selector field extraction from index, listing, and detail pages
//! - Listing pagination and per-category product fan-out
//! - Fixed-delay request pacing
//!
//! Data flows strictly downward: [`discover_categories`] yields the
//! categories, a [`CategoryScraper`] enumerates one category's product
//! links and drives a [`ProductScraper`] per link, and the finished
//! records go to the export sink.

mod category;
mod discovery;
mod extract;
mod fetcher;
mod pacing;
mod product;

pub use category::CategoryScraper;
pub use discovery::discover_categories;
pub use extract::{
    extract_categories, extract_last_page, extract_product_details, extract_product_links,
    AttributeRow, ProductDetails,
};
pub use fetcher::{build_http_client, fetch_bytes, fetch_page, FetchOutcome};
pub use pacing::Pacer;
pub use product::ProductScraper;
