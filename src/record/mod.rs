//! Record types produced by the scrape pipeline
//!
//! A [`Category`] parameterizes one listing crawl; a [`Product`] is the
//! finalized record extracted from one detail page. Products are built
//! once, from a complete set of extracted fields, and never mutated
//! afterwards.

use serde::Serialize;

/// CSV column schema of the export sink, matching the [`Product`] field
/// order exactly
pub const CSV_COLUMNS: [&str; 10] = [
    "upc",
    "product_page_url",
    "title",
    "price_including_tax",
    "price_excluding_tax",
    "number_available",
    "product_description",
    "category",
    "review_rating",
    "image_url",
];

/// A named product grouping with its own paginated listing
///
/// `url` is an absolute-from-root path (e.g. `/catalogue/category/books/travel_2/index.html`),
/// as discovered on the site index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub title: String,
    pub url: String,
}

/// The structured record extracted from one product detail page
///
/// All fields are kept as raw extracted text. Currency and availability
/// formats vary on the source site, so values are passed through
/// uninterpreted apart from the leading currency-symbol strip applied to
/// the two price fields. The field declaration order is the CSV column
/// order; the serde derive is what gives the export sink its header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub upc: String,
    pub product_page_url: String,
    pub title: String,
    pub price_including_tax: String,
    pub price_excluding_tax: String,
    pub number_available: String,
    pub product_description: String,
    pub category: String,
    pub review_rating: String,
    pub image_url: String,
}
