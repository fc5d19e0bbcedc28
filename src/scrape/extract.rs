//! Field extraction from parsed catalog pages
//!
//! Every CSS selector the pipeline depends on lives here: the sidebar
//! category list on the index page, the product cards and pager on
//! listing pages, and the heading, description, image, and attribute
//! table on detail pages.
//!
//! A missing element is never an error. Absent optional fields come back
//! defaulted (empty string, `None`) and the crawl continues.

use crate::record::Category;
use crate::site::{catalogue_path, category_path, site_url, strip_parent_markers};
use scraper::{Html, Selector};

/// Column order of the product attribute table, top to bottom.
///
/// This is a fixed contract of the source site (layout as of 2026-08):
/// extraction is strictly positional, not keyed by row label. `type` and
/// `tax` are read and discarded because they are not record fields.
const ATTRIBUTE_COLUMNS: [&str; 7] = [
    "upc",
    "type",
    "price_excluding_tax",
    "price_including_tax",
    "tax",
    "number_available",
    "review_rating",
];

/// Values read from the positional attribute table of a detail page
#[derive(Debug, Clone, Default)]
pub struct AttributeRow {
    pub upc: String,
    pub price_excluding_tax: String,
    pub price_including_tax: String,
    pub number_available: String,
    /// `None` when the table did not reach the rating row
    pub review_rating: Option<String>,
}

/// Everything extracted from one product detail page
///
/// This is the partial record handed to the product scraper, which
/// combines it with caller context (page URL, category name) to build
/// the finished [`crate::record::Product`] in one step.
#[derive(Debug, Clone, Default)]
pub struct ProductDetails {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub attributes: AttributeRow,
}

/// Extracts the category list from the site index page
///
/// Selects every anchor in the sidebar navigation region, in markup
/// order. Titles are trimmed of surrounding whitespace and newlines;
/// hrefs are rewritten to absolute-from-root paths.
pub fn extract_categories(html: &str) -> Vec<Category> {
    let document = Html::parse_document(html);
    let mut categories = Vec::new();

    if let Ok(selector) = Selector::parse(".side_categories ul li ul li a") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                let title = element.text().collect::<String>().trim().to_string();
                categories.push(Category {
                    title,
                    url: category_path(href),
                });
            }
        }
    }

    categories
}

/// Extracts product detail links from one listing page
///
/// Selects anchors inside product-card title elements, in page order.
/// Each href is relative to the listing page depth and is rewritten into
/// a canonical `/catalogue/…` path. Duplicates are kept; the result
/// mirrors the listing exactly.
pub fn extract_product_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse(".product_pod h3 a") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(catalogue_path(href));
            }
        }
    }

    links
}

/// Reads the last page number from a listing's pager control
///
/// The current-page indicator reads like `"Page 1 of 3"`; the last
/// whitespace-delimited token is the page count. Returns `None` when the
/// pager is absent, empty, or malformed — all of which mean "no
/// additional pages", never an error.
pub fn extract_last_page(html: &str) -> Option<u32> {
    let document = Html::parse_document(html);

    let selector = Selector::parse(".pager .current").ok()?;
    let indicator = document.select(&selector).next()?;
    let text = indicator.text().collect::<String>();

    text.split_whitespace().last()?.parse().ok()
}

/// Extracts all record fields from one product detail page
///
/// # Arguments
///
/// * `html` - The detail page body
/// * `base_url` - The site root, used to absolutize the cover image URL
pub fn extract_product_details(html: &str, base_url: &str) -> ProductDetails {
    let document = Html::parse_document(html);

    ProductDetails {
        title: extract_title(&document),
        description: extract_description(&document),
        image_url: extract_image_url(&document, base_url),
        attributes: extract_attribute_row(&document),
    }
}

/// Extracts the page's single primary heading
fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("h1") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default()
}

/// Extracts the paragraph following the description anchor, if present
fn extract_description(document: &Html) -> String {
    let Ok(selector) = Selector::parse("#product_description + p") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default()
}

/// Extracts the primary image's src, rewritten to an absolute site URL
fn extract_image_url(document: &Html, base_url: &str) -> String {
    let Ok(selector) = Selector::parse("img") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("src"))
        .map(|src| site_url(base_url, strip_parent_markers(src)))
        .unwrap_or_default()
}

/// Reads the attribute table row-by-row in table order
///
/// Cells are matched positionally against [`ATTRIBUTE_COLUMNS`]. A table
/// with a different cell count is logged and read as far as the shorter
/// of the two; missing cells leave their fields defaulted.
fn extract_attribute_row(document: &Html) -> AttributeRow {
    let mut row = AttributeRow::default();

    let Ok(selector) = Selector::parse("td") else {
        return row;
    };

    let cells: Vec<String> = document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect();

    if cells.len() != ATTRIBUTE_COLUMNS.len() {
        tracing::warn!(
            "Attribute table has {} cells, expected {}; reading what is there",
            cells.len(),
            ATTRIBUTE_COLUMNS.len()
        );
    }

    for (column, value) in ATTRIBUTE_COLUMNS.iter().zip(cells) {
        match *column {
            "upc" => row.upc = value,
            "price_excluding_tax" => row.price_excluding_tax = strip_currency(&value),
            "price_including_tax" => row.price_including_tax = strip_currency(&value),
            "number_available" => row.number_available = value,
            "review_rating" => row.review_rating = Some(value),
            // "type" and "tax" are table rows but not record fields
            _ => {}
        }
    }

    row
}

/// Removes the source site's leading currency symbol from a price cell
///
/// This is a fixed prefix match on `£`. If the site ever changes its
/// currency symbol or encoding the symbol passes through untouched; the
/// record keeps raw text either way, so no value is lost.
fn strip_currency(value: &str) -> String {
    value.strip_prefix('£').unwrap_or(value).to_string()
}
