//! URL and path canonicalization for the catalog site
//!
//! The source site links between pages with relative hrefs (`../../foo`),
//! root-relative paths, and bare file names depending on where the link
//! appears. This module owns the rewrite rules that turn each of those
//! into the canonical form the rest of the pipeline expects.

/// Strips leading `../` relative-parent markers from an href
///
/// Listing-page product links and detail-page image srcs are relative to
/// their own page depth (`../../../some-title_981/index.html`). The
/// markers carry no information once the target path is rewritten against
/// a known root, so they are dropped wholesale.
pub fn strip_parent_markers(href: &str) -> &str {
    let mut rest = href;
    while let Some(stripped) = rest.strip_prefix("../") {
        rest = stripped;
    }
    rest
}

/// Rewrites a listing-page product href into a canonical catalog path
///
/// # Example
///
/// ```
/// use bookstall::site::catalogue_path;
///
/// let path = catalogue_path("../../../its-only-the-himalayas_981/index.html");
/// assert_eq!(path, "/catalogue/its-only-the-himalayas_981/index.html");
/// ```
pub fn catalogue_path(href: &str) -> String {
    format!("/catalogue/{}", strip_parent_markers(href))
}

/// Rewrites a sidebar category href into an absolute-from-root path
pub fn category_path(href: &str) -> String {
    format!("/{}", href)
}

/// Builds the URL of page `index` of a category listing
///
/// Page 1 is the category route itself; further pages live at
/// `{route}/page-{index}.html`.
pub fn listing_page_url(route: &str, index: u32) -> String {
    format!("{}/page-{}.html", route, index)
}

/// Joins a site base URL and a path into one absolute URL
///
/// Tolerates a trailing slash on the base and a leading slash on the
/// path without producing a doubled separator.
pub fn site_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
