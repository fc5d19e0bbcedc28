//! Cover image download and filename slugification

use crate::scrape::{fetch_bytes, Pacer};
use reqwest::Client;
use std::path::Path;

/// Punctuation stripped from titles before they become filenames.
///
/// Hyphens survive on purpose; spaces are converted to hyphens rather
/// than stripped.
const INVALID_TITLE_CHARS: [char; 24] = [
    '.', ':', '!', '?', ',', '/', ';', '\n', '&', '*', '#', '%', '@', '\'', '\\', '`', '|', '"',
    '{', '}', '<', '>', '$', '+',
];

/// Derives a filesystem-safe slug from a product title
///
/// Punctuation is stripped, spaces become hyphens, and the result is
/// lowercased.
///
/// # Example
///
/// ```
/// use bookstall::export::slugify_title;
///
/// assert_eq!(
///     slugify_title("It's Only the Himalayas!"),
///     "its-only-the-himalayas"
/// );
/// ```
pub fn slugify_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !INVALID_TITLE_CHARS.contains(c))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Picks the file extension for a downloaded cover
///
/// Taken from the image URL's final path segment, defaulting to `.jpg`
/// when the segment carries no extension.
pub fn image_extension(image_url: &str) -> String {
    let file_name = image_url.rsplit('/').next().unwrap_or(image_url);

    match file_name.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < file_name.len() => file_name[pos..].to_string(),
        _ => ".jpg".to_string(),
    }
}

/// Downloads one cover image into the image store
///
/// The file is named `{slug(title)}{ext}`. Every failure mode — an
/// uncreatable store directory, a failed download, an unwritable file —
/// is logged and reported as `false`; cover downloads never fail an
/// export.
pub async fn download_cover(
    client: &Client,
    pacer: &Pacer,
    images_dir: &Path,
    title: &str,
    image_url: &str,
) -> bool {
    if let Err(e) = std::fs::create_dir_all(images_dir) {
        tracing::warn!("Cannot create image store {}: {}", images_dir.display(), e);
        return false;
    }

    pacer.pause().await;

    let Some(bytes) = fetch_bytes(client, image_url).await else {
        tracing::warn!("Cover download failed for '{}' from {}", title, image_url);
        return false;
    };

    let file_name = format!("{}{}", slugify_title(title), image_extension(image_url));
    let file_path = images_dir.join(&file_name);

    match std::fs::write(&file_path, bytes) {
        Ok(()) => {
            tracing::info!("Cover for '{}' saved as {}", title, file_name);
            true
        }
        Err(e) => {
            tracing::warn!("Cannot write cover {}: {}", file_path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_spaces_and_case() {
        assert_eq!(slugify_title("A Light in the Attic"), "a-light-in-the-attic");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(
            slugify_title("It's Only the Himalayas!"),
            "its-only-the-himalayas"
        );
        assert_eq!(slugify_title("Olio #2: Poems, etc."), "olio-2-poems-etc");
    }

    #[test]
    fn test_slugify_keeps_hyphens_and_digits() {
        assert_eq!(slugify_title("Catch-22"), "catch-22");
    }

    #[test]
    fn test_image_extension_from_url() {
        assert_eq!(
            image_extension("https://example.com/media/cache/fe/72/cover.jpg"),
            ".jpg"
        );
        assert_eq!(image_extension("https://example.com/a/b/c.PNG"), ".PNG");
    }

    #[test]
    fn test_image_extension_defaults_to_jpg() {
        assert_eq!(image_extension("https://example.com/media/cover"), ".jpg");
        assert_eq!(image_extension(""), ".jpg");
    }

    #[tokio::test]
    async fn test_download_cover_writes_slugged_file() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/media/x.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"imagebytes".to_vec()))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let client = reqwest::Client::new();
        let url = format!("{}/media/x.jpg", server.uri());

        let ok = download_cover(
            &client,
            &Pacer::none(),
            dir.path(),
            "A Light in the Attic",
            &url,
        )
        .await;

        assert!(ok);
        let saved = dir.path().join("a-light-in-the-attic.jpg");
        assert_eq!(std::fs::read(saved).unwrap(), b"imagebytes");
    }

    #[tokio::test]
    async fn test_download_cover_failure_is_contained() {
        let server = wiremock::MockServer::start().await;
        // No mocks mounted: the image request gets a 404

        let dir = tempfile::tempdir().unwrap();
        let client = reqwest::Client::new();
        let url = format!("{}/media/missing.jpg", server.uri());

        let ok = download_cover(&client, &Pacer::none(), dir.path(), "Missing", &url).await;

        assert!(!ok);
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }
}
