//! Integration tests for the scrape-and-export pipeline
//!
//! These tests use wiremock to stand in for the catalog site and drive
//! the full cycle end-to-end: index discovery, listing pagination,
//! product scraping, and CSV/image export.

use bookstall::export::{CsvExporter, ExportSink};
use bookstall::record::CSV_COLUMNS;
use bookstall::scrape::{discover_categories, CategoryScraper, Pacer};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CATEGORY_ROUTE: &str = "/catalogue/category/books/poetry_23";

const INDEX_PAGE: &str = r#"<html><body>
    <div class="side_categories">
        <ul><li><a href="index.html">Books</a>
            <ul><li><a href="catalogue/category/books/poetry_23">
                Poetry
            </a></li></ul>
        </li></ul>
    </div>
    </body></html>"#;

fn listing_page(hrefs: &[&str], pager_total: Option<u32>) -> String {
    let cards: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<article class="product_pod"><h3><a href="{}">t</a></h3></article>"#,
                href
            )
        })
        .collect();

    let pager = pager_total
        .map(|total| {
            format!(
                r#"<ul class="pager"><li class="current">Page 1 of {}</li></ul>"#,
                total
            )
        })
        .unwrap_or_default();

    format!("<html><body>{}{}</body></html>", cards, pager)
}

fn detail_page(title: &str, upc: &str) -> String {
    format!(
        r#"<html><body>
        <h1>{}</h1>
        <img src="../../media/{}.jpg"/>
        <div id="product_description"><h2>Product Description</h2></div>
        <p>About {}.</p>
        <table>
            <tr><td>{}</td></tr>
            <tr><td>Books</td></tr>
            <tr><td>£20.00</td></tr>
            <tr><td>£20.00</td></tr>
            <tr><td>£0.00</td></tr>
            <tr><td>In stock (5 available)</td></tr>
            <tr><td>2</td></tr>
        </table>
        </body></html>"#,
        title, upc, title, upc
    )
}

async fn mount_detail(server: &MockServer, slug: &str, title: &str, upc: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/catalogue/{}/index.html", slug)))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(title, upc)))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_pipeline_single_category() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/index.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(INDEX_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CATEGORY_ROUTE))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(
            &[
                "../../../light_1/index.html",
                "../../../velvet_2/index.html",
            ],
            None,
        )))
        .mount(&server)
        .await;
    mount_detail(&server, "light_1", "A Light in the Attic", "upc-1").await;
    mount_detail(&server, "velvet_2", "Tipping the Velvet", "upc-2").await;
    Mock::given(method("GET"))
        .and(path("/media/upc-1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"img1".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/media/upc-2.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"img2".to_vec()))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let pacer = Pacer::none();

    // Discovery finds the single category
    let categories = discover_categories(&client, &server.uri()).await;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].title, "Poetry");

    // Scrape it
    let scraper = CategoryScraper::new(&server.uri(), &categories[0].url, &categories[0].title);
    let records = scraper.get_books(&client, &pacer).await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "A Light in the Attic");
    assert_eq!(records[0].upc, "upc-1");
    assert_eq!(records[0].price_including_tax, "20.00");
    assert_eq!(records[0].category, "Poetry");
    assert_eq!(
        records[0].product_page_url,
        format!("{}/catalogue/light_1/index.html", server.uri())
    );

    // Export it
    let dir = tempfile::tempdir().unwrap();
    let exporter = CsvExporter::new(
        dir.path().join("data"),
        dir.path().join("images"),
        client.clone(),
        pacer.clone(),
    );
    exporter.export(&records, &categories[0].title).await.unwrap();

    let csv = std::fs::read_to_string(dir.path().join("data/Poetry.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next().unwrap(), CSV_COLUMNS.join(","));
    assert_eq!(lines.clone().count(), 2);
    assert!(lines.next().unwrap().starts_with("upc-1,"));

    assert!(dir.path().join("images/a-light-in-the-attic.jpg").exists());
    assert!(dir.path().join("images/tipping-the-velvet.jpg").exists());
}

#[tokio::test]
async fn test_listing_without_pager_fetches_each_card_exactly_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CATEGORY_ROUTE))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(
            &[
                "../../../a_1/index.html",
                "../../../b_2/index.html",
                "../../../c_3/index.html",
            ],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;
    // .expect(1) on each detail mock is the assertion: exactly N product
    // fetches, one per card, verified when the server drops
    mount_detail(&server, "a_1", "A", "upc-a").await;
    mount_detail(&server, "b_2", "B", "upc-b").await;
    mount_detail(&server, "c_3", "C", "upc-c").await;

    let client = reqwest::Client::new();
    let scraper = CategoryScraper::new(&server.uri(), CATEGORY_ROUTE, "Poetry");
    let records = scraper.get_books(&client, &Pacer::none()).await;

    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_pager_drives_page_2_and_3_fetches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CATEGORY_ROUTE))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(
            &["../../../p1_1/index.html"],
            Some(3),
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/page-2.html", CATEGORY_ROUTE)))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(
            &["../../../p2_1/index.html"],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/page-3.html", CATEGORY_ROUTE)))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(
            &["../../../p3_1/index.html"],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;
    mount_detail(&server, "p1_1", "From page 1", "upc-p1").await;
    mount_detail(&server, "p2_1", "From page 2", "upc-p2").await;
    mount_detail(&server, "p3_1", "From page 3", "upc-p3").await;

    let client = reqwest::Client::new();
    let scraper = CategoryScraper::new(&server.uri(), CATEGORY_ROUTE, "Poetry");
    let records = scraper.get_books(&client, &Pacer::none()).await;

    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["From page 1", "From page 2", "From page 3"]);
}

#[tokio::test]
async fn test_failed_index_page_yields_no_categories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.html"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let categories = discover_categories(&client, &server.uri()).await;

    assert!(categories.is_empty());
}

#[tokio::test]
async fn test_pipeline_output_is_idempotent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CATEGORY_ROUTE))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(
            &["../../../light_1/index.html"],
            None,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalogue/light_1/index.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(detail_page("A Light in the Attic", "upc-1")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/media/upc-1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"img".to_vec()))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let pacer = Pacer::none();

    let run = || async {
        let scraper = CategoryScraper::new(&server.uri(), CATEGORY_ROUTE, "Poetry");
        scraper.get_books(&client, &pacer).await
    };

    let first_records = run().await;
    let second_records = run().await;
    assert_eq!(first_records, second_records);

    // Unchanged records produce byte-identical CSV output
    let dir = tempfile::tempdir().unwrap();
    let exporter = CsvExporter::new(
        dir.path().join("data"),
        dir.path().join("images"),
        client.clone(),
        pacer.clone(),
    );
    exporter.export(&first_records, "RunOne").await.unwrap();
    exporter.export(&second_records, "RunTwo").await.unwrap();

    let first = std::fs::read(dir.path().join("data/RunOne.csv")).unwrap();
    let second = std::fs::read(dir.path().join("data/RunTwo.csv")).unwrap();
    assert_eq!(first, second);
}
