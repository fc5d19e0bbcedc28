use serde::Deserialize;

/// Main configuration structure for Bookstall
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub scraper: ScraperConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Root URL of the catalog site (no trailing path)
    #[serde(rename = "base-url")]
    pub base_url: String,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Fixed delay applied after every product-detail fetch attempt (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// User-agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives one CSV file per category
    #[serde(rename = "data-dir")]
    pub data_dir: String,

    /// Directory that receives downloaded cover images
    #[serde(rename = "images-dir")]
    pub images_dir: String,
}

fn default_user_agent() -> String {
    concat!("bookstall/", env!("CARGO_PKG_VERSION")).to_string()
}
