//! Configuration module for Bookstall
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use bookstall::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("bookstall.toml")).unwrap();
//! println!("Scraping {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, ScraperConfig, SiteConfig};

// Re-export parser functions
pub use parser::load_config;
