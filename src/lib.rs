//! Scraper for the ilot.co "nueva colección" listing.
//!
//! Fetches one collection page, pulls name/URL/price/image out of every
//! product block, and serves the result as JSON or as an `.xlsx` download.

pub mod config;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod server;

use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::models::Product;

/// One fetch followed by one parse. Nothing is cached between calls.
pub async fn scrape(fetcher: &Fetcher, site_origin: &str) -> Result<Vec<Product>> {
    let html = fetcher.fetch_html().await?;
    parser::parse_products(&html, site_origin)
}
