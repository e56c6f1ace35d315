//! Scrapes a product listing page and every product page it links to,
//! then writes one CSV row per product into a dated file.

pub mod archiver;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod reporter;

use std::path::PathBuf;

use chrono::Local;
use futures::future::try_join_all;

use crate::config::ScrapeConfig;
use crate::error::{ErrorKind, Result};
use crate::fetcher::Fetcher;
use crate::models::ProductRecord;

#[derive(Debug, Clone)]
pub struct Output {
    pub path: PathBuf,
    pub products: usize,
}

/// Runs the whole scrape. Nothing is written unless every product page was
/// fetched and extracted.
pub async fn run(config: &ScrapeConfig) -> Result<Output> {
    let fetcher = Fetcher::new(config)?;

    let listing = fetcher.fetch_page(&config.target).await.map_err(|e| {
        e.relabel(
            ErrorKind::Request,
            format!("Cannot connect with {}", config.target),
        )
    })?;
    archiver::ensure_dir(&config.data_dir)?;

    let links = parser::discover_links(&listing)?;
    tracing::info!(target_url = %config.target, products = links.len(), "found product links");

    let records = scrape_products(&fetcher, &links).await?;

    let path = archiver::write_csv(&config.data_dir, Local::now().date_naive(), &records)?;
    Ok(Output {
        path,
        products: records.len(),
    })
}

/// Fetches every link at once. The first failure drops the remaining
/// requests; results keep the order of `links`.
pub async fn scrape_products(fetcher: &Fetcher, links: &[String]) -> Result<Vec<ProductRecord>> {
    try_join_all(links.iter().map(|link| async move {
        let page = fetcher.fetch_page(link).await?;
        parser::extract_product(&page, Local::now())
    }))
    .await
}
