use std::io;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use product_scraper::archiver;
use product_scraper::config::{Args, ScrapeConfig};
use product_scraper::reporter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = ScrapeConfig::from(&Args::parse());
    init_tracing(config.verbose);

    match scrape(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let line = reporter::report(&e, Local::now(), &mut io::stdout(), &mut io::stderr())
                .unwrap_or_else(|_| e.to_string());
            reporter::append_log(&config.log_dir, &line);
            ExitCode::FAILURE
        }
    }
}

async fn scrape(config: &ScrapeConfig) -> Result<()> {
    for dir in [&config.data_dir, &config.log_dir] {
        archiver::ensure_dir(dir)?;
    }

    let output = product_scraper::run(config).await?;
    println!(
        "Saved {} products to {}",
        output.products,
        output.path.display()
    );
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
