use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_TARGET: &str = "http://shirts4mike.com/shirts.php";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Scrape a product listing page into a dated CSV file.
#[derive(Parser, Debug)]
#[command(name = "product-scraper", version, about, long_about = None)]
pub struct Args {
    /// Listing page whose `.products a` links point at the product pages
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Directory the CSV file is written to
    #[arg(short, long, default_value = "./data")]
    pub data_dir: PathBuf,

    /// Directory holding error.log
    #[arg(short, long, default_value = "./logs")]
    pub log_dir: PathBuf,

    /// User agent sent with every request
    #[arg(short, long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Log progress at info level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub target: String,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub user_agent: String,
    pub timeout: Option<Duration>,
    pub verbose: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            data_dir: PathBuf::from("./data"),
            log_dir: PathBuf::from("./logs"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            verbose: false,
        }
    }
}

impl From<&Args> for ScrapeConfig {
    fn from(args: &Args) -> Self {
        Self {
            target: args.target.clone(),
            data_dir: args.data_dir.clone(),
            log_dir: args.log_dir.clone(),
            user_agent: args.user_agent.clone(),
            timeout: args.timeout.map(Duration::from_secs),
            verbose: args.verbose,
        }
    }
}
