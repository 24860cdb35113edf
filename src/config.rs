use std::time::Duration;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_TARGET_URL: &str = "https://ilot.co/collections/nueva-coleccion";
pub const DEFAULT_SITE_ORIGIN: &str = "https://ilot.co";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where to scrape from and how to ask for it.
#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Collection page to scrape
    #[arg(long = "url", env = "CRAWLER_TARGET_URL", default_value = DEFAULT_TARGET_URL, global = true)]
    pub target_url: String,

    /// Origin prepended to site-relative links and images
    #[arg(long = "origin", env = "CRAWLER_SITE_ORIGIN", default_value = DEFAULT_SITE_ORIGIN, global = true)]
    pub site_origin: String,

    /// User-Agent sent with the page request
    #[arg(long, env = "CRAWLER_USER_AGENT", default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Request timeout in seconds
    #[arg(long, env = "CRAWLER_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target_url: DEFAULT_TARGET_URL.to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Listen address for the HTTP server. The host may be an IP or a name;
/// it is resolved when the server binds.
#[derive(Args, Debug, Clone)]
pub struct BindConfig {
    #[arg(long, env = "CRAWLER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,
}

#[derive(Parser)]
struct BindOnly {
    #[command(flatten)]
    bind: BindConfig,
}

impl BindConfig {
    /// Bind settings from `CRAWLER_HOST` and `PORT` alone, for a bare invocation.
    pub fn from_env() -> Result<Self, clap::Error> {
        BindOnly::try_parse_from(["ilot_product_crawler"]).map(|b| b.bind)
    }
}

#[derive(Parser, Debug)]
#[command(name = "ilot_product_crawler", about = "Product listing crawler for ilot.co")]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve /productos and /excel over HTTP (default)
    Serve {
        #[command(flatten)]
        bind: BindConfig,
    },
    /// Scrape once and write the listing as a spreadsheet
    Export {
        #[arg(short, long, default_value = crate::export::XLSX_FILENAME)]
        out: String,
    },
}
