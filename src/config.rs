use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_QUERY: &str = "restaurants in Chennai";

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Submit Google Maps scraping jobs from the terminal")]
pub struct Config {
    /// Base address of the scraping backend
    #[arg(long, env = "SCRAPER_API_URL")]
    pub api_url: Option<String>,

    /// Query the form starts out with
    #[arg(long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Where to write logs, defaults to the platform data directory
    #[arg(long, env = "MAPSCRAPE_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The configured backend address, `None` when missing or blank.
    pub fn endpoint(&self) -> Option<&str> {
        self.api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Loads `.env` from the working directory or its parents, if there is one.
///
/// A missing file is fine, the address may come from the flag or the
/// environment. Unreadable or malformed files are errors.
pub fn load_dotenv() -> Result<(), dotenvy::Error> {
    ignore_missing(dotenvy::dotenv())
}

fn ignore_missing<T>(result: Result<T, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match result {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err),
    }
}
