use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use extraction::{HACKER_NEWS_URL, JOBS_URL};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jobs_url: String,
    pub hacker_news_url: String,
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5002,
            jobs_url: JOBS_URL.to_string(),
            hacker_news_url: HACKER_NEWS_URL.to_string(),
            fetch_timeout: extraction::fetchers::DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jobs_url: env::var("JOBS_URL").unwrap_or(defaults.jobs_url),
            hacker_news_url: env::var("HACKER_NEWS_URL").unwrap_or(defaults.hacker_news_url),
            fetch_timeout: match env::var("FETCH_TIMEOUT_SECS") {
                Ok(secs) => Duration::from_secs(
                    secs.parse()
                        .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
                ),
                Err(_) => defaults.fetch_timeout,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5002);
        assert_eq!(config.jobs_url, "https://realpython.github.io/fake-jobs/");
        assert_eq!(config.hacker_news_url, "https://news.ycombinator.com");
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    }
}
