pub mod browser;
pub mod config;
pub mod error;
pub mod export;
pub mod parsers;
pub mod record;
pub mod scrape;
pub mod session;
pub mod shell;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use record::JobListing;

/// One search request: what to look for and how many rows to return
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Free-text job role, e.g. "machine learning engineer"
    pub role: String,
    /// Free-text location, e.g. "bangalore"
    pub location: String,
    /// Maximum number of listings to return
    pub max_jobs: u32,
}

/// Builder for running one job search against the portal
pub struct JobSearch {
    query: SearchQuery,
    config: ScraperConfig,
}

impl JobSearch {
    /// Create a new search for the given role and location
    pub fn new(role: &str, location: &str) -> Self {
        Self {
            query: SearchQuery {
                role: role.to_string(),
                location: location.to_string(),
                max_jobs: 10,
            },
            config: ScraperConfig::default(),
        }
    }

    /// Set the maximum number of listings to return
    pub fn with_limit(mut self, max_jobs: u32) -> Self {
        self.query.max_jobs = max_jobs;
        self
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = ScraperConfig::from_file(path)?;
        Ok(self)
    }

    /// Connect a browser session, run the extraction loop, and close the
    /// session whether or not the loop succeeded.
    pub async fn run(self) -> Result<Vec<JobListing>, ScrapeError> {
        let mut config = self.config;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        let mut session = browser::BrowserSession::connect(&config).await?;
        let outcome = scrape::run_extraction(&mut session, &self.query, &config).await;

        if let Err(e) = session.close().await {
            ::log::warn!("Failed to close browser session: {}", e);
        }

        outcome
    }
}
