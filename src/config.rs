use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for the job portal scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Base URL of the job portal
    #[serde(default = "default_portal_base_url")]
    pub portal_base_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// User-agent string presented by the browser session
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether to run the browser headless
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Fixed browser window size, `WIDTHxHEIGHT`
    #[serde(default = "default_window_size")]
    pub window_size: String,

    /// Maximum number of result pages to walk
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Maximum seconds to wait for a page to render before giving up
    #[serde(default = "default_render_timeout_secs")]
    pub render_timeout_secs: u64,

    /// Polling interval while waiting for a page to render
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Pause before retrying a failed next-page click
    #[serde(default = "default_next_page_retry_pause_ms")]
    pub next_page_retry_pause_ms: u64,
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn next_page_retry_pause(&self) -> Duration {
        Duration::from_millis(self.next_page_retry_pause_ms)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            portal_base_url: default_portal_base_url(),
            webdriver_url: default_webdriver_url(),
            user_agent: default_user_agent(),
            headless: default_headless(),
            window_size: default_window_size(),
            max_pages: default_max_pages(),
            render_timeout_secs: default_render_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            next_page_retry_pause_ms: default_next_page_retry_pause_ms(),
        }
    }
}

/// Default value for portal_base_url
fn default_portal_base_url() -> String {
    "https://www.naukri.com".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for user_agent
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36"
        .to_string()
}

/// Default value for headless
fn default_headless() -> bool {
    true
}

/// Default value for window_size
fn default_window_size() -> String {
    "1920x1080".to_string()
}

/// Default value for max_pages
fn default_max_pages() -> u32 {
    5
}

/// Default value for render_timeout_secs
fn default_render_timeout_secs() -> u64 {
    15
}

/// Default value for poll_interval_ms
fn default_poll_interval_ms() -> u64 {
    500
}

/// Default value for next_page_retry_pause_ms
fn default_next_page_retry_pause_ms() -> u64 {
    1500
}
