use crate::config::ScraperConfig;
use crate::error::{ScrapeError, SkipReason};
use crate::parsers;
use crate::record::{DetailFields, ListingCard};
use crate::session::PortalSession;
use async_trait::async_trait;
use fantoccini::error::CmdError;
use fantoccini::wd::{Capabilities, WindowHandle};
use fantoccini::{Client, ClientBuilder, Locator};

/// Well-known local WebDriver ports tried when the configured URL is down
const FALLBACK_WEBDRIVER_URLS: [&str; 3] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4444", // Selenium/geckodriver default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Live WebDriver-backed portal session.
///
/// Owns one browser with a primary listing tab; detail pages open in a
/// transient second tab and focus always returns to the primary tab.
pub struct BrowserSession {
    client: Client,
    primary: WindowHandle,
    config: ScraperConfig,
}

impl BrowserSession {
    /// Connect to a WebDriver server and open the browser session
    pub async fn connect(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let caps = chrome_capabilities(config);
        let mut tried = vec![config.webdriver_url.clone()];

        match Self::try_connect(&config.webdriver_url, &caps).await {
            Ok(client) => return Self::with_client(client, config.clone()).await,
            Err(e) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    config.webdriver_url,
                    e
                );
            }
        }

        for url in FALLBACK_WEBDRIVER_URLS {
            if url == config.webdriver_url {
                continue;
            }
            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = Self::try_connect(url, &caps).await {
                return Self::with_client(client, config.clone()).await;
            }
            tried.push(url.to_string());
        }

        ::log::error!(
            "No WebDriver server reachable; start one or set the WEBDRIVER_URL environment variable"
        );
        Err(ScrapeError::Connect {
            tried: tried.join(", "),
        })
    }

    async fn try_connect(
        webdriver_url: &str,
        caps: &Capabilities,
    ) -> Result<Client, fantoccini::error::NewSessionError> {
        ClientBuilder::native()
            .capabilities(caps.clone())
            .connect(webdriver_url)
            .await
    }

    async fn with_client(client: Client, config: ScraperConfig) -> Result<Self, ScrapeError> {
        let primary = client.window().await?;
        ::log::debug!("Browser session established");
        Ok(Self {
            client,
            primary,
            config,
        })
    }

    /// Close the browser session; called unconditionally after a scrape
    pub async fn close(self) -> Result<(), CmdError> {
        self.client.close().await
    }

    /// Poll for an element until it appears or the render timeout elapses
    async fn wait_for(&self, css: &str) -> Result<(), CmdError> {
        self.client
            .wait()
            .at_most(self.config.render_timeout())
            .every(self.config.poll_interval())
            .for_element(Locator::Css(css))
            .await
            .map(|_| ())
    }

    async fn detail_in_current_tab(&mut self, url: &str) -> Result<DetailFields, SkipReason> {
        self.client
            .goto(url)
            .await
            .map_err(|e| SkipReason::DetailNavigation(e.to_string()))?;

        match self.wait_for(parsers::detail::HEADER_SELECTOR).await {
            Ok(()) => {}
            Err(CmdError::WaitTimeout) => {
                // Header absent takes the per-field sentinel path, not an
                // item failure
                ::log::debug!("Detail header did not render for {}", url);
            }
            Err(e) => return Err(SkipReason::DetailNavigation(e.to_string())),
        }

        let html = self
            .client
            .source()
            .await
            .map_err(|e| SkipReason::DetailNavigation(e.to_string()))?;
        Ok(parsers::detail::parse_detail_page(&html))
    }
}

#[async_trait]
impl PortalSession for BrowserSession {
    async fn open_search(&mut self, role: &str, location: &str) -> Result<(), ScrapeError> {
        let url = search_url(&self.config.portal_base_url, role, location);
        ::log::info!("Opening search: {}", url);
        self.client.goto(&url).await?;

        match self.wait_for(parsers::listing::CARD_SELECTOR).await {
            Ok(()) => Ok(()),
            Err(CmdError::WaitTimeout) => Err(ScrapeError::RenderTimeout {
                url,
                timeout_secs: self.config.render_timeout_secs,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn listing_cards(
        &mut self,
    ) -> Result<Vec<Result<ListingCard, SkipReason>>, ScrapeError> {
        let html = self.client.source().await?;
        Ok(parsers::listing::parse_listing_page(
            &html,
            &self.config.portal_base_url,
        ))
    }

    async fn fetch_detail(&mut self, detail_url: &str) -> Result<DetailFields, SkipReason> {
        let tab = self
            .client
            .new_window(true)
            .await
            .map_err(|e| SkipReason::DetailNavigation(e.to_string()))?;
        self.client
            .switch_to_window(tab.handle)
            .await
            .map_err(|e| SkipReason::DetailNavigation(e.to_string()))?;

        let outcome = self.detail_in_current_tab(detail_url).await;

        // The tab is closed and focus returned whether or not the fetch
        // succeeded
        if let Err(e) = self.client.close_window().await {
            ::log::warn!("Failed to close detail tab: {}", e);
        }
        if let Err(e) = self.client.switch_to_window(self.primary.clone()).await {
            return Err(SkipReason::DetailNavigation(e.to_string()));
        }

        outcome
    }

    async fn next_page(&mut self, page: u32) -> Result<bool, ScrapeError> {
        let xpath = format!("//a[text()='{}']", page);
        let control = match self.client.find(Locator::XPath(&xpath)).await {
            Ok(el) => el,
            Err(e) if e.is_no_such_element() => {
                ::log::debug!("No page {} control on the current page", page);
                return Ok(false);
            }
            Err(e) => {
                ::log::warn!("Locating the page {} control failed: {}", page, e);
                return Ok(false);
            }
        };

        if let Err(e) = control.click().await {
            ::log::warn!("Clicking the page {} control failed: {}", page, e);
            return Ok(false);
        }

        match self.wait_for(parsers::listing::CARD_SELECTOR).await {
            Ok(()) => Ok(true),
            Err(CmdError::WaitTimeout) => {
                ::log::warn!("Page {} did not render within the timeout", page);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Build the search URL from the portal base, role and location.
///
/// Spaces become `%20` so the terms survive both the path segment and
/// the query string, matching the portal's own search URLs.
pub fn search_url(base_url: &str, role: &str, location: &str) -> String {
    let role_q = encode_term(role);
    let location_q = encode_term(location);
    format!(
        "{}/{}-jobs-in-{}?k={}&l={}",
        base_url.trim_end_matches('/'),
        role_q,
        location_q,
        role_q,
        location_q
    )
}

fn encode_term(term: &str) -> String {
    term.trim().replace(' ', "%20")
}

fn chrome_capabilities(config: &ScraperConfig) -> Capabilities {
    let mut args = vec![
        format!("--user-agent={}", config.user_agent),
        "--disable-blink-features=AutomationControlled".to_string(),
        format!("--window-size={}", config.window_size.replace('x', ",")),
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
    ];
    if config.headless {
        args.push("--headless=new".to_string());
    }

    let mut caps = Capabilities::new();
    caps.insert(
        "goog:chromeOptions".to_string(),
        serde_json::json!({ "args": args }),
    );
    caps
}
