use thiserror::Error;

/// Failures that abort a whole scrape invocation
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// No WebDriver server could be reached at the configured URL or any fallback
    #[error("failed to reach a WebDriver server (tried {tried})")]
    Connect { tried: String },

    /// A WebDriver command failed on the primary tab
    #[error("WebDriver session error: {0}")]
    Session(#[from] fantoccini::error::CmdError),

    /// The search page never rendered its listing container within the timeout
    #[error("search page did not render within {timeout_secs}s: {url}")]
    RenderTimeout { url: String, timeout_secs: u64 },
}

/// Why one listing was dropped from the result set.
///
/// Skips are non-fatal: they are logged and the loop moves on to the
/// next card. Optional-field absence is not a skip (those fields fall
/// back to sentinels in the record).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("listing card is missing its title link")]
    MissingTitle,

    #[error("listing card is missing the company name")]
    MissingCompany,

    #[error("listing card is missing the location")]
    MissingLocation,

    #[error("listing card has no detail link")]
    MissingDetailLink,

    #[error("detail page navigation failed: {0}")]
    DetailNavigation(String),
}

/// Failures while writing the CSV export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
