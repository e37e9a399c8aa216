use crate::error::{ScrapeError, SkipReason};
use crate::record::{DetailFields, ListingCard};
use async_trait::async_trait;

/// Browser-facing operations the extraction loop drives.
///
/// The live implementation wraps a WebDriver client; tests implement
/// this with scripted fixture pages.
#[async_trait]
pub trait PortalSession {
    /// Navigate to page 1 of the search results and wait for it to render
    async fn open_search(&mut self, role: &str, location: &str) -> Result<(), ScrapeError>;

    /// Extract the currently displayed page's listing cards, one tagged
    /// outcome per card
    async fn listing_cards(&mut self)
    -> Result<Vec<Result<ListingCard, SkipReason>>, ScrapeError>;

    /// Fetch one job's detail page in a secondary tab. Navigation failures
    /// drop the item; missing fields are reported as `None` inside
    /// `DetailFields`.
    async fn fetch_detail(&mut self, detail_url: &str) -> Result<DetailFields, SkipReason>;

    /// Advance to the given page number. `Ok(false)` means the control was
    /// not found or did not respond, which the loop treats as the end of
    /// the results after one retry.
    async fn next_page(&mut self, page: u32) -> Result<bool, ScrapeError>;
}
