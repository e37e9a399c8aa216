use crate::SearchQuery;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::record::JobListing;
use crate::session::PortalSession;

/// Runs the pagination + per-item detail-fetch loop over a portal session.
///
/// Walks up to `config.max_pages` result pages, visiting each card's
/// detail page, until the query's cap is reached or the pages run out.
/// Per-item failures are logged and skipped; only session-level failures
/// abort the invocation.
pub async fn run_extraction<S: PortalSession + Send>(
    session: &mut S,
    query: &SearchQuery,
    config: &ScraperConfig,
) -> Result<Vec<JobListing>, ScrapeError> {
    session.open_search(&query.role, &query.location).await?;

    let cap = query.max_jobs as usize;
    let mut records: Vec<JobListing> = Vec::new();

    for page in 1..=config.max_pages {
        let cards = session.listing_cards().await?;
        ::log::debug!("Page {} yielded {} listing cards", page, cards.len());

        for card in cards {
            if records.len() >= cap {
                break;
            }

            match card {
                Ok(card) => match session.fetch_detail(&card.detail_url).await {
                    Ok(detail) => {
                        ::log::debug!("Collected listing: {}", card.title);
                        records.push(JobListing::from_parts(card, detail));
                    }
                    Err(reason) => {
                        ::log::warn!("Skipping listing \"{}\": {}", card.title, reason);
                    }
                },
                Err(reason) => {
                    ::log::warn!("Skipping listing on page {}: {}", page, reason);
                }
            }
        }

        if records.len() >= cap {
            ::log::info!("Reached requested cap of {} listings", cap);
            break;
        }

        if page == config.max_pages {
            ::log::info!("Reached the {}-page limit", config.max_pages);
            break;
        }

        if !advance_with_retry(session, page + 1, config).await? {
            ::log::info!("No page {} control, stopping pagination", page + 1);
            break;
        }
    }

    Ok(records)
}

/// One retry distinguishes a transient click failure from the legitimate
/// end of the results; both attempts failing is treated as the latter.
async fn advance_with_retry<S: PortalSession + Send>(
    session: &mut S,
    page: u32,
    config: &ScraperConfig,
) -> Result<bool, ScrapeError> {
    if session.next_page(page).await? {
        return Ok(true);
    }

    ::log::warn!("Could not reach page {}, retrying once", page);
    tokio::time::sleep(config.next_page_retry_pause()).await;
    session.next_page(page).await
}
