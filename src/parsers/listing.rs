use crate::error::SkipReason;
use crate::parsers::element_text;
use crate::record::ListingCard;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// CSS selector matching one listing card on a search results page.
///
/// Also used by the browser session as the render-readiness probe.
pub const CARD_SELECTOR: &str = "div.srp-jobtuple-wrapper";

/// Parses a search results page into per-card outcomes.
///
/// A card missing any required field (title, company, location, detail
/// link) yields a tagged skip instead of a partial card; experience is
/// optional and simply absent when the portal omits it.
pub fn parse_listing_page(html: &str, base_url: &str) -> Vec<Result<ListingCard, SkipReason>> {
    let doc = Html::parse_document(html);

    let card_selector = Selector::parse(CARD_SELECTOR).unwrap();
    let title_selector = Selector::parse("a.title").unwrap();
    let company_selector = Selector::parse(".comp-name").unwrap();
    let location_selector = Selector::parse(".loc").unwrap();
    let experience_selector = Selector::parse(".exp").unwrap();

    let cards: Vec<_> = doc
        .select(&card_selector)
        .map(|card| {
            extract_card(
                card,
                base_url,
                &title_selector,
                &company_selector,
                &location_selector,
                &experience_selector,
            )
        })
        .collect();

    ::log::debug!("Listing parser found {} cards", cards.len());
    cards
}

fn extract_card(
    card: ElementRef<'_>,
    base_url: &str,
    title_selector: &Selector,
    company_selector: &Selector,
    location_selector: &Selector,
    experience_selector: &Selector,
) -> Result<ListingCard, SkipReason> {
    let title_el = card
        .select(title_selector)
        .next()
        .ok_or(SkipReason::MissingTitle)?;

    let title = element_text(&title_el);
    if title.is_empty() {
        return Err(SkipReason::MissingTitle);
    }

    let href = title_el
        .value()
        .attr("href")
        .ok_or(SkipReason::MissingDetailLink)?;
    let detail_url = resolve_href(base_url, href).ok_or(SkipReason::MissingDetailLink)?;

    let company = card
        .select(company_selector)
        .next()
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
        .ok_or(SkipReason::MissingCompany)?;

    let location = card
        .select(location_selector)
        .next()
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
        .ok_or(SkipReason::MissingLocation)?;

    let experience = card
        .select(experience_selector)
        .next()
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty());

    Ok(ListingCard {
        title,
        company,
        location,
        experience,
        detail_url,
    })
}

/// Resolves a card's href against the portal base; relative links do occur
fn resolve_href(base_url: &str, href: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    Url::parse(base_url)
        .and_then(|base| base.join(href))
        .map(|resolved| resolved.to_string())
        .ok()
}
