use crate::error::SkipReason;
use crate::parsers::listing::parse_listing_page;

const BASE: &str = "https://www.naukri.com";

fn card_html(title: &str, href: &str, company: &str, location: &str, experience: &str) -> String {
    format!(
        r#"<div class="srp-jobtuple-wrapper" data-job-id="1001">
          <div class="cust-job-tuple">
            <a class="title" href="{href}">{title}</a>
            <a class="comp-name">{company}</a>
            <span class="exp"><span class="expwdth">{experience}</span></span>
            <span class="loc"><span class="locWdth">{location}</span></span>
          </div>
        </div>"#
    )
}

fn page(cards: &[String]) -> String {
    format!(
        "<html><body><div class=\"list\">{}</div></body></html>",
        cards.join("\n")
    )
}

#[test]
fn complete_cards_parse_into_listing_cards() {
    let html = page(&[
        card_html(
            "ML Engineer",
            "https://www.naukri.com/job-listings-mle-1",
            "Acme Analytics",
            "Bangalore",
            "3-5 Yrs",
        ),
        card_html(
            "Data Analyst",
            "https://www.naukri.com/job-listings-da-2",
            "Globex",
            "Pune, Mumbai",
            "0-2 Yrs",
        ),
    ]);

    let cards = parse_listing_page(&html, BASE);
    assert_eq!(cards.len(), 2);

    let first = cards[0].as_ref().unwrap();
    assert_eq!(first.title, "ML Engineer");
    assert_eq!(first.company, "Acme Analytics");
    assert_eq!(first.location, "Bangalore");
    assert_eq!(first.experience.as_deref(), Some("3-5 Yrs"));
    assert_eq!(first.detail_url, "https://www.naukri.com/job-listings-mle-1");

    let second = cards[1].as_ref().unwrap();
    assert_eq!(second.location, "Pune, Mumbai");
}

#[test]
fn missing_experience_is_optional_not_a_skip() {
    let html = page(&[r#"<div class="srp-jobtuple-wrapper">
        <a class="title" href="https://www.naukri.com/job-listings-x-3">Tester</a>
        <a class="comp-name">Initech</a>
        <span class="loc"><span class="locWdth">Chennai</span></span>
      </div>"#
        .to_string()]);

    let cards = parse_listing_page(&html, BASE);
    let card = cards[0].as_ref().unwrap();
    assert_eq!(card.experience, None);
}

#[test]
fn card_without_title_link_is_a_tagged_skip() {
    let html = page(&[r#"<div class="srp-jobtuple-wrapper">
        <a class="comp-name">Initech</a>
        <span class="loc"><span class="locWdth">Chennai</span></span>
      </div>"#
        .to_string()]);

    let cards = parse_listing_page(&html, BASE);
    assert_eq!(cards[0], Err(SkipReason::MissingTitle));
}

#[test]
fn card_without_company_or_location_is_a_tagged_skip() {
    let no_company = page(&[r#"<div class="srp-jobtuple-wrapper">
        <a class="title" href="/job-listings-x-4">Tester</a>
        <span class="loc"><span class="locWdth">Chennai</span></span>
      </div>"#
        .to_string()]);
    assert_eq!(
        parse_listing_page(&no_company, BASE)[0],
        Err(SkipReason::MissingCompany)
    );

    let no_location = page(&[r#"<div class="srp-jobtuple-wrapper">
        <a class="title" href="/job-listings-x-5">Tester</a>
        <a class="comp-name">Initech</a>
      </div>"#
        .to_string()]);
    assert_eq!(
        parse_listing_page(&no_location, BASE)[0],
        Err(SkipReason::MissingLocation)
    );
}

#[test]
fn title_link_without_href_is_a_tagged_skip() {
    let html = page(&[r#"<div class="srp-jobtuple-wrapper">
        <a class="title">Tester</a>
        <a class="comp-name">Initech</a>
        <span class="loc"><span class="locWdth">Chennai</span></span>
      </div>"#
        .to_string()]);

    assert_eq!(
        parse_listing_page(&html, BASE)[0],
        Err(SkipReason::MissingDetailLink)
    );
}

#[test]
fn relative_detail_links_resolve_against_the_portal_base() {
    let html = page(&[card_html(
        "Tester",
        "/job-listings-rel-6",
        "Initech",
        "Chennai",
        "1-3 Yrs",
    )]);

    let cards = parse_listing_page(&html, BASE);
    assert_eq!(
        cards[0].as_ref().unwrap().detail_url,
        "https://www.naukri.com/job-listings-rel-6"
    );
}

#[test]
fn nested_markup_text_is_whitespace_normalized() {
    let html = page(&[r#"<div class="srp-jobtuple-wrapper">
        <a class="title" href="/j-7"><span>Senior</span>
            <span>Rust Engineer</span></a>
        <a class="comp-name"> Acme
          Systems </a>
        <span class="loc"><span class="locWdth">Remote</span></span>
      </div>"#
        .to_string()]);

    let card = parse_listing_page(&html, BASE)[0].clone().unwrap();
    assert_eq!(card.title, "Senior Rust Engineer");
    assert_eq!(card.company, "Acme Systems");
}

#[test]
fn page_without_cards_yields_an_empty_list() {
    let cards = parse_listing_page("<html><body><p>no results</p></body></html>", BASE);
    assert!(cards.is_empty());
}
