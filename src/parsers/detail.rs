use crate::parsers::element_text;
use crate::record::DetailFields;
use scraper::{Html, Selector};

/// CSS selector for the job header block on a detail page, used as the
/// render-readiness probe. The portal's class names carry build-hash
/// suffixes, so selectors match on the stable prefix only.
pub const HEADER_SELECTOR: &str = r#"[class*="styles_jhc__"]"#;

const SALARY_SELECTOR: &str = r#"[class*="styles_jhc__salary__"]"#;
const SKILLS_SELECTOR: &str = r#"[class*="styles_key-skill__"]"#;

/// Parses a job detail page for its supplementary fields.
///
/// Salary and skills are each independently optional; absence here is
/// not a failure, the record falls back to sentinels.
pub fn parse_detail_page(html: &str) -> DetailFields {
    let doc = Html::parse_document(html);

    let salary_selector = Selector::parse(SALARY_SELECTOR).unwrap();
    let skills_selector = Selector::parse(SKILLS_SELECTOR).unwrap();
    let span_selector = Selector::parse("span").unwrap();

    let salary = doc
        .select(&salary_selector)
        .next()
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty());

    let skills = doc.select(&skills_selector).next().map(|container| {
        container
            .select(&span_selector)
            .map(|chip| element_text(&chip))
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
    });

    ::log::debug!(
        "Detail parser: salary {}, {} skill(s)",
        if salary.is_some() { "found" } else { "absent" },
        skills.as_ref().map_or(0, |s| s.len()),
    );

    DetailFields { salary, skills }
}
