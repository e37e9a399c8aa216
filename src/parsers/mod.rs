pub mod detail;
pub mod listing;

#[cfg(test)]
mod tests;

use scraper::ElementRef;

/// Collects an element's text with whitespace collapsed to single spaces
pub(crate) fn element_text(el: &ElementRef<'_>) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
