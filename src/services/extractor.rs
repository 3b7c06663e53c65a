use scraper::{ElementRef, Html, Selector};

use crate::domain::product::{Product, FALLBACK_DESCRIPTION, NOT_AVAILABLE};

const PRICE_MARKERS: &[&str] = &["US $", "EUR"];

/// One step of an extraction fallback chain.
pub enum Strategy {
    /// Take the text of the first element matching a CSS selector.
    Select(&'static str),
    /// Scan every `span` in document order and take the first whose text
    /// contains any of the markers.
    SpanContains(&'static [&'static str]),
}

// Each chain is tried in order; the first strategy that locates an element
// wins, and a fully missed chain becomes the "N/A" sentinel.
pub const NAME_FALLBACKS: &[Strategy] = &[Strategy::Select("h1 span"), Strategy::Select("h1")];
pub const PRICE_FALLBACKS: &[Strategy] = &[
    Strategy::Select("span[itemprop='price']"),
    Strategy::SpanContains(PRICE_MARKERS),
];
pub const RATING_FALLBACKS: &[Strategy] =
    &[Strategy::Select("span.review-ratings-cntr span.clrBlack")];

impl Strategy {
    fn apply(&self, document: &Html) -> Option<String> {
        match self {
            Strategy::Select(selector) => {
                let selector = Selector::parse(selector).unwrap();
                document.select(&selector).next().map(element_text)
            }
            Strategy::SpanContains(markers) => {
                let selector = Selector::parse("span").unwrap();
                let hit = document
                    .select(&selector)
                    .map(element_text)
                    .find(|text| markers.iter().any(|marker| text.contains(marker)));
                if let Some(ref text) = hit {
                    log::info!("Found marker text in span scan: {}", text);
                }
                hit
            }
        }
    }
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_match(document: &Html, strategies: &[Strategy]) -> String {
    strategies
        .iter()
        .find_map(|strategy| strategy.apply(document))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Pulls the listing fields out of raw markup. Missing fields become
/// sentinels; extraction itself never fails.
pub fn extract_product(html: &str, url: &str) -> Product {
    let document = Html::parse_document(html);

    let price = first_match(&document, PRICE_FALLBACKS);
    if price == NOT_AVAILABLE {
        log::warn!("No price found on {}", url);
    }

    Product {
        name: first_match(&document, NAME_FALLBACKS),
        description: FALLBACK_DESCRIPTION.to_string(),
        price,
        rating: first_match(&document, RATING_FALLBACKS),
        link: url.to_string(),
        enhanced_description: None,
    }
}
