use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::posting::Posting;

static CARD: LazyLock<Selector> = LazyLock::new(|| selector("li"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h3.base-search-card__title"));
static ORGANIZATION: LazyLock<Selector> =
    LazyLock::new(|| selector("h4.base-search-card__subtitle"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.base-card__full-link[href]"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid static selector {css:?}: {e:?}"))
}

/// Extract postings from a search results fragment, in document order.
///
/// Every `<li>` is a candidate card. A card contributes a posting only when
/// it contains a title heading, an organization subheading, and a full-card
/// link. Anything else on the page (ads, "see more" rows, promos) is skipped
/// silently. If the page markup changes the result is simply shorter.
pub fn extract_postings(html: &str) -> Vec<Posting> {
    let document = Html::parse_document(html);

    document
        .select(&CARD)
        .filter_map(|card| posting_from_card(&card))
        .collect()
}

fn posting_from_card(card: &ElementRef) -> Option<Posting> {
    let title = card.select(&TITLE).next()?;
    let organization = card.select(&ORGANIZATION).next()?;
    let href = card
        .select(&LINK)
        .next()?
        .value()
        .attr("href")
        .filter(|href| !href.trim().is_empty())?;

    Some(Posting::new(&text_of(&title), &text_of(&organization), href))
}

fn text_of(element: &ElementRef) -> String {
    element.text().collect::<String>()
}
