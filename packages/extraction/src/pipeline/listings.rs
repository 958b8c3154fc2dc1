//! Job-board listing extraction.
//!
//! Each listing is a `div.card-content` holding title, company and location.
//! The "Apply" link is not inside the card: it sits in the `footer` that
//! follows the card as a sibling.

use scraper::Selector;
use std::sync::LazyLock;
use tracing::debug;

use crate::dom::{Document, Element};
use crate::error::{ExtractionError, Result};
use crate::types::query::SearchFilter;
use crate::types::record::ListingRecord;

static CARD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.card-content").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2.title").unwrap());
static COMPANY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3.company").unwrap());
static LOCATION: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p.location").unwrap());

const FOOTER_TAG: &str = "footer";
const APPLY_LABEL: &str = "Apply";

/// Extract every listing card from a job-board document.
///
/// Cards are returned in document order. With a non-empty `search_term`, only
/// cards whose title, company or location contain the term (ignoring case)
/// are kept.
///
/// A card missing its title, company or location fails the whole call with
/// [`ExtractionError::MissingField`]; a missing "Apply" link does not.
pub fn extract_listings(markup: &str, search_term: Option<&str>) -> Result<Vec<ListingRecord>> {
    let document = Document::parse(markup);
    let filter = SearchFilter::new(search_term);

    let cards = document.find_all(&CARD);
    let total = cards.len();
    let mut listings = Vec::with_capacity(total);

    for (index, card) in cards.into_iter().enumerate() {
        let listing = parse_card(card, index)?;

        let keep = filter
            .as_ref()
            .map_or(true, |f| f.matches_any(listing.searchable_fields()));
        if keep {
            listings.push(listing);
        }
    }

    debug!(cards = total, kept = listings.len(), "Extracted listings");
    Ok(listings)
}

fn parse_card(card: Element<'_>, index: usize) -> Result<ListingRecord> {
    Ok(ListingRecord {
        title: required_text(card, &TITLE, "title", index)?,
        organization: required_text(card, &COMPANY, "company", index)?,
        location: required_text(card, &LOCATION, "location", index)?,
        action_link: apply_link(card),
    })
}

fn required_text(
    card: Element<'_>,
    selector: &Selector,
    field: &'static str,
    index: usize,
) -> Result<String> {
    card.find_first(selector)
        .map(|el| el.text())
        .ok_or(ExtractionError::MissingField {
            block: "listing",
            field,
            index,
        })
}

fn apply_link(card: Element<'_>) -> String {
    card.next_sibling_element(FOOTER_TAG)
        .and_then(|footer| footer.find_link_with_text(APPLY_LABEL))
        .and_then(|link| link.attr("href"))
        .unwrap_or_default()
        .to_string()
}
