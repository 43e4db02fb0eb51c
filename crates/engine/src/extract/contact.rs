//! Contact field extraction via ordered-fallback strategy lists.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::strategy::{FieldStrategy, StrategyList};
use crate::models::ContactInfo;

/// Candidate name length must land in [4, 50) characters.
const NAME_MIN: usize = 4;
const NAME_MAX: usize = 50;

static NAME_STRATEGIES: Lazy<StrategyList> = Lazy::new(|| {
    StrategyList::new(vec![
        // Capitalized "Firstname Lastname" (optionally more given names).
        FieldStrategy::bounded(
            r"(?m)^([A-Z][a-z]+ [A-Z][a-z]+(?: [A-Z][a-z]+)*)",
            1,
            NAME_MIN,
            NAME_MAX,
        ),
        // ALL-CAPS block of at least two words.
        FieldStrategy::bounded(
            r"(?m)^([A-Z][A-Z.'-]* [A-Z][A-Z .'-]*[A-Z])$",
            1,
            NAME_MIN,
            NAME_MAX,
        ),
        // Loose two-word first line.
        FieldStrategy::bounded(r"(?m)^([A-Za-z]+ [A-Za-z]+)", 1, NAME_MIN, NAME_MAX),
    ])
});

static EMAIL_STRATEGIES: Lazy<StrategyList> = Lazy::new(|| {
    StrategyList::new(vec![FieldStrategy::new(
        r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
        0,
    )])
});

static PHONE_STRATEGIES: Lazy<StrategyList> = Lazy::new(|| {
    StrategyList::new(vec![
        FieldStrategy::new(r"(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}", 0),
        FieldStrategy::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b", 0),
        FieldStrategy::new(r"\(\d{3}\) ?\d{3}[-.]?\d{4}", 0),
    ])
});

static LINKEDIN_STRATEGIES: Lazy<StrategyList> = Lazy::new(|| {
    StrategyList::new(vec![
        FieldStrategy::new(r"(?i)linkedin\.com/in/([A-Za-z0-9_-]+)", 1),
        FieldStrategy::new(r"(?i)linkedin\.com/profile/view\?id=([A-Za-z0-9_-]+)", 1),
        FieldStrategy::new(r"(?i)\blinkedin:? ([A-Za-z0-9_-]+)", 1),
    ])
});

static LOCATION_STRATEGIES: Lazy<StrategyList> = Lazy::new(|| {
    StrategyList::new(vec![
        // "City, ST" with optional ZIP.
        FieldStrategy::bounded(
            r"\b([A-Za-z][A-Za-z ]+, ?[A-Z]{2}(?: \d{5})?)\b",
            1,
            NAME_MIN,
            NAME_MAX,
        ),
        // "City, STA" (three-letter region codes).
        FieldStrategy::bounded(r"([A-Za-z][A-Za-z ]+, ?[A-Z]{2,3})\b", 1, NAME_MIN, NAME_MAX),
        // Labelled location line.
        FieldStrategy::bounded(
            r"(?i)(?:city|location|address|based in):? ?([A-Za-z][A-Za-z ,]+)",
            1,
            NAME_MIN,
            NAME_MAX,
        ),
    ])
});

static WEBSITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b((?:https?://|www\.)[A-Za-z0-9./_~#?&=-]+)").expect("valid website pattern")
});

/// Extracts every contact field independently; a field with no passing
/// strategy is simply absent.
pub(crate) fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        name: NAME_STRATEGIES.first_match(text),
        email: EMAIL_STRATEGIES.first_match(text),
        phone: PHONE_STRATEGIES.first_match(text),
        location: LOCATION_STRATEGIES.first_match(text),
        linkedin: LINKEDIN_STRATEGIES
            .first_match(text)
            .map(|handle| format!("linkedin.com/in/{handle}")),
        website: extract_website(text),
    }
}

/// First URL-shaped token that is not a LinkedIn address (LinkedIn has its
/// own field).
fn extract_website(text: &str) -> Option<String> {
    WEBSITE_RE
        .captures_iter(text)
        .map(|caps| caps[1].trim_end_matches(['.', ',']).to_string())
        .find(|url| !url.to_lowercase().contains("linkedin"))
}
