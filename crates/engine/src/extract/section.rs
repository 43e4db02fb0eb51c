//! Section isolation — locating a heading line from a fixed per-section
//! keyword set and slicing out the body that follows.
//!
//! A heading is a whole line equal to one of the section's keywords
//! (case-insensitive, optional trailing colon). The body runs until the next
//! ALL-CAPS heading-like line — and, for the short sections, until the next
//! blank line. If no heading keyword is found the section is simply absent;
//! boundaries are never inferred from content alone.

use once_cell::sync::Lazy;
use regex::Regex;

/// Heading synonyms per section. Longer synonyms come first so the
/// alternation prefers the most specific heading.
pub(crate) const SUMMARY_HEADINGS: &[&str] = &[
    "professional summary",
    "summary of qualifications",
    "career summary",
    "summary",
    "profile",
    "objective",
    "about",
];

pub(crate) const EXPERIENCE_HEADINGS: &[&str] = &[
    "professional experience",
    "work experience",
    "employment history",
    "work history",
    "career history",
    "experience",
    "employment",
];

pub(crate) const EDUCATION_HEADINGS: &[&str] =
    &["academic background", "education", "academics"];

pub(crate) const SKILLS_HEADINGS: &[&str] = &[
    "technical skills",
    "core competencies",
    "skills",
    "competencies",
    "expertise",
    "proficiencies",
];

pub(crate) const CERTIFICATION_HEADINGS: &[&str] =
    &["certifications", "certificates", "licenses"];

fn heading_regex(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?im)^(?:{alternation})[ \t]*:?[ \t]*$"))
        .expect("valid heading pattern")
}

pub(crate) static SUMMARY_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| heading_regex(SUMMARY_HEADINGS));
pub(crate) static EXPERIENCE_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| heading_regex(EXPERIENCE_HEADINGS));
pub(crate) static EDUCATION_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| heading_regex(EDUCATION_HEADINGS));
pub(crate) static SKILLS_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| heading_regex(SKILLS_HEADINGS));
pub(crate) static CERTIFICATION_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| heading_regex(CERTIFICATION_HEADINGS));

/// A line that looks like a section heading: ALL CAPS, short, no lowercase.
static CAPS_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[A-Z][A-Z &/'()-]{1,59}$").expect("valid caps-line pattern"));

/// How a section body ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionEnd {
    /// Body runs until the next heading-like line (experience and education
    /// bodies legitimately contain blank lines between entries).
    HeadingOnly,
    /// Body runs until the next heading-like line or blank line.
    HeadingOrBlank,
}

/// Slices out the body following the first heading match, or `None` when no
/// heading keyword appears or the body is empty.
pub(crate) fn isolate(text: &str, heading: &Regex, end: SectionEnd) -> Option<String> {
    let m = heading.find(text)?;
    let after = &text[m.end()..];
    let after = after.strip_prefix('\n').unwrap_or(after);

    let mut boundary = after.len();
    if let Some(h) = CAPS_LINE_RE.find(after) {
        boundary = boundary.min(h.start());
    }
    if end == SectionEnd::HeadingOrBlank {
        if let Some(b) = after.find("\n\n") {
            boundary = boundary.min(b);
        }
    }

    let body = after[..boundary].trim();
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}
