//! The extractor — segments normalized résumé text into labeled sections and
//! fields with ordered, best-effort pattern matching.
//!
//! Extraction never fails: every field has a definite absent state
//! (`None` / empty vec), so the scorer can run on degenerate or adversarial
//! text. The only judgment calls are heuristic yes/no classifications.

mod contact;
mod education;
mod experience;
mod lists;
pub(crate) mod section;
mod strategy;

use tracing::debug;

use crate::config::ScoringConfig;
use crate::models::{ResumeSections, ResumeText};
use section::{
    SectionEnd, CERTIFICATION_HEADING_RE, EDUCATION_HEADING_RE, EXPERIENCE_HEADING_RE,
    SKILLS_HEADING_RE, SUMMARY_HEADING_RE,
};

/// Summary bodies are capped to keep a runaway match from swallowing the
/// whole document.
const SUMMARY_MAX_CHARS: usize = 500;

/// Produces best-effort structured fields from normalized text.
pub(crate) fn extract_sections(text: &ResumeText, config: &ScoringConfig) -> ResumeSections {
    let raw = text.as_str();

    let contact = contact::extract_contact(raw);

    let summary = section::isolate(raw, &SUMMARY_HEADING_RE, SectionEnd::HeadingOrBlank)
        .map(|body| flatten_summary(&body));

    let experience = section::isolate(raw, &EXPERIENCE_HEADING_RE, SectionEnd::HeadingOnly)
        .map(|body| experience::parse_experience(&body, config.lenient_experience_headers))
        .unwrap_or_default();

    let education = section::isolate(raw, &EDUCATION_HEADING_RE, SectionEnd::HeadingOnly)
        .map(|body| education::parse_education(&body))
        .unwrap_or_default();

    let skills = section::isolate(raw, &SKILLS_HEADING_RE, SectionEnd::HeadingOrBlank)
        .map(|body| lists::parse_skills(&body))
        .unwrap_or_default();

    let certifications =
        section::isolate(raw, &CERTIFICATION_HEADING_RE, SectionEnd::HeadingOrBlank)
            .map(|body| lists::parse_certifications(&body))
            .unwrap_or_default();

    debug!(
        contact_found = !contact.is_empty(),
        jobs = experience.len(),
        education = education.len(),
        skills = skills.len(),
        certifications = certifications.len(),
        "extraction complete"
    );

    ResumeSections {
        contact: if contact.is_empty() { None } else { Some(contact) },
        summary,
        experience,
        education,
        skills,
        certifications,
    }
}

/// Collapses a summary body to a single line and caps its length.
fn flatten_summary(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    flat.chars().take(SUMMARY_MAX_CHARS).collect()
}
