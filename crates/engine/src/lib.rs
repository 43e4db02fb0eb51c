//! Heuristic ATS résumé analysis engine.
//!
//! Three cooperating pieces:
//!
//! - the **extractor** ([`parse`]) segments normalized text into labeled
//!   sections and fields with ordered, best-effort pattern matching;
//! - the **scorer** ([`score`]) computes a four-dimensional compatibility
//!   report with ranked suggestions;
//! - the **enhancer** ([`enhance::ResumeEnhancer`]) rewrites the text and
//!   re-scores the result with the same scorer.
//!
//! Everything is deterministic and total: the same text, industry hint, and
//! configuration always produce the same output, and no input — empty,
//! binary, or adversarial — makes analysis fail.

mod config;
mod extract;
mod models;
mod scoring;

pub mod enhance;

pub use config::{
    FormattingWeights, KeywordWeights, ReadabilityWeights, ScoringConfig, StructureWeights,
};
pub use models::{
    AtsScore, ContactInfo, EducationEntry, ExperienceEntry, ParsedResume, ResumeSections,
    ResumeText,
};
pub use scoring::Industry;

/// Runs the full pipeline: normalize, extract sections, score.
pub fn parse(text: &str) -> ParsedResume {
    parse_with_config(text, None, &ScoringConfig::new())
}

/// [`parse`] with an industry hint and explicit weights.
///
/// An unrecognized hint falls back to the general vocabulary rather than
/// erroring; the hint never changes the scoring formula, only which keyword
/// table the text is counted against.
pub fn parse_with_config(
    text: &str,
    industry: Option<&str>,
    config: &ScoringConfig,
) -> ParsedResume {
    let normalized = ResumeText::new(text);
    let sections = extract::extract_sections(&normalized, config);
    let industry = industry.and_then(Industry::parse);
    let ats_score = scoring::score_resume(&normalized, Some(&sections), industry, config);

    ParsedResume {
        text: normalized,
        sections,
        ats_score,
    }
}

/// Scores raw text without running extraction first. Structural checks fall
/// back to keyword presence, so the score degrades gracefully rather than
/// failing on unsegmentable text.
pub fn score(text: &str, industry: Option<&str>) -> AtsScore {
    score_with_config(text, industry, &ScoringConfig::new())
}

/// [`score`] with explicit weights.
pub fn score_with_config(text: &str, industry: Option<&str>, config: &ScoringConfig) -> AtsScore {
    let normalized = ResumeText::new(text);
    let industry = industry.and_then(Industry::parse);
    scoring::score_resume(&normalized, None, industry, config)
}
