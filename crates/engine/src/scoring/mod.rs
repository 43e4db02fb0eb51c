//! The scorer — four deterministic sub-scores (keywords, formatting,
//! readability, structure) combined into an overall score with ranked
//! suggestions.
//!
//! Structured fields are optional: every structural check has a raw-text
//! keyword fallback so the score degrades gracefully when extraction came up
//! empty. Floors and ceilings keep every sub-score inside its documented
//! band even on pathological input.

mod suggestions;
mod vocab;

pub use vocab::Industry;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::{
    FormattingWeights, KeywordWeights, ReadabilityWeights, ScoringConfig, StructureWeights,
};
use crate::models::{AtsScore, ResumeSections, ResumeText};
use vocab::{ESSENTIAL_KEYWORDS, POWER_VERBS, PROFESSIONAL_WORDS};

static PHONE_HINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3}[-.]?\d{3}[-.]?\d{4}").expect("valid phone hint pattern"));

static BULLET_GLYPH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[•·▪▫◦‣⁃-]").expect("valid bullet glyph pattern"));

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+[%+]?").expect("valid number pattern"));

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid year pattern"));

/// Computes the full score report. `sections` is optional — pass `None` to
/// score from the raw text alone.
pub(crate) fn score_resume(
    text: &ResumeText,
    sections: Option<&ResumeSections>,
    industry: Option<Industry>,
    config: &ScoringConfig,
) -> AtsScore {
    let raw = text.as_str();
    let lower = raw.to_lowercase();

    let keywords = keyword_score(&lower, industry, &config.keywords);
    let formatting = formatting_score(raw, &lower, sections, &config.formatting);
    let readability = readability_score(raw, &lower, &config.readability);
    let structure = structure_score(raw, &lower, sections, &config.structure);

    let suggestions = suggestions::build_suggestions(
        keywords,
        formatting,
        readability,
        structure,
        industry,
        config.suggestion_threshold,
    );

    debug!(keywords, formatting, readability, structure, "sub-scores computed");

    AtsScore::from_parts(keywords, formatting, readability, structure, suggestions)
}

/// Base credit plus weighted essential-term coverage plus capped power-verb
/// coverage. An industry hint unions its vocabulary into the essential list;
/// the formula itself never changes.
fn keyword_score(lower: &str, industry: Option<Industry>, w: &KeywordWeights) -> u8 {
    let mut essential: Vec<&str> = ESSENTIAL_KEYWORDS.to_vec();
    if let Some(industry) = industry {
        for keyword in industry.keywords() {
            if !essential.contains(keyword) {
                essential.push(keyword);
            }
        }
    }

    let found_essential = essential.iter().filter(|&&k| lower.contains(k)).count();
    let essential_part = (found_essential as f64 / essential.len() as f64 * w.essential_weight)
        .min(w.essential_weight);

    let found_power = POWER_VERBS.iter().filter(|&&v| lower.contains(v)).count();
    let power_part =
        (found_power as f64 / w.power_full_credit as f64 * w.power_weight).min(w.power_weight);

    clamp_score((w.base + essential_part + power_part).round() as i32, 0)
}

/// Optimistic base minus fixed penalties for missing evidence, plus a bonus
/// for a summary section. Evidence is taken from extracted fields first and
/// raw keyword presence second.
fn formatting_score(
    raw: &str,
    lower: &str,
    sections: Option<&ResumeSections>,
    w: &FormattingWeights,
) -> u8 {
    let contact = sections.and_then(|s| s.contact.as_ref());
    let mut score = w.base;

    let has_email = contact.is_some_and(|c| c.email.is_some()) || raw.contains('@');
    if !has_email {
        score -= w.missing_email_penalty;
    }

    let has_phone = contact.is_some_and(|c| c.phone.is_some()) || PHONE_HINT_RE.is_match(raw);
    if !has_phone {
        score -= w.missing_phone_penalty;
    }

    let has_experience = sections.is_some_and(|s| !s.experience.is_empty())
        || contains_any(lower, &["experience", "work", "employment"]);
    if !has_experience {
        score -= w.missing_experience_penalty;
    }

    let has_education = sections.is_some_and(|s| !s.education.is_empty())
        || contains_any(lower, &["education", "degree", "university"]);
    if !has_education {
        score -= w.missing_education_penalty;
    }

    let has_skills = sections.is_some_and(|s| !s.skills.is_empty())
        || contains_any(lower, &["skills", "technical", "competencies"]);
    if !has_skills {
        score -= w.missing_skills_penalty;
    }

    let has_summary = sections.is_some_and(|s| s.summary.is_some())
        || contains_any(lower, &["summary", "profile", "objective"]);
    if has_summary {
        score += w.summary_bonus;
    }

    clamp_score(score, w.floor)
}

/// Sentence/word statistics against ideal bands, plus bullet and
/// quantification bonuses. Text with no sentences at all lands on the floor.
fn readability_score(raw: &str, lower: &str, w: &ReadabilityWeights) -> u8 {
    let sentences: Vec<&str> = raw
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.len() > 5)
        .collect();
    let words: Vec<&str> = raw.split_whitespace().collect();

    if sentences.is_empty() || words.is_empty() {
        return clamp_score(w.floor, w.floor);
    }

    let mut score = w.base;

    let words_per_sentence = words.len() as f64 / sentences.len() as f64;
    if (w.ideal_sentence_min..=w.ideal_sentence_max).contains(&words_per_sentence) {
        score += w.ideal_sentence_bonus;
    } else if words_per_sentence > w.long_sentence_limit {
        score -= w.long_sentence_penalty;
    } else if words_per_sentence < w.short_sentence_limit {
        score -= w.short_sentence_penalty;
    }

    let total_chars: usize = words.iter().map(|word| word.chars().count()).sum();
    let chars_per_word = total_chars as f64 / words.len() as f64;
    if !(w.ideal_word_min..=w.ideal_word_max).contains(&chars_per_word) {
        score -= w.word_length_penalty;
    }

    if BULLET_GLYPH_RE.find_iter(raw).count() > w.bullet_threshold {
        score += w.bullet_bonus;
    }

    if NUMBER_RE.find_iter(raw).count() > w.number_threshold {
        score += w.number_bonus;
    }

    if contains_any(lower, PROFESSIONAL_WORDS) {
        score += w.professional_language_bonus;
    }

    clamp_score(score, w.floor)
}

/// Rewards each canonical section (via extracted fields and raw keyword
/// fallback), a summary, and a chronology signal.
fn structure_score(
    raw: &str,
    lower: &str,
    sections: Option<&ResumeSections>,
    w: &StructureWeights,
) -> u8 {
    let mut score = w.base;

    if let Some(s) = sections {
        if s.contact.is_some() {
            score += w.contact_bonus;
        }
        if !s.experience.is_empty() {
            score += w.experience_bonus;
        }
        if !s.education.is_empty() {
            score += w.education_bonus;
        }
        if !s.skills.is_empty() {
            score += w.skills_bonus;
        }
    }

    if contains_any(lower, &["experience", "work"]) {
        score += w.keyword_fallback_bonus;
    }
    if contains_any(lower, &["education", "degree"]) {
        score += w.keyword_fallback_bonus;
    }
    if contains_any(lower, &["skills", "technical"]) {
        score += w.keyword_fallback_bonus;
    }

    let has_summary = sections.is_some_and(|s| s.summary.is_some())
        || contains_any(lower, &["summary", "profile"]);
    if has_summary {
        score += w.summary_bonus;
    }

    if YEAR_RE.is_match(raw) {
        score += w.chronology_bonus;
    }

    clamp_score(score, w.floor)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn clamp_score(score: i32, floor: i32) -> u8 {
    score.clamp(floor, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract;

    fn score_text(text: &str, industry: Option<Industry>) -> AtsScore {
        let config = ScoringConfig::new();
        let text = ResumeText::new(text);
        let sections = extract::extract_sections(&text, &config);
        score_resume(&text, Some(&sections), industry, &config)
    }

    const STRONG_RESUME: &str = "John Smith\n\
        john@smith.dev 555-123-4567\n\n\
        PROFESSIONAL SUMMARY\n\
        Results-driven professional engineer who achieved measurable outcomes \
        leading teams and managing complex development projects end to end.\n\n\
        EXPERIENCE\n\
        Senior Engineer | Acme | Jan 2020 - Present\n\
        • Improved throughput by 40% through careful analysis and optimization work\n\
        • Led a team of 6 and managed delivery of 12 releases\n\n\
        EDUCATION\n\
        Bachelor of Science in Computer Science, State University, 2018\n\n\
        SKILLS\n\
        Leadership, Communication, Project Management";

    #[test]
    fn test_sub_scores_and_overall_within_bounds() {
        let score = score_text(STRONG_RESUME, None);
        for value in [
            score.overall,
            score.keywords,
            score.formatting,
            score.readability,
            score.structure,
        ] {
            assert!(value <= 100);
        }
        assert!(score.formatting >= 50);
        assert!(score.readability >= 60);
        assert!(score.structure >= 60);
    }

    #[test]
    fn test_overall_is_mean_of_parts() {
        let score = score_text(STRONG_RESUME, None);
        let mean = (score.keywords as u32
            + score.formatting as u32
            + score.readability as u32
            + score.structure as u32) as f64
            / 4.0;
        assert_eq!(score.overall, mean.round() as u8);
    }

    #[test]
    fn test_empty_text_scores_at_floors() {
        let config = ScoringConfig::new();
        let text = ResumeText::new("");
        let score = score_resume(&text, None, None, &config);
        assert_eq!(score.keywords, 40, "empty text keeps only the base credit");
        assert_eq!(score.formatting, 50);
        assert_eq!(score.readability, 60);
        assert_eq!(score.structure, 60);
    }

    #[test]
    fn test_keyword_score_monotone_in_added_keywords() {
        let base = "a plain document about gardening";
        let enriched = format!("{base} experience skills leadership achieved improved managed");
        let without = score_text(base, None);
        let with = score_text(&enriched, None);
        assert!(
            with.keywords >= without.keywords,
            "adding keywords must never lower the keyword score"
        );
        assert!(with.keywords > without.keywords);
    }

    #[test]
    fn test_power_verb_credit_caps_out() {
        // Three distinct power verbs already earn full power credit; piling
        // on more must not change the score.
        let three = score_text("achieved improved increased", None);
        let many = score_text(
            "achieved improved increased led managed developed implemented created",
            None,
        );
        assert_eq!(three.keywords, many.keywords);
    }

    #[test]
    fn test_industry_hint_changes_vocabulary_not_formula() {
        let text = "cloud api devops deployment pipeline software engineering";
        let general = score_text(text, None);
        let tech = score_text(text, Some(Industry::Technology));
        assert!(
            tech.keywords >= general.keywords,
            "tech terms should count once the technology vocabulary is active"
        );
    }

    #[test]
    fn test_formatting_penalties_without_contact_info() {
        let with_contact = score_text(STRONG_RESUME, None);
        let without = score_text(
            "EXPERIENCE\nwork history education degree skills summary 2020",
            None,
        );
        assert!(without.formatting < with_contact.formatting);
    }

    #[test]
    fn test_structure_rewards_year_token() {
        let with_year = score_text("experience education skills summary 2019", None);
        let without_year = score_text("experience education skills summary", None);
        assert!(with_year.structure >= without_year.structure);
    }

    #[test]
    fn test_text_only_scoring_degrades_gracefully() {
        // No extracted sections at all: keyword fallbacks still apply.
        let config = ScoringConfig::new();
        let text = ResumeText::new(
            "summary of experience, work, education, degree, skills, technical, 2018",
        );
        let score = score_resume(&text, None, None, &config);
        assert!(score.structure > config.structure.floor as u8);
        assert!(score.formatting > config.formatting.floor as u8);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        assert_eq!(score_text(STRONG_RESUME, None), score_text(STRONG_RESUME, None));
    }

    #[test]
    fn test_gibberish_stays_in_range() {
        let score = score_text("%%%% \u{0} 0000 !!!! ~~~~ garbage garbage garbage", None);
        assert!(score.overall <= 100);
        assert!(score.formatting >= 50 && score.readability >= 60 && score.structure >= 60);
    }
}
