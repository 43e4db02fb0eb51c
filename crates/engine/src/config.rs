//! Scoring configuration — every heuristic weight, bonus, penalty, floor and
//! threshold lives here with a tunable default. The numbers are calibration
//! choices, not derivations; keeping them out of the algorithms lets them be
//! recalibrated without touching the scoring shape.

/// Keyword sub-score weights.
#[derive(Debug, Clone)]
pub struct KeywordWeights {
    /// Base credit any submitted text receives.
    pub base: f64,
    /// Maximum credit from essential-term coverage.
    pub essential_weight: f64,
    /// Maximum credit from power-verb coverage.
    pub power_weight: f64,
    /// Distinct power verbs needed for full power-verb credit.
    pub power_full_credit: usize,
}

impl Default for KeywordWeights {
    fn default() -> Self {
        Self {
            base: 40.0,
            essential_weight: 50.0,
            power_weight: 50.0,
            power_full_credit: 3,
        }
    }
}

/// Formatting sub-score penalties and bonuses. Starts from an optimistic
/// base and subtracts for missing evidence.
#[derive(Debug, Clone)]
pub struct FormattingWeights {
    pub base: i32,
    pub missing_email_penalty: i32,
    pub missing_phone_penalty: i32,
    pub missing_experience_penalty: i32,
    pub missing_education_penalty: i32,
    pub missing_skills_penalty: i32,
    pub summary_bonus: i32,
    /// The score is never reported below this.
    pub floor: i32,
}

impl Default for FormattingWeights {
    fn default() -> Self {
        Self {
            base: 85,
            missing_email_penalty: 15,
            missing_phone_penalty: 10,
            missing_experience_penalty: 20,
            missing_education_penalty: 15,
            missing_skills_penalty: 10,
            summary_bonus: 15,
            floor: 50,
        }
    }
}

/// Readability sub-score bands and bonuses.
#[derive(Debug, Clone)]
pub struct ReadabilityWeights {
    pub base: i32,
    /// Ideal words-per-sentence band (inclusive).
    pub ideal_sentence_min: f64,
    pub ideal_sentence_max: f64,
    pub ideal_sentence_bonus: i32,
    /// Above this average sentence length the long-sentence penalty applies.
    pub long_sentence_limit: f64,
    pub long_sentence_penalty: i32,
    /// Below this average sentence length the short-sentence penalty applies.
    pub short_sentence_limit: f64,
    pub short_sentence_penalty: i32,
    /// Ideal characters-per-word band (inclusive).
    pub ideal_word_min: f64,
    pub ideal_word_max: f64,
    pub word_length_penalty: i32,
    /// Bullet glyphs needed before the bullet bonus applies.
    pub bullet_threshold: usize,
    pub bullet_bonus: i32,
    /// Numeric tokens needed before the quantification bonus applies.
    pub number_threshold: usize,
    pub number_bonus: i32,
    pub professional_language_bonus: i32,
    pub floor: i32,
}

impl Default for ReadabilityWeights {
    fn default() -> Self {
        Self {
            base: 75,
            ideal_sentence_min: 12.0,
            ideal_sentence_max: 25.0,
            ideal_sentence_bonus: 10,
            long_sentence_limit: 30.0,
            long_sentence_penalty: 15,
            short_sentence_limit: 6.0,
            short_sentence_penalty: 10,
            ideal_word_min: 3.0,
            ideal_word_max: 7.0,
            word_length_penalty: 10,
            bullet_threshold: 2,
            bullet_bonus: 15,
            number_threshold: 2,
            number_bonus: 10,
            professional_language_bonus: 5,
            floor: 60,
        }
    }
}

/// Structure sub-score rewards.
#[derive(Debug, Clone)]
pub struct StructureWeights {
    pub base: i32,
    pub contact_bonus: i32,
    pub experience_bonus: i32,
    pub education_bonus: i32,
    pub skills_bonus: i32,
    /// Applied per section whose heading keywords appear in the raw text,
    /// so the score degrades gracefully when extraction came up empty.
    pub keyword_fallback_bonus: i32,
    pub summary_bonus: i32,
    pub chronology_bonus: i32,
    pub floor: i32,
}

impl Default for StructureWeights {
    fn default() -> Self {
        Self {
            base: 50,
            contact_bonus: 15,
            experience_bonus: 20,
            education_bonus: 15,
            skills_bonus: 15,
            keyword_fallback_bonus: 10,
            summary_bonus: 10,
            chronology_bonus: 5,
            floor: 60,
        }
    }
}

/// Top-level scoring configuration, passed explicitly into every analysis
/// call. No process-wide state.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub keywords: KeywordWeights,
    pub formatting: FormattingWeights,
    pub readability: ReadabilityWeights,
    pub structure: StructureWeights,
    /// A sub-score below this threshold triggers its suggestion strings.
    pub suggestion_threshold: u8,
    /// When set, experience headers with only "Title | Company" (no date
    /// field) are also accepted, with both dates reported as "Unknown".
    /// Off by default: the strict three-field header trades recall for
    /// precision.
    pub lenient_experience_headers: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringConfig {
    pub fn new() -> Self {
        Self {
            keywords: KeywordWeights::default(),
            formatting: FormattingWeights::default(),
            readability: ReadabilityWeights::default(),
            structure: StructureWeights::default(),
            suggestion_threshold: 70,
            lenient_experience_headers: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_is_70() {
        assert_eq!(ScoringConfig::new().suggestion_threshold, 70);
    }

    #[test]
    fn test_defaults_are_the_lenient_calibration() {
        let config = ScoringConfig::new();
        assert_eq!(config.keywords.base, 40.0);
        assert_eq!(config.formatting.base, 85);
        assert_eq!(config.formatting.floor, 50);
        assert_eq!(config.readability.floor, 60);
        assert_eq!(config.structure.floor, 60);
        assert!(!config.lenient_experience_headers);
    }
}
