use serde::{Deserialize, Serialize};

/// The four-dimensional ATS compatibility report.
///
/// Invariant: every sub-score and `overall` lies in [0, 100], and `overall`
/// is always the rounded arithmetic mean of the four sub-scores — it is
/// recomputed, never cached or set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsScore {
    pub overall: u8,
    pub keywords: u8,
    pub formatting: u8,
    pub readability: u8,
    pub structure: u8,
    /// Ranked improvement suggestions; order reflects the sub-score that
    /// triggered each (keywords, formatting, readability, structure).
    pub suggestions: Vec<String>,
}

impl AtsScore {
    /// Assembles a score report from the four sub-scores, deriving `overall`.
    pub fn from_parts(
        keywords: u8,
        formatting: u8,
        readability: u8,
        structure: u8,
        suggestions: Vec<String>,
    ) -> Self {
        let sum = keywords as u32 + formatting as u32 + readability as u32 + structure as u32;
        let overall = ((sum as f64) / 4.0).round() as u8;
        Self {
            overall,
            keywords,
            formatting,
            readability,
            structure,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_is_rounded_mean() {
        let score = AtsScore::from_parts(70, 85, 60, 60, vec![]);
        // (70 + 85 + 60 + 60) / 4 = 68.75 → 69
        assert_eq!(score.overall, 69);
    }

    #[test]
    fn test_overall_of_equal_parts() {
        let score = AtsScore::from_parts(100, 100, 100, 100, vec![]);
        assert_eq!(score.overall, 100);
    }

    #[test]
    fn test_overall_of_zeros() {
        let score = AtsScore::from_parts(0, 0, 0, 0, vec![]);
        assert_eq!(score.overall, 0);
    }
}
