//! Keyword vocabularies — the fixed term tables the keyword sub-score counts
//! against, plus the industry tags that swap in specialized vocabularies.

use serde::{Deserialize, Serialize};

/// General terms ATS filters commonly key on. Any résumé is scored against
/// these; an industry hint unions in a specialized list on top.
pub(crate) const ESSENTIAL_KEYWORDS: &[&str] = &[
    "experience",
    "skills",
    "education",
    "work",
    "project",
    "team",
    "management",
    "development",
    "analysis",
    "leadership",
    "communication",
];

/// Action verbs that read as ownership; full credit after a few distinct hits
/// so verb-stuffing buys nothing.
pub(crate) const POWER_VERBS: &[&str] = &[
    "achieved",
    "improved",
    "increased",
    "led",
    "managed",
    "developed",
    "implemented",
    "created",
    "designed",
    "optimized",
    "delivered",
    "built",
    "established",
    "coordinated",
    "supervised",
    "executed",
    "enhanced",
];

pub(crate) const PROFESSIONAL_WORDS: &[&str] = &[
    "professional",
    "responsible",
    "successful",
    "effective",
    "efficient",
];

/// A caller-supplied industry tag. Selects a keyword vocabulary and one
/// suggestion string; it never changes the scoring formula itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Marketing,
    Finance,
    Healthcare,
    Sales,
}

impl Industry {
    /// Parses a caller-supplied tag. Unrecognized tags are treated as absent,
    /// falling back to the general vocabulary.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "technology" | "tech" => Some(Self::Technology),
            "marketing" => Some(Self::Marketing),
            "finance" => Some(Self::Finance),
            "healthcare" => Some(Self::Healthcare),
            "sales" => Some(Self::Sales),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Marketing => "marketing",
            Self::Finance => "finance",
            Self::Healthcare => "healthcare",
            Self::Sales => "sales",
        }
    }

    pub(crate) fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Technology => &[
                "software",
                "engineering",
                "programming",
                "cloud",
                "api",
                "agile",
                "devops",
                "architecture",
                "database",
                "security",
                "testing",
                "deployment",
            ],
            Self::Marketing => &[
                "campaign",
                "brand",
                "seo",
                "content",
                "analytics",
                "engagement",
                "conversion",
                "social media",
                "audience",
                "growth",
            ],
            Self::Finance => &[
                "financial",
                "accounting",
                "audit",
                "budget",
                "forecasting",
                "compliance",
                "risk",
                "portfolio",
                "reporting",
                "reconciliation",
            ],
            Self::Healthcare => &[
                "patient",
                "clinical",
                "care",
                "medical",
                "hipaa",
                "treatment",
                "nursing",
                "health",
                "compliance",
                "records",
            ],
            Self::Sales => &[
                "revenue",
                "pipeline",
                "quota",
                "negotiation",
                "prospecting",
                "crm",
                "closing",
                "accounts",
                "territory",
                "client",
            ],
        }
    }

    pub(crate) fn suggestion(&self) -> &'static str {
        match self {
            Self::Technology => {
                "Highlight technology keywords such as cloud platforms, APIs, \
                 and deployment tooling"
            }
            Self::Marketing => {
                "Highlight marketing keywords such as campaigns, conversion metrics, \
                 and audience growth"
            }
            Self::Finance => {
                "Highlight finance keywords such as forecasting, compliance, \
                 and portfolio reporting"
            }
            Self::Healthcare => {
                "Highlight healthcare keywords such as patient care, clinical workflows, \
                 and HIPAA compliance"
            }
            Self::Sales => {
                "Highlight sales keywords such as pipeline growth, quota attainment, \
                 and account management"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags_case_insensitive() {
        assert_eq!(Industry::parse("Technology"), Some(Industry::Technology));
        assert_eq!(Industry::parse(" FINANCE "), Some(Industry::Finance));
        assert_eq!(Industry::parse("sales"), Some(Industry::Sales));
    }

    #[test]
    fn test_unrecognized_tag_is_absent() {
        assert_eq!(Industry::parse("astrology"), None);
        assert_eq!(Industry::parse(""), None);
    }

    #[test]
    fn test_tag_round_trip() {
        for industry in [
            Industry::Technology,
            Industry::Marketing,
            Industry::Finance,
            Industry::Healthcare,
            Industry::Sales,
        ] {
            assert_eq!(Industry::parse(industry.tag()), Some(industry));
        }
    }

    #[test]
    fn test_every_industry_has_keywords_and_a_suggestion() {
        for industry in [
            Industry::Technology,
            Industry::Marketing,
            Industry::Finance,
            Industry::Healthcare,
            Industry::Sales,
        ] {
            assert!(!industry.keywords().is_empty());
            assert!(!industry.suggestion().is_empty());
        }
    }

    #[test]
    fn test_vocabularies_are_lowercase() {
        // Matching is done against lowercased text; the tables must already
        // be lowercase for `contains` to hit.
        for word in ESSENTIAL_KEYWORDS.iter().chain(POWER_VERBS.iter()) {
            assert_eq!(*word, word.to_lowercase().as_str());
        }
    }
}
