//! The suggestion decision table — each sub-score below the threshold
//! contributes its canned strings, in sub-score order. Deterministic given
//! the same scores and industry hint.

use crate::scoring::vocab::Industry;

pub(crate) const KEYWORD_SUGGESTIONS: &[&str] = &[
    "Add more industry-relevant keywords and action verbs",
    "Include specific technical skills and tools",
];

pub(crate) const FORMATTING_SUGGESTIONS: &[&str] = &[
    "Ensure complete contact information (email, phone)",
    "Include all standard sections: Experience, Education, Skills",
];

pub(crate) const READABILITY_SUGGESTIONS: &[&str] = &[
    "Use bullet points for better readability",
    "Add quantified achievements with numbers and percentages",
];

pub(crate) const STRUCTURE_SUGGESTIONS: &[&str] = &[
    "Organize content with clear section headers",
    "List experience in reverse chronological order",
];

pub(crate) fn build_suggestions(
    keywords: u8,
    formatting: u8,
    readability: u8,
    structure: u8,
    industry: Option<Industry>,
    threshold: u8,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if keywords < threshold {
        extend(&mut suggestions, KEYWORD_SUGGESTIONS);
        if let Some(industry) = industry {
            suggestions.push(industry.suggestion().to_string());
        }
    }
    if formatting < threshold {
        extend(&mut suggestions, FORMATTING_SUGGESTIONS);
    }
    if readability < threshold {
        extend(&mut suggestions, READABILITY_SUGGESTIONS);
    }
    if structure < threshold {
        extend(&mut suggestions, STRUCTURE_SUGGESTIONS);
    }

    suggestions
}

fn extend(suggestions: &mut Vec<String>, canned: &[&str]) {
    suggestions.extend(canned.iter().map(|s| s.to_string()));
}
