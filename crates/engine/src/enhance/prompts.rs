//! Prompt assembly for the LLM-backed enhancer.

use crate::enhance::EnhancementRequest;

pub(crate) const ENHANCE_SYSTEM: &str = "You are an expert resume writer and ATS \
optimization specialist. Your task is to enhance resumes for better ATS performance \
while maintaining authenticity and readability.";

/// Builds the enhancement prompt from the score report and targeting hints.
pub(crate) fn build_enhancement_prompt(request: &EnhancementRequest) -> String {
    let score = &request.ats_score;
    let mut prompt = format!(
        "Please enhance the following resume to improve its ATS (Applicant Tracking \
System) compatibility and overall effectiveness.\n\n\
Current ATS Score Analysis:\n\
- Overall Score: {}/100\n\
- Keywords: {}/100\n\
- Formatting: {}/100\n\
- Readability: {}/100\n\
- Structure: {}/100\n\n\
Areas for improvement: {}\n\n",
        score.overall,
        score.keywords,
        score.formatting,
        score.readability,
        score.structure,
        score.suggestions.join(", "),
    );

    if let Some(role) = &request.target_role {
        prompt.push_str(&format!("Target Role: {role}\n"));
    }
    if let Some(industry) = &request.industry {
        prompt.push_str(&format!("Target Industry: {industry}\n"));
    }
    if !request.keywords.is_empty() {
        prompt.push_str(&format!(
            "Important Keywords to Include: {}\n",
            request.keywords.join(", ")
        ));
    }

    prompt.push_str(&format!(
        "\nEnhancement Guidelines:\n\
1. Improve keyword density and relevance for ATS systems\n\
2. Enhance action verbs and quantify achievements where possible\n\
3. Improve formatting and structure for better readability\n\
4. Maintain authenticity - don't add false information\n\
5. Use industry-standard terminology\n\
6. Optimize section headers and bullet points\n\
7. Ensure proper contact information formatting\n\n\
Original Resume:\n{}\n\n\
Please provide the enhanced version that addresses the ATS score weaknesses while \
maintaining the original content's authenticity. Focus on improving the areas with \
lower scores.",
        request.original_text
    ));

    prompt
}
