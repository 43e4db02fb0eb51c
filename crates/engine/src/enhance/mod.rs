//! The enhancer — rewrites résumé text for stronger scoring, then re-scores
//! the rewritten text with the same scorer so the reported delta is earned,
//! never estimated.
//!
//! Two backends sit behind the [`ResumeEnhancer`] trait: a deterministic
//! heuristic rewriter that works offline, and a chat-model backend for
//! deployments with an API key.

mod prompts;
pub mod provider;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::ScoringConfig;
use crate::extract::section::{SKILLS_HEADING_RE, SUMMARY_HEADING_RE};
use crate::models::{AtsScore, ResumeText};
use crate::scoring::Industry;

pub use provider::ChatClient;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Enhancer returned empty content")]
    EmptyContent,
}

/// What the caller wants improved, plus the score report being improved on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancementRequest {
    pub original_text: String,
    pub target_role: Option<String>,
    pub industry: Option<String>,
    pub keywords: Vec<String>,
    pub ats_score: AtsScore,
}

/// The rewritten text, what changed, and its freshly computed score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancementResponse {
    pub enhanced_text: String,
    pub improvements: Vec<String>,
    pub new_score: AtsScore,
}

/// The seam between the scoring engine and whatever produces enhanced text.
#[async_trait]
pub trait ResumeEnhancer: Send + Sync {
    async fn enhance(
        &self,
        request: &EnhancementRequest,
    ) -> Result<EnhancementResponse, EnhanceError>;
}

static WEAK_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(led|managed|developed|created|implemented)\b")
        .expect("valid weak verb pattern")
});

/// Deterministic offline rewriter. Strengthens verbs, seeds a targeted
/// summary line, and folds requested keywords into the skills section.
#[derive(Debug, Clone, Default)]
pub struct HeuristicEnhancer {
    config: ScoringConfig,
}

impl HeuristicEnhancer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ResumeEnhancer for HeuristicEnhancer {
    async fn enhance(
        &self,
        request: &EnhancementRequest,
    ) -> Result<EnhancementResponse, EnhanceError> {
        let mut text = request.original_text.clone();
        let mut improvements = Vec::new();

        let strengthened = strengthen_verbs(&text);
        if strengthened != text {
            text = strengthened;
            improvements.push("Strengthened action verbs for greater impact".to_string());
        }

        if let Some(role) = &request.target_role {
            text = inject_summary(&text, role);
            improvements.push(format!("Added a professional summary targeting {role}"));
        }

        let mut wanted = request.keywords.clone();
        if let Some(industry) = &request.industry {
            wanted.push(industry.clone());
        }
        let (with_keywords, added) = inject_keywords(&text, &wanted);
        if added > 0 {
            text = with_keywords;
            improvements.push(format!("Added {added} keywords to the skills section"));
        }

        if text == request.original_text {
            return Err(EnhanceError::EmptyContent);
        }

        Ok(finish(text, improvements, request, &self.config))
    }
}

/// Chat-model backend. Builds the enhancement prompt, sends it through the
/// [`ChatClient`], and re-scores whatever comes back.
pub struct LlmEnhancer {
    client: ChatClient,
    config: ScoringConfig,
}

impl LlmEnhancer {
    pub fn new(client: ChatClient) -> Self {
        Self {
            client,
            config: ScoringConfig::new(),
        }
    }

    pub fn with_config(client: ChatClient, config: ScoringConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ResumeEnhancer for LlmEnhancer {
    async fn enhance(
        &self,
        request: &EnhancementRequest,
    ) -> Result<EnhancementResponse, EnhanceError> {
        let prompt = prompts::build_enhancement_prompt(request);
        let enhanced = self
            .client
            .complete(prompts::ENHANCE_SYSTEM, &prompt)
            .await?;

        Ok(finish(enhanced, Vec::new(), request, &self.config))
    }
}

/// Re-scores the rewritten text and appends the measured per-dimension
/// deltas. Shared by every backend so `new_score` is always real.
fn finish(
    enhanced: String,
    mut improvements: Vec<String>,
    request: &EnhancementRequest,
    config: &ScoringConfig,
) -> EnhancementResponse {
    let normalized = ResumeText::new(&enhanced);
    let sections = crate::extract::extract_sections(&normalized, config);
    let industry = request.industry.as_deref().and_then(Industry::parse);
    let new_score = crate::scoring::score_resume(&normalized, Some(&sections), industry, config);

    debug!(
        old_overall = request.ats_score.overall,
        new_overall = new_score.overall,
        "enhancement re-scored"
    );

    improvements.extend(score_improvements(&request.ats_score, &new_score));

    EnhancementResponse {
        enhanced_text: enhanced,
        improvements,
        new_score,
    }
}

fn score_improvements(old: &AtsScore, new: &AtsScore) -> Vec<String> {
    let dimensions = [
        ("Keywords", old.keywords, new.keywords),
        ("Formatting", old.formatting, new.formatting),
        ("Readability", old.readability, new.readability),
        ("Structure", old.structure, new.structure),
    ];

    dimensions
        .iter()
        .filter(|(_, before, after)| after > before)
        .map(|(label, before, after)| {
            format!("{label} score improved by {} points", after - before)
        })
        .collect()
}

fn strengthen_verbs(text: &str) -> String {
    WEAK_VERB_RE
        .replace_all(text, |caps: &Captures<'_>| {
            match caps[1].to_lowercase().as_str() {
                "led" => "Successfully led",
                "managed" => "Effectively managed",
                "developed" => "Architected and developed",
                "created" => "Designed and created",
                "implemented" => "Successfully implemented",
                other => unreachable!("unmatched verb {other}"),
            }
            .to_string()
        })
        .into_owned()
}

/// Seeds a role-targeted opening line under the summary heading, creating
/// the section when the résumé has none.
fn inject_summary(text: &str, role: &str) -> String {
    let sentence =
        format!("Results-driven {role} with proven expertise in delivering high-impact solutions.");

    match SUMMARY_HEADING_RE.find(text) {
        Some(heading) => {
            let mut out = String::with_capacity(text.len() + sentence.len() + 1);
            out.push_str(&text[..heading.end()]);
            out.push('\n');
            out.push_str(&sentence);
            out.push_str(&text[heading.end()..]);
            out
        }
        None => format!("PROFESSIONAL SUMMARY\n{sentence}\n\n{text}"),
    }
}

/// Folds keywords the résumé does not already mention into the skills
/// section. Returns the rewritten text and how many keywords were added.
fn inject_keywords(text: &str, keywords: &[String]) -> (String, usize) {
    let lower = text.to_lowercase();
    let missing: Vec<&str> = keywords
        .iter()
        .map(String::as_str)
        .filter(|k| !k.trim().is_empty() && !lower.contains(&k.to_lowercase()))
        .collect();

    if missing.is_empty() {
        return (text.to_string(), 0);
    }

    let joined = missing.join(", ");
    let added = missing.len();

    let out = match SKILLS_HEADING_RE.find(text) {
        Some(heading) => {
            let mut out = String::with_capacity(text.len() + joined.len() + 1);
            out.push_str(&text[..heading.end()]);
            out.push('\n');
            out.push_str(&joined);
            out.push_str(&text[heading.end()..]);
            out
        }
        None => format!("{text}\n\nSKILLS\n{joined}"),
    };

    (out, added)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGINAL: &str = "John Smith\n\
        john.smith@example.com | 555-123-4567\n\n\
        PROFESSIONAL SUMMARY\n\
        Engineer with ten years of experience.\n\n\
        EXPERIENCE\n\
        Senior Engineer | Acme | Jan 2020 - Present\n\
        • led a team of five\n\
        • developed internal tooling\n\n\
        EDUCATION\n\
        Bachelor of Science in Computer Science, State University, 2018\n\n\
        SKILLS\n\
        JavaScript, Python";

    fn request(text: &str) -> EnhancementRequest {
        let score = crate::score(text, Some("technology"));
        EnhancementRequest {
            original_text: text.to_string(),
            target_role: Some("Staff Engineer".to_string()),
            industry: Some("technology".to_string()),
            keywords: vec!["Kubernetes".to_string(), "Python".to_string()],
            ats_score: score,
        }
    }

    #[test]
    fn test_strengthen_verbs_preserves_other_text() {
        let out = strengthen_verbs("led the team and developed tooling");
        assert_eq!(
            out,
            "Successfully led the team and Architected and developed tooling"
        );
    }

    #[test]
    fn test_strengthen_verbs_is_case_insensitive() {
        assert_eq!(strengthen_verbs("Managed a budget"), "Effectively managed a budget");
    }

    #[test]
    fn test_inject_summary_after_existing_heading() {
        let out = inject_summary("PROFESSIONAL SUMMARY\nOld line.", "Engineer");
        assert!(out.starts_with("PROFESSIONAL SUMMARY\nResults-driven Engineer"));
        assert!(out.contains("Old line."));
    }

    #[test]
    fn test_inject_summary_creates_section_when_absent() {
        let out = inject_summary("EXPERIENCE\nEngineer | Acme | 2020", "Analyst");
        assert!(out.starts_with("PROFESSIONAL SUMMARY\nResults-driven Analyst"));
        assert!(out.contains("EXPERIENCE"));
    }

    #[test]
    fn test_inject_keywords_skips_already_present() {
        let (out, added) = inject_keywords(
            "SKILLS\nPython, Rust",
            &["python".to_string(), "Kubernetes".to_string()],
        );
        assert_eq!(added, 1);
        assert!(out.contains("Kubernetes"));
        assert_eq!(out.matches("ython").count(), 1);
    }

    #[test]
    fn test_inject_keywords_appends_section_when_absent() {
        let (out, added) = inject_keywords("EXPERIENCE\nwork", &["Terraform".to_string()]);
        assert_eq!(added, 1);
        assert!(out.ends_with("SKILLS\nTerraform"));
    }

    #[tokio::test]
    async fn test_heuristic_enhancer_rescores_for_real() {
        let enhancer = HeuristicEnhancer::new();
        let request = request(ORIGINAL);
        let response = enhancer.enhance(&request).await.expect("enhancement succeeds");

        let config = ScoringConfig::new();
        let expected =
            crate::parse_with_config(&response.enhanced_text, Some("technology"), &config)
                .ats_score;
        assert_eq!(
            response.new_score, expected,
            "new_score must equal a fresh scoring run over the enhanced text"
        );
    }

    #[tokio::test]
    async fn test_heuristic_enhancer_improves_keyword_score() {
        let enhancer = HeuristicEnhancer::new();
        let request = request(ORIGINAL);
        let response = enhancer.enhance(&request).await.expect("enhancement succeeds");

        assert!(
            response.new_score.keywords >= request.ats_score.keywords,
            "verb strengthening and keyword injection must not lower keyword score"
        );
        assert!(response.enhanced_text.contains("Kubernetes"));
        assert!(response.enhanced_text.contains("Successfully led"));
    }

    #[tokio::test]
    async fn test_heuristic_enhancer_reports_measured_deltas() {
        let enhancer = HeuristicEnhancer::new();
        let request = request(ORIGINAL);
        let response = enhancer.enhance(&request).await.expect("enhancement succeeds");

        for improvement in &response.improvements {
            if let Some(points) = improvement.strip_suffix(" points") {
                let delta: u8 = points
                    .rsplit(' ')
                    .next()
                    .and_then(|n| n.parse().ok())
                    .expect("delta is numeric");
                assert!(delta > 0, "reported deltas must be positive");
            }
        }
    }

    #[tokio::test]
    async fn test_heuristic_enhancer_rejects_untouchable_text() {
        let enhancer = HeuristicEnhancer::new();
        let text = "SKILLS\nKubernetes, Python";
        let request = EnhancementRequest {
            original_text: text.to_string(),
            target_role: None,
            industry: None,
            keywords: vec!["Kubernetes".to_string()],
            ats_score: crate::score(text, None),
        };

        assert!(matches!(
            enhancer.enhance(&request).await,
            Err(EnhanceError::EmptyContent)
        ));
    }

    #[test]
    fn test_score_improvements_only_reports_gains() {
        let old = AtsScore::from_parts(50, 80, 70, 60, vec![]);
        let new = AtsScore::from_parts(70, 75, 70, 65, vec![]);
        let improvements = score_improvements(&old, &new);
        assert_eq!(improvements.len(), 2);
        assert!(improvements[0].contains("Keywords score improved by 20 points"));
        assert!(improvements[1].contains("Structure score improved by 5 points"));
    }
}
