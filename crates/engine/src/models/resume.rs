use serde::{Deserialize, Serialize};

use crate::models::AtsScore;

/// Normalized résumé text. Construction is the only place normalization
/// happens; everything downstream can assume the invariants hold:
/// no carriage returns, no runs of spaces/tabs inside a line, no line-trailing
/// whitespace, at most one blank line in a row, no leading/trailing whitespace.
///
/// Line structure is deliberately preserved — blank lines and ALL-CAPS heading
/// lines are the section boundary signals the extractor keys on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeText(String);

impl ResumeText {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<str> for ResumeText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn normalize(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();
    for line in unified.split('\n') {
        let mut collapsed = String::with_capacity(line.len());
        let mut in_gap = false;
        for ch in line.trim().chars() {
            if ch == ' ' || ch == '\t' {
                if !in_gap {
                    collapsed.push(' ');
                }
                in_gap = true;
            } else {
                collapsed.push(ch);
                in_gap = false;
            }
        }
        lines.push(collapsed);
    }

    // Collapse runs of blank lines down to a single blank line.
    let mut out = String::with_capacity(unified.len());
    let mut blank_run = 0usize;
    for line in &lines {
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }

    out.trim_matches('\n').to_string()
}

/// Contact details. Every field is independently optional — one field being
/// present implies nothing about the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

impl ContactInfo {
    /// True when no field matched at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.linkedin.is_none()
            && self.website.is_none()
    }
}

/// One job entry from the experience section. Entries keep their order of
/// appearance in the text (assumed reverse-chronological, not verified).
/// `end_date` may hold the literal sentinel "Present".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    /// Bullet lines, in order.
    pub description: Vec<String>,
    /// Subsequence of `description` flagged as quantified.
    pub achievements: Vec<String>,
}

/// One education entry. `field` falls back to "Not specified" when the
/// degree line carries no recognizable major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub graduation_date: String,
    pub gpa: Option<String>,
}

/// Everything the extractor pulled out of the text. Every field has a
/// definite absent state — extraction never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSections {
    pub contact: Option<ContactInfo>,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
}

/// The sole externally visible artifact of an analysis call.
/// Created fresh per call; no persistence, no identity beyond the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub text: ResumeText,
    pub sections: ResumeSections,
    pub ats_score: AtsScore,
}
