//! Education entry parsing. An entry needs both a degree keyword and an
//! institution pattern; chunks missing either are skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::EducationEntry;

const FIELD_NOT_SPECIFIED: &str = "Not specified";
const DATE_NOT_SPECIFIED: &str = "Not specified";

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:bachelor|master|phd|doctorate|associate)\b")
        .expect("valid degree pattern")
});

static INSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][^,|\n]*(?:University|College|Institute|School)[^,|\n]*)")
        .expect("valid institution pattern")
});

static GRADUATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:graduated:? *)?([A-Za-z]{3,9} \d{4}|(?:19|20)\d{2})\b")
        .expect("valid graduation pattern")
});

static GPA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bGPA:? *(\d+\.?\d*)").expect("valid gpa pattern"));

/// Parses the isolated education body into entries.
pub(crate) fn parse_education(body: &str) -> Vec<EducationEntry> {
    split_entries(body)
        .into_iter()
        .filter(|chunk| chunk.trim().len() >= 10)
        .filter_map(|chunk| parse_entry(&chunk))
        .collect()
}

/// Splits the body into chunks at lines that begin with an uppercase letter,
/// so multi-line entries (degree line plus detail lines) stay together.
fn split_entries(body: &str) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    for line in body.lines() {
        let starts_upper = line
            .chars()
            .next()
            .map(|c| c.is_ascii_uppercase())
            .unwrap_or(false);
        match chunks.last_mut() {
            Some(current) if !starts_upper => {
                current.push('\n');
                current.push_str(line);
            }
            _ => chunks.push(line.to_string()),
        }
    }
    chunks
}

fn parse_entry(chunk: &str) -> Option<EducationEntry> {
    let degree_start = DEGREE_RE.find(chunk)?.start();
    let institution = INSTITUTION_RE.find(chunk)?.as_str().trim().to_string();

    // The degree phrase runs from the degree keyword to the next delimiter.
    let rest = &chunk[degree_start..];
    let end = rest
        .find(|c| c == ',' || c == '|' || c == '\n')
        .unwrap_or(rest.len());
    let degree = rest[..end].trim().to_string();

    let field = degree
        .split_once(" in ")
        .map(|(_, f)| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| FIELD_NOT_SPECIFIED.to_string());

    let graduation_date = GRADUATION_RE
        .captures(chunk)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| DATE_NOT_SPECIFIED.to_string());

    let gpa = GPA_RE.captures(chunk).map(|caps| caps[1].to_string());

    Some(EducationEntry {
        degree,
        field,
        institution,
        graduation_date,
        gpa,
    })
}
