//! Experience entry parsing — pipe-delimited job headers, bullet
//! descriptions, quantified-achievement flagging and date range parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ExperienceEntry;

/// Strict three-field job header: "Title | Company | Date range".
static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^|]+)\|([^|]+)\|([^|]+)$").expect("valid header pattern"));

/// Looser two-field header, only consulted behind the config flag.
static LENIENT_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^|]+)\|([^|]+)$").expect("valid lenient header pattern"));

pub(crate) static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[•·▪▫◦‣⁃*\-–—] *(.*)$").expect("valid bullet pattern"));

static MONTH_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]{3,9}\.? \d{4}").expect("valid month-year pattern"));

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z]{3,9}\.? \d{4}) *[-–—] *([A-Za-z]{3,9}\.? \d{4})")
        .expect("valid range pattern")
});

/// Parses the isolated experience body into entries.
///
/// A line matching the strict header starts a new entry; its bullet lines
/// become the description. Lines that belong to no header are silently
/// dropped — a deliberate precision-over-recall default.
pub(crate) fn parse_experience(body: &str, lenient_headers: bool) -> Vec<ExperienceEntry> {
    let mut entries: Vec<ExperienceEntry> = Vec::new();
    let mut current: Option<ExperienceEntry> = None;

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = HEADER_RE.captures(line) {
            if let Some(done) = current.take() {
                entries.push(done);
            }
            let (start, end) = parse_date_range(&caps[3]);
            current = Some(new_entry(&caps[1], &caps[2], start, end));
        } else if let Some(caps) = lenient_headers
            .then(|| LENIENT_HEADER_RE.captures(line))
            .flatten()
        {
            if let Some(done) = current.take() {
                entries.push(done);
            }
            current = Some(new_entry(
                &caps[1],
                &caps[2],
                "Unknown".to_string(),
                "Unknown".to_string(),
            ));
        } else if let Some(caps) = BULLET_RE.captures(line) {
            let bullet = caps[1].trim().to_string();
            if bullet.is_empty() {
                continue;
            }
            if let Some(entry) = current.as_mut() {
                if is_achievement(&bullet) {
                    entry.achievements.push(bullet.clone());
                }
                entry.description.push(bullet);
            }
        }
    }

    if let Some(done) = current.take() {
        entries.push(done);
    }
    entries
}

fn new_entry(position: &str, company: &str, start: String, end: String) -> ExperienceEntry {
    ExperienceEntry {
        position: position.trim().to_string(),
        company: company.trim().to_string(),
        start_date: start,
        end_date: end,
        description: Vec::new(),
        achievements: Vec::new(),
    }
}

/// A bullet counts as a quantified achievement when it carries a percentage
/// or an "increased"/"improved" claim.
fn is_achievement(bullet: &str) -> bool {
    let lower = bullet.to_lowercase();
    bullet.contains('%') || lower.contains("increased") || lower.contains("improved")
}

/// Total date range parser: always yields a (start, end) pair.
///
/// Recognizes "Month YYYY – Month YYYY" and a "present"/"current" sentinel on
/// the end date; anything else becomes both start and end unchanged.
pub(crate) fn parse_date_range(raw: &str) -> (String, String) {
    let clean = raw.replace(['(', ')'], " ");
    let clean = clean.trim();
    let lower = clean.to_lowercase();

    if lower.contains("present") || lower.contains("current") {
        let start = MONTH_YEAR_RE
            .find(clean)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        return (start, "Present".to_string());
    }

    if let Some(caps) = RANGE_RE.captures(clean) {
        return (caps[1].to_string(), caps[2].to_string());
    }

    (clean.to_string(), clean.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "Senior Engineer | Acme Corp | Jan 2020 - Present\n\
        • Improved throughput by 40%\n\
        • Maintained CI pipelines\n\
        Engineer | Initech | Mar 2017 - Dec 2019\n\
        - Increased test coverage to 90%";

    #[test]
    fn test_parses_pipe_delimited_entries_in_order() {
        let entries = parse_experience(BODY, false);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].position, "Senior Engineer");
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[1].position, "Engineer");
        assert_eq!(entries[1].company, "Initech");
    }

    #[test]
    fn test_present_sentinel_on_end_date() {
        let entries = parse_experience(BODY, false);
        assert_eq!(entries[0].start_date, "Jan 2020");
        assert_eq!(entries[0].end_date, "Present");
    }

    #[test]
    fn test_explicit_range_dates() {
        let entries = parse_experience(BODY, false);
        assert_eq!(entries[1].start_date, "Mar 2017");
        assert_eq!(entries[1].end_date, "Dec 2019");
    }

    #[test]
    fn test_bullets_become_description_and_achievements_flagged() {
        let entries = parse_experience(BODY, false);
        assert_eq!(entries[0].description.len(), 2);
        assert_eq!(entries[0].achievements.len(), 1);
        assert!(entries[0].achievements[0].contains("40%"));
        // "Increased ... 90%" carries both signals but is one achievement.
        assert_eq!(entries[1].achievements.len(), 1);
    }

    #[test]
    fn test_headerless_lines_are_dropped() {
        let body = "Worked at a startup doing many things\n• orphan bullet";
        assert!(parse_experience(body, false).is_empty());
    }

    #[test]
    fn test_four_field_lines_are_not_headers() {
        let body = "a | b | c | d\n• bullet";
        assert!(parse_experience(body, false).is_empty());
    }

    #[test]
    fn test_lenient_flag_accepts_two_field_headers() {
        let body = "Engineer | Initech\n• shipped things";
        let strict = parse_experience(body, false);
        assert!(strict.is_empty(), "strict mode must drop two-field headers");

        let lenient = parse_experience(body, true);
        assert_eq!(lenient.len(), 1);
        assert_eq!(lenient[0].company, "Initech");
        assert_eq!(lenient[0].start_date, "Unknown");
        assert_eq!(lenient[0].end_date, "Unknown");
    }

    #[test]
    fn test_date_range_fallback_echoes_input() {
        let (start, end) = parse_date_range("Summer internship");
        assert_eq!(start, "Summer internship");
        assert_eq!(end, "Summer internship");
    }

    #[test]
    fn test_date_range_current_counts_as_present() {
        let (start, end) = parse_date_range("(June 2021 - current)");
        assert_eq!(start, "June 2021");
        assert_eq!(end, "Present");
    }

    #[test]
    fn test_date_range_en_dash() {
        let (start, end) = parse_date_range("Jan 2018 – Feb 2019");
        assert_eq!(start, "Jan 2018");
        assert_eq!(end, "Feb 2019");
    }
}
