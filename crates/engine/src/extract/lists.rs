//! Skills and certifications lists — comma/bullet splitting with length
//! filtering to drop the noise over-eager splitting produces.

use crate::extract::experience::BULLET_RE;

const SKILL_MIN: usize = 2;
const SKILL_MAX: usize = 50;
const CERT_MIN: usize = 6;
const CERT_MAX: usize = 100;

/// Parses the isolated skills body. A "Category: a, b, c" line contributes
/// its right-hand side as individual skills, the label is discarded.
pub(crate) fn parse_skills(body: &str) -> Vec<String> {
    let mut skills = Vec::new();

    for line in body.lines() {
        let line = strip_bullet(line);
        if line.is_empty() {
            continue;
        }

        if let Some((_, listed)) = line.split_once(':') {
            skills.extend(split_commas(listed));
        } else if line.contains(',') {
            skills.extend(split_commas(line));
        } else {
            skills.push(line.to_string());
        }
    }

    skills.retain(|s| {
        let len = s.chars().count();
        (SKILL_MIN..SKILL_MAX).contains(&len)
    });
    skills
}

/// Parses the isolated certifications body: one certification per line.
pub(crate) fn parse_certifications(body: &str) -> Vec<String> {
    body.lines()
        .map(strip_bullet)
        .filter(|line| {
            let len = line.chars().count();
            (CERT_MIN..CERT_MAX).contains(&len)
        })
        .map(str::to_string)
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim();
    match BULLET_RE.captures(trimmed) {
        Some(caps) => caps.get(1).map(|m| m.as_str().trim()).unwrap_or(""),
        None => trimmed,
    }
}

fn split_commas(segment: &str) -> impl Iterator<Item = String> + '_ {
    segment
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
