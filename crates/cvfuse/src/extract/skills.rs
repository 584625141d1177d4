//! Skill token extraction from a skills-like section.

use once_cell::sync::Lazy;
use regex::Regex;

static SKILL_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;•|\n]").expect("skill split must compile"));

/// Filler words that show up between skill tokens but are not skills.
static SKILL_STOPWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:and|or|the|a|an|in|on|at|to|for|of)$").expect("stopword must compile")
});

static PURE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("number pattern must compile"));

/// Splits a skills section into tokens on comma/semicolon/bullet/pipe and
/// newline boundaries, keeping tokens that look like actual skills:
/// 2–49 characters, at least one ASCII letter, not purely numeric, not a
/// stopword. Duplicates are removed preserving first occurrence, then the
/// list is sorted lexicographically.
pub fn extract_skills(section_text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut skills: Vec<String> = SKILL_SPLIT
        .split(section_text)
        .map(str::trim)
        .filter(|token| {
            let len = token.chars().count();
            len > 1
                && len < 50
                && !PURE_NUMBER.is_match(token)
                && token.chars().any(|c| c.is_ascii_alphabetic())
                && !SKILL_STOPWORD.is_match(token)
        })
        .filter(|token| seen.insert(token.to_string()))
        .map(str::to_string)
        .collect();
    skills.sort();
    skills
}
