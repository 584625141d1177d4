//! Structured item extraction — education, experience, and project entries.
//!
//! A section's text is split on blank-line boundaries into paragraphs; each
//! paragraph is parsed independently and paragraphs that fail to yield a
//! minimally valid item are dropped. Paragraph order is preserved.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{EducationItem, ExperienceItem, ProjectItem};

static PARAGRAPH_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("paragraph split must compile"));

/// A line naming an institution: degree abbreviations or school-ish keywords
/// followed by more text.
static INSTITUTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:institute|university|college|school|master|b\.?s\.?|m\.?s\.?|ph\.?d\.?|b\.?a\.?|m\.?a\.?)[\s:]+[\w\s.]+",
    )
    .expect("institution pattern must compile")
});

static DEGREE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:degree|diploma|certificate|bachelor|master|phd|b\.?s\.?|m\.?s\.?|ph\.?d\.?|b\.?a\.?|m\.?a\.?)[\s:]+([\w .]+)",
    )
    .expect("degree pattern must compile")
});

static FIELD_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:field|major|specialization|in|concentration)[\s:]+([\w .]+)")
        .expect("field pattern must compile")
});

/// `startYear-endYear`, where the end may be a present/current/ongoing token.
static YEAR_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{4})\s*[-–]\s*(\d{4}|present|current|ongoing)")
        .expect("year range pattern must compile")
});

static DESCRIPTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:description|responsibilities|achievements|duties):\s*([^\n]+)")
        .expect("description pattern must compile")
});

static POSITION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:position|title|role):\s*([^\n]+)").expect("position pattern must compile")
});

static COMPANY_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:at|company|employer|organization):\s*([^\n]+)")
        .expect("company pattern must compile")
});

static PROJECT_DESCRIPTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:description|about|summary|overview):\s*([^\n]+)")
        .expect("project description pattern must compile")
});

static PROJECT_URL_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:url|link|website|github|gitlab|demo):\s*(https?://\S+)")
        .expect("url pattern must compile")
});

static TECHNOLOGIES_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:technologies|tech stack|built with|tools used|stack):\s*([^\n]+)")
        .expect("technologies pattern must compile")
});

static TECH_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;|]").expect("technology split must compile"));

static TECH_STOPWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:and|using|with)$").expect("tech stopword must compile"));

/// Line-1 keywords that mark the first paragraph line as a job title rather
/// than a company name. Changing this set changes observable behavior; it is
/// a documented heuristic, not a tunable.
const POSITION_KEYWORDS: &[&str] = &["senior", "manager", "engineer"];

fn paragraphs(section_text: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_SPLIT
        .split(section_text)
        .filter(|p| !p.trim().is_empty())
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| non_empty(m.as_str()))
}

/// Start/end dates from a year-range match; end tokens are lower-cased.
fn capture_year_range(text: &str) -> Option<(String, String)> {
    let caps = YEAR_RANGE.captures(text)?;
    Some((caps[1].to_string(), caps[2].to_lowercase()))
}

// ───────────────────────────────────────────────────────────────────────────
// Education
// ───────────────────────────────────────────────────────────────────────────

/// Parses education entries from a section's text.
///
/// The institution is the first line matching the institution-keyword
/// pattern. When no line matches but the paragraph still carries education
/// evidence (a degree label or a year range), the first non-empty line is
/// taken as the institution; paragraphs with neither are dropped.
pub fn extract_education(section_text: &str) -> Vec<EducationItem> {
    paragraphs(section_text)
        .filter_map(parse_education_paragraph)
        .collect()
}

fn parse_education_paragraph(paragraph: &str) -> Option<EducationItem> {
    let degree = capture(&DEGREE_LABEL, paragraph);
    let field = capture(&FIELD_LABEL, paragraph);
    let years = capture_year_range(paragraph);

    let institution = paragraph
        .lines()
        .map(str::trim)
        .find(|line| INSTITUTION_LINE.is_match(line))
        .map(str::to_string)
        .or_else(|| {
            if degree.is_some() || years.is_some() {
                paragraph.lines().map(str::trim).find_map(non_empty)
            } else {
                None
            }
        })?;

    let (start_date, end_date) = match years {
        Some((start, end)) => (Some(start), Some(end)),
        None => (None, None),
    };

    Some(EducationItem {
        institution,
        degree,
        field,
        start_date,
        end_date,
    })
}

// ───────────────────────────────────────────────────────────────────────────
// Experience
// ───────────────────────────────────────────────────────────────────────────

/// Parses work-experience entries from a section's text.
///
/// Position and company come from explicit labels when both are present.
/// Otherwise, for a paragraph of at least two lines: if line 1 contains
/// "senior", "manager", or "engineer" (case-insensitive), line 1 is the
/// position and line 2 the company; otherwise line 1 is the company and
/// line 2 the position. Entries where neither was resolved are dropped.
pub fn extract_experience(section_text: &str) -> Vec<ExperienceItem> {
    paragraphs(section_text)
        .filter_map(parse_experience_paragraph)
        .filter(|item| !item.is_unresolved())
        .collect()
}

fn parse_experience_paragraph(paragraph: &str) -> Option<ExperienceItem> {
    let years = capture_year_range(paragraph);
    let description = capture(&DESCRIPTION_LABEL, paragraph);

    let labeled_position = capture(&POSITION_LABEL, paragraph);
    let labeled_company = capture(&COMPANY_LABEL, paragraph);

    let (mut company, mut position) = (None, None);
    if let (Some(pos), Some(comp)) = (labeled_position, labeled_company) {
        position = Some(pos);
        company = Some(comp);
    } else {
        let lines: Vec<&str> = paragraph.lines().map(str::trim).collect();
        if lines.len() >= 2 {
            let first_lower = lines[0].to_lowercase();
            if POSITION_KEYWORDS.iter().any(|kw| first_lower.contains(kw)) {
                position = non_empty(lines[0]);
                company = non_empty(lines[1]);
            } else {
                company = non_empty(lines[0]);
                position = non_empty(lines[1]);
            }
        }
    }

    let (start_date, end_date) = match years {
        Some((start, end)) => (Some(start), Some(end)),
        None => (None, None),
    };

    Some(ExperienceItem {
        company: company.unwrap_or_else(|| ExperienceItem::UNKNOWN_COMPANY.to_string()),
        position: position.unwrap_or_else(|| ExperienceItem::UNKNOWN_POSITION.to_string()),
        start_date,
        end_date,
        description,
    })
}

// ───────────────────────────────────────────────────────────────────────────
// Projects
// ───────────────────────────────────────────────────────────────────────────

/// Parses project entries from a section's text. The project name is always
/// the paragraph's first line; paragraphs with a blank first line are dropped.
pub fn extract_projects(section_text: &str) -> Vec<ProjectItem> {
    paragraphs(section_text)
        .filter_map(parse_project_paragraph)
        .collect()
}

fn parse_project_paragraph(paragraph: &str) -> Option<ProjectItem> {
    let name = non_empty(paragraph.lines().next()?)?;

    let description = capture(&PROJECT_DESCRIPTION_LABEL, paragraph);
    let url = capture(&PROJECT_URL_LABEL, paragraph);
    let technologies = capture(&TECHNOLOGIES_LABEL, paragraph).and_then(|raw| {
        let techs: Vec<String> = TECH_SPLIT
            .split(&raw)
            .map(str::trim)
            .filter(|t| !t.is_empty() && !TECH_STOPWORD.is_match(t))
            .map(str::to_string)
            .collect();
        if techs.is_empty() {
            None
        } else {
            Some(techs)
        }
    });

    Some(ProjectItem {
        name,
        description,
        technologies,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_keyword_line_becomes_institution() {
        let section = "University of Somewhere\nDegree: Bachelor\nField: Physics\n2014-2018";
        let items = extract_education(section);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].institution, "University of Somewhere");
        assert_eq!(items[0].degree.as_deref(), Some("Bachelor"));
        assert_eq!(items[0].field.as_deref(), Some("Physics"));
        assert_eq!(items[0].start_date.as_deref(), Some("2014"));
        assert_eq!(items[0].end_date.as_deref(), Some("2018"));
    }

    #[test]
    fn test_education_first_line_fallback_with_evidence() {
        let section = "MIT\nDegree: Bachelor\n2016-2020";
        let items = extract_education(section);
        assert_eq!(items.len(), 1);
        assert!(items[0].institution.contains("MIT"));
        assert_eq!(items[0].degree.as_deref(), Some("Bachelor"));
        assert_eq!(items[0].start_date.as_deref(), Some("2016"));
        assert_eq!(items[0].end_date.as_deref(), Some("2020"));
    }

    #[test]
    fn test_education_paragraph_without_evidence_is_dropped() {
        let section = "just some words\nno dates here";
        assert!(extract_education(section).is_empty());
    }

    #[test]
    fn test_education_end_token_is_lower_cased() {
        let section = "Stanford University\n2018 - Present";
        let items = extract_education(section);
        assert_eq!(items[0].end_date.as_deref(), Some("present"));
    }

    #[test]
    fn test_education_multiple_paragraphs_preserve_order() {
        let section = "Stanford University\n2018-2020\n\nBerkeley College\n2014-2018";
        let items = extract_education(section);
        assert_eq!(items.len(), 2);
        assert!(items[0].institution.contains("Stanford"));
        assert!(items[1].institution.contains("Berkeley"));
    }

    #[test]
    fn test_experience_explicit_labels_win() {
        let section = "Position: Senior Developer\nCompany: Acme Corp\n2019-2021";
        let items = extract_experience(section);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].position, "Senior Developer");
        assert_eq!(items[0].company, "Acme Corp");
        assert_eq!(items[0].start_date.as_deref(), Some("2019"));
        assert_eq!(items[0].end_date.as_deref(), Some("2021"));
    }

    #[test]
    fn test_experience_keyword_heuristic_line_one_is_position() {
        let section = "Senior Software Engineer\nGoogle\n2020-present";
        let items = extract_experience(section);
        assert_eq!(items[0].position, "Senior Software Engineer");
        assert_eq!(items[0].company, "Google");
        assert_eq!(items[0].end_date.as_deref(), Some("present"));
    }

    #[test]
    fn test_experience_heuristic_line_one_is_company_otherwise() {
        let section = "Acme Corp\nDeveloper\n2018-2019";
        let items = extract_experience(section);
        assert_eq!(items[0].company, "Acme Corp");
        assert_eq!(items[0].position, "Developer");
    }

    #[test]
    fn test_experience_description_label() {
        let section = "Acme Corp\nDeveloper\nDescription: Built internal tooling";
        let items = extract_experience(section);
        assert_eq!(
            items[0].description.as_deref(),
            Some("Built internal tooling")
        );
    }

    #[test]
    fn test_experience_fully_unresolved_paragraph_is_dropped() {
        // One line, no labels: both company and position stay placeholders.
        let section = "2019-2021";
        assert!(extract_experience(section).is_empty());
    }

    #[test]
    fn test_project_name_is_first_line() {
        let section = "Analytics Dashboard\nDescription: Real-time analytics\n\
            URL: https://github.com/example/dash\nTechnologies: React, Rust, PostgreSQL";
        let items = extract_projects(section);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Analytics Dashboard");
        assert_eq!(items[0].description.as_deref(), Some("Real-time analytics"));
        assert_eq!(
            items[0].url.as_deref(),
            Some("https://github.com/example/dash")
        );
        assert_eq!(
            items[0].technologies.as_deref(),
            Some(&["React".to_string(), "Rust".to_string(), "PostgreSQL".to_string()][..])
        );
    }

    #[test]
    fn test_project_url_requires_http_scheme() {
        let section = "Tool\nURL: ftp://example.com/tool";
        let items = extract_projects(section);
        assert_eq!(items[0].url, None);
    }

    #[test]
    fn test_project_technology_stopwords_filtered() {
        let section = "Tool\nStack: Rust; and; using; with; Tokio";
        let items = extract_projects(section);
        assert_eq!(
            items[0].technologies.as_deref(),
            Some(&["Rust".to_string(), "Tokio".to_string()][..])
        );
    }

    #[test]
    fn test_empty_section_yields_no_items() {
        assert!(extract_education("").is_empty());
        assert!(extract_experience("  \n ").is_empty());
        assert!(extract_projects("\n\n\n").is_empty());
    }
}
