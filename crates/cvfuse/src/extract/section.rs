//! Section extraction — slices a labeled block out of a flat text blob.
//!
//! A section starts at a line beginning with one of the section-name
//! alternatives followed by a colon or newline, and runs (non-greedily) up to
//! the start of any next-section alternative anchored the same way, or end of
//! text. First match in document order wins; overlapping section names are an
//! accepted heuristic limitation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ExtractError;

/// Section-name alternations recognized per profile list kind. These mirror
/// the headings résumés actually use, not an exhaustive taxonomy.
pub const EDUCATION_NAMES: &str = "education|academic|qualification|studies";
pub const SKILLS_NAMES: &str =
    "skills|technologies|expertise|competencies|technical skills|proficiencies";
pub const EXPERIENCE_NAMES: &str =
    "experience|work history|employment|professional background|career";
pub const PROJECTS_NAMES: &str = "projects|portfolio|works|applications";

pub static EDUCATION_SECTION: Lazy<Regex> =
    Lazy::new(|| build_section_pattern(EDUCATION_NAMES, "experience|skills|projects"));
pub static SKILLS_SECTION: Lazy<Regex> =
    Lazy::new(|| build_section_pattern(SKILLS_NAMES, "education|experience|projects"));
pub static EXPERIENCE_SECTION: Lazy<Regex> =
    Lazy::new(|| build_section_pattern(EXPERIENCE_NAMES, "education|skills|projects"));
pub static PROJECTS_SECTION: Lazy<Regex> =
    Lazy::new(|| build_section_pattern(PROJECTS_NAMES, "education|experience|skills"));

/// Compiles a section boundary pattern from caller-supplied alternation
/// groups. `section_names` and `next_sections` are `|`-separated alternatives
/// matched case-insensitively at line starts.
pub fn compile_section_pattern(
    section_names: &str,
    next_sections: &str,
) -> Result<Regex, ExtractError> {
    Regex::new(&section_pattern_source(section_names, next_sections)).map_err(ExtractError::from)
}

fn build_section_pattern(section_names: &str, next_sections: &str) -> Regex {
    Regex::new(&section_pattern_source(section_names, next_sections))
        .expect("section pattern must compile")
}

fn section_pattern_source(section_names: &str, next_sections: &str) -> String {
    format!(
        r"(?is)(?:^|\n)(?:{section_names})\s*(?::|\n)+(.*?)(?:(?:^|\n)(?:{next_sections})\s*(?::|\n)|$)"
    )
}

/// Returns the text slice belonging to the section, trimmed of surrounding
/// whitespace, or `None` when no anchor is found or the slice is blank.
pub fn extract_section(text: &str, section: &Regex) -> Option<String> {
    let captures = section.captures(text)?;
    let slice = captures.get(1)?.as_str().trim();
    if slice.is_empty() {
        None
    } else {
        Some(slice.to_string())
    }
}
