//! Scalar field extraction — name, email, and phone.
//!
//! Each field is extracted by a waterfall: an ordered list of
//! (pattern, normalizer) rules evaluated in sequence. The first rule whose
//! pattern matches and whose normalizer accepts the captured text wins;
//! earlier rules take precedence regardless of match quality. Keeping the
//! waterfall as an explicit rule table makes precedence testable and lets a
//! new candidate pattern slot in without touching control flow.

use once_cell::sync::Lazy;
use regex::Regex;

/// Normalizes a raw capture into the final field value, or rejects it.
pub type Normalizer = fn(&str) -> Option<String>;

/// One step of a waterfall: a candidate pattern plus its normalizer.
pub struct FieldRule {
    pub pattern: Regex,
    pub normalize: Normalizer,
}

impl FieldRule {
    fn new(pattern: &str, normalize: Normalizer) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("field pattern must compile"),
            normalize,
        }
    }
}

/// Evaluates the rules in order and returns the first accepted value.
pub fn extract_scalar_field(text: &str, rules: &[FieldRule]) -> Option<String> {
    rules.iter().find_map(|rule| {
        rule.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| (rule.normalize)(m.as_str()))
    })
}

// ───────────────────────────────────────────────────────────────────────────
// Name
// ───────────────────────────────────────────────────────────────────────────

/// Name candidates, most explicit first: a "name:" label, a solitary short
/// line, self-introductions, a trailing two-word line, document titles, then
/// two generic capitalized-word-sequence patterns (the last one admits
/// particles like "van"/"de"/"bin").
static NAME_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::new(r"(?i)name:[ \t]*([\w .-]+)", normalize_name),
        FieldRule::new(r"(?m)^([\w .-]{2,50})$", normalize_name),
        FieldRule::new(r"(?i)\bI am ([\w .-]+)", normalize_name),
        FieldRule::new(r"(?m)(\w+[ \t]+\w+)[ \t]*$", normalize_name),
        FieldRule::new(r"(?i)curriculum vitae of ([\w .-]+)", normalize_name),
        FieldRule::new(r"(?i)resume of ([\w .-]+)", normalize_name),
        FieldRule::new(r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)", normalize_name),
        FieldRule::new(
            r"([A-Z][a-z]+(?:\s+(?:van|de|der|el|al|bin|ibn)\s+)?[A-Z][a-z]+)",
            normalize_name,
        ),
    ]
});

/// A plausible name has at least two whitespace-separated tokens.
fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.split_whitespace().count() >= 2 {
        Some(trimmed.to_string())
    } else {
        None
    }
}

pub fn extract_name(text: &str) -> Option<String> {
    extract_scalar_field(text, &NAME_RULES)
}

// ───────────────────────────────────────────────────────────────────────────
// Email
// ───────────────────────────────────────────────────────────────────────────

static EMAIL_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![FieldRule::new(
        r"(?i)(?:email:?[ \t]*)?([\w.+-]+@[\w-]+\.[\w.-]+)",
        normalize_email,
    )]
});

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w-]+\.[\w.-]+$").expect("email shape must compile"));

/// Re-checks the full captured span against the canonical email shape.
fn normalize_email(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if EMAIL_SHAPE.is_match(trimmed) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

pub fn extract_email(text: &str) -> Option<String> {
    extract_scalar_field(text, &EMAIL_RULES)
}

// ───────────────────────────────────────────────────────────────────────────
// Phone
// ───────────────────────────────────────────────────────────────────────────

/// Phone candidates: labeled run, bare digit-ish run, NNN-NNN-NNNN shape,
/// international grouped digits, parenthesized area code.
static PHONE_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::new(
            r"(?i)(?:phone|tel|telephone|mobile):?[ \t]*([+\d ()-]{10,})",
            normalize_phone,
        ),
        FieldRule::new(r"(\+?[\d ()-]{10,})", normalize_phone),
        FieldRule::new(r"(\d{3}[-.)][ \t]*\d{3}[-.)][ \t]*\d{4})", normalize_phone),
        FieldRule::new(
            r"(\+\d{1,3} ?[-.]? ?\d{1,4} ?[-.]? ?\d{1,4} ?[-.]? ?\d{1,4})",
            normalize_phone,
        ),
        FieldRule::new(r"(\(\d{3}\)[ \t]*\d{3}[-.]?\d{4})", normalize_phone),
    ]
});

/// Collapses whitespace and requires at least ten digit/punctuation phone
/// characters in the value.
fn normalize_phone(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let phone_chars = collapsed
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '(' | ')' | '+' | '-'))
        .count();
    if phone_chars >= 10 {
        Some(collapsed)
    } else {
        None
    }
}

pub fn extract_phone(text: &str) -> Option<String> {
    extract_scalar_field(text, &PHONE_RULES)
}
