//! Profile merging — folds a partial profile into the accumulator.
//!
//! Merging is a single-pass, order-dependent fold: processing the same
//! documents in a different order can yield different surviving scalar values
//! and different ordering of tied list items. This mirrors the consolidation
//! contract and is accepted behavior, not something to normalize away.

use std::collections::HashSet;

use crate::models::{EducationItem, ExperienceItem, Profile, ProjectItem};

/// Merges `incoming` into `accumulator` in place. Absent incoming fields are
/// no-ops; there are no failure modes.
///
/// Scalars keep the richer (strictly longer) value, ties keep the
/// accumulator. Lists are deduplicated by a per-kind key and re-sorted where
/// a sort order is defined (education by end date descending, experience by
/// start date descending, projects keep insertion order).
pub fn merge_profiles(accumulator: &mut Profile, incoming: Profile) {
    merge_scalar(&mut accumulator.name, incoming.name);
    merge_scalar(&mut accumulator.email, incoming.email);
    merge_scalar(&mut accumulator.phone, incoming.phone);
    merge_skills(&mut accumulator.skills, incoming.skills);

    // Lists are only touched (and re-sorted) when the incoming profile
    // actually carries them: merging an empty profile is a strict no-op.
    if incoming.education.is_some() {
        merge_list(
            &mut accumulator.education,
            incoming.education,
            education_key,
        );
        if let Some(items) = accumulator.education.as_mut() {
            items.sort_by(|a, b| date_or_zero(&b.end_date).cmp(date_or_zero(&a.end_date)));
        }
    }
    if incoming.experience.is_some() {
        merge_list(
            &mut accumulator.experience,
            incoming.experience,
            experience_key,
        );
        if let Some(items) = accumulator.experience.as_mut() {
            items.sort_by(|a, b| date_or_zero(&b.start_date).cmp(date_or_zero(&a.start_date)));
        }
    }
    merge_list(&mut accumulator.projects, incoming.projects, project_key);
}

/// Replace when the accumulator has no value or the incoming value is
/// strictly longer in characters. Ties keep the existing value.
fn merge_scalar(target: &mut Option<String>, source: Option<String>) {
    if let Some(incoming) = source {
        let current_len = target.as_ref().map_or(0, |v| v.chars().count());
        if target.is_none() || incoming.chars().count() > current_len {
            *target = Some(incoming);
        }
    }
}

/// Union of both skill lists: trimmed, first-char-capitalized,
/// length-filtered, deduplicated, sorted. A list that filters down to
/// nothing becomes field absence.
fn merge_skills(target: &mut Option<Vec<String>>, source: Option<Vec<String>>) {
    let Some(incoming) = source else { return };

    let mut seen = HashSet::new();
    let mut merged: Vec<String> = target
        .take()
        .unwrap_or_default()
        .into_iter()
        .chain(incoming)
        .map(|skill| normalize_skill(skill.trim()))
        .filter(|skill| skill.chars().count() > 1)
        .filter(|skill| seen.insert(skill.clone()))
        .collect();
    merged.sort();

    if !merged.is_empty() {
        *target = Some(merged);
    }
}

/// Capitalize the first character, lower-case the remainder.
fn normalize_skill(skill: &str) -> String {
    let mut chars = skill.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Appends incoming items whose dedup key is not already present in the
/// accumulator's list.
fn merge_list<T, F>(target: &mut Option<Vec<T>>, source: Option<Vec<T>>, key: F)
where
    F: Fn(&T) -> String,
{
    let Some(incoming) = source else { return };

    let mut items = target.take().unwrap_or_default();
    let existing: HashSet<String> = items.iter().map(&key).collect();
    items.extend(
        incoming
            .into_iter()
            .filter(|item| !existing.contains(&key(item))),
    );

    if !items.is_empty() {
        *target = Some(items);
    }
}

fn education_key(item: &EducationItem) -> String {
    format!(
        "{}-{}-{}",
        item.institution,
        item.degree.as_deref().unwrap_or(""),
        item.field.as_deref().unwrap_or("")
    )
    .to_lowercase()
}

fn experience_key(item: &ExperienceItem) -> String {
    format!(
        "{}-{}-{}-{}",
        item.company,
        item.position,
        item.start_date.as_deref().unwrap_or(""),
        item.end_date.as_deref().unwrap_or("")
    )
    .to_lowercase()
}

fn project_key(item: &ProjectItem) -> String {
    format!("{}-{}", item.name, item.url.as_deref().unwrap_or("")).to_lowercase()
}

/// Absent dates sort as the string "0", i.e. last under descending order.
fn date_or_zero(date: &Option<String>) -> &str {
    date.as_deref().unwrap_or("0")
}
