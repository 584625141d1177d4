//! Profile records — the consolidated output of extraction and merging.
//!
//! Every field is optional: a profile with nothing extracted is valid.
//! Invariant: a list field that is `Some` is non-empty, and string fields are
//! never empty strings — extractors either omit a field or supply a value.
//! Absent fields are omitted from the serialized JSON, never emitted as null.

use serde::{Deserialize, Serialize};

/// The structured record describing one person, accumulated across documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectItem>>,
}

impl Profile {
    /// True when no field at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.education.is_none()
            && self.skills.is_none()
            && self.experience.is_none()
            && self.projects.is_none()
    }
}

/// One education entry. Dates are free-form 4-digit-year strings or the
/// lower-cased tokens "present"/"current"/"ongoing".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub institution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// One work-experience entry. `company`/`position` may carry the
/// "Unknown Company"/"Unknown Position" placeholders internally; entries where
/// both are still placeholders are filtered out before an item list is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExperienceItem {
    pub const UNKNOWN_COMPANY: &'static str = "Unknown Company";
    pub const UNKNOWN_POSITION: &'static str = "Unknown Position";

    /// True when neither company nor position was resolved from the text.
    pub fn is_unresolved(&self) -> bool {
        self.company == Self::UNKNOWN_COMPANY && self.position == Self::UNKNOWN_POSITION
    }
}

/// One project entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_empty() {
        assert!(Profile::default().is_empty());
    }

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let profile = Profile {
            name: Some("Jane Doe".to_string()),
            ..Profile::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Jane Doe" }));
    }

    #[test]
    fn test_item_dates_serialize_camel_case() {
        let item = EducationItem {
            institution: "MIT".to_string(),
            degree: None,
            field: None,
            start_date: Some("2016".to_string()),
            end_date: Some("2020".to_string()),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "institution": "MIT",
                "startDate": "2016",
                "endDate": "2020"
            })
        );
    }

    #[test]
    fn test_unresolved_experience_detection() {
        let item = ExperienceItem {
            company: ExperienceItem::UNKNOWN_COMPANY.to_string(),
            position: ExperienceItem::UNKNOWN_POSITION.to_string(),
            start_date: None,
            end_date: None,
            description: None,
        };
        assert!(item.is_unresolved());

        let partial = ExperienceItem {
            company: "Acme".to_string(),
            ..item
        };
        assert!(!partial.is_unresolved());
    }
}
