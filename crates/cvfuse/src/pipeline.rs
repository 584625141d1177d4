//! Extraction pipeline — per-document extraction folded into one accumulator.
//!
//! Documents flow left to right: decoded text → optional preprocessing hook →
//! field/section/item extraction → partial profile → merge into accumulator.
//! Per-document extraction is pure and stateless; only the merge step mutates
//! shared state, so it is always a sequential fold in input order. A failed
//! document (unreadable or mid-extraction fault) is logged and contributes an
//! empty partial profile — the pipeline itself never fails.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::errors::ExtractError;
use crate::extract::{fields, items, section, skills};
use crate::merge::merge_profiles;
use crate::models::Profile;

/// One decoded input document: plain text plus a source identifier used for
/// logging and error reporting. Binary decoding happens upstream.
#[derive(Debug, Clone)]
pub struct Document {
    pub source: String,
    pub text: String,
}

impl Document {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// Optional text-to-text preprocessing hook. Pure cosmetic pass with no
/// semantic contract beyond "text in, text out"; extraction correctness must
/// not depend on it.
pub type Preprocessor = dyn Fn(&str) -> String + Send + Sync;

/// The orchestrator. Owns the optional preprocessing hook for one run;
/// extraction itself carries no state.
#[derive(Default)]
pub struct ExtractionPipeline {
    preprocessor: Option<Box<Preprocessor>>,
}

impl ExtractionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a preprocessing hook applied to each document's text before
    /// extraction.
    pub fn with_preprocessor<F>(mut self, preprocess: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.preprocessor = Some(Box::new(preprocess));
        self
    }

    /// Extracts a partial profile from one document's decoded text.
    pub fn extract_document(&self, text: &str) -> Profile {
        let preprocessed;
        let text = match &self.preprocessor {
            Some(preprocess) => {
                preprocessed = preprocess(text);
                preprocessed.as_str()
            }
            None => text,
        };

        let education = section::extract_section(text, &section::EDUCATION_SECTION)
            .map(|s| items::extract_education(&s))
            .filter(|items| !items.is_empty());
        let experience = section::extract_section(text, &section::EXPERIENCE_SECTION)
            .map(|s| items::extract_experience(&s))
            .filter(|items| !items.is_empty());
        let projects = section::extract_section(text, &section::PROJECTS_SECTION)
            .map(|s| items::extract_projects(&s))
            .filter(|items| !items.is_empty());
        let skills = section::extract_section(text, &section::SKILLS_SECTION)
            .map(|s| skills::extract_skills(&s))
            .filter(|skills| !skills.is_empty());

        Profile {
            name: fields::extract_name(text),
            email: fields::extract_email(text),
            phone: fields::extract_phone(text),
            education,
            skills,
            experience,
            projects,
        }
    }

    /// Processes documents sequentially, folding each partial profile into
    /// the accumulator in input order. Failed documents contribute nothing.
    pub fn consolidate<I>(&self, documents: I) -> Profile
    where
        I: IntoIterator<Item = Result<Document, ExtractError>>,
    {
        let mut accumulator = Profile::default();
        for document in documents {
            match document {
                Ok(doc) => {
                    let partial = self.extract_document(&doc.text);
                    debug!(source = %doc.source, empty = partial.is_empty(), "extracted partial profile");
                    merge_profiles(&mut accumulator, partial);
                }
                Err(err) => {
                    warn!("skipping document: {err}");
                }
            }
        }
        accumulator
    }

    /// Like [`consolidate`](Self::consolidate), but extracts partial profiles
    /// across documents in parallel. Extraction is pure, so this is safe; the
    /// merge fold stays sequential in input order and the result is identical
    /// to the sequential path.
    pub fn consolidate_parallel(&self, documents: Vec<Result<Document, ExtractError>>) -> Profile {
        let partials: Vec<Option<Profile>> = documents
            .into_par_iter()
            .map(|document| match document {
                Ok(doc) => {
                    let partial = self.extract_document(&doc.text);
                    debug!(source = %doc.source, empty = partial.is_empty(), "extracted partial profile");
                    Some(partial)
                }
                Err(err) => {
                    warn!("skipping document: {err}");
                    None
                }
            })
            .collect();

        let mut accumulator = Profile::default();
        for partial in partials.into_iter().flatten() {
            merge_profiles(&mut accumulator, partial);
        }
        accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JANE: &str = "Name: Jane Doe\nEmail: jane@x.com\nPhone: 555-123-4567\n\
        EDUCATION:\nMIT\nDegree: Bachelor\n2016-2020\n";

    fn doc(source: &str, text: &str) -> Result<Document, ExtractError> {
        Ok(Document::new(source, text))
    }

    #[test]
    fn test_end_to_end_extraction() {
        let profile = ExtractionPipeline::new().extract_document(JANE);

        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.email.as_deref(), Some("jane@x.com"));
        assert_eq!(profile.phone.as_deref(), Some("555-123-4567"));

        let education = profile.education.unwrap();
        assert_eq!(education.len(), 1);
        assert!(education[0].institution.contains("MIT"));
        assert_eq!(education[0].degree.as_deref(), Some("Bachelor"));
        assert_eq!(education[0].start_date.as_deref(), Some("2016"));
        assert_eq!(education[0].end_date.as_deref(), Some("2020"));
    }

    #[test]
    fn test_empty_text_yields_empty_profile() {
        let profile = ExtractionPipeline::new().extract_document("");
        assert!(profile.is_empty());
    }

    #[test]
    fn test_consolidate_merges_documents_in_order() {
        let pipeline = ExtractionPipeline::new();
        let profile = pipeline.consolidate(vec![
            doc("a.txt", "Name: Jane Doe\n"),
            doc("b.txt", "Email: jane@x.com\n"),
        ]);
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.email.as_deref(), Some("jane@x.com"));
    }

    #[test]
    fn test_unreadable_document_does_not_abort_batch() {
        let pipeline = ExtractionPipeline::new();
        let profile = pipeline.consolidate(vec![
            Err(ExtractError::UnreadableDocument {
                document: "corrupt.pdf".to_string(),
                reason: "decoder failed".to_string(),
            }),
            doc("ok.txt", "Name: Jane Doe\n"),
        ]);
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_all_documents_failing_yields_empty_profile() {
        let pipeline = ExtractionPipeline::new();
        let profile = pipeline.consolidate(vec![Err(ExtractError::ExtractionFailure {
            document: "weird.txt".to_string(),
            reason: "pattern engine fault".to_string(),
        })]);
        assert!(profile.is_empty());
    }

    #[test]
    fn test_preprocessor_is_applied_before_extraction() {
        let pipeline =
            ExtractionPipeline::new().with_preprocessor(|text| text.replace("NOMBRE", "Name"));
        let profile = pipeline.extract_document("NOMBRE: Jane Doe\n");
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_identity_preprocessor_changes_nothing() {
        let plain = ExtractionPipeline::new().extract_document(JANE);
        let hooked = ExtractionPipeline::new()
            .with_preprocessor(|text| text.to_string())
            .extract_document(JANE);
        assert_eq!(plain, hooked);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let documents = || {
            vec![
                doc("a.txt", JANE),
                doc(
                    "b.txt",
                    "EXPERIENCE:\nSenior Software Engineer\nGoogle\n2020-present\n",
                ),
                doc("c.txt", "SKILLS:\nRust, Python\n"),
            ]
        };
        let pipeline = ExtractionPipeline::new();
        let sequential = pipeline.consolidate(documents());
        let parallel = pipeline.consolidate_parallel(documents());
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_unresolved_experience_never_presented() {
        let text = "EXPERIENCE:\n2019-2021\n";
        let profile = ExtractionPipeline::new().extract_document(text);
        assert!(profile.experience.is_none());
    }
}
