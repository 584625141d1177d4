//! cvfuse — turns loosely-structured résumé-like text into a normalized
//! profile record and consolidates records from multiple documents that
//! describe the same person.
//!
//! The crate only ever sees decoded plain text: file acquisition, binary
//! document decoding (PDF, word processors), and presentation are external
//! collaborators that exchange text and [`Profile`] values with this core.

pub mod errors;
pub mod extract;
pub mod merge;
pub mod models;
pub mod pipeline;

pub use errors::ExtractError;
pub use merge::merge_profiles;
pub use models::{EducationItem, ExperienceItem, Profile, ProjectItem};
pub use pipeline::{Document, ExtractionPipeline};
