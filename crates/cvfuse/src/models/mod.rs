pub mod profile;

pub use profile::{EducationItem, ExperienceItem, Profile, ProjectItem};
