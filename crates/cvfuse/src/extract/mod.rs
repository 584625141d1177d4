//! Extraction — pure, stateless functions from decoded text to profile parts.

pub mod fields;
pub mod items;
pub mod section;
pub mod skills;

pub use fields::{extract_email, extract_name, extract_phone, extract_scalar_field, FieldRule};
pub use items::{extract_education, extract_experience, extract_projects};
pub use section::{compile_section_pattern, extract_section};
pub use skills::extract_skills;
