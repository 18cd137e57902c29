pub mod proficiency;
pub mod submission;
