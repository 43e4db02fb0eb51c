//! Data model — the structures every other module produces or consumes.

mod resume;
mod score;

pub use resume::{
    ContactInfo, EducationEntry, ExperienceEntry, ParsedResume, ResumeSections, ResumeText,
};
pub use score::AtsScore;
