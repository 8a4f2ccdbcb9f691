//! Profile document model for the burnish page enhancer.
//!
//! A profile is a single JSON object with all-optional sections (summary,
//! experience, education, contact, and the CV lists). Section access goes
//! through shallow per-field guards: a section that is absent or fails to
//! decode yields `None` without affecting any other section, which is what
//! lets the renderer leave static markup alone for exactly the regions that
//! have no usable data.

mod format;
mod model;

pub use format::{
    award_line, certification_line, dial_href, education_line, experience_meta, media_line,
    membership_line, presentation_line,
};
pub use model::{
    Award, Certification, Contact, Education, Experience, MediaMention, Membership, Presentation,
    ProfileDoc,
};
