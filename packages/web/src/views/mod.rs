mod notes;
pub use notes::{CourseNotes, Notes};
