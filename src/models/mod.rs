mod draft;
mod quiz;

pub use draft::{QuizDraft, ValidationError};
pub use quiz::{Question, Quiz};
