//! Authoring payloads and client-side validation.
//!
//! Drafts are validated before any network call; a failed validation keeps
//! the form open so the user can correct it.

use serde::Serialize;

use super::Question;

/// An unsaved quiz being authored or edited.
///
/// Serializes the quiz name under the `title` key, which is what the
/// server expects on both POST and PATCH bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuizDraft {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

/// Client-side validation failure. Question numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    NoQuestions,
    EmptyQuestionText(usize),
    TooFewOptions(usize),
    MissingCorrectAnswer(usize),
    CorrectAnswerNotAnOption(usize),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "Title is required"),
            ValidationError::NoQuestions => write!(f, "At least one question is required"),
            ValidationError::EmptyQuestionText(n) => {
                write!(f, "Question {} text is required", n)
            }
            ValidationError::TooFewOptions(n) => {
                write!(f, "Question {} must have at least 2 options", n)
            }
            ValidationError::MissingCorrectAnswer(n) => {
                write!(f, "Question {} must have a correct answer", n)
            }
            ValidationError::CorrectAnswerNotAnOption(n) => {
                write!(f, "Question {}'s correct answer must be one of the options", n)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl QuizDraft {
    /// Trim every field, drop empty options, collapse duplicate options,
    /// then validate. Returns the cleaned payload ready to submit.
    pub fn cleaned(&self) -> Result<QuizDraft, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.questions.is_empty() {
            return Err(ValidationError::NoQuestions);
        }

        let mut questions = Vec::with_capacity(self.questions.len());
        for (i, question) in self.questions.iter().enumerate() {
            let number = i + 1;
            let text = question.text.trim().to_string();
            if text.is_empty() {
                return Err(ValidationError::EmptyQuestionText(number));
            }

            let mut options: Vec<String> = Vec::with_capacity(question.options.len());
            for option in &question.options {
                let option = option.trim();
                if option.is_empty() || options.iter().any(|o| o.as_str() == option) {
                    continue;
                }
                options.push(option.to_string());
            }
            if options.len() < 2 {
                return Err(ValidationError::TooFewOptions(number));
            }

            let correct_answer = question.correct_answer.trim().to_string();
            if correct_answer.is_empty() {
                return Err(ValidationError::MissingCorrectAnswer(number));
            }
            if !options.contains(&correct_answer) {
                return Err(ValidationError::CorrectAnswerNotAnOption(number));
            }

            questions.push(Question {
                text,
                options,
                correct_answer,
            });
        }

        Ok(QuizDraft {
            title,
            description: self.description.trim().to_string(),
            questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(questions: Vec<Question>) -> QuizDraft {
        QuizDraft {
            title: "Sample".to_string(),
            description: "About things".to_string(),
            questions,
        }
    }

    fn question(text: &str, options: &[&str], correct: &str) -> Question {
        Question {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    #[test]
    fn valid_draft_passes_and_is_trimmed() {
        let mut draft = draft_with(vec![question("  2+2?  ", &[" 3 ", "4", ""], "4")]);
        draft.title = "  Math  ".to_string();

        let cleaned = draft.cleaned().unwrap();
        assert_eq!(cleaned.title, "Math");
        assert_eq!(cleaned.questions[0].text, "2+2?");
        assert_eq!(cleaned.questions[0].options, vec!["3", "4"]);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut draft = draft_with(vec![question("2+2?", &["3", "4"], "4")]);
        draft.title = "   ".to_string();
        assert_eq!(draft.cleaned(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn zero_questions_rejected() {
        assert_eq!(draft_with(Vec::new()).cleaned(), Err(ValidationError::NoQuestions));
    }

    #[test]
    fn empty_question_text_rejected_with_number() {
        let draft = draft_with(vec![
            question("2+2?", &["3", "4"], "4"),
            question("  ", &["a", "b"], "a"),
        ]);
        assert_eq!(draft.cleaned(), Err(ValidationError::EmptyQuestionText(2)));
    }

    #[test]
    fn duplicate_options_collapse_below_minimum() {
        let draft = draft_with(vec![question("Pick", &["A", "A"], "A")]);
        assert_eq!(draft.cleaned(), Err(ValidationError::TooFewOptions(1)));
    }

    #[test]
    fn duplicate_options_collapse_but_enough_remain() {
        let draft = draft_with(vec![question("Pick", &["A", "A", "B"], "A")]);
        let cleaned = draft.cleaned().unwrap();
        assert_eq!(cleaned.questions[0].options, vec!["A", "B"]);
    }

    #[test]
    fn empty_options_are_dropped_before_counting() {
        let draft = draft_with(vec![question("Pick", &["A", "", "  "], "A")]);
        assert_eq!(draft.cleaned(), Err(ValidationError::TooFewOptions(1)));
    }

    #[test]
    fn missing_correct_answer_rejected() {
        let draft = draft_with(vec![question("Pick", &["A", "B"], "  ")]);
        assert_eq!(draft.cleaned(), Err(ValidationError::MissingCorrectAnswer(1)));
    }

    #[test]
    fn correct_answer_must_be_an_option() {
        let draft = draft_with(vec![question("Pick", &["A", "B"], "C")]);
        assert_eq!(draft.cleaned(), Err(ValidationError::CorrectAnswerNotAnOption(1)));
    }

    #[test]
    fn draft_serializes_title_key() {
        let draft = draft_with(vec![question("Pick", &["A", "B"], "A")]);
        let json = serde_json::to_string(&draft.cleaned().unwrap()).unwrap();
        assert!(json.contains("\"title\":\"Sample\""));
        assert!(json.contains("\"correctAnswer\":\"A\""));
        assert!(!json.contains("\"name\""));
    }
}
