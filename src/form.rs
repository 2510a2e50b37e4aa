//! Authoring form state.
//!
//! Mirrors the three-step wizard flow: quiz details, question list, then
//! review-and-submit. Questions are composed in a nested editor with its
//! own three steps (text, options, correct answer). The same form backs
//! both creation and editing; editing replaces the whole question list.

use crate::models::{Question, Quiz, QuizDraft};

/// Number of option input slots offered per question. Empty slots are
/// dropped at submission, so fewer options are allowed.
pub const OPTION_SLOTS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStep {
    #[default]
    Details,
    Questions,
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorStep {
    Text,
    Options,
    Correct,
}

/// In-progress question inside the form.
#[derive(Debug)]
pub struct QuestionEditor {
    pub step: EditorStep,
    pub text: String,
    pub options: [String; OPTION_SLOTS],
    /// Focused option slot on the options step.
    pub field: usize,
    /// Highlighted candidate on the correct-answer step.
    pub correct: usize,
}

impl QuestionEditor {
    pub fn new() -> Self {
        Self {
            step: EditorStep::Text,
            text: String::new(),
            options: Default::default(),
            field: 0,
            correct: 0,
        }
    }

    /// Non-empty options, trimmed, in slot order. Candidates for the
    /// correct answer.
    pub fn filled_options(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .map(|o| o.to_string())
            .collect()
    }

    /// Whether the current step has enough input to move on.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            EditorStep::Text => !self.text.trim().is_empty(),
            EditorStep::Options => self.filled_options().len() >= 2,
            EditorStep::Correct => self.correct < self.filled_options().len(),
        }
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % OPTION_SLOTS;
    }

    pub fn previous_field(&mut self) {
        self.field = (self.field + OPTION_SLOTS - 1) % OPTION_SLOTS;
    }

    pub fn select_next(&mut self) {
        let candidates = self.filled_options().len();
        if candidates > 0 {
            self.correct = (self.correct + 1) % candidates;
        }
    }

    pub fn select_previous(&mut self) {
        let candidates = self.filled_options().len();
        if candidates > 0 {
            self.correct = (self.correct + candidates - 1) % candidates;
        }
    }

    pub fn push_char(&mut self, c: char) {
        match self.step {
            EditorStep::Text => self.text.push(c),
            EditorStep::Options => self.options[self.field].push(c),
            EditorStep::Correct => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.step {
            EditorStep::Text => {
                self.text.pop();
            }
            EditorStep::Options => {
                self.options[self.field].pop();
            }
            EditorStep::Correct => {}
        }
    }

    /// Assemble the finished question; `None` until every step has valid
    /// input.
    pub fn finish(&self) -> Option<Question> {
        let text = self.text.trim().to_string();
        if text.is_empty() {
            return None;
        }
        let options = self.filled_options();
        let correct_answer = options.get(self.correct)?.clone();
        if options.len() < 2 {
            return None;
        }
        Some(Question {
            text,
            options,
            correct_answer,
        })
    }
}

impl Default for QuestionEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// State of the add/edit quiz form.
#[derive(Debug, Default)]
pub struct QuizForm {
    /// `Some` when editing an existing quiz (submits a PATCH).
    pub quiz_id: Option<String>,
    pub step: FormStep,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    /// Focused field on the details step: 0 = title, 1 = description.
    pub field: usize,
    /// Cursor in the question list.
    pub selected: usize,
    pub editor: Option<QuestionEditor>,
}

impl QuizForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled form for editing `quiz`.
    pub fn edit(quiz: &Quiz) -> Self {
        Self {
            quiz_id: Some(quiz.id.clone()),
            title: quiz.title().to_string(),
            description: quiz.description.clone(),
            questions: quiz.questions.clone(),
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.quiz_id.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() {
            "EDIT QUIZ"
        } else {
            "CREATE NEW QUIZ"
        }
    }

    /// Both detail fields are required before moving to questions.
    pub fn details_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % 2;
    }

    pub fn push_char(&mut self, c: char) {
        if self.field == 0 {
            self.title.push(c);
        } else {
            self.description.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.field == 0 {
            self.title.pop();
        } else {
            self.description.pop();
        }
    }

    pub fn select_next_question(&mut self) {
        if !self.questions.is_empty() {
            self.selected = (self.selected + 1).min(self.questions.len() - 1);
        }
    }

    pub fn select_previous_question(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn remove_selected_question(&mut self) {
        if self.selected < self.questions.len() {
            self.questions.remove(self.selected);
            if self.selected > 0 && self.selected >= self.questions.len() {
                self.selected -= 1;
            }
        }
    }

    /// Fold a finished editor back into the question list.
    pub fn take_finished_question(&mut self) {
        if let Some(question) = self.editor.as_ref().and_then(QuestionEditor::finish) {
            self.questions.push(question);
            self.editor = None;
        }
    }

    /// The payload this form would submit. Cleaning and validation happen
    /// in [`QuizDraft::cleaned`].
    pub fn draft(&self) -> QuizDraft {
        QuizDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            questions: self.questions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(text: &str, options: [&str; OPTION_SLOTS], correct: usize) -> QuestionEditor {
        QuestionEditor {
            step: EditorStep::Correct,
            text: text.to_string(),
            options: options.map(|o| o.to_string()),
            field: 0,
            correct,
        }
    }

    #[test]
    fn editor_steps_gate_on_input() {
        let mut editor = QuestionEditor::new();
        assert!(!editor.can_proceed());
        editor.push_char('2');
        assert!(editor.can_proceed());

        editor.step = EditorStep::Options;
        assert!(!editor.can_proceed());
        editor.options[0] = "3".to_string();
        assert!(!editor.can_proceed());
        editor.options[2] = "4".to_string();
        assert!(editor.can_proceed());
    }

    #[test]
    fn editor_skips_empty_option_slots() {
        let editor = editor_with("2+2?", ["3", "", "4", " "], 1);
        assert_eq!(editor.filled_options(), vec!["3", "4"]);
        let question = editor.finish().unwrap();
        assert_eq!(question.correct_answer, "4");
    }

    #[test]
    fn editor_finish_requires_two_options() {
        let editor = editor_with("2+2?", ["4", "", "", ""], 0);
        assert!(editor.finish().is_none());
    }

    #[test]
    fn correct_answer_selection_wraps_over_candidates() {
        let mut editor = editor_with("2+2?", ["3", "4", "", ""], 0);
        editor.select_next();
        assert_eq!(editor.correct, 1);
        editor.select_next();
        assert_eq!(editor.correct, 0);
        editor.select_previous();
        assert_eq!(editor.correct, 1);
    }

    #[test]
    fn form_collects_finished_questions() {
        let mut form = QuizForm::new();
        form.editor = Some(editor_with("2+2?", ["3", "4", "", ""], 1));
        form.take_finished_question();
        assert!(form.editor.is_none());
        assert_eq!(form.questions.len(), 1);
        assert_eq!(form.questions[0].correct_answer, "4");
    }

    #[test]
    fn unfinished_editor_is_kept_open() {
        let mut form = QuizForm::new();
        form.editor = Some(QuestionEditor::new());
        form.take_finished_question();
        assert!(form.editor.is_some());
        assert!(form.questions.is_empty());
    }

    #[test]
    fn remove_keeps_cursor_in_bounds() {
        let mut form = QuizForm::new();
        form.editor = Some(editor_with("a?", ["x", "y", "", ""], 0));
        form.take_finished_question();
        form.editor = Some(editor_with("b?", ["x", "y", "", ""], 0));
        form.take_finished_question();

        form.selected = 1;
        form.remove_selected_question();
        assert_eq!(form.questions.len(), 1);
        assert_eq!(form.selected, 0);
    }

    #[test]
    fn details_require_title_and_description() {
        let mut form = QuizForm::new();
        assert!(!form.details_complete());
        form.title = "Math".to_string();
        assert!(!form.details_complete());
        form.next_field();
        for c in "Numbers".chars() {
            form.push_char(c);
        }
        assert!(form.details_complete());
        assert_eq!(form.description, "Numbers");
    }
}
