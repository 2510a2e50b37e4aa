//! Quiz session state machine.
//!
//! Tracks a user's progress through one quiz: which question is active,
//! which answers have been recorded, and whether the run is finished.
//! The score is always derived from the recorded answers, never stored.

use crate::models::Question;

/// Error type for session misuse.
///
/// These are contract violations by the caller, not user-recoverable
/// conditions. The UI never triggers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// `start` was called with an empty question list.
    NoQuestions,
    /// An answer was recorded for a question index that does not exist.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NoQuestions => write!(f, "Cannot start a session without questions"),
            SessionError::IndexOutOfRange { index, len } => {
                write!(f, "Question index {} out of range (0..{})", index, len)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No questions loaded.
    Empty,
    /// Questions loaded, user answering.
    Active,
    /// Terminal: the user finished the run. Only `start` or `clear`
    /// leave this phase.
    Completed,
}

/// Derived score for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.correct as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// One quiz run.
///
/// Invariant: `current_index < questions.len()` whenever questions are
/// loaded, and `answers.len() == questions.len()` at all times.
#[derive(Debug, Default)]
pub struct Session {
    questions: Vec<Question>,
    current_index: usize,
    answers: Vec<Option<String>>,
    completed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run over `questions`, discarding any previous run.
    pub fn start(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        self.answers = vec![None; questions.len()];
        self.questions = questions;
        self.current_index = 0;
        self.completed = false;
        Ok(())
    }

    /// Drop all session state, returning to `Phase::Empty`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> Phase {
        if self.questions.is_empty() {
            Phase::Empty
        } else if self.completed {
            Phase::Completed
        } else {
            Phase::Active
        }
    }

    /// Record the user's answer for question `index`, overwriting any
    /// earlier choice. Revision is allowed even after completion.
    pub fn select_answer(
        &mut self,
        index: usize,
        answer: impl Into<String>,
    ) -> Result<(), SessionError> {
        if index >= self.questions.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        self.answers[index] = Some(answer.into());
        Ok(())
    }

    /// Move to the next question. No-op at the last question (completion
    /// is explicit via `complete`) and outside `Phase::Active`. Whether
    /// the current question must be answered first is the caller's policy.
    pub fn advance(&mut self) {
        if self.phase() != Phase::Active {
            return;
        }
        if self.current_index < self.questions.len() - 1 {
            self.current_index += 1;
        }
    }

    /// Move to the previous question. No-op at index 0 and in `Phase::Empty`.
    pub fn retreat(&mut self) {
        if self.phase() == Phase::Empty {
            return;
        }
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Mark the run as finished. Idempotent; no-op unless `Phase::Active`.
    pub fn complete(&mut self) {
        if self.phase() == Phase::Active {
            self.completed = true;
        }
    }

    /// Count of recorded answers matching their question's correct answer.
    pub fn score(&self) -> Score {
        let correct = self
            .answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| answer.as_deref() == Some(question.correct_answer.as_str()))
            .count();
        Score {
            correct,
            total: self.questions.len(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.answer(self.current_index)
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).and_then(|a| a.as_deref())
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index == self.questions.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, options: &[&str], correct: &str) -> Question {
        Question {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    fn sample_questions() -> Vec<Question> {
        vec![
            question("2+2?", &["3", "4", "5"], "4"),
            question("Capital of France?", &["Paris", "Rome"], "Paris"),
        ]
    }

    #[test]
    fn start_resets_all_fields() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();
        session.select_answer(0, "4").unwrap();
        session.advance();
        session.complete();

        session.start(sample_questions()).unwrap();
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_completed());
        assert_eq!(session.answers(), &[None, None]);
    }

    #[test]
    fn start_rejects_empty_questions() {
        let mut session = Session::new();
        assert_eq!(session.start(Vec::new()), Err(SessionError::NoQuestions));
        assert_eq!(session.phase(), Phase::Empty);
    }

    #[test]
    fn advance_and_retreat_clamp_at_boundaries() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();

        session.retreat();
        assert_eq!(session.current_index(), 0);

        session.advance();
        assert_eq!(session.current_index(), 1);
        session.advance();
        assert_eq!(session.current_index(), 1);

        session.retreat();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn advance_then_retreat_restores_index() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();
        let before = session.current_index();
        session.advance();
        session.retreat();
        assert_eq!(session.current_index(), before);
    }

    #[test]
    fn reselecting_overwrites_previous_answer() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();
        session.select_answer(0, "3").unwrap();
        session.select_answer(0, "4").unwrap();
        assert_eq!(session.answer(0), Some("4"));
        assert_eq!(session.score(), Score { correct: 1, total: 2 });
    }

    #[test]
    fn score_counts_only_matching_answers() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();
        session.select_answer(0, "5").unwrap();
        assert_eq!(session.score(), Score { correct: 0, total: 2 });
        session.select_answer(0, "4").unwrap();
        assert_eq!(session.score(), Score { correct: 1, total: 2 });
    }

    #[test]
    fn score_is_invariant_under_navigation() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();
        session.select_answer(0, "4").unwrap();
        let before = session.score();
        session.advance();
        session.retreat();
        session.advance();
        assert_eq!(session.score(), before);
        assert_eq!(session.answer(0), Some("4"));
    }

    #[test]
    fn complete_is_idempotent() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();
        session.select_answer(0, "4").unwrap();
        session.complete();
        let index = session.current_index();
        let score = session.score();
        session.complete();
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.current_index(), index);
        assert_eq!(session.score(), score);
    }

    #[test]
    fn completed_session_blocks_advance_but_not_retreat() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();
        session.advance();
        session.complete();

        session.advance();
        assert_eq!(session.current_index(), 1);
        session.retreat();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn answers_may_be_revised_after_completion() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();
        session.complete();
        session.select_answer(1, "Paris").unwrap();
        assert_eq!(session.score(), Score { correct: 1, total: 2 });
    }

    #[test]
    fn full_run_scores_one_of_two() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();
        session.select_answer(0, "4").unwrap();
        session.advance();
        session.select_answer(1, "Rome").unwrap();
        session.complete();
        assert_eq!(session.score(), Score { correct: 1, total: 2 });
    }

    #[test]
    fn out_of_range_answer_fails_and_leaves_answers_unchanged() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();
        session.select_answer(0, "4").unwrap();

        let err = session.select_answer(5, "x").unwrap_err();
        assert_eq!(err, SessionError::IndexOutOfRange { index: 5, len: 2 });
        assert_eq!(session.answers(), &[Some("4".to_string()), None]);
    }

    #[test]
    fn clear_returns_to_empty() {
        let mut session = Session::new();
        session.start(sample_questions()).unwrap();
        session.select_answer(0, "4").unwrap();
        session.clear();
        assert_eq!(session.phase(), Phase::Empty);
        assert_eq!(session.total_questions(), 0);
        assert_eq!(session.score(), Score { correct: 0, total: 0 });
    }

    #[test]
    fn score_percentage_handles_empty_session() {
        let session = Session::new();
        assert_eq!(session.score().percentage(), 0.0);
    }
}
