//! Application state and request coordination.
//!
//! The UI loop owns one `App`. Repository calls are spawned as tokio
//! tasks; their results come back over the event channel and are applied
//! between renders, so every state mutation happens on the UI thread.

use tokio::sync::mpsc;

use crate::api::{ApiEvent, QuizApi};
use crate::form::QuizForm;
use crate::models::Quiz;
use crate::session::Session;

/// Which screen is showing.
#[derive(Debug)]
pub enum View {
    /// Quiz list.
    Browse,
    /// Metadata of the selected quiz, pre-start.
    Preview,
    /// An active (or just-completed) session.
    Player,
    /// Add/edit wizard.
    Form(QuizForm),
    /// Delete confirmation for the selected quiz.
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line status message, the terminal stand-in for a toast.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

pub struct App {
    pub view: View,
    pub quizzes: Vec<Quiz>,
    /// Cursor in the browse list.
    pub selected: usize,
    /// A `list()` call is in flight.
    pub loading: bool,
    /// A mutation is in flight; submit/delete keys are ignored until it
    /// resolves, so a double press cannot issue two requests.
    pub pending: bool,
    pub session: Session,
    /// Highlighted option in the player view.
    pub highlight: usize,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    api: QuizApi,
    events: mpsc::UnboundedSender<ApiEvent>,
}

impl App {
    pub fn new(api: QuizApi, events: mpsc::UnboundedSender<ApiEvent>) -> Self {
        Self {
            view: View::Browse,
            quizzes: Vec::new(),
            selected: 0,
            loading: false,
            pending: false,
            session: Session::new(),
            highlight: 0,
            notice: None,
            should_quit: false,
            api,
            events,
        }
    }

    pub fn selected_quiz(&self) -> Option<&Quiz> {
        self.quizzes.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.quizzes.is_empty() {
            self.selected = (self.selected + 1).min(self.quizzes.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn notify_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind: NoticeKind::Info,
        });
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind: NoticeKind::Error,
        });
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Re-fetch the quiz list.
    pub fn refresh(&mut self) {
        self.loading = true;
        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let _ = events.send(ApiEvent::Listed(api.list().await));
        });
    }

    /// Validate the open form and submit it (POST for a new quiz, PATCH
    /// when editing). Validation failures keep the form open.
    pub fn submit_form(&mut self) {
        if self.pending {
            return;
        }
        let View::Form(form) = &self.view else {
            return;
        };
        let draft = match form.draft().cleaned() {
            Ok(draft) => draft,
            Err(err) => {
                let message = err.to_string();
                self.notify_error(message);
                return;
            }
        };

        self.pending = true;
        let quiz_id = match &self.view {
            View::Form(form) => form.quiz_id.clone(),
            _ => None,
        };
        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let event = match quiz_id {
                Some(id) => ApiEvent::Updated(api.update(&id, &draft).await),
                None => ApiEvent::Created(api.create(&draft).await),
            };
            let _ = events.send(event);
        });
    }

    /// Delete the quiz under the cursor.
    pub fn delete_selected(&mut self) {
        if self.pending {
            return;
        }
        let Some(quiz) = self.selected_quiz() else {
            return;
        };
        let id = quiz.id.clone();
        let title = quiz.title().to_string();
        self.pending = true;
        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let _ = events.send(ApiEvent::Deleted(api.delete(&id).await.map(|()| title)));
        });
    }

    /// Apply one repository result. Successful mutations invalidate the
    /// cached list by triggering a fresh fetch.
    pub fn apply(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Listed(Ok(quizzes)) => {
                self.loading = false;
                self.quizzes = quizzes;
                if self.selected >= self.quizzes.len() {
                    self.selected = self.quizzes.len().saturating_sub(1);
                }
            }
            ApiEvent::Listed(Err(err)) => {
                self.loading = false;
                self.notify_error(format!("Failed to load quizzes: {}", err));
            }
            ApiEvent::Created(Ok(quiz)) => {
                self.pending = false;
                self.notify_info(format!("\"{}\" has been created.", quiz.title()));
                self.view = View::Browse;
                self.refresh();
            }
            ApiEvent::Created(Err(err)) => {
                self.pending = false;
                self.notify_error(format!("Failed to add quiz: {}", err));
            }
            ApiEvent::Updated(Ok(quiz)) => {
                self.pending = false;
                self.notify_info(format!("\"{}\" has been updated.", quiz.title()));
                self.view = View::Browse;
                self.refresh();
            }
            ApiEvent::Updated(Err(err)) => {
                self.pending = false;
                self.notify_error(format!("Failed to update quiz: {}", err));
            }
            ApiEvent::Deleted(Ok(title)) => {
                self.pending = false;
                self.notify_info(format!("\"{}\" has been deleted.", title));
                self.refresh();
            }
            ApiEvent::Deleted(Err(err)) => {
                self.pending = false;
                self.notify_error(format!("Failed to delete quiz: {}", err));
            }
        }
    }

    /// Start playing the selected quiz. Stays on the preview with an
    /// error notice if the quiz has no questions.
    pub fn start_session(&mut self) {
        let questions = match self.selected_quiz() {
            Some(quiz) => quiz.questions.clone(),
            None => return,
        };
        match self.session.start(questions) {
            Ok(()) => {
                self.highlight = 0;
                self.view = View::Player;
            }
            Err(err) => {
                let message = err.to_string();
                self.notify_error(message);
            }
        }
    }

    /// Record the highlighted option as the answer for the active question.
    pub fn record_highlighted_answer(&mut self) {
        let Some(option) = self
            .session
            .current_question()
            .and_then(|q| q.options.get(self.highlight))
            .cloned()
        else {
            return;
        };
        let index = self.session.current_index();
        if let Err(err) = self.session.select_answer(index, option) {
            let message = err.to_string();
            self.notify_error(message);
        }
    }

    /// Move the player to an adjacent question and put the highlight on
    /// the answer already recorded there, if any.
    pub fn navigate_session(&mut self, forward: bool) {
        if forward {
            // Answer-gating is a view policy; the session itself would
            // allow an unanswered advance.
            if self.session.current_answer().is_none() {
                return;
            }
            self.session.advance();
        } else {
            self.session.retreat();
        }
        self.sync_highlight();
    }

    fn sync_highlight(&mut self) {
        let answered = self.session.current_answer().and_then(|answer| {
            self.session
                .current_question()
                .and_then(|q| q.options.iter().position(|o| o == answer))
        });
        self.highlight = answered.unwrap_or(0);
    }

    pub fn highlight_next(&mut self) {
        if let Some(question) = self.session.current_question() {
            self.highlight = (self.highlight + 1) % question.options.len();
        }
    }

    pub fn highlight_previous(&mut self) {
        if let Some(question) = self.session.current_question() {
            let len = question.options.len();
            self.highlight = (self.highlight + len - 1) % len;
        }
    }

    /// Close the player and discard the session.
    pub fn close_player(&mut self) {
        self.session.clear();
        self.view = View::Browse;
    }
}
