//! # quizdesk
//!
//! A terminal client for a quiz CRUD API: browse, author, edit, delete
//! and take quizzes, with a final score summary per run.
//!
//! ## Usage
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     // Point at the quiz API and run the TUI until the user quits.
//!     quizdesk::run("http://localhost:5000/api").await
//! }
//! ```

mod api;
mod app;
mod form;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use app::View;
use form::{EditorStep, FormStep, QuestionEditor, QuizForm};

pub use api::{ApiError, ApiEvent, QuizApi};
pub use app::App;
pub use models::{Question, Quiz, QuizDraft, ValidationError};
pub use session::{Phase, Score, Session, SessionError};

/// Run the quizdesk TUI against the API at `api_url`.
///
/// Takes over the terminal and returns when the user quits.
pub async fn run(api_url: impl Into<String>) -> io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(QuizApi::new(api_url), tx);
    app.refresh();

    let mut terminal = terminal::init()?;
    let result = run_event_loop(&mut terminal, &mut app, &mut rx);
    terminal::restore()?;
    result
}

fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<ApiEvent>,
) -> io::Result<()> {
    loop {
        // Apply finished API calls before drawing.
        while let Ok(api_event) = rx.try_recv() {
            app.apply(api_event);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        // Short poll so channel events keep flowing while idle.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_input(app, key.code) {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    // Notices live until the next keypress, like a toast timing out.
    app.clear_notice();

    match &app.view {
        View::Browse => handle_browse_input(app, key),
        View::Preview => handle_preview_input(app, key),
        View::Player => {
            if app.session.is_completed() {
                handle_summary_input(app, key)
            } else {
                handle_player_input(app, key)
            }
        }
        View::Form(_) => handle_form_input(app, key),
        View::ConfirmDelete => handle_confirm_input(app, key),
    }
}

fn handle_browse_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => {
            if app.selected_quiz().is_some() {
                app.view = View::Preview;
            }
        }
        KeyCode::Char('a') => app.view = View::Form(QuizForm::new()),
        KeyCode::Char('e') => {
            if let Some(quiz) = app.selected_quiz() {
                app.view = View::Form(QuizForm::edit(quiz));
            }
        }
        KeyCode::Char('d') => {
            if app.selected_quiz().is_some() {
                app.view = View::ConfirmDelete;
            }
        }
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_preview_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => app.start_session(),
        KeyCode::Esc | KeyCode::Char('q') => app.view = View::Browse,
        _ => {}
    }
    false
}

fn handle_player_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.highlight_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.highlight_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.record_highlighted_answer(),
        KeyCode::Left | KeyCode::Char('h') => app.navigate_session(false),
        KeyCode::Right | KeyCode::Char('l') => app.navigate_session(true),
        KeyCode::Char('f') => {
            // Completing requires being on the last question with an
            // answer recorded; the session itself only checks phase.
            if app.session.is_last_question() && app.session.current_answer().is_some() {
                app.session.complete();
            }
        }
        KeyCode::Esc => app.close_player(),
        _ => {}
    }
    false
}

fn handle_summary_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
        app.close_player();
    }
    false
}

fn handle_confirm_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.delete_selected();
            app.view = View::Browse;
        }
        KeyCode::Char('n') | KeyCode::Esc => app.view = View::Browse,
        _ => {}
    }
    false
}

fn handle_form_input(app: &mut App, key: KeyCode) -> bool {
    let View::Form(form) = &mut app.view else {
        return false;
    };

    if form.editor.is_some() {
        handle_editor_input(form, key);
        return false;
    }

    match form.step {
        FormStep::Details => match key {
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => form.next_field(),
            KeyCode::Char(c) => form.push_char(c),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Enter => {
                if form.details_complete() {
                    form.step = FormStep::Questions;
                }
            }
            KeyCode::Esc => app.view = View::Browse,
            _ => {}
        },
        FormStep::Questions => match key {
            KeyCode::Char('a') => form.editor = Some(QuestionEditor::new()),
            KeyCode::Char('d') => form.remove_selected_question(),
            KeyCode::Up | KeyCode::Char('k') => form.select_previous_question(),
            KeyCode::Down | KeyCode::Char('j') => form.select_next_question(),
            KeyCode::Enter => {
                if !form.questions.is_empty() {
                    form.step = FormStep::Review;
                }
            }
            KeyCode::Esc => form.step = FormStep::Details,
            _ => {}
        },
        FormStep::Review => match key {
            KeyCode::Enter => app.submit_form(),
            KeyCode::Esc => form.step = FormStep::Questions,
            _ => {}
        },
    }

    false
}

fn handle_editor_input(form: &mut QuizForm, key: KeyCode) {
    let Some(editor) = &mut form.editor else {
        return;
    };

    match key {
        KeyCode::Esc => match editor.step {
            EditorStep::Text => form.editor = None,
            EditorStep::Options => editor.step = EditorStep::Text,
            EditorStep::Correct => editor.step = EditorStep::Options,
        },
        KeyCode::Enter => match editor.step {
            EditorStep::Text => {
                if editor.can_proceed() {
                    editor.step = EditorStep::Options;
                }
            }
            EditorStep::Options => {
                if editor.can_proceed() {
                    editor.correct = 0;
                    editor.step = EditorStep::Correct;
                }
            }
            EditorStep::Correct => form.take_finished_question(),
        },
        KeyCode::Tab => {
            if editor.step == EditorStep::Options {
                editor.next_field();
            }
        }
        KeyCode::Down => match editor.step {
            EditorStep::Options => editor.next_field(),
            EditorStep::Correct => editor.select_next(),
            EditorStep::Text => {}
        },
        KeyCode::Up => match editor.step {
            EditorStep::Options => editor.previous_field(),
            EditorStep::Correct => editor.select_previous(),
            EditorStep::Text => {}
        },
        KeyCode::Char(c) => match editor.step {
            EditorStep::Correct => match c {
                'j' => editor.select_next(),
                'k' => editor.select_previous(),
                _ => {}
            },
            _ => editor.push_char(c),
        },
        KeyCode::Backspace => editor.pop_char(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        // The receiver is dropped; spawned sends are discarded, which is
        // fine for input-routing tests.
        App::new(QuizApi::new("http://localhost:5000/api"), tx)
    }

    #[test]
    fn quit_only_from_browse() {
        let mut app = test_app();
        assert!(handle_input(&mut app, KeyCode::Char('q')));

        let mut app = test_app();
        app.view = View::Form(QuizForm::new());
        assert!(!handle_input(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn typing_fills_the_focused_details_field() {
        let mut app = test_app();
        app.view = View::Form(QuizForm::new());
        for c in "Math".chars() {
            handle_input(&mut app, KeyCode::Char(c));
        }
        handle_input(&mut app, KeyCode::Tab);
        for c in "Numbers".chars() {
            handle_input(&mut app, KeyCode::Char(c));
        }

        let View::Form(form) = &app.view else {
            panic!("expected form view");
        };
        assert_eq!(form.title, "Math");
        assert_eq!(form.description, "Numbers");
    }

    #[test]
    fn details_enter_is_gated_on_both_fields() {
        let mut app = test_app();
        app.view = View::Form(QuizForm::new());
        handle_input(&mut app, KeyCode::Enter);
        let View::Form(form) = &app.view else {
            panic!("expected form view");
        };
        assert_eq!(form.step, FormStep::Details);
    }

    #[test]
    fn editor_round_trip_adds_a_question() {
        let mut app = test_app();
        let mut form = QuizForm::new();
        form.step = FormStep::Questions;
        app.view = View::Form(form);

        handle_input(&mut app, KeyCode::Char('a'));
        for c in "2+2?".chars() {
            handle_input(&mut app, KeyCode::Char(c));
        }
        handle_input(&mut app, KeyCode::Enter);
        for c in "3".chars() {
            handle_input(&mut app, KeyCode::Char(c));
        }
        handle_input(&mut app, KeyCode::Tab);
        for c in "4".chars() {
            handle_input(&mut app, KeyCode::Char(c));
        }
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Down); // highlight "4"
        handle_input(&mut app, KeyCode::Enter);

        let View::Form(form) = &app.view else {
            panic!("expected form view");
        };
        assert!(form.editor.is_none());
        assert_eq!(form.questions.len(), 1);
        assert_eq!(form.questions[0].correct_answer, "4");
    }

    #[test]
    fn escape_cancels_the_form_from_details() {
        let mut app = test_app();
        app.view = View::Form(QuizForm::new());
        handle_input(&mut app, KeyCode::Esc);
        assert!(matches!(app.view, View::Browse));
    }

    #[test]
    fn notice_is_cleared_on_next_keypress() {
        let mut app = test_app();
        app.notify_error("boom");
        handle_input(&mut app, KeyCode::Down);
        assert!(app.notice.is_none());
    }
}
