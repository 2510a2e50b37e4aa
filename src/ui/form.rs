use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::form::{EditorStep, FormStep, QuestionEditor, QuizForm};

use super::centered;

pub fn render(frame: &mut Frame, area: Rect, form: &QuizForm, pending: bool) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], form);

    match form.step {
        FormStep::Details => render_details(frame, chunks[1], form),
        FormStep::Questions => render_questions(frame, chunks[1], form),
        FormStep::Review => render_review(frame, chunks[1], form, pending),
    }

    render_controls(frame, chunks[2], form, pending);

    if let Some(editor) = &form.editor {
        render_editor(frame, area, editor);
    }
}

fn render_header(frame: &mut Frame, area: Rect, form: &QuizForm) {
    let caption = match form.step {
        FormStep::Details => "Step 1: Enter Quiz Details",
        FormStep::Questions => "Step 2: Add Questions",
        FormStep::Review => "Step 3: Review and Submit",
    };
    let line = Line::from(vec![
        Span::styled(form.heading(), Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        Span::styled(caption, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn input_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if focused { ">" } else { " " };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!(" {} ", marker), style),
        Span::styled(format!("{:<13}", format!("{}:", label)), style),
        Span::styled(format!("{}{}", value, cursor), Style::default().fg(Color::White)),
    ])
}

fn render_details(frame: &mut Frame, area: Rect, form: &QuizForm) {
    let lines = vec![
        Line::from(""),
        input_line("Title", &form.title, form.field == 0),
        Line::from(""),
        input_line("Description", &form.description, form.field == 1),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_questions(frame: &mut Frame, area: Rect, form: &QuizForm) {
    if form.questions.is_empty() {
        let widget = Paragraph::new("No questions yet · press a to add one")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let lines: Vec<Line> = form
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let is_selected = index == form.selected;
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };
            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("Q{}: ", index + 1), style),
                Span::styled(question.text.clone(), style),
                Span::styled(
                    format!("  ({} options)", question.options.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_review(frame: &mut Frame, area: Rect, form: &QuizForm, pending: bool) {
    let mut lines = vec![
        Line::from(""),
        review_line("Title", form.title.trim().to_string()),
        review_line("Description", form.description.trim().to_string()),
        review_line("Total Questions", form.questions.len().to_string()),
    ];
    if pending {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            if form.is_edit() { "Updating Quiz..." } else { "Adding Quiz..." },
            Style::default().fg(Color::Yellow),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn review_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("   {:<17}", format!("{}:", label)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn render_controls(frame: &mut Frame, area: Rect, form: &QuizForm, pending: bool) {
    let text = if form.editor.is_some() {
        ""
    } else {
        match form.step {
            FormStep::Details => "tab switch field  ·  enter next  ·  esc cancel",
            FormStep::Questions => {
                "a add question  ·  d remove  ·  j/k navigate  ·  enter review  ·  esc back"
            }
            FormStep::Review => {
                if pending {
                    "esc back"
                } else if form.is_edit() {
                    "enter update quiz  ·  esc back"
                } else {
                    "enter submit quiz  ·  esc back"
                }
            }
        }
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_editor(frame: &mut Frame, area: Rect, editor: &QuestionEditor) {
    let popup = centered(area, 60, 14);
    frame.render_widget(Clear, popup);

    let caption = match editor.step {
        EditorStep::Text => "Step 1: Question",
        EditorStep::Options => "Step 2: Options",
        EditorStep::Correct => "Step 3: Correct Answer",
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "ADD NEW QUESTION",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(caption, Style::default().fg(Color::DarkGray))),
        Line::from(""),
    ];

    match editor.step {
        EditorStep::Text => {
            lines.push(input_line("Question", &editor.text, true));
        }
        EditorStep::Options => {
            for (index, option) in editor.options.iter().enumerate() {
                lines.push(input_line(
                    &format!("Option {}", index + 1),
                    option,
                    index == editor.field,
                ));
            }
        }
        EditorStep::Correct => {
            for (index, option) in editor.filled_options().iter().enumerate() {
                let is_highlighted = index == editor.correct;
                let style = if is_highlighted {
                    Style::default().fg(Color::Green).bold()
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_highlighted { ">" } else { " " };
                lines.push(Line::from(vec![
                    Span::styled(format!(" {} ", marker), style),
                    Span::styled(option.clone(), style),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    let controls = match editor.step {
        EditorStep::Text => "enter next  ·  esc cancel",
        EditorStep::Options => "tab next field  ·  enter next  ·  esc back",
        EditorStep::Correct => "j/k highlight  ·  enter add question  ·  esc back",
    };
    lines.push(Line::from(Span::styled(
        controls,
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::new(1, 1, 0, 0)),
    );
    frame.render_widget(widget, popup);
}
