use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;

use super::{centered, short_date};

const LINES_PER_CARD: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app);

    if app.loading && app.quizzes.is_empty() {
        render_placeholder(frame, chunks[1], "Loading quizzes...");
    } else if app.quizzes.is_empty() {
        render_placeholder(frame, chunks[1], "No quizzes yet · press a to create one");
    } else {
        render_cards(frame, chunks[1], app);
    }

    render_controls(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let count = format!("{} quizzes", app.quizzes.len());
    let line = Line::from(vec![
        Span::styled("QUIZDESK", Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        Span::styled(count, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, chunks[1]);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::with_capacity(app.quizzes.len() * LINES_PER_CARD);

    for (index, quiz) in app.quizzes.iter().enumerate() {
        let is_selected = index == app.selected;
        let marker = if is_selected { ">" } else { " " };
        let title_style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), title_style),
            Span::styled(quiz.title().to_string(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "    {} Questions · Created {} · Updated {}",
                quiz.questions.len(),
                short_date(&quiz.created_at),
                short_date(&quiz.updated_at),
            ),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", quiz.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    // Keep the selected card in view on long lists.
    let scroll = (app.selected.saturating_sub(2) * LINES_PER_CARD) as u16;
    let widget = Paragraph::new(lines).scroll((scroll, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "j/k navigate  ·  enter preview  ·  a add  ·  e edit  ·  d delete  ·  r refresh  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

pub fn render_delete_confirm(frame: &mut Frame, area: Rect, app: &App) {
    let title = app
        .selected_quiz()
        .map(|q| q.title().to_string())
        .unwrap_or_else(|| "Untitled Quiz".to_string());

    let popup = centered(area, 60, 9);
    frame.render_widget(Clear, popup);

    let content = vec![
        Line::from(Span::styled(
            "DELETE QUIZ?",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(format!(
            "This will permanently delete \"{}\" and all its questions.",
            title
        )),
        Line::from("This action cannot be undone.".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Red).bold()),
            Span::raw(" delete  ·  "),
            Span::styled("n", Style::default().fg(Color::Green).bold()),
            Span::raw(" cancel"),
        ]),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::Red)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, popup);
}
