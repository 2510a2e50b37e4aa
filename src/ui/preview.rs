use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

use super::{centered, short_date};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(quiz) = app.selected_quiz() else {
        return;
    };

    let card = centered(area, 62, 13);

    let content = vec![
        Line::from(Span::styled(
            quiz.title().to_string(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            quiz.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        meta_line("Total Questions", quiz.questions.len().to_string()),
        meta_line("Created", short_date(&quiz.created_at).to_string()),
        meta_line("Last Updated", short_date(&quiz.updated_at).to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("ENTER", Style::default().fg(Color::Green).bold()),
            Span::raw(" start quiz  ·  "),
            Span::styled("ESC", Style::default().fg(Color::DarkGray).bold()),
            Span::raw(" cancel"),
        ]),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::new(2, 2, 1, 1)),
        );
    frame.render_widget(widget, card);
}

fn meta_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}
