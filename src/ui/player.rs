use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], chunks[1], app);
    render_question_text(frame, chunks[3], &question.text);
    render_options(frame, chunks[4], app, &question.options);
    render_controls(frame, chunks[5], app);
}

fn render_progress(frame: &mut Frame, label_area: Rect, gauge_area: Rect, app: &App) {
    let number = app.session.current_index() + 1;
    let total = app.session.total_questions();
    let ratio = number as f64 / total as f64;

    let label = Paragraph::new(format!(
        "Question {} of {}   {:.0}%",
        number,
        total,
        ratio * 100.0
    ))
    .fg(Color::DarkGray);
    frame.render_widget(label, label_area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, gauge_area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, options: &[String]) {
    let chosen = app.session.current_answer();
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_highlighted = index == app.highlight;
        let is_chosen = chosen == Some(option.as_str());

        let style = if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else if is_chosen {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_highlighted { ">" } else { " " };
        let chosen_mark = if is_chosen { " ●" } else { "" };
        let label = (b'A' + index as u8) as char;

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
            Span::styled(chosen_mark, Style::default().fg(Color::Green)),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let answered = app.session.current_answer().is_some();
    let text = if app.session.is_last_question() && answered {
        "j/k highlight  ·  enter answer  ·  h back  ·  f finish quiz  ·  esc close"
    } else if answered {
        "j/k highlight  ·  enter answer  ·  h/l prev/next  ·  esc close"
    } else {
        "j/k highlight  ·  enter answer  ·  esc close"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
