mod browse;
mod form;
mod player;
mod preview;
mod summary;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, NoticeKind, View};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);
    let body = chunks[0];

    match &app.view {
        View::Browse => browse::render(frame, body, app),
        View::ConfirmDelete => {
            browse::render(frame, body, app);
            browse::render_delete_confirm(frame, body, app);
        }
        View::Preview => preview::render(frame, body, app),
        View::Player => {
            if app.session.is_completed() {
                summary::render(frame, body, app);
            } else {
                player::render(frame, body, app);
            }
        }
        View::Form(state) => form::render(frame, body, state, app.pending),
    }

    render_status_line(frame, chunks[1], app);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Info => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let widget = ratatui::widgets::Paragraph::new(notice.text.as_str())
        .alignment(Alignment::Center)
        .fg(color);
    frame.render_widget(widget, area);
}

/// A fixed-size rect centered in `area`, clamped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// First 10 characters of an ISO timestamp (the date part).
fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}
