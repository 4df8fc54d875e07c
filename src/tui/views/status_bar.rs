//! Status bar view
//!
//! Shows the status message, or the newest undo confirmation, and key hints

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::widgets::NotificationWidget;

const HINTS: &str = " Enter:Record  u:Undo  d:Date  r:Report  ?:Help  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(HINTS.len() as u16),
        ])
        .split(area);

    let message = app
        .status_message
        .as_ref()
        .or_else(|| app.screen.host().newest_confirmation());
    if let Some(notification) = message {
        frame.render_widget(NotificationWidget::new(notification, now), chunks[0]);
    }

    frame.render_widget(
        Paragraph::new(HINTS).style(Style::default().fg(Color::White)),
        chunks[1],
    );
}
