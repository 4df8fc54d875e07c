//! Summary drawer
//!
//! Shows whatever summary the screen last pushed.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_summary_lines;
use crate::tui::app::App;

/// Render the summary drawer
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let host = app.screen.host();
    let mut lines = Vec::new();

    match host.summary() {
        Some(summary) => {
            let mut summary_lines =
                format_summary_lines(summary, &app.currency_symbol, &app.long_date_format)
                    .into_iter();
            if let Some(heading) = summary_lines.next() {
                lines.push(Line::from(Span::styled(
                    heading,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
            }
            lines.extend(summary_lines.map(Line::from));
        }
        None => lines.push(Line::from(Span::styled(
            "No summary yet",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let pending = host.pending_undo_count();
    if pending > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} awaiting undo window", pending),
            Style::default().fg(Color::Green),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
