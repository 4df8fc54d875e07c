//! Report overlay
//!
//! Read-only summary for the date the screen navigated to.

use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::format_summary_lines;
use crate::host::ExpenseRepository;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the report for `date`
pub fn render(frame: &mut Frame, app: &App, date: NaiveDate) {
    let area = centered_rect_fixed(44, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Report ")
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let mut lines = vec![Line::from("")];
    match app.screen.repo().load_summary(date) {
        Ok(summary) => {
            let mut summary_lines =
                format_summary_lines(&summary, &app.currency_symbol, &app.long_date_format)
                    .into_iter();
            if let Some(heading) = summary_lines.next() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", heading),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
            }
            lines.extend(summary_lines.map(|line| Line::from(format!("  {}", line))));
        }
        Err(e) => lines.push(Line::from(Span::styled(
            format!("  {}", e),
            Style::default().fg(Color::Red),
        ))),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
