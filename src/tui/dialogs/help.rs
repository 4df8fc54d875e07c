//! Help dialog
//!
//! Shows the entry screen's keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Amount"),
        Line::from(""),
        key_line("0-9", "Type a digit"),
        key_line(". or ,", "Decimal separator"),
        key_line("Backspace", "Delete last character"),
        key_line("c/Del", "Clear the amount"),
        Line::from(""),
        section("Categories"),
        Line::from(""),
        key_line("h/j/k/l", "Move selection (or arrow keys)"),
        key_line("Enter", "Record amount for selected category"),
        key_line("u", "Undo the last recorded expense"),
        Line::from(""),
        section("Screen"),
        Line::from(""),
        key_line("d", "Change the expense date"),
        key_line("r", "Report for the selected date"),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit application"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
