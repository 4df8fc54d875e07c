//! Date picker dialog
//!
//! Takes a `YYYY-MM-DD` date. Whether the date exists is decided by the
//! screen when it is confirmed, not here.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Split `YYYY-MM-DD` into a (year, month, day) triple; month is 1-based
pub fn parse_date_triple(input: &str) -> Option<(i32, u32, u32)> {
    let mut parts = input.trim().split('-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

/// Render the date dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(36, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Expense Date ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1);
    frame.render_widget(&app.date_input, input_area);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Set  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]));
    let hint_area = Rect::new(inner.x + 1, inner.y + 3, inner.width.saturating_sub(2), 1);
    frame.render_widget(hints, hint_area);
}
