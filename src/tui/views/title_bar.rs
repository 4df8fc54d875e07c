//! Title bar view
//!
//! Shows the selected date, and the typed amount as title detail while the
//! grid is scrolled to the top. A terminal cannot blend, so the fade is
//! approximated in three steps.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Style for the title detail at `alpha`, or `None` while it is invisible
pub fn detail_style(alpha: f32) -> Option<Style> {
    if alpha < 0.34 {
        None
    } else if alpha < 0.67 {
        Some(Style::default().fg(Color::DarkGray))
    } else {
        Some(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    }
}

/// Render the title bar
pub fn render(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let block = Block::default()
        .title(" Outlay ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let date = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(app.screen.date_label(), Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(date, inner);

    let amount = app.screen.title_amount();
    if amount.is_empty() {
        return;
    }
    if let Some(style) = detail_style(app.screen.title_alpha(now)) {
        let detail = Paragraph::new(Line::from(Span::styled(
            format!("{}{} ", app.currency_symbol, amount),
            style,
        )))
        .alignment(Alignment::Right);
        frame.render_widget(detail, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_style_steps() {
        assert_eq!(detail_style(0.0), None);
        assert_eq!(detail_style(0.5).unwrap().fg, Some(Color::DarkGray));
        assert_eq!(detail_style(1.0).unwrap().fg, Some(Color::White));
    }
}
