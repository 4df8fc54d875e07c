//! Amount field and keypad legend

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Shift `area` sideways by `offset` cells, staying inside `bounds`
fn shifted(area: Rect, offset: i16, bounds: Rect) -> Rect {
    let x = (i32::from(area.x) + i32::from(offset))
        .clamp(i32::from(bounds.x), i32::from(bounds.x + bounds.width.saturating_sub(area.width)));
    Rect {
        x: u16::try_from(x).unwrap_or(area.x),
        ..area
    }
}

/// Render the typed amount; the field shakes after a rejected input
pub fn render_amount(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let shake = app.screen.shake();
    let shaking = shake.is_shaking(now);

    let border_color = if shaking { Color::Red } else { Color::Cyan };
    let block = Block::default()
        .title(" Amount ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let text = app.screen.amount_text();
    let line = if text.is_empty() {
        Line::from(Span::styled(
            format!("{}0", app.currency_symbol),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format!("{}{}", app.currency_symbol, text),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
    };

    let field_area = Rect {
        width: area.width.saturating_sub(2),
        x: area.x + 1,
        ..area
    };
    let paragraph = Paragraph::new(line).block(block).alignment(Alignment::Right);
    frame.render_widget(paragraph, shifted(field_area, shake.offset(now), area));
}

/// Render the keypad legend
pub fn render_numpad(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Keypad ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let key = |label: &'static str| Span::styled(format!(" {:^3} ", label), Style::default().fg(Color::Cyan));
    let rows = [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], [".", "0", "<-"]];
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| Line::from(row.iter().map(|label| key(*label)).collect::<Vec<_>>()))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_stays_in_bounds() {
        let bounds = Rect::new(0, 0, 20, 3);
        let field = Rect::new(1, 0, 18, 3);
        assert_eq!(shifted(field, 1, bounds).x, 2);
        assert_eq!(shifted(field, -1, bounds).x, 0);
        assert_eq!(shifted(field, 5, bounds).x, 2);
        assert_eq!(shifted(field, 0, bounds), field);
    }
}
