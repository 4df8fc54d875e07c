//! Category grid view
//!
//! Four columns, two lines per row. The grid reports how many rows fit back
//! to the app, which keeps the selection visible and drives the title bar.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, GRID_COLUMNS};

const ROW_HEIGHT: u16 = 2;

/// Render the category grid
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = if app.scroll_range() > 0 {
        format!(
            " Categories ({}/{}) ",
            app.scroll_offset + 1,
            app.scroll_range() + 1
        )
    } else {
        " Categories ".to_string()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.sync_grid_viewport(usize::from(inner.height / ROW_HEIGHT));

    let categories = app.screen.host().categories();
    if categories.is_empty() {
        let empty = Paragraph::new("No categories configured")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let cell_width = inner.width / GRID_COLUMNS as u16;
    let first = app.scroll_offset * GRID_COLUMNS;
    let last = (first + app.visible_rows * GRID_COLUMNS).min(categories.len());

    for (index, category) in categories.iter().enumerate().take(last).skip(first) {
        let row = ((index - first) / GRID_COLUMNS) as u16;
        let column = (index % GRID_COLUMNS) as u16;
        let cell = Rect::new(
            inner.x + column * cell_width,
            inner.y + row * ROW_HEIGHT,
            cell_width,
            1,
        );

        let style = if index == app.selected_category_index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let label = Line::from(vec![
            Span::styled(format!(" [{}] ", category.icon), style.fg(Color::Yellow)),
            Span::styled(format!("{} ", category.title), style),
        ]);
        frame.render_widget(Paragraph::new(label), cell);
    }
}
