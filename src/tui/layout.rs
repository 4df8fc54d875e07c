//! Layout definitions for the TUI
//!
//! Title bar on top, the entry column and the summary drawer side by side,
//! status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the entry screen
pub struct ScreenLayout {
    /// Date label and collapsing title detail
    pub title_bar: Rect,
    /// Typed amount
    pub amount: Rect,
    /// Keypad legend
    pub numpad: Rect,
    /// Category grid
    pub categories: Rect,
    /// Summary drawer
    pub drawer: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl ScreenLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(8),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(40),    // Entry column
                Constraint::Length(30), // Drawer (fixed width)
            ])
            .split(vertical[1]);

        let entry = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Amount
                Constraint::Length(6), // Numpad legend
                Constraint::Min(3),    // Categories
            ])
            .split(horizontal[0]);

        Self {
            title_bar: vertical[0],
            amount: entry[0],
            numpad: entry[1],
            categories: entry[2],
            drawer: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
