//! Single-line text input
//!
//! Used by the date dialog. Only ASCII characters accepted by the input's
//! filter are inserted, and the content never grows past `max_len`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A text input field with a cursor
#[derive(Debug, Clone)]
pub struct TextInput {
    content: String,
    cursor: usize,
    max_len: usize,
    accepts: fn(char) -> bool,
    label: String,
    placeholder: String,
}

fn any_char(_: char) -> bool {
    true
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            max_len: 64,
            accepts: any_char,
            label: String::new(),
            placeholder: String::new(),
        }
    }

    /// Input for `YYYY-MM-DD` dates
    pub fn date() -> Self {
        Self::new()
            .label("Date")
            .placeholder("YYYY-MM-DD")
            .max_len(10)
            .accepts(|c| c.is_ascii_digit() || c == '-')
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn accepts(mut self, accepts: fn(char) -> bool) -> Self {
        self.accepts = accepts;
        self
    }

    /// Replace the content and put the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        self.content = value
            .chars()
            .filter(|c| c.is_ascii() && (self.accepts)(*c))
            .take(self.max_len)
            .collect();
        self.cursor = self.content.len();
    }

    /// Insert a character at the cursor; returns false if it was refused
    pub fn insert(&mut self, c: char) -> bool {
        if !c.is_ascii() || !(self.accepts)(c) || self.content.len() >= self.max_len {
            return false;
        }
        self.content.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.len() as u16 + 2
        };

        if label_width > 0 {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let input_start = area.x + label_width;
        if self.content.is_empty() {
            buf.set_string(
                input_start,
                area.y,
                &self.placeholder,
                Style::default().fg(Color::DarkGray),
            );
        } else {
            buf.set_string(input_start, area.y, &self.content, Style::default().fg(Color::White));
        }

        let cursor_x = input_start + self.cursor as u16;
        if cursor_x < area.x + area.width {
            let cursor_char = self.content[self.cursor..].chars().next().unwrap_or('_');
            buf.set_string(
                cursor_x,
                area.y,
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            );
        }
    }
}
