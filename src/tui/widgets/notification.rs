//! Toast notifications and pending undo confirmations
//!
//! Notifications carry their own lifetime; the undo queue pairs each
//! confirmation toast with the token that reverses it.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::entry::{Confirmation, UndoToken};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// An expense was recorded and can still be reversed
    Recorded,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Recorded => Color::Green,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Recorded => "+",
            Self::Error => "x",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Set how long the notification stays up
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the notification has expired at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Whole seconds left before expiry, rounded up
    pub fn seconds_left(&self, now: Instant) -> u64 {
        let left = self
            .duration
            .saturating_sub(now.saturating_duration_since(self.created_at));
        left.as_millis().div_ceil(1000) as u64
    }
}

/// A recorded-expense toast and the token that reverses it
#[derive(Debug)]
pub struct PendingUndo {
    pub notification: Notification,
    pub token: UndoToken,
}

/// Outstanding confirmations, oldest first
#[derive(Debug, Default)]
pub struct UndoQueue {
    pending: Vec<PendingUndo>,
}

impl UndoQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a confirmation that stays reversible for `window`
    pub fn push(&mut self, confirmation: Confirmation, window: Duration) {
        let notification =
            Notification::new(confirmation.message, NotificationType::Recorded).with_duration(window);
        self.pending.push(PendingUndo {
            notification,
            token: confirmation.token,
        });
    }

    /// Drop every confirmation whose window has closed; returns how many.
    ///
    /// Dropping the token is what commits the expense.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.pending.len();
        self.pending
            .retain(|pending| !pending.notification.is_expired_at(now));
        before - self.pending.len()
    }

    /// Remove the most recent confirmation
    pub fn take_newest(&mut self) -> Option<PendingUndo> {
        self.pending.pop()
    }

    /// Put back a confirmation whose undo did not go through. It keeps its
    /// original window.
    pub fn restore(&mut self, pending: PendingUndo) {
        self.pending.push(pending);
    }

    /// The most recent confirmation's toast
    pub fn newest(&self) -> Option<&Notification> {
        self.pending.last().map(|pending| &pending.notification)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

/// One-line rendering of a notification for the status bar
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    now: Instant,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification, now: Instant) -> Self {
        Self { notification, now }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.notification_type;
        let color = kind.color();

        let mut spans = vec![
            Span::styled(
                format!(" {} ", kind.icon()),
                Style::default().fg(Color::Black).bg(color),
            ),
            Span::raw(" "),
            Span::styled(
                self.notification.message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ];

        if kind == NotificationType::Recorded {
            spans.push(Span::styled(
                format!("  u:Undo ({}s)", self.notification.seconds_left(self.now)),
                Style::default().fg(Color::Yellow),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn confirmation(message: &str) -> Confirmation {
        Confirmation {
            message: message.to_string(),
            token: UndoToken::new(ExpenseId::new(), "5".to_string()),
        }
    }

    #[test]
    fn test_notification_expiry() {
        let n = Notification::info("Saved").with_duration(Duration::from_secs(2));
        assert!(!n.is_expired_at(n.created_at + Duration::from_millis(1999)));
        assert!(n.is_expired_at(n.created_at + Duration::from_secs(2)));
    }

    #[test]
    fn test_seconds_left_rounds_up() {
        let n = Notification::info("Saved").with_duration(Duration::from_secs(4));
        assert_eq!(n.seconds_left(n.created_at), 4);
        assert_eq!(n.seconds_left(n.created_at + Duration::from_millis(2500)), 2);
        assert_eq!(n.seconds_left(n.created_at + Duration::from_secs(9)), 0);
    }

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Info.color(), Color::Blue);
        assert_eq!(NotificationType::Recorded.color(), Color::Green);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }

    #[test]
    fn test_undo_queue_newest_first() {
        let mut queue = UndoQueue::new();
        assert!(queue.take_newest().is_none());

        queue.push(confirmation("first"), Duration::from_secs(4));
        queue.push(confirmation("second"), Duration::from_secs(4));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.newest().unwrap().message, "second");
        queue.take_newest().unwrap();
        assert_eq!(queue.newest().unwrap().message, "first");
    }

    #[test]
    fn test_restored_confirmation_keeps_its_window() {
        let mut queue = UndoQueue::new();
        queue.push(confirmation("only"), Duration::from_secs(4));
        let pending = queue.take_newest().unwrap();
        let created_at = pending.notification.created_at;

        queue.restore(pending);

        assert_eq!(queue.newest().unwrap().created_at, created_at);
        assert_eq!(queue.expire(created_at + Duration::from_secs(4)), 1);
    }

    #[test]
    fn test_undo_queue_expiry_drops_tokens() {
        let mut queue = UndoQueue::new();
        queue.push(confirmation("short"), Duration::from_secs(1));
        queue.push(confirmation("long"), Duration::from_secs(10));

        let later = Instant::now() + Duration::from_secs(5);
        assert_eq!(queue.expire(later), 1);
        assert_eq!(queue.newest().unwrap().message, "long");

        assert_eq!(queue.expire(later + Duration::from_secs(10)), 1);
        assert!(queue.is_empty());
    }
}
