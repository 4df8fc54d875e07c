//! Text targets and change observers for the numeric pad

/// An editable text target the keypad writes into
pub trait NumpadEditable {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
}

/// Receives every accepted change, synchronously and in order
pub trait TextObserver {
    fn on_text_changed(&mut self, text: &str);
}

/// The screen's amount field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountField {
    text: String,
}

impl AmountField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl NumpadEditable for AmountField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

/// Observer that ignores changes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TextObserver for NoopObserver {
    fn on_text_changed(&mut self, _text: &str) {}
}

/// Keeps a copy of the latest text, for a secondary display such as the
/// collapsed title bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorText {
    text: String,
    updates: usize,
}

impl MirrorText {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of notifications received
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl TextObserver for MirrorText {
    fn on_text_changed(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.updates += 1;
    }
}
